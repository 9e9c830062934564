//! RichText result type.
//!
//! The result of a parse: the output text split into runs, each carrying the
//! attributes that apply to it.

use std::fmt;
use std::ops::Range;

use crate::value::{Attributes, Value};

/// A stretch of text sharing one attribute map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Run {
    pub text: String,
    pub attributes: Attributes,
}

impl Run {
    pub fn new(text: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            text: text.into(),
            attributes,
        }
    }

    /// A run without attributes.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Attributes::new())
    }

    /// Get an attribute by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn is_plain(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Attributed text.
///
/// Runs are non-empty, in input order, and adjacent runs never carry equal
/// attributes.
///
/// # Examples
///
/// ```
/// use tagmark::{MarkupParser, RichText};
///
/// let parsed = MarkupParser::new().parse("Hello World", Default::default()).unwrap();
/// assert_eq!(parsed, RichText::plain("Hello World"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RichText {
    runs: Vec<Run>,
}

impl RichText {
    /// Build rich text from runs, dropping empty runs and merging neighbours
    /// with equal attributes.
    pub fn from_runs(runs: impl IntoIterator<Item = Run>) -> Self {
        let mut merged: Vec<Run> = Vec::new();

        for run in runs {
            if run.text.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.attributes == run.attributes => last.text.push_str(&run.text),
                _ => merged.push(run),
            }
        }

        Self { runs: merged }
    }

    /// Rich text holding a single unattributed run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::from_runs([Run::plain(text)])
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<Run> {
        self.runs
    }

    /// The full output text.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Length of the output text in bytes.
    pub fn len(&self) -> usize {
        self.runs.iter().map(|run| run.text.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// True if no run carries attributes.
    pub fn is_plain(&self) -> bool {
        self.runs.iter().all(Run::is_plain)
    }

    /// Byte ranges of every run in the output text.
    pub fn ranges(&self) -> impl Iterator<Item = (Range<usize>, &Run)> {
        let mut offset = 0;
        self.runs.iter().map(move |run| {
            let start = offset;
            offset += run.text.len();
            (start..offset, run)
        })
    }

    /// The attributes applying at a byte offset in the output text.
    pub fn attributes_at(&self, offset: usize) -> Option<&Attributes> {
        self.ranges()
            .find(|(range, _)| range.contains(&offset))
            .map(|(_, run)| &run.attributes)
    }
}

impl fmt::Display for RichText {
    /// One line per run: the quoted text followed by its attributes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, run) in self.runs.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:?} {{", run.text)?;
            for (j, (key, value)) in run.attributes.iter().enumerate() {
                let sep = if j == 0 { "" } else { ", " };
                write!(f, "{}{}: {}", sep, key, value)?;
            }
            write!(f, "}}")?;
        }
        Ok(())
    }
}
