//! Output accumulation.
//!
//! Runs are appended in input order. A frame remembers where its content
//! starts; when it closes, its runs are taken back, wrapped in the frame's
//! prefix and suffix, stamped with its configuration, and appended again.

use crate::rich_text::{RichText, Run};
use crate::value::Configuration;

/// Accumulates the runs of one parse.
#[derive(Debug, Default)]
pub struct OutputBuilder {
    runs: Vec<Run>,
}

impl OutputBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Position a new frame's content starts at.
    pub fn mark(&self) -> usize {
        self.runs.len()
    }

    /// Append unattributed text.
    pub fn push_text(&mut self, text: &str) {
        if !text.is_empty() {
            self.runs.push(Run::plain(text));
        }
    }

    /// Append one unattributed character.
    pub fn push_char(&mut self, c: char) {
        self.runs.push(Run::plain(c.to_string()));
    }

    /// Text accumulated since `mark`.
    pub fn text_since(&self, mark: usize) -> String {
        self.runs[mark..].iter().map(|run| run.text.as_str()).collect()
    }

    /// Close the range starting at `mark`.
    ///
    /// If `body` differs from the accumulated text, the accumulated runs are
    /// replaced by a single run holding `body`. The configuration is then
    /// applied to the prefix, body and suffix, overwriting keys that nested
    /// frames already set.
    pub fn wrap(
        &mut self,
        mark: usize,
        prefix: String,
        body: String,
        suffix: String,
        configuration: &Configuration,
    ) {
        let mut inner = self.runs.split_off(mark);
        if body != concat(&inner) {
            inner = vec![Run::plain(body)];
        }

        let wrapped = std::iter::once(Run::plain(prefix))
            .chain(inner)
            .chain(std::iter::once(Run::plain(suffix)))
            .filter(|run| !run.text.is_empty())
            .map(|mut run| {
                run.attributes
                    .extend(configuration.iter().map(|(k, v)| (k.clone(), v.clone())));
                run
            });
        self.runs.extend(wrapped);
    }

    /// Assemble the final rich text.
    pub fn finish(self) -> RichText {
        RichText::from_runs(self.runs)
    }
}

fn concat(runs: &[Run]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}
