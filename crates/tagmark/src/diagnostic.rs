//! Recoverable conditions found while parsing.
//!
//! None of these abort a parse. They are collected so that callers who want
//! strict input can reject it.

use std::fmt;
use std::ops::Range;

use crate::error::MarkupError;
use crate::rich_text::RichText;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// No markup handles the tag; it was kept as text.
    UnknownTag,
    /// A closing tag did not close the innermost open frame; kept as text.
    UnmatchedClosingTag,
    /// A tag was still open at end of input and was closed there.
    UnclosedTag,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DiagnosticKind::UnknownTag => "unknown tag",
            DiagnosticKind::UnmatchedClosingTag => "unmatched closing tag",
            DiagnosticKind::UnclosedTag => "unclosed tag",
        };
        f.write_str(text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// The tag text between the delimiters.
    pub tag: String,
    /// Byte range of the tag in the input, delimiters included.
    pub span: Range<usize>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, tag: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind,
            tag: tag.into(),
            span,
        }
    }
}

impl From<Diagnostic> for MarkupError {
    fn from(diagnostic: Diagnostic) -> Self {
        MarkupError::Malformed {
            kind: diagnostic.kind,
            tag: diagnostic.tag,
            offset: diagnostic.span.start,
        }
    }
}

/// A parse result together with its diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed {
    pub rich_text: RichText,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    /// True when the input was well formed.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Count diagnostics of one kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    /// Reject the input if anything had to be recovered.
    ///
    /// The first diagnostic, in input order of discovery, becomes the error.
    pub fn into_strict(self) -> Result<RichText, MarkupError> {
        match self.diagnostics.into_iter().next() {
            Some(diagnostic) => Err(diagnostic.into()),
            None => Ok(self.rich_text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_conversion() {
        let clean = Parsed {
            rich_text: RichText::plain("x"),
            diagnostics: Vec::new(),
        };
        assert!(clean.is_clean());
        assert_eq!(clean.into_strict().unwrap().text(), "x");

        let dirty = Parsed {
            rich_text: RichText::plain("[x]"),
            diagnostics: vec![Diagnostic::new(DiagnosticKind::UnknownTag, "x", 0..3)],
        };
        assert_eq!(dirty.count(DiagnosticKind::UnknownTag), 1);
        assert_eq!(
            dirty.into_strict(),
            Err(MarkupError::Malformed {
                kind: DiagnosticKind::UnknownTag,
                tag: "x".to_string(),
                offset: 0,
            })
        );
    }

    #[test]
    fn error_message() {
        let error: MarkupError = Diagnostic::new(DiagnosticKind::UnclosedTag, "b", 4..7).into();
        assert_eq!(error.to_string(), "unclosed tag `b` at byte 4");
    }
}
