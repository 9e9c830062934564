//! Text style markups.
//!
//! Each style markup sets one boolean attribute over its range.

use tagmark::parser::TagToken;
use tagmark::{Configuration, Markup, MarkupError, ParseContext, Value};

/// Sets `key` to `true` on the enclosed text.
#[derive(Clone, Debug)]
pub struct StyleMarkup {
    tag: String,
    key: String,
}

impl StyleMarkup {
    pub fn new(tag: &str, key: impl Into<String>) -> Self {
        Self {
            tag: tagmark::canonical_tag(tag),
            key: key.into(),
        }
    }

    /// `[b]` sets `bold`.
    pub fn bold() -> Self {
        Self::new("b", "bold")
    }

    /// `[i]` sets `italic`.
    pub fn italic() -> Self {
        Self::new("i", "italic")
    }

    /// `[u]` sets `underline`.
    pub fn underline() -> Self {
        Self::new("u", "underline")
    }

    /// `[s]` sets `strike`.
    pub fn strike() -> Self {
        Self::new("s", "strike")
    }

    /// The attribute key this markup sets.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Markup for StyleMarkup {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn on_open(
        &self,
        _tag: &TagToken<'_>,
        configuration: &mut Configuration,
        _context: &mut ParseContext,
    ) -> Result<(), MarkupError> {
        configuration.insert(self.key.clone(), Value::Bool(true));
        Ok(())
    }
}
