//! Color markups.
//!
//! `[color red]`, `[color value="#ff8800"]` and `[color rgb(1, 2, 3)]` style
//! the enclosed text. An unparseable color fails the parse.

use tagmark::parser::TagToken;
use tagmark::{Color, Configuration, Markup, MarkupError, ParseContext, Value};

/// Sets a color attribute from the tag's `value` attribute or bare argument.
#[derive(Clone, Debug)]
pub struct ColorMarkup {
    tag: &'static str,
    key: &'static str,
}

impl ColorMarkup {
    /// `[color ...]` sets `color`.
    pub fn foreground() -> Self {
        Self {
            tag: "color",
            key: "color",
        }
    }

    /// `[background ...]` sets `background`.
    pub fn background() -> Self {
        Self {
            tag: "background",
            key: "background",
        }
    }

    /// The color text of a tag: `value="..."` first, then the bare argument.
    ///
    /// The bare form keeps everything after the name so that
    /// `[color rgb(1, 2, 3)]` reads as one color.
    fn color_text<'a>(tag: &TagToken<'a>) -> Option<&'a str> {
        tag.attribute("value")
            .or_else(|| Some(tag.attributes()).filter(|rest| !rest.is_empty()))
    }
}

impl Markup for ColorMarkup {
    fn tag(&self) -> &str {
        self.tag
    }

    fn on_open(
        &self,
        tag: &TagToken<'_>,
        configuration: &mut Configuration,
        _context: &mut ParseContext,
    ) -> Result<(), MarkupError> {
        let text = Self::color_text(tag)
            .ok_or_else(|| MarkupError::hook(self.tag, "missing color value"))?;
        let color = Color::parse(text).map_err(|e| MarkupError::hook(self.tag, e.to_string()))?;

        configuration.insert(self.key.to_string(), Value::Color(color));
        Ok(())
    }
}
