//! The markup extension contract.
//!
//! A [`Markup`] is a rule that recognizes a tag and contributes attributes,
//! a prefix, a suffix and a content transform to the text it encloses.
//!
//! Lifecycle for one matched tag pair:
//!
//! 1. [`can_handle_tag`](Markup::can_handle_tag) may be asked whether the rule
//!    matches; it is skipped when the tag matches a registered tag exactly.
//! 2. [`on_open`](Markup::on_open) fills the fresh configuration, then
//!    [`prefix`](Markup::prefix) is captured.
//! 3. At the closing tag, [`transform_content`](Markup::transform_content)
//!    rewrites the enclosed text, [`on_close`](Markup::on_close) runs, then
//!    [`suffix`](Markup::suffix) is captured.
//!
//! One instance serves every match of its tag across all parses, so rules
//! keep no per-parse state of their own; anything that must survive between
//! hooks goes into the [`ParseContext`].

use crate::context::ParseContext;
use crate::error::MarkupError;
use crate::parser::TagToken;
use crate::value::Configuration;

/// A tag rule.
///
/// Only [`tag`](Markup::tag) is required; every hook has a neutral default.
///
/// # Examples
///
/// ```
/// use tagmark::{Configuration, Markup, MarkupError, ParseContext};
/// use tagmark::parser::TagToken;
///
/// struct Bold;
///
/// impl Markup for Bold {
///     fn tag(&self) -> &str {
///         "b"
///     }
///
///     fn on_open(
///         &self,
///         _tag: &TagToken<'_>,
///         configuration: &mut Configuration,
///         _context: &mut ParseContext,
///     ) -> Result<(), MarkupError> {
///         configuration.insert("bold".into(), true.into());
///         Ok(())
///     }
/// }
/// ```
pub trait Markup: Send + Sync {
    /// The tag this rule is registered under.
    ///
    /// Stored lowercased and trimmed; see [`canonical_tag`].
    fn tag(&self) -> &str;

    /// Whether this rule handles `tag`, the canonical text of a tag that did
    /// not match any registered tag exactly (attributes included).
    fn can_handle_tag(&self, tag: &str) -> bool {
        tag_matches(self.tag(), tag)
    }

    fn on_open(
        &self,
        _tag: &TagToken<'_>,
        _configuration: &mut Configuration,
        _context: &mut ParseContext,
    ) -> Result<(), MarkupError> {
        Ok(())
    }

    /// Text inserted before the enclosed content.
    fn prefix(&self, _context: &mut ParseContext) -> Result<String, MarkupError> {
        Ok(String::new())
    }

    /// Rewrite the enclosed content. Identity by default.
    fn transform_content(
        &self,
        content: String,
        _context: &mut ParseContext,
    ) -> Result<String, MarkupError> {
        Ok(content)
    }

    /// Text inserted after the enclosed content.
    fn suffix(&self, _context: &mut ParseContext) -> Result<String, MarkupError> {
        Ok(String::new())
    }

    /// Called with the opening tag when the frame closes, whether by a
    /// closing tag or at end of input.
    fn on_close(
        &self,
        _tag: &TagToken<'_>,
        _configuration: &mut Configuration,
        _context: &mut ParseContext,
    ) -> Result<(), MarkupError> {
        Ok(())
    }
}

/// Lowercase and trim a tag.
pub fn canonical_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// The default tag predicate.
///
/// `tested` matches `own` when they are equal ignoring case, or when `own` is
/// a prefix of `tested` immediately followed by whitespace.
///
/// | tested              | own        | result |
/// |---------------------|------------|--------|
/// | `red`               | `red`      | match  |
/// | `redColor`          | `red`      | no     |
/// | `red`               | `redColor` | no     |
/// | `color red`         | `color`    | match  |
/// | `color value="red"` | `color`    | match  |
pub fn tag_matches(own: &str, tested: &str) -> bool {
    let own = canonical_tag(own);
    let tested = canonical_tag(tested);

    if own.is_empty() {
        return false;
    }

    match tested.strip_prefix(own.as_str()) {
        Some("") => true,
        Some(rest) => rest.starts_with(char::is_whitespace),
        None => false,
    }
}
