//! Pluggable tag markup parser producing attributed rich text.
//!
//! This crate scans text containing inline tags such as `[b]bold[/b]` and
//! produces [`RichText`]: runs of text, each carrying an attribute map. The
//! crate has no tag vocabulary of its own; every tag is interpreted by a
//! registered [`Markup`] rule.
//!
//! # Overview
//!
//! - `[tag]text[/tag]` - apply the rule registered for `tag`
//! - `[tag key="value"]text[/tag]` - parameterized tag
//! - `[/]` - close the innermost open tag
//! - `\[`, `\]`, `\\` - literal delimiters
//!
//! Input that cannot be applied is never an error: unknown tags and stray
//! closing tags stay in the output as text, and tags left open at the end of
//! the input are closed there. [`MarkupParser::parse_with_diagnostics`]
//! reports what was recovered.
//!
//! # Rule lifecycle
//!
//! For each opening tag the resolved rule fills a fresh [`Configuration`] in
//! [`Markup::on_open`] and supplies a prefix. At the matching closing tag it
//! transforms the enclosed text, gets a last look at the configuration in
//! [`Markup::on_close`], and supplies a suffix. The configuration becomes the
//! attributes of `prefix + content + suffix`.
//!
//! Rules are shared across parses and must not keep per-parse state.
//! State that must live across hooks goes into the [`ParseContext`], which
//! is created empty (or seeded from the base attributes) for every parse.
//!
//! # Usage
//!
//! ```
//! use tagmark::{Configuration, Markup, MarkupError, MarkupParser, ParseContext, Value};
//! use tagmark::parser::TagToken;
//!
//! struct Emphasis;
//!
//! impl Markup for Emphasis {
//!     fn tag(&self) -> &str {
//!         "em"
//!     }
//!
//!     fn on_open(
//!         &self,
//!         _tag: &TagToken<'_>,
//!         configuration: &mut Configuration,
//!         _context: &mut ParseContext,
//!     ) -> Result<(), MarkupError> {
//!         configuration.insert("italic".into(), Value::Bool(true));
//!         Ok(())
//!     }
//! }
//!
//! let parser = MarkupParser::new();
//! parser.register(Emphasis).unwrap();
//!
//! let text = parser.parse("[em]Hello[/em] World", Default::default()).unwrap();
//! assert_eq!(text.text(), "Hello World");
//! assert_eq!(text.runs()[0].get("italic"), Some(&Value::Bool(true)));
//! ```

pub mod color;
pub mod context;
pub mod diagnostic;
pub mod error;
pub mod markup;
pub mod parser;
pub mod rich_text;
pub mod value;

// Re-export main types at crate root
pub use color::Color;
pub use context::ParseContext;
pub use diagnostic::{Diagnostic, DiagnosticKind, Parsed};
pub use error::{ColorParseError, MarkupError, Result};
pub use markup::{Markup, canonical_tag, tag_matches};
pub use parser::{Delimiters, MarkupParser, ParserId};
pub use rich_text::{RichText, Run};
pub use value::{Attributes, Configuration, Value};
