//! Built-in markup rules for [`tagmark`] and a process-wide parser registry.
//!
//! | Tag | Rule | Effect |
//! |---|---|---|
//! | `b`, `i`, `u`, `s` | [`StyleMarkup`] | sets `bold`, `italic`, `underline`, `strike` |
//! | `color`, `background` | [`ColorMarkup`] | sets `color` / `background` to a [`tagmark::Color`] |
//! | `list`, `li` | [`ListMarkup`], [`ListItemMarkup`] | bullets or numbers, one item per line |
//! | `upper`, `lower` | [`CaseMarkup`] | rewrites the text case |
//!
//! ```
//! use tagmark::{Attributes, Value};
//!
//! let parser = tagmark_markups::default_parser();
//! let text = parser
//!     .parse("[b]Hi[/b] [color red]there[/color]", Attributes::new())
//!     .unwrap();
//!
//! assert_eq!(text.text(), "Hi there");
//! assert_eq!(text.runs()[0].get("bold"), Some(&Value::Bool(true)));
//! ```

pub mod case;
pub mod color;
pub mod list;
pub mod registry;
pub mod style;

pub use case::{Case, CaseMarkup};
pub use color::ColorMarkup;
pub use list::{LIST_DEPTH, ListItemMarkup, ListMarkup, MAX_LIST_DEPTH};
pub use registry::{
    register_parser, registered_keys, registered_parser, reset, shared_parser, unregister_parser,
};
pub use style::StyleMarkup;

use std::sync::Arc;

use tagmark::{Markup, MarkupParser};

/// Every built-in markup, in registration order.
pub fn builtin_markups() -> Vec<Arc<dyn Markup>> {
    vec![
        Arc::new(StyleMarkup::bold()),
        Arc::new(StyleMarkup::italic()),
        Arc::new(StyleMarkup::underline()),
        Arc::new(StyleMarkup::strike()),
        Arc::new(ColorMarkup::foreground()),
        Arc::new(ColorMarkup::background()),
        Arc::new(ListMarkup::new()),
        Arc::new(ListItemMarkup::new()),
        Arc::new(CaseMarkup::upper()),
        Arc::new(CaseMarkup::lower()),
    ]
}

/// Register every built-in markup on `parser`.
///
/// Stops at the first tag the parser already has a markup for.
pub fn register_builtins(parser: &MarkupParser) -> tagmark::Result<()> {
    for markup in builtin_markups() {
        parser.register_shared(markup)?;
    }
    Ok(())
}

/// A parser with every built-in markup registered.
pub fn default_parser() -> MarkupParser {
    let parser = MarkupParser::new();
    if let Err(e) = register_builtins(&parser) {
        // Built-in tags are distinct, so a fresh parser never gets here.
        log::error!("failed to register built-in markups: {}", e);
    }
    parser
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parser_has_every_builtin() {
        assert_eq!(
            default_parser().tags(),
            vec![
                "b",
                "i",
                "u",
                "s",
                "color",
                "background",
                "list",
                "li",
                "upper",
                "lower"
            ]
        );
    }

    #[test]
    fn register_builtins_rejects_taken_tags() {
        let parser = MarkupParser::new();
        parser.register(StyleMarkup::new("b", "heavy")).unwrap();
        assert_eq!(
            register_builtins(&parser),
            Err(tagmark::MarkupError::DuplicateTag("b".into()))
        );
    }
}
