//! List markups.
//!
//! `[list]` opens a list level and `[li]` emits one item. The level, the
//! ordering flag and the item counter live in the parse context so that
//! nested lists keep independent numbering:
//!
//! ```text
//! [list ordered][li]one[/li][li]two[/li][/list]
//! ```
//!
//! renders as `1. one\n2. two\n`.

use tagmark::parser::TagToken;
use tagmark::{Configuration, Markup, MarkupError, ParseContext, Value};

/// Context key holding the current list depth; also set on item runs.
pub const LIST_DEPTH: &str = "list.depth";

/// Deepest list nesting accepted.
pub const MAX_LIST_DEPTH: i64 = 32;

const BULLET: &str = "\u{2022} ";
const INDENT: &str = "\t";

fn ordered_key(depth: i64) -> String {
    format!("list.{}.ordered", depth)
}

fn count_key(depth: i64) -> String {
    format!("list.{}.count", depth)
}

fn current_depth(context: &ParseContext) -> i64 {
    context.integer(LIST_DEPTH).unwrap_or(0).max(0)
}

fn check_depth(tag: &str, depth: i64) -> Result<i64, MarkupError> {
    if depth > MAX_LIST_DEPTH {
        return Err(MarkupError::hook(
            tag,
            format!("list nesting deeper than {}", MAX_LIST_DEPTH),
        ));
    }
    Ok(depth)
}

/// Opens a list level: `[list]` for bullets, `[list ordered]` or
/// `[list ordered="true"]` for numbers.
#[derive(Clone, Debug, Default)]
pub struct ListMarkup;

impl ListMarkup {
    pub fn new() -> Self {
        Self
    }
}

impl Markup for ListMarkup {
    fn tag(&self) -> &str {
        "list"
    }

    fn on_open(
        &self,
        tag: &TagToken<'_>,
        _configuration: &mut Configuration,
        context: &mut ParseContext,
    ) -> Result<(), MarkupError> {
        let ordered = tag
            .attribute("ordered")
            .is_some_and(|value| value.is_empty() || value.eq_ignore_ascii_case("true"));
        let depth = check_depth(self.tag(), current_depth(context).saturating_add(1))?;

        context.insert(LIST_DEPTH, depth);
        context.insert(ordered_key(depth), ordered);
        context.insert(count_key(depth), 0i64);
        Ok(())
    }

    fn prefix(&self, context: &mut ParseContext) -> Result<String, MarkupError> {
        // A nested list starts on its own line after the parent item text.
        Ok(if current_depth(context) > 1 {
            "\n".to_string()
        } else {
            String::new()
        })
    }

    fn on_close(
        &self,
        _tag: &TagToken<'_>,
        _configuration: &mut Configuration,
        context: &mut ParseContext,
    ) -> Result<(), MarkupError> {
        let depth = current_depth(context);
        context.remove(&ordered_key(depth));
        context.remove(&count_key(depth));
        if depth > 1 {
            context.insert(LIST_DEPTH, depth - 1);
        } else {
            context.remove(LIST_DEPTH);
        }
        Ok(())
    }
}

/// One list item, prefixed with its bullet or number and ended by a newline.
///
/// An item outside any `[list]` renders as a top-level bullet.
#[derive(Clone, Debug, Default)]
pub struct ListItemMarkup;

impl ListItemMarkup {
    pub fn new() -> Self {
        Self
    }
}

impl Markup for ListItemMarkup {
    fn tag(&self) -> &str {
        "li"
    }

    fn on_open(
        &self,
        _tag: &TagToken<'_>,
        configuration: &mut Configuration,
        context: &mut ParseContext,
    ) -> Result<(), MarkupError> {
        let depth = check_depth(self.tag(), current_depth(context).max(1))?;
        configuration.insert(LIST_DEPTH.to_string(), Value::Integer(depth));
        Ok(())
    }

    fn prefix(&self, context: &mut ParseContext) -> Result<String, MarkupError> {
        let depth = current_depth(context).max(1);
        let indent = INDENT.repeat((depth - 1) as usize);

        let ordered = context
            .get(&ordered_key(depth))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let number = context.increment(&count_key(depth)).saturating_add(1);

        Ok(if ordered {
            format!("{}{}. ", indent, number)
        } else {
            format!("{}{}", indent, BULLET)
        })
    }

    fn suffix(&self, _context: &mut ParseContext) -> Result<String, MarkupError> {
        Ok("\n".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagmark::{Attributes, MarkupParser};

    fn parser() -> MarkupParser {
        let parser = MarkupParser::new();
        parser.register(ListMarkup::new()).unwrap();
        parser.register(ListItemMarkup::new()).unwrap();
        parser
    }

    fn render(input: &str) -> String {
        parser().parse(input, Attributes::new()).unwrap().text()
    }

    #[test]
    fn bullet_list() {
        assert_eq!(
            render("[list][li]a[/li][li]b[/li][/list]"),
            "\u{2022} a\n\u{2022} b\n"
        );
    }

    #[test]
    fn ordered_list_counts_items() {
        assert_eq!(
            render(r#"[list ordered="true"][li]a[/li][li]b[/li][li]c[/li][/list]"#),
            "1. a\n2. b\n3. c\n"
        );
        assert_eq!(render("[list ordered][li]a[/li][/list]"), "1. a\n");
        assert_eq!(
            render(r#"[list ordered="false"][li]a[/li][/list]"#),
            "\u{2022} a\n"
        );
    }

    #[test]
    fn nested_lists_number_independently() {
        let text = render(
            "[list ordered][li]a[list ordered][li]x[/li][li]y[/li][/list][/li][li]b[/li][/list]",
        );
        assert_eq!(text, "1. a\n\t1. x\n\t2. y\n\n2. b\n");
    }

    #[test]
    fn item_runs_carry_depth() {
        let text = parser()
            .parse("[list][li]a[list][li]b[/li][/list][/li][/list]", Attributes::new())
            .unwrap();
        let depths: Vec<_> = text
            .runs()
            .iter()
            .map(|run| run.get(LIST_DEPTH).and_then(Value::as_integer))
            .collect();
        // The outer item overwrites the nested item's depth.
        assert_eq!(depths, vec![Some(1)]);
    }

    #[test]
    fn counters_reset_between_parses() {
        let parser = parser();
        let input = "[list ordered][li]a[/li][/list]";
        let first = parser.parse(input, Attributes::new()).unwrap();
        let second = parser.parse(input, Attributes::new()).unwrap();
        assert_eq!(first.text(), "1. a\n");
        assert_eq!(second, first);
    }

    #[test]
    fn seeded_depth_is_bounded() {
        let parser = parser();
        let mut base = Attributes::new();
        base.insert(LIST_DEPTH.to_string(), Value::Integer(i64::MAX));

        for input in ["[list][li]a[/li][/list]", "[li]a[/li]"] {
            assert!(matches!(
                parser.parse(input, base.clone()),
                Err(MarkupError::Hook { .. })
            ));
        }

        base.insert(LIST_DEPTH.to_string(), Value::Integer(-7));
        assert_eq!(
            parser.parse("[list][li]a[/li][/list]", base).unwrap().text(),
            "\u{2022} a\n"
        );
    }

    #[test]
    fn nesting_limit() {
        let deep = "[list]".repeat(MAX_LIST_DEPTH as usize);
        assert!(parser().parse(&deep, Attributes::new()).is_ok());

        let too_deep = "[list]".repeat(MAX_LIST_DEPTH as usize + 1);
        assert_eq!(
            parser().parse(&too_deep, Attributes::new()),
            Err(MarkupError::hook("list", "list nesting deeper than 32"))
        );
    }

    #[test]
    fn item_outside_list_is_a_bullet() {
        assert_eq!(render("[li]x[/li]"), "\u{2022} x\n");
    }
}
