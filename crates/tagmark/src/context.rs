//! Per-parse shared state.
//!
//! A [`ParseContext`] is created at the start of every parse, handed to every
//! markup hook invoked during that parse, and dropped when the parse returns.
//! Nothing in it outlives the call.

use std::sync::Arc;

use crate::markup::Markup;
use crate::parser::{ParserId, RuleSet};
use crate::value::{Attributes, Value};

/// Mutable state shared by all markups during one parse.
///
/// Besides the key/value store, the context gives hooks a non-owning view of
/// the parser they run under: its [`ParserId`] and the rule snapshot the
/// parse resolves tags against.
#[derive(Default)]
pub struct ParseContext {
    values: Attributes,
    rules: Arc<RuleSet>,
    parser_id: Option<ParserId>,
}

impl ParseContext {
    /// Create a context seeded with `base`.
    pub fn new(base: Attributes, rules: Arc<RuleSet>, parser_id: ParserId) -> Self {
        Self {
            values: base,
            rules,
            parser_id: Some(parser_id),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.values.get_mut(key)
    }

    /// Insert a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The integer stored under `key`, if any.
    pub fn integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_integer)
    }

    /// The text stored under `key`, if any.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Increment the counter under `key` and return its previous value.
    ///
    /// A missing or non-integer entry counts as `0`. The counter saturates at
    /// `i64::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagmark::ParseContext;
    ///
    /// let mut context = ParseContext::default();
    /// assert_eq!(context.increment("count"), 0);
    /// assert_eq!(context.increment("count"), 1);
    /// assert_eq!(context.integer("count"), Some(2));
    /// ```
    pub fn increment(&mut self, key: &str) -> i64 {
        let current = self.integer(key).unwrap_or(0);
        self.values.insert(key.to_string(), Value::Integer(current.saturating_add(1)));
        current
    }

    /// All values in the context.
    pub fn values(&self) -> &Attributes {
        &self.values
    }

    /// The parser this parse runs under; `None` for a detached context.
    pub fn parser_id(&self) -> Option<ParserId> {
        self.parser_id
    }

    /// Resolve `tag` against the rules of the running parse.
    ///
    /// Lets a markup reach a sibling rule without holding a reference to the
    /// parser itself.
    pub fn markup_for(&self, tag: &str) -> Option<Arc<dyn Markup>> {
        self.rules.resolve(tag).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_from_base() {
        let mut base = Attributes::new();
        base.insert("indent".into(), Value::Integer(2));
        let context = ParseContext::new(base, Arc::new(RuleSet::new()), ParserId::next());
        assert_eq!(context.integer("indent"), Some(2));
        assert!(context.parser_id().is_some());
    }

    #[test]
    fn increment_replaces_non_integers() {
        let mut context = ParseContext::default();
        context.insert("n", "text");
        assert_eq!(context.increment("n"), 0);
        assert_eq!(context.integer("n"), Some(1));
    }

    #[test]
    fn increment_saturates() {
        let mut context = ParseContext::default();
        context.insert("n", i64::MAX);
        assert_eq!(context.increment("n"), i64::MAX);
        assert_eq!(context.integer("n"), Some(i64::MAX));
    }

    #[test]
    fn insert_and_remove() {
        let mut context = ParseContext::default();
        assert_eq!(context.insert("k", true), None);
        assert_eq!(context.insert("k", false), Some(Value::Bool(true)));
        assert!(context.contains_key("k"));
        assert_eq!(context.remove("k"), Some(Value::Bool(false)));
        assert!(context.get("k").is_none());
        assert!(context.markup_for("k").is_none());
    }
}
