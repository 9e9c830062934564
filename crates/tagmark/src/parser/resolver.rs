//! Rule tables and tag resolution.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::MarkupError;
use crate::markup::{Markup, canonical_tag};

/// The registered markups of one parser.
///
/// Markups are kept in registration order, which is also the order the
/// fallback predicates are consulted in. `exact` indexes them by canonical
/// tag.
#[derive(Clone, Default)]
pub struct RuleSet {
    markups: Vec<Arc<dyn Markup>>,
    exact: HashMap<String, usize>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a markup, rejecting a tag that is already registered.
    pub fn insert(&mut self, markup: Arc<dyn Markup>) -> Result<(), MarkupError> {
        let tag = canonical_tag(markup.tag());
        if tag.is_empty() {
            return Err(MarkupError::EmptyTag);
        }
        if self.exact.contains_key(&tag) {
            return Err(MarkupError::DuplicateTag(tag));
        }

        self.exact.insert(tag, self.markups.len());
        self.markups.push(markup);
        Ok(())
    }

    /// Remove the markup registered under `tag`.
    pub fn remove(&mut self, tag: &str) -> Option<Arc<dyn Markup>> {
        let index = self.exact.remove(&canonical_tag(tag))?;
        let removed = self.markups.remove(index);

        for slot in self.exact.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// The markup registered under exactly `tag`.
    pub fn get(&self, tag: &str) -> Option<&Arc<dyn Markup>> {
        self.exact
            .get(&canonical_tag(tag))
            .map(|&index| &self.markups[index])
    }

    /// Resolve a tag to the markup that handles it.
    ///
    /// `tag` is the full tag text, attributes included. An exact match on
    /// the canonical tag name (its first word) wins; otherwise the first
    /// markup, in registration order, whose predicate accepts the whole
    /// canonical text.
    pub fn resolve(&self, tag: &str) -> Option<&Arc<dyn Markup>> {
        let canonical = canonical_tag(tag);
        let name = canonical.split_whitespace().next().unwrap_or_default();
        if let Some(&index) = self.exact.get(name) {
            return Some(&self.markups[index]);
        }

        self.markups
            .iter()
            .find(|markup| markup.can_handle_tag(&canonical))
    }

    /// Registered tags, in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.markups.iter().map(|markup| markup.tag())
    }

    pub fn len(&self) -> usize {
        self.markups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markups.is_empty()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tags()).finish()
    }
}
