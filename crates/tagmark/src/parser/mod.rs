//! The markup parser.
//!
//! This module contains the tokenizer, tag tokens, rule resolution, the frame
//! stack and output assembly, tied together by [`MarkupParser`].

mod output;
mod resolver;
mod stack;
mod tag;
mod tokenizer;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::context::ParseContext;
use crate::diagnostic::Parsed;
use crate::error::MarkupError;
use crate::markup::{Markup, canonical_tag};
use crate::rich_text::RichText;
use crate::value::Attributes;

pub use output::OutputBuilder;
pub use resolver::RuleSet;
pub use tag::{AttributeIter, TagAttribute, TagToken};
pub use tokenizer::{Delimiters, Token, Tokenizer};

use stack::FrameStack;

/// Identifies a [`MarkupParser`] without owning it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParserId(u64);

impl ParserId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        ParserId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Parses tag markup into [`RichText`] using registered [`Markup`] rules.
///
/// Registration goes through `&self`, so a parser can be shared behind an
/// `Arc` and extended while other threads parse with it. Each parse works on
/// a snapshot of the rules taken when it starts and keeps all of its working
/// state (context, frames, output) to itself.
///
/// # Examples
///
/// ```
/// use tagmark::{Configuration, Markup, MarkupError, MarkupParser, ParseContext};
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
///
/// let parser = MarkupParser::new();
/// parser.register(Bold).unwrap();
///
/// let text = parser.parse("plain [b]bold[/b]", Default::default()).unwrap();
/// assert_eq!(text.text(), "plain bold");
/// assert_eq!(text.runs().len(), 2);
/// ```
pub struct MarkupParser {
    id: ParserId,
    delimiters: Delimiters,
    rules: RwLock<Arc<RuleSet>>,
}

impl MarkupParser {
    /// Create a parser with the default `[`, `]`, `/`, `\` delimiters.
    pub fn new() -> Self {
        Self::with_delimiters(Delimiters::default())
    }

    /// Create a parser with custom delimiters.
    pub fn with_delimiters(delimiters: Delimiters) -> Self {
        Self {
            id: ParserId::next(),
            delimiters,
            rules: RwLock::new(Arc::new(RuleSet::new())),
        }
    }

    /// The id parse contexts report for this parser.
    pub fn id(&self) -> ParserId {
        self.id
    }

    /// The delimiters this parser tokenizes with.
    pub fn delimiters(&self) -> Delimiters {
        self.delimiters
    }

    /// Register a markup under its canonical tag.
    ///
    /// Fails with [`MarkupError::DuplicateTag`] if the tag is taken; the
    /// existing registration is left untouched.
    pub fn register(&self, markup: impl Markup + 'static) -> Result<(), MarkupError> {
        self.register_shared(Arc::new(markup))
    }

    /// Register a markup that is already shared.
    pub fn register_shared(&self, markup: Arc<dyn Markup>) -> Result<(), MarkupError> {
        let tag = canonical_tag(markup.tag());
        let mut rules = self.rules.write().unwrap_or_else(PoisonError::into_inner);
        Arc::make_mut(&mut rules).insert(markup)?;
        log::debug!("registered markup `{}`", tag);
        Ok(())
    }

    /// Remove the markup registered under `tag`.
    pub fn unregister(&self, tag: &str) -> Option<Arc<dyn Markup>> {
        let mut rules = self.rules.write().unwrap_or_else(PoisonError::into_inner);
        let removed = Arc::make_mut(&mut rules).remove(tag);
        if removed.is_some() {
            log::debug!("unregistered markup `{}`", canonical_tag(tag));
        }
        removed
    }

    /// The markup registered under exactly `tag`.
    pub fn markup(&self, tag: &str) -> Option<Arc<dyn Markup>> {
        self.snapshot().get(tag).cloned()
    }

    /// Resolve a tag the way a parse would.
    pub fn resolve(&self, tag: &str) -> Option<Arc<dyn Markup>> {
        self.snapshot().resolve(tag).cloned()
    }

    /// Registered tags, in registration order.
    pub fn tags(&self) -> Vec<String> {
        self.snapshot().tags().map(str::to_string).collect()
    }

    /// The current rule set.
    pub fn snapshot(&self) -> Arc<RuleSet> {
        let rules = self.rules.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&rules)
    }

    /// Parse markup into rich text.
    ///
    /// `base` seeds the parse context. Malformed markup never fails the
    /// parse; only a failing markup hook does.
    pub fn parse(&self, input: &str, base: Attributes) -> Result<RichText, MarkupError> {
        Ok(self.parse_with_diagnostics(input, base)?.rich_text)
    }

    /// Parse markup, also reporting what had to be recovered.
    pub fn parse_with_diagnostics(
        &self,
        input: &str,
        base: Attributes,
    ) -> Result<Parsed, MarkupError> {
        let rules = self.snapshot();
        let context = ParseContext::new(base, Arc::clone(&rules), self.id);
        let mut stack = FrameStack::new(input, rules, context);

        for token in Tokenizer::new(input, self.delimiters) {
            stack.process_token(token)?;
        }

        stack.finish()
    }
}

impl Default for MarkupParser {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MarkupParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkupParser")
            .field("id", &self.id)
            .field("delimiters", &self.delimiters)
            .field("rules", &self.snapshot())
            .finish()
    }
}
