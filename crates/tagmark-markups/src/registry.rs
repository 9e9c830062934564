//! Process-wide parser registry.
//!
//! Applications that want a single parser per purpose (chat messages, help
//! text, ...) register it here under a key and fetch it from anywhere. The
//! registry also owns a lazily built [`shared_parser`] with every built-in
//! markup installed.
//!
//! Everything here is global state. [`reset`] drops all of it and exists
//! mostly for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;
use tagmark::MarkupParser;

use crate::default_parser;

#[derive(Default)]
struct Registry {
    shared: Option<Arc<MarkupParser>>,
    parsers: HashMap<String, Arc<MarkupParser>>,
}

static REGISTRY: Lazy<Mutex<Registry>> = Lazy::new(|| Mutex::new(Registry::default()));

fn registry() -> MutexGuard<'static, Registry> {
    REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The shared default parser, built on first use.
///
/// Returns the same instance until [`reset`] is called.
pub fn shared_parser() -> Arc<MarkupParser> {
    let mut registry = registry();
    let parser = registry.shared.get_or_insert_with(|| {
        log::debug!("building shared markup parser");
        Arc::new(default_parser())
    });
    Arc::clone(parser)
}

/// The parser registered under `key`.
pub fn registered_parser(key: &str) -> Option<Arc<MarkupParser>> {
    registry().parsers.get(key).cloned()
}

/// Register `parser` under `key`, returning the parser it replaces.
pub fn register_parser(key: impl Into<String>, parser: Arc<MarkupParser>) -> Option<Arc<MarkupParser>> {
    let key = key.into();
    log::debug!("registering parser `{}`", key);
    registry().parsers.insert(key, parser)
}

pub fn unregister_parser(key: &str) -> Option<Arc<MarkupParser>> {
    let removed = registry().parsers.remove(key);
    if removed.is_some() {
        log::debug!("unregistered parser `{}`", key);
    }
    removed
}

/// Registered keys, sorted.
pub fn registered_keys() -> Vec<String> {
    let mut keys: Vec<_> = registry().parsers.keys().cloned().collect();
    keys.sort();
    keys
}

/// Drop the shared parser and every registered parser.
///
/// Parsers already handed out stay usable; they are just no longer
/// reachable through the registry.
pub fn reset() {
    let mut registry = registry();
    registry.shared = None;
    registry.parsers.clear();
}
