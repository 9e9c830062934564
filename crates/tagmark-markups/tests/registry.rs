//! The process-wide registry.
//!
//! Everything runs in one test: the registry is global and the test harness
//! runs tests in parallel.

use std::sync::Arc;

use tagmark::{Attributes, MarkupParser};
use tagmark_markups::{
    StyleMarkup, register_parser, registered_keys, registered_parser, reset, shared_parser,
    unregister_parser,
};

#[test]
fn registry_lifecycle() {
    reset();

    // ========================================================================
    // Shared parser
    // ========================================================================

    let shared = shared_parser();
    assert!(Arc::ptr_eq(&shared, &shared_parser()));
    let text = shared.parse("[b]x[/b]", Attributes::new()).unwrap();
    assert_eq!(text.runs()[0].get("bold").and_then(|v| v.as_bool()), Some(true));

    // ========================================================================
    // Keyed parsers
    // ========================================================================

    assert!(registered_keys().is_empty());
    assert!(registered_parser("chat").is_none());

    let chat = Arc::new(MarkupParser::new());
    chat.register(StyleMarkup::new("strong", "bold")).unwrap();
    assert!(register_parser("chat", Arc::clone(&chat)).is_none());
    assert!(register_parser("help", Arc::new(MarkupParser::new())).is_none());
    assert_eq!(registered_keys(), vec!["chat", "help"]);

    let fetched = registered_parser("chat").unwrap();
    assert!(Arc::ptr_eq(&fetched, &chat));

    // Registering under a taken key hands back the old parser.
    let replacement = Arc::new(MarkupParser::new());
    let replaced = register_parser("chat", Arc::clone(&replacement)).unwrap();
    assert!(Arc::ptr_eq(&replaced, &chat));
    assert!(Arc::ptr_eq(&registered_parser("chat").unwrap(), &replacement));

    assert!(unregister_parser("help").is_some());
    assert!(unregister_parser("help").is_none());
    assert_eq!(registered_keys(), vec!["chat"]);

    // ========================================================================
    // Reset
    // ========================================================================

    reset();
    assert!(registered_keys().is_empty());
    assert!(!Arc::ptr_eq(&shared, &shared_parser()));

    // Handed-out parsers survive a reset.
    let text = chat.parse("[strong]x[/strong]", Attributes::new()).unwrap();
    assert_eq!(text.text(), "x");
}
