//! Tag markup to rich text.
//!
//! This crate bundles the [`tagmark`] engine with the built-in rules and
//! parser registry from [`tagmark_markups`].
//!
//! ```
//! use tagmark_rs::{Attributes, Value, default_parser};
//!
//! let parser = default_parser();
//! let text = parser
//!     .parse("[list ordered][li][b]first[/b][/li][li]second[/li][/list]", Attributes::new())
//!     .unwrap();
//!
//! assert_eq!(text.text(), "1. first\n2. second\n");
//! assert_eq!(text.runs()[1].get("bold"), Some(&Value::Bool(true)));
//! ```
//!
//! Parsers are `Send + Sync`. Register markups once and share the parser:
//!
//! ```
//! use std::sync::Arc;
//! use tagmark_rs::{Attributes, StyleMarkup, registry};
//!
//! let parser = registry::shared_parser();
//! parser.register(StyleMarkup::new("em", "italic")).unwrap();
//!
//! let worker = {
//!     let parser = Arc::clone(&parser);
//!     std::thread::spawn(move || parser.parse("[em]hi[/em]", Attributes::new()))
//! };
//! assert_eq!(worker.join().unwrap().unwrap().text(), "hi");
//! ```

mod log_init;

pub use log_init::init_logger;

// Re-export the engine and the built-in rules at the crate root
pub use tagmark::*;
pub use tagmark_markups::{
    Case, CaseMarkup, ColorMarkup, LIST_DEPTH, ListItemMarkup, ListMarkup, MAX_LIST_DEPTH,
    StyleMarkup,
    builtin_markups, default_parser, register_builtins, registry,
};

// Re-export log for convenience
pub use log;
