//! Error types for markup parsing and registration.

use thiserror::Error;

use crate::diagnostic::DiagnosticKind;

/// Errors surfaced by the markup engine.
///
/// Ordinary parsing never fails on malformed input: unknown tags, stray
/// closing tags and unclosed tags degrade to literal text or forced closes.
/// Errors come from registration, from a markup hook, or from the opt-in
/// strict conversion of [`Parsed`](crate::Parsed).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarkupError {
    /// A markup with the same canonical tag is already registered.
    #[error("a markup is already registered for tag `{0}`")]
    DuplicateTag(String),

    /// The markup's tag is blank once trimmed.
    #[error("markup tag is empty")]
    EmptyTag,

    /// Delimiter characters must be distinct and not whitespace.
    #[error("invalid delimiters: {0}")]
    InvalidDelimiters(String),

    /// A markup hook failed; the parse that invoked it is aborted.
    #[error("markup `{tag}` failed: {message}")]
    Hook { tag: String, message: String },

    /// A diagnostic promoted to an error by strict parsing.
    #[error("{kind} `{tag}` at byte {offset}")]
    Malformed {
        kind: DiagnosticKind,
        tag: String,
        offset: usize,
    },
}

impl MarkupError {
    /// Build a hook failure for the markup registered under `tag`.
    pub fn hook(tag: impl Into<String>, message: impl Into<String>) -> Self {
        MarkupError::Hook {
            tag: tag.into(),
            message: message.into(),
        }
    }
}

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Invalid RGB color format.
    #[error("invalid RGB color: {0}")]
    InvalidRgb(String),
}

/// Result alias used throughout the crate.
pub type Result<T, E = MarkupError> = std::result::Result<T, E>;
