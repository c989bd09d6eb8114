//! The [`ContentError`] type returned when a curriculum cannot be used.

use thiserror::Error;

use crate::error::Diagnostic;

/// A type alias for `Result<T, ContentError>`.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Error type for loading curriculum content.
///
/// Wraps one or more diagnostics: the JSON error that stopped loading, or the
/// validation warnings promoted to a failure in strict mode.
#[derive(Debug, Error)]
#[error("{}", summarize(.diagnostics))]
pub struct ContentError {
    diagnostics: Vec<Diagnostic>,
}

impl ContentError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Formats the first diagnostic, noting how many follow it.
fn summarize(diagnostics: &[Diagnostic]) -> String {
    match diagnostics {
        [] => String::new(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (+{} more)", rest.len()),
    }
}

impl From<Diagnostic> for ContentError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for ContentError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}
