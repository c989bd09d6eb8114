//! Severity levels for diagnostics.

use std::fmt;

/// The severity level of a diagnostic.
///
/// Loading fails only on [`Severity::Error`]; warnings describe content that
/// renders, but not the way its author probably intended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The curriculum could not be loaded at all.
    Error,

    /// The curriculum loads, but part of it will be skipped or misbehave.
    ///
    /// Dangling relation endpoints are the typical case: the renderer drops
    /// the edge silently.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
