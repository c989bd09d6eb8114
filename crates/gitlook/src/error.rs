//! Error types for GitLook operations.
//!
//! This module provides the main error type [`GitlookError`] which wraps
//! the error conditions of loading content and exporting scenes. Rendering
//! and playback themselves never fail.

use std::io;

use thiserror::Error;

use gitlook_content::error::ContentError;

/// The main error type for GitLook operations.
///
/// # Diagnostic Variants
///
/// The `Content` variant keeps the curriculum source next to its
/// diagnostics so reporters can point at the offending bytes.
#[derive(Debug, Error)]
pub enum GitlookError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Content { err: ContentError, src: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for GitlookError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl GitlookError {
    /// Create a new `Content` error with the associated source text.
    pub fn new_content_error(err: ContentError, src: impl Into<String>) -> Self {
        Self::Content {
            err,
            src: src.into(),
        }
    }
}
