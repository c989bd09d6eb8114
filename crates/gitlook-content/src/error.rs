//! Diagnostics for curriculum content.
//!
//! Loading reports at most one [`Severity::Error`] diagnostic (the JSON
//! error that stopped it). Validation reports any number of
//! [`Severity::Warning`] diagnostics for content that loads but renders
//! differently than its author intended. Either set can be wrapped in a
//! [`ContentError`] and rendered with source snippets by the CLI.
//!
//! # Example
//!
//! ```
//! # use gitlook_content::{Span, error::{Diagnostic, ErrorCode}};
//! let diag = Diagnostic::warning("element id `s1` is declared twice")
//!     .with_code(ErrorCode::E201)
//!     .with_label(Span::new(100..104), "duplicate id")
//!     .with_secondary_label(Span::new(50..54), "first declared here")
//!     .with_help("give every element of a scene a distinct id");
//! ```

mod collector;
mod content_error;
mod diagnostic;
mod error_code;
mod label;
mod severity;

pub(crate) use collector::DiagnosticCollector;
pub use content_error::{ContentError, Result};
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use severity::Severity;
