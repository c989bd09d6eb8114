//! The [`Diagnostic`] type.

use std::fmt;

use crate::{
    Span,
    error::{ErrorCode, Label, Severity},
};

/// A single error or warning about curriculum content.
///
/// Built with a constructor for the severity followed by `with_*` calls:
///
/// ```
/// # use gitlook_content::{Span, error::{Diagnostic, ErrorCode}};
/// let diag = Diagnostic::warning("connection target `s3` is not a step of this scene")
///     .with_code(ErrorCode::E200)
///     .with_path("modules[0].animations[0].animationData.connections[1].to")
///     .with_label(Span::new(120..124), "unknown step")
///     .with_help("declare a step with id `s3` or fix the reference");
///
/// assert!(diag.severity().is_warning());
/// assert_eq!(diag.to_string(), "warning[E200]: connection target `s3` is not a step of this scene");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    path: Option<String>,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            path: None,
            labels: Vec::new(),
            help: None,
        }
    }

    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Sets the location of the offending value inside the curriculum,
    /// written as a field path such as `modules[1].quiz.questions[0]`.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Adds the primary label.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.severity, code, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}
