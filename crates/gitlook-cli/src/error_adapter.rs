//! Error adapter for converting GitlookError to miette diagnostics.
//!
//! This module provides the bridge between the library's error types and
//! miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! When a [`gitlook_content::error::ContentError`] contains multiple
//! diagnostics, each diagnostic is rendered independently. Content warnings
//! go through the same [`DiagnosticAdapter`] and [`render`] path.

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan,
    Severity as MietteSeverity, SourceSpan,
};

use gitlook::GitlookError;
use gitlook_content::{
    Span,
    error::{Diagnostic, Severity},
};

/// Adapter for a single content diagnostic.
///
/// This adapter wraps a single [`Diagnostic`] and implements
/// [`MietteDiagnostic`] to enable rich error formatting in the CLI.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    /// Curriculum source for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.diag.path() {
            Some(path) => write!(f, "{} (at {path})", self.diag.message()),
            None => write!(f, "{}", self.diag.message()),
        }
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<MietteSeverity> {
        Some(match self.diag.severity() {
            Severity::Error => MietteSeverity::Error,
            Severity::Warning => MietteSeverity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for non-diagnostic [`GitlookError`] variants.
///
/// This adapter handles errors that don't carry source locations, such as
/// I/O, configuration and export errors.
pub struct ErrorAdapter<'a>(pub &'a GitlookError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            GitlookError::Io(_) => "gitlook::io",
            GitlookError::Content { .. } => return None,
            GitlookError::Config(_) => "gitlook::config",
            GitlookError::Export(_) => "gitlook::export",
        };
        Some(Box::new(code))
    }
}

/// A boxed miette diagnostic borrowed from a [`GitlookError`].
pub type Reportable<'a> = Box<dyn MietteDiagnostic + 'a>;

/// Convert a content [`Span`] to a miette [`SourceSpan`].
fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`GitlookError`] into a list of reportable errors.
///
/// For [`GitlookError::Content`], this returns one [`Reportable`] for each
/// diagnostic in the error. For other error variants, this returns a single
/// [`Reportable`].
pub fn to_reportables(err: &GitlookError) -> Vec<Reportable<'_>> {
    match err {
        GitlookError::Content {
            err: content_err,
            src,
        } => content_err
            .diagnostics()
            .iter()
            .map(|d| Box::new(DiagnosticAdapter::new(d, src)) as Reportable<'_>)
            .collect(),
        _ => vec![Box::new(ErrorAdapter(err))],
    }
}

/// Renders `diag` as a graphical miette report.
///
/// Falls back to the plain message if the report cannot be written.
pub fn render(diag: &dyn MietteDiagnostic) -> String {
    let mut writer = String::new();
    match GraphicalReportHandler::new().render_report(&mut writer, diag) {
        Ok(()) => writer,
        Err(_) => diag.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use gitlook_content::error::{ContentError, ErrorCode};

    use super::*;

    #[test]
    fn test_single_diagnostic() {
        let diag = Diagnostic::error("expected value")
            .with_code(ErrorCode::E100)
            .with_label(Span::new(0..5), "here")
            .with_help("check the JSON syntax");
        let err = GitlookError::new_content_error(ContentError::from(diag), "hello");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        let report = &reportables[0];
        assert_eq!(report.to_string(), "expected value");
        assert!(matches!(report.severity(), Some(MietteSeverity::Error)));
        assert!(report.source_code().is_some());
        assert_eq!(report.code().unwrap().to_string(), "E100");
    }

    #[test]
    fn test_warnings_render_separately_with_path() {
        let diags = vec![
            Diagnostic::warning("unknown step `s3`")
                .with_code(ErrorCode::E200)
                .with_path("modules[0].animations[0].animationData.connections[0].to")
                .with_label(Span::new(0..4), "unknown"),
            Diagnostic::warning("answer `q1-z` is not an option")
                .with_code(ErrorCode::E206)
                .with_label(Span::new(10..16), "answer"),
        ];
        let err = GitlookError::new_content_error(ContentError::from(diags), "source code here...");

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 2);
        assert!(reportables[0].to_string().ends_with("(at modules[0].animations[0].animationData.connections[0].to)"));
        assert_eq!(reportables[1].to_string(), "answer `q1-z` is not an option");
        assert!(matches!(reportables[1].severity(), Some(MietteSeverity::Warning)));
    }

    #[test]
    fn test_non_content_error() {
        let err = GitlookError::Config("bad color".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        let report = &reportables[0];
        assert_eq!(report.to_string(), "Config error: bad color");
        assert_eq!(report.code().unwrap().to_string(), "gitlook::config");
        assert!(report.source_code().is_none());
    }

    #[test]
    fn test_render_includes_code_and_help() {
        let diag = Diagnostic::warning("unknown stage `review`")
            .with_code(ErrorCode::E200)
            .with_label(Span::new(0..8), "unknown")
            .with_help("declare the stage first");

        let report = render(&DiagnosticAdapter::new(&diag, "\"review\""));

        assert!(report.contains("E200"));
        assert!(report.contains("unknown stage `review`"));
        assert!(report.contains("declare the stage first"));
    }

    #[test]
    fn test_primary_flag_on_labels() {
        let diag = Diagnostic::warning("element id `s1` is declared twice")
            .with_label(Span::new(10..14), "duplicate")
            .with_secondary_label(Span::new(0..4), "first declared here");

        let adapter = DiagnosticAdapter::new(&diag, "some source code");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
        assert_eq!(labels[1].label(), Some("first declared here"));
    }
}
