//! Accumulates diagnostics over a validation pass.

use log::warn;

use crate::error::Diagnostic;

/// Collects diagnostics in the order they are reported.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic, logging warnings as they are found.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_warning() {
            warn!(
                code:? = diagnostic.code(),
                path = diagnostic.path().unwrap_or_default();
                "{}", diagnostic.message()
            );
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
