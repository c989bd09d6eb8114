//! Export of rendered scenes to standalone documents.
//!
//! The engine itself never writes files: a rendered [`VisualGraph`] lives in
//! its mount point. Exporters serialize a graph, or a frame of its playback,
//! for hosts that display static markup and for the command-line renderer.
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`GitlookError::Export`] at the crate
//! boundary.
//!
//! [`GitlookError::Export`]: crate::GitlookError::Export

/// SVG export backend.
pub mod svg;

use std::{fs, path::Path};

use log::{error, info};

use crate::graph::VisualGraph;

/// Abstraction for scene export backends.
pub trait Exporter {
    /// Serializes `graph` to the backend's output format.
    ///
    /// Placeholder graphs serialize to the backend's placeholder markup.
    fn export(&self, graph: &VisualGraph) -> String;

    /// Exports `graph` and writes the result to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing the output fails.
    fn write(&self, graph: &VisualGraph, path: &Path) -> Result<(), Error> {
        let content = self.export(graph);
        if let Err(err) = fs::write(path, content) {
            error!(path:? = path, err:err; "Failed to write exported scene");
            return Err(Error::Io(err));
        }
        info!(path:? = path, kind:% = graph.kind(); "Scene exported");
        Ok(())
    }
}

/// Errors that can occur during scene export.
///
/// This type is converted into [`GitlookError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`GitlookError::Export`]: crate::GitlookError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
