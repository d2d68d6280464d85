//! Exporter trait definitions

use crate::graph::Topology;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while exporting a graph
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Palette error: {0}")]
    Palette(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Dot,
    Gexf,
}

impl ExportFormat {
    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Dot => "dot",
            ExportFormat::Gexf => "gexf",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// A writer that turns a [`Topology`] into a graph description document
///
/// Output must depend only on the topology and the exporter's options, so
/// that regenerated files are diff-stable.
pub trait GraphExporter {
    fn format(&self) -> ExportFormat;

    /// Render the whole document
    fn render(&self, topology: &Topology) -> ExportResult<String>;

    /// Render and write the document to `path`
    fn write_file(&self, topology: &Topology, path: &Path) -> ExportResult<()> {
        let document = self.render(topology)?;
        std::fs::write(path, document).map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(format = %self.format(), path = %path.display(), "wrote graph");
        Ok(())
    }
}
