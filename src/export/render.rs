//! Hand a dot file to Graphviz for layout and PDF rendering

use super::traits::{ExportError, ExportResult};
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Graphviz layout program used for rendering
pub const LAYOUT_PROGRAM: &str = "neato";

/// Lay out `dot_path` with neato and write a PDF to `pdf_path`
pub fn render_pdf(dot_path: &Path, pdf_path: &Path) -> ExportResult<()> {
    debug!(program = LAYOUT_PROGRAM, input = %dot_path.display(), "rendering");
    let status = Command::new(LAYOUT_PROGRAM)
        .arg("-Tpdf")
        .arg("-o")
        .arg(pdf_path)
        .arg(dot_path)
        .status()
        .map_err(|e| ExportError::Render(format!("cannot run '{}': {}", LAYOUT_PROGRAM, e)))?;

    if !status.success() {
        return Err(ExportError::Render(format!(
            "'{}' exited with {}",
            LAYOUT_PROGRAM, status
        )));
    }
    info!(path = %pdf_path.display(), "rendered graph");
    Ok(())
}
