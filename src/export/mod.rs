//! Graph serializers
//!
//! Every output format implements [`GraphExporter`]. [`exporter_for`] picks
//! the implementation for a format.

mod dot;
mod gexf;
mod options;
mod render;
mod style;
mod traits;

pub use dot::DotExporter;
pub use gexf::GexfExporter;
pub use options::{ExportOptions, DEFAULT_GRAPH_NAME};
pub use render::{render_pdf, LAYOUT_PROGRAM};
pub use style::{Color, Palette};
pub use traits::{ExportError, ExportFormat, ExportResult, GraphExporter};

/// How repeated link declarations are handled, stated in every document
pub const DUPLICATE_LINK_POLICY: &str = "duplicate links collapsed by port pair";

/// Build the exporter for `format`
pub fn exporter_for(format: ExportFormat, options: ExportOptions) -> Box<dyn GraphExporter> {
    match format {
        ExportFormat::Dot => Box::new(DotExporter::new(options)),
        ExportFormat::Gexf => Box::new(GexfExporter::new(options)),
    }
}

/// Render `topology` in `format` with `options`
pub fn export_to(
    topology: &crate::Topology,
    format: ExportFormat,
    options: &ExportOptions,
) -> ExportResult<String> {
    exporter_for(format, options.clone()).render(topology)
}
