//! Conversion entry point: dump file in, graph files out.
//!
//! The CLI builds a [`ConvertRequest`] and calls [`convert`]; nothing else
//! touches the parser and exporters directly.

use crate::export::{render_pdf, exporter_for, ExportError, ExportFormat, ExportOptions};
use crate::graph::Topology;
use crate::parse::{ParseError, ParseStats, TopologyParser};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, trace};

/// Errors from a full conversion run
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Everything one run needs
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Topology dump to read
    pub input: PathBuf,
    /// Output path without extension; `<prefix>.dot`, `<prefix>.gexf`, ...
    pub output_prefix: PathBuf,
    /// Also write a gexf file
    pub gexf: bool,
    /// Render the dot file to PDF with Graphviz
    pub render: bool,
    pub options: ExportOptions,
}

impl ConvertRequest {
    /// Request with outputs named after the input file, in the current directory
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output_prefix = default_output_prefix(&input);
        Self {
            input,
            output_prefix,
            gexf: false,
            render: false,
            options: ExportOptions::default(),
        }
    }

    /// Write outputs to `<prefix>.<ext>`
    pub fn with_output_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.output_prefix = prefix.into();
        self
    }

    /// Also write `<prefix>.gexf`
    pub fn with_gexf(mut self, enabled: bool) -> Self {
        self.gexf = enabled;
        self
    }

    /// Also render `<prefix>.pdf` with neato
    pub fn with_render(mut self, enabled: bool) -> Self {
        self.render = enabled;
        self
    }

    /// Set the exporter options
    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Path of the output file for `ext`
    pub fn output_path(&self, ext: &str) -> PathBuf {
        let mut name = self.output_prefix.clone().into_os_string();
        name.push(".");
        name.push(ext);
        PathBuf::from(name)
    }
}

/// `dir/infiniband.topo` -> `infiniband.topo`
pub fn default_output_prefix(input: &Path) -> PathBuf {
    input
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("topology"))
}

/// What a run produced
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub topology: Topology,
    pub stats: ParseStats,
    pub dot_path: PathBuf,
    pub gexf_path: Option<PathBuf>,
    pub pdf_path: Option<PathBuf>,
}

impl ConvertReport {
    /// Log node and link totals
    pub fn log_summary(&self) {
        info!(
            nodes = self.topology.node_count(),
            switches = self.topology.switch_count(),
            hcas = self.topology.hca_count(),
            edges = self.topology.edge_count(),
            "topology summary"
        );
    }
}

/// Parse the dump and write every requested output
pub fn convert(request: &ConvertRequest) -> Result<ConvertReport, ConvertError> {
    let (topology, stats) = TopologyParser::parse_file(&request.input)?;
    info!(
        path = %request.input.display(),
        lines = stats.lines,
        skipped = stats.skipped,
        duplicate_links = stats.duplicate_links,
        "parsed topology"
    );
    if tracing::enabled!(tracing::Level::TRACE) {
        if let Ok(json) = serde_json::to_string_pretty(&topology) {
            trace!("parsed topology:\n{}", json);
        }
    }

    let dot_path = request.output_path(ExportFormat::Dot.extension());
    exporter_for(ExportFormat::Dot, request.options.clone()).write_file(&topology, &dot_path)?;

    let gexf_path = if request.gexf {
        let path = request.output_path(ExportFormat::Gexf.extension());
        exporter_for(ExportFormat::Gexf, request.options.clone()).write_file(&topology, &path)?;
        Some(path)
    } else {
        None
    };

    let pdf_path = if request.render {
        let path = request.output_path("pdf");
        render_pdf(&dot_path, &path)?;
        Some(path)
    } else {
        None
    };

    Ok(ConvertReport {
        topology,
        stats,
        dot_path,
        gexf_path,
        pdf_path,
    })
}
