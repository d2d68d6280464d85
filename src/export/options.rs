//! Export configuration

use super::style::Palette;
use chrono::NaiveDate;

/// Graph name written into dot documents
pub const DEFAULT_GRAPH_NAME: &str = "Fat-tree";

/// Options shared by every exporter
///
/// The default is a plain dot-style export on a light canvas.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Use colours tuned for a black canvas
    pub black_background: bool,
    /// Draw every port as a record field (dot only)
    pub detailed: bool,
    /// Group hosts attached to the same switch (dot only)
    pub clusters: bool,
    /// Explicit palette; when unset, derived from `black_background`
    pub palette: Option<Palette>,
    /// Name of the dump the graph came from, recorded in gexf metadata
    pub source_name: Option<String>,
    /// Date recorded as gexf `lastmodifieddate`
    pub date: Option<NaiveDate>,
    /// Name of the dot graph
    pub graph_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            black_background: false,
            detailed: false,
            clusters: false,
            palette: None,
            source_name: None,
            date: None,
            graph_name: DEFAULT_GRAPH_NAME.to_string(),
        }
    }
}

impl ExportOptions {
    /// Create the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the black-canvas palette and `bgcolor`
    pub fn with_black_background(mut self, enabled: bool) -> Self {
        self.black_background = enabled;
        self
    }

    /// Draw ports as record fields
    pub fn with_detailed(mut self, enabled: bool) -> Self {
        self.detailed = enabled;
        self
    }

    /// Group hosts by the switch they hang off
    pub fn with_clusters(mut self, enabled: bool) -> Self {
        self.clusters = enabled;
        self
    }

    /// Use an explicit palette instead of the built-in one
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Record the dump file name in gexf metadata
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Set the gexf `lastmodifieddate`
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// The palette in effect
    pub fn palette(&self) -> Palette {
        self.palette
            .clone()
            .unwrap_or_else(|| Palette::for_background(self.black_background))
    }
}
