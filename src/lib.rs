//! ibgraph: InfiniBand fabric topology to graph files
//!
//! Parses the text dump written by `ibnetdiscover` and serializes the fabric
//! as a Graphviz dot document or a GEXF document for Gephi.
//!
//! # Core Concepts
//!
//! - **Nodes**: switches and host channel adapters, keyed by their dump name
//! - **Edges**: physical links between two ports, deduplicated by port pair
//! - **Topology**: every node and edge from one dump, in discovery order
//!
//! # Example
//!
//! ```
//! use ibgraph::{DotExporter, GraphExporter, TopologyParser};
//!
//! let topology = TopologyParser::parse_str(
//!     "Switch 8 \"SW1\"\n[1] \"HCA1\"[1]\nCa 1 \"HCA1\"\n[1] \"SW1\"[1]\n",
//! );
//! assert_eq!(topology.node_count(), 2);
//! assert_eq!(topology.edge_count(), 1);
//!
//! let dot = DotExporter::default().render(&topology).unwrap();
//! assert!(dot.contains("\"SW1\" -- \"HCA1\""));
//! ```

pub mod api;
pub mod export;
mod graph;
pub mod parse;

pub use api::{convert, default_output_prefix, ConvertError, ConvertReport, ConvertRequest};
pub use export::{
    export_to, exporter_for, Color, DotExporter, ExportError, ExportFormat, ExportOptions,
    ExportResult, GexfExporter, GraphExporter, Palette,
};
pub use graph::{Edge, EdgeKey, Endpoint, LinkSpeed, Node, NodeId, NodeInsert, NodeType, Topology};
pub use parse::{ParseError, ParseResult, ParseStats, TopologyParser};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
