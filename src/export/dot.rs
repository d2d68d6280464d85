//! Graphviz dot exporter

use super::options::ExportOptions;
use super::traits::{ExportFormat, ExportResult, GraphExporter};
use super::DUPLICATE_LINK_POLICY;
use crate::graph::{Edge, Node, NodeId, NodeType, Topology};
use std::collections::{HashMap, HashSet};
use std::fmt::Write;

/// InfiniBand port numbers are 8-bit; anything above is a corrupt dump line
const MAX_RECORD_PORTS: u32 = 255;

/// Writes an undirected dot document
///
/// Node statements come first, then host clusters (if enabled), then one
/// `--` statement per link, each in topology insertion order.
#[derive(Debug, Clone, Default)]
pub struct DotExporter {
    options: ExportOptions,
}

impl DotExporter {
    /// Create a dot exporter
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    fn write_header(&self, out: &mut String) -> std::fmt::Result {
        let palette = self.options.palette();
        writeln!(out, "graph \"{}\" {{", escape(&self.options.graph_name))?;
        writeln!(out, "\t// {}", DUPLICATE_LINK_POLICY)?;

        write!(
            out,
            "\tgraph [rankdir=TB, ranksep=1.0, splines=line, overlap=scale, size=\"93.0,123.0!\""
        )?;
        if let Some(bg) = palette.background {
            write!(out, ", bgcolor=\"{}\"", bg)?;
        }
        writeln!(out, "];")?;

        let shape = if self.options.detailed { "Mrecord" } else { "rectangle" };
        writeln!(
            out,
            "\tnode [style=filled, margin=0.2, fontsize=24, shape={}];",
            shape
        )?;
        writeln!(out, "\tedge [penwidth=4];")
    }

    fn write_node(&self, out: &mut String, node: &Node, ports: u32) -> std::fmt::Result {
        let color = self.options.palette().node_color(node.node_type);
        let label = if self.options.detailed {
            record_label(node.display_label(), ports)
        } else {
            escape(node.display_label())
        };
        writeln!(
            out,
            "\t\"{}\" [label=\"{}\", color=\"{}\", fillcolor=\"{}\"];",
            escape(node.id.as_str()),
            label,
            color,
            color
        )
    }

    fn write_clusters(&self, out: &mut String, topology: &Topology) -> std::fmt::Result {
        let palette = self.options.palette();
        for (n, members) in host_clusters(topology).iter().enumerate() {
            writeln!(out, "\tsubgraph \"cluster{}\" {{", n)?;
            writeln!(out, "\t\tstyle=filled;")?;
            writeln!(out, "\t\tfillcolor=\"{}\";", palette.cluster)?;
            for id in members {
                writeln!(out, "\t\t\"{}\";", escape(id.as_str()))?;
            }
            writeln!(out, "\t}}")?;
        }
        Ok(())
    }

    fn write_edge(&self, out: &mut String, topology: &Topology, edge: &Edge) -> std::fmt::Result {
        let type_of = |id: &NodeId| {
            topology
                .get_node(id)
                .map_or_else(|| NodeType::infer_from_name(id.as_str()), |n| n.node_type)
        };
        let color = self
            .options
            .palette()
            .edge_color(type_of(&edge.source.node), type_of(&edge.target.node));

        write!(
            out,
            "\t\"{}\" -- \"{}\" [key=\"{}\", color=\"{}\", taillabel=\"{}\", headlabel=\"{}\"",
            escape(edge.source.node.as_str()),
            escape(edge.target.node.as_str()),
            edge.port_key(),
            color,
            edge.source.port,
            edge.target.port
        )?;
        if self.options.detailed {
            write!(
                out,
                ", tailport=\"{}\", headport=\"{}\"",
                edge.source.port, edge.target.port
            )?;
        }
        if let Some(speed) = &edge.speed {
            write!(out, ", label=\"{}\"", escape(&speed.to_string()))?;
        }
        writeln!(out, "];")
    }
}

impl GraphExporter for DotExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Dot
    }

    fn render(&self, topology: &Topology) -> ExportResult<String> {
        let mut out = String::new();
        self.write_header(&mut out)?;

        let ports = highest_ports(topology);
        for node in topology.nodes() {
            self.write_node(&mut out, node, record_ports(node, &ports))?;
        }

        if self.options.clusters {
            self.write_clusters(&mut out, topology)?;
        }

        for edge in topology.edges() {
            self.write_edge(&mut out, topology, edge)?;
        }

        writeln!(out, "}}")?;
        Ok(out)
    }
}

/// Highest port number each node uses in a link
fn highest_ports(topology: &Topology) -> HashMap<&NodeId, u32> {
    let mut ports: HashMap<&NodeId, u32> = HashMap::new();
    for edge in topology.edges() {
        for end in [&edge.source, &edge.target] {
            let slot = ports.entry(&end.node).or_insert(0);
            *slot = (*slot).max(end.port);
        }
    }
    ports
}

/// Number of port fields drawn for a node in detailed mode
///
/// Declared nodes show their reported port count; provisional ones show up
/// to the highest port a link uses. Never more than [`MAX_RECORD_PORTS`].
fn record_ports(node: &Node, used: &HashMap<&NodeId, u32>) -> u32 {
    let count = if node.declared {
        node.port_count
    } else {
        used.get(&node.id).copied().unwrap_or(0)
    };
    count.min(MAX_RECORD_PORTS)
}

/// Hosts grouped by the first switch (in node order) that links to them
///
/// Each host lands in at most one cluster; switches without hosts get none.
pub(crate) fn host_clusters(topology: &Topology) -> Vec<Vec<&NodeId>> {
    let mut placed: HashSet<&NodeId> = HashSet::new();
    let mut clusters = Vec::new();

    for switch in topology.nodes().filter(|n| n.is_switch()) {
        let members: Vec<&NodeId> = topology
            .neighbors_of(&switch.id)
            .into_iter()
            .filter(|id| {
                topology
                    .get_node(id)
                    .is_some_and(|n| n.node_type == NodeType::Hca)
            })
            .filter(|id| placed.insert(*id))
            .collect();
        if !members.is_empty() {
            clusters.push(members);
        }
    }
    clusters
}

/// Escape text for a quoted dot string
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text used inside a record label field
fn escape_record(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '{' | '}' | '|' | '<' | '>' => {
                out.push('\\');
                out.push(c);
            }
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// `label|<1> 1|<2> 2|...` with one field per port
fn record_label(label: &str, ports: u32) -> String {
    let mut out = escape_record(label);
    for port in 1..=ports {
        out.push_str(&format!("|<{}> {}", port, port));
    }
    out
}
