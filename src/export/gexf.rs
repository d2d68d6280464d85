//! GEXF 1.3 exporter for Gephi

use super::options::ExportOptions;
use super::style::Color;
use super::traits::{ExportFormat, ExportResult, GraphExporter};
use super::DUPLICATE_LINK_POLICY;
use crate::graph::{NodeId, NodeType, Topology};
use std::fmt::Write;

const CREATOR: &str = "ibgraph";

/// Writes a GEXF document with `viz:color` styling
///
/// Detailed records and clusters are dot-only features and are ignored here.
#[derive(Debug, Clone, Default)]
pub struct GexfExporter {
    options: ExportOptions,
}

impl GexfExporter {
    /// Create a gexf exporter
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    fn write_meta(&self, out: &mut String) -> std::fmt::Result {
        match self.options.date {
            Some(date) => writeln!(
                out,
                "  <meta lastmodifieddate=\"{}\">",
                date.format("%Y-%m-%d")
            )?,
            None => writeln!(out, "  <meta>")?,
        }
        writeln!(out, "    <creator>{}</creator>", CREATOR)?;
        let description = match &self.options.source_name {
            Some(source) => format!(
                "Graph generated from file '{}'; {}",
                source, DUPLICATE_LINK_POLICY
            ),
            None => format!("Graph generated by {}; {}", CREATOR, DUPLICATE_LINK_POLICY),
        };
        writeln!(out, "    <description>{}</description>", escape(&description))?;
        writeln!(out, "  </meta>")
    }

    fn write_attribute_decls(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "    <attributes class=\"node\" mode=\"static\">")?;
        for (id, kind) in [
            ("type", "string"),
            ("guid", "string"),
            ("lid", "integer"),
            ("ports", "integer"),
        ] {
            writeln!(
                out,
                "      <attribute id=\"{0}\" title=\"{0}\" type=\"{1}\"/>",
                id, kind
            )?;
        }
        writeln!(out, "    </attributes>")?;
        writeln!(out, "    <attributes class=\"edge\" mode=\"static\">")?;
        for (id, kind) in [
            ("source_port", "integer"),
            ("target_port", "integer"),
            ("speed", "string"),
            ("lid", "integer"),
        ] {
            writeln!(
                out,
                "      <attribute id=\"{0}\" title=\"{0}\" type=\"{1}\"/>",
                id, kind
            )?;
        }
        writeln!(out, "    </attributes>")
    }

    fn write_nodes(&self, out: &mut String, topology: &Topology) -> std::fmt::Result {
        let palette = self.options.palette();
        writeln!(out, "    <nodes>")?;
        for node in topology.nodes() {
            writeln!(
                out,
                "      <node id=\"{}\" label=\"{}\">",
                escape(node.id.as_str()),
                escape(node.display_label())
            )?;
            writeln!(out, "        <attvalues>")?;
            write_attvalue(out, "type", node.node_type.as_str())?;
            if let Some(guid) = &node.guid {
                write_attvalue(out, "guid", guid)?;
            }
            if let Some(lid) = node.lid {
                write_attvalue(out, "lid", &lid.to_string())?;
            }
            write_attvalue(out, "ports", &node.port_count.to_string())?;
            writeln!(out, "        </attvalues>")?;
            write_color(out, palette.node_color(node.node_type), Some("0.0"))?;
            writeln!(out, "      </node>")?;
        }
        writeln!(out, "    </nodes>")
    }

    fn write_edges(&self, out: &mut String, topology: &Topology) -> std::fmt::Result {
        let palette = self.options.palette();
        let type_of = |id: &NodeId| {
            topology
                .get_node(id)
                .map_or_else(|| NodeType::infer_from_name(id.as_str()), |n| n.node_type)
        };

        writeln!(out, "    <edges>")?;
        for (n, edge) in topology.edges().enumerate() {
            let source = edge.source.node.as_str();
            let target = edge.target.node.as_str();
            writeln!(
                out,
                "      <edge id=\"{}\" source=\"{}\" target=\"{}\" label=\"{}\">",
                n + 1,
                escape(source),
                escape(target),
                escape(&format!("{} -- {}", source, target))
            )?;
            writeln!(out, "        <attvalues>")?;
            write_attvalue(out, "source_port", &edge.source.port.to_string())?;
            write_attvalue(out, "target_port", &edge.target.port.to_string())?;
            if let Some(speed) = &edge.speed {
                write_attvalue(out, "speed", &speed.to_string())?;
            }
            if let Some(lid) = edge.lid {
                write_attvalue(out, "lid", &lid.to_string())?;
            }
            writeln!(out, "        </attvalues>")?;
            let color = palette.edge_color(type_of(&edge.source.node), type_of(&edge.target.node));
            write_color(out, color, None)?;
            writeln!(out, "      </edge>")?;
        }
        writeln!(out, "    </edges>")
    }
}

impl GraphExporter for GexfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Gexf
    }

    fn render(&self, topology: &Topology) -> ExportResult<String> {
        let mut out = String::new();
        writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        writeln!(
            out,
            "<gexf xmlns=\"http://www.gexf.net/1.3\" version=\"1.3\" \
             xmlns:viz=\"http://www.gexf.net/1.3/viz\" \
             xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
             xsi:schemaLocation=\"http://www.gexf.net/1.3 http://www.gexf.net/1.3/gexf.xsd\">"
        )?;
        self.write_meta(&mut out)?;
        writeln!(out, "  <graph defaultedgetype=\"undirected\" mode=\"static\">")?;
        self.write_attribute_decls(&mut out)?;
        self.write_nodes(&mut out, topology)?;
        self.write_edges(&mut out, topology)?;
        writeln!(out, "  </graph>")?;
        writeln!(out, "</gexf>")?;
        Ok(out)
    }
}

fn write_attvalue(out: &mut String, key: &str, value: &str) -> std::fmt::Result {
    writeln!(
        out,
        "          <attvalue for=\"{}\" value=\"{}\"/>",
        key,
        escape(value)
    )
}

fn write_color(out: &mut String, color: Color, alpha: Option<&str>) -> std::fmt::Result {
    write!(
        out,
        "        <viz:color r=\"{}\" g=\"{}\" b=\"{}\"",
        color.r, color.g, color.b
    )?;
    if let Some(a) = alpha {
        write!(out, " a=\"{}\"", a)?;
    }
    writeln!(out, "/>")
}

/// Escape text for XML attribute values and element content
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
