//! Topology parser: dump text in, [`Topology`] out

use super::patterns::{classify, Declaration, Line, LinkLine};
use super::{ParseError, ParseResult};
use crate::graph::{Edge, Endpoint, Node, NodeId, NodeInsert, Topology};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Device preamble lines that may sit between a GUID hint and its declaration
const PREAMBLE_PREFIXES: [&str; 3] = ["vendid=", "devid=", "sysimgguid="];

/// Counters collected while parsing, for the run summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines: usize,
    pub declarations: usize,
    pub links: usize,
    pub duplicate_links: usize,
    pub skipped: usize,
}

/// Best-effort extractor of devices and links from an `ibnetdiscover` dump
///
/// Unknown lines are skipped, so the parser never fails on content; only
/// I/O errors surface.
#[derive(Debug, Default)]
pub struct TopologyParser {
    topology: Topology,
    current: Option<NodeId>,
    pending_guid: Option<String>,
    stats: ParseStats,
}

impl TopologyParser {
    /// Create a parser with an empty topology
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whole dump held in memory
    pub fn parse_str(input: &str) -> Topology {
        Self::parse_lines(input.lines())
    }

    /// Parse already-split lines
    pub fn parse_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Topology {
        let mut parser = Self::new();
        for line in lines {
            parser.feed(line);
        }
        parser.finish().0
    }

    /// Parse from any buffered reader
    pub fn parse_reader(reader: impl BufRead) -> ParseResult<(Topology, ParseStats)> {
        let mut parser = Self::new();
        for line in reader.lines() {
            parser.feed(&line?);
        }
        Ok(parser.finish())
    }

    /// Open and parse a dump file
    pub fn parse_file(path: &Path) -> ParseResult<(Topology, ParseStats)> {
        let file = File::open(path).map_err(|source| ParseError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_reader(BufReader::new(file))
    }

    /// Consume one raw line
    pub fn feed(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }
        self.stats.lines += 1;

        match classify(line) {
            Line::GuidHint(hex) => {
                self.pending_guid = Some(hex.to_ascii_lowercase());
            }
            Line::Declaration(decl) => self.declare(decl),
            Line::Link(link) => {
                self.drop_pending_guid(line);
                self.link(link);
            }
            Line::Unrecognized => {
                trace!(line, "skipping unrecognized line");
                self.stats.skipped += 1;
                if !PREAMBLE_PREFIXES.iter().any(|p| line.starts_with(p)) {
                    self.drop_pending_guid(line);
                }
            }
        }
    }

    /// Finish parsing and hand over the topology
    pub fn finish(self) -> (Topology, ParseStats) {
        (self.topology, self.stats)
    }

    /// A GUID hint only applies to the declaration right after its preamble
    fn drop_pending_guid(&mut self, line: &str) {
        if let Some(guid) = self.pending_guid.take() {
            debug!(guid = %guid, line, "GUID hint not followed by a declaration, dropping");
        }
    }

    fn declare(&mut self, decl: Declaration<'_>) {
        self.stats.declarations += 1;

        let mut node = Node::new(decl.name, decl.node_type, decl.port_count);
        if let Some(label) = decl.label {
            node = node.with_label(label);
        }
        if let Some(guid) = self.pending_guid.take() {
            node = node.with_guid(guid);
        }
        if let Some(lid) = decl.lid {
            node = node.with_lid(lid);
        }

        let id = node.id.clone();
        match self.topology.add_node(node) {
            NodeInsert::Inserted => debug!(node = %id, kind = %decl.node_type, "declared node"),
            NodeInsert::Completed => debug!(node = %id, "completed node seen earlier as link peer"),
            NodeInsert::Ignored => debug!(node = %id, "ignoring redeclaration"),
        }
        self.current = Some(id);
    }

    fn link(&mut self, link: LinkLine<'_>) {
        let Some(current) = self.current.clone() else {
            warn!(remote = link.remote, "link line before any node declaration, skipping");
            self.stats.skipped += 1;
            return;
        };

        let mut edge = Edge::new(
            Endpoint::new(current, link.local_port),
            Endpoint::new(link.remote, link.remote_port),
        );
        if let Some(speed) = link.speed {
            edge = edge.with_speed(speed);
        }
        if let Some(lid) = link.remote_lid {
            edge = edge.with_lid(lid);
        }

        let source = edge.source.clone();
        let target = edge.target.clone();
        if self.topology.add_edge(edge) {
            self.stats.links += 1;
            trace!(%source, %target, "added link");
        } else {
            self.stats.duplicate_links += 1;
            trace!(%source, %target, "link already known");
        }
    }
}
