//! Topology: the complete set of devices and links from one dump

use super::edge::{Edge, EdgeKey};
use super::node::{Node, NodeId, NodeType};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Outcome of [`Topology::add_node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeInsert {
    /// The node was not known before
    Inserted,
    /// A provisional node received its declaration
    Completed,
    /// The node was already declared; the redeclaration was dropped
    Ignored,
}

/// The fabric graph built from one topology dump
///
/// Nodes and edges keep insertion order so that exports are diff-stable.
/// Every edge references two nodes present in the node set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Topology {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    index: HashMap<NodeId, usize>,
    #[serde(skip)]
    edge_keys: HashSet<EdgeKey>,
}

impl Topology {
    /// Create an empty topology
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declared node
    ///
    /// A node already known only as the far end of a link takes over the
    /// declaration's details. A node that was already declared is left as is.
    pub fn add_node(&mut self, node: Node) -> NodeInsert {
        match self.index.get(&node.id) {
            None => {
                self.index.insert(node.id.clone(), self.nodes.len());
                self.nodes.push(node);
                NodeInsert::Inserted
            }
            Some(&idx) => {
                let existing = &mut self.nodes[idx];
                if existing.declared || !node.declared {
                    return NodeInsert::Ignored;
                }
                let guid = node.guid.or_else(|| existing.guid.take());
                *existing = Node { guid, ..node };
                NodeInsert::Completed
            }
        }
    }

    /// Make sure a node exists, creating a provisional one if needed
    pub fn ensure_node(&mut self, id: &NodeId) {
        if !self.index.contains_key(id) {
            self.index.insert(id.clone(), self.nodes.len());
            self.nodes.push(Node::provisional(id.clone()));
        }
    }

    /// Add a link, creating provisional nodes for unknown endpoints
    ///
    /// Returns false when the same pair of ports is already linked.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if !self.edge_keys.insert(edge.key()) {
            return false;
        }
        self.ensure_node(&edge.source.node);
        self.ensure_node(&edge.target.node);
        self.edges.push(edge);
        true
    }

    /// Look up a node by identifier
    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.nodes[idx])
    }

    /// Check whether a node is present
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Distinct neighbours of a node, in first-link order
    pub fn neighbors_of(&self, id: &NodeId) -> Vec<&NodeId> {
        let mut seen = HashSet::new();
        self.edges
            .iter()
            .filter_map(|e| e.other_end(id))
            .map(|end| &end.node)
            .filter(|n| seen.insert(*n))
            .collect()
    }

    /// Number of nodes, provisional ones included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct links
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of switches
    pub fn switch_count(&self) -> usize {
        self.count_of(NodeType::Switch)
    }

    /// Number of host adapters
    pub fn hca_count(&self) -> usize {
        self.count_of(NodeType::Hca)
    }

    /// True when the dump yielded no nodes and no links
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    fn count_of(&self, node_type: NodeType) -> usize {
        self.nodes.iter().filter(|n| n.node_type == node_type).count()
    }
}
