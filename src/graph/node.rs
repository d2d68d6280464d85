//! Node representation in the fabric graph

use serde::{Deserialize, Serialize};

/// Unique identifier for a node
///
/// Holds the quoted device name from the dump (e.g. `S-0002c90200421b28`).
/// Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a NodeId from a device name
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Device classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// InfiniBand switch
    Switch,
    /// Host channel adapter (anything that is not a switch)
    Hca,
}

impl NodeType {
    /// Classify a declaration keyword (`Switch`, `Ca`, `Rt`, ...)
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword.to_ascii_lowercase().starts_with("switch") {
            NodeType::Switch
        } else {
            NodeType::Hca
        }
    }

    /// Guess the type of a device from its name alone.
    ///
    /// `ibnetdiscover` prefixes switch names with `S-` and adapter names with `H-`.
    pub fn infer_from_name(name: &str) -> Self {
        if name.starts_with("S-") {
            NodeType::Switch
        } else {
            NodeType::Hca
        }
    }

    /// Lowercase name used in exported attributes
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Switch => "switch",
            NodeType::Hca => "hca",
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A switch or host adapter in the fabric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: NodeId,
    /// Switch or host adapter
    pub node_type: NodeType,
    /// Human-readable description from the dump (`# "..."`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Number of ports the device reports
    pub port_count: u32,
    /// Node GUID, lowercase hex without the `0x` prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    /// Base LID of the device, when the declaration carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lid: Option<u32>,
    /// False while the node is only known as the far end of a link
    pub declared: bool,
}

impl Node {
    /// Create a declared node
    pub fn new(id: impl Into<NodeId>, node_type: NodeType, port_count: u32) -> Self {
        let id = id.into();
        let guid = guid_from_name(id.as_str());
        Self {
            id,
            node_type,
            label: None,
            port_count,
            guid,
            lid: None,
            declared: true,
        }
    }

    /// Create a placeholder for a device seen only as the remote end of a link
    pub fn provisional(id: impl Into<NodeId>) -> Self {
        let id = id.into();
        let node_type = NodeType::infer_from_name(id.as_str());
        let guid = guid_from_name(id.as_str());
        Self {
            id,
            node_type,
            label: None,
            port_count: 0,
            guid,
            lid: None,
            declared: false,
        }
    }

    /// Set the description shown instead of the identifier
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the node GUID (lowercase hex, no `0x`)
    pub fn with_guid(mut self, guid: impl Into<String>) -> Self {
        self.guid = Some(guid.into());
        self
    }

    /// Set the base LID
    pub fn with_lid(mut self, lid: u32) -> Self {
        self.lid = Some(lid);
        self
    }

    /// Label to display: the description when present, else the identifier
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.id.as_str())
    }

    /// Check if this node is a switch
    pub fn is_switch(&self) -> bool {
        self.node_type == NodeType::Switch
    }
}

/// Extract the GUID encoded in `S-<hex>` / `H-<hex>` names
fn guid_from_name(name: &str) -> Option<String> {
    let hex = name
        .strip_prefix("S-")
        .or_else(|| name.strip_prefix("H-"))?;
    if !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(hex.to_ascii_lowercase())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_classification() {
        assert_eq!(NodeType::from_keyword("Switch"), NodeType::Switch);
        assert_eq!(NodeType::from_keyword("switch"), NodeType::Switch);
        assert_eq!(NodeType::from_keyword("Ca"), NodeType::Hca);
        assert_eq!(NodeType::from_keyword("Rt"), NodeType::Hca);
    }

    #[test]
    fn provisional_node_infers_type_from_prefix() {
        let sw = Node::provisional("S-0002c90200421b28");
        assert_eq!(sw.node_type, NodeType::Switch);
        assert!(!sw.declared);
        assert_eq!(sw.guid.as_deref(), Some("0002c90200421b28"));

        let host = Node::provisional("node17");
        assert_eq!(host.node_type, NodeType::Hca);
        assert_eq!(host.guid, None);
    }

    #[test]
    fn display_label_falls_back_to_id() {
        let node = Node::new("SW1", NodeType::Switch, 36);
        assert_eq!(node.display_label(), "SW1");

        let node = node.with_label("spine-1");
        assert_eq!(node.display_label(), "spine-1");
    }
}
