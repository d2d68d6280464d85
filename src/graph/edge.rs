//! Edge representation: a physical link between two ports

use super::node::NodeId;
use serde::{Deserialize, Serialize};

/// One end of a link: a device and one of its ports
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Endpoint {
    pub node: NodeId,
    pub port: u32,
}

impl Endpoint {
    /// Create an endpoint for `port` on `node`
    pub fn new(node: impl Into<NodeId>, port: u32) -> Self {
        Self {
            node: node.into(),
            port,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"[{}]", self.node, self.port)
    }
}

/// Negotiated link width and signalling rate, e.g. `4xQDR`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSpeed {
    /// Lane count, e.g. `4x`
    pub width: String,
    /// Data rate, e.g. `QDR`, `EDR`, `HDR`
    pub rate: String,
}

impl LinkSpeed {
    /// Create a speed from its width and rate parts
    pub fn new(width: impl Into<String>, rate: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            rate: rate.into(),
        }
    }
}

impl std::fmt::Display for LinkSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.width, self.rate)
    }
}

/// Order-independent identity of a link
///
/// `A[1] -- B[3]` and `B[3] -- A[1]` share the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey(Endpoint, Endpoint);

/// An undirected link between two device ports
///
/// `source` is the device whose port block first declared the link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: Endpoint,
    pub target: Endpoint,
    /// Link width/speed when the dump reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<LinkSpeed>,
    /// LID of the remote port, when the link line carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lid: Option<u32>,
}

impl Edge {
    /// Create a link from the declaring port to the remote port
    pub fn new(source: Endpoint, target: Endpoint) -> Self {
        Self {
            source,
            target,
            speed: None,
            lid: None,
        }
    }

    /// Set the negotiated link speed
    pub fn with_speed(mut self, speed: LinkSpeed) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Set the remote port LID
    pub fn with_lid(mut self, lid: u32) -> Self {
        self.lid = Some(lid);
        self
    }

    /// Order-independent identity used for deduplication
    pub fn key(&self) -> EdgeKey {
        if self.source <= self.target {
            EdgeKey(self.source.clone(), self.target.clone())
        } else {
            EdgeKey(self.target.clone(), self.source.clone())
        }
    }

    /// Port pair as `<source_port>-<target_port>`
    pub fn port_key(&self) -> String {
        format!("{}-{}", self.source.port, self.target.port)
    }

    /// True when the link touches the given node
    pub fn touches(&self, id: &NodeId) -> bool {
        &self.source.node == id || &self.target.node == id
    }

    /// The endpoint opposite to `id`, if the link touches it
    pub fn other_end(&self, id: &NodeId) -> Option<&Endpoint> {
        if &self.source.node == id {
            Some(&self.target)
        } else if &self.target.node == id {
            Some(&self.source)
        } else {
            None
        }
    }
}
