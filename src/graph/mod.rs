//! Core fabric data structures

mod edge;
mod node;
mod topology;


pub use edge::{Edge, EdgeKey, Endpoint, LinkSpeed};
pub use node::{Node, NodeId, NodeType};
pub use topology::{NodeInsert, Topology};
