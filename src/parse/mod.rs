//! Topology dump parsing
//!
//! Reads `ibnetdiscover` output line by line and builds a [`Topology`](crate::Topology).
//! Lines that match no known pattern are skipped.

mod parser;
mod patterns;

use std::path::PathBuf;
use thiserror::Error;

pub use parser::{ParseStats, TopologyParser};
pub use patterns::{classify, Declaration, Line, LinkLine};

/// Errors that can occur while reading a dump
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot open topology file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for parse operations
pub type ParseResult<T> = Result<T, ParseError>;
