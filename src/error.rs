//! Error types for selspan.

use crate::content::NodeId;
use crate::hub::SurfaceId;
use std::fmt;

/// Result type alias for selspan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for selspan operations.
///
/// The translation core itself never fails; it degrades by omission. These
/// errors cover the construction and plumbing surface only.
#[derive(Debug)]
pub enum Error {
    /// Node id not present in the content arena.
    UnknownNode { id: NodeId },
    /// Attempt to push children under a text or atomic node.
    NotABranch { id: NodeId },
    /// Surface id not attached to the hub.
    UnknownSurface { id: SurfaceId },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode { id } => write!(f, "unknown node {id}"),
            Self::NotABranch { id } => write!(f, "node {id} cannot carry children"),
            Self::UnknownSurface { id } => write!(f, "unknown {id}"),
        }
    }
}

impl std::error::Error for Error {}
