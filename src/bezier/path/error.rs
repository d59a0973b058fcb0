use super::graph::*;

use std::fmt;
use std::error::Error;

///
/// Errors that can occur when the islands passed to a boolean operation are not valid
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BooleanError {
    /// The island containing this node is not closed
    OpenIsland(NodeId),

    /// The node is not in the graph
    MissingNode(NodeId),

    /// The node is not in a loop
    MissingLoop(NodeId)
}

impl fmt::Display for BooleanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BooleanError::OpenIsland(node)  => write!(f, "the island containing node {:?} is not closed", node),
            BooleanError::MissingNode(node) => write!(f, "node {:?} is not in the path graph", node),
            BooleanError::MissingLoop(node) => write!(f, "node {:?} does not belong to a loop", node)
        }
    }
}

impl Error for BooleanError { }
