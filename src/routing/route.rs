//! Route result and error taxonomy shared by both path algorithms.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::NodeId;

/// A computed shortest route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Node ids along the route, start first, end last.
    pub path: Vec<NodeId>,
    /// Total cost: summed edge weights for Dijkstra, hop count for BFS.
    pub distance: f64,
}

/// Errors a path query can produce.
///
/// Only path queries fail; mutations are total and treat duplicate or
/// absent ids as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// An endpoint id is not a node in the graph.
    #[error("node `{0}` does not exist")]
    NodeNotFound(NodeId),

    /// Both endpoints exist but nothing connects them. A normal outcome on
    /// disconnected graphs that callers are expected to handle.
    #[error("no path exists between `{start}` and `{end}`")]
    NoPathExists { start: NodeId, end: NodeId },
}
