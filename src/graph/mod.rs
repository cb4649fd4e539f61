//! Graph data structure and operations.
//!
//! This module provides the undirected weighted graph underlying the route
//! planner: an insertion-ordered map-of-maps adjacency structure maintained
//! symmetrically for every edge, with total (never-failing) mutations and
//! snapshot semantics for callers that need isolation.

mod edge;
mod engine;
mod node;

pub use edge::{Edge, canonical_key};
pub use engine::{DEFAULT_EDGE_WEIGHT, RouteGraph};
pub use node::NodeId;
