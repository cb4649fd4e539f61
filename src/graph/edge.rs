//! Edge record and canonical undirected key.
//!
//! The graph is undirected: an edge between A and B is one logical entity
//! even though the adjacency structure stores it under both endpoints. The
//! canonical key (endpoint ids in sorted order) identifies that logical
//! entity regardless of which endpoint it is seen from, and is what edge
//! enumeration deduplicates on.

use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// An undirected weighted edge.
///
/// `source`/`target` record the orientation the edge was first seen from;
/// they carry no directional meaning. Weight is a non-negative finite
/// number by caller contract — the engine does not validate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

impl Edge {
    /// Create a new edge record.
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// Canonical undirected key for this edge's endpoints.
    pub fn key(&self) -> (&str, &str) {
        canonical_key(self.source.as_str(), self.target.as_str())
    }
}

/// Order two endpoint ids into the canonical (sorted) pair.
///
/// `canonical_key(a, b) == canonical_key(b, a)` for all a, b.
pub fn canonical_key<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}
