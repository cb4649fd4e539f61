//! RouteGraph - Core graph data structure.
//!
//! The engine stores an undirected weighted graph as an insertion-ordered
//! map from node id to neighbor map (neighbor id -> edge weight). Every edge
//! is stored symmetrically under both endpoints, and the engine maintains
//! that symmetry through all mutations.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, trace};

use super::edge::{Edge, canonical_key};
use super::node::NodeId;
use crate::routing::{self, Route, RouteError};

/// Weight applied when a caller adds an edge without specifying one.
///
/// Unweighted-graph mode is a convention, not a separate type: the UI adds
/// every edge with this weight and hop count equals weighted distance.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// The core graph engine.
///
/// This struct manages:
/// - The node set (keys of the adjacency map, in insertion order)
/// - The symmetric adjacency structure (neighbor id -> weight per node)
/// - Shortest-path queries (Dijkstra over weights, BFS over hop counts)
///
/// All mutations act in place and never fail; duplicate or absent ids are
/// no-ops. Callers that need isolation take a [`snapshot`](Self::snapshot)
/// before mutating. Weights are expected to be finite and non-negative;
/// the engine does not validate this.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    /// Per-node neighbor map. A node with no edges maps to an empty map.
    /// Invariant: `adjacency[a][b] == w` iff `adjacency[b][a] == w`.
    adjacency: IndexMap<NodeId, IndexMap<NodeId, f64>>,
}

impl RouteGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }

    /// Create a graph with pre-allocated node capacity.
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(node_capacity),
        }
    }

    /// Take an independent deep copy of this graph.
    ///
    /// The snapshot shares no mutable state with the source; mutating one
    /// never observably affects the other.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    // =========================================================================
    // Node Operations
    // =========================================================================

    /// Add a node if absent. No-op if the id already exists.
    pub fn add_node(&mut self, id: &str) {
        if !self.adjacency.contains_key(id) {
            trace!("add node {id}");
            self.adjacency.insert(NodeId::new(id), IndexMap::new());
        }
    }

    /// Remove a node and all edges incident to it. No-op if absent.
    pub fn remove_node(&mut self, id: &str) {
        if self.adjacency.shift_remove(id).is_some() {
            debug!("remove node {id}");
            for neighbors in self.adjacency.values_mut() {
                neighbors.shift_remove(id);
            }
        }
    }

    /// Check if a node exists.
    pub fn has_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Iterate all node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    /// Look up the stored [`NodeId`] for an id, if it is a node.
    pub fn node(&self, id: &str) -> Option<&NodeId> {
        self.adjacency.get_key_value(id).map(|(node, _)| node)
    }

    /// Get the number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    // =========================================================================
    // Edge Operations
    // =========================================================================

    /// Add an undirected edge, inserting either endpoint if missing.
    ///
    /// The weight is set symmetrically under both endpoints. Re-adding an
    /// existing pair replaces the weight rather than duplicating the edge.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: f64) {
        self.add_node(source);
        self.add_node(target);

        debug!("add edge {source} <-> {target} (weight {weight})");
        if let Some(neighbors) = self.adjacency.get_mut(source) {
            neighbors.insert(NodeId::new(target), weight);
        }
        if let Some(neighbors) = self.adjacency.get_mut(target) {
            neighbors.insert(NodeId::new(source), weight);
        }
    }

    /// Remove the edge between two nodes, if present. No-op otherwise.
    pub fn remove_edge(&mut self, source: &str, target: &str) {
        if let Some(neighbors) = self.adjacency.get_mut(source) {
            neighbors.shift_remove(target);
        }
        if let Some(neighbors) = self.adjacency.get_mut(target) {
            neighbors.shift_remove(source);
        }
    }

    /// Enumerate each undirected edge exactly once.
    ///
    /// Walks the adjacency structure and emits an edge the first time its
    /// canonical (sorted-pair) key is seen, so exactly one record exists per
    /// logical connection regardless of which endpoint is visited first.
    pub fn edges(&self) -> Vec<Edge> {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        let mut edges = Vec::new();

        for (source, neighbors) in &self.adjacency {
            for (target, &weight) in neighbors {
                let key = canonical_key(source.as_str(), target.as_str());
                if seen.insert(key) {
                    edges.push(Edge::new(source.clone(), target.clone(), weight));
                }
            }
        }

        edges
    }

    /// Get the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        // Each edge appears in both endpoint maps; count it only from its
        // canonically-first endpoint. A permissive self-loop counts once.
        self.adjacency
            .iter()
            .map(|(node, neighbors)| {
                neighbors
                    .keys()
                    .filter(|neighbor| node.as_str() <= neighbor.as_str())
                    .count()
            })
            .sum()
    }

    /// Get a node's neighbor map (neighbor id -> weight), in insertion order.
    ///
    /// Returns `None` if the id is not a node.
    pub fn neighbors(&self, id: &str) -> Option<&IndexMap<NodeId, f64>> {
        self.adjacency.get(id)
    }

    // =========================================================================
    // Path Queries
    // =========================================================================

    /// Shortest path by total edge weight (Dijkstra).
    pub fn dijkstra(&self, start: &str, end: &str) -> Result<Route, RouteError> {
        routing::dijkstra(self, start, end)
    }

    /// Shortest path by hop count (breadth-first search).
    pub fn bfs(&self, start: &str, end: &str) -> Result<Route, RouteError> {
        routing::bfs(self, start, end)
    }

    // =========================================================================
    // Utilities
    // =========================================================================

    /// Clear all nodes and edges, resetting the engine to its initial state.
    pub fn clear(&mut self) {
        debug!("clear graph");
        self.adjacency.clear();
    }
}
