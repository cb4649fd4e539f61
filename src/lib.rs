//! RouteGraph - WASM Module
//!
//! This module provides the graph data structure and shortest-path
//! algorithms for the RouteGraph route-planning tool. It is compiled to
//! WebAssembly and exposes a JavaScript-friendly API via wasm-bindgen.
//!
//! # Architecture
//!
//! - `graph`: undirected weighted graph with a symmetric map-of-maps
//!   adjacency structure
//! - `routing`: Dijkstra (summed weights) and BFS (hop count) path queries
//!
//! The UI layer consumes the engine exclusively through this boundary; the
//! import/export payload it persists is owned here, not by the engine.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

pub mod graph;
pub mod routing;

use graph::{DEFAULT_EDGE_WEIGHT, Edge, NodeId, RouteGraph};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::debug_1(&"routegraph-wasm initialized".into());
}

/// Path algorithm selection, persisted alongside the graph so a reloaded
/// session resumes with the same cost model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dijkstra,
    Bfs,
}

impl Algorithm {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "dijkstra" => Some(Self::Dijkstra),
            "bfs" => Some(Self::Bfs),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::Bfs => "bfs",
        }
    }
}

/// Exported graph state: node list, edge list, algorithm choice.
///
/// Replaying `addNode` for each node and then `addEdge` for each edge in
/// recorded order reproduces a graph with identical query results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub algorithm: Option<Algorithm>,
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsError::new(&err.to_string()).into()
}

/// Main entry point for the route graph engine.
///
/// This struct wraps the internal RouteGraph and provides the public API
/// exposed to JavaScript.
#[wasm_bindgen]
pub struct RouteGraphWasm {
    graph: RouteGraph,
    algorithm: Algorithm,
}

#[wasm_bindgen]
impl RouteGraphWasm {
    /// Create a new empty route graph.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            graph: RouteGraph::new(),
            algorithm: Algorithm::Dijkstra,
        }
    }

    /// Create a route graph with pre-allocated node capacity.
    #[wasm_bindgen(js_name = withCapacity)]
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            graph: RouteGraph::with_capacity(node_capacity),
            algorithm: Algorithm::Dijkstra,
        }
    }

    /// Take an independent deep copy of the graph (and algorithm choice).
    ///
    /// Mutating the snapshot never affects the original and vice versa.
    pub fn snapshot(&self) -> RouteGraphWasm {
        Self {
            graph: self.graph.snapshot(),
            algorithm: self.algorithm,
        }
    }

    // =========================================================================
    // Node Operations
    // =========================================================================

    /// Add a node. No-op if the id already exists.
    #[wasm_bindgen(js_name = addNode)]
    pub fn add_node(&mut self, id: &str) {
        self.graph.add_node(id);
    }

    /// Remove a node and all its incident edges. No-op if absent.
    #[wasm_bindgen(js_name = removeNode)]
    pub fn remove_node(&mut self, id: &str) {
        self.graph.remove_node(id);
    }

    /// Check if a node exists.
    #[wasm_bindgen(js_name = hasNode)]
    pub fn has_node(&self, id: &str) -> bool {
        self.graph.has_node(id)
    }

    /// Get all node ids in insertion order.
    #[wasm_bindgen(js_name = getNodes)]
    pub fn get_nodes(&self) -> Vec<String> {
        self.graph.nodes().map(|n| n.as_str().to_string()).collect()
    }

    /// Get the number of nodes in the graph.
    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    // =========================================================================
    // Edge Operations
    // =========================================================================

    /// Add an undirected edge, inserting either endpoint if missing.
    ///
    /// Omitting the weight uses 1, the unweighted-mode convention.
    /// Re-adding an existing pair replaces the weight.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge(&mut self, source: &str, target: &str, weight: Option<f64>) {
        self.graph
            .add_edge(source, target, weight.unwrap_or(DEFAULT_EDGE_WEIGHT));
    }

    /// Remove the edge between two nodes, if present.
    #[wasm_bindgen(js_name = removeEdge)]
    pub fn remove_edge(&mut self, source: &str, target: &str) {
        self.graph.remove_edge(source, target);
    }

    /// Get every undirected edge exactly once, as
    /// `{source, target, weight}` records.
    #[wasm_bindgen(js_name = getEdges)]
    pub fn get_edges(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.graph.edges()).map_err(to_js_error)
    }

    /// Get the number of undirected edges in the graph.
    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Get a node's neighbors as a Map from neighbor id to edge weight,
    /// or undefined if the id is not a node.
    #[wasm_bindgen(js_name = getNeighbors)]
    pub fn get_neighbors(&self, id: &str) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.graph.neighbors(id)).map_err(to_js_error)
    }

    // =========================================================================
    // Path Queries
    // =========================================================================

    /// Shortest path by total edge weight.
    ///
    /// Returns `{path, distance}`; throws if an endpoint does not exist or
    /// no path connects the endpoints.
    pub fn dijkstra(&self, start: &str, end: &str) -> Result<JsValue, JsValue> {
        let route = self.graph.dijkstra(start, end).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&route).map_err(to_js_error)
    }

    /// Shortest path by hop count.
    ///
    /// Returns `{path, distance}`; throws if an endpoint does not exist or
    /// no path connects the endpoints.
    pub fn bfs(&self, start: &str, end: &str) -> Result<JsValue, JsValue> {
        let route = self.graph.bfs(start, end).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&route).map_err(to_js_error)
    }

    /// Shortest path using the currently selected algorithm.
    #[wasm_bindgen(js_name = findRoute)]
    pub fn find_route(&self, start: &str, end: &str) -> Result<JsValue, JsValue> {
        match self.algorithm {
            Algorithm::Dijkstra => self.dijkstra(start, end),
            Algorithm::Bfs => self.bfs(start, end),
        }
    }

    /// Get the selected algorithm name (`"dijkstra"` or `"bfs"`).
    pub fn algorithm(&self) -> String {
        self.algorithm.name().to_string()
    }

    /// Select the algorithm used by `findRoute`.
    ///
    /// Throws on names other than `"dijkstra"` or `"bfs"`.
    #[wasm_bindgen(js_name = setAlgorithm)]
    pub fn set_algorithm(&mut self, name: &str) -> Result<(), JsValue> {
        self.algorithm = Algorithm::parse(name)
            .ok_or_else(|| to_js_error(format!("unknown algorithm `{name}`")))?;
        Ok(())
    }

    // =========================================================================
    // Import / Export
    // =========================================================================

    /// Export the graph as `{nodes, edges, algorithm}` for persistence.
    #[wasm_bindgen(js_name = exportGraph)]
    pub fn export_graph(&self) -> Result<JsValue, JsValue> {
        let data = GraphData {
            nodes: self.graph.nodes().cloned().collect(),
            edges: self.graph.edges(),
            algorithm: Some(self.algorithm),
        };
        serde_wasm_bindgen::to_value(&data).map_err(to_js_error)
    }

    /// Replace the graph with a previously exported `{nodes, edges,
    /// algorithm}` payload, replaying node then edge insertions in
    /// recorded order.
    #[wasm_bindgen(js_name = importGraph)]
    pub fn import_graph(&mut self, data: JsValue) -> Result<(), JsValue> {
        let data: GraphData = serde_wasm_bindgen::from_value(data).map_err(to_js_error)?;

        self.graph.clear();
        for node in &data.nodes {
            self.graph.add_node(node.as_str());
        }
        for edge in &data.edges {
            self.graph
                .add_edge(edge.source.as_str(), edge.target.as_str(), edge.weight);
        }
        if let Some(algorithm) = data.algorithm {
            self.algorithm = algorithm;
        }
        Ok(())
    }

    // =========================================================================
    // Utilities
    // =========================================================================

    /// Clear all nodes and edges.
    pub fn clear(&mut self) {
        self.graph.clear();
    }
}

impl Default for RouteGraphWasm {
    fn default() -> Self {
        Self::new()
    }
}
