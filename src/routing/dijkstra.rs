//! Dijkstra shortest path over summed edge weights.
//!
//! The next frontier node is picked with a linear scan over the unvisited
//! set rather than a binary heap. Route-planner graphs are tens of nodes;
//! the scan keeps tie-breaking tied to insertion order, which a heap would
//! not. Do not swap in a heap without re-validating the tie-break behavior
//! against the scenario tests below.

use indexmap::{IndexMap, IndexSet};
use log::trace;

use super::route::{Route, RouteError};
use crate::graph::{NodeId, RouteGraph};

/// Compute the minimum-weight path between two existing nodes.
///
/// Distances start at infinity except the start node. Each iteration scans
/// the unvisited set for the smallest tentative distance, stopping early
/// when that node is the target or when every remaining node is
/// unreachable. The path is rebuilt by walking predecessors back from the
/// target.
///
/// Errors with [`RouteError::NodeNotFound`] if either endpoint is absent
/// and [`RouteError::NoPathExists`] if the endpoints are disconnected.
pub fn dijkstra(graph: &RouteGraph, start: &str, end: &str) -> Result<Route, RouteError> {
    let start_node = graph
        .node(start)
        .ok_or_else(|| RouteError::NodeNotFound(NodeId::new(start)))?;
    let end_node = graph
        .node(end)
        .ok_or_else(|| RouteError::NodeNotFound(NodeId::new(end)))?;

    trace!("dijkstra {start} -> {end}");

    let mut distances: IndexMap<&NodeId, f64> = IndexMap::with_capacity(graph.node_count());
    let mut previous: IndexMap<&NodeId, Option<&NodeId>> =
        IndexMap::with_capacity(graph.node_count());
    let mut unvisited: IndexSet<&NodeId> = IndexSet::with_capacity(graph.node_count());

    for node in graph.nodes() {
        let initial = if node == start_node { 0.0 } else { f64::INFINITY };
        distances.insert(node, initial);
        previous.insert(node, None);
        unvisited.insert(node);
    }

    while !unvisited.is_empty() {
        // Linear scan for the unvisited node with the smallest tentative
        // distance. Ties keep the earliest-inserted node.
        let mut current: Option<&NodeId> = None;
        let mut smallest = f64::INFINITY;
        for &node in &unvisited {
            let distance = distances.get(node).copied().unwrap_or(f64::INFINITY);
            if distance < smallest {
                smallest = distance;
                current = Some(node);
            }
        }

        // No candidate means every remaining node is unreachable.
        let Some(current) = current else { break };
        if current == end_node {
            break;
        }

        // shift_remove keeps the scan order stable for later iterations
        unvisited.shift_remove(current);

        if let Some(neighbors) = graph.neighbors(current.as_str()) {
            for (neighbor, &weight) in neighbors {
                if !unvisited.contains(neighbor) {
                    continue;
                }
                let candidate = smallest + weight;
                if let Some(best) = distances.get_mut(neighbor) {
                    if candidate < *best {
                        *best = candidate;
                        previous.insert(neighbor, Some(current));
                    }
                }
            }
        }
    }

    if previous.get(end_node).copied().flatten().is_none() && end_node != start_node {
        return Err(RouteError::NoPathExists {
            start: start_node.clone(),
            end: end_node.clone(),
        });
    }

    let mut path: Vec<NodeId> = Vec::new();
    let mut cursor = Some(end_node);
    while let Some(node) = cursor {
        path.push(node.clone());
        cursor = previous.get(node).copied().flatten();
    }
    path.reverse();

    let distance = distances.get(end_node).copied().unwrap_or(f64::INFINITY);
    Ok(Route { path, distance })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(route: &Route) -> Vec<&str> {
        route.path.iter().map(|n| n.as_str()).collect()
    }

    #[test]
    fn test_weighted_chain() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 10.0);
        graph.add_edge("B", "C", 5.0);

        let route = graph.dijkstra("A", "C").unwrap();
        assert_eq!(ids(&route), vec!["A", "B", "C"]);
        assert_eq!(route.distance, 15.0);
    }

    #[test]
    fn test_prefers_lighter_multi_hop_path() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "C", 5.0);
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", 1.0);

        let route = graph.dijkstra("A", "C").unwrap();
        assert_eq!(ids(&route), vec!["A", "B", "C"]);
        assert_eq!(route.distance, 2.0);
    }

    #[test]
    fn test_start_equals_end() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 10.0);

        let route = graph.dijkstra("A", "A").unwrap();
        assert_eq!(ids(&route), vec!["A"]);
        assert_eq!(route.distance, 0.0);
    }

    #[test]
    fn test_missing_endpoint_errors() {
        let mut graph = RouteGraph::new();
        graph.add_node("A");

        assert_eq!(
            graph.dijkstra("A", "Z"),
            Err(RouteError::NodeNotFound(NodeId::new("Z")))
        );
        assert_eq!(
            graph.dijkstra("Z", "A"),
            Err(RouteError::NodeNotFound(NodeId::new("Z")))
        );
    }

    #[test]
    fn test_disconnected_pair_errors() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_node("C");

        assert_eq!(
            graph.dijkstra("A", "C"),
            Err(RouteError::NoPathExists {
                start: NodeId::new("A"),
                end: NodeId::new("C"),
            })
        );
    }

    #[test]
    fn test_no_path_after_edge_removal() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 10.0);
        graph.add_edge("B", "C", 5.0);
        graph.remove_edge("A", "B");

        assert!(matches!(
            graph.dijkstra("A", "C"),
            Err(RouteError::NoPathExists { .. })
        ));
    }

    #[test]
    fn test_updated_weight_changes_distance() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 10.0);
        graph.add_edge("A", "B", 3.0);

        let route = graph.dijkstra("A", "B").unwrap();
        assert_eq!(route.distance, 3.0);
    }

    #[test]
    fn test_unit_weights_match_bfs_distance() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", 1.0);
        graph.add_edge("C", "D", 1.0);
        graph.add_edge("A", "D", 1.0);

        let weighted = graph.dijkstra("B", "D").unwrap();
        let hops = graph.bfs("B", "D").unwrap();
        assert_eq!(weighted.distance, hops.distance);
    }

    #[test]
    fn test_optimality_against_alternative_path() {
        // Two routes from A to D: A-B-D (7) and A-C-D (6)
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 3.0);
        graph.add_edge("B", "D", 4.0);
        graph.add_edge("A", "C", 2.0);
        graph.add_edge("C", "D", 4.0);

        let route = graph.dijkstra("A", "D").unwrap();
        assert_eq!(ids(&route), vec!["A", "C", "D"]);
        assert_eq!(route.distance, 6.0);
        assert!(route.distance <= 7.0);
    }
}
