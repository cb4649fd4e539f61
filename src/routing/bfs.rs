//! Breadth-first shortest path over hop counts.
//!
//! Treats every edge as cost 1 regardless of its stored weight — the
//! unweighted counterpart to Dijkstra for graphs built in unweighted mode.

use std::collections::{HashMap, HashSet, VecDeque};

use log::trace;

use super::route::{Route, RouteError};
use crate::graph::{NodeId, RouteGraph};

/// Compute the minimum-hop path between two existing nodes.
///
/// Standard FIFO breadth-first search recording each node's first-seen
/// predecessor; predecessors are never overwritten, which guarantees the
/// hop count is minimal. Expansion stops as soon as the dequeued node is
/// the target. Distance is the hop count (path length minus one).
///
/// Errors with [`RouteError::NodeNotFound`] if either endpoint is absent
/// and [`RouteError::NoPathExists`] if the target is never reached.
pub fn bfs(graph: &RouteGraph, start: &str, end: &str) -> Result<Route, RouteError> {
    let start_node = graph
        .node(start)
        .ok_or_else(|| RouteError::NodeNotFound(NodeId::new(start)))?;
    let end_node = graph
        .node(end)
        .ok_or_else(|| RouteError::NodeNotFound(NodeId::new(end)))?;

    trace!("bfs {start} -> {end}");

    if start_node == end_node {
        return Ok(Route {
            path: vec![start_node.clone()],
            distance: 0.0,
        });
    }

    let mut queue: VecDeque<&NodeId> = VecDeque::new();
    let mut visited: HashSet<&NodeId> = HashSet::new();
    let mut previous: HashMap<&NodeId, &NodeId> = HashMap::new();

    visited.insert(start_node);
    queue.push_back(start_node);

    while let Some(current) = queue.pop_front() {
        if current == end_node {
            break;
        }

        if let Some(neighbors) = graph.neighbors(current.as_str()) {
            for neighbor in neighbors.keys() {
                // First discovery wins; later sightings never overwrite
                if visited.insert(neighbor) {
                    previous.insert(neighbor, current);
                    queue.push_back(neighbor);
                }
            }
        }
    }

    if !previous.contains_key(end_node) {
        return Err(RouteError::NoPathExists {
            start: start_node.clone(),
            end: end_node.clone(),
        });
    }

    let mut path: Vec<NodeId> = vec![end_node.clone()];
    let mut cursor = end_node;
    while let Some(&prev) = previous.get(cursor) {
        path.push(prev.clone());
        cursor = prev;
    }
    path.reverse();

    let distance = (path.len() - 1) as f64;
    Ok(Route { path, distance })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(route: &Route) -> Vec<&str> {
        route.path.iter().map(|n| n.as_str()).collect()
    }

    #[test]
    fn test_hop_count_ignores_weights() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 10.0);
        graph.add_edge("B", "C", 5.0);

        let route = graph.bfs("A", "C").unwrap();
        assert_eq!(ids(&route), vec!["A", "B", "C"]);
        assert_eq!(route.distance, 2.0);
    }

    #[test]
    fn test_prefers_fewer_hops_over_lighter_weight() {
        // Direct A-C edge is heavy but one hop; A-B-C is light but two
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", 1.0);
        graph.add_edge("A", "C", 100.0);

        let route = graph.bfs("A", "C").unwrap();
        assert_eq!(ids(&route), vec!["A", "C"]);
        assert_eq!(route.distance, 1.0);
    }

    #[test]
    fn test_first_seen_predecessor_wins() {
        // Diamond: A-B and A-C both lead to D; B is inserted first, so the
        // reported path goes through B
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("A", "C", 1.0);
        graph.add_edge("B", "D", 1.0);
        graph.add_edge("C", "D", 1.0);

        let route = graph.bfs("A", "D").unwrap();
        assert_eq!(ids(&route), vec!["A", "B", "D"]);
        assert_eq!(route.distance, 2.0);
    }

    #[test]
    fn test_start_equals_end() {
        let mut graph = RouteGraph::new();
        graph.add_node("A");

        let route = graph.bfs("A", "A").unwrap();
        assert_eq!(ids(&route), vec!["A"]);
        assert_eq!(route.distance, 0.0);
    }

    #[test]
    fn test_missing_endpoint_errors() {
        let mut graph = RouteGraph::new();
        graph.add_node("A");

        assert_eq!(
            graph.bfs("A", "Z"),
            Err(RouteError::NodeNotFound(NodeId::new("Z")))
        );
        assert_eq!(
            graph.bfs("Z", "A"),
            Err(RouteError::NodeNotFound(NodeId::new("Z")))
        );
    }

    #[test]
    fn test_disconnected_pair_errors() {
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_node("C");

        assert_eq!(
            graph.bfs("A", "C"),
            Err(RouteError::NoPathExists {
                start: NodeId::new("A"),
                end: NodeId::new("C"),
            })
        );
    }

    #[test]
    fn test_minimum_hop_count_on_cycle() {
        // Ring A-B-C-D-E-A: A to C is 2 hops either way
        let mut graph = RouteGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", 1.0);
        graph.add_edge("C", "D", 1.0);
        graph.add_edge("D", "E", 1.0);
        graph.add_edge("E", "A", 1.0);

        let route = graph.bfs("A", "C").unwrap();
        assert_eq!(route.distance, 2.0);
    }
}
