//! Shortest-path algorithms.
//!
//! Both algorithms are pure, stateless computations over the graph's
//! current structure: nothing is cached across calls and mutations never
//! invalidate partial state, because there is none.

mod bfs;
mod dijkstra;
mod route;

pub use bfs::bfs;
pub use dijkstra::dijkstra;
pub use route::{Route, RouteError};
