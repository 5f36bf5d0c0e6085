//! # Traversal Module
//!
//! Single-source walks over a [`Graph`](crate::graph::Graph).
//!
//! - [`bfs`]: breadth-first order, FIFO frontier, nodes marked visited on
//!   enqueue
//! - [`dfs`]: depth-first preorder, explicit stack of `(node, cursor)` frames
//! - [`shortest_path`]: fewest-edge path recovered from BFS parent pointers
//!
//! Each call allocates its own visitation state and only reads the graph, so
//! any number of traversals may share one graph.
//!
//! ## Example
//!
//! ```
//! use wayfinder::graph::{Graph, Orientation};
//! use wayfinder::traversal::{bfs, dfs};
//!
//! # fn main() -> Result<(), wayfinder::error::WayfinderError> {
//! let graph = Graph::from_adjacency(
//!     Orientation::Directed,
//!     [("A", vec!["B", "C"]), ("B", vec!["D"]), ("C", vec![]), ("D", vec![])],
//! );
//!
//! assert_eq!(bfs(&graph, &"A")?, vec!["A", "B", "C", "D"]);
//! assert_eq!(dfs(&graph, &"A")?, vec!["A", "B", "D", "C"]);
//! # Ok(())
//! # }
//! ```

mod bfs;
mod dfs;

use std::fmt::Debug;
use std::hash::Hash;

pub use bfs::{bfs, shortest_path};
pub use dfs::dfs;

use crate::error::WayfinderError;
use crate::graph::Graph;

/// Traversal order selector used by the CLI
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    /// Breadth-first
    Bfs,
    /// Depth-first
    Dfs,
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraversalOrder::Bfs => write!(f, "breadth-first"),
            TraversalOrder::Dfs => write!(f, "depth-first"),
        }
    }
}

impl TraversalOrder {
    pub fn traverse<N>(self, graph: &Graph<N>, source: &N) -> Result<Vec<N>, WayfinderError>
    where
        N: Clone + Eq + Hash + Debug,
    {
        match self {
            TraversalOrder::Bfs => bfs(graph, source),
            TraversalOrder::Dfs => dfs(graph, source),
        }
    }
}
