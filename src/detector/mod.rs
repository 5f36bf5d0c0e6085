//! # Cycle Detection Module
//!
//! This module answers "does this graph contain a cycle?" for both
//! orientations, and finds the start and length of the loop in an iterated
//! function sequence.
//!
//! ## Algorithms
//!
//! - **Directed**: three-color depth-first search. A node is `InProgress`
//!   while it is on the active path and `Finished` once fully explored; an
//!   edge into an `InProgress` node is a back edge and closes a cycle.
//! - **Undirected**: depth-first search that remembers the parent each node
//!   was discovered from. Meeting an already visited node through any edge
//!   other than that tree edge closes a cycle.
//! - **Floyd**: tortoise and hare over `x0, f(x0), f(f(x0)), ...`.
//!
//! Both graph detectors run in O(V + E), visit every component and keep
//! their search stack on the heap.
//!
//! ## Example
//!
//! ```
//! use wayfinder::detector::{find_cycle_directed, has_cycle_directed, has_cycle_undirected};
//! use wayfinder::graph::{Graph, Orientation};
//!
//! let deps = Graph::from_edges(Orientation::Directed, [("A", "B"), ("B", "C"), ("C", "A")]);
//! assert!(has_cycle_directed(&deps));
//! assert_eq!(find_cycle_directed(&deps), Some(vec!["A", "B", "C"]));
//!
//! let roads = Graph::from_edges(Orientation::Undirected, [("A", "B"), ("B", "C")]);
//! assert!(!has_cycle_undirected(&roads));
//! ```

mod directed;
mod floyd;
mod undirected;

use std::hash::Hash;

pub use directed::{VisitState, find_cycle_directed, has_cycle_directed};
pub use floyd::{CycleSpan, floyd};
pub use undirected::{find_cycle_undirected, has_cycle_undirected};

use crate::graph::{Graph, Orientation};

impl<N> Graph<N>
where
    N: Clone + Eq + Hash,
{
    /// Cycle witness using the detector that matches the graph's orientation
    pub fn find_cycle(&self) -> Option<Vec<N>> {
        match self.orientation() {
            Orientation::Directed => find_cycle_directed(self),
            Orientation::Undirected => find_cycle_undirected(self),
        }
    }

    pub fn has_cycle(&self) -> bool {
        self.find_cycle().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_selects_detector() {
        let edges = [("A", "B"), ("B", "C")];

        // The same two edges stored symmetrically are acyclic, and stored
        // one-way with a reverse edge they are cyclic
        let undirected = Graph::from_edges(Orientation::Undirected, edges);
        assert!(!undirected.has_cycle());

        let mut directed = Graph::from_edges(Orientation::Directed, edges);
        assert!(!directed.has_cycle());
        directed.add_edge("B", "A");
        assert_eq!(directed.find_cycle(), Some(vec!["A", "B"]));
    }

    #[test]
    fn test_symmetric_lists_read_as_directed_are_cyclic() {
        let graph = Graph::from_edges(Orientation::Undirected, [("A", "B")]);

        assert!(!has_cycle_undirected(&graph));
        assert!(has_cycle_directed(&graph));
    }
}
