//! Core graph types
//!
//! This module contains the adjacency structure every traversal and detector
//! reads from.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::WayfinderError;

/// Whether edges are one-way or stored symmetrically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Directed,
    Undirected,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Directed => write!(f, "directed"),
            Orientation::Undirected => write!(f, "undirected"),
        }
    }
}

/// Adjacency-list graph keyed by caller-supplied node identifiers.
///
/// Nodes are stored densely in insertion order; every identifier maps to an
/// index and every index owns an ordered neighbor list. Neighbor order is
/// preserved exactly as edges were added and is the tie-breaking order for
/// every traversal.
///
/// A neighbor that is not yet a node is inserted implicitly as a node
/// without outgoing edges, so a `Graph` never references an unknown node.
///
/// For [`Orientation::Undirected`], [`Graph::add_edge`] records `{u, v}` in
/// both lists (a self-loop is recorded once). [`Graph::from_adjacency`]
/// stores lists verbatim; callers using it for undirected graphs are
/// responsible for symmetry, see [`Graph::is_symmetric`].
#[derive(Debug, Clone)]
pub struct Graph<N> {
    orientation: Orientation,
    nodes: Vec<N>,
    indices: HashMap<N, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl<N> Graph<N>
where
    N: Clone + Eq + Hash,
{
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            nodes: Vec::new(),
            indices: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(Orientation::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(Orientation::Undirected)
    }

    /// Build a graph from `(u, v)` pairs, in order
    pub fn from_edges<I>(orientation: Orientation, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new(orientation);
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// Build a graph from a node -> neighbors mapping, storing every list as
    /// given. Keys are inserted first, in iteration order, so that a key
    /// keeps its position even when it is mentioned earlier as a neighbor.
    pub fn from_adjacency<I, J>(orientation: Orientation, adjacency: I) -> Self
    where
        I: IntoIterator<Item = (N, J)>,
        J: IntoIterator<Item = N>,
    {
        let entries: Vec<(N, Vec<N>)> = adjacency
            .into_iter()
            .map(|(node, neighbors)| (node, neighbors.into_iter().collect()))
            .collect();

        let mut graph = Self::new(orientation);
        for (node, _) in &entries {
            graph.add_node(node.clone());
        }
        for (node, neighbors) in entries {
            let from = graph.add_node(node);
            for neighbor in neighbors {
                let to = graph.add_node(neighbor);
                graph.adjacency[from].push(to);
            }
        }
        graph
    }

    /// Insert a node if absent and return its dense index
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(&index) = self.indices.get(&node) {
            return index;
        }
        let index = self.nodes.len();
        self.indices.insert(node.clone(), index);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        index
    }

    /// Append an edge, inserting missing endpoints
    pub fn add_edge(&mut self, from: N, to: N) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        self.adjacency[from].push(to);
        if self.orientation == Orientation::Undirected && from != to {
            self.adjacency[to].push(from);
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges; for undirected graphs each symmetric pair of entries
    /// counts once and a self-loop counts once
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.iter().map(Vec::len).sum();
        match self.orientation {
            Orientation::Directed => entries,
            Orientation::Undirected => {
                let loops = self
                    .adjacency
                    .iter()
                    .enumerate()
                    .map(|(u, list)| list.iter().filter(|&&v| v == u).count())
                    .sum::<usize>();
                (entries + loops) / 2
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.indices.contains_key(node)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// Neighbors of `node` in list order, or `None` if the node is absent
    pub fn neighbors<'a>(&'a self, node: &N) -> Option<impl Iterator<Item = &'a N> + use<'a, N>> {
        let index = *self.indices.get(node)?;
        Some(self.adjacency[index].iter().map(|&v| &self.nodes[v]))
    }

    /// Every adjacency entry as a `(from, to)` pair, in node then list order
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> {
        self.adjacency.iter().enumerate().flat_map(move |(u, list)| {
            list.iter().map(move |&v| (&self.nodes[u], &self.nodes[v]))
        })
    }

    /// Whether every entry `v` in `u`'s list is matched by an entry `u` in
    /// `v`'s list with the same multiplicity
    pub fn is_symmetric(&self) -> bool {
        let mut counts: HashMap<(usize, usize), isize> = HashMap::new();
        for (u, list) in self.adjacency.iter().enumerate() {
            for &v in list {
                if u == v {
                    continue;
                }
                *counts.entry((u.min(v), u.max(v))).or_default() += if u < v { 1 } else { -1 };
            }
        }
        counts.values().all(|&balance| balance == 0)
    }

    pub(crate) fn index_of(&self, node: &N) -> Option<usize> {
        self.indices.get(node).copied()
    }

    pub(crate) fn node_at(&self, index: usize) -> &N {
        &self.nodes[index]
    }

    pub(crate) fn successors(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }
}

impl<N> Graph<N>
where
    N: Clone + Eq + Hash + Debug,
{
    /// Dense index of `node`, or `NodeNotFound`
    pub(crate) fn require(&self, node: &N) -> Result<usize, WayfinderError> {
        self.index_of(node)
            .ok_or_else(|| WayfinderError::node_not_found(node))
    }
}

impl<N> Default for Graph<N>
where
    N: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::directed()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_add_edge_preserves_neighbor_order() {
        let graph = Graph::from_edges(
            Orientation::Directed,
            [("A", "C"), ("A", "B"), ("B", "D")],
        );

        let neighbors: Vec<_> = graph.neighbors(&"A").unwrap().copied().collect();
        assert_eq!(neighbors, vec!["C", "B"]);
        assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec!["A", "C", "B", "D"]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_undirected_edges_are_symmetric() {
        let graph = Graph::from_edges(Orientation::Undirected, [(1, 2), (2, 3), (3, 3)]);

        assert_eq!(graph.neighbors(&2).unwrap().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(graph.neighbors(&3).unwrap().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_from_adjacency_inserts_unknown_neighbors() {
        let graph = Graph::from_adjacency(
            Orientation::Directed,
            [("A", vec!["B", "Z"]), ("B", vec![])],
        );

        assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec!["A", "B", "Z"]);
        assert!(graph.contains(&"Z"));
        assert_eq!(graph.neighbors(&"Z").unwrap().count(), 0);
    }

    #[test]
    fn test_from_adjacency_asymmetric_lists_are_detected() {
        let graph = Graph::from_adjacency(
            Orientation::Undirected,
            [("A", vec!["B"]), ("B", vec![])],
        );
        assert!(!graph.is_symmetric());

        let graph = Graph::from_adjacency(
            Orientation::Undirected,
            [("A", vec!["B", "B"]), ("B", vec!["A"])],
        );
        assert!(!graph.is_symmetric());
    }

    #[test]
    fn test_missing_node_has_no_neighbors() {
        let graph: Graph<&str> = Graph::directed();
        assert!(graph.neighbors(&"A").is_none());
        assert!(graph.is_empty());
        assert!(matches!(
            graph.require(&"A"),
            Err(WayfinderError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn test_edges_iterates_adjacency_entries() {
        let graph = Graph::from_edges(Orientation::Undirected, [("A", "B")]);
        let edges: Vec<_> = graph.edges().map(|(u, v)| (*u, *v)).collect();
        assert_eq!(edges, vec![("A", "B"), ("B", "A")]);
    }
}
