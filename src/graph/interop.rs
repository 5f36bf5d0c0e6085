//! Conversions between [`Graph`] and `petgraph` graphs

use std::hash::Hash;

use petgraph::graph::{DiGraph, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::{Graph, Orientation};

impl<N> Graph<N>
where
    N: Clone + Eq + Hash,
{
    /// Directed `petgraph` view with one edge per adjacency entry.
    ///
    /// Node indices follow insertion order, so `NodeIndex::new(i)` is the
    /// `i`-th node of `self.nodes()`.
    pub fn to_digraph(&self) -> DiGraph<N, ()> {
        let mut graph = DiGraph::with_capacity(self.node_count(), self.edge_count());
        for node in self.nodes() {
            graph.add_node(node.clone());
        }
        for u in 0..self.node_count() {
            for &v in self.successors(u) {
                graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
            }
        }
        graph
    }

    /// Undirected `petgraph` view with one edge per undirected edge.
    ///
    /// Symmetric entry pairs collapse into a single edge, matched by
    /// multiplicity, so parallel edges survive the conversion. Only
    /// meaningful for symmetric adjacency.
    pub fn to_ungraph(&self) -> UnGraph<N, ()> {
        let mut graph = UnGraph::with_capacity(self.node_count(), self.edge_count());
        for node in self.nodes() {
            graph.add_node(node.clone());
        }
        for u in 0..self.node_count() {
            for &v in self.successors(u) {
                // Each non-loop edge is listed from both ends; keep the entry
                // seen from the lower index
                if u <= v {
                    graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
                }
            }
        }
        graph
    }
}

impl<N, E> From<&DiGraph<N, E>> for Graph<N>
where
    N: Clone + Eq + Hash,
{
    /// Adopt a `petgraph` directed graph. Edges are appended in edge index
    /// order and parallel edges are kept; node weights become identifiers,
    /// so duplicate weights merge into one node
    fn from(source: &DiGraph<N, E>) -> Self {
        let mut graph = Graph::new(Orientation::Directed);
        for index in source.node_indices() {
            graph.add_node(source[index].clone());
        }
        for edge in source.edge_references() {
            graph.add_edge(source[edge.source()].clone(), source[edge.target()].clone());
        }
        graph
    }
}
