//! Core type definitions
//!
//! This module contains the data structures handed from the executors to
//! the report generators, with minimal logic.

use std::path::PathBuf;

use petgraph::algo::connected_components;
use serde::Serialize;

use crate::graph::Orientation;
use crate::loader::LoadedGraph;

/// Outcome of checking one graph file for cycles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphCheck {
    pub name: String,
    pub path: PathBuf,
    pub orientation: Orientation,
    pub node_count: usize,
    pub edge_count: usize,
    /// Weakly connected components for directed graphs
    pub component_count: usize,
    /// Witness of the first cycle found, in path order
    pub cycle: Option<Vec<String>>,
}

impl GraphCheck {
    pub fn from_loaded(loaded: &LoadedGraph) -> Self {
        let graph = &loaded.graph;
        let component_count = match graph.orientation() {
            Orientation::Directed => connected_components(&graph.to_digraph()),
            Orientation::Undirected => connected_components(&graph.to_ungraph()),
        };

        Self {
            name: loaded.name.clone(),
            path: loaded.path.clone(),
            orientation: graph.orientation(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            component_count,
            cycle: graph.find_cycle(),
        }
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Cycle witness closed back onto its first node, `a → b → a`
    pub fn cycle_path(&self) -> Option<String> {
        self.cycle.as_ref().map(|nodes| {
            let mut closed: Vec<&str> = nodes.iter().map(String::as_str).collect();
            if let Some(first) = nodes.first() {
                closed.push(first);
            }
            closed.join(" → ")
        })
    }
}
