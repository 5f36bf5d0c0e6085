//! # Graph Representation and Rendering Module
//!
//! This module provides the adjacency structure shared by every traversal and
//! detector, conversions to and from `petgraph`, and renderers for viewing a
//! graph with its cycles highlighted.
//!
//! ## Components
//!
//! ### Representation
//! - **Graph**: ordered adjacency lists keyed by caller-supplied identifiers
//! - **Orientation**: directed, or undirected with symmetric storage
//!
//! ### Rendering
//! - **GraphRenderer**: renders ASCII, Mermaid and DOT output
//!
//! ## Example
//!
//! ```
//! use wayfinder::graph::{Graph, GraphRenderer, Orientation};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph: Graph<String> = Graph::from_edges(
//!     Orientation::Directed,
//!     [("app", "core"), ("core", "app")]
//!         .map(|(from, to)| (from.to_string(), to.to_string())),
//! );
//!
//! let cycle = graph.find_cycle();
//! let renderer = GraphRenderer::new(true);
//! let mut output = Vec::new();
//! renderer.render_dot(&graph, cycle.as_deref(), &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.contains("digraph"));
//! assert!(dot_output.contains("\"core\" -> \"app\""));
//! # Ok(())
//! # }
//! ```

mod interop;
mod renderer;
mod types;

pub use renderer::GraphRenderer;
pub use types::{Graph, Orientation};
