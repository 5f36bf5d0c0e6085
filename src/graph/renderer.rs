use std::collections::{HashMap, HashSet};
use std::io::Write;

use miette::Result;

use crate::error::WayfinderError;
use crate::graph::{Graph, Orientation};

// Blue-Orange Accessible Palette
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
    pub const LEGEND_BG: &str = "#FAFAFA"; // Off-white background
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(WayfinderError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(WayfinderError::from)
    };
}

/// Nodes and edges that belong to a cycle witness
struct CycleHighlight<'a> {
    nodes: HashSet<&'a str>,
    edges: HashSet<(&'a str, &'a str)>,
}

impl<'a> CycleHighlight<'a> {
    fn new(witness: Option<&'a [String]>, orientation: Orientation) -> Self {
        let witness = witness.unwrap_or_default();
        let nodes = witness.iter().map(String::as_str).collect();

        // The witness is a closed walk: consecutive pairs plus last -> first
        let mut edges = HashSet::new();
        for (i, from) in witness.iter().enumerate() {
            let to = &witness[(i + 1) % witness.len()];
            edges.insert((from.as_str(), to.as_str()));
            if orientation == Orientation::Undirected {
                edges.insert((to.as_str(), from.as_str()));
            }
        }

        Self { nodes, edges }
    }

    fn has_node(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    fn has_edge(&self, from: &'a str, to: &'a str) -> bool {
        self.edges.contains(&(from, to))
    }
}

/// Renders a [`Graph<String>`] as ASCII, Mermaid or Graphviz DOT, optionally
/// highlighting one cycle witness.
pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    pub fn render_ascii(
        &self,
        graph: &Graph<String>,
        cycle: Option<&[String]>,
        output: &mut dyn Write,
    ) -> Result<()> {
        if graph.is_empty() {
            writeln_out!(output, "No nodes found to visualize")?;
            return Ok(());
        }

        let highlight = self.highlight(graph, cycle);

        writeln_out!(
            output,
            "\n🧭 {} graph: {} nodes, {} edges\n",
            graph.orientation(),
            graph.node_count(),
            graph.edge_count()
        )?;

        let arrow = match graph.orientation() {
            Orientation::Directed => "→",
            Orientation::Undirected => "—",
        };

        for node in graph.nodes() {
            if highlight.has_node(node) {
                writeln_out!(output, "┌─────────────────────────────────────┐")?;
                writeln_out!(output, "│ {} ⚠️  IN CYCLE", node)?;
                writeln_out!(output, "└─────────────────────────────────────┘")?;
            } else {
                writeln_out!(output, "{}", node)?;
            }

            let neighbors: Vec<&String> = graph.neighbors(node).into_iter().flatten().collect();
            if neighbors.is_empty() {
                writeln_out!(output, "  └── (no neighbors)")?;
            }
            for (i, neighbor) in neighbors.iter().enumerate() {
                let prefix = if i == neighbors.len() - 1 {
                    "└──"
                } else {
                    "├──"
                };
                let marker = if highlight.has_edge(node, neighbor) {
                    " ⚠️  [CYCLE]"
                } else {
                    ""
                };
                writeln_out!(output, "  {} {} {}{}", prefix, arrow, neighbor, marker)?;
            }

            writeln_out!(output)?;
        }

        if !highlight.nodes.is_empty() {
            writeln_out!(output, "⚠️  = Part of a cycle")?;
        }

        Ok(())
    }

    pub fn render_mermaid(
        &self,
        graph: &Graph<String>,
        cycle: Option<&[String]>,
        output: &mut dyn Write,
    ) -> Result<()> {
        let highlight = self.highlight(graph, cycle);
        let arrow = match graph.orientation() {
            Orientation::Directed => "-->",
            Orientation::Undirected => "---",
        };

        let ids = self.mermaid_ids(graph);

        writeln_out!(output, "graph TD")?;

        for node in graph.nodes() {
            let node_id = &ids[node.as_str()];
            let label = self.mermaid_label(node);
            if highlight.has_node(node) {
                writeln_out!(output, "    {}((\"{}\"))", node_id, label)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:3px",
                    node_id,
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            } else {
                writeln_out!(output, "    {}[\"{}\"]", node_id, label)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:2px",
                    node_id,
                    colors::NORMAL_NODE_FILL,
                    colors::NORMAL_NODE_STROKE
                )?;
            }
        }

        writeln_out!(output)?;

        for (link_style_index, (from, to)) in self.drawn_edges(graph).into_iter().enumerate() {
            writeln_out!(
                output,
                "    {} {} {}",
                ids[from],
                arrow,
                ids[to]
            )?;
            let (color, width) = if highlight.has_edge(from, to) {
                (colors::CYCLE_EDGE, 3)
            } else {
                (colors::NORMAL_EDGE, 2)
            };
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:{}px",
                link_style_index,
                color,
                width
            )?;
        }

        if let Some(witness) = cycle.filter(|_| self.highlight_cycles) {
            writeln_out!(output)?;
            writeln_out!(output, "    subgraph Legend")?;
            writeln_out!(output, "        L1[Node]")?;
            writeln_out!(output, "        L2[Node in Cycle]")?;
            writeln_out!(
                output,
                "        L3[\"Cycle: {}\"]",
                self.mermaid_label(&self.closed_walk(witness).join(" → "))
            )?;
            writeln_out!(
                output,
                "        style L1 fill:{},stroke:{},stroke-width:2px",
                colors::NORMAL_NODE_FILL,
                colors::NORMAL_NODE_STROKE
            )?;
            writeln_out!(
                output,
                "        style L2 fill:{},stroke:{},stroke-width:3px",
                colors::CYCLE_NODE_FILL,
                colors::CYCLE_NODE_STROKE
            )?;
            writeln_out!(
                output,
                "        style Legend fill:{},stroke:#ddd,stroke-width:1px",
                colors::LEGEND_BG
            )?;
            writeln_out!(output, "    end")?;
        }

        Ok(())
    }

    pub fn render_dot(
        &self,
        graph: &Graph<String>,
        cycle: Option<&[String]>,
        output: &mut dyn Write,
    ) -> Result<()> {
        let highlight = self.highlight(graph, cycle);
        let (keyword, arrow) = match graph.orientation() {
            Orientation::Directed => ("digraph", "->"),
            Orientation::Undirected => ("graph", "--"),
        };

        writeln_out!(output, "{} wayfinder {{", keyword)?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        writeln_out!(output)?;

        for node in graph.nodes() {
            let (fill_color, stroke_color) = if highlight.has_node(node) {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };
            writeln_out!(
                output,
                r#"    "{}" [style=filled, fillcolor="{}", color="{}", penwidth=2];"#,
                self.dot_escape(node),
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        for (from, to) in self.drawn_edges(graph) {
            let (color, width) = if highlight.has_edge(from, to) {
                (colors::CYCLE_EDGE, 3)
            } else {
                (colors::NORMAL_EDGE, 2)
            };
            writeln_out!(
                output,
                r#"    "{}" {} "{}" [color="{}", penwidth={}];"#,
                self.dot_escape(from),
                arrow,
                self.dot_escape(to),
                color,
                width
            )?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn highlight<'a>(
        &self,
        graph: &Graph<String>,
        cycle: Option<&'a [String]>,
    ) -> CycleHighlight<'a> {
        CycleHighlight::new(cycle.filter(|_| self.highlight_cycles), graph.orientation())
    }

    // Undirected edges are listed from both ends; draw each occurrence once
    fn drawn_edges<'g>(&self, graph: &'g Graph<String>) -> Vec<(&'g str, &'g str)> {
        match graph.orientation() {
            Orientation::Directed => graph
                .edges()
                .map(|(from, to)| (from.as_str(), to.as_str()))
                .collect(),
            Orientation::Undirected => {
                let position: HashMap<&str, usize> = graph
                    .nodes()
                    .enumerate()
                    .map(|(i, node)| (node.as_str(), i))
                    .collect();
                graph
                    .edges()
                    .filter(|(from, to)| position[from.as_str()] <= position[to.as_str()])
                    .map(|(from, to)| (from.as_str(), to.as_str()))
                    .collect()
            }
        }
    }

    fn closed_walk<'a>(&self, witness: &'a [String]) -> Vec<&'a str> {
        let mut walk: Vec<&str> = witness.iter().map(String::as_str).collect();
        if let Some(first) = witness.first() {
            walk.push(first);
        }
        walk
    }

    /// Node IDs come from graph positions, so distinct names never collide
    fn mermaid_ids<'a>(&self, graph: &'a Graph<String>) -> HashMap<&'a str, String> {
        graph
            .nodes()
            .enumerate()
            .map(|(i, node)| (node.as_str(), format!("n{i}")))
            .collect()
    }

    fn mermaid_label(&self, name: &str) -> String {
        name.replace('"', "#quot;")
    }

    fn dot_escape(&self, name: &str) -> String {
        name.replace('\\', "\\\\").replace('"', "\\\"")
    }
}
