//! Tests for the graph renderer module

use std::io::Cursor;

use predicates::prelude::*;
use wayfinder::graph::{Graph, GraphRenderer, Orientation};

fn graph(orientation: Orientation, edges: &[(&str, &str)]) -> Graph<String> {
    Graph::from_edges(
        orientation,
        edges
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string())),
    )
}

fn render(
    format: &str,
    graph: &Graph<String>,
    highlight_cycles: bool,
) -> miette::Result<String> {
    let renderer = GraphRenderer::new(highlight_cycles);
    let cycle = graph.find_cycle();
    let mut output = Cursor::new(Vec::new());

    match format {
        "ascii" => renderer.render_ascii(graph, cycle.as_deref(), &mut output)?,
        "mermaid" => renderer.render_mermaid(graph, cycle.as_deref(), &mut output)?,
        "dot" => renderer.render_dot(graph, cycle.as_deref(), &mut output)?,
        other => panic!("unknown format {other}"),
    }

    Ok(String::from_utf8(output.into_inner()).expect("renderer writes UTF-8"))
}

#[test]
fn test_ascii_marks_cycle_members() -> miette::Result<()> {
    let deps = graph(
        Orientation::Directed,
        &[("app", "core"), ("core", "util"), ("util", "core"), ("app", "cli")],
    );

    let output = render("ascii", &deps, true)?;

    assert!(predicate::str::contains("🧭 directed graph: 4 nodes, 4 edges").eval(&output));
    assert!(predicate::str::contains("│ core ⚠️  IN CYCLE").eval(&output));
    assert!(predicate::str::contains("│ util ⚠️  IN CYCLE").eval(&output));
    assert!(predicate::str::contains("│ app ⚠️  IN CYCLE").not().eval(&output));
    assert!(predicate::str::contains("→ util ⚠️  [CYCLE]").eval(&output));
    assert!(predicate::str::contains("→ cli ⚠️  [CYCLE]").not().eval(&output));
    Ok(())
}

#[test]
fn test_ascii_lists_nodes_without_neighbors() -> miette::Result<()> {
    let output = render("ascii", &graph(Orientation::Directed, &[("a", "b")]), false)?;

    assert!(predicate::str::contains("  └── (no neighbors)").eval(&output));
    assert!(predicate::str::contains("IN CYCLE").not().eval(&output));
    Ok(())
}

#[test]
fn test_empty_graph() -> miette::Result<()> {
    let empty: Graph<String> = Graph::directed();
    let output = render("ascii", &empty, true)?;

    assert_eq!(output, "No nodes found to visualize\n");
    Ok(())
}

#[test]
fn test_mermaid_special_characters_in_names() -> miette::Result<()> {
    let output = render(
        "mermaid",
        &graph(Orientation::Directed, &[("web-app", "core.lib")]),
        false,
    )?;

    let expected = predicate::str::starts_with("graph TD")
        .and(predicate::str::contains(r#"n0["web-app"]"#))
        .and(predicate::str::contains(r#"n1["core.lib"]"#))
        .and(predicate::str::contains("n0 --> n1"));
    assert!(expected.eval(&output));
    Ok(())
}

#[test]
fn test_mermaid_legend_only_when_highlighting() -> miette::Result<()> {
    let cyclic = graph(Orientation::Directed, &[("x", "y"), ("y", "x")]);

    let highlighted = render("mermaid", &cyclic, true)?;
    assert!(predicate::str::contains("subgraph Legend").eval(&highlighted));
    assert!(predicate::str::contains("Cycle: x → y → x").eval(&highlighted));

    let plain = render("mermaid", &cyclic, false)?;
    assert!(predicate::str::contains("subgraph Legend").not().eval(&plain));
    assert!(predicate::str::contains("#FF6500").not().eval(&plain));
    Ok(())
}

#[test]
fn test_undirected_edges_drawn_once() -> miette::Result<()> {
    let roads = graph(Orientation::Undirected, &[("a", "b"), ("b", "c"), ("c", "a")]);

    let dot = render("dot", &roads, true)?;
    assert!(predicate::str::starts_with("graph wayfinder {").eval(&dot));
    assert_eq!(dot.matches(" -- ").count(), 3);
    assert_eq!(dot.matches(r##"color="#FF6500", penwidth=3"##).count(), 3);

    let mermaid = render("mermaid", &roads, false)?;
    assert_eq!(mermaid.matches(" --- ").count(), 3);
    Ok(())
}

#[test]
fn test_mermaid_keeps_nodes_that_sanitize_alike() -> miette::Result<()> {
    let output = render(
        "mermaid",
        &graph(Orientation::Directed, &[("a-b", "a_b"), ("a.b", "a-b")]),
        true,
    )?;

    let expected = predicate::str::contains(r#"n0["a-b"]"#)
        .and(predicate::str::contains(r#"n1["a_b"]"#))
        .and(predicate::str::contains(r#"n2["a.b"]"#))
        .and(predicate::str::contains("n0 --> n1"))
        .and(predicate::str::contains("n2 --> n0"))
        .and(predicate::str::contains("subgraph Legend").not());
    assert!(expected.eval(&output));
    Ok(())
}

#[test]
fn test_dot_escapes_quotes() -> miette::Result<()> {
    let output = render(
        "dot",
        &graph(Orientation::Directed, &[("say \"hi\"", "b")]),
        false,
    )?;

    assert!(predicate::str::contains(r#""say \"hi\"" -> "b""#).eval(&output));
    Ok(())
}
