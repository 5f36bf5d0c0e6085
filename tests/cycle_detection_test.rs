//! Cycle detector tests over exhaustively enumerated small graphs

use petgraph::algo::{is_cyclic_directed, is_cyclic_undirected};
use petgraph::graph::UnGraph;
use pretty_assertions::assert_eq;
use wayfinder::detector::{
    find_cycle_directed, find_cycle_undirected, has_cycle_directed, has_cycle_undirected,
};
use wayfinder::graph::{Graph, Orientation};

const NODES: u32 = 3;

/// Every directed graph on three nodes, self-loops included
fn all_directed_graphs() -> impl Iterator<Item = Graph<u32>> {
    let pairs: Vec<(u32, u32)> = (0..NODES)
        .flat_map(|u| (0..NODES).map(move |v| (u, v)))
        .collect();

    (0u32..1 << pairs.len()).map(move |mask| {
        let mut graph = Graph::directed();
        for node in 0..NODES {
            graph.add_node(node);
        }
        for (bit, &(u, v)) in pairs.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                graph.add_edge(u, v);
            }
        }
        graph
    })
}

/// Every undirected multigraph on three nodes with at most two copies of
/// each edge, self-loops included
fn all_undirected_graphs() -> impl Iterator<Item = Graph<u32>> {
    let pairs: Vec<(u32, u32)> = (0..NODES)
        .flat_map(|u| (u..NODES).map(move |v| (u, v)))
        .collect();

    (0..3u32.pow(pairs.len() as u32)).map(move |code| {
        let mut graph = Graph::undirected();
        for node in 0..NODES {
            graph.add_node(node);
        }
        let mut rest = code;
        for &(u, v) in &pairs {
            for _ in 0..rest % 3 {
                graph.add_edge(u, v);
            }
            rest /= 3;
        }
        graph
    })
}

/// Whether consecutive witness nodes, closed back to the first, are edges
fn is_closed_walk(graph: &Graph<u32>, witness: &[u32]) -> bool {
    (0..witness.len()).all(|i| {
        let from = witness[i];
        let to = witness[(i + 1) % witness.len()];
        graph
            .neighbors(&from)
            .is_some_and(|mut neighbors| neighbors.any(|n| *n == to))
    })
}

/// Edge count >= node count in some connected component
fn some_component_is_dense(graph: &Graph<u32>) -> bool {
    let ungraph: UnGraph<u32, ()> = graph.to_ungraph();
    let mut component = vec![usize::MAX; ungraph.node_count()];
    let mut next = 0;
    for start in ungraph.node_indices() {
        if component[start.index()] != usize::MAX {
            continue;
        }
        let mut stack = vec![start];
        component[start.index()] = next;
        while let Some(node) = stack.pop() {
            for neighbor in ungraph.neighbors(node) {
                if component[neighbor.index()] == usize::MAX {
                    component[neighbor.index()] = next;
                    stack.push(neighbor);
                }
            }
        }
        next += 1;
    }

    (0..next).any(|c| {
        let nodes = component.iter().filter(|&&id| id == c).count();
        let edges = ungraph
            .edge_indices()
            .filter(|&edge| {
                ungraph
                    .edge_endpoints(edge)
                    .is_some_and(|(a, _)| component[a.index()] == c)
            })
            .count();
        edges >= nodes
    })
}

#[test]
fn test_directed_scenarios() {
    let cyclic = Graph::from_edges(Orientation::Directed, [("A", "B"), ("B", "C"), ("C", "A")]);
    assert!(has_cycle_directed(&cyclic));

    let converging = Graph::from_edges(Orientation::Directed, [("A", "B"), ("B", "C"), ("A", "C")]);
    assert!(!has_cycle_directed(&converging));
}

#[test]
fn test_undirected_scenarios() {
    let path = Graph::from_edges(Orientation::Undirected, [("A", "B"), ("B", "C")]);
    assert!(!has_cycle_undirected(&path));

    let triangle = Graph::from_edges(
        Orientation::Undirected,
        [("A", "B"), ("B", "C"), ("C", "A")],
    );
    assert!(has_cycle_undirected(&triangle));
}

#[test]
fn test_directed_detector_matches_petgraph() {
    for graph in all_directed_graphs() {
        let expected = is_cyclic_directed(&graph.to_digraph());
        assert_eq!(has_cycle_directed(&graph), expected, "{graph:?}");

        match find_cycle_directed(&graph) {
            Some(witness) => {
                assert!(expected);
                assert!(is_closed_walk(&graph, &witness), "{witness:?} in {graph:?}");
            }
            None => assert!(!expected),
        }
    }
}

#[test]
fn test_undirected_detector_matches_petgraph() {
    for graph in all_undirected_graphs() {
        let expected = is_cyclic_undirected(&graph.to_ungraph());
        assert_eq!(has_cycle_undirected(&graph), expected, "{graph:?}");
        assert_eq!(expected, some_component_is_dense(&graph), "{graph:?}");

        if let Some(witness) = find_cycle_undirected(&graph) {
            assert!(is_closed_walk(&graph, &witness), "{witness:?} in {graph:?}");
        }
    }
}

#[test]
fn test_parallel_edges_form_a_cycle() {
    let mut graph = Graph::undirected();
    graph.add_edge("A", "B");
    assert!(!has_cycle_undirected(&graph));

    graph.add_edge("A", "B");
    assert!(has_cycle_undirected(&graph));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_components_are_all_visited() {
    // The cycle lives in the second component
    let directed = Graph::from_edges(
        Orientation::Directed,
        [("a", "b"), ("x", "y"), ("y", "z"), ("z", "x")],
    );
    assert!(has_cycle_directed(&directed));

    let undirected = Graph::from_edges(
        Orientation::Undirected,
        [("a", "b"), ("x", "y"), ("y", "z"), ("z", "x")],
    );
    assert!(has_cycle_undirected(&undirected));
}

#[test]
fn test_empty_graph_has_no_cycle() {
    let graph: Graph<u32> = Graph::directed();
    assert!(!has_cycle_directed(&graph));
    assert!(!has_cycle_undirected(&graph));
}

#[test]
fn test_detection_is_idempotent() {
    let graph = Graph::from_edges(Orientation::Directed, [(1, 2), (2, 3), (3, 1)]);

    assert_eq!(find_cycle_directed(&graph), find_cycle_directed(&graph));
    assert_eq!(has_cycle_directed(&graph), has_cycle_directed(&graph));
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let depth = 200_000u32;
    let mut graph = Graph::directed();
    for node in 0..depth {
        graph.add_edge(node, node + 1);
    }
    assert!(!has_cycle_directed(&graph));

    graph.add_edge(depth, 0);
    assert!(has_cycle_directed(&graph));

    let chain = Graph::from_edges(Orientation::Undirected, (0..depth).map(|n| (n, n + 1)));
    assert!(!has_cycle_undirected(&chain));
}
