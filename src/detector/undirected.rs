use std::hash::Hash;

use crate::graph::Graph;

/// One level of the undirected search
struct Frame {
    node: usize,
    parent: Option<usize>,
    cursor: usize,
    /// Whether the entry for the tree edge back to `parent` has been skipped
    parent_edge_skipped: bool,
}

impl Frame {
    fn root(node: usize) -> Self {
        Self {
            node,
            parent: None,
            cursor: 0,
            parent_edge_skipped: false,
        }
    }

    fn child(node: usize, parent: usize) -> Self {
        Self {
            node,
            parent: Some(parent),
            cursor: 0,
            parent_edge_skipped: false,
        }
    }
}

/// Whether a symmetric (undirected) graph contains a cycle in any component
pub fn has_cycle_undirected<N>(graph: &Graph<N>) -> bool
where
    N: Clone + Eq + Hash,
{
    find_cycle_undirected(graph).is_some()
}

/// First cycle found by a parent-tracking depth-first search over every
/// component of a symmetric graph.
///
/// The adjacency lists must be symmetric; they are not symmetrized here.
///
/// Parallel edges follow multigraph semantics: exactly one entry for the
/// parent in a child's list is the tree edge it was discovered through, and
/// any other entry for the parent is a distinct edge closing a cycle of
/// length two. A node listing itself is a cycle of length one.
///
/// The witness is the active path from the revisited ancestor down to the
/// node whose edge closed the cycle.
pub fn find_cycle_undirected<N>(graph: &Graph<N>) -> Option<Vec<N>>
where
    N: Clone + Eq + Hash,
{
    let mut visited = vec![false; graph.node_count()];
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..graph.node_count() {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push(Frame::root(root));

        while let Some(frame) = stack.last_mut() {
            let u = frame.node;
            let Some(&v) = graph.successors(u).get(frame.cursor) else {
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            if v == u {
                return Some(vec![graph.node_at(u).clone()]);
            }
            if frame.parent == Some(v) && !frame.parent_edge_skipped {
                frame.parent_edge_skipped = true;
                continue;
            }
            if visited[v] {
                let start = stack.iter().rposition(|f| f.node == v).unwrap_or(0);
                return Some(
                    stack[start..]
                        .iter()
                        .map(|f| graph.node_at(f.node).clone())
                        .collect(),
                );
            }

            visited[v] = true;
            stack.push(Frame::child(v, u));
        }
    }

    None
}
