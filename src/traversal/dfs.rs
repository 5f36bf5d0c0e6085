use std::fmt::Debug;
use std::hash::Hash;

use crate::error::WayfinderError;
use crate::graph::Graph;

/// Depth-first traversal from `source`, in preorder.
///
/// The first-listed neighbor is always explored first. The frontier is an
/// explicit stack of `(node, cursor)` frames where `cursor` is the position
/// of the next neighbor to scan, so backtracking resumes exactly where the
/// frame left off and depth is not limited by the call stack.
pub fn dfs<N>(graph: &Graph<N>, source: &N) -> Result<Vec<N>, WayfinderError>
where
    N: Clone + Eq + Hash + Debug,
{
    let start = graph.require(source)?;

    let mut visited = vec![false; graph.node_count()];
    visited[start] = true;
    let mut order = vec![graph.node_at(start).clone()];
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];

    while let Some(frame) = stack.last_mut() {
        let (u, cursor) = *frame;
        match graph.successors(u).get(cursor) {
            Some(&v) => {
                frame.1 += 1;
                if !visited[v] {
                    visited[v] = true;
                    order.push(graph.node_at(v).clone());
                    stack.push((v, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    Ok(order)
}
