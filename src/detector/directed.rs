use std::hash::Hash;

use crate::graph::Graph;

/// Per-node color for the three-state directed search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    /// Not yet discovered
    Unvisited,
    /// Discovered and still on the active path
    InProgress,
    /// Every outgoing edge has been explored
    Finished,
}

/// Whether the graph contains a directed cycle, self-loops included
pub fn has_cycle_directed<N>(graph: &Graph<N>) -> bool
where
    N: Clone + Eq + Hash,
{
    find_cycle_directed(graph).is_some()
}

/// First directed cycle found by a three-color depth-first search.
///
/// Roots are tried in node insertion order. The witness lists the cycle in
/// path order, `[v, ..., u]`, closed by the back edge `u -> v`; a self-loop
/// yields `[u]`.
///
/// An `InProgress` neighbor is an ancestor on the active path and closes a
/// cycle. A `Finished` neighbor was fully explored through another branch
/// and is skipped, which is what keeps converging paths from being reported.
pub fn find_cycle_directed<N>(graph: &Graph<N>) -> Option<Vec<N>>
where
    N: Clone + Eq + Hash,
{
    let mut state = vec![VisitState::Unvisited; graph.node_count()];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..graph.node_count() {
        if state[root] != VisitState::Unvisited {
            continue;
        }
        state[root] = VisitState::InProgress;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (u, cursor) = *frame;
            let Some(&v) = graph.successors(u).get(cursor) else {
                state[u] = VisitState::Finished;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match state[v] {
                VisitState::InProgress => {
                    // InProgress nodes are exactly the nodes on the stack
                    let start = stack.iter().rposition(|&(w, _)| w == v).unwrap_or(0);
                    return Some(
                        stack[start..]
                            .iter()
                            .map(|&(w, _)| graph.node_at(w).clone())
                            .collect(),
                    );
                }
                VisitState::Unvisited => {
                    state[v] = VisitState::InProgress;
                    stack.push((v, 0));
                }
                VisitState::Finished => {}
            }
        }
    }

    None
}
