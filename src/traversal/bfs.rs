use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::WayfinderError;
use crate::graph::Graph;

/// Breadth-first traversal from `source`.
///
/// Returns every node reachable from `source` in non-decreasing distance,
/// ties broken by neighbor-list order. A node is marked visited when it is
/// enqueued, so it is enqueued at most once.
pub fn bfs<N>(graph: &Graph<N>, source: &N) -> Result<Vec<N>, WayfinderError>
where
    N: Clone + Eq + Hash + Debug,
{
    let start = graph.require(source)?;

    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::from([start]);
    visited[start] = true;

    let mut order = Vec::new();
    while let Some(u) = queue.pop_front() {
        order.push(graph.node_at(u).clone());
        for &v in graph.successors(u) {
            if !visited[v] {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }

    Ok(order)
}

/// Fewest-edge path from `source` to `target`, both inclusive.
///
/// Parent pointers are recorded when a node is first enqueued and the walk
/// stops as soon as `target` is dequeued. Returns `Ok(None)` when `target`
/// is not reachable.
pub fn shortest_path<N>(
    graph: &Graph<N>,
    source: &N,
    target: &N,
) -> Result<Option<Vec<N>>, WayfinderError>
where
    N: Clone + Eq + Hash + Debug,
{
    let start = graph.require(source)?;
    let goal = graph.require(target)?;

    let mut parents: Vec<Option<usize>> = vec![None; graph.node_count()];
    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::from([start]);
    visited[start] = true;

    while let Some(u) = queue.pop_front() {
        if u == goal {
            let mut path = vec![graph.node_at(u).clone()];
            let mut current = u;
            while let Some(parent) = parents[current] {
                path.push(graph.node_at(parent).clone());
                current = parent;
            }
            path.reverse();
            return Ok(Some(path));
        }
        for &v in graph.successors(u) {
            if !visited[v] {
                visited[v] = true;
                parents[v] = Some(u);
                queue.push_back(v);
            }
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::Orientation;

    fn diamond() -> Graph<&'static str> {
        Graph::from_adjacency(
            Orientation::Directed,
            [
                ("A", vec!["B", "C"]),
                ("B", vec!["D"]),
                ("C", vec!["D"]),
                ("D", vec![]),
            ],
        )
    }

    #[test]
    fn test_bfs_visits_by_distance() {
        assert_eq!(bfs(&diamond(), &"A").unwrap(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_bfs_binary_tree_level_order() {
        let graph = Graph::from_adjacency(
            Orientation::Directed,
            [
                ("A", vec!["B", "C"]),
                ("B", vec!["D", "E"]),
                ("C", vec!["F", "G"]),
            ],
        );

        assert_eq!(
            bfs(&graph, &"A").unwrap(),
            vec!["A", "B", "C", "D", "E", "F", "G"]
        );
    }

    #[test]
    fn test_bfs_source_without_edges() {
        let graph = Graph::from_adjacency(Orientation::Directed, [("A", vec![]), ("B", vec!["A"])]);
        assert_eq!(bfs(&graph, &"A").unwrap(), vec!["A"]);
    }

    #[test]
    fn test_bfs_handles_cycles_and_self_loops() {
        let graph = Graph::from_edges(
            Orientation::Directed,
            [(1, 1), (1, 2), (2, 3), (3, 1), (3, 2)],
        );
        assert_eq!(bfs(&graph, &1).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_bfs_ignores_unreachable_nodes() {
        let graph = Graph::from_edges(Orientation::Directed, [("A", "B"), ("C", "A")]);
        assert_eq!(bfs(&graph, &"A").unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_bfs_missing_source() {
        let err = bfs(&diamond(), &"Z").unwrap_err();
        assert!(matches!(err, WayfinderError::NodeNotFound { ref node } if node == "\"Z\""));
    }

    #[test]
    fn test_shortest_path_prefers_fewest_edges() {
        let graph = Graph::from_edges(
            Orientation::Directed,
            [("A", "B"), ("B", "C"), ("C", "D"), ("A", "E"), ("E", "D")],
        );

        assert_eq!(
            shortest_path(&graph, &"A", &"D").unwrap(),
            Some(vec!["A", "E", "D"])
        );
    }

    #[test]
    fn test_shortest_path_ties_follow_neighbor_order() {
        assert_eq!(
            shortest_path(&diamond(), &"A", &"D").unwrap(),
            Some(vec!["A", "B", "D"])
        );
    }

    #[test]
    fn test_shortest_path_to_self() {
        assert_eq!(
            shortest_path(&diamond(), &"C", &"C").unwrap(),
            Some(vec!["C"])
        );
    }

    #[test]
    fn test_shortest_path_unreachable() {
        assert_eq!(shortest_path(&diamond(), &"D", &"A").unwrap(), None);
    }

    #[test]
    fn test_shortest_path_missing_endpoints() {
        assert!(shortest_path(&diamond(), &"Z", &"A").is_err());
        assert!(shortest_path(&diamond(), &"A", &"Z").is_err());
    }
}
