//! # Path Finder
//!
//! Maximum cumulative-weight path search between two nodes.
//!
//! The search is label-setting: it runs Dijkstra's loop with the comparison
//! flipped. The frontier is a max-heap on cumulative weight; the heaviest
//! pending entry is extracted, its node is finalized, and every
//! non-finalized neighbor is relaxed when `current + edge` beats its best
//! known weight. Stale heap entries for finalized nodes are skipped.
//!
//! ## Optimality
//!
//! Finalizing the heaviest frontier node is what makes Dijkstra exact for
//! minimum-weight paths. For maximum-weight paths on graphs with cycles it is
//! a heuristic: a node finalized early can block a heavier route that would
//! have passed through it later. Results are deterministic for a given graph
//! and insertion order, but not guaranteed to be the global maximum.

use crate::graph::Graph;
use crate::heap::MaxHeap;
use crate::primitives::{SOURCE_WEIGHT, UNSET_WEIGHT};
use crate::types::Position;
use crate::{GraphError, WeightedPath};

/// Runs maximum-weight path searches over a borrowed graph.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g Graph,
}

impl<'g> PathFinder<'g> {
    #[must_use]
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Find a path between two ids.
    ///
    /// Returns `Ok(None)` if either id is unknown or the destination cannot
    /// be reached. A node's path to itself is `[id]` with weight 0.
    pub fn find(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<Option<WeightedPath>, GraphError> {
        let (Some(src), Some(dst)) = (
            self.graph.position_of(source),
            self.graph.position_of(destination),
        ) else {
            return Ok(None);
        };
        self.search(src, dst)
    }

    /// Search between two resolved positions.
    pub(crate) fn search(
        &self,
        source: Position,
        destination: Position,
    ) -> Result<Option<WeightedPath>, GraphError> {
        let n = self.graph.node_count();
        let mut best = vec![UNSET_WEIGHT; n];
        let mut parent: Vec<Option<Position>> = vec![None; n];
        let mut finalized = vec![false; n];
        let mut frontier: MaxHeap<(Position, Option<Position>)> = MaxHeap::with_capacity(n);

        best[source.index()] = SOURCE_WEIGHT;
        frontier.insert(SOURCE_WEIGHT, (source, None));

        let mut reached = false;
        while !frontier.is_empty() {
            let (weight, (current, via)) = frontier.extract_max()?;
            if finalized[current.index()] {
                continue;
            }
            finalized[current.index()] = true;
            parent[current.index()] = via;

            if current == destination {
                reached = true;
                break;
            }

            for record in self.graph.records(current) {
                let next = record.neighbor.index();
                if finalized[next] {
                    continue;
                }
                let candidate = weight + record.weight.value();
                if candidate > best[next] {
                    best[next] = candidate;
                    frontier.insert(candidate, (record.neighbor, Some(current)));
                }
            }
        }

        if !reached {
            return Ok(None);
        }

        let mut nodes = Vec::new();
        let mut at = Some(destination);
        while let Some(position) = at {
            nodes.push(self.graph.id_at(position).to_string());
            at = parent[position.index()];
        }
        nodes.reverse();

        Ok(Some(WeightedPath {
            nodes,
            weight: best[destination.index()],
        }))
    }
}

impl Graph {
    /// Find a maximum cumulative-weight path between two nodes.
    ///
    /// See [`PathFinder`] for the search and its optimality caveat.
    pub fn find_path(
        &self,
        source: &str,
        destination: &str,
    ) -> Result<Option<WeightedPath>, GraphError> {
        PathFinder::new(self).find(source, destination)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn build(nodes: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
        let mut graph = Graph::new();
        for id in nodes {
            graph.upsert(id, "n", "t").expect("upsert");
        }
        for (a, b, w) in edges {
            graph.connect(a, b, *w, "e").expect("connect");
        }
        graph
    }

    fn ids(path: &WeightedPath) -> Vec<&str> {
        path.nodes.iter().map(String::as_str).collect()
    }

    #[test]
    fn chain_path_sums_weights() {
        let graph = build(&["A", "B", "C"], &[("A", "B", 3.0), ("B", "C", 5.0)]);

        let path = graph.find_path("A", "C").expect("search").expect("path");
        assert_eq!(ids(&path), vec!["A", "B", "C"]);
        assert_eq!(path.weight, 8.0);
    }

    #[test]
    fn path_is_reversible_on_undirected_graph() {
        let graph = build(&["A", "B", "C"], &[("A", "B", 3.0), ("B", "C", 5.0)]);

        let path = graph.find_path("C", "A").expect("search").expect("path");
        assert_eq!(ids(&path), vec!["C", "B", "A"]);
        assert_eq!(path.weight, 8.0);
    }

    #[test]
    fn self_path_is_single_node_with_zero_weight() {
        let graph = build(&["A", "B"], &[("A", "B", 3.0)]);

        let path = graph.find_path("A", "A").expect("search").expect("path");
        assert_eq!(ids(&path), vec!["A"]);
        assert_eq!(path.weight, 0.0);
    }

    #[test]
    fn self_path_on_isolated_node() {
        let graph = build(&["A"], &[]);
        let path = graph.find_path("A", "A").expect("search").expect("path");
        assert_eq!(path.hops(), 0);
    }

    #[test]
    fn disconnected_nodes_have_no_path() {
        let graph = build(&["A", "B"], &[]);
        assert_eq!(graph.find_path("A", "B"), Ok(None));
    }

    #[test]
    fn unknown_ids_have_no_path() {
        let graph = build(&["A"], &[]);
        assert_eq!(graph.find_path("A", "Z"), Ok(None));
        assert_eq!(graph.find_path("Z", "A"), Ok(None));
    }

    #[test]
    fn prefers_heavier_route() {
        // A-D directly is 2; A-B-D is 5 + 10.
        let graph = build(
            &["A", "B", "D"],
            &[("A", "D", 2.0), ("A", "B", 5.0), ("B", "D", 10.0)],
        );

        let path = graph.find_path("A", "D").expect("search").expect("path");
        assert_eq!(ids(&path), vec!["A", "B", "D"]);
        assert_eq!(path.weight, 15.0);
    }

    #[test]
    fn greedy_finalization_can_miss_heavier_cycle_route() {
        // A-B 10, A-C 1, C-B 100, B-D 1.
        // The heaviest simple path A..D is A-C-B-D = 102, but B is finalized
        // at 10 straight from A, so D is only ever offered 11.
        let graph = build(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 10.0),
                ("A", "C", 1.0),
                ("C", "B", 100.0),
                ("B", "D", 1.0),
            ],
        );

        let path = graph.find_path("A", "D").expect("search").expect("path");
        assert_eq!(ids(&path), vec!["A", "B", "D"]);
        assert_eq!(path.weight, 11.0);
    }

    #[test]
    fn destination_settles_on_first_extraction() {
        // D is offered 2 directly and B only 1, so D is extracted first and
        // the 1 + 10 route through B is never explored.
        let graph = build(
            &["A", "B", "D"],
            &[("A", "D", 2.0), ("A", "B", 1.0), ("B", "D", 10.0)],
        );

        let path = graph.find_path("A", "D").expect("search").expect("path");
        assert_eq!(ids(&path), vec!["A", "D"]);
        assert_eq!(path.weight, 2.0);
    }

    #[test]
    fn relaxes_through_intermediate_node() {
        // A-B 5, A-C 4, B-C 4, C-D 1.
        // C is first offered 4 from A, then raised to 9 through B.
        let graph = build(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 5.0),
                ("A", "C", 4.0),
                ("B", "C", 4.0),
                ("C", "D", 1.0),
            ],
        );

        let path = graph.find_path("A", "D").expect("search").expect("path");
        assert_eq!(ids(&path), vec!["A", "B", "C", "D"]);
        assert_eq!(path.weight, 10.0);
    }

    #[test]
    fn removed_node_is_unreachable() {
        let mut graph = build(&["A", "B", "C"], &[("A", "B", 3.0), ("B", "C", 5.0)]);
        graph.remove("B");

        assert_eq!(graph.find_path("A", "C"), Ok(None));
        assert_eq!(graph.find_path("B", "C"), Ok(None));
    }

    #[test]
    fn path_finder_can_be_reused() {
        let graph = build(&["A", "B", "C"], &[("A", "B", 3.0), ("B", "C", 5.0)]);
        let finder = PathFinder::new(&graph);

        let first = finder.find("A", "B").expect("search").expect("path");
        let second = finder.find("B", "C").expect("search").expect("path");
        assert_eq!(first.weight, 3.0);
        assert_eq!(second.weight, 5.0);
    }
}
