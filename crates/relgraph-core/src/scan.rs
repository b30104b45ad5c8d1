//! # Highest-Path Scanner
//!
//! All-pairs scan for the heaviest path in the graph.
//!
//! Every unordered pair of distinct nodes is searched exactly once with the
//! [`PathFinder`](crate::path::PathFinder), so the cost is O(V²) searches.
//! Intended for small graphs.

use crate::graph::Graph;
use crate::path::PathFinder;
use crate::types::Position;
use crate::{GraphError, HighestPath};

impl Graph {
    /// Find the pair of nodes joined by the heaviest path.
    ///
    /// Returns `Ok(None)` when the graph has no edges, or when no pair is
    /// connected. On equal weights the first pair in scan order wins.
    pub fn find_highest_path(&self) -> Result<Option<HighestPath>, GraphError> {
        if self.is_empty() {
            return Ok(None);
        }

        let finder = PathFinder::new(self);
        let n = self.node_count();
        let mut highest: Option<HighestPath> = None;

        for i in 0..n {
            for j in (i + 1)..n {
                let Some(path) = finder.search(Position(i), Position(j))? else {
                    continue;
                };
                if highest.as_ref().is_none_or(|h| path.weight > h.weight) {
                    highest = Some(HighestPath {
                        source: self.id_at(Position(i)).to_string(),
                        destination: self.id_at(Position(j)).to_string(),
                        weight: path.weight,
                    });
                }
            }
        }

        Ok(highest)
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

    #[test]
    fn empty_graph_has_no_highest_path() {
        assert_eq!(Graph::new().find_highest_path(), Ok(None));
    }

    #[test]
    fn edgeless_graph_has_no_highest_path() {
        let graph = build(&["a", "b", "c"], &[]);
        assert_eq!(graph.find_highest_path(), Ok(None));
    }

    #[test]
    fn picks_heaviest_disconnected_pair() {
        let graph = build(
            &["a", "b", "c", "d", "e", "f"],
            &[("a", "b", 2.0), ("c", "d", 9.0), ("e", "f", 4.0)],
        );

        let highest = graph.find_highest_path().expect("scan").expect("found");
        assert_eq!(highest.source, "c");
        assert_eq!(highest.destination, "d");
        assert_eq!(highest.weight, 9.0);
    }

    #[test]
    fn spans_multi_hop_paths() {
        let graph = build(&["a", "b", "c"], &[("a", "b", 3.0), ("b", "c", 5.0)]);

        let highest = graph.find_highest_path().expect("scan").expect("found");
        assert_eq!((highest.source.as_str(), highest.destination.as_str()), ("a", "c"));
        assert_eq!(highest.weight, 8.0);
    }

    #[test]
    fn first_pair_wins_ties() {
        let graph = build(&["a", "b", "c", "d"], &[("a", "b", 4.0), ("c", "d", 4.0)]);

        let highest = graph.find_highest_path().expect("scan").expect("found");
        assert_eq!(highest.source, "a");
        assert_eq!(highest.destination, "b");
    }

    #[test]
    fn scan_follows_removals() {
        let mut graph = build(&["a", "b", "c", "d"], &[("a", "b", 1.0), ("c", "d", 50.0)]);
        graph.remove("d");

        let highest = graph.find_highest_path().expect("scan").expect("found");
        assert_eq!(highest.source, "a");
        assert_eq!(highest.destination, "b");
        assert_eq!(highest.weight, 1.0);
    }
}
