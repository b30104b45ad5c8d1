//! # Adjacency Index
//!
//! Undirected edge storage addressed by node position.
//!
//! Row `p` holds the directed records leaving the node at position `p`, in
//! insertion order. Every undirected edge is stored twice, once in each
//! endpoint's row, and both copies always carry the same weight and label.
//!
//! The index knows nothing about node ids. The graph keeps one row per node
//! and calls `push_row` / `remove_row` in lockstep with its node storage.

use crate::types::{Connection, EdgeRecord, EdgeWeight, Position};
use crate::GraphError;

/// Position-addressed adjacency rows.
#[derive(Debug, Clone, Default)]
pub(crate) struct AdjacencyIndex {
    rows: Vec<Vec<EdgeRecord>>,
}

impl AdjacencyIndex {
    /// Number of rows. Equal to the graph's node count.
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    /// Append an empty row for a newly inserted node.
    pub(crate) fn push_row(&mut self) -> Position {
        self.rows.push(Vec::new());
        Position(self.rows.len() - 1)
    }

    /// Delete the row at `removed` and renumber every surviving record.
    ///
    /// Records pointing at `removed` are dropped; records pointing past it
    /// shift down by one so positions stay contiguous.
    pub(crate) fn remove_row(&mut self, removed: Position) {
        if removed.index() >= self.rows.len() {
            return;
        }
        self.rows.remove(removed.index());

        for row in &mut self.rows {
            row.retain(|record| record.neighbor != removed);
            for record in row.iter_mut() {
                if record.neighbor > removed {
                    record.neighbor = Position(record.neighbor.index() - 1);
                }
            }
        }
    }

    /// Create or overwrite the undirected edge between `a` and `b`.
    ///
    /// Both directions are located before anything is written, so a
    /// failure leaves the index untouched.
    pub(crate) fn connect(
        &mut self,
        a: Position,
        b: Position,
        weight: EdgeWeight,
        label: &str,
    ) -> Result<Connection, GraphError> {
        if a == b {
            return Err(GraphError::InvalidArgument(
                "self-loop edges are not allowed".to_string(),
            ));
        }

        let forward = self.record_index(a, b);
        let backward = self.record_index(b, a);

        match (forward, backward) {
            (Some(i), Some(j)) => {
                for (row, slot) in [(a, i), (b, j)] {
                    let record = &mut self.rows[row.index()][slot];
                    record.weight = weight;
                    label.clone_into(&mut record.label);
                }
                Ok(Connection::Updated)
            }
            (None, None) => {
                self.rows[a.index()].push(EdgeRecord {
                    neighbor: b,
                    weight,
                    label: label.to_string(),
                });
                self.rows[b.index()].push(EdgeRecord {
                    neighbor: a,
                    weight,
                    label: label.to_string(),
                });
                Ok(Connection::Created)
            }
            _ => Err(GraphError::AsymmetricEdge(
                a.index().to_string(),
                b.index().to_string(),
            )),
        }
    }

    /// Records leaving `position`, in insertion order.
    pub(crate) fn neighbors_of(&self, position: Position) -> &[EdgeRecord] {
        self.rows
            .get(position.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// True when there are no rows or no row holds a record.
    pub(crate) fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// Number of undirected edges.
    pub(crate) fn edge_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Slot of the record `from -> to` within `from`'s row.
    fn record_index(&self, from: Position, to: Position) -> Option<usize> {
        self.rows
            .get(from.index())?
            .iter()
            .position(|record| record.neighbor == to)
    }
}

// =============================================================================
// TESTS
// =============================================================================
