//! # Graph Engine
//!
//! The node store and the public mutation API.
//!
//! Nodes live in a dense `Vec` addressed by position, parallel to the rows of
//! the `AdjacencyIndex`. Both are always the same length. Ids are resolved to
//! positions by linear scan; graphs are expected to stay small.

use crate::adjacency::AdjacencyIndex;
use crate::types::{EdgeRecord, Position};
use crate::{Connection, EdgeWeight, GraphError, Neighbor, Node, Upsert};

/// An undirected labeled graph keyed by string ids.
///
/// Owned by exactly one caller. Every method runs to completion before it
/// returns, so no reader can see a half-renumbered adjacency after `remove`.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Node storage, indexed by position.
    nodes: Vec<Node>,

    /// Edge storage, one row per node position.
    adjacency: AdjacencyIndex,
}

impl Graph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Node store
    // -------------------------------------------------------------------------

    /// Insert a node, or overwrite the name and type of an existing one.
    ///
    /// Adjacency is only touched when a new node is appended.
    pub fn upsert(&mut self, id: &str, name: &str, kind: &str) -> Result<Upsert, GraphError> {
        let node = Node::new(id, name, kind)?;

        if let Some(position) = self.position_of(id) {
            let existing = &mut self.nodes[position.index()];
            existing.name = node.name;
            existing.kind = node.kind;
            return Ok(Upsert::Updated);
        }

        self.nodes.push(node);
        self.adjacency.push_row();
        debug_assert!(self.is_aligned());
        Ok(Upsert::Inserted)
    }

    /// Remove a node and every edge touching it.
    ///
    /// Returns `false` when the id is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(position) = self.position_of(id) else {
            return false;
        };
        self.nodes.remove(position.index());
        self.adjacency.remove_row(position);
        debug_assert!(self.is_aligned());
        true
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.position_of(id).map(|p| &self.nodes[p.index()])
    }

    /// Check if a node exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position_of(id).is_some()
    }

    /// All nodes in insertion order (deletions close the gaps).
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    // -------------------------------------------------------------------------
    // Edges
    // -------------------------------------------------------------------------

    /// Create or overwrite the undirected edge between two nodes.
    ///
    /// Arguments are validated before ids are resolved, so a self-loop or a
    /// bad weight is rejected even when the ids are unknown. Returns
    /// `Ok(None)` if either endpoint does not exist.
    pub fn connect(
        &mut self,
        source: &str,
        destination: &str,
        weight: f64,
        label: &str,
    ) -> Result<Option<Connection>, GraphError> {
        if source == destination {
            return Err(GraphError::InvalidArgument(format!(
                "self-loop on {source}"
            )));
        }
        let weight = EdgeWeight::new(weight)?;

        let (Some(a), Some(b)) = (self.position_of(source), self.position_of(destination)) else {
            return Ok(None);
        };

        self.adjacency
            .connect(a, b, weight, label)
            .map(Some)
            .map_err(|e| match e {
                GraphError::AsymmetricEdge(..) => {
                    GraphError::AsymmetricEdge(source.to_string(), destination.to_string())
                }
                other => other,
            })
    }

    /// Neighbors of a node with edge weight and label, in insertion order.
    ///
    /// Returns `None` when the id is unknown.
    #[must_use]
    pub fn neighbors(&self, id: &str) -> Option<Vec<Neighbor>> {
        let position = self.position_of(id)?;
        Some(
            self.adjacency
                .neighbors_of(position)
                .iter()
                .map(|record| Neighbor {
                    id: self.id_at(record.neighbor).to_string(),
                    weight: record.weight,
                    label: record.label.clone(),
                })
                .collect(),
        )
    }

    /// Ids of a node's neighbors, in insertion order.
    #[must_use]
    pub fn neighbor_ids(&self, id: &str) -> Option<Vec<String>> {
        let position = self.position_of(id)?;
        Some(
            self.adjacency
                .neighbors_of(position)
                .iter()
                .map(|record| self.id_at(record.neighbor).to_string())
                .collect(),
        )
    }

    /// True when the graph has no nodes or no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() || self.adjacency.is_empty()
    }

    // -------------------------------------------------------------------------
    // Crate-internal position access
    // -------------------------------------------------------------------------

    /// Resolve an id to its current position.
    pub(crate) fn position_of(&self, id: &str) -> Option<Position> {
        self.nodes.iter().position(|n| n.id == id).map(Position)
    }

    /// Id of the node at `position`.
    pub(crate) fn id_at(&self, position: Position) -> &str {
        &self.nodes[position.index()].id
    }

    pub(crate) fn records(&self, position: Position) -> &[EdgeRecord] {
        self.adjacency.neighbors_of(position)
    }

    /// Check that node storage and adjacency rows line up.
    pub(crate) fn is_aligned(&self) -> bool {
        self.nodes.len() == self.adjacency.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================
