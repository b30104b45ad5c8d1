//! # Core Type Definitions
//!
//! This module contains the value types shared by every component of the
//! graph engine:
//! - Internal addressing (`Position`)
//! - Node metadata (`Node`, `NodeField`)
//! - Edge weights and directed adjacency records (`EdgeWeight`, `EdgeRecord`)
//! - Query results (`Neighbor`, `WeightedPath`, `HighestPath`)
//! - Mutation outcomes (`Upsert`, `Connection`)
//! - Error types (`GraphError`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// POSITION
// =============================================================================

/// Dense index of a node in the parallel node/adjacency storage.
///
/// Valid only until the next deletion. Never leaves the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Position(pub(crate) usize);

impl Position {
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

// =============================================================================
// NODE
// =============================================================================

/// A node in the graph.
///
/// The `id` is fixed at creation. `name` and `kind` are overwritten when the
/// same id is upserted again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// External identifier, unique within a graph.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Node type.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Node {
    /// Create a node, rejecting empty fields.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> Result<Self, GraphError> {
        let node = Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
        };
        node.validate()?;
        Ok(node)
    }

    /// Check that id, name and type are all non-empty.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.id.is_empty() {
            return Err(GraphError::InvalidArgument("node id is empty".to_string()));
        }
        if self.name.is_empty() {
            return Err(GraphError::InvalidArgument(format!(
                "node {} has an empty name",
                self.id
            )));
        }
        if self.kind.is_empty() {
            return Err(GraphError::InvalidArgument(format!(
                "node {} has an empty type",
                self.id
            )));
        }
        Ok(())
    }

    /// Read the given attribute.
    #[must_use]
    pub fn field(&self, field: NodeField) -> &str {
        match field {
            NodeField::Name => &self.name,
            NodeField::Type => &self.kind,
        }
    }
}

/// The node attributes that can be searched with `find_by`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeField {
    Name,
    Type,
}

impl NodeField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
        }
    }
}

impl FromStr for NodeField {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "type" => Ok(Self::Type),
            other => Err(GraphError::InvalidArgument(format!(
                "unknown node field: {other}"
            ))),
        }
    }
}

impl fmt::Display for NodeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// EDGES
// =============================================================================

/// Weight of an undirected edge.
///
/// Always finite and strictly positive, which keeps `-1` free as the
/// "unset" marker used by the path finder.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct EdgeWeight(f64);

impl EdgeWeight {
    /// Create a weight, rejecting zero, negative and non-finite values.
    pub fn new(weight: f64) -> Result<Self, GraphError> {
        if !weight.is_finite() || weight <= 0.0 {
            return Err(GraphError::InvalidArgument(format!(
                "edge weight must be positive and finite, got {weight}"
            )));
        }
        Ok(Self(weight))
    }

    /// Get the raw weight value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for EdgeWeight {
    type Error = GraphError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EdgeWeight> for f64 {
    fn from(weight: EdgeWeight) -> Self {
        weight.0
    }
}

impl fmt::Display for EdgeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One direction of an undirected edge, stored in the source node's row.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EdgeRecord {
    pub(crate) neighbor: Position,
    pub(crate) weight: EdgeWeight,
    pub(crate) label: String,
}

/// A neighbor as seen from outside the crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub id: String,
    pub weight: EdgeWeight,
    pub label: String,
}

// =============================================================================
// MUTATION OUTCOMES
// =============================================================================

/// Result of a successful `upsert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new node was appended.
    Inserted,
    /// An existing node had its name and type overwritten.
    Updated,
}

/// Result of a successful `connect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    /// Both directed records were appended.
    Created,
    /// Both directed records were overwritten in place.
    Updated,
}

// =============================================================================
// QUERY RESULTS
// =============================================================================

/// A path found by the path finder, source first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedPath {
    pub nodes: Vec<String>,
    pub weight: f64,
}

impl WeightedPath {
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }

    /// Number of edges traversed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// The pair with the heaviest path found by the highest-path scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighestPath {
    pub source: String,
    pub destination: String,
    pub weight: f64,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by the graph engine.
///
/// Unknown ids are not errors: lookups return `Option` or `bool` instead.
/// `InvalidArgument` is the malformed-input channel. The remaining variants
/// are internal invariant violations that abort the current operation.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    /// Empty field, self-loop or non-positive weight.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// `extract_max` was called on an empty priority queue.
    #[error("Priority queue is empty")]
    EmptyQueue,

    /// Only one direction of an edge was found.
    #[error("Asymmetric edge between {0} and {1}")]
    AsymmetricEdge(String, String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_rejects_empty_fields() {
        assert!(Node::new("", "n", "t").is_err());
        assert!(Node::new("a", "", "t").is_err());
        assert!(Node::new("a", "n", "").is_err());
        assert!(Node::new("a", "n", "t").is_ok());
    }

    #[test]
    fn edge_weight_rejects_non_positive() {
        assert!(EdgeWeight::new(0.0).is_err());
        assert!(EdgeWeight::new(-3.0).is_err());
        assert!(EdgeWeight::new(f64::NAN).is_err());
        assert!(EdgeWeight::new(f64::INFINITY).is_err());
        assert_eq!(EdgeWeight::new(2.5).map(EdgeWeight::value), Ok(2.5));
    }

    #[test]
    fn node_field_parses_known_names_only() {
        assert_eq!("name".parse::<NodeField>(), Ok(NodeField::Name));
        assert_eq!("type".parse::<NodeField>(), Ok(NodeField::Type));
        assert!("Name".parse::<NodeField>().is_err());
        assert!("id".parse::<NodeField>().is_err());
    }

    #[test]
    fn weighted_path_endpoints() {
        let path = WeightedPath {
            nodes: vec!["a".into(), "b".into(), "c".into()],
            weight: 8.0,
        };
        assert_eq!(path.source(), Some("a"));
        assert_eq!(path.destination(), Some("c"));
        assert_eq!(path.hops(), 2);
    }
}
