//! # relgraph-core
//!
//! In-memory undirected labeled graph with maximum-weight path queries.
//!
//! Nodes are keyed by caller-supplied string ids and carry a name and a type.
//! Edges are undirected, labeled and strictly positively weighted. On top of
//! mutation the engine answers three queries:
//! - `find_path`: heaviest path between two nodes (greedy label-setting search)
//! - `find_highest_path`: heaviest path over every pair of nodes
//! - `find_all` / `find_by`: nodes whose name or type matches a value
//!
//! ## Architectural Constraints
//!
//! - Pure and synchronous: no I/O, no logging backend, no async
//! - A `Graph` is an owned value; there is no global instance
//! - Internal positions never leave the crate; callers only see string ids
//! - Malformed input is an `Err`; unknown ids are `None` / `false`

// =============================================================================
// MODULES
// =============================================================================

mod adjacency;
pub mod graph;
pub mod heap;
pub mod lookup;
pub mod path;
pub mod primitives;
pub mod scan;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    Connection, EdgeWeight, GraphError, HighestPath, Neighbor, Node, NodeField, Upsert,
    WeightedPath,
};

// =============================================================================
// RE-EXPORTS: Graph Engine
// =============================================================================

pub use graph::Graph;
pub use heap::MaxHeap;
pub use path::PathFinder;
