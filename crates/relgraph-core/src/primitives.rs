//! # Engine Primitives
//!
//! Fixed constants used by the search components.

/// Best-known weight of a position the path finder has not reached yet.
///
/// Real cumulative weights are never negative (the source starts at 0 and
/// every edge is strictly positive), so `-1` cannot collide with one.
pub const UNSET_WEIGHT: f64 = -1.0;

/// Cumulative weight assigned to the search source.
pub const SOURCE_WEIGHT: f64 = 0.0;
