//! # relgraph
//!
//! Command shell and CLI for the relgraph graph engine.
//!
//! The binary in `main.rs` only initializes logging and dispatches to
//! [`cli::execute`]; everything else lives here so integration tests can
//! drive it directly.

pub mod cli;
pub mod shell;
