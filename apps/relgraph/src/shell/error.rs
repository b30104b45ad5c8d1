//! Shell error type.

use relgraph_core::GraphError;
use thiserror::Error;

/// Errors raised while executing shell commands.
///
/// Only `IllegalArgument` and `Graph(GraphError::InvalidArgument)` are
/// recoverable at the prompt; everything else ends the session.
#[derive(Debug, Error)]
pub enum ShellError {
    /// A command or record was malformed.
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The graph engine rejected an operation.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl ShellError {
    /// True when the shell should print `illegal argument` and carry on.
    #[must_use]
    pub fn is_illegal_argument(&self) -> bool {
        matches!(
            self,
            Self::IllegalArgument(_) | Self::Graph(GraphError::InvalidArgument(_))
        )
    }
}
