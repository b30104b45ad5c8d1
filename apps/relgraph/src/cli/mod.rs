//! # relgraph CLI Module
//!
//! This module implements the CLI interface for relgraph.
//!
//! ## Available Commands
//!
//! - `run` - Run the command shell over a script file or stdin (default)
//! - `status` - Load entity/relationship files and show graph status

mod commands;

use crate::shell::ShellError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// relgraph - labeled graph shell
///
/// Builds an undirected labeled graph from commands and answers
/// maximum-weight path queries over it.
#[derive(Parser, Debug)]
#[command(name = "relgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the command shell
    Run {
        /// Script file to read commands from (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Load files and show graph status
    Status {
        /// Entity file (`id name type` records)
        #[arg(short, long)]
        entities: PathBuf,

        /// Relationship file (`source label destination weight` records)
        #[arg(short, long)]
        relationships: Option<PathBuf>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), ShellError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Run { input }) => cmd_run(input.as_deref(), json_mode),
        Some(Commands::Status {
            entities,
            relationships,
        }) => cmd_status(&entities, relationships.as_deref(), json_mode),
        None => {
            // No subcommand - run the shell on stdin
            cmd_run(None, json_mode)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["relgraph"]).expect("parse");
        assert!(cli.command.is_none());
        assert!(!cli.json_mode);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["relgraph", "run", "-i", "script.txt", "--json-mode", "-q"])
            .expect("parse");
        assert!(cli.json_mode);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Some(Commands::Run { input: Some(ref path) }) if path == &PathBuf::from("script.txt")
        ));
    }

    #[test]
    fn status_requires_entities() {
        assert!(Cli::try_parse_from(["relgraph", "status"]).is_err());
        let cli = Cli::try_parse_from(["relgraph", "status", "-e", "e.txt", "-r", "r.txt"])
            .expect("parse");
        assert!(matches!(
            cli.command,
            Some(Commands::Status { relationships: Some(_), .. })
        ));
    }
}
