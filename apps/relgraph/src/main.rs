//! # relgraph - Labeled Graph Shell
//!
//! The main binary for the relgraph graph engine.
//!
//! This application provides:
//! - Line-oriented command shell (stdin or script file)
//! - CLI interface for loading record files
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │           apps/relgraph (THE BINARY)          │
//! │                                               │
//! │   ┌─────────────┐        ┌────────────────┐   │
//! │   │    CLI      │───────▶│  Command Shell │   │
//! │   │   (clap)    │        │ (text / JSON)  │   │
//! │   └─────────────┘        └───────┬────────┘   │
//! │                                  ▼            │
//! │                       ┌────────────────────┐  │
//! │                       │   relgraph-core    │  │
//! │                       │    (THE LOGIC)     │  │
//! │                       └────────────────────┘  │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Interactive shell on stdin
//! relgraph
//!
//! # Run a script, JSON replies
//! relgraph run --input commands.txt --json-mode
//!
//! # Load record files and show counts
//! relgraph status --entities entities.txt --relationships relationships.txt
//! ```

use clap::Parser;
use relgraph::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse first: --verbose picks the default filter
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    if !cli.quiet {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr. `RELGRAPH_LOG_FORMAT=json` enables
/// machine-parseable output; `RUST_LOG` overrides the default filter.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("RELGRAPH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose {
        "relgraph=debug"
    } else {
        "relgraph=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Print the startup banner to stderr; stdout carries command replies.
fn print_banner() {
    eprintln!(
        r#"
  ┬─┐┌─┐┬  ┌─┐┬─┐┌─┐┌─┐┬ ┬
  ├┬┘├┤ │  │ ┬├┬┘├─┤├─┘├─┤
  ┴└─└─┘┴─┘└─┘┴└─┴ ┴┴  ┴ ┴

  Labeled Graph Shell v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
