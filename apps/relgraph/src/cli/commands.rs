//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::shell::{Shell, ShellError, load_entities, load_relationships};
use relgraph_core::Graph;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum size of a script or record file (100 MB).
const MAX_INPUT_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validate an input path: it must resolve to a regular file within the
/// size limit.
fn validate_file_path(path: &Path) -> Result<PathBuf, ShellError> {
    let canonical = path.canonicalize().map_err(|e| {
        ShellError::Io(io::Error::new(
            e.kind(),
            format!("invalid file path '{}': {}", path.display(), e),
        ))
    })?;

    let metadata = std::fs::metadata(&canonical)?;
    if !metadata.is_file() {
        return Err(ShellError::IllegalArgument(format!(
            "path '{}' is not a regular file",
            path.display()
        )));
    }
    if metadata.len() > MAX_INPUT_FILE_SIZE {
        return Err(ShellError::IllegalArgument(format!(
            "file size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_INPUT_FILE_SIZE
        )));
    }

    Ok(canonical)
}

// =============================================================================
// RUN COMMAND
// =============================================================================

/// Run the command shell over a script file, or stdin when `input` is `None`.
pub fn cmd_run(input: Option<&Path>, json_mode: bool) -> Result<(), ShellError> {
    let stdout = io::stdout().lock();
    let mut shell = Shell::new(stdout, json_mode);

    match input {
        Some(path) => {
            let path = validate_file_path(path)?;
            tracing::info!(script = %path.display(), "running script");
            let file = std::fs::File::open(&path)?;
            shell.run(BufReader::new(file))?;
        }
        None => {
            tracing::debug!("reading commands from stdin");
            shell.run(io::stdin().lock())?;
        }
    }

    Ok(())
}

// =============================================================================
// STATUS COMMAND
// =============================================================================

/// Load record files into a fresh graph and show its status.
pub fn cmd_status(
    entities: &Path,
    relationships: Option<&Path>,
    json_mode: bool,
) -> Result<(), ShellError> {
    let mut graph = Graph::new();

    let path = validate_file_path(entities)?;
    let entity_report = load_entities(&mut graph, &std::fs::read_to_string(path)?)?;

    let relationship_report = match relationships {
        Some(path) => {
            let path = validate_file_path(path)?;
            Some(load_relationships(
                &mut graph,
                &std::fs::read_to_string(path)?,
            )?)
        }
        None => None,
    };
    let skipped = relationship_report.map_or(0, |r| r.skipped);
    tracing::debug!(
        entities = entity_report.applied,
        relationships = relationship_report.map_or(0, |r| r.applied),
        skipped,
        "status files loaded"
    );

    if json_mode {
        let nodes: Vec<_> = graph.nodes().collect();
        let output = serde_json::json!({
            "entities": entities.to_string_lossy(),
            "relationships": relationships.map(|p| p.to_string_lossy()),
            "node_count": graph.node_count(),
            "edge_count": graph.edge_count(),
            "skipped_relationships": skipped,
            "empty": graph.is_empty(),
            "nodes": nodes,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("relgraph Status");
    println!("===============");
    println!("Entities:      {:?}", entities);
    if let Some(path) = relationships {
        println!("Relationships: {:?}", path);
    }
    println!();
    println!("Nodes:         {}", graph.node_count());
    println!("Edges:         {}", graph.edge_count());
    println!("Skipped:       {}", skipped);
    println!("Empty:         {}", graph.is_empty());

    Ok(())
}
