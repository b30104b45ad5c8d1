//! # Record Loader
//!
//! Bulk ingestion of entity and relationship files.
//!
//! Files are whitespace-separated token streams; line breaks carry no
//! meaning. Records are applied in order, and reading ends quietly at the
//! first record that cannot be extracted: a truncated trailing record, or a
//! weight that is not a finite number.
//!
//! A record that is extracted but invalid (a non-alphanumeric id, a
//! non-positive weight, a self-loop) stops the load with an error. Every
//! record before it stays applied.

use super::command::check_id;
use super::ShellError;
use relgraph_core::Graph;
use tracing::{debug, warn};

/// Tokens per entity record: `id name type`.
const ENTITY_ARITY: usize = 3;

/// Tokens per relationship record: `source label destination weight`.
const RELATIONSHIP_ARITY: usize = 4;

/// Counts from a finished load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records applied to the graph.
    pub applied: usize,
    /// Relationship records naming an unknown endpoint.
    pub skipped: usize,
    /// Reading ended at a record that could not be extracted.
    pub stopped: bool,
}

/// Upsert every `id name type` record in `contents`.
pub fn load_entities(graph: &mut Graph, contents: &str) -> Result<LoadReport, ShellError> {
    let tokens: Vec<&str> = contents.split_whitespace().collect();
    let mut report = LoadReport::default();

    for record in tokens.chunks(ENTITY_ARITY) {
        let [id, name, kind] = record else {
            log_stop(record, ENTITY_ARITY);
            report.stopped = true;
            break;
        };
        let id = check_id(id)?;
        graph.upsert(&id, name, kind)?;
        report.applied += 1;
    }

    debug!(applied = report.applied, "entities loaded");
    Ok(report)
}

/// Connect every `source label destination weight` record in `contents`.
///
/// Records whose endpoints are missing are skipped, not rejected.
pub fn load_relationships(graph: &mut Graph, contents: &str) -> Result<LoadReport, ShellError> {
    let tokens: Vec<&str> = contents.split_whitespace().collect();
    let mut report = LoadReport::default();

    for record in tokens.chunks(RELATIONSHIP_ARITY) {
        let [source, label, destination, weight] = record else {
            log_stop(record, RELATIONSHIP_ARITY);
            report.stopped = true;
            break;
        };
        let Some(weight) = extract_weight(weight) else {
            log_stop(record, RELATIONSHIP_ARITY);
            report.stopped = true;
            break;
        };
        let source = check_id(source)?;
        let destination = check_id(destination)?;

        match graph.connect(&source, &destination, weight, label)? {
            Some(_) => report.applied += 1,
            None => {
                warn!(%source, %destination, "relationship skipped: unknown endpoint");
                report.skipped += 1;
            }
        }
    }

    debug!(
        applied = report.applied,
        skipped = report.skipped,
        "relationships loaded"
    );
    Ok(report)
}

/// Parse a weight token the way a numeric stream read would: only finite
/// numbers are extracted. Range checks happen in the graph.
fn extract_weight(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|w| w.is_finite())
}

fn log_stop(record: &[&str], arity: usize) {
    warn!(
        fields = record.len(),
        expected = arity,
        first = record.first().copied().unwrap_or_default(),
        "load stopped at unreadable record"
    );
}

// =============================================================================
// TESTS
// =============================================================================
