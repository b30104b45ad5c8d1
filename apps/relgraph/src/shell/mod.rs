//! # Command Shell
//!
//! Line-oriented front end for the graph engine.
//!
//! Each input line is parsed into a [`Command`], applied to the shell's own
//! [`Graph`] and answered with exactly one output line, blank lines
//! included. `EXIT` stops processing and prints nothing.
//!
//! ## Error Handling
//!
//! Malformed input never ends the session: it is answered with
//! `illegal argument`. I/O failures on the output stream and internal engine
//! errors are returned to the caller.

mod command;
mod error;
mod loader;
mod output;

pub use command::{Command, LoadKind, is_valid_id};
pub use error::ShellError;
pub use loader::{LoadReport, load_entities, load_relationships};
pub use output::Reply;

use relgraph_core::Graph;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Whether the shell should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A command shell owning one graph and one output sink.
pub struct Shell<W: Write> {
    graph: Graph,
    out: W,
    json_mode: bool,
}

impl<W: Write> Shell<W> {
    /// Create a shell over an empty graph.
    pub fn new(out: W, json_mode: bool) -> Self {
        Self {
            graph: Graph::new(),
            out,
            json_mode,
        }
    }

    /// The graph built so far.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consume the shell and return its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Process every line of `input` until EOF or `EXIT`.
    ///
    /// Returns the number of commands executed.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<usize, ShellError> {
        let mut executed = 0;
        for line in input.lines() {
            let line = line?;
            executed += 1;
            if self.execute_line(&line)? == Flow::Exit {
                debug!("exit requested");
                break;
            }
        }
        info!(
            commands = executed,
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "shell finished"
        );
        Ok(executed)
    }

    /// Parse and execute one line, writing its reply.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) if e.is_illegal_argument() => {
                debug!(%line, error = %e, "rejected command");
                self.write_reply(first_token(line), &Reply::IllegalArgument)?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(e),
        };
        self.execute(&command)
    }

    /// Execute a parsed command, writing its reply.
    pub fn execute(&mut self, command: &Command) -> Result<Flow, ShellError> {
        let reply = match self.apply(command) {
            Ok(Some(reply)) => reply,
            Ok(None) => return Ok(Flow::Exit),
            Err(e) if e.is_illegal_argument() => {
                debug!(%command, error = %e, "illegal argument");
                Reply::IllegalArgument
            }
            Err(e) => return Err(e),
        };
        self.write_reply(command.keyword(), &reply)?;
        Ok(Flow::Continue)
    }

    /// Apply a command to the graph. `None` means the shell should stop.
    fn apply(&mut self, command: &Command) -> Result<Option<Reply>, ShellError> {
        let reply = match command {
            Command::Load { path, kind } => self.load(path, kind)?,
            Command::Relationship {
                source,
                label,
                destination,
                weight,
            } => match self
                .graph
                .connect(source, destination, weight.value(), label)?
            {
                Some(_) => Reply::Success,
                None => Reply::Failure,
            },
            Command::Entity { id, name, kind } => {
                self.graph.upsert(id, name, kind)?;
                Reply::Success
            }
            Command::Print { id } => self
                .graph
                .neighbors(id)
                .map_or(Reply::Failure, Reply::Neighbors),
            Command::Delete { id } => {
                if self.graph.remove(id) {
                    Reply::Success
                } else {
                    Reply::Failure
                }
            }
            Command::Path {
                source,
                destination,
            } => self
                .graph
                .find_path(source, destination)?
                .map_or(Reply::Failure, Reply::Path),
            Command::Highest => self
                .graph
                .find_highest_path()?
                .map_or(Reply::Failure, Reply::Highest),
            Command::FindAll { field, value } => self
                .graph
                .find_all(field, value)
                .map_or(Reply::Failure, Reply::Ids),
            Command::Exit => return Ok(None),
        };
        Ok(Some(reply))
    }

    fn load(&mut self, path: &Path, kind: &LoadKind) -> Result<Reply, ShellError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read load file");
                return Ok(Reply::Failure);
            }
        };

        let report = match kind {
            LoadKind::Entities => load_entities(&mut self.graph, &contents)?,
            LoadKind::Relationships => load_relationships(&mut self.graph, &contents)?,
            LoadKind::Other(other) => {
                debug!(kind = %other, "unknown load kind, nothing read");
                LoadReport::default()
            }
        };
        info!(
            path = %path.display(),
            applied = report.applied,
            skipped = report.skipped,
            stopped = report.stopped,
            "load complete"
        );
        Ok(Reply::Success)
    }

    fn write_reply(&mut self, keyword: &str, reply: &Reply) -> Result<(), ShellError> {
        if self.json_mode {
            writeln!(self.out, "{}", reply.to_json(keyword))?;
        } else {
            writeln!(self.out, "{}", reply.to_text())?;
        }
        Ok(())
    }
}

fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or_default()
}
