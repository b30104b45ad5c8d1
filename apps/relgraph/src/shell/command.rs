//! # Command Parsing
//!
//! Turns one input line into a typed [`Command`].
//!
//! Tokens are whitespace-separated. Surplus tokens after a complete command
//! are ignored. Ids must be ASCII alphanumeric. Lookup commands (`PRINT`,
//! `DELETE`, `PATH`) accept a missing id as the empty id, which never names
//! a node, so they answer `failure` instead of `illegal argument`.

use super::ShellError;
use relgraph_core::EdgeWeight;
use std::fmt;
use std::path::PathBuf;

/// What a `LOAD` command reads from its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadKind {
    /// `id name type` triples.
    Entities,
    /// `source label destination weight` quadruples.
    Relationships,
    /// Any other kind. The file is opened but nothing is read.
    Other(String),
}

impl From<&str> for LoadKind {
    fn from(s: &str) -> Self {
        match s {
            "entities" => Self::Entities,
            "relationships" => Self::Relationships,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Load {
        path: PathBuf,
        kind: LoadKind,
    },
    Relationship {
        source: String,
        label: String,
        destination: String,
        weight: EdgeWeight,
    },
    Entity {
        id: String,
        name: String,
        kind: String,
    },
    Print {
        id: String,
    },
    Delete {
        id: String,
    },
    Path {
        source: String,
        destination: String,
    },
    Highest,
    FindAll {
        field: String,
        value: String,
    },
    Exit,
}

impl Command {
    /// Parse a single line. A blank line is an illegal argument.
    pub fn parse(line: &str) -> Result<Self, ShellError> {
        let mut tokens = line.split_whitespace();
        let operation = tokens
            .next()
            .ok_or_else(|| ShellError::IllegalArgument("empty command".to_string()))?;

        let command = match operation {
            "LOAD" => Self::Load {
                path: PathBuf::from(next_token(&mut tokens, "file")?),
                kind: LoadKind::from(next_token(&mut tokens, "load kind")?),
            },
            "RELATIONSHIP" => Self::Relationship {
                source: next_id(&mut tokens)?,
                label: next_token(&mut tokens, "label")?.to_string(),
                destination: next_id(&mut tokens)?,
                weight: parse_weight(next_token(&mut tokens, "weight")?)?,
            },
            "ENTITY" => Self::Entity {
                id: next_id(&mut tokens)?,
                name: next_token(&mut tokens, "name")?.to_string(),
                kind: next_token(&mut tokens, "type")?.to_string(),
            },
            "PRINT" => Self::Print {
                id: next_lookup_id(&mut tokens)?,
            },
            "DELETE" => Self::Delete {
                id: next_lookup_id(&mut tokens)?,
            },
            "PATH" => Self::Path {
                source: next_lookup_id(&mut tokens)?,
                destination: next_lookup_id(&mut tokens)?,
            },
            "HIGHEST" => Self::Highest,
            "FINDALL" => Self::FindAll {
                field: next_token(&mut tokens, "field")?.to_string(),
                value: next_token(&mut tokens, "value")?.to_string(),
            },
            "EXIT" => Self::Exit,
            unknown => {
                return Err(ShellError::IllegalArgument(format!(
                    "unknown command: {unknown}"
                )));
            }
        };
        Ok(command)
    }

    /// The keyword this command was parsed from.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Load { .. } => "LOAD",
            Self::Relationship { .. } => "RELATIONSHIP",
            Self::Entity { .. } => "ENTITY",
            Self::Print { .. } => "PRINT",
            Self::Delete { .. } => "DELETE",
            Self::Path { .. } => "PATH",
            Self::Highest => "HIGHEST",
            Self::FindAll { .. } => "FINDALL",
            Self::Exit => "EXIT",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Check that an id is non-empty and ASCII alphanumeric.
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Parse a strictly positive, finite weight token.
pub fn parse_weight(token: &str) -> Result<EdgeWeight, ShellError> {
    let value: f64 = token
        .parse()
        .map_err(|_| ShellError::IllegalArgument(format!("unparsable weight: {token}")))?;
    Ok(EdgeWeight::new(value)?)
}

/// Validate an id token.
pub fn check_id(token: &str) -> Result<String, ShellError> {
    if is_valid_id(token) {
        Ok(token.to_string())
    } else {
        Err(ShellError::IllegalArgument(format!("invalid id: {token}")))
    }
}

fn next_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<&'a str, ShellError> {
    tokens
        .next()
        .ok_or_else(|| ShellError::IllegalArgument(format!("missing {what}")))
}

fn next_id<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<String, ShellError> {
    check_id(next_token(tokens, "id")?)
}

fn next_lookup_id<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<String, ShellError> {
    tokens.next().map_or_else(|| Ok(String::new()), check_id)
}

// =============================================================================
// TESTS
// =============================================================================
