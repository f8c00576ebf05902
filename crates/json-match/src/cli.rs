//! Logic behind the `json-match` binary.
//!
//! Loads a schema, then tests either one JSON document or a stream of
//! newline-delimited documents against it.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::schema::Schema;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid schema JSON: {0}")]
    Schema(#[source] serde_json::Error),
    #[error("invalid input JSON: {0}")]
    Input(#[source] serde_json::Error),
    #[error("schema and input cannot both be read from stdin; pass --input or --schema-json")]
    StdinTwice,
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

// ── Loading ───────────────────────────────────────────────────────────────

/// Reads a file, or stdin when `path` is `-`.
pub fn read_source(path: &Path) -> Result<String, CliError> {
    if is_stdin(path) {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Rejects reading both the schema file and the input document from stdin.
pub fn check_sources(schema: Option<&Path>, input: &Path) -> Result<(), CliError> {
    match schema {
        Some(schema) if is_stdin(schema) && is_stdin(input) => Err(CliError::StdinTwice),
        _ => Ok(()),
    }
}

pub fn parse_schema(text: &str) -> Result<Schema, CliError> {
    serde_json::from_str(text).map_err(CliError::Schema)
}

// ── Matching ──────────────────────────────────────────────────────────────

/// Tests a single JSON document.
pub fn match_document(schema: &Schema, text: &str) -> Result<bool, CliError> {
    let input: Value = serde_json::from_str(text).map_err(CliError::Input)?;
    Ok(schema.matches(&input))
}

/// Copies every line of `input` that matches `schema` to `out`, returning how
/// many did. Blank lines are skipped; lines that are not JSON are reported on
/// `diagnostics` with their 1-based line number and skipped too.
pub fn filter_lines<R, W, D>(
    schema: &Schema,
    input: R,
    out: &mut W,
    diagnostics: &mut D,
) -> Result<usize, CliError>
where
    R: BufRead,
    W: Write,
    D: Write,
{
    let mut matched = 0;
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(trimmed) {
            Ok(doc) if schema.matches(&doc) => {
                matched += 1;
                writeln!(out, "{line}")?;
            }
            Ok(_) => {}
            Err(err) => {
                tracing::debug!(line = i + 1, error = %err, "skipping line");
                writeln!(diagnostics, "line {}: {err}", i + 1)?;
            }
        }
    }
    Ok(matched)
}
