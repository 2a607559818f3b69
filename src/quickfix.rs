//! Quickfix diagnostics file parsing
//!
//! After a build the tool writes a diagnostics file next to the project root
//! (`<root>.vimvs.quickfix`): one record per line, six pipe-delimited fields
//! in the order `File|Line|Col|Type|Code|Message`. This module reads that
//! file back into host-consumable records, preserving the tool's emission
//! order. The file format belongs to the tool's writer and must not drift.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::tool::{ToolError, VimvsTool};

#[derive(Debug, Error)]
pub enum QuickfixError {
    #[error("IO error reading diagnostics file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// The diagnostics file violated the six-field record contract. The whole
    /// load fails; a partial diagnostics list is worse than a visible error.
    #[error("Malformed diagnostics record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

/// One diagnostic as the host's quickfix facility consumes it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    /// Source file path, normalized to forward slashes
    pub filename: String,
    pub lnum: u32,
    pub col: u32,
    /// Severity marker as emitted by the tool, e.g. "E" or "W"
    #[serde(rename = "type")]
    pub kind: String,
    /// Numeric diagnostic code with any single-letter prefix stripped
    /// (`C2039` parses as 2039)
    pub nr: u32,
    pub text: String,
}

fn malformed(line: usize, reason: impl Into<String>) -> QuickfixError {
    QuickfixError::MalformedRecord {
        line,
        reason: reason.into(),
    }
}

fn parse_numeric(field: &str, line: usize, what: &str) -> Result<u32, QuickfixError> {
    field
        .trim()
        .parse::<u32>()
        .map_err(|_| malformed(line, format!("{what} is not numeric: {field:?}")))
}

/// Parse the code field, stripping a single leading non-digit character.
///
/// The tool prefixes codes with a letter (`C2039`, `LNK2019` is not expected;
/// only one-character prefixes occur). A remainder that still fails numeric
/// parsing fails the record rather than guessing.
fn parse_code(field: &str, line: usize) -> Result<u32, QuickfixError> {
    let trimmed = field.trim();
    let stripped = match trimmed.chars().next() {
        Some(first) if !first.is_ascii_digit() => &trimmed[first.len_utf8()..],
        _ => trimmed,
    };
    parse_numeric(stripped, line, "code")
}

/// Parse the full contents of a diagnostics file.
///
/// Blank lines are skipped; every other line must carry exactly six
/// pipe-delimited fields. The sixth field is the message and may itself
/// contain pipes. Any malformed line aborts the whole parse.
pub fn parse_quickfix(contents: &str) -> Result<Vec<DiagnosticRecord>, QuickfixError> {
    let mut records = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        let lineno = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.splitn(6, '|').collect();
        if fields.len() != 6 {
            return Err(malformed(
                lineno,
                format!("expected 6 fields, found {}", fields.len()),
            ));
        }

        records.push(DiagnosticRecord {
            filename: fields[0].replace('\\', "/"),
            lnum: parse_numeric(fields[1], lineno, "line number")?,
            col: parse_numeric(fields[2], lineno, "column")?,
            kind: fields[3].to_string(),
            nr: parse_code(fields[4], lineno)?,
            text: fields[5].to_string(),
        });
    }

    Ok(records)
}

/// Read and parse the diagnostics file at `path`.
///
/// A missing file means "no diagnostics available" and yields an empty list.
pub fn load_quickfix_file(path: &Path) -> Result<Vec<DiagnosticRecord>, QuickfixError> {
    if !path.exists() {
        debug!("No diagnostics file at {}", path.display());
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(path)?;
    let records = parse_quickfix(&contents)?;
    debug!(
        "Loaded {} diagnostics from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Resolve the project root via the tool and load its diagnostics file
pub fn load_quickfix(tool: &VimvsTool) -> Result<Vec<DiagnosticRecord>, QuickfixError> {
    let path = tool.quickfix_path()?;
    load_quickfix_file(&path)
}
