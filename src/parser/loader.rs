//! Log loading from a file or standard input.
//!
//! A file is first tried as a single JSON document; if that fails it is
//! treated as JSONL. Standard input is always read as JSONL. Lines that do
//! not parse are skipped and reported back to the caller.

use crate::utils::config::WARNING_PREVIEW_CHARS;
use crate::utils::error::LoadError;
use log::debug;
use serde_json::Value;
use std::io::{self, BufRead};
use std::path::Path;

/// A line that was dropped because it is not valid JSON
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number in the input
    pub line_number: usize,

    /// Leading characters of the line, for the user-facing warning
    pub preview: String,

    /// Parser message
    pub reason: String,
}

/// Records read from one input, in input order
#[derive(Debug, Clone, Default)]
pub struct LoadedLog {
    pub records: Vec<Value>,
    pub skipped: Vec<SkippedLine>,
}

impl LoadedLog {
    /// Parse one input line and keep it or record it as skipped
    ///
    /// Blank lines are ignored without a warning.
    fn push_line(&mut self, line_number: usize, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(record) => self.records.push(record),
            Err(e) => {
                debug!("Skipping line {}: {}", line_number, e);
                self.skipped.push(SkippedLine {
                    line_number,
                    preview: line.chars().take(WARNING_PREVIEW_CHARS).collect(),
                    reason: e.to_string(),
                });
            }
        }
    }
}

/// Load records from `path`, or from standard input when no path is given
///
/// **Public** - main entry point for loading
///
/// # Errors
/// * `LoadError::FileNotFound` - `path` does not exist
/// * `LoadError::Io` - any other read failure
pub fn load_records(path: Option<&Path>) -> Result<LoadedLog, LoadError> {
    match path {
        Some(path) => load_file(path),
        None => {
            debug!("Reading messages from standard input");
            let stdin = io::stdin();
            load_lines(stdin.lock())
        }
    }
}

/// Read a whole log file and parse it
///
/// **Public** - used directly by tests and by `load_records`
pub fn load_file(path: &Path) -> Result<LoadedLog, LoadError> {
    debug!("Reading messages from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            LoadError::FileNotFound(path.to_path_buf())
        } else {
            LoadError::Io(e)
        }
    })?;

    Ok(parse_content(&content))
}

/// Parse an in-memory log: one JSON document, or JSONL as a fallback
pub fn parse_content(content: &str) -> LoadedLog {
    match serde_json::from_str::<Value>(content) {
        Ok(record) => {
            debug!("Input is a single JSON document");
            LoadedLog {
                records: vec![record],
                skipped: Vec::new(),
            }
        }
        Err(e) => {
            debug!("Input is not a single JSON document ({}), reading as JSONL", e);
            let mut log = LoadedLog::default();
            for (index, line) in content.lines().enumerate() {
                log.push_line(index + 1, line);
            }
            debug!(
                "Parsed {} records, skipped {} lines",
                log.records.len(),
                log.skipped.len()
            );
            log
        }
    }
}

/// Parse a line-oriented reader as JSONL
///
/// # Errors
/// * `LoadError::Io` - the reader failed mid-stream
pub fn load_lines<R: BufRead>(reader: R) -> Result<LoadedLog, LoadError> {
    let mut log = LoadedLog::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        log.push_line(index + 1, &line);
    }

    debug!(
        "Parsed {} records, skipped {} lines",
        log.records.len(),
        log.skipped.len()
    );

    Ok(log)
}
