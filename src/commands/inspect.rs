//! Inspect command implementation.
//!
//! The inspect command:
//! 1. Loads records from a file or stdin
//! 2. Unwraps nested payloads
//! 3. Either prints method stats, or filters and prints messages

use crate::aggregator::{calculate_method_stats, filter_by_methods};
use crate::output::{render_filter_header, render_messages, render_no_matches, render_stats};
use crate::parser::{load_records, unwrap_records, Envelope, LoadedLog};
use crate::utils::config::{DEFAULT_TOP_METHODS, MAX_TOP_METHODS};
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the inspect command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct InspectArgs {
    /// Log file to read; `None` reads standard input
    pub input: Option<PathBuf>,

    /// Only show messages with one of these methods
    pub methods: Vec<String>,

    /// Print method statistics instead of messages
    pub stats: bool,

    /// Number of methods listed in stats mode
    pub top_methods: usize,
}

impl Default for InspectArgs {
    fn default() -> Self {
        Self {
            input: None,
            methods: Vec::new(),
            stats: false,
            top_methods: DEFAULT_TOP_METHODS,
        }
    }
}

/// How a run ended
///
/// A filter that matched nothing is a normal result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Messages were printed
    Printed { shown: usize },

    /// The method filter selected nothing
    NoMatches,

    /// Method statistics were printed
    Stats {
        total_messages: usize,
        total_methods: usize,
    },
}

/// Validate inspect arguments
///
/// **Public** - can be called before execute_inspect for early validation
pub fn validate_args(args: &InspectArgs) -> Result<()> {
    if args.top_methods == 0 {
        anyhow::bail!("--top must be greater than 0");
    }

    if args.top_methods > MAX_TOP_METHODS {
        anyhow::bail!("--top is too large (max {})", MAX_TOP_METHODS);
    }

    Ok(())
}

/// Execute the inspect command, writing to stdout
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * `LoadError::FileNotFound` when the input file does not exist
/// * Read failures on the input
/// * Write failures on stdout
pub fn execute_inspect(args: &InspectArgs) -> Result<RunOutcome> {
    let log = load_records(args.input.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    inspect_log(log, args, &mut out)
}

/// Run the pipeline over already-loaded records
///
/// **Public** - the testable core of execute_inspect
pub fn inspect_log(log: LoadedLog, args: &InspectArgs, out: &mut impl Write) -> Result<RunOutcome> {
    for skipped in &log.skipped {
        writeln!(out, "Warning: Could not parse line as JSON: {}...", skipped.preview)
            .context("Failed to write parse warning")?;
    }

    let envelopes = unwrap_records(log.records);
    let unwrapped = envelopes.iter().filter(|e| e.inner.is_some()).count();
    info!(
        "Loaded {} messages ({} with a nested payload)",
        envelopes.len(),
        unwrapped
    );

    // Stats mode short-circuits filtering and printing
    if args.stats {
        let stats = calculate_method_stats(&envelopes, args.top_methods);
        writeln!(out, "{}", render_stats(&stats)).context("Failed to write stats")?;

        return Ok(RunOutcome::Stats {
            total_messages: stats.total_messages,
            total_methods: stats.total_methods,
        });
    }

    let selected: Vec<&Envelope> = if args.methods.is_empty() {
        envelopes.iter().collect()
    } else {
        let selected = filter_by_methods(&envelopes, &args.methods);
        if selected.is_empty() {
            writeln!(out, "{}", render_no_matches(&args.methods))
                .context("Failed to write report")?;
            return Ok(RunOutcome::NoMatches);
        }
        writeln!(out, "{}", render_filter_header(selected.len(), &args.methods))
            .context("Failed to write report")?;
        selected
    };

    if !selected.is_empty() {
        writeln!(out, "{}", render_messages(&selected)).context("Failed to write messages")?;
    }

    debug!("Printed {} messages", selected.len());

    Ok(RunOutcome::Printed {
        shown: selected.len(),
    })
}
