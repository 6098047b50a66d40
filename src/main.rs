//! LSP Log Inspect CLI
//!
//! Prints recorded JSON-RPC/LSP messages, optionally filtered by method
//! or summarized as method counts.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

use lsp_log_inspect::commands::{execute_inspect, validate_args, InspectArgs, RunOutcome};
use lsp_log_inspect::utils::config::DEFAULT_TOP_METHODS;

/// Parse JSON-RPC messages from a file or stdin
#[derive(Parser, Debug)]
#[command(name = "lsp-log-inspect")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON or JSONL file to parse (reads stdin if omitted)
    file: Option<PathBuf>,

    /// Filter messages by method name (repeat for multiple methods)
    #[arg(short, long = "method", value_name = "METHOD")]
    methods: Vec<String>,

    /// Display stats about methods in the input
    #[arg(short = 'c', long)]
    stats: bool,

    /// Number of methods listed with --stats
    #[arg(long, default_value_t = DEFAULT_TOP_METHODS)]
    top: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for the report
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = InspectArgs {
        input: cli.file,
        methods: cli.methods,
        stats: cli.stats,
        top_methods: cli.top,
    };

    match run(&args) {
        Ok(outcome) => {
            debug!("Finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Validate and execute one run
///
/// **Private** - keeps main's exit code mapping in one place
fn run(args: &InspectArgs) -> Result<RunOutcome> {
    validate_args(args)?;
    execute_inspect(args)
}
