//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod inspect;

// Re-export main command functions
pub use inspect::{execute_inspect, inspect_log, validate_args, InspectArgs, RunOutcome};
