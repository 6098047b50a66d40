//! Aggregation and selection over unwrapped messages.
//!
//! This module provides:
//! - Method frequency counting (for `--stats`)
//! - Method allow-list filtering (for `--method`)

pub mod filter;
pub mod tally;

// Re-export main types and functions
pub use filter::{filter_by_methods, matches_methods};
pub use tally::{build_method_tally, calculate_method_stats, MethodCount, MethodStats, MethodTally};
