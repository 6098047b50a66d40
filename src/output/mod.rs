//! Text output for the inspector.
//!
//! This module renders:
//! - Per-message blocks
//! - Filter headers and no-match notices
//! - Method statistics

pub mod text;

// Re-export main functions
pub use text::{
    format_detail, preview_text, render_filter_header, render_message, render_messages,
    render_no_matches, render_stats,
};
