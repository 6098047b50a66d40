//! Log loading and payload unwrapping.
//!
//! This module handles:
//! - Reading JSON or JSONL logs from a file or stdin
//! - Recovering nested LSP messages from the `data` field
//! - Defining the envelope model

pub mod loader;
pub mod schema;
pub mod unwrap;

// Re-export main types
pub use loader::{load_file, load_lines, load_records, parse_content, LoadedLog, SkippedLine};
pub use schema::{plain_text, Envelope};
pub use unwrap::{decode_payload, unescape_payload, unwrap_record, unwrap_records};
