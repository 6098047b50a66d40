//! Configuration and constants for the CLI.

/// Number of methods listed by `--stats` when `--top` is not given
pub const DEFAULT_TOP_METHODS: usize = 10;

/// Upper bound accepted for `--top`
pub const MAX_TOP_METHODS: usize = 1000;

/// Longest `textDocument.text` printed before truncation (in characters)
pub const TEXT_PREVIEW_CHARS: usize = 500;

/// Characters of a malformed line echoed in the parse warning
pub const WARNING_PREVIEW_CHARS: usize = 50;

/// Width of the divider printed between message blocks
pub const DIVIDER_WIDTH: usize = 40;

/// Outer field that may carry a JSON-encoded LSP message
pub const PAYLOAD_FIELD: &str = "data";

// Inner fields rendered as indented JSON, in print order
pub const DETAIL_FIELDS: &[&str] = &["params", "result", "error"];
