//! Human-readable rendering of messages and method statistics.
//!
//! Renderers build `String`s; callers decide where they are written.

use crate::aggregator::MethodStats;
use crate::parser::{plain_text, Envelope};
use crate::utils::config::{DETAIL_FIELDS, DIVIDER_WIDTH, TEXT_PREVIEW_CHARS};
use serde_json::Value;

/// Render every selected message, separated by dividers
///
/// **Public** - main entry point for message output
pub fn render_messages(envelopes: &[&Envelope]) -> String {
    let total = envelopes.len();
    let mut lines = Vec::new();

    for (index, envelope) in envelopes.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
            lines.push("-".repeat(DIVIDER_WIDTH));
            lines.push(String::new());
        }
        lines.push(render_message(envelope, index + 1, total));
    }

    lines.join("\n")
}

/// Render one message block with its `Message i/N:` header
///
/// # Arguments
/// * `envelope` - Message to render
/// * `position` - 1-based position among the selected messages
/// * `total` - Number of selected messages
pub fn render_message(envelope: &Envelope, position: usize, total: usize) -> String {
    let mut lines = vec![format!("Message {}/{}:", position, total)];

    let outer = &envelope.outer;
    push_field(&mut lines, "Timestamp", outer.get("timestamp"));
    push_field(&mut lines, "Direction", outer.get("direction"));

    let Some(inner) = &envelope.inner else {
        return lines.join("\n");
    };

    push_field(&mut lines, "JSON-RPC Version", inner.get("jsonrpc"));
    push_field(&mut lines, "Method", inner.get("method"));
    push_field(&mut lines, "ID", inner.get("id"));

    if let Some(document) = envelope.text_document() {
        push_field(&mut lines, "Uri", document.get("uri"));
        if let Some(text) = document.get("text") {
            lines.push(format!(
                "TextDocument: {}",
                preview_text(&plain_text(text), TEXT_PREVIEW_CHARS)
            ));
        }
    }

    for field in DETAIL_FIELDS {
        if let Some(value) = inner.get(*field) {
            lines.push(String::new());
            lines.push(format!("{}:", capitalize(field)));
            lines.push(format_detail(value));
        }
    }

    lines.join("\n")
}

/// Append `Label: value` when the field is present
fn push_field(lines: &mut Vec<String>, label: &str, value: Option<&Value>) {
    if let Some(value) = value {
        lines.push(format!("{}: {}", label, plain_text(value)));
    }
}

/// Keep `text` whole up to `limit` characters, otherwise cut and mark it
pub fn preview_text(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}... (truncated)", &text[..cut]),
        None => text.to_string(),
    }
}

/// Pretty-print a value as 2-space indented JSON
///
/// Falls back to the plain form if serialization fails.
pub fn format_detail(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| plain_text(value))
}

/// Upper-case the first character, lower-case the rest
fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Header printed above filtered output
pub fn render_filter_header(shown: usize, targets: &[String]) -> String {
    format!(
        "Showing {} message(s) with methods: {}",
        shown,
        targets.join(", ")
    )
}

/// Message printed when a filter selects nothing
pub fn render_no_matches(targets: &[String]) -> String {
    format!("No messages found with methods: {}", targets.join(", "))
}

/// Render the `--stats` report
///
/// **Public** - main entry point for stats output
pub fn render_stats(stats: &MethodStats) -> String {
    let mut lines = vec![
        format!("Total messages processed: {}", stats.total_messages),
        format!("Total methods found: {}", stats.total_methods),
        String::new(),
        format!("Top {} methods:", stats.top_n),
    ];

    for entry in &stats.top_methods {
        lines.push(format!("{}: {}", entry.method, entry.count));
    }

    lines.join("\n")
}
