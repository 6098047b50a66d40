//! Recovery of LSP messages nested inside a log record's `data` string.
//!
//! Some loggers store the LSP message as JSON text inside the record, and
//! some of those escape it a second time as if it were embedded in yet another
//! JSON string. Decoding is tried directly first, then once more after
//! collapsing `\\` and `\"` escapes.
//!
//! Only those two escapes are collapsed. `\n`, `\t` and `\uXXXX` are left
//! untouched, so payloads relying on them stay undecoded.

use super::schema::Envelope;
use crate::utils::config::PAYLOAD_FIELD;
use log::debug;
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Matches an escaped backslash or an escaped double quote
fn escaped_pair() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"\\([\\"])"#).expect("escape pattern is valid"))
}

/// Pair a record with its decoded `data` payload, when there is one
///
/// **Public** - main entry point for unwrapping
pub fn unwrap_record(record: Value) -> Envelope {
    let inner = record
        .get(PAYLOAD_FIELD)
        .and_then(Value::as_str)
        .and_then(decode_payload);

    match inner {
        Some(inner) => Envelope::with_inner(record, inner),
        None => Envelope::outer_only(record),
    }
}

/// Unwrap every record, keeping input order
pub fn unwrap_records(records: Vec<Value>) -> Vec<Envelope> {
    records.into_iter().map(unwrap_record).collect()
}

/// Decode a payload string into a JSON object
///
/// Returns `None` when neither the direct nor the unescaped form is an object.
pub fn decode_payload(raw: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) if value.is_object() => return Some(value),
        Ok(_) => debug!("Payload is JSON but not an object, retrying unescaped"),
        Err(e) => debug!("Direct payload decode failed: {}", e),
    }

    let unescaped = unescape_payload(raw);
    match serde_json::from_str::<Value>(&unescaped) {
        Ok(value) if value.is_object() => Some(value),
        Ok(_) => {
            debug!("Unescaped payload is not an object, keeping outer record only");
            None
        }
        Err(e) => {
            debug!("Unescaped payload decode failed: {}", e);
            None
        }
    }
}

/// Collapse `\\` to `\` and `\"` to `"`, left to right, without overlap
pub fn unescape_payload(raw: &str) -> Cow<'_, str> {
    escaped_pair().replace_all(raw, "$1")
}
