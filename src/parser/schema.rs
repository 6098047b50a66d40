//! Envelope definitions for recorded JSON-RPC messages.
//!
//! Log records have no fixed schema. Everything here is optional-field
//! access on top of `serde_json::Value`.

use serde_json::Value;

/// A log record paired with the LSP message recovered from its payload
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// The record exactly as read from the log
    pub outer: Value,

    /// Decoded `data` payload; only ever a JSON object
    pub inner: Option<Value>,
}

impl Envelope {
    /// Create an envelope with no recovered payload
    ///
    /// **Public** - constructor
    pub fn outer_only(outer: Value) -> Self {
        Self { outer, inner: None }
    }

    /// Create an envelope carrying a decoded payload
    ///
    /// **Public** - constructor
    pub fn with_inner(outer: Value, inner: Value) -> Self {
        Self {
            outer,
            inner: Some(inner),
        }
    }

    /// `method` of the outer record, if any
    pub fn outer_method(&self) -> Option<&Value> {
        self.outer.get("method")
    }

    /// `method` of the decoded payload, if any
    pub fn inner_method(&self) -> Option<&Value> {
        self.inner.as_ref().and_then(|inner| inner.get("method"))
    }

    /// `params.textDocument` of the decoded payload, if any
    pub fn text_document(&self) -> Option<&Value> {
        self.inner
            .as_ref()
            .and_then(|inner| inner.get("params"))
            .and_then(|params| params.get("textDocument"))
    }
}

/// Render a scalar the way a log reader expects to see it
///
/// Strings print without quotes, everything else as compact JSON.
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
