//! LSP Log Inspect
//!
//! Reads recorded JSON-RPC/LSP message logs and prints them in a
//! human-readable form.
//!
//! This crate provides the core implementation for the
//! `lsp-log-inspect` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! lsp-log-inspect lsp-log.jsonl -m textDocument/didOpen -m textDocument/didClose
//! lsp-log-inspect lsp-log.jsonl --stats
//! cat lsp-log.jsonl | lsp-log-inspect
//! ```
//!
//! Log records may carry the actual LSP message as JSON text in a `data`
//! field; the inspector decodes it and shows both layers.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
