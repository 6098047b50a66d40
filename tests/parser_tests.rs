use lsp_log_inspect::parser::{
    decode_payload, load_file, parse_content, unwrap_record, unwrap_records, Envelope,
};
use lsp_log_inspect::utils::LoadError;
use serde_json::{json, Value};
use std::io::Write;

fn envelope_from_line(line: &str) -> Envelope {
    let record: Value = serde_json::from_str(line).unwrap();
    unwrap_record(record)
}

#[test]
fn test_jsonl_record_count_ignores_bad_lines() {
    let content = [
        r#"{"direction": "in", "data": "{\"method\":\"initialize\"}"}"#,
        r#"{"direction": "out""#,
        r#"{"direction": "in"}"#,
        "",
        "garbage",
        r#"{"direction": "out", "data": "{}"}"#,
    ]
    .join("\n");

    let log = parse_content(&content);
    let envelopes = unwrap_records(log.records);

    assert_eq!(envelopes.len(), 3);
    assert_eq!(log.skipped.len(), 2);
    assert_eq!(log.skipped[0].line_number, 2);
    assert_eq!(log.skipped[1].line_number, 5);
}

#[test]
fn test_direct_payload_decodes_exactly() {
    let payload = json!({
        "jsonrpc": "2.0",
        "method": "textDocument/didOpen",
        "params": {"textDocument": {"uri": "file:///main.rs", "version": 1}}
    });
    let record = json!({"timestamp": "t0", "data": payload.to_string()});

    let envelope = unwrap_record(record);
    assert_eq!(envelope.inner, Some(payload));
}

#[test]
fn test_escaped_payload_decodes() {
    let envelope = envelope_from_line(
        r#"{"data": "{\\\"method\\\":\\\"initialize\\\",\\\"jsonrpc\\\":\\\"2.0\\\"}"}"#,
    );

    assert_eq!(
        envelope.outer["data"],
        json!(r#"{\"method\":\"initialize\",\"jsonrpc\":\"2.0\"}"#)
    );

    assert_eq!(
        envelope.inner,
        Some(json!({"method": "initialize", "jsonrpc": "2.0"}))
    );
}

#[test]
fn test_escaped_payload_in_jsonl_log() {
    let content = [
        r#"{"data": "{\\\"method\\\":\\\"initialize\\\",\\\"jsonrpc\\\":\\\"2.0\\\"}"}"#,
        r#"{"direction": "out"}"#,
    ]
    .join("\n");

    let log = parse_content(&content);
    assert!(log.skipped.is_empty());

    let envelopes = unwrap_records(log.records);
    assert_eq!(envelopes.len(), 2);
    assert_eq!(
        envelopes[0].inner,
        Some(json!({"method": "initialize", "jsonrpc": "2.0"}))
    );
    assert!(envelopes[1].inner.is_none());
}

#[test]
fn test_escaped_payload_with_backslashes_in_strings() {
    // The inner message carries a Windows path, escaped one extra time
    let inner = json!({"method": "workspace/didChangeWatchedFiles", "path": "C:\\src"});
    let once = inner.to_string();
    let twice = once.replace('\\', "\\\\").replace('"', "\\\"");

    let decoded = decode_payload(&twice);
    assert_eq!(decoded, Some(inner));
}

#[test]
fn test_undecodable_payload_is_outer_only() {
    let envelope = envelope_from_line(r#"{"data": "[Info] server started"}"#);
    assert!(envelope.inner.is_none());

    let envelope = envelope_from_line(r#"{"data": "\"just a string\""}"#);
    assert!(envelope.inner.is_none());

    let envelope = envelope_from_line(r#"{"method": "exit"}"#);
    assert!(envelope.inner.is_none());
}

#[test]
fn test_unescape_leaves_other_escapes() {
    // `\n` is not collapsed, so a payload that only parses with it stays undecoded
    assert!(decode_payload(r#"{\"a\":\n1}"#).is_none());
}

#[test]
fn test_load_file_single_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{{\n  \"jsonrpc\": \"2.0\",\n  \"method\": \"initialized\"\n}}").unwrap();

    let log = load_file(file.path()).unwrap();

    assert_eq!(log.records, vec![json!({"jsonrpc": "2.0", "method": "initialized"})]);
}

#[test]
fn test_load_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("lsp-log.jsonl");

    let err = load_file(&missing).unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound(_)));
    assert!(err.to_string().contains("lsp-log.jsonl"));
}
