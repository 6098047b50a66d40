//! Method allow-list filtering.

use crate::parser::Envelope;
use log::debug;
use serde_json::Value;

/// Whether the envelope's payload or outer record names one of `targets`
///
/// The payload method is checked first; a record still qualifies when only
/// the outer method matches.
pub fn matches_methods(envelope: &Envelope, targets: &[String]) -> bool {
    let hit = |method: Option<&Value>| {
        method
            .and_then(Value::as_str)
            .is_some_and(|name| targets.iter().any(|target| target == name))
    };

    hit(envelope.inner_method()) || hit(envelope.outer_method())
}

/// Select matching envelopes, keeping input order
///
/// **Public** - main entry point for filtering
pub fn filter_by_methods<'a>(envelopes: &'a [Envelope], targets: &[String]) -> Vec<&'a Envelope> {
    let selected: Vec<&Envelope> = envelopes
        .iter()
        .filter(|envelope| matches_methods(envelope, targets))
        .collect();

    debug!(
        "Method filter kept {} of {} messages",
        selected.len(),
        envelopes.len()
    );

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn targets(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_inner_method_matches() {
        let envelope = Envelope::with_inner(json!({}), json!({"method": "textDocument/didOpen"}));
        assert!(matches_methods(&envelope, &targets(&["textDocument/didOpen"])));
        assert!(!matches_methods(&envelope, &targets(&["textDocument/didClose"])));
    }

    #[test]
    fn test_outer_method_matches_when_inner_differs() {
        let envelope = Envelope::with_inner(
            json!({"method": "textDocument/didOpen"}),
            json!({"method": "$/progress"}),
        );
        assert!(matches_methods(&envelope, &targets(&["textDocument/didOpen"])));
    }

    #[test]
    fn test_non_string_method_never_matches() {
        let envelope = Envelope::outer_only(json!({"method": 1}));
        assert!(!matches_methods(&envelope, &targets(&["1"])));
    }

    #[test]
    fn test_filter_keeps_order() {
        let envelopes = vec![
            Envelope::outer_only(json!({"method": "a", "id": 1})),
            Envelope::outer_only(json!({"method": "b", "id": 2})),
            Envelope::outer_only(json!({"method": "a", "id": 3})),
        ];

        let selected = filter_by_methods(&envelopes, &targets(&["a"]));
        let ids: Vec<&Value> = selected.iter().map(|e| &e.outer["id"]).collect();

        assert_eq!(ids, vec![&json!(1), &json!(3)]);
    }
}
