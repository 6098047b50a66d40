//! Method frequency counting across outer records and decoded payloads.

use crate::parser::{plain_text, Envelope};
use log::debug;
use serde_json::Value;
use std::collections::HashMap;

/// Occurrences of one method name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCount {
    pub method: String,
    pub count: usize,
}

/// Running method counts that remember first-seen order
///
/// Ranking is stable, so methods with equal counts keep the order in which
/// they were first encountered. Entries are keyed on the JSON value, so the
/// string `"7"` and the number `7` are counted apart.
#[derive(Debug, Clone, Default)]
pub struct MethodTally {
    counts: Vec<MethodCount>,
    positions: HashMap<String, usize>,
}

impl MethodTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of a `method` value
    ///
    /// Non-string values are listed under their compact JSON form.
    pub fn record(&mut self, method: &Value) {
        let key = method.to_string();
        match self.positions.get(&key) {
            Some(&position) => self.counts[position].count += 1,
            None => {
                self.positions.insert(key, self.counts.len());
                self.counts.push(MethodCount {
                    method: plain_text(method),
                    count: 1,
                });
            }
        }
    }

    /// Occurrences of a string-valued method name
    pub fn count_for(&self, method: &str) -> usize {
        self.count_for_value(&Value::String(method.to_string()))
    }

    /// Occurrences of an arbitrary `method` value
    pub fn count_for_value(&self, method: &Value) -> usize {
        self.positions
            .get(&method.to_string())
            .map(|&position| self.counts[position].count)
            .unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    /// Number of distinct method names
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// The `n` most frequent methods, descending, ties in first-seen order
    pub fn top(&self, n: usize) -> Vec<MethodCount> {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}

/// Summary printed by `--stats`
#[derive(Debug, Clone, PartialEq)]
pub struct MethodStats {
    /// Records read from the log
    pub total_messages: usize,

    /// `method` fields seen on either layer
    pub total_methods: usize,

    /// Most frequent methods, descending
    pub top_methods: Vec<MethodCount>,

    /// How many entries were requested
    pub top_n: usize,
}

/// Tally `method` on the outer record and on the decoded payload
///
/// **Public** - main entry point for counting
pub fn build_method_tally(envelopes: &[Envelope]) -> MethodTally {
    let mut tally = MethodTally::new();

    for envelope in envelopes {
        if let Some(method) = envelope.outer_method() {
            tally.record(method);
        }
        if let Some(method) = envelope.inner_method() {
            tally.record(method);
        }
    }

    debug!(
        "Counted {} method fields across {} distinct methods",
        tally.total(),
        tally.distinct()
    );

    tally
}

/// Build the stats summary for a run
///
/// # Arguments
/// * `envelopes` - All unwrapped records
/// * `top_n` - Number of methods to list
pub fn calculate_method_stats(envelopes: &[Envelope], top_n: usize) -> MethodStats {
    let tally = build_method_tally(envelopes);

    MethodStats {
        total_messages: envelopes.len(),
        total_methods: tally.total(),
        top_methods: tally.top(top_n),
        top_n,
    }
}
