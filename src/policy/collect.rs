use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::policy::RenderPolicy;

/// Diagnostic policy that records the JSON-Path address and display text
/// of every visited leaf and map key, while emitting plain-text rows.
///
/// Useful for tests and for building search indexes over a document.
/// This is the one deliberate exception to policy purity: it mutates its
/// collection through interior mutability, so it is meant for inspection
/// rather than stable repeated output of the *collection* (the rendered
/// text itself stays deterministic).
///
/// ```
/// use serde_json::json;
/// use yamlhtml::{to_string_with_policy, PathCollector};
///
/// let collector = PathCollector::new();
/// to_string_with_policy(&json!({"ok": true}), &collector).unwrap();
/// assert_eq!(collector.paths()["$.ok"], "true");
/// ```
#[derive(Debug, Default)]
pub struct PathCollector {
    visited: RefCell<BTreeMap<String, String>>,
}

impl PathCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, keyed by path.
    ///
    /// A leaf under a map records twice at the same path (key first,
    /// then value); the value wins.
    pub fn paths(&self) -> BTreeMap<String, String> {
        self.visited.borrow().clone()
    }

    fn record(&self, path: &str, text: &str) -> String {
        self.visited
            .borrow_mut()
            .insert(path.to_string(), text.to_string());
        text.to_string()
    }
}

impl RenderPolicy for PathCollector {
    fn null(&self, path: &str) -> String {
        self.record(path, "null")
    }

    fn bool(&self, path: &str, value: bool) -> String {
        self.record(path, if value { "true" } else { "false" })
    }

    fn string(&self, path: &str, value: &str) -> String {
        self.record(path, value)
    }

    fn number(&self, path: &str, _value: f64, text: &str) -> String {
        self.record(path, text)
    }

    fn map_key(&self, path: &str, key: &str) -> String {
        self.record(path, key)
    }

    fn array_dash(&self) -> &str {
        "- "
    }

    fn array_empty(&self) -> &str {
        "[]"
    }

    fn map_colon(&self) -> &str {
        ": "
    }

    fn map_empty(&self) -> &str {
        "{}"
    }

    fn row(&self, line: &str, depth: usize) -> String {
        let mut out = String::with_capacity(2 * depth + line.len());
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(line);
        out
    }
}
