mod row;

use std::io::Write;

use indexmap::IndexMap;

use crate::error::{RenderError, RenderIssue};
use crate::policy::{HtmlPolicy, RenderPolicy};
use crate::utils::number::number_text;
use crate::utils::string::display_string;
use crate::value::Value;
use row::RowWriter;

/// Depth-first renderer turning a [`Value`] tree into addressed,
/// depth-tagged markup rows.
///
/// All traversal state lives in the individual call, so one renderer may
/// be reused for any number of sequential, independent renders; it must
/// not be shared across threads mid-call.
pub struct Renderer<P = HtmlPolicy> {
    policy: P,
}

impl<P: RenderPolicy> Renderer<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Render into an in-memory buffer.
    ///
    /// The buffer is returned alongside the aggregated error, if any:
    /// output can be partially correct despite recorded issues, and
    /// callers consuming it anyway must still check the error.
    pub fn render(&self, value: &Value) -> (Vec<u8>, Option<RenderError>) {
        let mut out = Vec::new();
        let result = self.render_to(&mut out, value);
        (out, result.err())
    }

    /// Render incrementally into `sink`, one row per write.
    ///
    /// Traversal always runs to completion; every per-node issue and
    /// sink write failure is collected and returned joined at the end.
    pub fn render_to<W: Write>(&self, sink: W, value: &Value) -> Result<(), RenderError> {
        let mut rows = RowWriter::new(sink, &self.policy);
        let mut issues = Vec::new();

        render_node(&mut rows, &mut issues, value, Frame::root());
        // Closes the last visual line, which may be empty.
        rows.flush(0);

        issues.extend(rows.into_issues());
        match RenderError::from_issues(issues) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for Renderer<HtmlPolicy> {
    fn default() -> Self {
        Self::new(HtmlPolicy::new())
    }
}

/// Traversal state handed down each recursive call. Copying a frame per
/// child (instead of mutating shared fields and restoring them on every
/// exit path) keeps siblings from ever observing stale depth or path.
#[derive(Clone, Copy)]
struct Frame<'a> {
    path: &'a str,
    depth: usize,
    /// Set for an array's direct children: the first key of a map
    /// element shares the dash's row and depth.
    in_list: bool,
    /// Set until the first container is entered; the document root lays
    /// its content out flush left.
    root: bool,
}

impl Frame<'static> {
    fn root() -> Self {
        Frame {
            path: "$",
            depth: 0,
            in_list: false,
            root: true,
        }
    }
}

fn render_node<P: RenderPolicy, W: Write>(
    rows: &mut RowWriter<'_, P, W>,
    issues: &mut Vec<RenderIssue>,
    value: &Value,
    frame: Frame<'_>,
) {
    let policy = rows.policy;
    match value {
        Value::Null => {
            let fragment = policy.null(frame.path);
            rows.push(&fragment);
        }
        Value::Bool(v) => {
            let fragment = policy.bool(frame.path, *v);
            rows.push(&fragment);
        }
        Value::String(v) => {
            let fragment = policy.string(frame.path, &display_string(v));
            rows.push(&fragment);
        }
        Value::Number(n) => {
            if !n.is_finite() {
                issues.push(RenderIssue::UnsupportedValue {
                    path: frame.path.to_string(),
                });
                // Still close the pending line so siblings start fresh.
                rows.flush(frame.depth);
                return;
            }
            let fragment = policy.number(frame.path, n.as_f64(), &number_text(n));
            rows.push(&fragment);
        }
        Value::Array(items) => {
            render_array(rows, issues, items, frame);
            return;
        }
        Value::Map(entries) => {
            render_map(rows, issues, entries, frame);
            return;
        }
    }
    rows.flush(frame.depth);
}

fn render_array<P: RenderPolicy, W: Write>(
    rows: &mut RowWriter<'_, P, W>,
    issues: &mut Vec<RenderIssue>,
    items: &[Value],
    frame: Frame<'_>,
) {
    let policy = rows.policy;
    if items.is_empty() {
        rows.push(policy.array_empty());
        rows.flush(frame.depth);
        return;
    }

    // Close out a preceding map-key line; the array starts on its own.
    rows.flush(frame.depth);

    let depth = if frame.root { 0 } else { frame.depth + 1 };
    let mut index = itoa::Buffer::new();
    for (i, item) in items.iter().enumerate() {
        let mut path = String::with_capacity(frame.path.len() + 8);
        path.push_str(frame.path);
        path.push('[');
        path.push_str(index.format(i));
        path.push(']');

        rows.push(policy.array_dash());
        render_node(
            rows,
            issues,
            item,
            Frame {
                path: &path,
                depth,
                in_list: true,
                root: false,
            },
        );
    }
}

fn render_map<P: RenderPolicy, W: Write>(
    rows: &mut RowWriter<'_, P, W>,
    issues: &mut Vec<RenderIssue>,
    entries: &IndexMap<String, Value>,
    frame: Frame<'_>,
) {
    let policy = rows.policy;
    if entries.is_empty() {
        rows.push(policy.map_empty());
        rows.flush(frame.depth);
        return;
    }

    // Deterministic output: keys in ascending byte order, independent of
    // insertion order.
    let mut sorted: Vec<(&str, &Value)> = entries
        .iter()
        .map(|(key, child)| (key.as_str(), child))
        .collect();
    sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));

    if !frame.in_list {
        rows.flush(frame.depth);
    }

    for (i, (key, child)) in sorted.into_iter().enumerate() {
        // The root map keeps its keys flush left; a list element's first
        // key shares the dash's row; everything else indents one level.
        let depth = if frame.root || (frame.in_list && i == 0) {
            frame.depth
        } else {
            frame.depth + 1
        };

        let mut path = String::with_capacity(frame.path.len() + key.len() + 1);
        path.push_str(frame.path);
        path.push('.');
        path.push_str(key);

        let fragment = policy.map_key(&path, key);
        rows.push(&fragment);
        rows.push(policy.map_colon());

        render_node(
            rows,
            issues,
            child,
            Frame {
                path: &path,
                depth,
                in_list: false,
                root: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::policy::PathCollector;

    fn render_plain(value: serde_json::Value) -> String {
        let renderer = Renderer::new(PathCollector::new());
        let (bytes, err) = renderer.render(&Value::from(value));
        assert!(err.is_none());
        String::from_utf8(bytes).unwrap()
    }

    #[rstest::rstest]
    fn test_root_leaf_is_one_row_plus_final_flush() {
        assert_eq!(render_plain(json!(true)), "true\n\n");
        assert_eq!(render_plain(json!(null)), "null\n\n");
        assert_eq!(render_plain(json!("green")), "green\n\n");
        assert_eq!(render_plain(json!(10.23)), "10.23\n\n");
    }

    #[rstest::rstest]
    fn test_empty_containers_share_the_key_row() {
        assert_eq!(
            render_plain(json!({"a": [], "b": {}})),
            "\na: []\nb: {}\n\n"
        );
    }

    #[rstest::rstest]
    fn test_root_array_children_stay_flush_left() {
        assert_eq!(render_plain(json!([1, 2])), "\n- 1\n- 2\n\n");
    }

    #[rstest::rstest]
    fn test_nested_array_indents_one_level() {
        assert_eq!(render_plain(json!([[2]])), "\n- \n  - 2\n\n");
    }

    #[rstest::rstest]
    fn test_map_in_list_first_key_shares_dash_row() {
        assert_eq!(
            render_plain(json!([{"name": "soda", "price": 10.23}])),
            "\n- name: soda\n  price: 10.23\n\n"
        );
    }

    #[rstest::rstest]
    fn test_map_under_map_indents() {
        assert_eq!(
            render_plain(json!({"outer": {"inner": 1}})),
            "\nouter: \n  inner: 1\n\n"
        );
    }

    #[rstest::rstest]
    fn test_renderer_is_reusable() {
        let renderer = Renderer::default();
        let value = Value::from(json!({"k": [true, null]}));

        let (first, err_first) = renderer.render(&value);
        let (second, err_second) = renderer.render(&value);

        assert!(err_first.is_none());
        assert!(err_second.is_none());
        assert_eq!(first, second);
    }
}
