use std::io::Write;

use crate::error::RenderIssue;
use crate::policy::RenderPolicy;

/// Accumulates the inline fragments of the current visual line and
/// flushes them as one wrapped, indented row.
///
/// Only one line is ever buffered; each flush hands the accumulated text
/// (with a trailing newline) to the policy's row formatter and writes
/// the result straight to the sink. Write failures are recorded, not
/// raised, so traversal keeps going and the caller aggregates them at
/// the end. Callers must flush once per line, including a final flush
/// after traversal completes.
pub(crate) struct RowWriter<'p, P, W> {
    sink: W,
    pub(crate) policy: &'p P,
    line: String,
    issues: Vec<RenderIssue>,
}

impl<'p, P: RenderPolicy, W: Write> RowWriter<'p, P, W> {
    pub fn new(sink: W, policy: &'p P) -> Self {
        Self {
            sink,
            policy,
            line: String::new(),
            issues: Vec::new(),
        }
    }

    pub fn push(&mut self, fragment: &str) {
        self.line.push_str(fragment);
    }

    pub fn flush(&mut self, depth: usize) {
        self.line.push('\n');
        let row = self.policy.row(&self.line, depth);
        if let Err(source) = self.sink.write_all(row.as_bytes()) {
            self.issues.push(RenderIssue::Sink { source });
        }
        self.line.clear();
    }

    pub fn into_issues(self) -> Vec<RenderIssue> {
        self.issues
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::policy::PathCollector;

    #[rstest::rstest]
    fn test_push_and_flush_builds_rows() {
        let policy = PathCollector::new();
        let mut out = Vec::new();
        let mut rows = RowWriter::new(&mut out, &policy);

        rows.push("name");
        rows.push(": ");
        rows.push("soda");
        rows.flush(1);
        rows.push("done");
        rows.flush(0);

        assert!(rows.into_issues().is_empty());
        assert_eq!(String::from_utf8(out).unwrap(), "  name: soda\ndone\n");
    }

    #[rstest::rstest]
    fn test_flush_empty_line_still_emits_row() {
        let policy = PathCollector::new();
        let mut out = Vec::new();
        let mut rows = RowWriter::new(&mut out, &policy);

        rows.flush(2);

        assert_eq!(String::from_utf8(out).unwrap(), "    \n");
    }

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[rstest::rstest]
    fn test_write_failures_are_recorded_not_raised() {
        let policy = PathCollector::new();
        let mut rows = RowWriter::new(ClosedSink, &policy);

        rows.push("a");
        rows.flush(0);
        rows.push("b");
        rows.flush(0);

        let issues = rows.into_issues();
        assert_eq!(issues.len(), 2);
        assert!(issues
            .iter()
            .all(|issue| matches!(issue, RenderIssue::Sink { .. })));
    }
}
