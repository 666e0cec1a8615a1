use std::fmt;
use std::io;

use thiserror::Error;

/// A single non-fatal problem recorded while rendering.
///
/// Rendering never aborts on one of these; the node (or write) in
/// question is skipped and traversal continues with its siblings.
#[derive(Debug, Error)]
pub enum RenderIssue {
    /// A node kind the renderer cannot express, tagged with its path.
    #[error("unsupported value at {path}")]
    UnsupportedValue { path: String },

    /// The output sink rejected a write.
    #[error("sink write failed: {source}")]
    Sink {
        #[source]
        source: io::Error,
    },

    /// The input could not be converted into a renderable tree.
    #[error("input is not a renderable tree: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

/// Every issue recorded across one render call, joined.
///
/// Output may be partially usable even when this is returned, so callers
/// that keep partial output must still inspect [`RenderError::issues`].
#[derive(Debug)]
pub struct RenderError {
    issues: Vec<RenderIssue>,
}

impl RenderError {
    pub(crate) fn from_issues(issues: Vec<RenderIssue>) -> Option<Self> {
        if issues.is_empty() {
            None
        } else {
            Some(Self { issues })
        }
    }

    pub fn issues(&self) -> &[RenderIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<RenderIssue> {
        self.issues
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.issues
            .first()
            .map(|issue| issue as &(dyn std::error::Error + 'static))
    }
}

impl From<RenderIssue> for RenderError {
    fn from(issue: RenderIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }
}
