//! Renders a decoded YAML/JSON value tree as an HTML fragment that
//! mimics YAML's line and indentation structure, with a pluggable markup
//! policy per element kind and JSON-Path addressing of every node.

pub mod error;
pub mod page;
pub mod policy;
pub mod render;
pub mod value;

mod utils;

use std::io::Write;

use serde::Serialize;

pub use crate::error::{RenderError, RenderIssue};
pub use crate::page::PageRenderer;
pub use crate::policy::{HtmlPolicy, PathCollector, RenderPolicy};
pub use crate::render::Renderer;
pub use crate::value::{Number, Value};

pub type Result<T> = std::result::Result<T, RenderError>;

/// Render any serializable value with the default HTML policy.
///
/// ```
/// use serde_json::json;
///
/// let html = yamlhtml::to_string(&json!({"ok": true})).unwrap();
/// assert!(html.contains(r#"<div class="yaml-key yaml-string">ok</div>"#));
/// ```
pub fn to_string<T: Serialize>(value: &T) -> Result<String> {
    to_string_with_policy(value, &HtmlPolicy::new())
}

pub fn to_string_with_policy<T: Serialize, P: RenderPolicy>(
    value: &T,
    policy: &P,
) -> Result<String> {
    let bytes = to_vec_with_policy(value, policy)?;
    Ok(String::from_utf8(bytes).expect("rendered output must be valid UTF-8"))
}

pub fn to_vec<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    to_vec_with_policy(value, &HtmlPolicy::new())
}

pub fn to_vec_with_policy<T: Serialize, P: RenderPolicy>(value: &T, policy: &P) -> Result<Vec<u8>> {
    let tree = into_tree(value)?;
    let (bytes, err) = Renderer::new(policy).render(&tree);
    match err {
        Some(err) => Err(err),
        None => Ok(bytes),
    }
}

pub fn to_writer<W: Write, T: Serialize>(writer: W, value: &T) -> Result<()> {
    to_writer_with_policy(writer, value, &HtmlPolicy::new())
}

pub fn to_writer_with_policy<W: Write, T: Serialize, P: RenderPolicy>(
    writer: W,
    value: &T,
    policy: &P,
) -> Result<()> {
    let tree = into_tree(value)?;
    Renderer::new(policy).render_to(writer, &tree)
}

fn into_tree<T: Serialize>(value: &T) -> Result<Value> {
    let json = serde_json::to_value(value)
        .map_err(|source| RenderError::from(RenderIssue::Serialize { source }))?;
    Ok(Value::from(json))
}
