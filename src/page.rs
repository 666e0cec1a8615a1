use std::io::Write;

use memchr::memmem;

use crate::error::{RenderError, RenderIssue};
use crate::policy::{HtmlPolicy, RenderPolicy};
use crate::render::Renderer;
use crate::value::Value;

const DEFAULT_TEMPLATE: &[u8] = include_bytes!("../templates/default_page.html");
const DEFAULT_TITLE_TOKEN: &str = "{{title}}";
const DEFAULT_CONTENT_TOKEN: &str = "{{content}}";

enum Slot {
    Title,
    Content,
}

/// Splices a title and a rendered fragment into an HTML page template.
///
/// Placeholder tokens are located by plain substring search (first
/// occurrence each, either order, offset 0 included); this is not a
/// templating engine. A missing token is skipped and the template passes
/// through around it.
///
/// ```
/// use serde_json::json;
/// use yamlhtml::{PageRenderer, Value};
///
/// let page = PageRenderer::new().with_title("inventory");
/// let (html, err) = page.render(&Value::from(json!({"ok": true})));
/// assert!(err.is_none());
/// assert!(String::from_utf8(html).unwrap().contains("<title>inventory</title>"));
/// ```
pub struct PageRenderer<P = HtmlPolicy> {
    title: String,
    template: Vec<u8>,
    title_token: String,
    content_token: String,
    renderer: Renderer<P>,
}

impl PageRenderer<HtmlPolicy> {
    pub fn new() -> Self {
        Self {
            title: "yamlhtml".to_string(),
            template: DEFAULT_TEMPLATE.to_vec(),
            title_token: DEFAULT_TITLE_TOKEN.to_string(),
            content_token: DEFAULT_CONTENT_TOKEN.to_string(),
            renderer: Renderer::default(),
        }
    }
}

impl Default for PageRenderer<HtmlPolicy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: RenderPolicy> PageRenderer<P> {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_template(mut self, template: Vec<u8>) -> Self {
        self.template = template;
        self
    }

    pub fn with_tokens(
        mut self,
        title_token: impl Into<String>,
        content_token: impl Into<String>,
    ) -> Self {
        self.title_token = title_token.into();
        self.content_token = content_token.into();
        self
    }

    /// Swap the fragment renderer, e.g. for a customized policy.
    pub fn with_renderer<Q: RenderPolicy>(self, renderer: Renderer<Q>) -> PageRenderer<Q> {
        PageRenderer {
            title: self.title,
            template: self.template,
            title_token: self.title_token,
            content_token: self.content_token,
            renderer,
        }
    }

    /// Render the full page into a buffer; see [`Renderer::render`] for
    /// the partial-output contract.
    pub fn render(&self, value: &Value) -> (Vec<u8>, Option<RenderError>) {
        let mut out = Vec::new();
        let result = self.render_to(&mut out, value);
        (out, result.err())
    }

    /// Write the full page incrementally: template bytes verbatim, the
    /// title at its token, and the rendered fragment at the content
    /// token, delegating to the fragment renderer over the same sink.
    pub fn render_to<W: Write>(&self, mut sink: W, value: &Value) -> Result<(), RenderError> {
        let mut issues = Vec::new();

        let mut slots = Vec::with_capacity(2);
        if let Some(at) = memmem::find(&self.template, self.title_token.as_bytes()) {
            slots.push((at, self.title_token.len(), Slot::Title));
        }
        if let Some(at) = memmem::find(&self.template, self.content_token.as_bytes()) {
            slots.push((at, self.content_token.len(), Slot::Content));
        }
        slots.sort_unstable_by_key(|(at, _, _)| *at);

        let mut cursor = 0;
        for (at, len, slot) in slots {
            if at < cursor {
                // Tokens overlap; the earlier one already consumed this.
                continue;
            }
            write_bytes(&mut sink, &self.template[cursor..at], &mut issues);
            match slot {
                Slot::Title => write_bytes(&mut sink, self.title.as_bytes(), &mut issues),
                Slot::Content => {
                    if let Err(err) = self.renderer.render_to(&mut sink, value) {
                        issues.extend(err.into_issues());
                    }
                }
            }
            cursor = at + len;
        }
        write_bytes(&mut sink, &self.template[cursor..], &mut issues);

        match RenderError::from_issues(issues) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn write_bytes<W: Write>(sink: &mut W, bytes: &[u8], issues: &mut Vec<RenderIssue>) {
    if let Err(source) = sink.write_all(bytes) {
        issues.push(RenderIssue::Sink { source });
    }
}
