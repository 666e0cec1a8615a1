use crate::policy::RenderPolicy;

const PADDING_SPACE: &str = r#"<span class="yaml-padding-space">&nbsp;</span>"#;

/// Default policy: class-tagged `<div>` fragments for CSS styling.
///
/// HTML collapses whitespace, so indentation is reconstructed per row
/// from explicit padding spans; `padding` is the number of spans per
/// depth level.
///
/// ```
/// use yamlhtml::HtmlPolicy;
///
/// let wide = HtmlPolicy::new().with_padding(4);
/// ```
#[derive(Clone, Debug)]
pub struct HtmlPolicy {
    padding: usize,
}

impl HtmlPolicy {
    pub fn new() -> Self {
        Self { padding: 2 }
    }

    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }
}

impl Default for HtmlPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPolicy for HtmlPolicy {
    fn null(&self, _path: &str) -> String {
        r#"<div class="yaml-lang yaml-value yaml-null">null</div>"#.to_string()
    }

    fn bool(&self, _path: &str, value: bool) -> String {
        let text = if value { "true" } else { "false" };
        format!(r#"<div class="yaml-lang yaml-value yaml-bool">{text}</div>"#)
    }

    fn string(&self, _path: &str, value: &str) -> String {
        format!(r#"<div class="yaml-value yaml-string">{value}</div>"#)
    }

    fn number(&self, _path: &str, _value: f64, text: &str) -> String {
        format!(r#"<div class="yaml-value yaml-number">{text}</div>"#)
    }

    fn map_key(&self, _path: &str, key: &str) -> String {
        format!(r#"<div class="yaml-key yaml-string">{key}</div>"#)
    }

    fn array_dash(&self) -> &str {
        r#"<div class="yaml-lang">-&nbsp;</div>"#
    }

    fn array_empty(&self) -> &str {
        r#"<div class="yaml-lang">&nbsp;[]</div>"#
    }

    fn map_colon(&self) -> &str {
        r#"<div class="yaml-lang">:&nbsp;</div>"#
    }

    fn map_empty(&self) -> &str {
        r#"<div class="yaml-lang">&nbsp;{}</div>"#
    }

    fn row(&self, line: &str, depth: usize) -> String {
        let mut out = String::with_capacity(line.len() + 96);
        out.push_str(r#"<div class="yaml-container-row"><div class="yaml-container-padding">"#);
        for _ in 0..self.padding * depth {
            out.push_str(PADDING_SPACE);
        }
        out.push_str("</div>");
        out.push_str(line);
        out.push_str("</div>");
        out
    }
}
