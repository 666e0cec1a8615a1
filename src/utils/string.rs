/// Prepare a string leaf for display.
///
/// Leading and trailing whitespace is trimmed; if interior whitespace
/// remains the text is returned quoted and escaped, which disambiguates
/// multi-word values once HTML collapses their spacing. Map keys are
/// never passed through here.
pub(crate) fn display_string(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.chars().any(char::is_whitespace) {
        return quote_string(trimmed);
    }
    trimmed.to_string()
}

fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    escape_string_into(&mut out, s);
    out.push('"');
    out
}

fn escape_string_into(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_display_string_plain() {
        assert_eq!(display_string("green"), "green");
        assert_eq!(display_string("  green  "), "green");
    }

    #[rstest::rstest]
    fn test_display_string_interior_whitespace_quotes() {
        assert_eq!(
            display_string("red with blue stripes"),
            "\"red with blue stripes\""
        );
        assert_eq!(display_string(" padded words "), "\"padded words\"");
    }

    #[rstest::rstest]
    fn test_display_string_escapes_inside_quotes() {
        assert_eq!(display_string("a\nb"), "\"a\\nb\"");
        assert_eq!(display_string("say \"hi\" now"), "\"say \\\"hi\\\" now\"");
        assert_eq!(display_string("back\\slash here"), "\"back\\\\slash here\"");
    }

    #[rstest::rstest]
    fn test_display_string_no_whitespace_left_unquoted() {
        // Trimming can remove all whitespace; the rest stays verbatim.
        assert_eq!(display_string("  solo\t"), "solo");
        assert_eq!(display_string("a\"b"), "a\"b");
    }
}
