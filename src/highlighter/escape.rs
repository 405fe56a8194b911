//! HTML escaping for highlighter input and its inverse
//!
//! Only `&`, `<` and `>` are escaped. Quotes stay literal because the
//! string rules of every language match on them.

/// Escape `&`, `<` and `>` in a single pass
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

/// Reverse [`escape_html`]
///
/// Single pass, so `&amp;lt;` becomes `&lt;` and not `<`. Unknown entities
/// are left as they are.
pub fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        let (decoded, consumed) = if tail.starts_with("&amp;") {
            ('&', 5)
        } else if tail.starts_with("&lt;") {
            ('<', 4)
        } else if tail.starts_with("&gt;") {
            ('>', 4)
        } else {
            ('&', 1)
        };

        out.push(decoded);
        rest = &tail[consumed..];
    }

    out.push_str(rest);
    out
}

/// Remove every `<...>` tag from highlighter output
///
/// Valid because source angle brackets are always escaped, so any literal
/// `<` in the output opens emitted markup.
pub fn strip_markup(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;

    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }

    out
}

/// Recover the source text from highlighter output
pub fn to_plain_text(markup: &str) -> String {
    unescape_html(&strip_markup(markup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_html("\"quoted\" 'text'"), "\"quoted\" 'text'");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_already_escaped_text() {
        // Source that looks like an entity is still escaped exactly once
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_unescape_is_single_pass() {
        assert_eq!(unescape_html("&amp;lt;"), "&lt;");
        assert_eq!(unescape_html("&lt;div&gt;"), "<div>");
        assert_eq!(unescape_html("a & b"), "a & b");
        assert_eq!(unescape_html("&nbsp;"), "&nbsp;");
    }

    #[test]
    fn test_strip_markup() {
        let markup = r#"<span class="sh-keyword">const</span> x &lt; 1"#;
        assert_eq!(strip_markup(markup), "const x &lt; 1");
    }

    #[test]
    fn test_to_plain_text() {
        let source = "if (a < b && c) { return \"<p>\"; }";
        assert_eq!(to_plain_text(&escape_html(source)), source);
    }
}
