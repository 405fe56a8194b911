//! Common test utilities and helpers

#![allow(dead_code)]

use once_cell::sync::Lazy;
use regex::Regex;

static OPEN_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<span class="([^"]*)">"#).expect("Valid span regex"));

static EMITTED_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<span class="[A-Za-z0-9_-]*">|</span>"#).expect("Valid tag regex")
});

static BARE_AMPERSAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(?:amp;|lt;|gt;)?").expect("Valid ampersand regex"));

/// Number of spans opened in `markup`
pub fn span_count(markup: &str) -> usize {
    OPEN_SPAN.find_iter(markup).count()
}

/// Class attribute of every span, in document order
pub fn span_classes(markup: &str) -> Vec<String> {
    OPEN_SPAN
        .captures_iter(markup)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Assert `markup` only contains emitted span tags and escaped text
pub fn assert_escaped(markup: &str) {
    let text = EMITTED_TAG.replace_all(markup, "");
    assert!(
        !text.contains('<') && !text.contains('>'),
        "unescaped angle bracket in {markup:?}"
    );

    for found in BARE_AMPERSAND.find_iter(&text) {
        assert!(
            found.as_str().len() > 1,
            "unescaped ampersand in {markup:?}"
        );
    }

    assert_eq!(
        markup.matches("<span ").count(),
        markup.matches("</span>").count(),
        "unbalanced spans in {markup:?}"
    );
}

/// Content of the first span with exactly this class, up to the next `</span>`
pub fn first_span_content<'a>(markup: &'a str, class: &str) -> Option<&'a str> {
    let open = format!(r#"<span class="{class}">"#);
    let start = markup.find(&open)? + open.len();
    let end = markup[start..].find("</span>")? + start;
    Some(&markup[start..end])
}
