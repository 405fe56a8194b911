//! Nested-span collapse
//!
//! Custom emitters can produce a span whose whole content is one other
//! span. The outer wrapper adds nothing, so it is removed and only the
//! inner span is kept. Only exact nesting is handled; a span that shares
//! its extent with surrounding text is left alone.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static NESTED_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<span class="[^"]*">(<span class="[^"]*">[^<]*</span>)</span>"#)
        .expect("Valid nested span regex")
});

/// Collapse `<span a><span b>x</span></span>` into `<span b>x</span>`
///
/// Runs until nothing changes, so deeper nesting is reduced one level per
/// pass. Every pass shortens the string, which bounds the loop.
pub fn collapse_nested_spans(markup: &str) -> String {
    let mut current = markup.to_string();

    loop {
        let collapsed = match NESTED_SPAN.replace_all(&current, "$1") {
            Cow::Borrowed(_) => None,
            Cow::Owned(collapsed) => Some(collapsed),
        };

        match collapsed {
            Some(collapsed) => current = collapsed,
            None => return current,
        }
    }
}
