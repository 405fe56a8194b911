//! Built-in rule sets for the script, markup and style languages
//!
//! Patterns run over HTML-escaped text, so they look for `&lt;` rather
//! than `<`. Rule order matters: comments and strings come first so their
//! contents are sealed before keywords, operators and friends run.
//!
//! The tables are heuristics, not grammars. Call detection looks for an
//! identifier followed by `(`, types are guessed from capitalization.

use super::class::SemanticClass;
use super::rules::{Emitter, Piece, Rule, RuleSet};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::sync::Arc;

/// Reserved words highlighted in the script language
pub const SCRIPT_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "function", "return", "const", "let", "var", "class", "new",
    "import", "export", "from", "async", "await",
];

/// Single- or double-quoted string with backslash escapes
const QUOTED: &str = r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'"#;

static SCRIPT: Lazy<Arc<RuleSet>> = Lazy::new(|| {
    let comment_or_string = Regex::new(
        r#"(?P<comment>//[^\n]*|/\*(?s:.*?)\*/)|(?P<string>"(?:\\.|[^"\\\n])*"|'(?:\\.|[^'\\\n])*'|`(?:\\(?s:.)|[^`\\])*`)"#,
    )
    .expect("Valid script comment/string regex");
    let keyword = Regex::new(&format!(r"\b(?:{})\b", SCRIPT_KEYWORDS.join("|")))
        .expect("Valid script keyword regex");
    let number = Regex::new(r"\b\d+(?:\.\d+)?\b").expect("Valid script number regex");
    let type_name = Regex::new(r"\b[A-Z][\w$]*").expect("Valid script type regex");
    let call = Regex::new(r"([A-Za-z_$][\w$]*)(\s*\()").expect("Valid script call regex");
    let bracket = Regex::new(r"[\[\]{}()]").expect("Valid script bracket regex");
    let operator = Regex::new(r"&amp;|&lt;|&gt;|\.{1,3}|[=+\-*/%!|?:]")
        .expect("Valid script operator regex");

    Arc::new(
        RuleSet::new("js")
            .with_rule(Rule::from_regex(
                "comment-or-string",
                comment_or_string,
                Emitter::Custom(emit_comment_or_string),
            ))
            .with_rule(Rule::from_regex(
                "keyword",
                keyword,
                Emitter::Class(SemanticClass::Keyword),
            ))
            .with_rule(Rule::from_regex("number", number, Emitter::Class(SemanticClass::Number)))
            .with_rule(Rule::from_regex("type", type_name, Emitter::Class(SemanticClass::Type)))
            .with_rule(Rule::from_regex("call", call, Emitter::Custom(emit_call)))
            .with_rule(Rule::from_regex(
                "bracket",
                bracket,
                Emitter::Class(SemanticClass::Bracket),
            ))
            .with_rule(Rule::from_regex(
                "operator",
                operator,
                Emitter::Class(SemanticClass::Operator),
            )),
    )
});

static MARKUP: Lazy<Arc<RuleSet>> = Lazy::new(|| {
    let comment = Regex::new(r"&lt;!--(?s:.*?)--&gt;").expect("Valid markup comment regex");
    let tag = Regex::new(r"(&lt;/?)([A-Za-z][A-Za-z0-9-]*)").expect("Valid markup tag regex");
    let attribute = Regex::new(r#"([A-Za-z_:][A-Za-z0-9_:.-]*)=("[^"]*"|'[^']*')?"#)
        .expect("Valid markup attribute regex");
    let string = Regex::new(r#""[^"\n]*""#).expect("Valid markup string regex");

    Arc::new(
        RuleSet::new("html")
            .with_rule(Rule::from_regex(
                "comment",
                comment,
                Emitter::Class(SemanticClass::Comment),
            ))
            .with_rule(Rule::from_regex("tag", tag, Emitter::Custom(emit_tag)))
            .with_rule(Rule::from_regex(
                "attribute",
                attribute,
                Emitter::Custom(emit_attribute),
            ))
            .with_rule(Rule::from_regex("string", string, Emitter::Class(SemanticClass::String))),
    )
});

static STYLE: Lazy<Arc<RuleSet>> = Lazy::new(|| {
    let comment = Regex::new(r"/\*(?s:.*?)\*/").expect("Valid style comment regex");
    let property = Regex::new(&format!(r"(?P<quoted>{QUOTED})|(?P<name>[A-Za-z-]+):"))
        .expect("Valid style property regex");
    let color = Regex::new(&format!(
        r"(?P<quoted>{QUOTED})|(?P<color>#(?:[0-9A-Fa-f]{{8}}|[0-9A-Fa-f]{{6}}|[0-9A-Fa-f]{{3,4}})\b)"
    ))
    .expect("Valid style color regex");
    let string = Regex::new(QUOTED).expect("Valid style string regex");

    Arc::new(
        RuleSet::new("css")
            .with_rule(Rule::from_regex(
                "comment",
                comment,
                Emitter::Class(SemanticClass::Comment),
            ))
            .with_rule(Rule::from_regex("property", property, Emitter::Custom(emit_property)))
            .with_rule(Rule::from_regex("color", color, Emitter::Custom(emit_color)))
            .with_rule(Rule::from_regex("string", string, Emitter::Class(SemanticClass::String))),
    )
});

/// Rules for the script language (`js`)
pub fn script() -> Arc<RuleSet> {
    Arc::clone(&SCRIPT)
}

/// Rules for the markup language (`html`)
pub fn markup() -> Arc<RuleSet> {
    Arc::clone(&MARKUP)
}

/// Rules for the style-sheet language (`css`)
pub fn style() -> Arc<RuleSet> {
    Arc::clone(&STYLE)
}

fn emit_comment_or_string(caps: &Captures<'_>) -> Vec<Piece> {
    let class = if caps.name("comment").is_some() {
        SemanticClass::Comment
    } else {
        SemanticClass::String
    };
    vec![Piece::span(class, &caps[0])]
}

// Only the identifier is wrapped; the parenthesis is left for the bracket rule.
fn emit_call(caps: &Captures<'_>) -> Vec<Piece> {
    vec![
        Piece::span(SemanticClass::Function, &caps[1]),
        Piece::text(&caps[2]),
    ]
}

fn emit_tag(caps: &Captures<'_>) -> Vec<Piece> {
    vec![Piece::text(&caps[1]), Piece::span(SemanticClass::Tag, &caps[2])]
}

fn emit_attribute(caps: &Captures<'_>) -> Vec<Piece> {
    let mut pieces = vec![
        Piece::span(SemanticClass::Property, &caps[1]),
        Piece::text("="),
    ];
    if let Some(value) = caps.get(2) {
        pieces.push(Piece::span(SemanticClass::String, value.as_str()));
    }
    pieces
}

// Quoted text is passed through untouched so `url("http://x")` keeps its
// colon; the string rule picks it up afterwards.
fn emit_property(caps: &Captures<'_>) -> Vec<Piece> {
    match caps.name("name") {
        Some(name) => vec![
            Piece::span(SemanticClass::Property, name.as_str()),
            Piece::text(":"),
        ],
        None => vec![Piece::text(&caps[0])],
    }
}

fn emit_color(caps: &Captures<'_>) -> Vec<Piece> {
    match caps.name("color") {
        Some(color) => vec![Piece::span(SemanticClass::Number, color.as_str())],
        None => vec![Piece::text(&caps[0])],
    }
}
