//! Rule sets: ordered (pattern, emitter) pairs applied to escaped text
//!
//! A rule set rewrites a document made of [`Piece`]s. Every rule runs as a
//! global find-and-replace over the `Text` pieces left by the rules before
//! it; spans and markup already emitted are sealed and never searched
//! again. That keeps keyword-looking words inside comments and strings
//! untouched, and keeps later rules away from emitted `class="..."`
//! attributes.

use super::class::SemanticClass;
use crate::error::Result;
use regex::{Captures, Regex};
use std::fmt;

/// One unit of the working document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Escaped source text, still open to later rules
    Text(String),

    /// Escaped source text wrapped in a semantic class
    Span { class: SemanticClass, text: String },

    /// Pre-rendered markup from a custom emitter, emitted verbatim
    Markup(String),
}

impl Piece {
    pub fn text(text: impl Into<String>) -> Self {
        Piece::Text(text.into())
    }

    pub fn span(class: SemanticClass, text: impl Into<String>) -> Self {
        Piece::Span {
            class,
            text: text.into(),
        }
    }
}

/// Custom emitter: receives the captures of one match and returns the
/// pieces that replace it
///
/// The pieces must spell out the matched text exactly, or output can no
/// longer be turned back into the source.
pub type EmitFn = fn(&Captures<'_>) -> Vec<Piece>;

/// What a rule produces for each match
#[derive(Clone, Copy)]
pub enum Emitter {
    /// Wrap the whole match in a span of this class
    Class(SemanticClass),

    /// Build the replacement from the capture groups
    Custom(EmitFn),
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emitter::Class(class) => f.debug_tuple("Class").field(class).finish(),
            Emitter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A named pattern with its emitter
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    pattern: Regex,
    emitter: Emitter,
}

impl Rule {
    /// Compile a rule that wraps whole matches in `class`
    pub fn class(name: impl Into<String>, pattern: &str, class: SemanticClass) -> Result<Self> {
        Ok(Self::from_regex(name, Regex::new(pattern)?, Emitter::Class(class)))
    }

    /// Compile a rule with a custom emitter
    pub fn custom(name: impl Into<String>, pattern: &str, emit: EmitFn) -> Result<Self> {
        Ok(Self::from_regex(name, Regex::new(pattern)?, Emitter::Custom(emit)))
    }

    /// Build a rule from an already compiled pattern
    pub fn from_regex(name: impl Into<String>, pattern: Regex, emitter: Emitter) -> Self {
        Self {
            name: name.into(),
            pattern,
            emitter,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn emitter(&self) -> Emitter {
        self.emitter
    }

    /// Rewrite one text piece, appending the result to `out`
    fn rewrite(&self, text: &str, out: &mut Vec<Piece>) -> usize {
        let mut last = 0;
        let mut matches = 0;

        for caps in self.pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.as_str().is_empty() {
                continue;
            }

            push_piece(out, Piece::text(&text[last..whole.start()]));
            match self.emitter {
                Emitter::Class(class) => push_piece(out, Piece::span(class, whole.as_str())),
                Emitter::Custom(emit) => {
                    for piece in emit(&caps) {
                        push_piece(out, piece);
                    }
                }
            }

            last = whole.end();
            matches += 1;
        }

        push_piece(out, Piece::text(&text[last..]));
        matches
    }
}

/// Ordered rules for one language
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    name: String,
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule in order over already escaped text
    pub fn apply(&self, escaped: &str) -> Vec<Piece> {
        let mut pieces = vec![Piece::text(escaped)];

        for rule in &self.rules {
            let mut next = Vec::with_capacity(pieces.len());
            let mut matches = 0;

            for piece in pieces {
                match piece {
                    Piece::Text(text) => matches += rule.rewrite(&text, &mut next),
                    sealed => next.push(sealed),
                }
            }

            tracing::trace!(rule = rule.name(), matches, "applied rule");
            pieces = next;
        }

        pieces
    }
}

/// Append a piece, merging adjacent text and dropping empty text
fn push_piece(out: &mut Vec<Piece>, piece: Piece) {
    match piece {
        Piece::Text(text) if text.is_empty() => {}
        Piece::Text(text) => match out.last_mut() {
            Some(Piece::Text(prev)) => prev.push_str(&text),
            _ => out.push(Piece::Text(text)),
        },
        other => out.push(other),
    }
}

/// Render pieces to markup, prefixing every class name
pub fn render(pieces: &[Piece], class_prefix: &str) -> String {
    let capacity = pieces
        .iter()
        .map(|piece| match piece {
            Piece::Text(text) | Piece::Markup(text) => text.len(),
            Piece::Span { text, .. } => text.len() + class_prefix.len() + 32,
        })
        .sum();
    let mut out = String::with_capacity(capacity);

    for piece in pieces {
        match piece {
            Piece::Text(text) | Piece::Markup(text) => out.push_str(text),
            Piece::Span { class, text } => {
                out.push_str("<span class=\"");
                out.push_str(class_prefix);
                out.push_str(class.as_str());
                out.push_str("\">");
                out.push_str(text);
                out.push_str("</span>");
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits_rule() -> Rule {
        Rule::class("digits", r"\d+", SemanticClass::Number).unwrap()
    }

    #[test]
    fn test_class_rule_wraps_whole_match() {
        let set = RuleSet::new("test").with_rule(digits_rule());
        let pieces = set.apply("a 12 b");

        assert_eq!(
            pieces,
            vec![
                Piece::text("a "),
                Piece::span(SemanticClass::Number, "12"),
                Piece::text(" b"),
            ]
        );
    }

    #[test]
    fn test_later_rules_skip_sealed_spans() {
        let set = RuleSet::new("test")
            .with_rule(Rule::class("quoted", r#""[^"]*""#, SemanticClass::String).unwrap())
            .with_rule(digits_rule());

        let pieces = set.apply(r#""42" 7"#);
        assert_eq!(
            pieces,
            vec![
                Piece::span(SemanticClass::String, "\"42\""),
                Piece::text(" "),
                Piece::span(SemanticClass::Number, "7"),
            ]
        );
    }

    #[test]
    fn test_custom_emitter_text_stays_open() {
        fn split_call(caps: &Captures<'_>) -> Vec<Piece> {
            vec![
                Piece::span(SemanticClass::Function, &caps[1]),
                Piece::text(&caps[2]),
            ]
        }

        let set = RuleSet::new("test")
            .with_rule(Rule::custom("call", r"(\w+)(\()", split_call).unwrap())
            .with_rule(Rule::class("paren", r"[()]", SemanticClass::Bracket).unwrap());

        let pieces = set.apply("run()");
        assert_eq!(
            pieces,
            vec![
                Piece::span(SemanticClass::Function, "run"),
                Piece::span(SemanticClass::Bracket, "("),
                Piece::span(SemanticClass::Bracket, ")"),
            ]
        );
    }

    #[test]
    fn test_zero_width_matches_are_ignored() {
        let set = RuleSet::new("test")
            .with_rule(Rule::class("maybe", r"x*", SemanticClass::Keyword).unwrap());

        let pieces = set.apply("abc");
        assert_eq!(pieces, vec![Piece::text("abc")]);
    }

    #[test]
    fn test_render_with_prefix() {
        let pieces = vec![
            Piece::text("x = "),
            Piece::span(SemanticClass::Number, "1"),
            Piece::Markup("<br>".to_string()),
        ];
        assert_eq!(
            render(&pieces, "sh-"),
            r#"x = <span class="sh-number">1</span><br>"#
        );
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(Rule::class("broken", "(", SemanticClass::Comment).is_err());
    }
}
