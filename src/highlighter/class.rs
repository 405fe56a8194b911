//! Semantic classes attached to highlighted spans

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexical category of a highlighted span
///
/// Purely presentational: the class name ends up in the `class` attribute
/// of the emitted `<span>`, prefixed by [`HighlightSettings::class_prefix`].
///
/// [`HighlightSettings::class_prefix`]: super::HighlightSettings::class_prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticClass {
    Comment,
    String,
    Keyword,
    Number,
    Type,
    Function,
    Bracket,
    Operator,
    Tag,
    Property,
}

impl SemanticClass {
    pub const ALL: [SemanticClass; 10] = [
        SemanticClass::Comment,
        SemanticClass::String,
        SemanticClass::Keyword,
        SemanticClass::Number,
        SemanticClass::Type,
        SemanticClass::Function,
        SemanticClass::Bracket,
        SemanticClass::Operator,
        SemanticClass::Tag,
        SemanticClass::Property,
    ];

    /// Class name without prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticClass::Comment => "comment",
            SemanticClass::String => "string",
            SemanticClass::Keyword => "keyword",
            SemanticClass::Number => "number",
            SemanticClass::Type => "type",
            SemanticClass::Function => "function",
            SemanticClass::Bracket => "bracket",
            SemanticClass::Operator => "operator",
            SemanticClass::Tag => "tag",
            SemanticClass::Property => "property",
        }
    }
}

impl fmt::Display for SemanticClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
