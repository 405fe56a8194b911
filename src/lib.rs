//! Spanlight - Regex-Driven Syntax Highlighting for Live Editors
//!
//! Converts raw source text into HTML-safe, span-wrapped markup for a
//! browser editing surface that re-highlights on every keystroke:
//! - Script (`js`), markup (`html`) and style-sheet (`css`) rule sets
//! - Escaping exactly once, before any rule runs
//! - User-defined languages and aliases from a TOML config file
//! - LRU memoization for repeated documents
//! - Line gutter and caret position helpers for the surface
//!
//! # Architecture
//!
//! - **Highlighter**: escape, apply ordered rules, collapse nested spans
//! - **Registry**: language identifiers, aliases and file extensions
//! - **Config**: settings and custom languages loaded from TOML
//! - **Editor**: gutter and cursor data that accompany the markup
//!
//! # Example
//!
//! ```rust
//! use spanlight_core::{highlight, Highlighter};
//!
//! let markup = highlight(r#"<div class="x">"#, "html");
//! assert_eq!(
//!     markup,
//!     r#"&lt;<span class="sh-tag">div</span> <span class="sh-property">class</span>=<span class="sh-string">"x"</span>&gt;"#
//! );
//!
//! // Unknown languages come back escaped, without spans
//! assert_eq!(highlight("a < b", "plain"), "a &lt; b");
//!
//! // A long-lived highlighter caches per document
//! let highlighter = Highlighter::new();
//! let _ = highlighter.highlight("const x = 1;", "js");
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod highlighter;

// Re-export commonly used types
pub use config::{LanguageDefinition, RuleDefinition, SpanlightConfig};
pub use editor::{line_count, line_gutter, CursorPosition, EditorFrame};
pub use error::{Result, SpanlightError};
pub use highlighter::{
    highlight, HighlightSettings, Highlighter, LanguageRegistry, Piece, Rule, RuleSet,
    SemanticClass,
};
