//! Regex-driven syntax highlighting to HTML markup
//!
//! Turns raw source text into HTML-safe markup where recognized lexical
//! spans are wrapped in `<span class="...">` elements.
//!
//! ## Pipeline
//!
//! ```text
//! text ──escape──▶ &lt;escaped&gt; ──rule 1..n──▶ pieces ──render──▶ markup ──collapse──▶ output
//! ```
//!
//! 1. `&`, `<` and `>` are escaped exactly once, before any rule runs.
//! 2. The language's rules run in order as global find-and-replace passes.
//!    Each pass only searches text the earlier passes left unwrapped.
//! 3. Spans whose whole content is a single other span are collapsed.
//!
//! Unknown languages get the escaped text back with no spans at all.
//!
//! ## Usage
//!
//! ```rust
//! use spanlight_core::highlight;
//!
//! let markup = highlight("const s = \"<b>\";", "js");
//! assert!(markup.starts_with(r#"<span class="sh-keyword">const</span>"#));
//! assert!(markup.contains("&lt;b&gt;"));
//! ```

pub mod cache;
pub mod class;
pub mod cleanup;
pub mod escape;
pub mod languages;
pub mod registry;
pub mod rules;
pub mod settings;

// Re-exports
pub use cache::{CacheStats, MarkupCache};
pub use class::SemanticClass;
pub use cleanup::collapse_nested_spans;
pub use escape::{escape_html, strip_markup, to_plain_text, unescape_html};
pub use registry::LanguageRegistry;
pub use rules::{EmitFn, Emitter, Piece, Rule, RuleSet};
pub use settings::HighlightSettings;

use crate::error::Result;
use once_cell::sync::Lazy;
use std::num::NonZeroUsize;
use tracing::{debug, trace};

static DEFAULT_HIGHLIGHTER: Lazy<Highlighter> = Lazy::new(|| {
    Highlighter::from_parts(HighlightSettings::uncached(), LanguageRegistry::new())
});

/// Highlight `text` as `language` with the built-in rules and default settings
///
/// Same inputs always give the same output. Unknown languages return the
/// escaped text with no spans, and empty input returns an empty string.
pub fn highlight(text: &str, language: &str) -> String {
    DEFAULT_HIGHLIGHTER.highlight(text, language)
}

/// Highlighter with its own languages, settings and cache
pub struct Highlighter {
    /// Configuration settings
    settings: HighlightSettings,

    /// Language identifier to rule set mapping
    registry: LanguageRegistry,

    /// Markup cache, if enabled
    cache: Option<MarkupCache>,
}

impl Highlighter {
    /// Highlighter with built-in languages and default settings
    pub fn new() -> Self {
        Self::from_parts(HighlightSettings::default(), LanguageRegistry::new())
    }

    /// Highlighter with built-in languages and custom settings
    ///
    /// Fails with `InvalidConfig` when the settings do not validate.
    pub fn with_settings(settings: HighlightSettings) -> Result<Self> {
        Self::with_registry(settings, LanguageRegistry::new())
    }

    /// Highlighter with custom languages and settings
    ///
    /// Fails with `InvalidConfig` when the settings do not validate.
    pub fn with_registry(
        settings: HighlightSettings,
        registry: LanguageRegistry,
    ) -> Result<Self> {
        settings.validate()?;
        Ok(Self::from_parts(settings, registry))
    }

    /// Assemble from settings already known to be valid
    fn from_parts(settings: HighlightSettings, registry: LanguageRegistry) -> Self {
        let cache = if settings.enable_cache {
            NonZeroUsize::new(settings.cache_capacity).map(MarkupCache::new)
        } else {
            None
        };

        debug!(
            "Highlighter ready ({} identifiers, cache: {})",
            registry.identifiers().len(),
            cache.is_some()
        );

        Self {
            settings,
            registry,
            cache,
        }
    }

    pub fn settings(&self) -> &HighlightSettings {
        &self.settings
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Highlight `text` as `language`
    ///
    /// Never fails: the worst outcome on odd input is imprecise coloring.
    /// Stripping the tags from the result and unescaping it gives back
    /// `text` exactly.
    pub fn highlight(&self, text: &str, language: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let (slot, rule_set) = match self.registry.resolve_slot(language) {
            Some((slot, rule_set)) if !rule_set.is_empty() => (slot, rule_set),
            _ => {
                trace!(language, "no rules for language, escaping only");
                return escape_html(text);
            }
        };

        if text.len() > self.settings.max_highlight_bytes {
            debug!(
                "Input of {} bytes exceeds max_highlight_bytes ({}), escaping only",
                text.len(),
                self.settings.max_highlight_bytes
            );
            return escape_html(text);
        }

        if let Some(markup) = self
            .cache
            .as_ref()
            .and_then(|cache| cache.get(slot, text))
        {
            trace!(language = rule_set.name(), "cache hit");
            return markup;
        }

        trace!(language = rule_set.name(), bytes = text.len(), "highlighting");
        let markup = self.render(rule_set, text);

        if let Some(cache) = &self.cache {
            cache.insert(slot, text, &markup);
        }

        markup
    }

    /// Whether `language` has rules in this highlighter
    pub fn supports(&self, language: &str) -> bool {
        self.registry
            .resolve(language)
            .map_or(false, |rule_set| !rule_set.is_empty())
    }

    /// Get cache statistics, if the cache is enabled
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(MarkupCache::stats)
    }

    /// Drop every cached document
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    fn render(&self, rule_set: &RuleSet, text: &str) -> String {
        let escaped = escape_html(text);
        let pieces = rule_set.apply(&escaped);
        let markup = rules::render(&pieces, &self.settings.class_prefix);

        if self.settings.collapse_nested_spans {
            collapse_nested_spans(&markup)
        } else {
            markup
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}
