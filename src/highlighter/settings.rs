//! Configuration and settings for highlighting

use crate::error::{Result, SpanlightError};
use serde::{Deserialize, Serialize};

/// Main highlighting settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightSettings {
    /// Prefix prepended to every semantic class name (`sh-keyword`)
    pub class_prefix: String,

    /// Collapse spans that only wrap another span
    pub collapse_nested_spans: bool,

    /// Memoize markup per (language, text)
    pub enable_cache: bool,

    /// Number of cached documents
    pub cache_capacity: usize,

    /// Inputs above this size are escaped but not highlighted
    pub max_highlight_bytes: usize,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            class_prefix: "sh-".to_string(),
            collapse_nested_spans: true,
            enable_cache: true,
            cache_capacity: 64,
            max_highlight_bytes: 1024 * 1024, // 1MB
        }
    }
}

impl HighlightSettings {
    /// Settings for one-shot highlighting with no cache
    pub fn uncached() -> Self {
        Self {
            enable_cache: false,
            ..Self::default()
        }
    }

    /// Validate settings values
    pub fn validate(&self) -> Result<()> {
        // The prefix lands inside a quoted attribute value
        if !self
            .class_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(SpanlightError::InvalidConfig(format!(
                "class_prefix may only contain ASCII letters, digits, '-' and '_': {:?}",
                self.class_prefix
            )));
        }

        if self.enable_cache && self.cache_capacity == 0 {
            return Err(SpanlightError::InvalidConfig(
                "cache_capacity must be at least 1 when the cache is enabled".to_string(),
            ));
        }

        if self.max_highlight_bytes == 0 {
            return Err(SpanlightError::InvalidConfig(
                "max_highlight_bytes must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
