//! Configuration file for Spanlight
//!
//! A TOML file with three optional parts:
//!
//! ```toml
//! [highlight]
//! class_prefix = "sh-"
//! cache_capacity = 128
//!
//! [aliases]
//! vue = "html"
//!
//! [[languages]]
//! id = "ini"
//! aliases = ["cfg"]
//! rules = [
//!     { name = "comment", pattern = ";[^\\n]*", class = "comment" },
//!     { name = "section", pattern = "\\[[^\\]]+\\]", class = "tag" },
//! ]
//! ```
//!
//! User languages are registered after the built-ins, so they can also
//! replace one of them by reusing its identifier.

use crate::error::{Result, SpanlightError};
use crate::highlighter::{
    HighlightSettings, Highlighter, LanguageRegistry, Rule, RuleSet, SemanticClass,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpanlightConfig {
    /// Highlighter settings
    pub highlight: HighlightSettings,

    /// Extra identifiers mapped onto registered languages
    pub aliases: BTreeMap<String, String>,

    /// User-defined languages
    pub languages: Vec<LanguageDefinition>,
}

/// A language defined in the configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageDefinition {
    /// Canonical identifier
    pub id: String,

    /// Additional identifiers and file extensions
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Rules in application order
    pub rules: Vec<RuleDefinition>,
}

/// One whole-match rule of a user-defined language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinition {
    /// Rule name, used in logs
    pub name: String,

    /// Regular expression, matched against HTML-escaped text
    pub pattern: String,

    /// Class wrapped around every match
    pub class: SemanticClass,
}

impl SpanlightConfig {
    /// Default config file location (`<config dir>/spanlight/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "spanlight", "spanlight")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the config file from its default location
    ///
    /// Falls back to defaults when there is no file.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: SpanlightConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.highlight.validate()?;

        for language in &self.languages {
            if language.id.trim().is_empty() {
                return Err(SpanlightError::InvalidConfig(
                    "language id cannot be empty".to_string(),
                ));
            }

            if language.rules.is_empty() {
                return Err(SpanlightError::InvalidConfig(format!(
                    "{}: language needs at least one rule",
                    language.id
                )));
            }
        }

        Ok(())
    }

    /// Save configuration to TOML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    /// Built-in languages plus the configured ones and aliases
    ///
    /// Fails when a rule pattern does not compile or an alias points at an
    /// unknown language.
    pub fn build_registry(&self) -> Result<LanguageRegistry> {
        let mut registry = LanguageRegistry::new();

        for language in &self.languages {
            let rule_set = language.compile()?;
            let identifiers = std::iter::once(language.id.as_str())
                .chain(language.aliases.iter().map(String::as_str));
            registry.register(Arc::new(rule_set), identifiers);
        }

        for (alias, target) in &self.aliases {
            registry.alias(alias, target)?;
        }

        Ok(registry)
    }

    /// Highlighter built from this configuration
    pub fn build_highlighter(&self) -> Result<Highlighter> {
        Highlighter::with_registry(self.highlight.clone(), self.build_registry()?)
    }
}

impl LanguageDefinition {
    /// Compile every rule of this language
    pub fn compile(&self) -> Result<RuleSet> {
        let mut rule_set = RuleSet::new(self.id.trim().to_ascii_lowercase());

        for rule in &self.rules {
            rule_set.push(Rule::class(&rule.name, &rule.pattern, rule.class)?);
        }

        Ok(rule_set)
    }
}
