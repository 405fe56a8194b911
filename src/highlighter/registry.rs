use super::languages;
use super::rules::RuleSet;
use crate::error::{Result, SpanlightError};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Maps language identifiers, aliases and file extensions to rule sets
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    rule_sets: Vec<Arc<RuleSet>>,
    identifiers: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// Registry with the built-in script, markup and style languages
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register(
            languages::script(),
            ["js", "javascript", "jsx", "mjs", "cjs", "ts", "tsx", "typescript"],
        );
        registry.register(languages::markup(), ["html", "htm", "xhtml", "xml", "svg"]);
        registry.register(languages::style(), ["css", "scss", "less"]);

        registry
    }

    /// Registry that knows no language at all
    pub fn empty() -> Self {
        Self {
            rule_sets: Vec::new(),
            identifiers: HashMap::new(),
        }
    }

    /// Register a rule set under one or more identifiers
    ///
    /// Identifiers already taken are rebound to the new rule set.
    pub fn register<I, S>(&mut self, rule_set: Arc<RuleSet>, identifiers: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = self.rule_sets.len();
        debug!(
            "Registering language '{}' with {} rules",
            rule_set.name(),
            rule_set.len()
        );
        self.rule_sets.push(rule_set);

        for identifier in identifiers {
            self.identifiers.insert(normalize(identifier.as_ref()), index);
        }
    }

    /// Make `alias` resolve to whatever `target` resolves to
    pub fn alias(&mut self, alias: &str, target: &str) -> Result<()> {
        let index = *self
            .identifiers
            .get(&normalize(target))
            .ok_or_else(|| SpanlightError::UnknownLanguage(target.to_string()))?;

        self.identifiers.insert(normalize(alias), index);
        Ok(())
    }

    /// Rule set for an identifier, if one is registered
    ///
    /// Lookup ignores surrounding whitespace and ASCII case.
    pub fn resolve(&self, identifier: &str) -> Option<&RuleSet> {
        self.resolve_slot(identifier).map(|(_, rule_set)| rule_set)
    }

    /// Rule set for an identifier together with its registry slot
    ///
    /// Slots are unique per registered rule set even when names repeat.
    pub fn resolve_slot(&self, identifier: &str) -> Option<(usize, &RuleSet)> {
        let index = *self.identifiers.get(&normalize(identifier))?;
        self.rule_sets
            .get(index)
            .map(|rule_set| (index, rule_set.as_ref()))
    }

    /// Name of the rule set an identifier resolves to
    pub fn canonical(&self, identifier: &str) -> Option<&str> {
        self.resolve(identifier).map(RuleSet::name)
    }

    /// Every registered identifier, sorted
    pub fn identifiers(&self) -> Vec<&str> {
        let sorted: BTreeSet<&str> = self.identifiers.keys().map(String::as_str).collect();
        sorted.into_iter().collect()
    }

    /// Language identifier for a file, taken from its extension
    pub fn language_for_path(&self, path: &Path) -> Option<&str> {
        let extension = path.extension()?.to_str()?;
        self.canonical(extension)
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(identifier: &str) -> String {
    identifier.trim().to_ascii_lowercase()
}
