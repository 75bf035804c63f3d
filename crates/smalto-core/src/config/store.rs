//! The rule store — owner of the live, ordered rule set.
//!
//! The engine never caches rules; it takes a cheap `Arc` snapshot per
//! window evaluation, so a reload that lands mid-sweep only affects
//! decisions made after it.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use super::{RulesFile, loader};
use crate::rule::Rule;

/// Holds the ordered rule set and its backing file.
pub struct RuleStore {
    path: Option<PathBuf>,
    rules: RwLock<Arc<Vec<Rule>>>,
}

impl RuleStore {
    /// Opens the store backed by `~/.config/smalto/rules.toml`,
    /// loading the current contents (or built-in defaults).
    pub fn open() -> Self {
        Self {
            path: loader::rules_path(),
            rules: RwLock::new(Arc::new(loader::load_rules())),
        }
    }

    /// Creates a store backed by an explicit file path, starting empty.
    /// Call [`RuleStore::reload`] to read the file.
    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            rules: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Creates an unbacked store with a fixed rule set.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self {
            path: None,
            rules: RwLock::new(Arc::new(rules)),
        }
    }

    /// Returns a snapshot of the current rule set.
    pub fn snapshot(&self) -> Arc<Vec<Rule>> {
        self.rules.read().map(|r| r.clone()).unwrap_or_default()
    }

    /// Returns the number of rules currently loaded.
    pub fn rule_count(&self) -> usize {
        self.snapshot().len()
    }

    /// Replaces the rule set programmatically.
    pub fn replace(&self, rules: Vec<Rule>) {
        if let Ok(mut current) = self.rules.write() {
            *current = Arc::new(rules);
        }
    }

    /// Re-reads the backing file and swaps in the parsed rules.
    ///
    /// On failure the previous rule set stays in place — an invalid
    /// edit leaves styling stale rather than broken. Returns the new
    /// rule count on success.
    pub fn reload(&self) -> Result<usize, String> {
        let path = self.path.as_ref().ok_or("rule store has no backing file")?;
        let rules = loader::try_load_rules_from(path)?;
        let count = rules.len();
        self.replace(rules);
        Ok(count)
    }

    /// Serializes the current rule set back to the backing file.
    pub fn save(&self) -> Result<(), String> {
        let path = self.path.as_ref().ok_or("rule store has no backing file")?;
        let file = RulesFile {
            rule: self.snapshot().as_ref().clone(),
        };
        let content =
            toml::to_string_pretty(&file).map_err(|e| format!("serializing rules: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("{}: {e}", path.display()))
    }
}
