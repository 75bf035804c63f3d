mod loader;
mod store;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;
use crate::rule::{Backdrop, Rule, TitlebarMode};

pub use loader::{
    config_dir, config_path, load, load_rules, rules_path, try_load, try_load_rules,
    try_load_rules_from,
};
pub use store::RuleStore;

/// Top-level configuration for Smalto.
///
/// Loaded from `~/.config/smalto/config.toml`. Missing keys fall back
/// to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fallback titlebar mode used when a rule's titlebar color
    /// defers to "system".
    pub titlebar_mode: TitlebarMode,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Returns the built-in default rules: a single global Mica rule.
///
/// A fresh install styles everything with Mica; users narrow or
/// disable this by editing `rules.toml`.
pub fn default_rules() -> Vec<Rule> {
    vec![Rule {
        backdrop: Backdrop::Mica,
        ..Default::default()
    }]
}

/// Wrapper for (de)serializing the rules file.
///
/// The file contains a top-level `[[rule]]` array of tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RulesFile {
    #[serde(default = "default_rules")]
    pub(crate) rule: Vec<Rule>,
}

#[cfg(test)]
mod tests;
