use std::path::{Path, PathBuf};

use super::{Config, RulesFile, default_rules};
use crate::rule::Rule;

/// Returns the config directory: `~/.config/smalto/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("smalto"))
}

/// Returns the config file path: `~/.config/smalto/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Returns the rules file path: `~/.config/smalto/rules.toml`.
pub fn rules_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("rules.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))
}

/// Loads the configuration from disk, falling back to defaults.
///
/// Non-existent files silently return defaults; other IO or parse
/// errors are logged.
pub fn load() -> Config {
    load_or_default(try_load, Config::default)
}

/// Tries to load and parse `rules.toml`.
///
/// Returns the parsed rules or an error string. A parse error never
/// yields a partial rule set, so callers can keep a previous set when
/// an edit is invalid.
pub fn try_load_rules() -> Result<Vec<Rule>, String> {
    let path = rules_path().ok_or("could not determine rules path")?;
    try_load_rules_from(&path)
}

/// Tries to load and parse a rules file at an explicit path.
pub fn try_load_rules_from(path: &Path) -> Result<Vec<Rule>, String> {
    let content = std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let file: RulesFile =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(file.rule)
}

/// Loads window rules from `~/.config/smalto/rules.toml`.
///
/// Falls back to the built-in defaults if the file is missing or invalid.
pub fn load_rules() -> Vec<Rule> {
    load_or_default(try_load_rules, default_rules)
}

/// Loads a config value from disk, falling back to defaults.
///
/// Non-existent files silently return defaults; other errors are logged.
fn load_or_default<T>(try_load: impl FnOnce() -> Result<T, String>, default: impl Fn() -> T) -> T {
    match try_load() {
        Ok(val) => val,
        Err(e) if is_file_not_found(&e) => default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            default()
        }
    }
}

/// Returns true if the error message indicates a missing file.
fn is_file_not_found(e: &str) -> bool {
    e.contains("cannot find the path")
        || e.contains("The system cannot find")
        || e.contains("No such file")
}
