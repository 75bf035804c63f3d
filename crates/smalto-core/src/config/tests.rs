use super::*;
use crate::rule::TitlebarColor;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();

    assert_eq!(config.titlebar_mode, TitlebarMode::Default);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn partial_toml_uses_defaults_for_missing_sections() {
    // Arrange
    let toml_str = "titlebar_mode = \"dark\"\n";

    // Act
    let config: Config = toml::from_str(toml_str).unwrap();

    // Assert
    assert_eq!(config.titlebar_mode, TitlebarMode::Dark);
    assert_eq!(config.logging.max_file_mb, 10);
}

#[test]
fn empty_rules_file_falls_back_to_default_rules() {
    // Arrange — a file without a [[rule]] array.
    let file: RulesFile = toml::from_str("").unwrap();

    // Assert
    assert_eq!(file.rule, default_rules());
}

#[test]
fn default_rules_are_a_single_global_mica_rule() {
    let rules = default_rules();

    assert_eq!(rules.len(), 1);
    assert!(rules[0].is_global());
    assert_eq!(rules[0].backdrop, Backdrop::Mica);
}

#[test]
fn rules_file_parses_ordered_rule_tables() {
    // Arrange
    let toml_str = r#"
[[rule]]
match_process = "WindowsTerminal.exe"
backdrop = "acrylic"
titlebar = "dark"

[[rule]]
backdrop = "mica"
"#;

    // Act
    let file: RulesFile = toml::from_str(toml_str).unwrap();

    // Assert — order preserved, second rule is the global one.
    assert_eq!(file.rule.len(), 2);
    assert_eq!(file.rule[0].backdrop, Backdrop::Acrylic);
    assert_eq!(file.rule[0].titlebar, TitlebarColor::Dark);
    assert!(!file.rule[0].is_global());
    assert!(file.rule[1].is_global());
}

#[test]
fn store_snapshot_reflects_replace() {
    // Arrange
    let store = RuleStore::from_rules(vec![]);
    assert_eq!(store.rule_count(), 0);

    // Act
    store.replace(default_rules());

    // Assert
    assert_eq!(store.rule_count(), 1);
    assert!(store.snapshot()[0].is_global());
}

#[test]
fn store_reload_requires_a_backing_file() {
    let store = RuleStore::from_rules(default_rules());

    assert!(store.reload().is_err());
    // The rule set is untouched by the failed reload.
    assert_eq!(store.rule_count(), 1);
}

#[test]
fn store_save_and_reload_roundtrip() {
    // Arrange
    let path = std::env::temp_dir().join(format!("smalto-roundtrip-{}.toml", std::process::id()));
    let store = RuleStore::at_path(path.clone());
    store.replace(vec![
        Rule {
            match_process: Some("notepad.exe".into()),
            backdrop: Backdrop::Acrylic,
            titlebar: "#89b4fa".parse().unwrap(),
            ..Default::default()
        },
        Rule {
            backdrop: Backdrop::Mica,
            ..Default::default()
        },
    ]);

    // Act
    store.save().unwrap();
    let fresh = RuleStore::at_path(path.clone());
    let count = fresh.reload().unwrap();

    // Assert
    assert_eq!(count, 2);
    assert_eq!(fresh.snapshot().as_ref(), store.snapshot().as_ref());

    let _ = std::fs::remove_file(path);
}

#[test]
fn invalid_reload_keeps_previous_rules() {
    // Arrange — a store with live rules and a garbage backing file.
    let path = std::env::temp_dir().join(format!("smalto-invalid-{}.toml", std::process::id()));
    std::fs::write(&path, "[[rule]]\nbackdrop = \"granite\"\n").unwrap();
    let store = RuleStore::at_path(path.clone());
    store.replace(default_rules());

    // Act
    let result = store.reload();

    // Assert — reload fails, rule set stays stale rather than broken.
    assert!(result.is_err());
    assert_eq!(store.snapshot().as_ref(), &default_rules());

    let _ = std::fs::remove_file(path);
}

#[test]
fn config_template_parses() {
    let config: Config = toml::from_str(&template::generate_config()).unwrap();

    assert_eq!(config.titlebar_mode, TitlebarMode::Default);
    assert!(!config.logging.enabled);
}

#[test]
fn rules_template_parses_with_one_global_rule() {
    let file: RulesFile = toml::from_str(&template::generate_rules()).unwrap();

    assert_eq!(file.rule.len(), 1);
    assert!(file.rule[0].is_global());
    assert_eq!(file.rule[0].backdrop, Backdrop::Mica);
}
