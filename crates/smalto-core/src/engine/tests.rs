use std::sync::{Arc, Mutex};

use super::*;
use crate::config::RuleStore;

/// A window with fixed metadata.
#[derive(Clone)]
struct MockWindow {
    handle: usize,
    title: String,
    class: String,
    process: String,
    owned: bool,
}

impl MockWindow {
    fn new(handle: usize, process: &str) -> Self {
        Self {
            handle,
            title: format!("window {handle}"),
            class: "MockClass".into(),
            process: process.into(),
            owned: false,
        }
    }

    fn owned(mut self) -> Self {
        self.owned = true;
        self
    }
}

impl Window for MockWindow {
    fn handle(&self) -> usize {
        self.handle
    }
    fn title(&self) -> WindowResult<String> {
        Ok(self.title.clone())
    }
    fn class(&self) -> WindowResult<String> {
        Ok(self.class.clone())
    }
    fn process_name(&self) -> WindowResult<String> {
        Ok(self.process.clone())
    }
    fn is_owned(&self) -> bool {
        self.owned
    }
    fn is_visible(&self) -> bool {
        true
    }
}

/// One recorded applier invocation.
#[derive(Debug, Clone, PartialEq)]
enum StyleCall {
    ExtendFrame(usize),
    Backdrop(usize, Backdrop),
    Titlebar(usize, TitlebarColor, TitlebarMode),
}

/// Records every styling call for later assertions.
#[derive(Clone, Default)]
struct RecordingApplier {
    calls: Arc<Mutex<Vec<StyleCall>>>,
}

impl RecordingApplier {
    fn calls(&self) -> Vec<StyleCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl StyleApplier for RecordingApplier {
    fn extend_frame_into_client_area(&self, handle: usize) {
        self.calls.lock().unwrap().push(StyleCall::ExtendFrame(handle));
    }
    fn apply_backdrop(&self, handle: usize, backdrop: Backdrop) {
        self.calls
            .lock()
            .unwrap()
            .push(StyleCall::Backdrop(handle, backdrop));
    }
    fn apply_titlebar_color(&self, handle: usize, color: TitlebarColor, mode: TitlebarMode) {
        self.calls
            .lock()
            .unwrap()
            .push(StyleCall::Titlebar(handle, color, mode));
    }
}

/// Enumerator returning a fixed window list.
struct FixedWindows(Vec<MockWindow>);

impl WindowEnumerator for FixedWindows {
    type Window = MockWindow;

    fn top_level_windows(&self) -> WindowResult<Vec<MockWindow>> {
        Ok(self.0.clone())
    }
}

fn global(backdrop: Backdrop) -> Rule {
    Rule {
        backdrop,
        ..Default::default()
    }
}

fn targeted(process: &str, backdrop: Backdrop) -> Rule {
    Rule {
        match_process: Some(process.into()),
        backdrop,
        ..Default::default()
    }
}

fn engine(
    rules: Vec<Rule>,
    windows: Vec<MockWindow>,
    applier: RecordingApplier,
) -> RuleEngine<FixedWindows, RecordingApplier> {
    RuleEngine::new(
        Arc::new(RuleStore::from_rules(rules)),
        FixedWindows(windows),
        applier,
    )
}

#[test]
fn no_global_rule_selects_nothing() {
    // Arrange — the targeted rule is applicable, but no global rule exists.
    let rules = vec![targeted("notepad.exe", Backdrop::Acrylic)];
    let window = MockWindow::new(1, "notepad.exe");

    // Act / Assert
    assert!(select_rule(&window, &rules).is_none());
}

#[test]
fn targeted_rule_wins_over_global() {
    // Arrange
    let rules = vec![
        global(Backdrop::Mica),
        targeted("notepad.exe", Backdrop::Acrylic),
    ];
    let window = MockWindow::new(1, "notepad.exe");

    // Act
    let selected = select_rule(&window, &rules).unwrap();

    // Assert
    assert_eq!(selected.backdrop, Backdrop::Acrylic);
}

#[test]
fn global_alone_is_selected() {
    // Arrange
    let rules = vec![global(Backdrop::Mica)];
    let window = MockWindow::new(1, "notepad.exe");

    // Act
    let selected = select_rule(&window, &rules).unwrap();

    // Assert
    assert!(selected.is_global());
    assert_eq!(selected.backdrop, Backdrop::Mica);
}

#[test]
fn first_declared_targeted_rule_breaks_ties() {
    // Arrange — both targeted rules apply to the same window.
    let rules = vec![
        global(Backdrop::Default),
        targeted("notepad.exe", Backdrop::Acrylic),
        targeted("notepad.exe", Backdrop::Tabbed),
    ];
    let window = MockWindow::new(1, "notepad.exe");

    // Act
    let selected = select_rule(&window, &rules).unwrap();

    // Assert
    assert_eq!(selected.backdrop, Backdrop::Acrylic);
}

#[test]
fn unapplicable_targeted_rule_falls_back_to_global() {
    // Arrange
    let rules = vec![
        targeted("explorer.exe", Backdrop::Acrylic),
        global(Backdrop::Mica),
    ];
    let window = MockWindow::new(1, "notepad.exe");

    // Act
    let selected = select_rule(&window, &rules).unwrap();

    // Assert
    assert_eq!(selected.backdrop, Backdrop::Mica);
}

#[test]
fn empty_rule_set_selects_nothing() {
    let window = MockWindow::new(1, "notepad.exe");
    assert!(select_rule(&window, &[]).is_none());
}

#[test]
fn global_mica_scenario_applies_expected_calls() {
    // Arrange
    let rules = vec![Rule {
        extend_frame: true,
        backdrop: Backdrop::Mica,
        ..Default::default()
    }];
    let window = MockWindow::new(7, "notepad.exe");
    let applier = RecordingApplier::default();
    let engine = engine(rules, vec![window.clone()], applier.clone());

    // Act
    let applied = engine.match_and_apply_to_window(&window);

    // Assert
    assert!(applied);
    assert_eq!(
        applier.calls(),
        vec![
            StyleCall::ExtendFrame(7),
            StyleCall::Backdrop(7, Backdrop::Mica),
            StyleCall::Titlebar(7, TitlebarColor::System, TitlebarMode::Default),
        ]
    );
}

#[test]
fn extend_frame_is_skipped_when_not_flagged() {
    // Arrange
    let rules = vec![global(Backdrop::Mica)];
    let window = MockWindow::new(7, "notepad.exe");
    let applier = RecordingApplier::default();
    let engine = engine(rules, vec![window.clone()], applier.clone());

    // Act
    engine.match_and_apply_to_window(&window);

    // Assert
    assert!(
        !applier
            .calls()
            .iter()
            .any(|c| matches!(c, StyleCall::ExtendFrame(_)))
    );
}

#[test]
fn empty_rules_apply_nothing() {
    // Arrange
    let window = MockWindow::new(1, "notepad.exe");
    let applier = RecordingApplier::default();
    let engine = engine(vec![], vec![window.clone()], applier.clone());

    // Act
    let applied = engine.match_and_apply_to_window(&window);

    // Assert
    assert!(!applied);
    assert!(applier.calls().is_empty());
}

#[test]
fn targeted_acrylic_beats_global_mica_in_application() {
    // Arrange
    let rules = vec![
        targeted("processa.exe", Backdrop::Acrylic),
        global(Backdrop::Mica),
    ];
    let window = MockWindow::new(3, "processa.exe");
    let applier = RecordingApplier::default();
    let engine = engine(rules, vec![window.clone()], applier.clone());

    // Act
    engine.match_and_apply_to_window(&window);

    // Assert
    assert!(
        applier
            .calls()
            .contains(&StyleCall::Backdrop(3, Backdrop::Acrylic))
    );
    assert!(
        !applier
            .calls()
            .contains(&StyleCall::Backdrop(3, Backdrop::Mica))
    );
}

#[test]
fn sweep_applies_exactly_once_per_eligible_window() {
    // Arrange — two eligible windows, one owned dialog.
    let windows = vec![
        MockWindow::new(1, "notepad.exe"),
        MockWindow::new(2, "explorer.exe"),
        MockWindow::new(3, "notepad.exe").owned(),
    ];
    let applier = RecordingApplier::default();
    let engine = engine(vec![global(Backdrop::Mica)], windows, applier.clone());

    // Act
    let applied = engine.match_and_apply_to_all();

    // Assert
    assert_eq!(applied, 2);
    let backdrops: Vec<_> = applier
        .calls()
        .into_iter()
        .filter(|c| matches!(c, StyleCall::Backdrop(..)))
        .collect();
    assert_eq!(
        backdrops,
        vec![
            StyleCall::Backdrop(1, Backdrop::Mica),
            StyleCall::Backdrop(2, Backdrop::Mica),
        ]
    );
}

#[test]
fn sweep_without_global_rule_applies_nothing() {
    // Arrange
    let windows = vec![MockWindow::new(1, "notepad.exe")];
    let applier = RecordingApplier::default();
    let engine = engine(
        vec![targeted("notepad.exe", Backdrop::Acrylic)],
        windows,
        applier.clone(),
    );

    // Act
    let applied = engine.match_and_apply_to_all();

    // Assert
    assert_eq!(applied, 0);
    assert!(applier.calls().is_empty());
}

#[test]
fn sweep_with_zero_windows_completes() {
    // Arrange
    let applier = RecordingApplier::default();
    let engine = engine(vec![global(Backdrop::Mica)], vec![], applier.clone());

    // Act
    let applied = engine.match_and_apply_to_all();

    // Assert
    assert_eq!(applied, 0);
    assert!(applier.calls().is_empty());
}

#[test]
fn apply_rule_is_idempotent() {
    // Arrange
    let rule = Rule {
        extend_frame: true,
        backdrop: Backdrop::Mica,
        titlebar: TitlebarColor::Dark,
        ..Default::default()
    };
    let applier = RecordingApplier::default();
    let engine = engine(vec![], vec![], applier.clone());

    // Act
    engine.apply_rule(9, &rule);
    let first = applier.calls();
    engine.apply_rule(9, &rule);
    let both = applier.calls();

    // Assert — the second application repeats the exact same calls.
    assert_eq!(both.len(), first.len() * 2);
    assert_eq!(&both[first.len()..], first.as_slice());
}

#[test]
fn titlebar_mode_is_passed_into_resolution() {
    // Arrange
    let rules = vec![global(Backdrop::Default)];
    let window = MockWindow::new(4, "notepad.exe");
    let applier = RecordingApplier::default();
    let engine = engine(rules, vec![window.clone()], applier.clone());
    engine.set_titlebar_mode(TitlebarMode::Dark);

    // Act
    engine.match_and_apply_to_window(&window);

    // Assert
    assert!(applier.calls().contains(&StyleCall::Titlebar(
        4,
        TitlebarColor::System,
        TitlebarMode::Dark
    )));
}

#[test]
fn evaluation_reads_store_at_call_time() {
    // Arrange — start with no rules, then replace the set.
    let store = Arc::new(RuleStore::from_rules(vec![]));
    let window = MockWindow::new(5, "notepad.exe");
    let applier = RecordingApplier::default();
    let engine = RuleEngine::new(
        store.clone(),
        FixedWindows(vec![window.clone()]),
        applier.clone(),
    );
    assert!(!engine.match_and_apply_to_window(&window));

    // Act
    store.replace(vec![global(Backdrop::Mica)]);

    // Assert — the next evaluation sees the new rules without rebuild.
    assert!(engine.match_and_apply_to_window(&window));
}
