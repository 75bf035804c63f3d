//! Rule matching and application engine.
//!
//! Given the current rule set and a window, [`select_rule`] decides the
//! single rule that governs that window. [`RuleEngine`] drives the
//! side-effecting style application through a platform
//! [`StyleApplier`], either for one window or as a sweep over every
//! top-level window produced by a [`WindowEnumerator`].

use std::sync::{Arc, RwLock};

use crate::config::RuleStore;
use crate::rule::{Backdrop, Rule, TitlebarColor, TitlebarMode};
use crate::window::{Window, WindowResult};

#[cfg(test)]
mod tests;

/// Platform-specific styling calls.
///
/// All calls are fire-and-forget: they must be idempotent, tolerate
/// stale handles (the window may close mid-sweep), and absorb platform
/// failures without surfacing them. The engine never retries.
pub trait StyleApplier {
    /// Extends the window frame into the client area.
    fn extend_frame_into_client_area(&self, handle: usize);

    /// Applies a backdrop material. `Backdrop::Default` and
    /// `Backdrop::None` are valid values that revert prior styling.
    fn apply_backdrop(&self, handle: usize, backdrop: Backdrop);

    /// Applies a titlebar color, resolving `TitlebarColor::System`
    /// against the given mode.
    fn apply_titlebar_color(&self, handle: usize, color: TitlebarColor, mode: TitlebarMode);
}

/// Produces the current set of top-level windows for a sweep.
pub trait WindowEnumerator {
    type Window: Window;

    /// Returns the currently open top-level windows.
    fn top_level_windows(&self) -> WindowResult<Vec<Self::Window>>;
}

/// Selects the rule governing `window`, or `None` if styling must not
/// be applied.
///
/// Every rule is evaluated — no short-circuiting — because the global
/// rule acts as a gate: if no applicable rule is global, nothing is
/// applied regardless of other matches. Otherwise the first applicable
/// targeted rule in declaration order wins, falling back to the global
/// rule itself. Removing the global rule therefore disables styling
/// system-wide, by design.
pub fn select_rule<'a, W: Window + ?Sized>(window: &W, rules: &'a [Rule]) -> Option<&'a Rule> {
    let applicable: Vec<&Rule> = rules.iter().filter(|r| r.is_applicable(window)).collect();

    if !applicable.iter().any(|r| r.is_global()) {
        return None;
    }

    applicable
        .iter()
        .find(|r| !r.is_global())
        .or_else(|| applicable.first())
        .copied()
}

/// The rule matching and application engine.
///
/// Holds no rule cache of its own: every evaluation reads a fresh
/// snapshot from the [`RuleStore`], so a reload that completes
/// mid-sweep only affects subsequent per-window decisions.
pub struct RuleEngine<E, A> {
    store: Arc<RuleStore>,
    enumerator: E,
    applier: A,
    titlebar_mode: RwLock<TitlebarMode>,
}

impl<E, A> RuleEngine<E, A>
where
    E: WindowEnumerator,
    A: StyleApplier,
{
    pub fn new(store: Arc<RuleStore>, enumerator: E, applier: A) -> Self {
        Self {
            store,
            enumerator,
            applier,
            titlebar_mode: RwLock::new(TitlebarMode::Default),
        }
    }

    /// Returns the rule store this engine evaluates against.
    pub fn store(&self) -> &Arc<RuleStore> {
        &self.store
    }

    /// Returns the current system titlebar fallback mode.
    pub fn titlebar_mode(&self) -> TitlebarMode {
        self.titlebar_mode.read().map(|m| *m).unwrap_or_default()
    }

    /// Sets the system titlebar fallback mode used when a rule's
    /// titlebar color is `system`.
    pub fn set_titlebar_mode(&self, mode: TitlebarMode) {
        if let Ok(mut current) = self.titlebar_mode.write() {
            *current = mode;
        }
    }

    /// Matches `window` against the current rule set and applies the
    /// selected rule, if any. Returns whether a rule was applied.
    pub fn match_and_apply_to_window(&self, window: &E::Window) -> bool {
        let rules = self.store.snapshot();
        let Some(rule) = select_rule(window, &rules) else {
            return false;
        };

        crate::log_debug!(
            "applying rule `{rule}` to 0x{:X} `{}` ({}, {})",
            window.handle(),
            window.title().unwrap_or_default(),
            window.class().unwrap_or_default(),
            window.process_name().unwrap_or_default()
        );

        self.apply_rule(window.handle(), rule);
        true
    }

    /// Sweeps every eligible top-level window. Returns the number of
    /// windows that received a rule.
    ///
    /// Owned windows (dialogs, tool windows) are skipped. Enumeration
    /// failure sweeps zero windows; the caller's context never fails.
    pub fn match_and_apply_to_all(&self) -> usize {
        let windows = match self.enumerator.top_level_windows() {
            Ok(windows) => windows,
            Err(e) => {
                crate::log_warn!("window enumeration failed: {e}");
                return 0;
            }
        };

        let mut applied = 0;
        for window in &windows {
            if window.is_owned() {
                continue;
            }
            if self.match_and_apply_to_window(window) {
                applied += 1;
            }
        }
        applied
    }

    /// Applies a rule's styling directive to a window handle.
    ///
    /// Idempotent: repeated application of the same handle/rule pair
    /// issues the same applier calls with no accumulation.
    pub fn apply_rule(&self, handle: usize, rule: &Rule) {
        if rule.extend_frame {
            self.applier.extend_frame_into_client_area(handle);
        }
        self.applier.apply_backdrop(handle, rule.backdrop);
        self.applier
            .apply_titlebar_color(handle, rule.titlebar, self.titlebar_mode());
    }
}
