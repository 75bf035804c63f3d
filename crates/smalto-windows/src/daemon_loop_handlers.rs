use std::sync::Arc;

use smalto_core::Window as _;
use smalto_core::WindowEvent;
use smalto_core::config;
use smalto_core::ipc::{Command, Response};

use crate::config_watcher::SourceChange;
use crate::window::Window;

use super::daemon_threads;
use super::daemon_types::DesktopEngine;

/// Re-matches a single window after a relevant state change.
///
/// A title change can flip a title-matched rule on or off, so both
/// event kinds take the same path: select and apply. Child controls,
/// owned windows, and invisible windows are never styled.
pub(super) fn handle_event(event: WindowEvent, engine: &Arc<DesktopEngine>) {
    let window = Window::from_raw(event.hwnd());
    if !window.is_top_level() || !window.is_visible() || window.is_owned() {
        return;
    }
    engine.match_and_apply_to_window(&window);
}

pub(super) fn handle_command(command: &Command, engine: &Arc<DesktopEngine>) -> Response {
    match command {
        Command::Stop => {
            smalto_core::log_info!("Stop command received, shutting down");
            Response::ok_with_message("Daemon stopping")
        }
        Command::Status => {
            let msg = format!(
                "Daemon is running, {} rules loaded, titlebar mode {}",
                engine.store().rule_count(),
                engine.titlebar_mode()
            );
            Response::ok_with_message(msg)
        }
        Command::Sweep => {
            daemon_threads::spawn_sweep(engine.clone());
            Response::ok_with_message("Sweep started")
        }
        Command::Reload => match engine.store().reload() {
            Ok(count) => {
                smalto_core::log_info!("Reload command: {count} rules loaded");
                daemon_threads::spawn_sweep(engine.clone());
                Response::ok_with_message(format!("Reloaded {count} rules"))
            }
            Err(e) => {
                smalto_core::log_warn!("Reload command failed, keeping previous rules: {e}");
                Response::error(e)
            }
        },
    }
}

/// Applies a config source change and re-sweeps the desktop.
///
/// Invalid files leave the previous state in place: the rule store
/// keeps its last good set, and settings keep their current values.
pub(super) fn handle_source_change(change: SourceChange, engine: &Arc<DesktopEngine>) {
    match change {
        SourceChange::Settings => match config::try_load() {
            Ok(cfg) => {
                engine.set_titlebar_mode(cfg.titlebar_mode);
                smalto_core::log_info!("Settings reloaded, titlebar_mode={}", cfg.titlebar_mode);
                daemon_threads::spawn_sweep(engine.clone());
            }
            Err(e) => {
                smalto_core::log_warn!("config.toml invalid, keeping current settings: {e}");
            }
        },
        SourceChange::Rules => match engine.store().reload() {
            Ok(count) => {
                smalto_core::log_info!("Rules reloaded, {count} rules");
                daemon_threads::spawn_sweep(engine.clone());
            }
            Err(e) => {
                smalto_core::log_warn!("rules.toml reload failed, keeping previous rules: {e}");
            }
        },
    }
}
