//! Watches the config directory for changes to the source files.
//!
//! Uses `FindFirstChangeNotificationW` to monitor the config directory
//! for writes and renames, then checks mtimes to identify which file
//! actually changed. Only change notifications leave this module; the
//! daemon decides how to reload (the rule store keeps its previous set
//! when a reload fails, so an invalid edit never breaks styling).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::time::SystemTime;

use windows::Win32::Foundation::WAIT_OBJECT_0;
use windows::Win32::Storage::FileSystem::{
    FILE_NOTIFY_CHANGE_FILE_NAME, FILE_NOTIFY_CHANGE_LAST_WRITE, FindCloseChangeNotification,
    FindFirstChangeNotificationW, FindNextChangeNotification,
};
use windows::Win32::System::Threading::WaitForSingleObject;
use windows::core::HSTRING;

use smalto_core::config;

/// Timeout between stop-flag checks when no changes occur (ms).
const WAIT_TIMEOUT_MS: u32 = 5000;

/// Which on-disk source changed.
pub enum SourceChange {
    /// `config.toml` — daemon settings (titlebar mode, logging).
    Settings,
    /// `rules.toml` — the ordered rule set.
    Rules,
}

/// Runs the config watcher loop. Blocks until the stop flag is set
/// or the sender is dropped.
pub fn watch(tx: Sender<SourceChange>, stop: Arc<AtomicBool>) {
    let Some(dir) = config::config_dir() else {
        smalto_core::log_info!("config dir not found, watcher exiting");
        return;
    };

    let config_path = config::config_path();
    let rules_path = config::rules_path();

    let mut config_mtime = mtime(config_path.as_deref());
    let mut rules_mtime = mtime(rules_path.as_deref());

    let dir_str = HSTRING::from(dir.as_os_str());
    let flags = FILE_NOTIFY_CHANGE_LAST_WRITE | FILE_NOTIFY_CHANGE_FILE_NAME;

    // SAFETY: FindFirstChangeNotificationW opens a change notification
    // handle for the directory; we close it below.
    let handle = unsafe { FindFirstChangeNotificationW(&dir_str, false, flags) };
    let Ok(handle) = handle else {
        smalto_core::log_info!("FindFirstChangeNotificationW failed, watcher exiting");
        return;
    };

    while !stop.load(Ordering::Relaxed) {
        // SAFETY: WaitForSingleObject blocks on the notification handle
        // with a timeout so the stop flag gets re-checked periodically.
        let result = unsafe { WaitForSingleObject(handle, WAIT_TIMEOUT_MS) };
        if stop.load(Ordering::Relaxed) {
            break;
        }
        if result != WAIT_OBJECT_0 {
            continue; // timeout or error — loop back to check stop flag
        }

        if check_changes(&config_path, &mut config_mtime, &rules_path, &mut rules_mtime, &tx) {
            break; // sender dropped
        }

        // SAFETY: re-arms the notification for the next change.
        let _ = unsafe { FindNextChangeNotification(handle) };
    }

    // SAFETY: handle came from FindFirstChangeNotificationW above.
    let _ = unsafe { FindCloseChangeNotification(handle) };
}

/// Compares mtimes and reports which files changed.
/// Returns `true` if the sender has been dropped (caller should exit).
fn check_changes(
    config_path: &Option<std::path::PathBuf>,
    config_mtime: &mut Option<SystemTime>,
    rules_path: &Option<std::path::PathBuf>,
    rules_mtime: &mut Option<SystemTime>,
    tx: &Sender<SourceChange>,
) -> bool {
    if let Some(path) = config_path {
        let new = mtime(Some(path.as_path()));
        if new != *config_mtime {
            *config_mtime = new;
            smalto_core::log_info!("config.toml changed");
            if tx.send(SourceChange::Settings).is_err() {
                return true;
            }
        }
    }

    if let Some(path) = rules_path {
        let new = mtime(Some(path.as_path()));
        if new != *rules_mtime {
            *rules_mtime = new;
            smalto_core::log_info!("rules.toml changed");
            if tx.send(SourceChange::Rules).is_err() {
                return true;
            }
        }
    }

    false
}

/// Returns the modification time for a path, or `None` if unavailable.
fn mtime(path: Option<&std::path::Path>) -> Option<SystemTime> {
    path.and_then(|p| p.metadata().ok())
        .and_then(|m| m.modified().ok())
}
