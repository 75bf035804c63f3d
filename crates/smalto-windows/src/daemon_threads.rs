use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc;
use std::thread;

use crate::config_watcher::SourceChange;

use super::daemon_ipc;
use super::daemon_types::{DaemonMsg, DesktopEngine};

/// Bridges window events into the daemon message channel.
pub(super) fn spawn_event_bridge(
    event_rx: mpsc::Receiver<smalto_core::WindowEvent>,
    tx: mpsc::Sender<DaemonMsg>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for event in event_rx {
            if tx.send(DaemonMsg::Event(event)).is_err() {
                break;
            }
        }
    })
}

/// Spawns the IPC listener thread.
pub(super) fn spawn_ipc_listener(tx: mpsc::Sender<DaemonMsg>) -> thread::JoinHandle<()> {
    thread::spawn(move || daemon_ipc::ipc_loop(tx))
}

/// Spawns the config watcher thread and a bridge into the daemon channel.
pub(super) fn spawn_config_watcher(
    tx: mpsc::Sender<DaemonMsg>,
) -> (
    Arc<AtomicBool>,
    thread::JoinHandle<()>,
    thread::JoinHandle<()>,
) {
    let (change_tx, change_rx) = mpsc::channel::<SourceChange>();
    let watcher_stop = Arc::new(AtomicBool::new(false));
    let watcher_stop_flag = watcher_stop.clone();
    let watcher_thread =
        thread::spawn(move || crate::config_watcher::watch(change_tx, watcher_stop_flag));

    let change_bridge = thread::spawn(move || {
        for change in change_rx {
            if tx.send(DaemonMsg::Source(change)).is_err() {
                break;
            }
        }
    });

    (watcher_stop, watcher_thread, change_bridge)
}

/// Runs a full sweep on a background thread so the daemon loop keeps
/// processing events while many windows get styled. Sweeps are not
/// coalesced; concurrent sweeps issue the same idempotent DWM calls.
pub(super) fn spawn_sweep(engine: Arc<DesktopEngine>) {
    thread::spawn(move || {
        let styled = engine.match_and_apply_to_all();
        smalto_core::log_info!("sweep styled {styled} windows");
    });
}
