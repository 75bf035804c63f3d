use std::sync::Arc;
use std::sync::mpsc;

use smalto_core::WindowResult;
use smalto_core::config::{self, RuleStore};
use smalto_core::ipc::Command;

use crate::enumerate::DesktopWindows;
use crate::event_loop;
use crate::styler::DwmStyler;

use super::daemon_loop_handlers;
use super::daemon_threads;
use super::daemon_types::{DaemonMsg, DesktopEngine};

/// The inner daemon loop, separated so cleanup always runs in `run()`.
pub(super) fn daemon_loop() -> WindowResult<()> {
    let config = config::load();
    smalto_core::log::init(&config.logging);

    smalto_core::log_info!("Daemon started (PID: {})", std::process::id());
    smalto_core::log_info!(
        "Config: titlebar_mode={}, log_level={}",
        config.titlebar_mode,
        config.logging.level
    );

    let store = Arc::new(RuleStore::open());
    let engine: Arc<DesktopEngine> =
        Arc::new(DesktopEngine::new(store, DesktopWindows, DwmStyler));
    engine.set_titlebar_mode(config.titlebar_mode);
    smalto_core::log_info!("Loaded {} rules", engine.store().rule_count());

    let (tx, rx) = mpsc::channel::<DaemonMsg>();

    // Style everything that is already open before events start flowing.
    let styled = engine.match_and_apply_to_all();
    smalto_core::log_info!("Startup sweep styled {styled} windows");

    // Start the Win32 event loop on its own thread.
    let (event_channel_tx, event_channel_rx) = mpsc::channel();
    let event_loop = event_loop::start(event_channel_tx)?;

    // Bridge: forward window events into the unified channel.
    let event_bridge = daemon_threads::spawn_event_bridge(event_channel_rx, tx.clone());

    // Start the IPC listener on its own thread.
    let ipc_thread = daemon_threads::spawn_ipc_listener(tx.clone());

    // Start the config file watcher on its own thread.
    let (watcher_stop, watcher_thread, change_bridge) =
        daemon_threads::spawn_config_watcher(tx.clone());

    // Main processing loop — blocks until a message arrives.
    while let Ok(msg) = rx.recv() {
        match msg {
            DaemonMsg::Event(event) => {
                daemon_loop_handlers::handle_event(event, &engine);
            }
            DaemonMsg::Command(command, reply_tx) => {
                let response = daemon_loop_handlers::handle_command(&command, &engine);
                let _ = reply_tx.send(response);
                if matches!(command, Command::Stop) {
                    break;
                }
            }
            DaemonMsg::Source(change) => {
                daemon_loop_handlers::handle_source_change(change, &engine);
            }
        }
    }

    event_loop.stop();
    watcher_stop.store(true, std::sync::atomic::Ordering::Relaxed);
    drop(tx);
    let _ = event_bridge.join();
    let _ = watcher_thread.join();
    let _ = change_bridge.join();
    // The IPC loop returns after replying to the Stop command, which is
    // the only way this point is reached.
    let _ = ipc_thread.join();

    Ok(())
}
