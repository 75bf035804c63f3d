use smalto_core::WindowResult;
use smalto_core::pid;

#[path = "daemon_ipc.rs"]
mod daemon_ipc;
#[path = "daemon_loop.rs"]
mod daemon_loop;
#[path = "daemon_loop_handlers.rs"]
mod daemon_loop_handlers;
#[path = "daemon_threads.rs"]
mod daemon_threads;
#[path = "daemon_types.rs"]
mod daemon_types;

/// Runs the Smalto daemon.
///
/// Starts background threads for the Win32 event loop, the IPC
/// listener, and the config file watcher. The main thread owns the
/// rule engine and processes messages until a stop command arrives.
pub fn run() -> WindowResult<()> {
    pid::write_pid_file()?;
    eprintln!("Smalto daemon started.");

    let result = daemon_loop::daemon_loop();

    let _ = pid::remove_pid_file();

    result
}
