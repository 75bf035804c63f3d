use smalto_core::ipc::Command;

pub fn execute() {
    if smalto_windows::ipc::is_daemon_running() {
        // Ask the daemon for details: rule count and titlebar mode.
        match smalto_windows::ipc::send_command(&Command::Status) {
            Ok(response) => {
                println!("{}", response.message.unwrap_or("Smalto is running.".into()));
            }
            Err(_) => println!("Smalto is running."),
        }
        return;
    }

    // Pipe isn't responding — check if a stale PID file was left behind
    // by a daemon that was killed without a clean shutdown.
    if let Ok(Some(pid)) = smalto_core::pid::read_pid_file() {
        if smalto_windows::process::is_process_alive(pid) {
            println!("Smalto process exists (PID: {pid}) but is not responding.");
        } else {
            let _ = smalto_core::pid::remove_pid_file();
            println!("Smalto is not running (cleaned up stale PID file).");
        }
    } else {
        println!("Smalto is not running.");
    }
}
