use smalto_core::ipc::{Command, ResponseStatus};

pub fn execute() {
    // Try graceful shutdown via IPC first.
    if smalto_windows::ipc::is_daemon_running() {
        match smalto_windows::ipc::send_command(&Command::Stop) {
            Ok(response) if response.status == ResponseStatus::Ok => {
                println!("Smalto stopped. {}", response.message.unwrap_or_default());
                let _ = smalto_core::pid::remove_pid_file();
                return;
            }
            Ok(response) => {
                eprintln!(
                    "Error: {}",
                    response.message.unwrap_or("unknown error".into())
                );
                return;
            }
            Err(e) => eprintln!("IPC failed: {e}"),
        }
    }

    // Fallback: the IPC pipe is gone but the process may still be
    // alive (e.g. the IPC thread crashed). Check the PID file.
    match smalto_core::pid::read_pid_file() {
        Ok(Some(pid)) if smalto_windows::process::is_process_alive(pid) => {
            match smalto_windows::process::kill_process(pid) {
                Ok(()) => {
                    let _ = smalto_core::pid::remove_pid_file();
                    println!("Smalto stopped (killed PID {pid}).");
                }
                Err(e) => {
                    eprintln!("Failed to kill process {pid}: {e}");
                    std::process::exit(1);
                }
            }
        }
        _ => {
            println!("Smalto is not running.");
        }
    }
}
