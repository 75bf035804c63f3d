use smalto_core::ipc::{Command, ResponseStatus};

pub fn execute() {
    if !smalto_windows::ipc::is_daemon_running() {
        eprintln!("Smalto is not running.");
        std::process::exit(1);
    }

    match smalto_windows::ipc::send_command(&Command::Sweep) {
        Ok(response) if response.status == ResponseStatus::Ok => {
            println!("{}", response.message.unwrap_or_default());
        }
        Ok(response) => {
            eprintln!(
                "Error: {}",
                response.message.unwrap_or("unknown error".into())
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("IPC failed: {e}");
            std::process::exit(1);
        }
    }
}
