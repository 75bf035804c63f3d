use smalto_core::ipc::{Command, ResponseStatus};

pub fn execute() {
    if !smalto_windows::ipc::is_daemon_running() {
        eprintln!("Smalto is not running.");
        std::process::exit(1);
    }

    match smalto_windows::ipc::send_command(&Command::Reload) {
        Ok(response) if response.status == ResponseStatus::Ok => {
            println!("{}", response.message.unwrap_or_default());
        }
        Ok(response) => {
            // The daemon keeps its previous rules when the file is invalid.
            eprintln!(
                "Error: {}",
                response.message.unwrap_or("unknown error".into())
            );
            eprintln!("The previous rule set is still active.");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("IPC failed: {e}");
            std::process::exit(1);
        }
    }
}
