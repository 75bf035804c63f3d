use windows::Win32::Foundation::CloseHandle;
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION, PROCESS_TERMINATE, TerminateProcess,
};

/// Checks whether a process with the given PID is still alive.
///
/// Uses `OpenProcess` with minimal access rights. If the handle can be
/// opened, the process exists. This is used to detect stale PID files
/// left behind when the daemon is killed without a clean shutdown.
pub fn is_process_alive(pid: u32) -> bool {
    // SAFETY: OpenProcess attempts to open an existing process.
    // PROCESS_QUERY_LIMITED_INFORMATION is the least-privilege access
    // right that still lets us confirm the process exists.
    let result = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) };

    match result {
        Ok(handle) => {
            // SAFETY: We only opened the handle to check existence,
            // so we close it immediately.
            unsafe {
                let _ = CloseHandle(handle);
            }
            true
        }
        Err(_) => false,
    }
}

/// Forcefully terminates the process with the given PID.
///
/// Last resort for a daemon whose pipe is gone but whose process is
/// still alive. A clean shutdown goes through the IPC `Stop` command.
pub fn kill_process(pid: u32) -> Result<(), String> {
    // SAFETY: OpenProcess with PROCESS_TERMINATE requests the right to
    // end the process; TerminateProcess then ends it unconditionally.
    unsafe {
        let handle = OpenProcess(PROCESS_TERMINATE, false, pid)
            .map_err(|e| format!("could not open process {pid}: {e}"))?;
        let result = TerminateProcess(handle, 1).map_err(|e| format!("terminate failed: {e}"));
        let _ = CloseHandle(handle);
        result
    }
}
