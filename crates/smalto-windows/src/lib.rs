/// Autostart registration via the HKCU Run registry key.
pub mod autostart;

/// Config file change watcher.
pub mod config_watcher;

/// Daemon main loop.
pub mod daemon;

/// Win32 window enumeration.
pub mod enumerate;

/// WinEvent translation into platform-agnostic events.
pub mod event;

/// WinEvent hook thread and message pump.
pub mod event_loop;

/// IPC via Named Pipes.
pub mod ipc;

/// Process utilities (alive check, kill).
pub mod process;

/// DWM styling calls behind the core `StyleApplier` trait.
pub mod styler;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

pub use enumerate::{DesktopWindows, enumerate_windows};
pub use styler::DwmStyler;
pub use window::Window;
