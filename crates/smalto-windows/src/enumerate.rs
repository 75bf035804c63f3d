use smalto_core::WindowResult;
use smalto_core::engine::WindowEnumerator;

use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::{EnumWindows, IsWindowVisible};
use windows::core::BOOL;

use crate::window::Window;

/// Enumerates all visible top-level windows.
///
/// This calls the Win32 `EnumWindows` API, which iterates over every
/// top-level window and invokes a callback for each one. Invisible
/// windows are filtered inside the callback; owned windows are left in
/// because the engine excludes them itself during a sweep.
pub fn enumerate_windows() -> WindowResult<Vec<Window>> {
    let mut windows: Vec<Window> = Vec::new();

    // SAFETY: EnumWindows calls our callback for each top-level window.
    // We pass a pointer to our Vec as LPARAM (user data). The callback
    // casts it back to &mut Vec<Window> to collect results. This is safe
    // because EnumWindows runs synchronously — the Vec outlives the call.
    unsafe {
        EnumWindows(
            Some(enum_window_callback),
            LPARAM(&mut windows as *mut _ as isize),
        )?;
    }

    Ok(windows)
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Returns `TRUE` to continue enumeration, `FALSE` to stop. Win32 can't
/// call Rust closures directly, so data travels through the `LPARAM`
/// pointer cast in `enumerate_windows`.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is a pointer to our Vec<Window>, cast from enumerate_windows().
    let windows = unsafe { &mut *(lparam.0 as *mut Vec<Window>) };

    // SAFETY: IsWindowVisible is a simple state query.
    if unsafe { IsWindowVisible(hwnd).as_bool() } {
        windows.push(Window::new(hwnd));
    }

    BOOL(1) // TRUE — continue enumerating
}

/// The live desktop as a window enumerator for the rule engine.
pub struct DesktopWindows;

impl WindowEnumerator for DesktopWindows {
    type Window = Window;

    fn top_level_windows(&self) -> WindowResult<Vec<Window>> {
        enumerate_windows()
    }
}
