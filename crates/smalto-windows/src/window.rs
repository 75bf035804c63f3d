use smalto_core::WindowResult;

use windows::Win32::Foundation::{CloseHandle, HWND};
use windows::Win32::System::ProcessStatus::K32GetModuleFileNameExW;
use windows::Win32::System::Threading::{OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION};
use windows::Win32::UI::WindowsAndMessaging::{
    GA_ROOT, GW_OWNER, GetAncestor, GetWindow, GetWindowTextLengthW, GetWindowTextW,
    GetWindowThreadProcessId, IsWindowVisible, RealGetWindowClassW,
};

/// A window on the Windows platform, wrapping a Win32 `HWND`.
///
/// `HWND` is an opaque handle — a number that identifies a window to
/// the OS. This struct holds that handle and queries the OS lazily for
/// metadata, so rule matching always sees live window state.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    /// Creates a new `Window` from a raw `HWND`.
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a new `Window` from a raw handle value (pointer-sized integer).
    ///
    /// This allows callers to construct a `Window` without depending on the
    /// `windows` crate directly.
    pub fn from_raw(handle: usize) -> Self {
        Self {
            hwnd: HWND(handle as *mut _),
        }
    }

    /// Returns the raw window handle.
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Returns whether this is a top-level window rather than a child
    /// control. WinEvents report create/show with `OBJID_WINDOW` for
    /// child HWNDs (buttons, edit controls) too, so the event path
    /// filters on this before rule matching.
    pub fn is_top_level(&self) -> bool {
        // SAFETY: GetAncestor walks the parent chain without side
        // effects. A top-level window is its own root.
        unsafe { GetAncestor(self.hwnd, GA_ROOT) == self.hwnd }
    }

    /// Returns a one-line description for diagnostics:
    /// `` `title` (class, process) ``.
    pub fn describe(&self) -> String {
        use smalto_core::Window as _;
        format!(
            "`{}` ({}, {})",
            self.title().unwrap_or_default(),
            self.class().unwrap_or_default(),
            self.process_name().unwrap_or_default()
        )
    }
}

impl smalto_core::Window for Window {
    fn handle(&self) -> usize {
        self.hwnd.0 as usize
    }

    fn title(&self) -> WindowResult<String> {
        // SAFETY: GetWindowTextLengthW and GetWindowTextW are safe to call
        // with a valid HWND. They read window text without modifying state.
        unsafe {
            let length = GetWindowTextLengthW(self.hwnd);
            if length == 0 {
                return Ok(String::new());
            }

            // +1 for the null terminator that Windows requires
            let mut buffer = vec![0u16; (length + 1) as usize];
            let copied = GetWindowTextW(self.hwnd, &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..copied as usize]))
        }
    }

    fn class(&self) -> WindowResult<String> {
        // SAFETY: RealGetWindowClassW reads the window class name.
        // 256 is the maximum class name length in Win32.
        unsafe {
            let mut buffer = [0u16; 256];
            let length = RealGetWindowClassW(self.hwnd, &mut buffer);
            Ok(String::from_utf16_lossy(&buffer[..length as usize]))
        }
    }

    fn process_name(&self) -> WindowResult<String> {
        // SAFETY: GetWindowThreadProcessId writes the owning PID.
        // OpenProcess with PROCESS_QUERY_LIMITED_INFORMATION is the
        // least-privilege right that still allows the module-name query.
        unsafe {
            let mut pid = 0u32;
            GetWindowThreadProcessId(self.hwnd, Some(&mut pid));
            if pid == 0 {
                return Err("window has no owning process".into());
            }

            let process = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid)?;
            let mut buffer = [0u16; 260]; // MAX_PATH
            let length = K32GetModuleFileNameExW(Some(process), None, &mut buffer);
            let _ = CloseHandle(process);

            let path = String::from_utf16_lossy(&buffer[..length as usize]);
            Ok(path
                .rsplit(['\\', '/'])
                .next()
                .unwrap_or_default()
                .to_string())
        }
    }

    fn is_owned(&self) -> bool {
        // SAFETY: GetWindow with GW_OWNER queries the owner chain without
        // side effects. A null/error result means no owner.
        unsafe { GetWindow(self.hwnd, GW_OWNER).is_ok_and(|owner| !owner.is_invalid()) }
    }

    fn is_visible(&self) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(self.hwnd).as_bool() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::UI::WindowsAndMessaging::{CreateWindowExW, DestroyWindow, WS_CHILD};
    use windows::core::w;

    #[test]
    fn child_controls_are_not_top_level() {
        // Arrange — a hidden STATIC window with a STATIC child control,
        // like the child HWNDs that create/show events fire for.
        // SAFETY: both windows stay hidden and are destroyed before the
        // test returns.
        unsafe {
            let parent = CreateWindowExW(
                Default::default(),
                w!("STATIC"),
                w!(""),
                Default::default(),
                0,
                0,
                10,
                10,
                None,
                None,
                None,
                None,
            )
            .expect("failed to create parent window");
            let child = CreateWindowExW(
                Default::default(),
                w!("STATIC"),
                w!(""),
                WS_CHILD,
                0,
                0,
                10,
                10,
                Some(parent),
                None,
                None,
                None,
            )
            .expect("failed to create child window");

            // Act / Assert
            assert!(Window::new(parent).is_top_level());
            assert!(!Window::new(child).is_top_level());

            let _ = DestroyWindow(child);
            let _ = DestroyWindow(parent);
        }
    }
}
