/// A boxed error type for window operations.
///
/// Any error type that implements the `Error` trait can be boxed into
/// this. Platform crates return it from fallible OS queries.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Platform-agnostic window trait.
///
/// Each platform crate (e.g. `smalto-windows`) provides its own
/// implementation. Rules match against the live state exposed here,
/// so every accessor queries the OS at call time.
pub trait Window {
    /// Returns the opaque window handle as a pointer-sized integer.
    fn handle(&self) -> usize;

    /// Returns the window title.
    fn title(&self) -> WindowResult<String>;

    /// Returns the window class name.
    fn class(&self) -> WindowResult<String>;

    /// Returns the executable name of the owning process (no path),
    /// e.g. `notepad.exe`.
    fn process_name(&self) -> WindowResult<String>;

    /// Returns whether this window is owned by another window
    /// (e.g. a dialog or tool window). Owned windows are excluded
    /// from direct rule matching.
    fn is_owned(&self) -> bool;

    /// Returns whether the window is currently visible.
    fn is_visible(&self) -> bool;
}
