/// A platform-agnostic window event.
///
/// These are the window state changes the styling daemon reacts to.
/// Platform crates translate raw OS notifications into these variants.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowEvent {
    /// A new top-level window was created or made visible.
    Created { hwnd: usize },

    /// A window's title changed. Title-matched rules may now apply
    /// differently, so the window is re-matched.
    TitleChanged { hwnd: usize },
}

impl WindowEvent {
    /// Returns the window handle associated with this event.
    pub fn hwnd(&self) -> usize {
        match self {
            Self::Created { hwnd } | Self::TitleChanged { hwnd } => *hwnd,
        }
    }
}
