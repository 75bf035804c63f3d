use smalto_core::WindowEvent;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{
    EVENT_OBJECT_CREATE, EVENT_OBJECT_NAMECHANGE, EVENT_OBJECT_SHOW,
};

/// Object ID indicating the event applies to the window itself,
/// not a child element like a scrollbar or menu item.
const OBJID_WINDOW: i32 = 0;

/// Translates a raw Win32 event into a platform-agnostic `WindowEvent`.
///
/// Returns `None` for events we don't care about (child object events,
/// or event types that never change a window's styling outcome).
pub fn translate(event: u32, hwnd: HWND, id_object: i32) -> Option<WindowEvent> {
    // Ignore events on child objects (scrollbars, buttons, etc.).
    // Styling only ever targets top-level windows.
    if id_object != OBJID_WINDOW {
        return None;
    }

    let hwnd_val = hwnd.0 as usize;

    match event {
        // SHOW fires for windows that were created hidden and made
        // visible later; both paths need an initial styling pass.
        e if e == EVENT_OBJECT_CREATE || e == EVENT_OBJECT_SHOW => {
            Some(WindowEvent::Created { hwnd: hwnd_val })
        }
        e if e == EVENT_OBJECT_NAMECHANGE => Some(WindowEvent::TitleChanged { hwnd: hwnd_val }),
        _ => None,
    }
}
