//! DWM styling calls behind the core `StyleApplier` trait.
//!
//! Every call is fire-and-forget: DWM rejects handles it doesn't like
//! (destroyed windows, other sessions) and we log at debug level and
//! move on. Repeating a call with the same value is a no-op for DWM,
//! which gives the applier its idempotence.

use std::mem;

use smalto_core::engine::StyleApplier;
use smalto_core::rule::{Backdrop, Color, TitlebarColor, TitlebarMode};

use windows::Win32::Foundation::{COLORREF, HWND};
use windows::Win32::Graphics::Dwm::{
    DWM_SYSTEMBACKDROP_TYPE, DWMSBT_AUTO, DWMSBT_MAINWINDOW, DWMSBT_NONE, DWMSBT_TABBEDWINDOW,
    DWMSBT_TRANSIENTWINDOW, DWMWA_CAPTION_COLOR, DWMWA_SYSTEMBACKDROP_TYPE,
    DWMWA_USE_IMMERSIVE_DARK_MODE, DWMWINDOWATTRIBUTE, DwmExtendFrameIntoClientArea,
    DwmSetWindowAttribute,
};
use windows::Win32::UI::Controls::MARGINS;
use windows::core::BOOL;

/// Sentinel that restores the default caption color
/// (`DWMWA_COLOR_DEFAULT` in dwmapi.h).
const COLOR_DEFAULT: COLORREF = COLORREF(0xFFFF_FFFF);

/// Applies chrome styling through the Desktop Window Manager.
pub struct DwmStyler;

impl StyleApplier for DwmStyler {
    fn extend_frame_into_client_area(&self, handle: usize) {
        // -1 margins mean "sheet of glass": the frame covers the whole
        // client area, which lets the backdrop show through it.
        let margins = MARGINS {
            cxLeftWidth: -1,
            cxRightWidth: -1,
            cyTopHeight: -1,
            cyBottomHeight: -1,
        };

        // SAFETY: DwmExtendFrameIntoClientArea reads the MARGINS struct.
        let result = unsafe { DwmExtendFrameIntoClientArea(hwnd(handle), &margins) };
        if let Err(e) = result {
            smalto_core::log_debug!("extend frame failed for 0x{handle:X}: {e}");
        }
    }

    fn apply_backdrop(&self, handle: usize, backdrop: Backdrop) {
        let kind: DWM_SYSTEMBACKDROP_TYPE = match backdrop {
            Backdrop::Default => DWMSBT_AUTO,
            Backdrop::None => DWMSBT_NONE,
            Backdrop::Mica => DWMSBT_MAINWINDOW,
            Backdrop::Acrylic => DWMSBT_TRANSIENTWINDOW,
            Backdrop::Tabbed => DWMSBT_TABBEDWINDOW,
        };
        set_attribute(handle, DWMWA_SYSTEMBACKDROP_TYPE, &kind);
    }

    fn apply_titlebar_color(&self, handle: usize, color: TitlebarColor, mode: TitlebarMode) {
        match resolve_titlebar(color, mode) {
            TitlebarStyle::Reset => set_attribute(handle, DWMWA_CAPTION_COLOR, &COLOR_DEFAULT),
            TitlebarStyle::Light => {
                set_attribute(handle, DWMWA_USE_IMMERSIVE_DARK_MODE, &BOOL(0));
            }
            TitlebarStyle::Dark => {
                set_attribute(handle, DWMWA_USE_IMMERSIVE_DARK_MODE, &BOOL(1));
            }
            TitlebarStyle::Custom(c) => {
                set_attribute(handle, DWMWA_CAPTION_COLOR, &colorref(c));
            }
        }
    }
}

/// The concrete titlebar treatment after resolving "system" against
/// the engine's fallback mode.
#[derive(Debug, PartialEq)]
enum TitlebarStyle {
    /// Restore the OS default caption color.
    Reset,
    Light,
    Dark,
    Custom(Color),
}

fn resolve_titlebar(color: TitlebarColor, mode: TitlebarMode) -> TitlebarStyle {
    match color {
        TitlebarColor::System => match mode {
            TitlebarMode::Default => TitlebarStyle::Reset,
            TitlebarMode::Light => TitlebarStyle::Light,
            TitlebarMode::Dark => TitlebarStyle::Dark,
        },
        TitlebarColor::Light => TitlebarStyle::Light,
        TitlebarColor::Dark => TitlebarStyle::Dark,
        TitlebarColor::Custom(c) => TitlebarStyle::Custom(c),
    }
}

/// `COLORREF` is laid out as `0x00BBGGRR`.
fn colorref(c: Color) -> COLORREF {
    COLORREF((c.r as u32) | ((c.g as u32) << 8) | ((c.b as u32) << 16))
}

fn hwnd(handle: usize) -> HWND {
    HWND(handle as *mut _)
}

/// Sets one DWM window attribute, logging failures at debug level.
fn set_attribute<T>(handle: usize, attribute: DWMWINDOWATTRIBUTE, value: &T) {
    // SAFETY: DwmSetWindowAttribute reads size_of::<T>() bytes from the
    // value pointer. T is always a plain 4-byte DWM attribute value here.
    let result = unsafe {
        DwmSetWindowAttribute(
            hwnd(handle),
            attribute,
            (value as *const T).cast(),
            mem::size_of::<T>() as u32,
        )
    };
    if let Err(e) = result {
        smalto_core::log_debug!("DwmSetWindowAttribute failed for 0x{handle:X}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_color_resolves_against_mode() {
        assert_eq!(
            resolve_titlebar(TitlebarColor::System, TitlebarMode::Default),
            TitlebarStyle::Reset
        );
        assert_eq!(
            resolve_titlebar(TitlebarColor::System, TitlebarMode::Dark),
            TitlebarStyle::Dark
        );
    }

    #[test]
    fn explicit_colors_ignore_the_mode() {
        assert_eq!(
            resolve_titlebar(TitlebarColor::Light, TitlebarMode::Dark),
            TitlebarStyle::Light
        );
        let custom: TitlebarColor = "#112233".parse().unwrap();
        assert!(matches!(
            resolve_titlebar(custom, TitlebarMode::Dark),
            TitlebarStyle::Custom(_)
        ));
    }

    #[test]
    fn colorref_is_bgr_encoded() {
        let c = Color {
            r: 0x11,
            g: 0x22,
            b: 0x33,
        };
        assert_eq!(colorref(c).0, 0x0033_2211);
    }
}
