//! Window styling rules.
//!
//! A rule pairs a matching condition with a styling directive. Rules
//! are declared in `rules.toml` and evaluated in declaration order.
//! A rule with no matchers is the *global* rule — the catch-all that
//! must be applicable before any styling happens at all (see
//! [`crate::engine::select_rule`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::window::Window;

/// A rule that decides which chrome treatment a window receives.
///
/// All present matchers must hold for the rule to apply (AND). A rule
/// with no matchers applies to every window and acts as the global
/// default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Match windows whose process executable has this name
    /// (case-insensitive, no path), e.g. "notepad.exe".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_process: Option<String>,
    /// Match windows with this exact class name (case-insensitive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_class: Option<String>,
    /// Match windows whose title contains this string (case-insensitive).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_title: Option<String>,
    /// Whether to extend the window frame into the client area.
    #[serde(default)]
    pub extend_frame: bool,
    /// Backdrop material to request for matching windows.
    #[serde(default)]
    pub backdrop: Backdrop,
    /// Titlebar color: "system", "light", "dark", or "#rrggbb".
    #[serde(default)]
    pub titlebar: TitlebarColor,
}

impl Rule {
    /// Returns whether this is the global (catch-all) rule.
    pub fn is_global(&self) -> bool {
        self.match_process.is_none() && self.match_class.is_none() && self.match_title.is_none()
    }

    /// Evaluates this rule's matchers against live window state.
    ///
    /// The global rule is applicable to every window. Failed OS queries
    /// read as empty strings, so a matcher on a dead window simply
    /// doesn't hold.
    pub fn is_applicable<W: Window + ?Sized>(&self, window: &W) -> bool {
        if let Some(ref process) = self.match_process {
            let name = window.process_name().unwrap_or_default();
            if !name.eq_ignore_ascii_case(process) {
                return false;
            }
        }
        if let Some(ref class) = self.match_class {
            let name = window.class().unwrap_or_default();
            if !name.eq_ignore_ascii_case(class) {
                return false;
            }
        }
        if let Some(ref fragment) = self.match_title {
            let title = window.title().unwrap_or_default();
            if !title
                .to_ascii_lowercase()
                .contains(&fragment.to_ascii_lowercase())
            {
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_global() {
            write!(f, "global")?;
        } else {
            let mut sep = "";
            if let Some(ref p) = self.match_process {
                write!(f, "process={p}")?;
                sep = " ";
            }
            if let Some(ref c) = self.match_class {
                write!(f, "{sep}class={c}")?;
                sep = " ";
            }
            if let Some(ref t) = self.match_title {
                write!(f, "{sep}title~{t}")?;
            }
        }
        write!(f, " -> {}", self.backdrop.as_str())?;
        if self.extend_frame {
            write!(f, " +frame")?;
        }
        write!(f, " titlebar={}", self.titlebar)
    }
}

/// Compositor backdrop materials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backdrop {
    /// Let the compositor decide (reverts any explicit choice).
    #[default]
    Default,
    /// Explicitly disable any backdrop material.
    None,
    /// Mica — the desktop wallpaper tinted material.
    Mica,
    /// Acrylic — translucent blur of whatever is behind the window.
    Acrylic,
    /// The tabbed/mica-alt variant used by tabbed title bars.
    Tabbed,
}

impl Backdrop {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::None => "none",
            Self::Mica => "mica",
            Self::Acrylic => "acrylic",
            Self::Tabbed => "tabbed",
        }
    }
}

/// The fallback titlebar mode applied when a rule defers to "system".
///
/// Owned by the engine instance and passed explicitly into every
/// titlebar resolution call — never read from ambient global state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitlebarMode {
    /// Leave the OS default titlebar color in place.
    #[default]
    Default,
    Light,
    Dark,
}

impl fmt::Display for TitlebarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Default => "default",
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// A rule's titlebar color specification.
///
/// Serialized as a plain string: `system`, `light`, `dark`, or a hex
/// color like `#1e1e2e`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitlebarColor {
    /// Defer to the engine's [`TitlebarMode`].
    #[default]
    System,
    Light,
    Dark,
    /// An explicit caption color.
    Custom(Color),
}

impl FromStr for TitlebarColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Color::from_hex(other)
                .map(Self::Custom)
                .ok_or_else(|| format!("invalid titlebar color: {s:?}")),
        }
    }
}

impl fmt::Display for TitlebarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
            Self::Custom(c) => write!(f, "{c}"),
        }
    }
}

impl Serialize for TitlebarColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TitlebarColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// RGB color parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parses a hex color string like "#1e1e2e" or "1e1e2e".
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        // The length check counts bytes, so multi-byte characters must
        // be rejected before slicing into fixed byte ranges.
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        Some(Self {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowResult;

    struct FakeWindow {
        title: &'static str,
        class: &'static str,
        process: &'static str,
    }

    impl Window for FakeWindow {
        fn handle(&self) -> usize {
            1
        }
        fn title(&self) -> WindowResult<String> {
            Ok(self.title.into())
        }
        fn class(&self) -> WindowResult<String> {
            Ok(self.class.into())
        }
        fn process_name(&self) -> WindowResult<String> {
            Ok(self.process.into())
        }
        fn is_owned(&self) -> bool {
            false
        }
        fn is_visible(&self) -> bool {
            true
        }
    }

    const NOTEPAD: FakeWindow = FakeWindow {
        title: "Untitled - Notepad",
        class: "Notepad",
        process: "notepad.exe",
    };

    #[test]
    fn rule_without_matchers_is_global_and_matches_everything() {
        // Arrange
        let rule = Rule::default();

        // Act / Assert
        assert!(rule.is_global());
        assert!(rule.is_applicable(&NOTEPAD));
    }

    #[test]
    fn process_matcher_is_case_insensitive() {
        // Arrange
        let rule = Rule {
            match_process: Some("NOTEPAD.EXE".into()),
            ..Default::default()
        };

        // Act / Assert
        assert!(!rule.is_global());
        assert!(rule.is_applicable(&NOTEPAD));
    }

    #[test]
    fn title_matcher_is_substring() {
        // Arrange
        let rule = Rule {
            match_title: Some("notepad".into()),
            ..Default::default()
        };

        // Act / Assert
        assert!(rule.is_applicable(&NOTEPAD));
    }

    #[test]
    fn all_present_matchers_must_hold() {
        // Arrange — process matches, class does not
        let rule = Rule {
            match_process: Some("notepad.exe".into()),
            match_class: Some("Chrome_WidgetWin_1".into()),
            ..Default::default()
        };

        // Act / Assert
        assert!(!rule.is_applicable(&NOTEPAD));
    }

    #[test]
    fn rule_parses_from_toml_with_defaults() {
        // Arrange
        let toml_str = "match_process = \"notepad.exe\"\nbackdrop = \"acrylic\"\n";

        // Act
        let rule: Rule = toml::from_str(toml_str).unwrap();

        // Assert
        assert_eq!(rule.backdrop, Backdrop::Acrylic);
        assert_eq!(rule.titlebar, TitlebarColor::System);
        assert!(!rule.extend_frame);
    }

    #[test]
    fn titlebar_color_parses_all_string_forms() {
        assert_eq!("system".parse(), Ok(TitlebarColor::System));
        assert_eq!("Dark".parse(), Ok(TitlebarColor::Dark));
        assert_eq!(
            "#1e1e2e".parse(),
            Ok(TitlebarColor::Custom(Color {
                r: 0x1e,
                g: 0x1e,
                b: 0x2e
            }))
        );
        assert!("#xyz".parse::<TitlebarColor>().is_err());
    }

    #[test]
    fn multibyte_hex_color_is_rejected() {
        // Arrange — "aébcd" is six bytes but not six ASCII digits, so
        // it must fail cleanly instead of slicing mid-character.
        assert_eq!(Color::from_hex("aébcd"), None);
        assert_eq!(Color::from_hex("#aébcd"), None);
        assert!("#aébcd".parse::<TitlebarColor>().is_err());

        // Act — the same value arriving through a rules file is a
        // parse error, which reload paths turn into "keep previous".
        let result = toml::from_str::<Rule>("titlebar = \"aébcd\"\n");

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn titlebar_color_roundtrips_through_toml() {
        // Arrange
        let rule = Rule {
            titlebar: "#89b4fa".parse().unwrap(),
            ..Default::default()
        };

        // Act
        let serialized = toml::to_string(&rule).unwrap();
        let deserialized: Rule = toml::from_str(&serialized).unwrap();

        // Assert
        assert_eq!(deserialized.titlebar, rule.titlebar);
    }
}
