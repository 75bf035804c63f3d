/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `smalto init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r#"# Smalto configuration
# Location: ~/.config/smalto/config.toml

# Fallback titlebar mode used when a rule's titlebar color is "system".
# "default" leaves the OS titlebar untouched; "light" and "dark" force
# the corresponding mode.
titlebar_mode = "default"

[logging]
# Enable file logging to ~/.config/smalto/logs/smalto.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"#
    .to_string()
}

/// Generates the default `rules.toml` contents with explanatory comments.
pub fn generate_rules() -> String {
    r##"# Smalto window rules
# Location: ~/.config/smalto/rules.toml
#
# Rules are evaluated in order; the first matching targeted rule wins.
# The [[rule]] entry with no match_* keys is the global rule. It must
# match for any styling to happen at all — remove it to disable
# styling system-wide.
#
# Per rule:
#   match_process = "name.exe"   exact process name (case-insensitive)
#   match_class   = "ClassName"  exact window class (case-insensitive)
#   match_title   = "fragment"   title substring (case-insensitive)
#   backdrop      = "default" | "none" | "mica" | "acrylic" | "tabbed"
#   titlebar      = "system" | "light" | "dark" | "#rrggbb"
#   extend_frame  = true | false

# Global default: Mica everywhere.
[[rule]]
backdrop = "mica"
titlebar = "system"

# Example: acrylic terminal with a dark titlebar.
# [[rule]]
# match_process = "WindowsTerminal.exe"
# backdrop = "acrylic"
# titlebar = "dark"

# Example: tint Notepad's titlebar with an explicit color.
# [[rule]]
# match_process = "notepad.exe"
# extend_frame = true
# titlebar = "#1e1e2e"
"##
    .to_string()
}
