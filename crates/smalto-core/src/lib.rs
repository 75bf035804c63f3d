pub mod config;
pub mod engine;
pub mod event;
pub mod ipc;
pub mod log;
pub mod pid;
pub mod rule;
pub mod window;

pub use engine::{RuleEngine, StyleApplier, WindowEnumerator, select_rule};
pub use event::WindowEvent;
pub use ipc::{Command, PIPE_NAME, Response};
pub use rule::{Backdrop, Color, Rule, TitlebarColor, TitlebarMode};
pub use window::{Window, WindowResult};
