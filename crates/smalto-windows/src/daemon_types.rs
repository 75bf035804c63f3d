use std::sync::mpsc;

use smalto_core::RuleEngine;
use smalto_core::ipc::{Command, Response};

use crate::config_watcher::SourceChange;
use crate::enumerate::DesktopWindows;
use crate::styler::DwmStyler;

/// The engine instantiated with the live desktop and DWM.
pub(super) type DesktopEngine = RuleEngine<DesktopWindows, DwmStyler>;

/// Internal message type for the main daemon thread.
pub(super) enum DaemonMsg {
    /// A window event from the event loop.
    Event(smalto_core::WindowEvent),
    /// A CLI command with a callback to send the response.
    Command(Command, ResponseSender),
    /// A changed config source detected by the file watcher.
    Source(SourceChange),
}

/// Sends a response back to the IPC thread for the connected client.
pub(super) type ResponseSender = mpsc::Sender<Response>;
