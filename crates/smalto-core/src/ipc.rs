use serde::{Deserialize, Serialize};

/// The named pipe path used for IPC between CLI and daemon.
pub const PIPE_NAME: &str = r"\\.\pipe\smalto";

/// A command sent from the CLI to the daemon.
///
/// These are serialized as JSON and sent over the named pipe.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    /// Request the daemon to stop.
    Stop,
    /// Request the daemon's current status.
    Status,
    /// Re-apply rules to all top-level windows now.
    Sweep,
    /// Reload the rule set from disk (followed by a sweep).
    Reload,
}

/// A response sent from the daemon back to the CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    /// Whether the command succeeded.
    pub status: ResponseStatus,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Status of a daemon response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

impl Response {
    /// Creates a successful response with no message.
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: None,
        }
    }

    /// Creates a successful response with a message.
    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: Some(message.into()),
        }
    }

    /// Creates an error response with a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_roundtrips_through_json() {
        // Arrange
        let json = serde_json::to_string(&Command::Sweep).unwrap();

        // Act
        let parsed: Command = serde_json::from_str(&json).unwrap();

        // Assert
        assert!(matches!(parsed, Command::Sweep));
        assert!(json.contains("Sweep"));
    }

    #[test]
    fn error_response_keeps_its_message() {
        let response = Response::error("rules.toml: parse error");

        let json = serde_json::to_string(&response).unwrap();
        let parsed: Response = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.status, ResponseStatus::Error);
        assert_eq!(parsed.message.as_deref(), Some("rules.toml: parse error"));
    }
}
