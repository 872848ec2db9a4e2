//! Error types for Statusmaker

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatusmakerError>;

#[derive(Error, Debug)]
pub enum StatusmakerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Status error: {0}")]
    Status(#[from] StatusError),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StatusmakerError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            StatusmakerError::InvalidInput(_) => 3,
            StatusmakerError::Status(_) => 3,
            StatusmakerError::Clipboard(_) => 2,
            StatusmakerError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Caller contract violations on the status list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error("Index {index} is out of range for a list of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("A status needs at least one entry")]
    EmptyList,
}

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard is available")]
    Unavailable,

    #[error("Failed to start clipboard command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Clipboard command '{command}' failed: {reason}")]
    CommandFailed { command: String, reason: String },

    #[error("System clipboard failed: {0}")]
    System(String),

    #[error("Clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = StatusmakerError::InvalidInput("No entries".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_status_error() {
        let error = StatusmakerError::Status(StatusError::IndexOutOfRange { index: 4, len: 2 });
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_clipboard_error() {
        let error = StatusmakerError::Clipboard(ClipboardError::Unavailable);
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_config_error() {
        let config_error = ConfigError::MissingField("config directory".to_string());
        let error = StatusmakerError::Config(config_error);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_index() {
        let error: StatusmakerError = StatusError::IndexOutOfRange { index: 3, len: 1 }.into();
        assert_eq!(
            error.to_string(),
            "Status error: Index 3 is out of range for a list of 1 entries"
        );
    }

    #[test]
    fn test_error_message_formatting_command_failed() {
        let error = ClipboardError::CommandFailed {
            command: "xclip".to_string(),
            reason: "exit status: 1".to_string(),
        };
        let message = format!("{}", StatusmakerError::from(error));
        assert_eq!(
            message,
            "Clipboard error: Clipboard command 'xclip' failed: exit status: 1"
        );
    }

    #[test]
    fn test_config_error_read_error_formatting() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let config_error = ConfigError::ReadError(io_error);
        let message = format!("{}", config_error);
        assert!(message.contains("Failed to read config file"));
    }

    #[test]
    fn test_error_conversion_from_config_error() {
        let config_error = ConfigError::MissingField("test".to_string());
        let error: StatusmakerError = config_error.into();

        match error {
            StatusmakerError::Config(_) => {}
            _ => panic!("Expected StatusmakerError::Config"),
        }
    }
}
