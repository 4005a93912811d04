//! Constructor helpers for OrchestrateError

use super::types::OrchestrateError;

impl OrchestrateError {
    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            context: None,
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
            context: None,
        }
    }

    /// Create a parse error for the given document format
    pub fn parse(message: impl Into<String>, format: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            format: Some(format.into()),
            context: None,
        }
    }

    /// Create a new prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
            context: None,
        }
    }
}
