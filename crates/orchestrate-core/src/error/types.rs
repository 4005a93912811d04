//! Core error types and traits

use thiserror::Error;

/// Result type alias for orchestrate operations
pub type OrchestrateResult<T> = Result<T, OrchestrateError>;

/// Unified error trait implemented by every orchestrate error.
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Get the error code for programmatic handling
    fn error_code(&self) -> &str;

    /// Get the human-readable error message
    fn message(&self) -> &str;

    /// Get optional context about the error
    fn context(&self) -> Option<&str> {
        None
    }
}

/// Main error type for orchestrate
#[derive(Error, Debug, Clone)]
pub enum OrchestrateError {
    /// Machine or credentials configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// IO errors that are not part of the normal credential cascade
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
        context: Option<String>,
    },

    /// Document parse errors (JSON, TOML, YAML)
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        format: Option<String>,
        context: Option<String>,
    },

    /// Interactive prompt failures (terminal closed, no TTY, ...)
    #[error("Prompt error: {message}")]
    Prompt {
        message: String,
        context: Option<String>,
    },
}
