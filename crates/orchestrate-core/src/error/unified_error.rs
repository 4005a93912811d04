//! UnifiedError trait implementation for OrchestrateError

use super::types::{OrchestrateError, UnifiedError};

impl UnifiedError for OrchestrateError {
    fn error_code(&self) -> &str {
        match self {
            Self::Config { .. } => "ORCHESTRATE_CONFIG",
            Self::Io { .. } => "ORCHESTRATE_IO",
            Self::Parse { .. } => "ORCHESTRATE_PARSE",
            Self::Prompt { .. } => "ORCHESTRATE_PROMPT",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Config { message, .. }
            | Self::Io { message, .. }
            | Self::Parse { message, .. }
            | Self::Prompt { message, .. } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. }
            | Self::Io { context, .. }
            | Self::Parse { context, .. }
            | Self::Prompt { context, .. } => context.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(OrchestrateError::config_with_context("x", "y").error_code(), "ORCHESTRATE_CONFIG");
        assert_eq!(OrchestrateError::io("x").error_code(), "ORCHESTRATE_IO");
        assert_eq!(
            OrchestrateError::parse("x", "yaml").error_code(),
            "ORCHESTRATE_PARSE"
        );
        assert_eq!(OrchestrateError::prompt("x").error_code(), "ORCHESTRATE_PROMPT");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: OrchestrateError = io.into();
        assert_eq!(err.error_code(), "ORCHESTRATE_IO");
        assert!(err.message().contains("denied"));
    }
}
