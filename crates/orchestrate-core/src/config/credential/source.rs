//! Credential source tracking
//!
//! Records which phase of the cascade supplied each field so the CLI and logs
//! can explain where a username or password came from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Priority of a credential source (lower number = higher priority)
///
/// The order is fixed:
/// 1. Environment variable overrides
/// 2. Static configuration (the machine's credentials block)
/// 3. Credentials file
/// 4. Interactive prompt
/// 5. Unresolved (left blank)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CredentialPriority {
    Environment = 1,
    Config = 2,
    File = 3,
    Prompt = 4,
    Unresolved = 5,
}

impl CredentialPriority {
    /// Get the human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            CredentialPriority::Environment => "Environment variable",
            CredentialPriority::Config => "Configuration",
            CredentialPriority::File => "Credentials file",
            CredentialPriority::Prompt => "Prompt",
            CredentialPriority::Unresolved => "Unresolved",
        }
    }
}

impl fmt::Display for CredentialPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Where a credential field came from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    /// From an environment variable override
    Environment { var_name: String },
    /// From the static credentials configuration
    Config,
    /// From a credentials file
    File { path: PathBuf },
    /// Entered interactively
    Prompt,
    /// No source supplied a value
    #[default]
    Unresolved,
}

impl CredentialSource {
    pub fn env(var_name: impl Into<String>) -> Self {
        CredentialSource::Environment {
            var_name: var_name.into(),
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        CredentialSource::File { path: path.into() }
    }

    /// Get the priority of this source
    pub fn priority(&self) -> CredentialPriority {
        match self {
            CredentialSource::Environment { .. } => CredentialPriority::Environment,
            CredentialSource::Config => CredentialPriority::Config,
            CredentialSource::File { .. } => CredentialPriority::File,
            CredentialSource::Prompt => CredentialPriority::Prompt,
            CredentialSource::Unresolved => CredentialPriority::Unresolved,
        }
    }

    /// Get a description of where this credential came from
    pub fn description(&self) -> String {
        match self {
            CredentialSource::Environment { var_name } => format!("Environment: ${}", var_name),
            CredentialSource::Config => "Configuration".to_string(),
            CredentialSource::File { path } => format!("File: {}", path.display()),
            CredentialSource::Prompt => "Prompt".to_string(),
            CredentialSource::Unresolved => "Unresolved".to_string(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, CredentialSource::Unresolved)
    }
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(CredentialPriority::Environment < CredentialPriority::Config);
        assert!(CredentialPriority::Config < CredentialPriority::File);
        assert!(CredentialPriority::File < CredentialPriority::Prompt);
        assert!(CredentialPriority::Prompt < CredentialPriority::Unresolved);
    }

    #[test]
    fn test_source_description() {
        let source = CredentialSource::env("VAGRANT_ORCHESTRATE_USERNAME");
        assert_eq!(source.description(), "Environment: $VAGRANT_ORCHESTRATE_USERNAME");
        assert_eq!(source.priority(), CredentialPriority::Environment);

        let source = CredentialSource::file("/tmp/creds.yml");
        assert_eq!(source.to_string(), "File: /tmp/creds.yml");
    }

    #[test]
    fn test_source_serialization() {
        let json = serde_json::to_string(&CredentialSource::env("X")).unwrap();
        assert_eq!(json, r#"{"type":"environment","var_name":"X"}"#);
    }

    #[test]
    fn test_default_is_unresolved() {
        assert!(!CredentialSource::default().is_resolved());
        assert!(CredentialSource::Prompt.is_resolved());
    }
}
