//! Static credentials configuration
//!
//! This is the `credentials` block of a machine configuration, as written by
//! the user before any resolution happens.

use serde::{Deserialize, Serialize};

/// Credentials block of a machine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Username given directly in configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Password given directly in configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Path to a YAML credentials file (`~` and `$VARS` are expanded when resolving)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// Whether the user may be prompted for missing fields
    #[serde(default = "default_prompt")]
    pub prompt: bool,
}

fn default_prompt() -> bool {
    true
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            username: None,
            password: None,
            file_path: None,
            prompt: default_prompt(),
        }
    }
}

impl CredentialsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }
}
