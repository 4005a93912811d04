//! Mutable credentials request threaded through the cascade

use super::credentials_config::CredentialsConfig;
use super::resolved::ResolvedCredentials;
use super::source::CredentialSource;
use std::path::PathBuf;

/// A credential field that is filled at most once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialField {
    value: Option<String>,
    source: CredentialSource,
}

impl CredentialField {
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn new(value: impl Into<String>, source: CredentialSource) -> Self {
        Self {
            value: Some(value.into()),
            source,
        }
    }

    /// Set the value only if nothing has been set yet.
    ///
    /// Returns `true` when the field was filled. An empty string counts as
    /// set; only an absent value is replaced.
    pub fn fill(&mut self, value: impl Into<String>, source: CredentialSource) -> bool {
        if self.value.is_some() {
            return false;
        }
        self.value = Some(value.into());
        self.source = source;
        true
    }

    /// Set the value unconditionally
    pub fn overwrite(&mut self, value: impl Into<String>, source: CredentialSource) {
        self.value = Some(value.into());
        self.source = source;
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn source(&self) -> &CredentialSource {
        &self.source
    }
}

/// Credentials request built from static configuration
#[derive(Debug, Clone, Default)]
pub struct CredentialRequest {
    pub username: CredentialField,
    pub password: CredentialField,
    /// Unexpanded; the resolver expands it against its environment
    pub file_path: Option<PathBuf>,
    pub prompt: bool,
}

impl CredentialRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = CredentialField::new(username, CredentialSource::Config);
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = CredentialField::new(password, CredentialSource::Config);
        self
    }

    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// True when both username and password have a value
    pub fn is_complete(&self) -> bool {
        self.username.is_set() && self.password.is_set()
    }

    /// Finish the request, leaving unset fields as empty strings
    pub fn into_resolved(self) -> ResolvedCredentials {
        ResolvedCredentials::from_fields(self.username, self.password)
    }
}

impl From<&CredentialsConfig> for CredentialRequest {
    fn from(config: &CredentialsConfig) -> Self {
        let field = |value: &Option<String>| match value {
            Some(v) => CredentialField::new(v.clone(), CredentialSource::Config),
            None => CredentialField::unset(),
        };
        Self {
            username: field(&config.username),
            password: field(&config.password),
            file_path: config.file_path.as_ref().map(PathBuf::from),
            prompt: config.prompt,
        }
    }
}
