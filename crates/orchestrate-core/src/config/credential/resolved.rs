//! Resolved username/password pair with source tracking

use super::request::CredentialField;
use super::source::CredentialSource;
use std::fmt;

/// Final result of the credential cascade
///
/// Either field may be empty when no source supplied a value. Consumers decide
/// whether an empty credential is acceptable for their transport.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedCredentials {
    username: String,
    password: String,
    username_source: CredentialSource,
    password_source: CredentialSource,
}

impl ResolvedCredentials {
    /// Create a pair with explicit values and unknown provenance
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            username_source: CredentialSource::Config,
            password_source: CredentialSource::Config,
        }
    }

    pub(crate) fn from_fields(username: CredentialField, password: CredentialField) -> Self {
        let (username, username_source) = finish(username);
        let (password, password_source) = finish(password);
        Self {
            username,
            password,
            username_source,
            password_source,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Use sparingly and never log the result.
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn username_source(&self) -> &CredentialSource {
        &self.username_source
    }

    pub fn password_source(&self) -> &CredentialSource {
        &self.password_source
    }

    /// True when both fields are non-empty
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn into_pair(self) -> (String, String) {
        (self.username, self.password)
    }
}

fn finish(field: CredentialField) -> (String, CredentialSource) {
    match field.value() {
        Some(value) => (value.to_string(), field.source().clone()),
        None => (String::new(), CredentialSource::Unresolved),
    }
}

impl fmt::Debug for ResolvedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCredentials")
            .field("username", &self.username)
            .field("password", &format_args!("*** {} bytes ***", self.password.len()))
            .field("username_source", &self.username_source)
            .field("password_source", &self.password_source)
            .finish()
    }
}
