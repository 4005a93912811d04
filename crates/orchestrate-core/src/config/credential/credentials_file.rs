//! Credentials file loading
//!
//! The file is a YAML mapping with optional `username` and `password`
//! entries. Hand-written files may use symbol-style keys (`:username:`), so
//! both spellings are accepted and normalised here.

use crate::error::{OrchestrateError, OrchestrateResult};
use serde_yaml::Value;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Canonical contents of a credentials file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialsFile {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Outcome of reading a credentials file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsFileLoad {
    /// No file exists at the path
    Missing,
    /// The file exists but is not a valid YAML mapping
    Malformed(String),
    /// The file was parsed
    Loaded(CredentialsFile),
}

impl CredentialsFile {
    /// Load a credentials file.
    ///
    /// Missing and malformed files are reported through [`CredentialsFileLoad`].
    /// Any other read failure (e.g. permission denied) is returned as an error.
    pub fn load(path: &Path) -> OrchestrateResult<CredentialsFileLoad> {
        // Windows reports directories as PermissionDenied
        if path.is_dir() {
            return Ok(CredentialsFileLoad::Malformed(format!(
                "{} is a directory",
                path.display()
            )));
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return classify(e, path),
        };

        Ok(match Self::parse(&content) {
            Ok(creds) => CredentialsFileLoad::Loaded(creds),
            Err(reason) => CredentialsFileLoad::Malformed(reason),
        })
    }

    /// Parse YAML content into canonical credentials
    pub fn parse(content: &str) -> Result<Self, String> {
        let document: Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        let Value::Mapping(mapping) = document else {
            return Err("document is not a mapping".to_string());
        };

        Ok(Self {
            username: lookup(&mapping, "username"),
            password: lookup(&mapping, "password"),
        })
    }
}

/// Sort a read failure into a cascade outcome or a fatal error
fn classify(err: io::Error, path: &Path) -> OrchestrateResult<CredentialsFileLoad> {
    match err.kind() {
        ErrorKind::NotFound => Ok(CredentialsFileLoad::Missing),
        ErrorKind::InvalidData | ErrorKind::IsADirectory => {
            Ok(CredentialsFileLoad::Malformed(err.to_string()))
        }
        _ => Err(OrchestrateError::io_with_path(
            format!("Failed to read credentials file: {}", err),
            path.display().to_string(),
        )),
    }
}

/// Symbol-style key first, then the plain key
fn lookup(mapping: &serde_yaml::Mapping, key: &str) -> Option<String> {
    [format!(":{}", key), key.to_string()]
        .iter()
        .find_map(|k| mapping.get(k.as_str()).and_then(scalar_to_string))
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
