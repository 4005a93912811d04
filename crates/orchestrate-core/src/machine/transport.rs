//! Communicator transport configuration
//!
//! Only the fields the credential applier and the CLI care about are modelled;
//! the transports themselves live elsewhere.

use super::sink::CredentialSink;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel used to manage the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Communicator {
    #[default]
    Ssh,
    WinRm,
}

impl Communicator {
    /// WinRM folder sync authenticates with the machine credentials
    pub fn requires_folder_credentials(&self) -> bool {
        matches!(self, Communicator::WinRm)
    }
}

impl fmt::Display for Communicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Communicator::Ssh => write!(f, "ssh"),
            Communicator::WinRm => write!(f, "winrm"),
        }
    }
}

/// WinRM (remote shell) settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinRmConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// `plaintext`, `negotiate`, `ssl`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl CredentialSink for WinRmConfig {
    fn set_credentials(&mut self, username: &str, password: &str) {
        self.username = Some(username.to_string());
        self.password = Some(password.to_string());
    }

    fn sink_name(&self) -> &str {
        "winrm"
    }
}

/// SSH settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl CredentialSink for SshConfig {
    fn set_credentials(&mut self, username: &str, password: &str) {
        self.username = Some(username.to_string());
        self.password = Some(password.to_string());
    }

    fn sink_name(&self) -> &str {
        "ssh"
    }
}
