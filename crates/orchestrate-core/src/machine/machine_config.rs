//! Machine configuration model

use super::sink::CredentialSink;
use super::synced_folder::SyncedFolder;
use super::transport::{Communicator, SshConfig, WinRmConfig};
use crate::config::credential::{CredentialRequest, CredentialsConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const REDACTED: &str = "********";

/// Configuration of a single managed machine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub communicator: Communicator,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winrm: Option<WinRmConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh: Option<SshConfig>,

    /// Synced folders keyed by id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub synced_folders: BTreeMap<String, SyncedFolder>,

    /// Credentials to resolve; `None` means no credential handling at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<CredentialsConfig>,
}

impl MachineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the resolver input from the credentials block
    pub fn credential_request(&self) -> Option<CredentialRequest> {
        self.credentials.as_ref().map(CredentialRequest::from)
    }

    /// Present transport configs, in WinRM then SSH order
    pub fn transport_sinks(&mut self) -> Vec<&mut dyn CredentialSink> {
        let mut sinks: Vec<&mut dyn CredentialSink> = Vec::new();
        if let Some(winrm) = self.winrm.as_mut() {
            sinks.push(winrm);
        }
        if let Some(ssh) = self.ssh.as_mut() {
            sinks.push(ssh);
        }
        sinks
    }

    /// Synced folders as sinks
    pub fn folder_sinks(&mut self) -> Vec<&mut dyn CredentialSink> {
        self.synced_folders
            .values_mut()
            .map(|folder| folder as &mut dyn CredentialSink)
            .collect()
    }

    /// Copy with every non-empty password masked, for display
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if let Some(winrm) = copy.winrm.as_mut() {
            mask(&mut winrm.password);
        }
        if let Some(ssh) = copy.ssh.as_mut() {
            mask(&mut ssh.password);
        }
        for folder in copy.synced_folders.values_mut() {
            mask(&mut folder.smb_password);
        }
        if let Some(creds) = copy.credentials.as_mut() {
            mask(&mut creds.password);
        }
        copy
    }
}

fn mask(secret: &mut Option<String>) {
    if secret.as_deref().is_some_and(|s| !s.is_empty()) {
        *secret = Some(REDACTED.to_string());
    }
}
