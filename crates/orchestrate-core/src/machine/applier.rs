//! Credential applier
//!
//! Copies a resolved username/password pair into every downstream
//! configuration target. Targets are overwritten unconditionally.

use super::machine_config::MachineConfig;
use super::sink::CredentialSink;
use tracing::debug;

/// Writes resolved credentials into machine configuration
pub struct CredentialApplier;

impl CredentialApplier {
    /// Set credentials on every sink in the list
    pub fn apply_to_sinks(sinks: &mut [&mut dyn CredentialSink], username: &str, password: &str) {
        for sink in sinks.iter_mut() {
            debug!("Applying credentials to {}", sink.sink_name());
            sink.set_credentials(username, password);
        }
    }

    /// Apply to the machine's transports, and to its synced folders when the
    /// communicator's folder sync needs the same credentials
    pub fn apply(machine: &mut MachineConfig, username: &str, password: &str) {
        Self::apply_to_sinks(&mut machine.transport_sinks(), username, password);

        if !machine.communicator.requires_folder_credentials() {
            return;
        }

        debug!(
            "Setting SMB credentials on {} synced folder(s)",
            machine.synced_folders.len()
        );
        Self::apply_to_sinks(&mut machine.folder_sinks(), username, password);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{Communicator, SshConfig, SyncedFolder, WinRmConfig};

    fn machine(communicator: Communicator) -> MachineConfig {
        let mut machine = MachineConfig {
            communicator,
            winrm: Some(WinRmConfig {
                username: Some("old".to_string()),
                password: Some("old".to_string()),
                ..Default::default()
            }),
            ssh: Some(SshConfig::default()),
            ..Default::default()
        };
        for id in ["src", "data"] {
            machine.synced_folders.insert(
                id.to_string(),
                SyncedFolder {
                    folder_type: Some("smb".to_string()),
                    ..Default::default()
                },
            );
        }
        machine
    }

    #[test]
    fn test_apply_sets_both_transports() {
        let mut machine = machine(Communicator::Ssh);
        CredentialApplier::apply(&mut machine, "u", "p");

        let winrm = machine.winrm.as_ref().unwrap();
        assert_eq!(winrm.username.as_deref(), Some("u"));
        assert_eq!(winrm.password.as_deref(), Some("p"));
        let ssh = machine.ssh.as_ref().unwrap();
        assert_eq!(ssh.username.as_deref(), Some("u"));
        assert_eq!(ssh.password.as_deref(), Some("p"));
    }

    #[test]
    fn test_winrm_communicator_sets_folder_credentials() {
        let mut machine = machine(Communicator::WinRm);
        CredentialApplier::apply(&mut machine, "u", "p");

        for folder in machine.synced_folders.values() {
            assert_eq!(folder.smb_username.as_deref(), Some("u"));
            assert_eq!(folder.smb_password.as_deref(), Some("p"));
        }
    }

    #[test]
    fn test_ssh_communicator_leaves_folders_untouched() {
        let mut machine = machine(Communicator::Ssh);
        CredentialApplier::apply(&mut machine, "u", "p");

        for folder in machine.synced_folders.values() {
            assert_eq!(folder.smb_username, None);
            assert_eq!(folder.smb_password, None);
        }
    }

    #[test]
    fn test_absent_targets_are_skipped() {
        let mut machine = MachineConfig {
            communicator: Communicator::WinRm,
            ..Default::default()
        };
        CredentialApplier::apply(&mut machine, "u", "p");
        assert!(machine.winrm.is_none());
        assert!(machine.ssh.is_none());
    }

    #[test]
    fn test_apply_to_arbitrary_sinks() {
        let mut ssh = SshConfig::default();
        let mut folder = SyncedFolder::default();
        let mut sinks: [&mut dyn CredentialSink; 2] = [&mut ssh, &mut folder];
        CredentialApplier::apply_to_sinks(&mut sinks, "u", "");

        assert_eq!(ssh.username.as_deref(), Some("u"));
        assert_eq!(ssh.password.as_deref(), Some(""));
        assert_eq!(folder.smb_username.as_deref(), Some("u"));
    }
}
