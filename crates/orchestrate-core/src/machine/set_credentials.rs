//! Resolve-then-apply step run once per machine configuration pass

use super::applier::CredentialApplier;
use super::machine_config::MachineConfig;
use crate::config::credential::{CredentialResolver, CredentialUi, ResolvedCredentials};
use crate::error::OrchestrateResult;
use tracing::{debug, info};

/// Resolve the machine's credentials and write them into its configuration.
///
/// Returns `Ok(None)` and leaves the machine untouched when it has no
/// credentials block.
pub fn set_credentials(
    machine: &mut MachineConfig,
    resolver: &CredentialResolver,
    ui: &dyn CredentialUi,
) -> OrchestrateResult<Option<ResolvedCredentials>> {
    let name = machine.name.clone().unwrap_or_else(|| "default".to_string());

    let Some(creds) = resolver.resolve(machine.credential_request(), ui)? else {
        debug!("Machine {} has no credentials configured", name);
        return Ok(None);
    };

    if !creds.is_complete() {
        debug!(
            "Machine {} credentials are incomplete (username: {}, password: {})",
            name,
            creds.username_source(),
            creds.password_source()
        );
    }

    CredentialApplier::apply(machine, creds.username(), creds.password());
    info!(
        "Applied credentials for {} to machine {} via {}",
        creds.username(),
        name,
        machine.communicator
    );

    Ok(Some(creds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::credential::{CredentialsConfig, MapEnv, TracingUi};
    use crate::machine::{Communicator, SyncedFolder, WinRmConfig};

    #[test]
    fn test_no_credentials_block_is_noop() {
        let mut machine = MachineConfig {
            winrm: Some(WinRmConfig::default()),
            ..Default::default()
        };
        let resolver = CredentialResolver::with_env(MapEnv::new());

        let result = set_credentials(&mut machine, &resolver, &TracingUi).unwrap();
        assert!(result.is_none());
        assert_eq!(machine.winrm, Some(WinRmConfig::default()));
    }

    #[test]
    fn test_resolves_and_applies() {
        let mut machine = MachineConfig {
            communicator: Communicator::WinRm,
            winrm: Some(WinRmConfig::default()),
            credentials: Some(
                CredentialsConfig::new()
                    .with_username("admin")
                    .with_prompt(false),
            ),
            ..Default::default()
        };
        machine
            .synced_folders
            .insert("src".to_string(), SyncedFolder::default());
        let env = MapEnv::new().with_var("VAGRANT_ORCHESTRATE_PASSWORD", "pw");

        let creds = set_credentials(&mut machine, &CredentialResolver::with_env(env), &TracingUi)
            .unwrap()
            .unwrap();

        assert_eq!(creds.into_pair(), ("admin".into(), "pw".into()));
        assert_eq!(machine.winrm.unwrap().password.as_deref(), Some("pw"));
        assert_eq!(
            machine.synced_folders["src"].smb_username.as_deref(),
            Some("admin")
        );
    }

    #[test]
    fn test_unresolved_credentials_applied_as_empty() {
        let mut machine = MachineConfig {
            winrm: Some(WinRmConfig::default()),
            credentials: Some(CredentialsConfig::new().with_prompt(false)),
            ..Default::default()
        };

        set_credentials(
            &mut machine,
            &CredentialResolver::with_env(MapEnv::new()),
            &TracingUi,
        )
        .unwrap();

        let winrm = machine.winrm.unwrap();
        assert_eq!(winrm.username.as_deref(), Some(""));
        assert_eq!(winrm.password.as_deref(), Some(""));
    }
}
