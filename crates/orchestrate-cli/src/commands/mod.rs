//! Command implementations

mod apply;
mod resolve;

pub use apply::apply;
pub use resolve::resolve;

use crate::args::CredentialArgs;
use anyhow::Context;
use orchestrate_core::{CredentialsConfig, MachineConfig, load_machine_config};
use tracing::debug;

/// Load the machine file and fold command-line overrides into its
/// credentials block
pub(crate) fn load_machine(args: &CredentialArgs) -> anyhow::Result<MachineConfig> {
    let mut machine = load_machine_config(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    if args.credentials_file.is_some() || args.no_prompt {
        let creds = machine.credentials.get_or_insert_with(CredentialsConfig::default);
        if let Some(path) = &args.credentials_file {
            debug!("Credentials file overridden on the command line: {}", path);
            creds.file_path = Some(path.clone());
        }
        if args.no_prompt {
            creds.prompt = false;
        }
    }

    Ok(machine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(config: PathBuf) -> CredentialArgs {
        CredentialArgs {
            config,
            credentials_file: None,
            no_prompt: false,
        }
    }

    #[test]
    fn test_load_machine_without_overrides_keeps_absent_block() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("machine.json");
        fs::write(&path, r#"{"communicator": "ssh"}"#).unwrap();

        let machine = load_machine(&args(path)).unwrap();
        assert!(machine.credentials.is_none());
    }

    #[test]
    fn test_overrides_create_credentials_block() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("machine.json");
        fs::write(&path, r#"{"credentials": {"username": "admin"}}"#).unwrap();

        let mut args = args(path);
        args.credentials_file = Some("/etc/creds.yml".to_string());
        args.no_prompt = true;

        let creds = load_machine(&args).unwrap().credentials.unwrap();
        assert_eq!(creds.username.as_deref(), Some("admin"));
        assert_eq!(creds.file_path.as_deref(), Some("/etc/creds.yml"));
        assert!(!creds.prompt);
    }

    #[test]
    fn test_missing_machine_file_has_context() {
        let dir = TempDir::new().unwrap();
        let err = load_machine(&args(dir.path().join("nope.yml"))).unwrap_err();
        assert!(format!("{:#}", err).contains("nope.yml"));
    }
}
