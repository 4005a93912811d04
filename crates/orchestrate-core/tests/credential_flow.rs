//! End-to-end credential flow: load a machine file, resolve, apply

use orchestrate_core::config::credential::{AskOptions, CredentialUi, MapEnv};
use orchestrate_core::machine::Communicator;
use orchestrate_core::{
    CredentialResolver, CredentialSource, OrchestrateError, OrchestrateResult,
    load_machine_config, set_credentials,
};
use std::cell::RefCell;
use std::fs;
use tempfile::TempDir;

struct AnsweringUi {
    answers: RefCell<Vec<String>>,
    messages: RefCell<Vec<String>>,
}

impl AnsweringUi {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().rev().map(|a| a.to_string()).collect()),
            messages: RefCell::new(Vec::new()),
        }
    }
}

impl CredentialUi for AnsweringUi {
    fn info(&self, message: &str) {
        self.messages.borrow_mut().push(format!("info: {}", message));
    }

    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(format!("warn: {}", message));
    }

    fn ask(&self, prompt: &str, _options: AskOptions) -> OrchestrateResult<String> {
        self.answers
            .borrow_mut()
            .pop()
            .ok_or_else(|| OrchestrateError::prompt(format!("unexpected prompt {}", prompt)))
    }
}

fn write_machine(dir: &TempDir, creds_path: &str) -> std::path::PathBuf {
    let path = dir.path().join("machine.yml");
    fs::write(
        &path,
        format!(
            r#"
name: win01
communicator: winrm
winrm:
  host: 192.168.33.10
ssh:
  host: 192.168.33.10
synced_folders:
  vagrant:
    host_path: .
    guest_path: C:/vagrant
    type: smb
credentials:
  file_path: {}
  prompt: true
"#,
            creds_path
        ),
    )
    .unwrap();
    path
}

#[test]
fn test_file_credentials_reach_every_sink() {
    let dir = TempDir::new().unwrap();
    let creds_path = dir.path().join("creds.yml");
    fs::write(&creds_path, ":username: alice\n:password: secret\n").unwrap();
    let machine_path = write_machine(&dir, &creds_path.display().to_string());

    let mut machine = load_machine_config(&machine_path).unwrap();
    assert_eq!(machine.communicator, Communicator::WinRm);

    let ui = AnsweringUi::new(&[]);
    let creds = set_credentials(
        &mut machine,
        &CredentialResolver::with_env(MapEnv::new()),
        &ui,
    )
    .unwrap()
    .unwrap();

    assert_eq!(creds.username_source(), &CredentialSource::file(&creds_path));
    let winrm = machine.winrm.unwrap();
    let ssh = machine.ssh.unwrap();
    let folder = &machine.synced_folders["vagrant"];
    assert_eq!(winrm.username.as_deref(), Some("alice"));
    assert_eq!(ssh.password.as_deref(), Some("secret"));
    assert_eq!(folder.smb_username.as_deref(), Some("alice"));
    assert_eq!(folder.smb_password.as_deref(), Some("secret"));
    assert!(ui.messages.borrow().is_empty());
}

#[test]
fn test_missing_file_prompts_with_domain_default() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.yml");
    let machine_path = write_machine(&dir, &missing.display().to_string());
    let mut machine = load_machine_config(&machine_path).unwrap();

    let env = MapEnv::new()
        .with_var("USERDOMAIN", "CORP")
        .with_var("USERNAME", "bob");
    let ui = AnsweringUi::new(&["", "typed"]);

    let creds = set_credentials(&mut machine, &CredentialResolver::with_env(env), &ui)
        .unwrap()
        .unwrap();

    assert_eq!(creds.username(), "CORP\\bob");
    assert_eq!(creds.password(), "typed");
    assert_eq!(
        machine.synced_folders["vagrant"].smb_username.as_deref(),
        Some("CORP\\bob")
    );
    let messages = ui.messages.borrow();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("info: Credential file not found at"));
}

#[test]
fn test_env_override_wins_end_to_end() {
    let dir = TempDir::new().unwrap();
    let creds_path = dir.path().join("creds.yml");
    fs::write(&creds_path, "username: alice\npassword: secret\n").unwrap();
    let machine_path = write_machine(&dir, &creds_path.display().to_string());
    let mut machine = load_machine_config(&machine_path).unwrap();

    let env = MapEnv::new().with_var("VAGRANT_ORCHESTRATE_USERNAME", "override");
    let ui = AnsweringUi::new(&[]);

    set_credentials(&mut machine, &CredentialResolver::with_env(env), &ui).unwrap();

    assert_eq!(
        machine.winrm.unwrap().username.as_deref(),
        Some("override")
    );
    assert_eq!(
        machine.synced_folders["vagrant"].smb_password.as_deref(),
        Some("secret")
    );
}
