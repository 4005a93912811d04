//! Machine configuration and credential propagation

mod applier;
mod machine_config;
mod set_credentials;
mod sink;
mod synced_folder;
mod transport;

pub use applier::CredentialApplier;
pub use machine_config::MachineConfig;
pub use set_credentials::set_credentials;
pub use sink::CredentialSink;
pub use synced_folder::SyncedFolder;
pub use transport::{Communicator, SshConfig, WinRmConfig};
