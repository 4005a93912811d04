//! orchestrate core library
//!
//! Resolves the username and password used to manage a machine and writes
//! them into the machine's transport and synced-folder configuration.

pub mod config;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use config::credential::{
    AskOptions, CredentialRequest, CredentialResolver, CredentialSource, CredentialUi,
    CredentialsConfig, ResolvedCredentials,
};
pub use config::{ConfigFormat, load_machine_config};
pub use error::{OrchestrateError, OrchestrateResult};
pub use machine::{CredentialApplier, CredentialSink, MachineConfig, set_credentials};
