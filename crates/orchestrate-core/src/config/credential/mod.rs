//! Credential resolution
//!
//! Resolves a username and password for a machine from, in priority order:
//! - `VAGRANT_ORCHESTRATE_USERNAME` / `VAGRANT_ORCHESTRATE_PASSWORD` overrides
//! - the static `credentials` block of the machine configuration
//! - a YAML credentials file
//! - interactive prompts
//!
//! # Example
//!
//! ```no_run
//! use orchestrate_core::config::credential::{
//!     CredentialRequest, CredentialResolver, CredentialsConfig, TracingUi,
//! };
//!
//! let config = CredentialsConfig::new()
//!     .with_file_path("~/.vagrant-orchestrate/credentials.yml")
//!     .with_prompt(false);
//!
//! let resolver = CredentialResolver::with_defaults();
//! let resolved = resolver
//!     .resolve(Some(CredentialRequest::from(&config)), &TracingUi)
//!     .unwrap();
//!
//! if let Some(creds) = resolved {
//!     println!("username from {}", creds.username_source());
//! }
//! ```

mod credentials_config;
mod credentials_file;
mod env;
mod request;
mod resolved;
mod resolver;
mod resolver_config;
mod source;
mod ui;

pub use credentials_config::CredentialsConfig;
pub use credentials_file::{CredentialsFile, CredentialsFileLoad};
pub use env::{
    DOMAIN_IDENTITY_VAR, EnvProvider, HOME_VAR, MapEnv, PASSWORD_OVERRIDE_VAR, ProcessEnv,
    USER_IDENTITY_VAR, USERNAME_IDENTITY_VAR, USERNAME_OVERRIDE_VAR, USERPROFILE_VAR,
    expand_path,
};
pub use request::{CredentialField, CredentialRequest};
pub use resolved::ResolvedCredentials;
pub use resolver::CredentialResolver;
pub use resolver_config::ResolverConfig;
pub use source::{CredentialPriority, CredentialSource};
pub use ui::{AskOptions, CredentialUi, TracingUi};
