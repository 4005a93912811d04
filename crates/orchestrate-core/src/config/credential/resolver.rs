//! Credential resolver
//!
//! Fills a [`CredentialRequest`] from, in order:
//! 1. Environment variable overrides (authoritative, overwrite config values)
//! 2. The credentials file (fills unset fields only)
//! 3. Interactive prompts (fills unset fields only, when allowed)
//!
//! Missing or malformed credentials files are never fatal.

use super::credentials_file::{CredentialsFile, CredentialsFileLoad};
use super::env::{EnvProvider, ProcessEnv, expand_path};
use super::request::CredentialRequest;
use super::resolved::ResolvedCredentials;
use super::resolver_config::ResolverConfig;
use super::source::CredentialSource;
use super::ui::{AskOptions, CredentialUi};
use crate::error::OrchestrateResult;
use tracing::debug;

/// Resolves a username/password pair for a machine
pub struct CredentialResolver {
    config: ResolverConfig,
    env: Box<dyn EnvProvider>,
}

impl CredentialResolver {
    /// Create a resolver reading from the given environment
    pub fn new(config: ResolverConfig, env: impl EnvProvider + 'static) -> Self {
        Self {
            config,
            env: Box::new(env),
        }
    }

    /// Default variable names, real process environment
    pub fn with_defaults() -> Self {
        Self::new(ResolverConfig::default(), ProcessEnv)
    }

    /// Default variable names, caller-supplied environment
    pub fn with_env(env: impl EnvProvider + 'static) -> Self {
        Self::new(ResolverConfig::default(), env)
    }

    /// Run the cascade.
    ///
    /// `None` means no credentials are configured: nothing is resolved and the
    /// caller should apply nothing.
    pub fn resolve(
        &self,
        request: Option<CredentialRequest>,
        ui: &dyn CredentialUi,
    ) -> OrchestrateResult<Option<ResolvedCredentials>> {
        let Some(mut request) = request else {
            debug!("No credentials configured, skipping resolution");
            return Ok(None);
        };

        self.apply_env_overrides(&mut request, ui);

        if !request.is_complete() {
            self.check_credentials_file(&mut request, ui)?;
        }

        self.maybe_prompt(&mut request, ui)?;

        Ok(Some(request.into_resolved()))
    }

    fn apply_env_overrides(&self, request: &mut CredentialRequest, ui: &dyn CredentialUi) {
        let username_var = &self.config.username_override_var;
        if let Some(username) = self.env.var(username_var) {
            ui.info(&format!("Using {} environment variable override", username_var));
            request
                .username
                .overwrite(username, CredentialSource::env(username_var));
        }

        let password_var = &self.config.password_override_var;
        if let Some(password) = self.env.var(password_var) {
            ui.info(&format!("Using {} environment variable override", password_var));
            request
                .password
                .overwrite(password, CredentialSource::env(password_var));
        }
    }

    fn check_credentials_file(
        &self,
        request: &mut CredentialRequest,
        ui: &dyn CredentialUi,
    ) -> OrchestrateResult<()> {
        let Some(raw) = request.file_path.as_ref() else {
            return Ok(());
        };
        let path = expand_path(&raw.to_string_lossy(), self.env.as_ref());

        match CredentialsFile::load(&path)? {
            CredentialsFileLoad::Missing => {
                ui.info(&format!(
                    "Credential file not found at {}. Prompting user for credentials.",
                    path.display()
                ));
            }
            CredentialsFileLoad::Malformed(reason) => {
                debug!("Credentials file {} rejected: {}", path.display(), reason);
                ui.warn(&format!(
                    "Credentials file at {} was not valid YAML. Prompting user for credentials.",
                    path.display()
                ));
            }
            CredentialsFileLoad::Loaded(file) => {
                if let Some(password) = file.password {
                    if request.password.fill(password, CredentialSource::file(&path)) {
                        debug!("Password taken from {}", path.display());
                    }
                }
                if let Some(username) = file.username {
                    if request.username.fill(username, CredentialSource::file(&path)) {
                        debug!("Username taken from {}", path.display());
                    }
                }
            }
        }

        Ok(())
    }

    fn maybe_prompt(
        &self,
        request: &mut CredentialRequest,
        ui: &dyn CredentialUi,
    ) -> OrchestrateResult<()> {
        if !request.prompt {
            return Ok(());
        }

        if !request.username.is_set() {
            let username = self.prompt_username(ui)?;
            request.username.fill(username, CredentialSource::Prompt);
        }

        if !request.password.is_set() {
            let password = ui.ask("password? ", AskOptions::hidden())?;
            request.password.fill(password, CredentialSource::Prompt);
        }

        Ok(())
    }

    fn prompt_username(&self, ui: &dyn CredentialUi) -> OrchestrateResult<String> {
        let default = self.default_username();
        let prompt = match &default {
            Some(default) => format!("username? [{}] ", default),
            None => "username? ".to_string(),
        };

        let answer = ui.ask(&prompt, AskOptions::visible())?;
        if answer.is_empty() {
            return Ok(default.unwrap_or_default());
        }
        Ok(answer)
    }

    /// Prompt default from the login identity, domain-qualified when known
    pub fn default_username(&self) -> Option<String> {
        let user = self
            .config
            .identity_vars
            .iter()
            .find_map(|var| self.env.var(var))?;

        match self.env.var(&self.config.domain_var) {
            Some(domain) => Some(format!("{}\\{}", domain, user)),
            None => Some(user),
        }
    }

    /// Get the resolver configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::with_defaults()
    }
}
