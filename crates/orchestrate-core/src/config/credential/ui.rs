//! UI collaborator used by the credential cascade
//!
//! The cascade reports progress through `info`/`warn` and asks the user for
//! missing fields through `ask`. Rendering is up to the implementation.

use crate::error::{OrchestrateError, OrchestrateResult};
use tracing::{info, warn};

/// Options for a single `ask` interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AskOptions {
    /// Whether typed characters are displayed
    pub echo: bool,
}

impl AskOptions {
    /// Input is displayed as typed
    pub const fn visible() -> Self {
        Self { echo: true }
    }

    /// Input is not displayed (passwords)
    pub const fn hidden() -> Self {
        Self { echo: false }
    }
}

impl Default for AskOptions {
    fn default() -> Self {
        Self::visible()
    }
}

/// Output sink and prompt capability
#[cfg_attr(test, mockall::automock)]
pub trait CredentialUi {
    /// Informational message
    fn info(&self, message: &str);

    /// Warning message
    fn warn(&self, message: &str);

    /// Ask the user a question and return the raw answer (may be empty).
    /// Blocks until the user answers.
    fn ask(&self, prompt: &str, options: AskOptions) -> OrchestrateResult<String>;
}

/// Non-interactive UI that forwards messages to `tracing`
///
/// Asking always fails, so it is only suitable when prompting is disabled or
/// no terminal is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingUi;

impl CredentialUi for TracingUi {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    fn ask(&self, prompt: &str, _options: AskOptions) -> OrchestrateResult<String> {
        Err(OrchestrateError::prompt(format!(
            "Cannot ask '{}' without an interactive terminal",
            prompt.trim()
        )))
    }
}
