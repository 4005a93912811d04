//! Terminal UI for the credential cascade

use colored::*;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use orchestrate_core::{AskOptions, CredentialUi, OrchestrateError, OrchestrateResult};

/// Prints cascade messages and asks questions on the terminal
pub struct ConsoleUi {
    theme: ColorfulTheme,
    interactive: bool,
}

impl ConsoleUi {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            interactive: console::user_attended(),
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialUi for ConsoleUi {
    fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".blue().bold(), message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    fn ask(&self, prompt: &str, options: AskOptions) -> OrchestrateResult<String> {
        if !self.interactive {
            return Err(OrchestrateError::prompt(format!(
                "Cannot ask '{}': no interactive terminal (use --no-prompt or set VAGRANT_ORCHESTRATE_USERNAME/PASSWORD)",
                prompt.trim()
            )));
        }

        // dialoguer adds its own separator
        let prompt = prompt.trim_end().trim_end_matches(':');
        let answer = if options.echo {
            Input::<String>::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
        } else {
            Password::with_theme(&self.theme)
                .with_prompt(prompt)
                .allow_empty_password(true)
                .interact()
        };

        answer.map_err(|e| OrchestrateError::prompt(e.to_string()))
    }
}
