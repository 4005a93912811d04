//! CLI argument definitions using clap
//!
//! - orchestrate resolve --config machine.yml   # Show resolved credentials
//! - orchestrate apply --config machine.yml     # Print config with credentials applied

use clap::{Args, Parser, Subcommand, ValueEnum};
use orchestrate_core::ConfigFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orchestrate")]
#[command(about = "Resolve and apply machine credentials for Vagrant provisioning")]
#[command(version)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve credentials and show where each field came from
    Resolve {
        #[command(flatten)]
        source: CredentialArgs,

        /// Print the password instead of a mask
        #[arg(long)]
        show_password: bool,
    },

    /// Resolve credentials, apply them to the machine and print the result
    Apply {
        #[command(flatten)]
        source: CredentialArgs,

        /// Output format (defaults to the input file's format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Print passwords instead of masks
        #[arg(long)]
        show_secrets: bool,
    },
}

/// Arguments shared by every credential command
#[derive(Args, Debug, Clone)]
pub struct CredentialArgs {
    /// Machine configuration file (JSON, TOML or YAML)
    #[arg(long, short)]
    pub config: PathBuf,

    /// Credentials file, overriding the one in the machine configuration
    #[arg(long, env = "VAGRANT_ORCHESTRATE_CREDENTIALS_FILE")]
    pub credentials_file: Option<String>,

    /// Never prompt, even if the configuration allows it
    #[arg(long)]
    pub no_prompt: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Toml,
    Yaml,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ConfigFormat::Json,
            OutputFormat::Toml => ConfigFormat::Toml,
            OutputFormat::Yaml => ConfigFormat::Yaml,
        }
    }
}
