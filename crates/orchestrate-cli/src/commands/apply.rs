//! `orchestrate apply`

use super::load_machine;
use crate::args::{CredentialArgs, OutputFormat};
use crate::console::ConsoleUi;
use orchestrate_core::config::render_machine_config;
use orchestrate_core::{ConfigFormat, CredentialResolver, set_credentials};
use tracing::info;

pub fn apply(
    args: &CredentialArgs,
    format: Option<OutputFormat>,
    show_secrets: bool,
) -> anyhow::Result<()> {
    let mut machine = load_machine(args)?;
    let ui = ConsoleUi::new();

    match set_credentials(&mut machine, &CredentialResolver::with_defaults(), &ui)? {
        Some(creds) if creds.is_complete() => ui.success("Credentials applied"),
        Some(_) => ui.error("Applied incomplete credentials"),
        None => info!("No credentials configured, machine left unchanged"),
    }

    let format = format
        .map(ConfigFormat::from)
        .unwrap_or_else(|| ConfigFormat::from_path(&args.config));
    let output = if show_secrets {
        machine
    } else {
        machine.redacted()
    };

    println!("{}", render_machine_config(&output, format)?);
    Ok(())
}
