//! `orchestrate resolve`

use super::load_machine;
use crate::args::CredentialArgs;
use crate::console::ConsoleUi;
use colored::*;
use orchestrate_core::{CredentialResolver, CredentialUi};

pub fn resolve(args: &CredentialArgs, show_password: bool) -> anyhow::Result<()> {
    let machine = load_machine(args)?;
    let ui = ConsoleUi::new();

    let resolver = CredentialResolver::with_defaults();
    let Some(creds) = resolver.resolve(machine.credential_request(), &ui)? else {
        ui.warn("No credentials configured for this machine");
        return Ok(());
    };

    let password = if show_password {
        creds.password().to_string()
    } else if creds.password().is_empty() {
        String::new()
    } else {
        "********".to_string()
    };

    println!(
        "{:<10} {:<24} {}",
        "username".bold(),
        creds.username(),
        creds.username_source().to_string().dimmed()
    );
    println!(
        "{:<10} {:<24} {}",
        "password".bold(),
        password,
        creds.password_source().to_string().dimmed()
    );

    if !creds.is_complete() {
        ui.error("Credentials are incomplete");
    }
    Ok(())
}
