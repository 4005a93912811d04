//! orchestrate CLI
//!
//! Resolves the credentials a Vagrant machine is managed with and shows the
//! machine configuration after they have been applied.
//!
//! Set RUST_LOG to control logging, or pass `--verbose` for debug output.

mod args;
mod commands;
mod console;

use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut filter = EnvFilter::from_default_env();
    if cli.verbose {
        filter = filter.add_directive(tracing::Level::DEBUG.into());
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Resolve {
            source,
            show_password,
        } => commands::resolve(source, *show_password),
        Commands::Apply {
            source,
            format,
            show_secrets,
        } => commands::apply(source, *format, *show_secrets),
    }
}
