//! Configuration management for orchestrate

mod file_loader;

pub mod credential;

pub use file_loader::{
    ConfigFormat, load_machine_config, parse_machine_config, render_machine_config,
};
