//! File-based machine configuration loading
//!
//! Supports JSON, TOML, and YAML formats based on file extension.

use crate::error::{OrchestrateError, OrchestrateResult};
use crate::machine::{MachineConfig, SyncedFolder};
use std::fmt;
use std::fs;
use std::path::Path;

/// Serialization format of a machine configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => ConfigFormat::Toml,
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Toml => "toml",
            ConfigFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Load a machine configuration from a file
pub fn load_machine_config(path: &Path) -> OrchestrateResult<MachineConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        OrchestrateError::config_with_context(
            format!("Failed to read config file: {}", e),
            format!("Reading machine configuration from '{}'", path.display()),
        )
    })?;

    let format = ConfigFormat::from_path(path);
    parse_machine_config(&content, format).map_err(|e| {
        OrchestrateError::config_with_context(
            format!("Failed to parse {} config: {}", format.name().to_uppercase(), e),
            format!(
                "Deserializing {} configuration from '{}'",
                format.name().to_uppercase(),
                path.display()
            ),
        )
    })
}

/// Parse a machine configuration document
pub fn parse_machine_config(
    content: &str,
    format: ConfigFormat,
) -> OrchestrateResult<MachineConfig> {
    let config = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };
    Ok(config)
}

/// Serialize a machine configuration.
///
/// Null folder options are dropped from TOML output.
pub fn render_machine_config(
    config: &MachineConfig,
    format: ConfigFormat,
) -> OrchestrateResult<String> {
    let rendered = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Toml => {
            let mut config = config.clone();
            config
                .synced_folders
                .values_mut()
                .for_each(SyncedFolder::strip_null_options);
            toml::to_string_pretty(&config)?
        }
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };
    Ok(rendered)
}
