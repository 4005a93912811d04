//! From trait implementations for OrchestrateError conversions

use super::types::OrchestrateError;

impl From<std::io::Error> for OrchestrateError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for OrchestrateError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse(error.to_string(), "json")
    }
}

impl From<serde_yaml::Error> for OrchestrateError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::parse(error.to_string(), "yaml")
    }
}

impl From<toml::de::Error> for OrchestrateError {
    fn from(error: toml::de::Error) -> Self {
        Self::parse(error.to_string(), "toml")
    }
}

impl From<toml::ser::Error> for OrchestrateError {
    fn from(error: toml::ser::Error) -> Self {
        Self::parse(error.to_string(), "toml")
    }
}
