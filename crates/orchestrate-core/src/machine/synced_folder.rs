//! Synced folder definitions

use super::sink::CredentialSink;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One synced folder. Unknown options are preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncedFolder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_path: Option<String>,
    /// Sync mechanism (`smb`, `rsync`, `virtualbox`, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub folder_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smb_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smb_password: Option<String>,
    #[serde(flatten)]
    pub options: BTreeMap<String, Value>,
}

impl SyncedFolder {
    /// Drop null options, including nulls nested in tables and arrays.
    /// TOML has no null, so this runs before a TOML render.
    pub fn strip_null_options(&mut self) {
        self.options.retain(|_, value| !value.is_null());
        self.options.values_mut().for_each(strip_nulls);
    }
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => {
            items.retain(|v| !v.is_null());
            items.iter_mut().for_each(strip_nulls);
        }
        _ => {}
    }
}

impl CredentialSink for SyncedFolder {
    fn set_credentials(&mut self, username: &str, password: &str) {
        self.smb_username = Some(username.to_string());
        self.smb_password = Some(password.to_string());
    }

    fn sink_name(&self) -> &str {
        self.folder_type.as_deref().unwrap_or("synced_folder")
    }
}
