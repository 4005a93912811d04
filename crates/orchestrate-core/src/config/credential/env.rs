//! Environment access for the credential cascade
//!
//! The resolver never reads the process environment directly. It goes through
//! an [`EnvProvider`] so callers and tests can substitute deterministic values.

use std::collections::HashMap;
use std::path::PathBuf;

/// Override for the resolved username
pub const USERNAME_OVERRIDE_VAR: &str = "VAGRANT_ORCHESTRATE_USERNAME";
/// Override for the resolved password
pub const PASSWORD_OVERRIDE_VAR: &str = "VAGRANT_ORCHESTRATE_PASSWORD";

/// Windows login name, used for the prompt default
pub const USERNAME_IDENTITY_VAR: &str = "USERNAME";
/// Unix login name, used for the prompt default
pub const USER_IDENTITY_VAR: &str = "USER";
/// Windows logon domain, used to qualify the prompt default
pub const DOMAIN_IDENTITY_VAR: &str = "USERDOMAIN";

/// Home directory on Unix
pub const HOME_VAR: &str = "HOME";
/// Home directory on Windows
pub const USERPROFILE_VAR: &str = "USERPROFILE";

/// Read-only view of environment variables
pub trait EnvProvider: Send + Sync {
    /// Look up a variable. `None` means the variable is not set at all;
    /// an empty string is a present value.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

/// Fixed set of variables held in memory
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvProvider for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Expand a leading `~` and `$VAR` / `${VAR}` references in a path.
///
/// Undefined variables are left in place, so the file phase reports the
/// literal path as missing.
pub fn expand_path(raw: &str, env: &dyn EnvProvider) -> PathBuf {
    let home = || env.var(HOME_VAR).or_else(|| env.var(USERPROFILE_VAR));
    let expanded = shellexpand::full_with_context_no_errors(raw, home, |name| env.var(name));
    PathBuf::from(expanded.into_owned())
}
