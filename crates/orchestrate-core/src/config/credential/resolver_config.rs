//! Resolver configuration

use super::env::{
    DOMAIN_IDENTITY_VAR, PASSWORD_OVERRIDE_VAR, USERNAME_IDENTITY_VAR, USERNAME_OVERRIDE_VAR,
    USER_IDENTITY_VAR,
};

/// Environment variable names consulted by the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Overrides the username from any other source
    pub username_override_var: String,
    /// Overrides the password from any other source
    pub password_override_var: String,
    /// Login-name variables tried in order for the prompt default
    pub identity_vars: Vec<String>,
    /// Domain variable used to qualify the prompt default
    pub domain_var: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            username_override_var: USERNAME_OVERRIDE_VAR.to_string(),
            password_override_var: PASSWORD_OVERRIDE_VAR.to_string(),
            identity_vars: vec![
                USERNAME_IDENTITY_VAR.to_string(),
                USER_IDENTITY_VAR.to_string(),
            ],
            domain_var: DOMAIN_IDENTITY_VAR.to_string(),
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different pair of override variables
    pub fn with_override_vars(
        mut self,
        username_var: impl Into<String>,
        password_var: impl Into<String>,
    ) -> Self {
        self.username_override_var = username_var.into();
        self.password_override_var = password_var.into();
        self
    }
}
