//! Credential sinks

/// A configuration object that receives the resolved credentials
pub trait CredentialSink {
    /// Overwrite this target's credentials
    fn set_credentials(&mut self, username: &str, password: &str);

    /// Short label for logs
    fn sink_name(&self) -> &str;
}
