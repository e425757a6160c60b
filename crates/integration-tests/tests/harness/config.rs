//! Programmatic configuration builder for integration tests

use svcerr::{Config, ResponseConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with the default response policy
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Replace server-fault messages with `message`
    pub fn with_redaction(mut self, message: &str) -> Self {
        self.config.response = ResponseConfig {
            redact_internal: true,
            redacted_message: message.to_string(),
            ..self.config.response
        };
        self
    }

    /// Keep details out of responses
    pub fn without_details(mut self) -> Self {
        self.config.response.include_details = false;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Config {
        self.config.validate().expect("test config must be valid");
        self.config
    }
}
