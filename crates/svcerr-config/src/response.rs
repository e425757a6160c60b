use serde::Deserialize;

/// Response policy applied when errors are translated for clients
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResponseConfig {
    /// Replace messages of server-side faults (`Internal`, `Unknown`,
    /// `DataLoss` and non-status errors) with `redacted_message`
    #[serde(default)]
    pub redact_internal: bool,
    /// Message shown in place of a redacted one
    #[serde(default = "default_redacted_message")]
    pub redacted_message: String,
    /// Render attached details into responses
    #[serde(default = "default_include_details")]
    pub include_details: bool,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            redact_internal: false,
            redacted_message: default_redacted_message(),
            include_details: true,
        }
    }
}

fn default_redacted_message() -> String {
    "internal server error".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_include_details() -> bool {
    true
}
