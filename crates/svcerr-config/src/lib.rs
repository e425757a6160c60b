#![allow(clippy::must_use_candidate)]

mod loader;
pub mod response;

use serde::Deserialize;

pub use response::ResponseConfig;

/// Top-level svcerr configuration
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How translated errors are exposed to clients
    #[serde(default)]
    pub response: ResponseConfig,
}
