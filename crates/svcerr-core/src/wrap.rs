use std::fmt::Display;

use thiserror::Error;

/// Textual composition of an outer description and an inner error
///
/// Only the rendering of the inner error is kept. A wrapped status error is
/// no longer a status error: capture its kind and details before wrapping
/// if they are still needed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{text}:({inner})")]
pub struct WrappedError {
    text: String,
    inner: String,
}

impl WrappedError {
    /// The outer description
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Wrap `err` under `text`, rendering as `<text>:(<err>)`
pub fn wrap(text: impl Into<String>, err: impl Display) -> WrappedError {
    WrappedError {
        text: text.into(),
        inner: err.to_string(),
    }
}
