use http::StatusCode;

use crate::StatusError;

/// Trait for errors that can be converted to HTTP responses
///
/// Implemented by [`StatusError`]. The translation layer builds response
/// bodies from these three views and applies its redaction policy to the
/// client message.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (the canonical kind name)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

impl HttpError for StatusError {
    fn status_code(&self) -> StatusCode {
        self.kind().http_status()
    }

    fn error_type(&self) -> &str {
        self.kind().name()
    }

    fn client_message(&self) -> String {
        self.message().to_owned()
    }
}
