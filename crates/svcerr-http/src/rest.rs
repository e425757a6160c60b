use std::fmt;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Transport-facing view of an error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestError {
    /// HTTP status code
    #[serde(rename = "Code")]
    pub code: u16,
    /// Canonical kind name, empty for non-status errors
    #[serde(rename = "Desc")]
    pub desc: String,
    #[serde(rename = "Message")]
    pub message: String,
    /// Rendered detail list, empty for non-status errors
    #[serde(rename = "Details")]
    pub details: String,
}

impl RestError {
    /// Typed HTTP status, 500 if `code` is not a valid status
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Code:{} Desc:{} Message:{} Details:{}}}",
            self.code, self.desc, self.message, self.details
        )
    }
}

/// Result of translating an error, stamped with the translation time
///
/// Serializes as `{"Error": {...}, "LocalTime": "..."}` with the time as an
/// RFC 3339 timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceError {
    #[serde(rename = "Error")]
    pub error: RestError,
    #[serde(rename = "LocalTime")]
    pub translated_at: Timestamp,
}

impl ServiceError {
    /// Stamp a translated error with the current time
    pub fn new(error: RestError) -> Self {
        Self {
            error,
            translated_at: Timestamp::now(),
        }
    }
}

impl<E> From<E> for ServiceError
where
    E: std::error::Error + 'static,
{
    fn from(err: E) -> Self {
        crate::translate(&err)
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.error.status();
        (status, Json(self)).into_response()
    }
}
