use std::borrow::Cow;
use std::error::Error;

use svcerr_config::ResponseConfig;
use svcerr_core::{HttpError, StatusError, StatusKind};

use crate::rest::{RestError, ServiceError};

/// Decompose `err` into its status form
///
/// Recognizes [`StatusError`] and `tonic::Status`. Any other error,
/// including a wrapped status error, yields `None`.
pub fn status_of<'a>(err: &'a (dyn Error + 'static)) -> Option<Cow<'a, StatusError>> {
    if let Some(status) = err.downcast_ref::<StatusError>() {
        return Some(Cow::Borrowed(status));
    }
    err.downcast_ref::<tonic::Status>()
        .map(|status| Cow::Owned(StatusError::from(status)))
}

/// Whether `err` carries canonical status information
pub fn is_status_error(err: &(dyn Error + 'static)) -> bool {
    err.is::<StatusError>() || err.is::<tonic::Status>()
}

/// Human-readable rendering
///
/// Status errors render as `Code = <kind>, Message = <message>, Details = <details>`;
/// anything else renders as its own message.
pub fn render(err: &(dyn Error + 'static)) -> String {
    match status_of(err) {
        Some(status) => format!(
            "Code = {}, Message = {}, Details = {}",
            status.kind(),
            status.message(),
            status.rendered_details()
        ),
        None => err.to_string(),
    }
}

/// Status kind carried by `err`, `Unknown` for non-status errors
pub fn extract_kind(err: &(dyn Error + 'static)) -> StatusKind {
    status_of(err).map_or(StatusKind::Unknown, |status| status.kind())
}

/// Translate `err` for clients without any response policy
pub fn translate(err: &(dyn Error + 'static)) -> ServiceError {
    Translator::default().translate(err)
}

/// Translates errors into [`ServiceError`] values under a response policy
#[derive(Debug, Clone, Default)]
pub struct Translator {
    config: ResponseConfig,
}

impl Translator {
    pub const fn new(config: ResponseConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ResponseConfig {
        &self.config
    }

    /// Translate `err` and stamp it with the current time
    ///
    /// Status errors map their kind through the HTTP table. Other errors
    /// become a 500 with an empty description, their own message and no
    /// details.
    pub fn translate(&self, err: &(dyn Error + 'static)) -> ServiceError {
        let rest = match status_of(err) {
            Some(status) => self.status_body(&status),
            None => {
                tracing::debug!(error = %err, "translating non-status error as internal");
                self.plain_body(err)
            }
        };
        ServiceError::new(rest)
    }

    fn status_body(&self, status: &StatusError) -> RestError {
        let details = if self.config.include_details {
            status.rendered_details()
        } else {
            "[]".to_string()
        };

        RestError {
            code: status.status_code().as_u16(),
            desc: status.error_type().to_string(),
            message: self.client_message(status.kind().is_server_fault(), status.client_message()),
            details,
        }
    }

    fn plain_body(&self, err: &(dyn Error + 'static)) -> RestError {
        RestError {
            code: StatusKind::Internal.http_code(),
            desc: String::new(),
            message: self.client_message(true, err.to_string()),
            details: String::new(),
        }
    }

    /// Apply the redaction policy on top of the message an error exposes
    fn client_message(&self, server_fault: bool, message: String) -> String {
        if server_fault && self.config.redact_internal {
            tracing::debug!("redacting server fault message");
            self.config.redacted_message.clone()
        } else {
            message
        }
    }
}
