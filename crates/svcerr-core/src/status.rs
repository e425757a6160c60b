use thiserror::Error;
use tonic_types::{ErrorDetail, StatusExt};

use crate::detail::{DetailError, DetailRecord, render_details};
use crate::kind::StatusKind;

/// An error tagged with a canonical status kind
///
/// Carries a message and an ordered, possibly empty, list of structured
/// details. Values are immutable once built.
#[derive(Debug, Clone, Error)]
#[error("rpc error: code = {kind} desc = {message}")]
pub struct StatusError {
    kind: StatusKind,
    message: String,
    details: Vec<DetailRecord>,
}

impl StatusError {
    /// Create an error without details
    pub fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Create an error and attach the given details in order
    ///
    /// Attachment is all or nothing and never fails the caller: if any
    /// record does not pass its encoding check, a warning is logged and the
    /// error is returned without details.
    pub fn with_details(
        kind: StatusKind,
        message: impl Into<String>,
        details: impl IntoIterator<Item = DetailRecord>,
    ) -> Self {
        let base = Self::new(kind, message);
        match attach(details) {
            Ok(details) => Self { details, ..base },
            Err(err) => {
                tracing::warn!(kind = %base.kind, error = %err, "dropping details that could not be attached");
                base
            }
        }
    }

    pub const fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &[DetailRecord] {
        &self.details
    }

    /// Details rendered as `[first, second]`, `[]` when there are none
    pub fn rendered_details(&self) -> String {
        render_details(&self.details)
    }
}

fn attach(details: impl IntoIterator<Item = DetailRecord>) -> Result<Vec<DetailRecord>, DetailError> {
    details
        .into_iter()
        .map(|record| record.check().map(|()| record))
        .collect()
}

impl From<StatusError> for tonic::Status {
    fn from(err: StatusError) -> Self {
        let details: Vec<ErrorDetail> = err.details.into_iter().map(ErrorDetail::from).collect();
        Self::with_error_details_vec(err.kind.into(), err.message, details)
    }
}

impl From<&tonic::Status> for StatusError {
    /// Decode a gRPC status, keeping the details that belong to the
    /// supported vocabulary
    fn from(status: &tonic::Status) -> Self {
        let details = match status.check_error_details_vec() {
            Ok(details) => details
                .into_iter()
                .filter_map(DetailRecord::from_error_detail)
                .collect(),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring undecodable status details");
                Vec::new()
            }
        };

        Self {
            kind: status.code().into(),
            message: status.message().to_owned(),
            details,
        }
    }
}

impl From<tonic::Status> for StatusError {
    fn from(status: tonic::Status) -> Self {
        Self::from(&status)
    }
}
