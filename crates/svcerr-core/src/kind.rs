use http::StatusCode;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Non-standard "client closed request" status used for cancelled calls
pub const CLIENT_CLOSED_REQUEST: u16 = 499;

/// Canonical classification of an error's cause
///
/// The set is closed and mirrors the gRPC status codes. Variant names are
/// the canonical names used in renderings and in the `Desc` field of
/// translated errors.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum StatusKind {
    Ok,
    Canceled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
}

impl StatusKind {
    /// Canonical name, e.g. `InvalidArgument`
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Numeric gRPC code (0 for `Ok` through 16 for `Unauthenticated`)
    pub const fn grpc_code(self) -> i32 {
        self as i32
    }

    /// HTTP status code this kind maps to at a transport boundary
    pub const fn http_code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Canceled => CLIENT_CLOSED_REQUEST,
            Self::Unknown | Self::Internal | Self::DataLoss => 500,
            Self::InvalidArgument | Self::FailedPrecondition | Self::OutOfRange => 400,
            Self::DeadlineExceeded => 504,
            Self::NotFound => 404,
            Self::AlreadyExists | Self::Aborted => 409,
            Self::PermissionDenied => 403,
            Self::ResourceExhausted => 429,
            Self::Unimplemented => 501,
            Self::Unavailable => 503,
            Self::Unauthenticated => 401,
        }
    }

    /// Typed HTTP status for this kind
    ///
    /// Falls back to 500 if the numeric code is not a valid HTTP status.
    pub fn http_status(self) -> StatusCode {
        StatusCode::from_u16(self.http_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Whether the kind describes a server-side fault rather than a problem
    /// with the request
    pub const fn is_server_fault(self) -> bool {
        matches!(self, Self::Unknown | Self::Internal | Self::DataLoss)
    }
}

impl From<tonic::Code> for StatusKind {
    fn from(code: tonic::Code) -> Self {
        match code {
            tonic::Code::Ok => Self::Ok,
            tonic::Code::Cancelled => Self::Canceled,
            tonic::Code::Unknown => Self::Unknown,
            tonic::Code::InvalidArgument => Self::InvalidArgument,
            tonic::Code::DeadlineExceeded => Self::DeadlineExceeded,
            tonic::Code::NotFound => Self::NotFound,
            tonic::Code::AlreadyExists => Self::AlreadyExists,
            tonic::Code::PermissionDenied => Self::PermissionDenied,
            tonic::Code::ResourceExhausted => Self::ResourceExhausted,
            tonic::Code::FailedPrecondition => Self::FailedPrecondition,
            tonic::Code::Aborted => Self::Aborted,
            tonic::Code::OutOfRange => Self::OutOfRange,
            tonic::Code::Unimplemented => Self::Unimplemented,
            tonic::Code::Internal => Self::Internal,
            tonic::Code::Unavailable => Self::Unavailable,
            tonic::Code::DataLoss => Self::DataLoss,
            tonic::Code::Unauthenticated => Self::Unauthenticated,
        }
    }
}

impl From<StatusKind> for tonic::Code {
    fn from(kind: StatusKind) -> Self {
        match kind {
            StatusKind::Ok => Self::Ok,
            StatusKind::Canceled => Self::Cancelled,
            StatusKind::Unknown => Self::Unknown,
            StatusKind::InvalidArgument => Self::InvalidArgument,
            StatusKind::DeadlineExceeded => Self::DeadlineExceeded,
            StatusKind::NotFound => Self::NotFound,
            StatusKind::AlreadyExists => Self::AlreadyExists,
            StatusKind::PermissionDenied => Self::PermissionDenied,
            StatusKind::ResourceExhausted => Self::ResourceExhausted,
            StatusKind::FailedPrecondition => Self::FailedPrecondition,
            StatusKind::Aborted => Self::Aborted,
            StatusKind::OutOfRange => Self::OutOfRange,
            StatusKind::Unimplemented => Self::Unimplemented,
            StatusKind::Internal => Self::Internal,
            StatusKind::Unavailable => Self::Unavailable,
            StatusKind::DataLoss => Self::DataLoss,
            StatusKind::Unauthenticated => Self::Unauthenticated,
        }
    }
}
