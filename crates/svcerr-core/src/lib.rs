//! Canonical status errors for service layers
//!
//! Builds errors tagged with a [`StatusKind`] and an optional list of
//! structured `google.rpc` details, and converts them to and from
//! `tonic::Status`.

#![allow(clippy::must_use_candidate)]

pub mod detail;
mod error;
mod factory;
pub mod kind;
mod status;
mod wrap;

pub use detail::{
    BadRequest, DebugInfo, Detail, DetailError, DetailRecord, FieldViolation, Help, HelpLink, LocalizedMessage,
    PreconditionFailure, PreconditionViolation, QuotaFailure, QuotaViolation, RequestInfo, ResourceInfo, RetryInfo,
    render_details,
};
pub use error::HttpError;
pub use factory::*;
pub use kind::StatusKind;
pub use status::StatusError;
pub use wrap::{WrappedError, wrap};
