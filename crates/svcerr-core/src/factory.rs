//! One constructor per status kind
//!
//! Every constructor takes a message and any number of details:
//!
//! ```
//! use svcerr_core::{BadRequest, StatusKind, invalid_args, not_found};
//!
//! let plain = not_found("user 42", []);
//! assert_eq!(plain.kind(), StatusKind::NotFound);
//!
//! let detailed = invalid_args("bad request", [BadRequest::with_violation("email", "required").into()]);
//! assert_eq!(detailed.details().len(), 1);
//! ```

use crate::detail::DetailRecord;
use crate::kind::StatusKind;
use crate::status::StatusError;

macro_rules! constructors {
    ($($(#[$doc:meta])* $name:ident => $kind:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(
                message: impl Into<String>,
                details: impl IntoIterator<Item = DetailRecord>,
            ) -> StatusError {
                StatusError::with_details(StatusKind::$kind, message, details)
            }
        )*
    };
}

constructors! {
    /// The client supplied an invalid argument
    invalid_args => InvalidArgument;
    /// An invariant expected by the service was broken
    internal_err => Internal;
    /// The cause is not known
    unknown => Unknown;
    /// A requested entity was not found
    not_found => NotFound;
    /// The caller is not allowed to perform the operation
    perm_denied => PermissionDenied;
    /// The operation was cancelled, typically by the caller
    canceled => Canceled;
    /// The deadline expired before the operation completed
    deadline_exceeded => DeadlineExceeded;
    /// The entity the client tried to create already exists
    already_exists => AlreadyExists;
    /// A quota or rate limit was exhausted
    resource_exhausted => ResourceExhausted;
    /// The system is not in a state required for the operation
    failed_precondition => FailedPrecondition;
    /// The operation was aborted, typically due to a concurrency conflict
    aborted => Aborted;
    /// The operation was attempted past the valid range
    out_of_range => OutOfRange;
    /// The operation is not implemented or supported
    unimplemented => Unimplemented;
    /// Unrecoverable data loss or corruption
    data_loss => DataLoss;
    /// The service is currently unavailable
    unavailable => Unavailable;
    /// The request lacks valid authentication credentials
    unauthenticated => Unauthenticated;
}

#[cfg(test)]
mod tests {
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;
    use crate::detail::{BadRequest, FieldViolation};

    type Constructor = fn(&'static str, Vec<DetailRecord>) -> StatusError;

    fn all_constructors() -> [(Constructor, StatusKind); 16] {
        [
            (invalid_args, StatusKind::InvalidArgument),
            (internal_err, StatusKind::Internal),
            (unknown, StatusKind::Unknown),
            (not_found, StatusKind::NotFound),
            (perm_denied, StatusKind::PermissionDenied),
            (canceled, StatusKind::Canceled),
            (deadline_exceeded, StatusKind::DeadlineExceeded),
            (already_exists, StatusKind::AlreadyExists),
            (resource_exhausted, StatusKind::ResourceExhausted),
            (failed_precondition, StatusKind::FailedPrecondition),
            (aborted, StatusKind::Aborted),
            (out_of_range, StatusKind::OutOfRange),
            (unimplemented, StatusKind::Unimplemented),
            (data_loss, StatusKind::DataLoss),
            (unavailable, StatusKind::Unavailable),
            (unauthenticated, StatusKind::Unauthenticated),
        ]
    }

    #[test]
    fn constructors_bind_their_kind() {
        for (constructor, kind) in all_constructors() {
            let err = constructor("message", Vec::new());
            assert_eq!(err.kind(), kind);
            assert_eq!(err.message(), "message");
            assert!(err.details().is_empty());
        }
    }

    #[test]
    fn every_kind_but_ok_has_a_constructor() {
        let covered: Vec<_> = all_constructors().iter().map(|(_, kind)| *kind).collect();
        assert_eq!(covered.len(), StatusKind::COUNT - 1);
        for kind in StatusKind::iter().filter(|k| *k != StatusKind::Ok) {
            assert!(covered.contains(&kind), "missing constructor for {kind}");
        }
    }

    #[test]
    fn constructor_attaches_details() {
        let violations = vec![
            FieldViolation::new("name", "required"),
            FieldViolation::new("age", "must be positive"),
        ];
        let err = invalid_args("Invalid msg", [BadRequest::new(violations).into()]);

        assert_eq!(err.details().len(), 1);
        assert_eq!(
            err.rendered_details(),
            r#"[field_violations:<field:"name" description:"required"> field_violations:<field:"age" description:"must be positive">]"#
        );
    }
}
