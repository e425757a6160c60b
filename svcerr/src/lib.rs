//! Canonical status errors for service layers
//!
//! ```
//! use svcerr::{BadRequest, render, translate, invalid_args};
//!
//! let err = invalid_args("Additional Message", [BadRequest::with_violation("email", "required").into()]);
//! assert_eq!(translate(&err).error.code, 400);
//! assert!(render(&err).starts_with("Code = InvalidArgument"));
//! ```

pub use svcerr_config::{Config, ResponseConfig};
pub use svcerr_core::*;
pub use svcerr_http::{
    RestError, ServiceError, Translator, extract_kind, is_status_error, render, status_of, translate,
};
