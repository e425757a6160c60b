//! Translation layer for canonical status errors
//!
//! Turns any error into the HTTP-facing [`ServiceError`] body, mapping
//! status kinds through a fixed table and falling back to a generic
//! internal error for everything else.

#![allow(clippy::must_use_candidate)]

pub mod rest;
mod translate;

pub use rest::{RestError, ServiceError};
pub use translate::{Translator, extract_kind, is_status_error, render, status_of, translate};
