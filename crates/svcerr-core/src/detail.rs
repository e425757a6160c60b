//! Structured error details drawn from the `google.rpc` vocabulary
//!
//! The payload types are re-exported from `tonic-types` so services never
//! need to import it directly. [`DetailRecord`] is the closed set of
//! payloads that can be attached to a [`StatusError`](crate::StatusError).

use std::fmt::{self, Write as _};
use std::time::Duration;

use thiserror::Error;
use tonic_types::ErrorDetail;

pub use tonic_types::{
    BadRequest, DebugInfo, FieldViolation, Help, HelpLink, LocalizedMessage, PreconditionFailure,
    PreconditionViolation, QuotaFailure, QuotaViolation, RequestInfo, ResourceInfo, RetryInfo,
};

/// Prefix of the type URL carried by encoded details
pub const TYPE_URL_PREFIX: &str = "type.googleapis.com/";

/// Largest number of seconds a `google.protobuf.Duration` may hold
pub const MAX_DURATION_SECONDS: i64 = 315_576_000_000;

/// A detail record could not be attached to a status
#[derive(Debug, Error)]
pub enum DetailError {
    /// The delay cannot be represented as a `google.protobuf.Duration`
    #[error("{type_name}: retry delay of {delay:?} does not fit a protobuf duration")]
    DurationOutOfRange { type_name: &'static str, delay: Duration },
}

/// Capability shared by every attachable detail payload
pub trait Detail {
    /// Fully qualified protobuf message name, e.g. `google.rpc.BadRequest`
    fn type_name(&self) -> &'static str;

    /// Write the payload in compact protobuf text form
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Verify the payload can be encoded on the wire
    ///
    /// # Errors
    ///
    /// Returns an error if a field holds a value the wire format cannot carry
    fn check(&self) -> Result<(), DetailError> {
        Ok(())
    }
}

/// Writes `name:value` pairs separated by spaces, skipping empty strings
struct TextWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    empty: bool,
}

impl<'a, 'b> TextWriter<'a, 'b> {
    const fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self { f, empty: true }
    }

    fn separate(&mut self) -> fmt::Result {
        if self.empty {
            self.empty = false;
            Ok(())
        } else {
            self.f.write_char(' ')
        }
    }

    fn string(&mut self, name: &str, value: &str) -> fmt::Result {
        if value.is_empty() {
            return Ok(());
        }
        self.separate()?;
        write!(self.f, "{name}:\"")?;
        write_escaped(self.f, value)?;
        self.f.write_char('"')
    }

    fn number(&mut self, name: &str, value: u64) -> fmt::Result {
        if value == 0 {
            return Ok(());
        }
        self.separate()?;
        write!(self.f, "{name}:{value}")
    }

    fn message<F>(&mut self, name: &str, fields: F) -> fmt::Result
    where
        F: FnOnce(&mut TextWriter<'_, 'b>) -> fmt::Result,
    {
        self.separate()?;
        write!(self.f, "{name}:<")?;
        fields(&mut TextWriter::new(&mut *self.f))?;
        self.f.write_char('>')
    }

    /// Marks records without any populated field
    fn finish(self) -> fmt::Result {
        if self.empty { self.f.write_str("<>") } else { Ok(()) }
    }
}

/// Escape a string the way protobuf text format does
///
/// Quotes, backslashes and the usual whitespace escapes are backslashed,
/// other control characters become three-digit octal escapes. Printable
/// non-ASCII text is written as is.
fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_ascii_control() => write!(f, "\\{:03o}", u32::from(c))?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

impl Detail for BadRequest {
    fn type_name(&self) -> &'static str {
        "google.rpc.BadRequest"
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = TextWriter::new(f);
        for violation in &self.field_violations {
            w.message("field_violations", |w| {
                w.string("field", &violation.field)?;
                w.string("description", &violation.description)
            })?;
        }
        w.finish()
    }
}

impl Detail for DebugInfo {
    fn type_name(&self) -> &'static str {
        "google.rpc.DebugInfo"
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = TextWriter::new(f);
        for entry in &self.stack_entries {
            w.string("stack_entries", entry)?;
        }
        w.string("detail", &self.detail)?;
        w.finish()
    }
}

impl Detail for RetryInfo {
    fn type_name(&self) -> &'static str {
        "google.rpc.RetryInfo"
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = TextWriter::new(f);
        if let Some(delay) = self.retry_delay {
            w.message("retry_delay", |w| {
                w.number("seconds", delay.as_secs())?;
                w.number("nanos", u64::from(delay.subsec_nanos()))
            })?;
        }
        w.finish()
    }

    fn check(&self) -> Result<(), DetailError> {
        if let Some(delay) = self.retry_delay
            && !prost_types::Duration::try_from(delay).is_ok_and(|d| d.seconds <= MAX_DURATION_SECONDS)
        {
            return Err(DetailError::DurationOutOfRange {
                type_name: self.type_name(),
                delay,
            });
        }
        Ok(())
    }
}

impl Detail for QuotaFailure {
    fn type_name(&self) -> &'static str {
        "google.rpc.QuotaFailure"
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = TextWriter::new(f);
        for violation in &self.violations {
            w.message("violations", |w| {
                w.string("subject", &violation.subject)?;
                w.string("description", &violation.description)
            })?;
        }
        w.finish()
    }
}

impl Detail for PreconditionFailure {
    fn type_name(&self) -> &'static str {
        "google.rpc.PreconditionFailure"
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = TextWriter::new(f);
        for violation in &self.violations {
            w.message("violations", |w| {
                w.string("type", &violation.r#type)?;
                w.string("subject", &violation.subject)?;
                w.string("description", &violation.description)
            })?;
        }
        w.finish()
    }
}

impl Detail for RequestInfo {
    fn type_name(&self) -> &'static str {
        "google.rpc.RequestInfo"
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = TextWriter::new(f);
        w.string("request_id", &self.request_id)?;
        w.string("serving_data", &self.serving_data)?;
        w.finish()
    }
}

impl Detail for ResourceInfo {
    fn type_name(&self) -> &'static str {
        "google.rpc.ResourceInfo"
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = TextWriter::new(f);
        w.string("resource_type", &self.resource_type)?;
        w.string("resource_name", &self.resource_name)?;
        w.string("owner", &self.owner)?;
        w.string("description", &self.description)?;
        w.finish()
    }
}

impl Detail for Help {
    fn type_name(&self) -> &'static str {
        "google.rpc.Help"
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = TextWriter::new(f);
        for link in &self.links {
            w.message("links", |w| {
                w.string("description", &link.description)?;
                w.string("url", &link.url)
            })?;
        }
        w.finish()
    }
}

impl Detail for LocalizedMessage {
    fn type_name(&self) -> &'static str {
        "google.rpc.LocalizedMessage"
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = TextWriter::new(f);
        w.string("locale", &self.locale)?;
        w.string("message", &self.message)?;
        w.finish()
    }
}

macro_rules! detail_records {
    ($($variant:ident),* $(,)?) => {
        /// A structured payload attached to a status error
        #[derive(Debug, Clone)]
        pub enum DetailRecord {
            $($variant($variant),)*
        }

        impl DetailRecord {
            /// The payload behind this record
            pub fn as_detail(&self) -> &dyn Detail {
                match self {
                    $(Self::$variant(inner) => inner,)*
                }
            }
        }

        $(
            impl From<$variant> for DetailRecord {
                fn from(inner: $variant) -> Self {
                    Self::$variant(inner)
                }
            }
        )*

        impl From<DetailRecord> for ErrorDetail {
            fn from(record: DetailRecord) -> Self {
                match record {
                    $(DetailRecord::$variant(inner) => Self::$variant(inner),)*
                }
            }
        }

        impl DetailRecord {
            /// Convert a decoded `tonic-types` detail into a record
            ///
            /// Returns `None` for payloads outside the supported vocabulary
            /// (such as `ErrorInfo`).
            pub fn from_error_detail(detail: ErrorDetail) -> Option<Self> {
                match detail {
                    $(ErrorDetail::$variant(inner) => Some(Self::$variant(inner)),)*
                    _ => None,
                }
            }
        }
    };
}

detail_records!(
    BadRequest,
    DebugInfo,
    RetryInfo,
    QuotaFailure,
    PreconditionFailure,
    RequestInfo,
    ResourceInfo,
    Help,
    LocalizedMessage,
);

impl DetailRecord {
    /// Fully qualified protobuf message name
    pub fn type_name(&self) -> &'static str {
        self.as_detail().type_name()
    }

    /// Type URL used when the record is packed into a `google.protobuf.Any`
    pub fn type_url(&self) -> String {
        format!("{TYPE_URL_PREFIX}{}", self.type_name())
    }

    /// Verify the record can be encoded
    ///
    /// # Errors
    ///
    /// Returns an error if the payload holds a value the wire format cannot carry
    pub fn check(&self) -> Result<(), DetailError> {
        self.as_detail().check()
    }
}

impl fmt::Display for DetailRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_detail().render(f)
    }
}

/// Render a detail sequence as `[first, second]`, `[]` when empty
pub fn render_details(details: &[DetailRecord]) -> String {
    let mut out = String::from("[");
    for (i, record) in details.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing to a String cannot fail
        let _ = write!(out, "{record}");
    }
    out.push(']');
    out
}
