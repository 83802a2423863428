//! Diagnostic system for docassert.
//!
//! Every stage error (parse, coercion, build, invocation) converts into a
//! [`Diagnostic`] carrying an [`ErrorCode`]. Codes are grouped by stage so
//! a reader can tell where a case was rejected from the code alone:
//!
//! - E1xxx: directive parse errors
//! - E2xxx: type registry and coercion errors
//! - E3xxx: test case build errors
//! - E4xxx: invocation errors

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, IntoDiagnostic, Location, Severity};
pub use error_code::ErrorCode;
