//! Diagnostics produced by the exhaustiveness checker.
//!
//! The checker hands the host at most one [`Diagnostic`] per switch
//! construct. The host decides where to attach it (the switch's source
//! location) and how to render it; [`Diagnostic`]'s `Display` impl gives a
//! plain terminal rendering for hosts that don't have their own.
//!
//! Message text is produced by [`main_message`] and [`detail_message`] so the
//! exact wording lives in one place.

mod diagnostic;
mod error_code;
pub mod errors;
mod format;

pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use format::{detail_message, main_message};
