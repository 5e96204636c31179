//! Host contract violations.
//!
//! A well-formed type graph never produces these. They exist so malformed
//! metadata fails fast instead of looping or silently reporting nothing.

use seal_diagnostic::ErrorCode;
use seal_types::TypeError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// Hierarchy nesting exceeded [`CheckConfig::max_depth`](crate::CheckConfig::max_depth).
    #[error(
        "hierarchy of `{ty}` nests deeper than {limit} levels (the depth limit); \
         raise it with SEAL_MAX_DEPTH if the nesting is intended, otherwise the \
         type metadata may be cyclic"
    )]
    DepthExceeded { ty: String, limit: usize },

    #[error(transparent)]
    Type(#[from] TypeError),
}

impl CheckError {
    /// The diagnostic code a host should report this under.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::E9001
    }
}
