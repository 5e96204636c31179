//! Error codes for exhaustiveness diagnostics.
//!
//! Codes keep the `E####` shape with the first digit naming the phase:
//! E3xxx for pattern coverage problems, E9xxx for internal errors caused by
//! malformed host metadata.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCode {
    /// Switch on a closed hierarchy does not cover every variant
    E3001,
    /// Catch-all arm is unreachable because every variant is matched
    E3002,
    /// Host supplied malformed type metadata (cycle, bad arity, dangling id)
    E9001,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[ErrorCode::E3001, ErrorCode::E3002, ErrorCode::E9001];

    /// Get the numeric code as a string (e.g., "E3001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Check if this is a pattern coverage error (E3xxx range).
    pub fn is_pattern_error(&self) -> bool {
        matches!(self, ErrorCode::E3001 | ErrorCode::E3002)
    }

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal_error(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }

    /// Long-form explanation for `--explain`-style lookups.
    pub fn explain(self) -> Option<&'static str> {
        crate::ErrorDocs::get(self)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E3001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
