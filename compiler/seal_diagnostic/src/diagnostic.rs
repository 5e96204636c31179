//! The diagnostic record handed back to the host.

use std::fmt;

use crate::format::{detail_message, main_message};
use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// What the checker found wrong with a switch.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticKind {
    /// Some required variant is not matched by any arm.
    NotExhaustive,
    /// Every variant is matched, yet a catch-all arm is present.
    RedundantDefault,
}

impl DiagnosticKind {
    pub fn code(self) -> ErrorCode {
        match self {
            DiagnosticKind::NotExhaustive => ErrorCode::E3001,
            DiagnosticKind::RedundantDefault => ErrorCode::E3002,
        }
    }
}

/// A coverage diagnostic for one switch construct.
///
/// `matched` and `missing` are kept sorted so that two diagnostics built from
/// the same sets compare equal regardless of iteration order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub kind: DiagnosticKind,
    /// `"Switch on {base} is not exhaustive"` or `"... has redundant default arm"`.
    pub main_message: String,
    /// `"Matched: ...; Missing: ..."`; empty when both sets are empty.
    pub detail_message: String,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// Human-readable hints for fixing the switch.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Build a coverage diagnostic for a switch on `base_name`.
    ///
    /// The kind follows from `missing`: non-empty means the switch is not
    /// exhaustive, empty means the only problem is a redundant catch-all.
    pub fn coverage<I, J>(base_name: &str, matched: I, missing: J) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        let mut matched: Vec<String> = matched.into_iter().collect();
        let mut missing: Vec<String> = missing.into_iter().collect();
        matched.sort_unstable();
        missing.sort_unstable();

        let kind = if missing.is_empty() {
            DiagnosticKind::RedundantDefault
        } else {
            DiagnosticKind::NotExhaustive
        };

        Diagnostic {
            code: kind.code(),
            severity: Severity::Warning,
            kind,
            main_message: main_message(base_name, &missing),
            detail_message: detail_message(&matched, &missing),
            matched,
            missing,
            suggestions: Vec::new(),
        }
    }

    /// Add a suggestion for fixing the switch.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Escalate to an error (for hosts that treat coverage as fatal).
    pub fn into_error(mut self) -> Self {
        self.severity = Severity::Error;
        self
    }

    pub fn is_not_exhaustive(&self) -> bool {
        matches!(self.kind, DiagnosticKind::NotExhaustive)
    }

    pub fn is_redundant_default(&self) -> bool {
        matches!(self.kind, DiagnosticKind::RedundantDefault)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.main_message)?;

        if !self.detail_message.is_empty() {
            write!(f, "\n  = note: {}", self.detail_message)?;
        }

        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }

        Ok(())
    }
}
