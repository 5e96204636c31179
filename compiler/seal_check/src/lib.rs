//! Exhaustiveness checking for switches over sealed type hierarchies.
//!
//! Given the type a switch is on and its arms, decide whether every variant
//! of the type's closed hierarchy is matched, including combinations of
//! variants nested in fields, and whether a catch-all arm is dead.
//!
//! # Pipeline Position
//!
//! ```text
//! TypeGraph ─→ Expander::required_names ─┐
//!                                        ├─→ Checker::check_switch → Option<Diagnostic>
//! arms ─────→ matched_names ─────────────┘
//! ```
//!
//! # What Happens During a Check
//!
//! 1. **Expansion** (`expand`): the scrutinee's hierarchy is flattened to its
//!    leaf variants, generic arguments flowing down from parent to child.
//!    Leaves with fields that are themselves closed hierarchies expand into
//!    the cartesian product of those fields' variants.
//! 2. **Matching** (`seal_patterns`): each non-discard arm is rendered with
//!    the same naming function.
//! 3. **Decision** (`checker`): `missing = required - matched`; report when
//!    something is missing or a catch-all arm is present anyway.
//!
//! The engine is pure: no I/O, no retained state between calls. `tracing`
//! events describe decisions but never influence them.

mod batch;
mod checker;
mod config;
mod depth;
mod error;
mod expand;
#[cfg(test)]
mod test_graph;

use std::sync::Once;

pub use checker::{Checker, SwitchInput};
pub use config::{CheckConfig, DEFAULT_MAX_DEPTH, MAX_DEPTH_ENV};
pub use error::CheckError;
pub use expand::{Expander, ParameterizedField};

pub use seal_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Severity};
pub use seal_patterns::{NameSet, Pattern};
pub use seal_types::{TypeGraph, TypeRef};

/// Check one switch with the default configuration.
pub fn check_switch(graph: &TypeGraph, input: &SwitchInput) -> Result<Option<Diagnostic>, CheckError> {
    Checker::new(graph).check_switch(input)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=seal_check=trace` to see every expansion step as a tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}
