//! Type model for sealed-hierarchy exhaustiveness checking.
//!
//! The host compiler resolves its own symbols and hands us an explicit,
//! immutable snapshot of the types involved in a switch: a [`TypeGraph`] of
//! [`TypeDef`]s plus [`TypeRef`]s that point into it. Everything downstream
//! (variant expansion, pattern naming, the checker itself) is a pure query
//! over this snapshot.
//!
//! # Pipeline Position
//!
//! ```text
//! Host symbols → **TypeGraph** → VariantExpansion → ExhaustivenessChecker
//! ```
//!
//! # Closed Hierarchies
//!
//! A definition is a *closed hierarchy* when it exposes no public instance
//! constructor and has at least one nested definition deriving from it:
//!
//! ```text
//! abstract record Result<TSuccess, TFailure> {
//!     private Result() {}
//!     record Ok(TSuccess Value) : Result<TSuccess, TFailure>;
//!     record Error(TFailure Failure) : Result<TSuccess, TFailure>;
//! }
//! ```
//!
//! Derived definitions are always strictly nested inside their parent, so a
//! well-formed graph never contains a derivation cycle.

mod def;
mod error;
#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;
mod format;
mod graph;
mod subst;
mod type_ref;

pub use def::{Constructor, DefId, TypeDef, Visibility};
pub use error::TypeError;
pub use graph::{TypeGraph, TypeGraphBuilder};
pub use type_ref::{NamedType, TypeRef};
