//! Switch-arm patterns, reduced to what exhaustiveness needs.
//!
//! Hosts translate their own pattern syntax (declaration, type, recursive,
//! and constant patterns, aliases, `var` bindings, discards) into the single
//! [`Pattern`] tree defined here:
//!
//! ```text
//! Result<int, string>.Ok ok           → Pattern::of(Ok)
//! Result<..>.Error(HttpError<..>.ExceptionError)
//!                                     → Pattern::decompose(Error, [Pattern::of(ExceptionError)])
//! _ / var x / default                 → Pattern::discard()
//! ```
//!
//! [`matched_names`] then renders the arms with the same naming function used
//! for required variants, so coverage is plain set difference.

mod matched;
mod pattern;

pub use matched::{has_top_level_discard, matched_names, NameSet};
pub use pattern::Pattern;
