//! Matched-name sets.

use rustc_hash::FxHashSet;
use seal_types::TypeGraph;

use crate::Pattern;

/// A set of canonical variant names.
pub type NameSet = FxHashSet<String>;

/// Canonical names covered by the non-discard top-level arms.
///
/// Arm order does not matter; duplicates collapse.
pub fn matched_names(graph: &TypeGraph, patterns: &[Pattern]) -> NameSet {
    let names: NameSet = patterns
        .iter()
        .filter(|p| !p.is_discard())
        .filter_map(|p| p.canonical_name(graph))
        .collect();
    tracing::trace!(arms = patterns.len(), matched = names.len(), "collected matched names");
    names
}

/// Whether any top-level arm is a discard.
///
/// Hosts with their own catch-all rule (e.g., an arm matching the declared
/// type with no narrowing) compute `has_catch_all` themselves; this is the
/// default rule. Nested discards never count.
pub fn has_top_level_discard(patterns: &[Pattern]) -> bool {
    patterns.iter().any(Pattern::is_discard)
}
