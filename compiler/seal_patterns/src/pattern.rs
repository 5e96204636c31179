//! The abstract pattern tree.

use seal_types::{TypeGraph, TypeRef};

/// One switch arm (or one positional sub-pattern of an arm).
///
/// A pattern without a target type is a *discard*: it matches anything and
/// names no variant. `sub_patterns`, when present, decompose the target's
/// fields positionally.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    pub target: Option<TypeRef>,
    pub sub_patterns: Option<Vec<Pattern>>,
}

impl Pattern {
    /// `_`, `var x`, `default`.
    pub fn discard() -> Self {
        Pattern::default()
    }

    /// A type or declaration pattern with no decomposition.
    pub fn of(target: TypeRef) -> Self {
        Pattern {
            target: Some(target),
            sub_patterns: None,
        }
    }

    /// A positional decomposition of `target`'s fields.
    pub fn decompose(target: TypeRef, sub_patterns: Vec<Pattern>) -> Self {
        Pattern {
            target: Some(target),
            sub_patterns: Some(sub_patterns),
        }
    }

    /// A decomposition that does not name its type (e.g., `var (a, b)`).
    ///
    /// Without a target this is still a discard at its own position.
    pub fn positional(sub_patterns: Vec<Pattern>) -> Self {
        Pattern {
            target: None,
            sub_patterns: Some(sub_patterns),
        }
    }

    #[inline]
    pub fn is_discard(&self) -> bool {
        self.target.is_none()
    }

    /// The canonical name this pattern covers, or `None` for a discard.
    ///
    /// Sub-patterns that name a hierarchy member contribute that member, in
    /// sub-pattern order: `Error<String, HttpError<String>> with
    /// ExceptionError<String>`. Discards, bindings, and sub-patterns naming
    /// ordinary types contribute nothing, which leaves the plain
    /// `display_name` of the target.
    pub fn canonical_name(&self, graph: &TypeGraph) -> Option<String> {
        let target = self.target.as_ref()?;
        let mut name = graph.display_name(target);

        let nested: Vec<&TypeRef> = self
            .sub_patterns
            .iter()
            .flatten()
            .filter_map(|sub| sub.nested_variant(graph))
            .collect();

        if !nested.is_empty() {
            name.push_str(" with ");
            for (i, variant) in nested.into_iter().enumerate() {
                if i > 0 {
                    name.push_str(", ");
                }
                graph.display_name_into(variant, &mut name);
            }
        }

        Some(name)
    }

    /// The hierarchy member this sub-pattern pins down, if any.
    ///
    /// Only the sub-pattern's own target counts; its further decomposition
    /// narrows values but not the variant.
    fn nested_variant<'p>(&'p self, graph: &TypeGraph) -> Option<&'p TypeRef> {
        self.target
            .as_ref()
            .filter(|target| graph.is_hierarchy_member(target))
    }
}
