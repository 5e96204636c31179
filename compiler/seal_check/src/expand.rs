//! Variant expansion: from a closed hierarchy to the names that must be matched.
//!
//! # Algorithm
//!
//! 1. `leaves`: walk `immediate_derived` depth-first, instantiating each
//!    derived definition with its parent's arguments, and collect every
//!    definition that is not itself a closed hierarchy.
//! 2. `parameterized_fields`: for each leaf, find the fields whose type is a
//!    closed hierarchy with more than one leaf. Other fields cannot affect
//!    coverage.
//! 3. `required_names`: one name per leaf, or one per combination of its
//!    parameterized fields' leaves (`Leaf with A, X`).
//!
//! Field variants are expanded one level only: `Error with ExceptionError`
//! does not go on to expand `ExceptionError`'s own fields.
//!
//! A hierarchy with a generic variant its parent cannot instantiate (e.g.,
//! `Box<T>` under a non-generic `Shape`) has no finite set of names, so it
//! is treated like any other unresolvable type: nothing is required.

use seal_patterns::NameSet;
use seal_types::{TypeGraph, TypeRef};

use crate::depth::{ensure_sufficient_stack, Depth};
use crate::{CheckConfig, CheckError};

/// A field whose closed-hierarchy type forces combinatorial expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterizedField {
    /// Position among the leaf's fields.
    pub index: usize,
    /// Leaves of the field's type, in hierarchy order.
    pub variants: Vec<TypeRef>,
}

/// Expands closed hierarchies over a borrowed [`TypeGraph`].
#[derive(Copy, Clone, Debug)]
pub struct Expander<'g> {
    graph: &'g TypeGraph,
    max_depth: usize,
}

impl<'g> Expander<'g> {
    pub fn new(graph: &'g TypeGraph, config: &CheckConfig) -> Self {
        Expander {
            graph,
            max_depth: config.max_depth,
        }
    }

    /// Whether `ty` is a closed hierarchy with concrete type arguments.
    ///
    /// Unbound generics are not resolvable: without arguments there is no
    /// way to name the variants.
    fn is_expandable(&self, ty: &TypeRef) -> bool {
        self.graph.is_closed(ty) && !self.graph.is_unbound(ty)
    }

    fn has_unbound(&self, leaves: &[TypeRef]) -> bool {
        leaves.iter().any(|leaf| self.graph.is_unbound(leaf))
    }

    /// Leaf variants of `ty`, or `[ty]` if it is not an expandable hierarchy.
    pub fn leaves(&self, ty: &TypeRef) -> Result<Vec<TypeRef>, CheckError> {
        let mut out = Vec::new();
        self.collect_leaves(ty, Depth::root(self.max_depth), &mut out)?;
        Ok(out)
    }

    fn collect_leaves(
        &self,
        ty: &TypeRef,
        depth: Depth,
        out: &mut Vec<TypeRef>,
    ) -> Result<(), CheckError> {
        let Some(id) = ty.def().filter(|_| self.is_expandable(ty)) else {
            out.push(ty.clone());
            return Ok(());
        };
        let depth = depth.descend(self.graph, ty)?;

        ensure_sufficient_stack(|| -> Result<(), CheckError> {
            for &derived in self.graph.immediate_derived(id) {
                let instance = self.graph.instantiate_derived(ty, derived)?;
                self.collect_leaves(&instance, depth, out)?;
            }
            Ok(())
        })
    }

    /// Fields of `leaf` whose type has more than one leaf variant, all of
    /// them bound.
    pub fn parameterized_fields(
        &self,
        leaf: &TypeRef,
    ) -> Result<Vec<ParameterizedField>, CheckError> {
        let mut fields = Vec::new();
        for (index, field) in self.graph.field_types(leaf)?.iter().enumerate() {
            if field.as_named().is_none() {
                continue;
            }
            let variants = self.leaves(field)?;
            if variants.len() > 1 && !self.has_unbound(&variants) {
                fields.push(ParameterizedField { index, variants });
            }
        }
        Ok(fields)
    }

    /// Every canonical name a switch on `ty` must match.
    ///
    /// Empty when `ty` is not an expandable closed hierarchy: such a switch
    /// cannot be checked as a sum type.
    #[tracing::instrument(level = "trace", skip_all, fields(ty = %self.graph.display_name(ty)))]
    pub fn required_names(&self, ty: &TypeRef) -> Result<NameSet, CheckError> {
        let mut names = NameSet::default();
        if !self.is_expandable(ty) {
            tracing::trace!("not a resolvable closed hierarchy");
            return Ok(names);
        }

        let leaves = self.leaves(ty)?;
        if self.has_unbound(&leaves) {
            tracing::trace!("hierarchy has an unbound generic variant");
            return Ok(names);
        }

        for leaf in leaves {
            let base = self.graph.display_name(&leaf);
            let fields = self.parameterized_fields(&leaf)?;
            if fields.is_empty() {
                names.insert(base);
                continue;
            }

            let choices: Vec<Vec<String>> = fields
                .iter()
                .map(|field| {
                    field
                        .variants
                        .iter()
                        .map(|v| self.graph.display_name(v))
                        .collect()
                })
                .collect();
            tracing::trace!(leaf = %base, fields = choices.len(), "expanding field combinations");
            let mut chosen = Vec::with_capacity(choices.len());
            push_combinations(&base, &choices, &mut chosen, &mut names);
        }

        Ok(names)
    }
}

/// Insert `base with c1, c2, ...` for every choice of one name per field.
fn push_combinations<'c>(
    base: &str,
    choices: &'c [Vec<String>],
    chosen: &mut Vec<&'c str>,
    out: &mut NameSet,
) {
    match choices.split_first() {
        None => {
            out.insert(format!("{base} with {}", chosen.join(", ")));
        }
        Some((field, rest)) => {
            for variant in field {
                chosen.push(variant);
                push_combinations(base, rest, chosen, out);
                chosen.pop();
            }
        }
    }
}
