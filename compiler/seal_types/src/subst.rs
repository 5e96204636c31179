//! Field types of instantiated definitions.
//!
//! A definition's constructor parameters are written against its own type
//! parameters and those of every definition it is nested inside. To find the
//! concrete type of a field we bind those parameters from the `TypeRef` chain
//! (own arguments first, then each container outward) and substitute.

use crate::{NamedType, TypeError, TypeGraph, TypeRef};

type Bindings<'a> = Vec<(&'a str, &'a TypeRef)>;

impl TypeGraph {
    /// Positional field types of `ty`: the parameters of its longest
    /// constructor with type parameters substituted.
    ///
    /// Non-nominal types and definitions without constructors have no fields.
    /// Parameters that cannot be bound are left as [`TypeRef::Param`].
    pub fn field_types(&self, ty: &TypeRef) -> Result<Vec<TypeRef>, TypeError> {
        let Some(named) = ty.as_named() else {
            return Ok(Vec::new());
        };
        let def = self.def(named.def)?;
        let Some(ctor) = def.longest_constructor() else {
            return Ok(Vec::new());
        };

        let mut bindings = Bindings::new();
        self.collect_bindings(named, &mut bindings)?;

        Ok(ctor
            .params
            .iter()
            .map(|param| substitute(param, &bindings))
            .collect())
    }

    fn collect_bindings<'a>(
        &'a self,
        named: &'a NamedType,
        out: &mut Bindings<'a>,
    ) -> Result<(), TypeError> {
        let def = self.def(named.def)?;
        out.extend(
            def.type_params
                .iter()
                .map(String::as_str)
                .zip(named.args.iter()),
        );
        if let Some(TypeRef::Named(container)) = named.container.as_deref() {
            self.collect_bindings(container, out)?;
        }
        Ok(())
    }
}

/// Replace bound parameters in `ty`. The innermost binding of a name wins.
fn substitute(ty: &TypeRef, bindings: &Bindings<'_>) -> TypeRef {
    match ty {
        TypeRef::Param(name) => bindings
            .iter()
            .find(|(bound, _)| *bound == name.as_str())
            .map_or_else(|| ty.clone(), |(_, arg)| (*arg).clone()),
        TypeRef::Named(named) => TypeRef::Named(NamedType {
            def: named.def,
            args: named
                .args
                .iter()
                .map(|arg| substitute(arg, bindings))
                .collect(),
            container: named
                .container
                .as_deref()
                .map(|c| Box::new(substitute(c, bindings))),
        }),
        TypeRef::Array(elem) => TypeRef::array(substitute(elem, bindings)),
        TypeRef::Unresolved => TypeRef::Unresolved,
    }
}
