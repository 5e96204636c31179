//! Canonical type names for diagnostics and coverage comparison.
//!
//! [`TypeGraph::display_name`] is the single naming function shared by the
//! required-variant side and the matched-pattern side, so coverage is decided
//! by exact string equality.

use crate::{NamedType, TypeGraph, TypeRef};

impl TypeGraph {
    /// Format a type as `Name<Arg1, Arg2>`.
    ///
    /// A type declared inside a generic container takes the container's
    /// arguments instead of its own, so `Ok` nested in `Result<Int32, String>`
    /// renders as `Ok<Int32, String>` even though `Ok` is not generic itself.
    pub fn display_name(&self, ty: &TypeRef) -> String {
        let mut buf = String::new();
        self.display_name_into(ty, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn display_name_into(&self, ty: &TypeRef, buf: &mut String) {
        match ty {
            TypeRef::Named(named) => {
                self.push_simple_name(named, buf);
                let args = effective_args(named);
                if !args.is_empty() {
                    buf.push('<');
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            buf.push_str(", ");
                        }
                        self.display_name_into(arg, buf);
                    }
                    buf.push('>');
                }
            }
            TypeRef::Param(name) => buf.push_str(name),
            TypeRef::Array(elem) => {
                self.display_name_into(elem, buf);
                buf.push_str("[]");
            }
            TypeRef::Unresolved => buf.push('?'),
        }
    }

    /// The bare name with all generic notation stripped.
    ///
    /// Used as the "base type" label in diagnostic headlines, never for set
    /// comparison.
    pub fn unbound_name(&self, ty: &TypeRef) -> String {
        let mut buf = String::new();
        match ty {
            TypeRef::Named(named) => self.push_simple_name(named, &mut buf),
            TypeRef::Param(name) => buf.push_str(strip_arity(name)),
            TypeRef::Array(elem) => {
                buf.push_str(&self.unbound_name(elem));
                buf.push_str("[]");
            }
            TypeRef::Unresolved => buf.push('?'),
        }
        buf
    }

    fn push_simple_name(&self, named: &NamedType, buf: &mut String) {
        match self.def(named.def) {
            Ok(def) => buf.push_str(strip_arity(&def.name)),
            Err(_) => buf.push('?'),
        }
    }
}

/// Arguments used for display: those of the nearest enclosing container that
/// has any, falling back to the type's own.
fn effective_args(named: &NamedType) -> &[TypeRef] {
    if let Some(TypeRef::Named(container)) = named.container.as_deref() {
        let inherited = effective_args(container);
        if !inherited.is_empty() {
            return inherited;
        }
    }
    &named.args
}

/// Strip metadata-style arity suffixes (`Result`2` → `Result`).
fn strip_arity(name: &str) -> &str {
    name.split('`').next().unwrap_or(name)
}
