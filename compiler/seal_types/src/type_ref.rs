//! References to (possibly instantiated, possibly nested) types.

use std::hash::{Hash, Hasher};

use crate::DefId;

/// A reference to a type as it appears in a signature or a switch.
///
/// Only [`TypeRef::Named`] takes part in hierarchy analysis; the other
/// variants short-circuit to "no contribution".
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeRef {
    /// A nominal type, optionally instantiated with type arguments.
    Named(NamedType),
    /// A reference to a generic type parameter, by name.
    Param(String),
    /// An array of some element type.
    Array(Box<TypeRef>),
    /// The host could not resolve this type.
    Unresolved,
}

/// A nominal type: definition plus type arguments.
///
/// `container` records the instantiated type this one was declared inside,
/// which determines how nested leaves are displayed. It is context, not
/// identity, and is ignored by `Eq` and `Hash`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedType {
    pub def: DefId,
    pub args: Vec<TypeRef>,
    pub container: Option<Box<TypeRef>>,
}

impl PartialEq for NamedType {
    fn eq(&self, other: &Self) -> bool {
        self.def == other.def && self.args == other.args
    }
}

impl Eq for NamedType {}

impl Hash for NamedType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.def.hash(state);
        self.args.hash(state);
    }
}

impl TypeRef {
    /// A non-generic nominal type.
    pub fn named(def: DefId) -> Self {
        TypeRef::Named(NamedType {
            def,
            args: Vec::new(),
            container: None,
        })
    }

    /// A nominal type instantiated with `args`.
    pub fn generic(def: DefId, args: Vec<TypeRef>) -> Self {
        TypeRef::Named(NamedType {
            def,
            args,
            container: None,
        })
    }

    pub fn param(name: impl Into<String>) -> Self {
        TypeRef::Param(name.into())
    }

    pub fn array(elem: TypeRef) -> Self {
        TypeRef::Array(Box::new(elem))
    }

    /// Attach the type this one is declared inside. No-op for non-nominal types.
    #[must_use]
    pub fn declared_in(mut self, container: TypeRef) -> Self {
        if let TypeRef::Named(named) = &mut self {
            named.container = Some(Box::new(container));
        }
        self
    }

    #[inline]
    pub fn as_named(&self) -> Option<&NamedType> {
        match self {
            TypeRef::Named(named) => Some(named),
            _ => None,
        }
    }

    #[inline]
    pub fn def(&self) -> Option<DefId> {
        self.as_named().map(|n| n.def)
    }

    /// Type arguments of a nominal type; empty for everything else.
    pub fn args(&self) -> &[TypeRef] {
        match self {
            TypeRef::Named(named) => &named.args,
            _ => &[],
        }
    }

    /// The enclosing type, if this is a nested nominal type.
    pub fn container(&self) -> Option<&TypeRef> {
        self.as_named().and_then(|n| n.container.as_deref())
    }
}
