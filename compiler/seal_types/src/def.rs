//! Type definitions: the unparameterized shape behind a [`TypeRef`].

use std::fmt;

use crate::TypeRef;

/// Index of a [`TypeDef`] inside a [`TypeGraph`](crate::TypeGraph).
///
/// Definitions are compared by index; two `DefId`s from the same graph are
/// equal iff they name the same declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct DefId(u32);

impl DefId {
    /// Create an id from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for DefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "def#{}", self.0)
    }
}

/// Accessibility of a constructor as seen from outside the declaring type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

impl Visibility {
    #[inline]
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// A constructor-like member of a definition.
///
/// Only the parameter list matters for exhaustiveness: the parameters of the
/// longest constructor are treated as the definition's positional fields.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constructor {
    pub visibility: Visibility,
    /// Static constructors never make a type publicly constructible.
    pub is_static: bool,
    /// Parameter types, in declaration order.
    pub params: Vec<TypeRef>,
}

impl Constructor {
    pub fn public(params: Vec<TypeRef>) -> Self {
        Constructor {
            visibility: Visibility::Public,
            is_static: false,
            params,
        }
    }

    pub fn private(params: Vec<TypeRef>) -> Self {
        Constructor {
            visibility: Visibility::Private,
            is_static: false,
            params,
        }
    }

    pub fn with_visibility(visibility: Visibility, params: Vec<TypeRef>) -> Self {
        Constructor {
            visibility,
            is_static: false,
            params,
        }
    }

    /// Mark this constructor as a static (type) initializer.
    #[must_use]
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Whether this constructor lets outside code create instances.
    #[inline]
    pub fn is_public_instance(&self) -> bool {
        !self.is_static && self.visibility.is_public()
    }
}

/// A type declaration as supplied by the host.
///
/// `supertype` and `container` together encode derivation: a definition is an
/// immediate derived type of `P` when it is declared inside `P` and its
/// supertype, stripped of type arguments, is `P`.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDef {
    /// Simple name, without generic arity notation.
    pub name: String,
    /// Generic type parameter names (e.g., `TSuccess` in `Result<TSuccess, TFailure>`).
    pub type_params: Vec<String>,
    pub constructors: Vec<Constructor>,
    /// Declared base type, if any.
    pub supertype: Option<TypeRef>,
    /// The definition this one is nested inside.
    pub container: Option<DefId>,
}

impl TypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        TypeDef {
            name: name.into(),
            type_params: Vec::new(),
            constructors: Vec::new(),
            supertype: None,
            container: None,
        }
    }

    #[must_use]
    pub fn with_type_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_params = params.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_constructor(mut self, ctor: Constructor) -> Self {
        self.constructors.push(ctor);
        self
    }

    /// Declare this definition as nested inside `container`, deriving from `supertype`.
    #[must_use]
    pub fn derived_from(mut self, container: DefId, supertype: TypeRef) -> Self {
        self.container = Some(container);
        self.supertype = Some(supertype);
        self
    }

    /// Declare this definition as nested inside `container` without deriving from it.
    #[must_use]
    pub fn nested_in(mut self, container: DefId) -> Self {
        self.container = Some(container);
        self
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.type_params.len()
    }

    /// Whether any non-static constructor is publicly accessible.
    pub fn has_public_instance_constructor(&self) -> bool {
        self.constructors.iter().any(Constructor::is_public_instance)
    }

    /// The constructor with the most parameters; the first one wins ties.
    pub fn longest_constructor(&self) -> Option<&Constructor> {
        self.constructors.iter().fold(None, |best, ctor| match best {
            Some(b) if b.params.len() >= ctor.params.len() => Some(b),
            _ => Some(ctor),
        })
    }
}
