//! The immutable type graph and its builder.
//!
//! # Design
//!
//! - Arena storage: definitions live in a `Vec`, addressed by [`DefId`]
//! - Derivation edges are computed once in [`TypeGraphBuilder::finish`]
//! - No interior mutability: a finished graph is `Send + Sync` and can be
//!   shared across threads checking different switches

use rustc_hash::FxHashMap;

use crate::{DefId, TypeDef, TypeError, TypeRef};

/// Immutable snapshot of every definition relevant to one analysis unit.
#[derive(Clone, Debug, Default)]
pub struct TypeGraph {
    defs: Vec<TypeDef>,
    /// Immediate derived definitions, in declaration order.
    derived: Vec<Vec<DefId>>,
    /// First definition registered under each simple name.
    by_name: FxHashMap<String, DefId>,
}

impl TypeGraph {
    /// Look up a definition.
    pub fn def(&self, id: DefId) -> Result<&TypeDef, TypeError> {
        self.defs.get(id.index()).ok_or(TypeError::UnknownDef(id))
    }

    /// Find a definition by simple name (the first registered one wins).
    pub fn lookup(&self, name: &str) -> Option<DefId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterate over all definitions with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (DefId, &TypeDef)> {
        self.defs.iter().enumerate().map(|(i, def)| (def_id(i), def))
    }

    /// Definitions nested in `id` whose supertype is `id`, in declaration order.
    pub fn immediate_derived(&self, id: DefId) -> &[DefId] {
        self.derived.get(id.index()).map_or(&[], Vec::as_slice)
    }

    /// A definition is a closed hierarchy when outside code cannot construct
    /// it directly and at least one nested definition derives from it.
    pub fn is_closed_hierarchy(&self, id: DefId) -> bool {
        match self.defs.get(id.index()) {
            Some(def) => {
                !def.has_public_instance_constructor() && !self.immediate_derived(id).is_empty()
            }
            None => false,
        }
    }

    /// Whether `ty` is a nominal type whose definition is a closed hierarchy.
    pub fn is_closed(&self, ty: &TypeRef) -> bool {
        ty.def().is_some_and(|id| self.is_closed_hierarchy(id))
    }

    /// A generic nominal type that was not given a full set of type arguments.
    ///
    /// Hierarchies of unbound types are not resolvable: without concrete
    /// arguments there is no way to name the variants that must be covered.
    pub fn is_unbound(&self, ty: &TypeRef) -> bool {
        match ty.as_named() {
            Some(named) => self
                .defs
                .get(named.def.index())
                .is_some_and(|def| def.arity() > 0 && named.args.len() != def.arity()),
            None => false,
        }
    }

    /// Instantiate a derived definition in the context of its parent type.
    ///
    /// A derived definition with the parent's arity receives the parent's
    /// arguments in order. A non-generic derived definition is returned
    /// unparameterized: its references to the parent's type parameters are
    /// fixed by nesting and resolved through the `container` link.
    ///
    /// Any other generic derived definition (e.g., `Box<T>` under a
    /// non-generic `Shape`) has arguments the parent cannot supply. It is
    /// returned without arguments, which [`is_unbound`](Self::is_unbound)
    /// reports.
    pub fn instantiate_derived(
        &self,
        parent: &TypeRef,
        derived: DefId,
    ) -> Result<TypeRef, TypeError> {
        let def = self.def(derived)?;
        let parent_args = parent.args();

        let instance = if def.arity() > 0 && def.arity() == parent_args.len() {
            TypeRef::generic(derived, parent_args.to_vec())
        } else {
            TypeRef::named(derived)
        };

        Ok(instance.declared_in(parent.clone()))
    }

    /// Whether `ty` is a concrete member of a closed hierarchy: a non-closed
    /// nominal type declared inside, and deriving from, a closed definition.
    pub fn is_hierarchy_member(&self, ty: &TypeRef) -> bool {
        let Some(id) = ty.def() else {
            return false;
        };
        let Ok(def) = self.def(id) else {
            return false;
        };
        if self.is_closed_hierarchy(id) {
            return false;
        }
        def.container.is_some_and(|parent| {
            self.is_closed_hierarchy(parent) && self.immediate_derived(parent).contains(&id)
        })
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "builder rejects graphs with more than u32::MAX definitions"
)]
fn def_id(index: usize) -> DefId {
    DefId::from_raw(index as u32)
}

/// Collects definitions and validates them into a [`TypeGraph`].
///
/// Ids are handed out in insertion order, so a definition can refer to any
/// id returned earlier, or reserved with [`TypeGraphBuilder::next_id`].
#[derive(Debug, Default)]
pub struct TypeGraphBuilder {
    defs: Vec<TypeDef>,
}

impl TypeGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next call to [`add`](Self::add) will return.
    pub fn next_id(&self) -> DefId {
        def_id(self.defs.len())
    }

    pub fn add(&mut self, def: TypeDef) -> DefId {
        let id = self.next_id();
        self.defs.push(def);
        id
    }

    /// Shorthand for a plain, publicly constructible leaf type such as `Int32`.
    pub fn add_simple(&mut self, name: impl Into<String>) -> DefId {
        self.add(TypeDef::new(name))
    }

    /// Patch a definition after it was added (e.g., to add a constructor that
    /// refers to a type declared later).
    pub fn def_mut(&mut self, id: DefId) -> Option<&mut TypeDef> {
        self.defs.get_mut(id.index())
    }

    /// Validate references and compute derivation edges.
    pub fn finish(self) -> Result<TypeGraph, TypeError> {
        let len = self.defs.len();
        if u32::try_from(len).is_err() {
            return Err(TypeError::UnknownDef(DefId::from_raw(u32::MAX)));
        }

        let check = |id: DefId| {
            if id.index() < len {
                Ok(())
            } else {
                Err(TypeError::UnknownDef(id))
            }
        };

        let mut derived = vec![Vec::new(); len];
        let mut by_name = FxHashMap::default();

        for (i, def) in self.defs.iter().enumerate() {
            let id = def_id(i);
            by_name.entry(def.name.clone()).or_insert(id);

            if let Some(container) = def.container {
                check(container)?;
            }
            for ctor in &def.constructors {
                for param in &ctor.params {
                    validate_ref(param, &check)?;
                }
            }
            let Some(supertype) = &def.supertype else {
                continue;
            };
            validate_ref(supertype, &check)?;

            if supertype.def() == Some(id) {
                return Err(TypeError::SelfDerived {
                    name: def.name.clone(),
                });
            }
            if let (Some(container), Some(base)) = (def.container, supertype.def()) {
                if container == base {
                    derived[container.index()].push(id);
                }
            }
        }

        Ok(TypeGraph {
            defs: self.defs,
            derived,
            by_name,
        })
    }
}

fn validate_ref(ty: &TypeRef, check: &impl Fn(DefId) -> Result<(), TypeError>) -> Result<(), TypeError> {
    match ty {
        TypeRef::Named(named) => {
            check(named.def)?;
            for arg in &named.args {
                validate_ref(arg, check)?;
            }
            if let Some(container) = &named.container {
                validate_ref(container, check)?;
            }
            Ok(())
        }
        TypeRef::Array(elem) => validate_ref(elem, check),
        TypeRef::Param(_) | TypeRef::Unresolved => Ok(()),
    }
}
