//! Recursion limits for hierarchy expansion.
//!
//! Two separate concerns:
//!
//! - **Logical depth**: [`Depth`] counts closed-hierarchy levels and turns a
//!   runaway (cyclic) expansion into [`CheckError::DepthExceeded`].
//! - **Native stack**: [`ensure_sufficient_stack`] grows the stack on demand
//!   so a legitimately deep hierarchy under a generous limit cannot overflow.

use seal_types::{TypeGraph, TypeRef};

use crate::CheckError;

/// Minimum stack space to keep available (100KB red zone).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Current nesting level of a hierarchy walk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Depth {
    level: usize,
    limit: usize,
}

impl Depth {
    pub(crate) fn root(limit: usize) -> Self {
        Depth { level: 0, limit }
    }

    /// Step into the hierarchy rooted at `ty`.
    pub(crate) fn descend(self, graph: &TypeGraph, ty: &TypeRef) -> Result<Self, CheckError> {
        let level = self.level + 1;
        if level > self.limit {
            return Err(CheckError::DepthExceeded {
                ty: graph.display_name(ty),
                limit: self.limit,
            });
        }
        Ok(Depth { level, ..self })
    }
}

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
