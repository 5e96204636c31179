//! Errors for malformed host metadata.
//!
//! None of these occur for a well-formed graph; they exist so that bad input
//! fails loudly instead of producing a wrong answer.

use crate::DefId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// A `TypeRef` or definition points outside the graph.
    #[error("reference to unknown type definition {0:?}")]
    UnknownDef(DefId),

    /// A definition names itself as its own supertype.
    #[error("type `{name}` derives from itself")]
    SelfDerived { name: String },

}
