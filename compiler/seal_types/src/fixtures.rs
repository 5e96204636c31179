//! Shared type graphs for tests across the workspace.
//!
//! Compiled for this crate's own tests and, through the `test-fixtures`
//! feature, for downstream crates' tests:
//!
//! ```toml
//! [dev-dependencies]
//! seal_types = { workspace = true, features = ["test-fixtures"] }
//! ```
//!
//! ```text
//! Result<TSuccess, TFailure>   = Ok(TSuccess) | Error(TFailure)
//! HttpError<TError>            = ExceptionError(Exception) | ErrorResponseError(TError)
//! ```

use std::ops::Deref;

use crate::{Constructor, DefId, TypeDef, TypeGraph, TypeGraphBuilder, TypeRef};

/// Ids of the `Result` / `HttpError` definitions.
///
/// Split from [`ResultFixture`] so larger test graphs can add these
/// definitions next to their own.
#[derive(Copy, Clone, Debug)]
pub struct ResultDefs {
    pub int32: DefId,
    pub string: DefId,
    pub result: DefId,
    pub ok: DefId,
    pub error: DefId,
    pub http_error: DefId,
    pub exception_error: DefId,
    pub error_response_error: DefId,
}

impl ResultDefs {
    pub fn add_to(b: &mut TypeGraphBuilder) -> Self {
        let int32 = b.add_simple("Int32");
        let string = b.add_simple("String");
        let exception = b.add_simple("Exception");

        let http_error = b.add(
            TypeDef::new("HttpError")
                .with_type_params(["TError"])
                .with_constructor(Constructor::private(vec![])),
        );
        let http_super = TypeRef::generic(http_error, vec![TypeRef::param("TError")]);
        let exception_error = b.add(
            TypeDef::new("ExceptionError")
                .derived_from(http_error, http_super.clone())
                .with_constructor(Constructor::public(vec![TypeRef::named(exception)])),
        );
        let error_response_error = b.add(
            TypeDef::new("ErrorResponseError")
                .derived_from(http_error, http_super)
                .with_constructor(Constructor::public(vec![TypeRef::param("TError")])),
        );

        let result = b.add(
            TypeDef::new("Result")
                .with_type_params(["TSuccess", "TFailure"])
                .with_constructor(Constructor::private(vec![])),
        );
        let result_super = TypeRef::generic(
            result,
            vec![TypeRef::param("TSuccess"), TypeRef::param("TFailure")],
        );
        // Static factories are not instance constructors.
        let ok = b.add(
            TypeDef::new("Ok")
                .derived_from(result, result_super.clone())
                .with_constructor(Constructor::public(vec![TypeRef::param("TSuccess")]))
                .with_constructor(Constructor::public(vec![]).into_static()),
        );
        let error = b.add(
            TypeDef::new("Error")
                .derived_from(result, result_super)
                .with_constructor(Constructor::public(vec![TypeRef::param("TFailure")])),
        );

        ResultDefs {
            int32,
            string,
            result,
            ok,
            error,
            http_error,
            exception_error,
            error_response_error,
        }
    }

    pub fn int32_ref(&self) -> TypeRef {
        TypeRef::named(self.int32)
    }

    pub fn string_ref(&self) -> TypeRef {
        TypeRef::named(self.string)
    }

    pub fn result_of(&self, success: TypeRef, failure: TypeRef) -> TypeRef {
        TypeRef::generic(self.result, vec![success, failure])
    }

    pub fn http_of(&self, error: TypeRef) -> TypeRef {
        TypeRef::generic(self.http_error, vec![error])
    }

    /// `Result<Int32, String>`.
    pub fn result_int_string(&self) -> TypeRef {
        self.result_of(self.int32_ref(), self.string_ref())
    }

    /// `HttpError<String>`.
    pub fn http_string(&self) -> TypeRef {
        self.http_of(self.string_ref())
    }

    /// `Result<String, HttpError<String>>`.
    pub fn result_http(&self) -> TypeRef {
        self.result_of(self.string_ref(), self.http_string())
    }

    /// `def` nested inside `container`.
    pub fn member(&self, def: DefId, container: &TypeRef) -> TypeRef {
        TypeRef::named(def).declared_in(container.clone())
    }
}

/// A graph holding only the [`ResultDefs`] definitions.
pub struct ResultFixture {
    pub graph: TypeGraph,
    pub defs: ResultDefs,
}

impl Deref for ResultFixture {
    type Target = ResultDefs;

    fn deref(&self) -> &ResultDefs {
        &self.defs
    }
}

/// # Panics
///
/// Never for the fixed definitions above; `finish` only rejects dangling or
/// self-derived ids.
pub fn result_fixture() -> ResultFixture {
    let mut b = TypeGraphBuilder::new();
    let defs = ResultDefs::add_to(&mut b);
    match b.finish() {
        Ok(graph) => ResultFixture { graph, defs },
        Err(err) => panic!("fixture graph is well-formed: {err}"),
    }
}
