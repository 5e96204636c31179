//! Type graphs for unit tests.
//!
//! The `Result` / `HttpError` definitions come from [`ResultDefs`]; the rest:
//!
//! ```text
//! Shape                        = Circle | Polygon
//! Polygon                      = Triangle | Square           (nested closed level)
//! Pair                         = Both(Shape, Int32, Light) | Neither
//! Light                        = Red | Green
//! ```

use std::ops::Deref;

use seal_types::fixtures::ResultDefs;
use seal_types::{Constructor, DefId, TypeDef, TypeGraph, TypeGraphBuilder, TypeRef};

pub(crate) struct Fixture {
    pub graph: TypeGraph,
    pub defs: ResultDefs,
    pub shape: DefId,
    pub circle: DefId,
    pub polygon: DefId,
    pub triangle: DefId,
    pub square: DefId,
    pub pair: DefId,
    pub both: DefId,
    pub neither: DefId,
    pub light: DefId,
}

impl Deref for Fixture {
    type Target = ResultDefs;

    fn deref(&self) -> &ResultDefs {
        &self.defs
    }
}

fn closed(name: &str) -> TypeDef {
    TypeDef::new(name).with_constructor(Constructor::private(vec![]))
}

fn variant(parent: DefId, supertype: &TypeRef, name: &str, fields: Vec<TypeRef>) -> TypeDef {
    TypeDef::new(name)
        .derived_from(parent, supertype.clone())
        .with_constructor(Constructor::public(fields))
}

pub(crate) fn fixture() -> Fixture {
    let mut b = TypeGraphBuilder::new();
    let defs = ResultDefs::add_to(&mut b);

    let shape = b.add(closed("Shape"));
    let shape_super = TypeRef::named(shape);
    let circle = b.add(variant(shape, &shape_super, "Circle", vec![]));
    let polygon = b.add(closed("Polygon").derived_from(shape, shape_super));
    let polygon_super = TypeRef::named(polygon);
    let triangle = b.add(variant(polygon, &polygon_super, "Triangle", vec![]));
    let square = b.add(variant(polygon, &polygon_super, "Square", vec![]));

    let light = b.add(closed("Light"));
    let light_super = TypeRef::named(light);
    b.add(variant(light, &light_super, "Red", vec![]));
    b.add(variant(light, &light_super, "Green", vec![]));

    let pair = b.add(closed("Pair"));
    let pair_super = TypeRef::named(pair);
    let both = b.add(variant(
        pair,
        &pair_super,
        "Both",
        vec![TypeRef::named(shape), defs.int32_ref(), TypeRef::named(light)],
    ));
    let neither = b.add(variant(pair, &pair_super, "Neither", vec![]));

    let graph = match b.finish() {
        Ok(graph) => graph,
        Err(err) => panic!("fixture graph is well-formed: {err}"),
    };

    Fixture {
        graph,
        defs,
        shape,
        circle,
        polygon,
        triangle,
        square,
        pair,
        both,
        neither,
        light,
    }
}

/// Two definitions, each nested in and deriving from the other.
pub(crate) fn cyclic_graph() -> (TypeGraph, DefId) {
    let mut b = TypeGraphBuilder::new();
    let a = b.next_id();
    let c = DefId::from_raw(a.raw() + 1);
    b.add(closed("Ping").derived_from(c, TypeRef::named(c)));
    b.add(closed("Pong").derived_from(a, TypeRef::named(a)));
    match b.finish() {
        Ok(graph) => (graph, a),
        Err(err) => panic!("cyclic graph passes structural validation: {err}"),
    }
}
