//! Property-based tests over randomly shaped closed hierarchies.
//!
//! For any hierarchy shape:
//! 1. Leaf count: one required name per leaf, however deep the nesting
//! 2. Cartesian expansion: a leaf with closed fields needs every combination
//! 3. Determinism: arm order never changes the result
//! 4. Coverage closure: matching every leaf is exhaustive; a default is then redundant
//! 5. Omission: dropping arms reports exactly the dropped names as missing

use proptest::prelude::*;
use seal_check::{
    CheckConfig, Checker, Diagnostic, DiagnosticKind, Expander, Pattern, SwitchInput, TypeGraph,
    TypeRef,
};
use seal_types::{Constructor, TypeDef, TypeGraphBuilder};

use crate::common::{add_hierarchy, Node};

// -- Strategies --

fn node_strategy() -> impl Strategy<Value = Node> {
    Just(Node::Leaf).prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec(inner, 1..4).prop_map(Node::Branch)
    })
}

fn children_strategy() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec(node_strategy(), 1..5)
}

fn leaf_total(children: &[Node]) -> usize {
    children.iter().map(Node::leaf_count).sum()
}

/// A hierarchy, an arm permutation, and which leaves get an arm.
fn arms_strategy() -> impl Strategy<Value = (Vec<Node>, Vec<usize>, Vec<bool>)> {
    children_strategy().prop_flat_map(|children| {
        let n = leaf_total(&children);
        let order = Just((0..n).collect::<Vec<_>>()).prop_shuffle();
        let keep = prop::collection::vec(any::<bool>(), n);
        (Just(children), order, keep)
    })
}

// -- Helpers --

fn build(children: &[Node]) -> (TypeGraph, TypeRef) {
    let mut b = TypeGraphBuilder::new();
    let root = add_hierarchy(&mut b, "Root", children);
    (b.finish().unwrap(), TypeRef::named(root))
}

fn leaf_arms(graph: &TypeGraph, root: &TypeRef) -> (Vec<Pattern>, Vec<String>) {
    let leaves = Expander::new(graph, &CheckConfig::default())
        .leaves(root)
        .unwrap();
    let names = leaves.iter().map(|leaf| graph.display_name(leaf)).collect();
    let arms = leaves.into_iter().map(Pattern::of).collect();
    (arms, names)
}

fn check(graph: &TypeGraph, root: &TypeRef, arms: Vec<Pattern>) -> Option<Diagnostic> {
    Checker::new(graph)
        .check_switch(&SwitchInput::from_arms(root.clone(), arms))
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn one_name_per_leaf(children in children_strategy()) {
        let (graph, root) = build(&children);
        let expander = Expander::new(&graph, &CheckConfig::default());

        let required = expander.required_names(&root).unwrap();

        prop_assert_eq!(required.len(), leaf_total(&children));
        prop_assert_eq!(expander.leaves(&root).unwrap().len(), leaf_total(&children));
    }

    #[test]
    fn fields_expand_to_cartesian_product(sizes in prop::collection::vec(1usize..4, 1..4)) {
        let mut b = TypeGraphBuilder::new();
        let fields: Vec<TypeRef> = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                TypeRef::named(add_hierarchy(&mut b, &format!("F{i}"), &vec![Node::Leaf; size]))
            })
            .collect();
        let holder = b.add(TypeDef::new("Holder").with_constructor(Constructor::private(vec![])));
        b.add(
            TypeDef::new("Pack")
                .derived_from(holder, TypeRef::named(holder))
                .with_constructor(Constructor::public(fields)),
        );
        b.add(
            TypeDef::new("Empty")
                .derived_from(holder, TypeRef::named(holder))
                .with_constructor(Constructor::public(vec![])),
        );
        let graph = b.finish().unwrap();

        let required = Expander::new(&graph, &CheckConfig::default())
            .required_names(&TypeRef::named(holder))
            .unwrap();

        let combinations: usize = sizes.iter().filter(|&&size| size > 1).product();
        prop_assert_eq!(required.len(), combinations + 1);
        prop_assert!(required.contains("Empty"));
        prop_assert!(required.iter().filter(|n| n.starts_with("Pack")).count() == combinations);
    }

    #[test]
    fn arm_order_is_irrelevant((children, order, keep) in arms_strategy()) {
        let (graph, root) = build(&children);
        let (arms, _) = leaf_arms(&graph, &root);

        let in_order: Vec<Pattern> = arms
            .iter()
            .zip(&keep)
            .filter(|(_, &k)| k)
            .map(|(arm, _)| arm.clone())
            .collect();
        let shuffled: Vec<Pattern> = order
            .iter()
            .filter(|&&i| keep[i])
            .map(|&i| arms[i].clone())
            .collect();

        let first = check(&graph, &root, in_order.clone());
        prop_assert_eq!(&first, &check(&graph, &root, shuffled));
        prop_assert_eq!(&first, &check(&graph, &root, in_order));
    }

    #[test]
    fn all_leaves_cover_and_default_is_redundant(children in children_strategy()) {
        let (graph, root) = build(&children);
        let (mut arms, names) = leaf_arms(&graph, &root);

        prop_assert_eq!(check(&graph, &root, arms.clone()), None);

        arms.push(Pattern::discard());
        let diag = check(&graph, &root, arms).unwrap();
        prop_assert_eq!(diag.kind, DiagnosticKind::RedundantDefault);
        prop_assert!(diag.missing.is_empty());
        prop_assert_eq!(diag.matched.len(), names.len());
    }

    #[test]
    fn omitted_arms_are_exactly_the_missing((children, _order, keep) in arms_strategy()) {
        let (graph, root) = build(&children);
        let (arms, names) = leaf_arms(&graph, &root);

        let kept: Vec<Pattern> = arms
            .into_iter()
            .zip(&keep)
            .filter_map(|(arm, &k)| k.then_some(arm))
            .collect();
        let mut omitted: Vec<String> = names
            .into_iter()
            .zip(&keep)
            .filter_map(|(name, &k)| (!k).then_some(name))
            .collect();
        omitted.sort();

        match check(&graph, &root, kept) {
            None => prop_assert!(omitted.is_empty()),
            Some(diag) => {
                prop_assert_eq!(diag.kind, DiagnosticKind::NotExhaustive);
                prop_assert_eq!(diag.missing, omitted);
            }
        }
    }
}
