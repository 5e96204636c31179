use pretty_assertions::assert_eq;
use seal_check::{
    check_switch, init_tracing, CheckConfig, Checker, DiagnosticKind, Pattern, Severity,
    SwitchInput, TypeRef, DEFAULT_MAX_DEPTH,
};
use seal_types::fixtures::result_fixture;
use seal_types::{Constructor, DefId, TypeDef, TypeError, TypeGraphBuilder};


#[test]
fn result_missing_error_arm() {
    init_tracing();
    let g = result_fixture();
    let scrutinee = g.result_of(g.int32_ref(), g.string_ref());
    let input = SwitchInput::from_arms(
        scrutinee.clone(),
        vec![Pattern::of(g.member(g.ok, &scrutinee))],
    );

    let diag = check_switch(&g.graph, &input).unwrap().unwrap();

    assert_eq!(diag.kind, DiagnosticKind::NotExhaustive);
    assert_eq!(diag.main_message, "Switch on Result is not exhaustive");
    assert_eq!(
        diag.detail_message,
        "Matched: Ok<Int32, String>; Missing: Error<Int32, String>"
    );
}

#[test]
fn result_fully_matched_with_default() {
    let g = result_fixture();
    let scrutinee = g.result_of(g.int32_ref(), g.string_ref());
    let input = SwitchInput::from_arms(
        scrutinee.clone(),
        vec![
            Pattern::of(g.member(g.ok, &scrutinee)),
            Pattern::of(g.member(g.error, &scrutinee)),
            Pattern::discard(),
        ],
    );

    let diag = check_switch(&g.graph, &input).unwrap().unwrap();

    assert_eq!(diag.kind, DiagnosticKind::RedundantDefault);
    assert_eq!(diag.main_message, "Switch on Result has redundant default arm");
    assert_eq!(
        diag.detail_message,
        "Matched: Error<Int32, String>, Ok<Int32, String>"
    );
}

#[test]
fn result_of_http_error_needs_both_error_variants() {
    let g = result_fixture();
    let http = g.http_of(g.string_ref());
    let scrutinee = g.result_of(g.string_ref(), http.clone());
    let error = g.member(g.error, &scrutinee);
    let input = SwitchInput::from_arms(
        scrutinee.clone(),
        vec![
            Pattern::of(g.member(g.ok, &scrutinee)),
            Pattern::decompose(
                error,
                vec![Pattern::decompose(
                    g.member(g.exception_error, &http),
                    vec![Pattern::discard()],
                )],
            ),
        ],
    );

    let diag = check_switch(&g.graph, &input).unwrap().unwrap();

    assert_eq!(diag.kind, DiagnosticKind::NotExhaustive);
    assert_eq!(
        diag.missing,
        vec!["Error<String, HttpError<String>> with ErrorResponseError<String>"]
    );
    assert_eq!(
        diag.matched,
        vec![
            "Error<String, HttpError<String>> with ExceptionError<String>",
            "Ok<String, HttpError<String>>",
        ]
    );
}

#[test]
fn result_of_http_error_fully_decomposed() {
    let g = result_fixture();
    let http = g.http_of(g.string_ref());
    let scrutinee = g.result_of(g.string_ref(), http.clone());
    let error_with = |variant: DefId| {
        Pattern::decompose(
            g.member(g.error, &scrutinee),
            vec![Pattern::of(g.member(variant, &http))],
        )
    };
    // Arm order is irrelevant.
    let input = SwitchInput::from_arms(
        scrutinee.clone(),
        vec![
            error_with(g.error_response_error),
            Pattern::of(g.member(g.ok, &scrutinee)),
            error_with(g.exception_error),
        ],
    );

    assert_eq!(check_switch(&g.graph, &input).unwrap(), None);
}

#[test]
fn diagnostic_renders_for_terminal() {
    let g = result_fixture();
    let scrutinee = g.result_of(g.int32_ref(), g.string_ref());
    let input = SwitchInput::from_arms(
        scrutinee.clone(),
        vec![Pattern::of(g.member(g.error, &scrutinee))],
    );

    let diag = check_switch(&g.graph, &input).unwrap().unwrap();

    assert_eq!(
        diag.to_string(),
        "warning [E3001]: Switch on Result is not exhaustive\n  \
         = note: Matched: Error<Int32, String>; Missing: Ok<Int32, String>\n  \
         = help: add arms for: Ok<Int32, String>"
    );

    let fatal = diag.into_error();
    assert_eq!(fatal.severity, Severity::Error);
    assert!(fatal.to_string().starts_with("error [E3001]"));
    assert!(fatal.code.explain().is_some());
}

#[test]
fn metadata_arity_suffix_is_not_displayed() {
    let mut b = TypeGraphBuilder::new();
    let int32 = b.add_simple("Int32");
    let option = b.add(
        TypeDef::new("Option`1")
            .with_type_params(["T"])
            .with_constructor(Constructor::private(vec![])),
    );
    let option_super = TypeRef::generic(option, vec![TypeRef::param("T")]);
    let some = b.add(
        TypeDef::new("Some")
            .derived_from(option, option_super.clone())
            .with_constructor(Constructor::public(vec![TypeRef::param("T")])),
    );
    b.add(
        TypeDef::new("None")
            .derived_from(option, option_super)
            .with_constructor(Constructor::public(vec![])),
    );
    let graph = b.finish().unwrap();
    let scrutinee = TypeRef::generic(option, vec![TypeRef::named(int32)]);
    let some_arm = TypeRef::named(some).declared_in(scrutinee.clone());
    let input = SwitchInput::from_arms(scrutinee, vec![Pattern::of(some_arm)]);

    let diag = check_switch(&graph, &input).unwrap().unwrap();

    assert_eq!(diag.main_message, "Switch on Option is not exhaustive");
    assert_eq!(diag.detail_message, "Matched: Some<Int32>; Missing: None<Int32>");
}

#[test]
fn unbound_scrutinee_is_skipped() {
    let g = result_fixture();
    let partial = TypeRef::generic(g.result, vec![g.int32_ref()]);
    let input = SwitchInput::from_arms(partial, vec![Pattern::discard()]);

    assert_eq!(check_switch(&g.graph, &input).unwrap(), None);
}

#[test]
fn generic_variant_of_plain_hierarchy_is_not_checked() {
    let mut b = TypeGraphBuilder::new();
    let int32 = b.add_simple("Int32");
    let shape = b.add(TypeDef::new("Shape").with_constructor(Constructor::private(vec![])));
    let circle = b.add(
        TypeDef::new("Circle")
            .derived_from(shape, TypeRef::named(shape))
            .with_constructor(Constructor::public(vec![])),
    );
    let boxed = b.add(
        TypeDef::new("Box")
            .with_type_params(["T"])
            .derived_from(shape, TypeRef::named(shape))
            .with_constructor(Constructor::public(vec![TypeRef::param("T")])),
    );
    let graph = b.finish().unwrap();
    let arms = vec![
        Pattern::of(TypeRef::named(circle)),
        Pattern::of(TypeRef::generic(boxed, vec![TypeRef::named(int32)])),
    ];
    let checker = Checker::new(&graph);

    let input = SwitchInput::from_arms(TypeRef::named(shape), arms.clone());
    assert_eq!(checker.check_switch(&input), Ok(None));

    let mut with_default = arms;
    with_default.push(Pattern::discard());
    let input = SwitchInput::from_arms(TypeRef::named(shape), with_default);
    assert_eq!(checker.check_switch(&input), Ok(None));

    let only_circle =
        SwitchInput::from_arms(TypeRef::named(shape), vec![Pattern::of(TypeRef::named(circle))]);
    assert_eq!(checker.check_switch(&only_circle), Ok(None));
}

#[test]
fn self_derived_definition_is_rejected_at_build() {
    let mut b = TypeGraphBuilder::new();
    let id = b.next_id();
    b.add(TypeDef::new("Loop").derived_from(id, TypeRef::named(id)));

    assert_eq!(
        b.finish().unwrap_err(),
        TypeError::SelfDerived {
            name: "Loop".to_string()
        }
    );
}

#[test]
fn config_from_env_defaults_without_override() {
    // Only meaningful when the variable is not set by the environment running the tests.
    if std::env::var_os(seal_check::MAX_DEPTH_ENV).is_none() {
        assert_eq!(CheckConfig::from_env().max_depth, DEFAULT_MAX_DEPTH);
    }
}
