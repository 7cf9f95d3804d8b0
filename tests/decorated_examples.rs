//! Ejemplos completos: se declaran los casos, se entregan al runner en memoria
//! y cada item recolectado se ejecuta contra el cuerpo del test.

use casestack::{case, collect, Cases, CaseError, CaseSpec, CaseStackError, CollectedItem, GeneratedCases, Mark,
                Signature, Target, TestFunction};
use serde_json::Value;

fn int(item: &CollectedItem, name: &str) -> i64 {
    item.arg(name).and_then(Value::as_i64).expect("integer argument")
}

fn text(item: &CollectedItem, name: &str) -> String {
    item.arg(name).and_then(Value::as_str).expect("string argument").to_string()
}

fn add_fn(name: &str) -> TestFunction {
    TestFunction::new(name, Signature::positional(["a", "b", "expected"]).expect("valid"))
}

#[test]
fn add_single_simple_case() {
    let f = case(casestack::case!("default", 1, 2, 3)).apply(add_fn("test__add__single_simple_case"))
                                                      .expect("applies");
    let items = collect([&f]).expect("collects");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].node_id, "test__add__single_simple_case[default]");
    assert_eq!(int(&items[0], "expected"), int(&items[0], "a") + int(&items[0], "b"));
}

#[test]
fn add_multiple_arg_cases() {
    let f = Cases::for_fn(add_fn("test__add__multiple_arg_cases")).case(casestack::case!("first case", 1, 2, 3))
                                                                  .case(casestack::case!("second case", 2, 2, 4))
                                                                  .case(casestack::case!("third case", 3, 4, 7))
                                                                  .build()
                                                                  .expect("builds");
    let items = collect([&f]).expect("collects");
    let ids: Vec<_> = items.iter().filter_map(|i| i.case_id.as_deref()).collect();
    assert_eq!(ids, vec!["first case", "second case", "third case"]);
    for item in &items {
        assert_eq!(int(item, "expected"), int(item, "a") + int(item, "b"));
    }
}

#[test]
fn add_kwarg_params() {
    let f = Cases::for_fn(add_fn("test__add__kwarg_params")).case(casestack::case!("first case", a = 1, b = 2, expected = 3))
                                                            .case(casestack::case!("second case", a = 5, b = 6, expected = 11))
                                                            .build()
                                                            .expect("builds");
    for item in collect([&f]).expect("collects") {
        assert_eq!(int(&item, "expected"), int(&item, "a") + int(&item, "b"));
    }
}

#[test]
fn add_with_optional() {
    let sig = Signature::builder().param("a")
                                  .param("b")
                                  .optional("expected", 5)
                                  .build()
                                  .expect("valid");
    let f = Cases::for_fn(TestFunction::new("test__add__with_optional", sig)).case(casestack::case!("Another implicit optional", 1, 4))
                                                                             .case(casestack::case!("Explicit optional", 2, 4, 6))
                                                                             .case(casestack::case!("Implicit optional", 2, 3))
                                                                             .build()
                                                                             .expect("builds");
    assert!(f.signature.params().iter().all(|p| p.default.is_none()));
    let items = collect([&f]).expect("collects");
    assert_eq!(items.len(), 3);
    for item in &items {
        assert_eq!(int(item, "expected"), int(item, "a") + int(item, "b"));
    }
}

#[test]
fn generator_cases() {
    let f = TestFunction::new("test__case__generator", Signature::positional(["a", "b"]).expect("valid"));
    let rows = (0..10).map(|x: i64| [x, x * x]);
    let f = case(GeneratedCases::new(rows).name("{} ** 2 == {}")).apply(f).expect("applies");
    let items = collect([&f]).expect("collects");
    assert_eq!(items.len(), 10);
    assert_eq!(items[3].node_id, "test__case__generator[3 ** 2 == 9]");
    for item in &items {
        assert_eq!(int(item, "a").pow(2), int(item, "b"));
    }
}

#[test]
fn product_cases() {
    let rows = ["a", "b"].into_iter()
                         .flat_map(|l| ["1", "2"].into_iter().map(move |n| [l, n]));
    let f = TestFunction::new("test__case__product", Signature::positional(["a", "b"]).expect("valid"));
    let f = case(GeneratedCases::new(rows).name("({}, {})")).apply(f).expect("applies");
    let items = collect([&f]).expect("collects");
    let ids: Vec<_> = items.iter().filter_map(|i| i.case_id.as_deref()).collect();
    assert_eq!(ids, vec!["(a, 1)", "(a, 2)", "(b, 1)", "(b, 2)"]);
    for item in &items {
        assert!(["a", "b"].contains(&text(item, "a").as_str()));
        assert!(["1", "2"].contains(&text(item, "b").as_str()));
    }
}

#[test]
fn marking_cases() {
    let f = TestFunction::new("test__case__marking", Signature::positional(["a"]).expect("valid"));
    let f = Cases::for_fn(f).case(casestack::case!("should pass", 1))
                            .case(casestack::case!("should skip", 2, marks = [Mark::skip()]))
                            .case(casestack::case!("should fail", -1, marks = [Mark::xfail("This number is negative")]))
                            .build()
                            .expect("builds");
    for item in collect([&f]).expect("collects") {
        if item.has_mark("skip") {
            continue;
        }
        let passed = int(&item, "a") > 0;
        assert_eq!(passed, !item.has_mark("xfail"), "{}", item.node_id);
    }
}

#[test]
fn fixture_parameter_is_left_to_the_runner() {
    let sig = Signature::builder().param("lazy_fix").fixture("request").build().expect("valid");
    let f = case(CaseSpec::new("with lazy fixture").arg("lazy_fixture")).apply(TestFunction::new("test__case__with_fixture", sig))
                                                                       .expect("applies");
    let items = collect([&f]).expect("collects");
    assert_eq!(items[0].args.len(), 1);
    assert_eq!(text(&items[0], "lazy_fix"), "lazy_fixture");
}

#[test]
fn errors_surface_at_declaration_time() {
    let one = TestFunction::new("func", Signature::positional(["a"]).expect("valid"));
    assert!(matches!(case(CaseSpec::new("name").args([1, 2])).apply(one),
                     Err(CaseError::TooManyArguments { .. })));

    let reserved = TestFunction::new("func", Signature::positional(["marks"]).expect("valid"));
    assert!(matches!(case(CaseSpec::new("name").arg(1)).apply(reserved),
                     Err(CaseError::ReservedName { .. })));

    assert!(matches!(case(CaseSpec::new("name").arg(1)).apply(Target::object("VALUE")),
                     Err(CaseError::NotCallable { .. })));
}

#[test]
fn collecting_the_same_function_twice_fails() {
    let f = case(CaseSpec::new("default").args([1, 2, 3])).apply(add_fn("test_dup")).expect("applies");
    let err = collect([&f, &f]).unwrap_err();
    assert!(matches!(err, CaseStackError::Runner(_)));
}
