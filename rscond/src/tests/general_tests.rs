use crate::{CondContext, CondError, CondFunc, CondValue, MemorySink};
use std::collections::HashMap;
use test_case::test_case;

fn quiet() -> CondContext {
    CondContext::with_sink(MemorySink::new())
}

#[test_case(true.into(), "yes"; "bool true")]
#[test_case(false.into(), "no"; "bool false")]
#[test_case(0.into(), "no"; "int zero")]
#[test_case(3.into(), "yes"; "int nonzero")]
#[test_case(0u64.into(), "no"; "uint zero")]
#[test_case((-2).into(), "yes"; "negative int")]
#[test_case(0.0.into(), "no"; "float zero")]
#[test_case(0.5.into(), "yes"; "float nonzero")]
#[test_case("".into(), "no"; "empty string")]
#[test_case("0".into(), "no"; "zero string")]
#[test_case("0.000".into(), "no"; "zero float string")]
#[test_case("false".into(), "no"; "false string")]
#[test_case("F".into(), "no"; "short false string")]
#[test_case("abc".into(), "yes"; "plain string")]
#[test_case("true".into(), "yes"; "true string")]
#[test_case(CondValue::Null, "no"; "null")]
#[test_case(CondValue::from_list(vec![]), "yes"; "empty list")]
#[test_case(CondValue::from_map(HashMap::new()), "yes"; "empty map")]
#[test_case(CondValue::from_bytes(vec![]), "yes"; "empty bytes")]
#[test_case(CondValue::from_duration(chrono::Duration::zero()), "no"; "zero duration")]
#[test_case(CondValue::from_duration(chrono::Duration::seconds(1)), "yes"; "one second")]
#[test_case("0x0p0".into(), "no"; "hex zero string")]
fn test_if(cond: CondValue, expected: &str) {
    let ctx = quiet();

    assert_eq!(ctx.if_(&[cond, "yes".into(), "no".into()]), expected.into());
}

#[test]
fn test_if_single_arg_returns_resolved_condition() {
    let ctx = quiet();

    assert_eq!(ctx.if_(&[0.into()]), 0.into());
    assert_eq!(ctx.if_(&[CondValue::lazy("five", || 5)]), 5.into());
}

#[test]
fn test_if_missing_false_branch_is_null() {
    let ctx = quiet();

    assert_eq!(ctx.if_(&[false.into(), "yes".into()]), CondValue::Null);
    assert_eq!(ctx.when("".into(), "yes".into()), CondValue::Null);
    assert_eq!(ctx.when(1.into(), "yes".into()), "yes".into());
}

#[test]
fn test_if_extra_args_ignored() {
    let ctx = quiet();

    let res = ctx.if_(&[false.into(), "a".into(), "b".into(), "c".into()]);
    assert_eq!(res, "b".into());
}

#[test]
fn test_if_deferred_condition() {
    let ctx = quiet();

    let res = ctx.if_(&[CondValue::lazy("one", || 1), "a".into(), "b".into()]);
    assert_eq!(res, "a".into());

    let res = ctx.if_(&[CondValue::lazy("computed", || "computed"), "fixed".into()]);
    assert_eq!(res, "fixed".into());
}

#[test]
fn test_if_deferred_branches() {
    let ctx = quiet();

    let res = ctx.ternary(
        true.into(),
        CondValue::lazy("yes", || "lazy yes"),
        CondValue::lazy("no", || "lazy no"),
    );
    assert_eq!(res, "lazy yes".into());
}

#[test]
fn test_if_false_branch_with_params_returned_as_is() {
    let ctx = quiet();
    let add = CondFunc::new("add", 2, |args| vec![args[0].clone()]);

    let res = ctx.if_(&[0.into(), "yes".into(), add.clone().into()]);
    assert_eq!(res, CondValue::Func(add));
}

#[test_case(CondValue::Null, "fallback"; "null")]
#[test_case("nonempty".into(), "nonempty"; "nonempty string")]
#[test_case("".into(), "fallback"; "empty string")]
#[test_case(false.into(), "fallback"; "bool false")]
#[test_case(0.into(), "fallback"; "zero")]
#[test_case(0.0.into(), "fallback"; "float zero")]
fn test_or(cond: CondValue, expected: &str) {
    let ctx = quiet();

    assert_eq!(ctx.or(&[cond, "fallback".into()]), expected.into());
}

#[test]
fn test_or_returns_condition_unchanged() {
    let ctx = quiet();

    assert_eq!(ctx.or_else(true.into(), "fallback".into()), true.into());
    assert_eq!(ctx.or_else(42.into(), "fallback".into()), 42.into());
    assert_eq!(ctx.or(&[7.into()]), 7.into());
    assert_eq!(ctx.or(&[CondValue::Null]), CondValue::Null);
}

#[test]
fn test_or_resolves_fallback() {
    let ctx = quiet();

    let res = ctx.or_else(CondValue::Null, CondValue::lazy("default", || 10));
    assert_eq!(res, 10.into());
}

#[test]
fn test_coalesce() {
    let ctx = quiet();

    let res = ctx.coalesce(&[
        CondValue::Null,
        "".into(),
        CondValue::lazy("zero", || 0),
        "found".into(),
        "later".into(),
    ]);
    assert_eq!(res, "found".into());

    assert_eq!(ctx.coalesce(&[0.into(), false.into()]), false.into());
    assert_eq!(ctx.coalesce(&[]), CondValue::Null);
    assert_eq!(ctx.coalesce(&[CondValue::lazy("x", || "x")]), "x".into());
}

#[test]
fn test_error_value_short_circuits_if() {
    let sink = MemorySink::new();
    let ctx = CondContext::with_sink(sink.clone());
    let err = CondValue::from_err(CondError::misc("lookup failed"));

    let res = ctx.if_(&[err.clone(), "yes".into(), "no".into()]);

    assert_eq!(res, err);
    assert_eq!(sink.lines(), vec!["lookup failed".to_owned()]);
}

#[test]
fn test_error_value_short_circuits_or() {
    let sink = MemorySink::new();
    let ctx = CondContext::with_sink(sink.clone());
    let err = CondValue::runtime_error("bad state");

    let res = ctx.or(&[err.clone(), "fallback".into()]);

    assert_eq!(res, err);
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.lines()[0], "runtime error: bad state");
}

#[test]
fn test_deferred_error_short_circuits() {
    let sink = MemorySink::new();
    let ctx = CondContext::with_sink(sink.clone());
    let failing = CondValue::lazy("failing", || CondError::value("nope"));

    let res = ctx.ternary(failing, "yes".into(), "no".into());

    assert!(res.is_err());
    assert_eq!(res.into_result(), Err(CondError::value("nope")));
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_error_in_branch_is_not_reported() {
    let sink = MemorySink::new();
    let ctx = CondContext::with_sink(sink.clone());

    let res = ctx.ternary(false.into(), "yes".into(), CondValue::runtime_error("x"));

    assert!(res.is_err());
    assert!(sink.is_empty());
}

#[test]
fn test_time_call() {
    let sink = MemorySink::new();
    let ctx = CondContext::with_sink(sink.clone());
    let func = CondFunc::lazy("work", || 1);

    let line = ctx.time_call(&func);

    assert!(line.starts_with("[work] runtime: "));
    assert!(line.ends_with('\n'));
    assert_eq!(sink.lines(), vec![line.trim_end().to_owned()]);
}

#[test]
fn test_time_call_report() {
    let ctx = quiet();
    let func = CondFunc::thunk("pair", || vec![1.into(), 2.into()]);

    let report = ctx.time_call_report(&func);

    assert_eq!(report.name(), "pair");
    assert_eq!(report.result(), &CondValue::from(vec![1, 2]));
}

#[test]
#[should_panic(expected = "if_ called without a condition")]
fn test_if_without_args() {
    quiet().if_(&[]);
}

#[test]
#[should_panic(expected = "or called without a condition")]
fn test_or_without_args() {
    quiet().or(&[]);
}

#[test]
fn test_free_functions() {
    assert_eq!(crate::if_(&[true.into(), "yes".into(), "no".into()]), "yes".into());
    assert_eq!(crate::or(&[CondValue::Null, "fallback".into()]), "fallback".into());
    assert_eq!(crate::coalesce(&["".into(), "b".into()]), "b".into());
}

#[cfg(feature = "json")]
#[test]
fn test_json_bindings() {
    let ctx = quiet();
    let doc: serde_json::Value =
        serde_json::from_str(r#"{"name": "", "nick": "bob", "age": 0, "tags": []}"#).unwrap();

    let field = |k: &str| CondValue::from(&doc[k]);

    assert_eq!(ctx.or_else(field("name"), field("nick")), "bob".into());
    assert_eq!(ctx.if_(&[field("age"), "aged".into(), "newborn".into()]), "newborn".into());
    assert_eq!(ctx.if_(&[field("tags"), "tagged".into(), "untagged".into()]), "tagged".into());
    assert_eq!(field("missing"), CondValue::Null);
}
