use super::*;
use gocpp_ir::SourceFile;
use pretty_assertions::assert_eq;

use crate::{DegradeReason, ErrorCode, ScopePolicy};

fn parse(source: &str) -> SourceFile {
    match gocpp_parse::parse(source) {
        Ok(file) => file,
        Err(e) => panic!("parse failed: {e}"),
    }
}

fn translate_with(source: &str, options: TranslateOptions) -> TranslateResult<Translation> {
    let file = parse(source);
    let func = file.functions().next().unwrap();
    translate_function(func, &SourceText::new(source), options)
}

fn translate(source: &str) -> TranslateResult<Translation> {
    translate_with(source, TranslateOptions::default())
}

fn translate_exact(source: &str) -> String {
    match translate(source) {
        Ok(Translation::Exact(text)) => text,
        other => panic!("expected an exact translation, got {other:?}"),
    }
}

#[test]
fn add_function() {
    let source = "package main\n\nfunc Add(a int, b int) int {\n\treturn a + b\n}\n";
    assert_eq!(
        translate_exact(source),
        "long long int Add(long long int a, long long int b) {\nreturn a + b;\n}\n"
    );
}

#[test]
fn grouped_parameters_emit_every_name() {
    let source = "package main\nfunc Mix(a, b int, flag bool) {\n}\n";
    assert_eq!(
        translate_exact(source),
        "void Mix(long long int a, long long int b, bool flag) {\n}\n"
    );
}

#[test]
fn parenthesized_single_result() {
    let source = "package main\nfunc Name() (string) {\n\treturn \"go\"\n}\n";
    assert_eq!(translate_exact(source), "QString Name() {\nreturn \"go\";\n}\n");
}

#[test]
fn named_single_result() {
    let source = "package main\nfunc Get() (n int32) {\n\treturn\n}\n";
    assert_eq!(translate_exact(source), "long int Get() {\nreturn;\n}\n");
}

#[test]
fn two_result_types_fail_with_list_text() {
    let source = "package main\nfunc f() (int, error) {\n\treturn 1, nil\n}\n";
    let err = translate(source).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E3002);
    assert!(matches!(
        err,
        TranslateError::MultipleReturnTypesUnsupported { ref text, .. } if text == "(int, error)"
    ));
    assert_eq!(
        err.to_string(),
        "multiple return types are not supported in C++: (int, error)"
    );
}

#[test]
fn named_result_group_counts_every_name() {
    let source = "package main\nfunc f() (lo, hi int) {\n\treturn\n}\n";
    let err = translate(source).unwrap_err();
    assert!(matches!(
        err,
        TranslateError::MultipleReturnTypesUnsupported { ref text, .. } if text == "(lo, hi int)"
    ));
}

#[test]
fn unnamed_parameter_fails() {
    let source = "package main\nfunc f(int) {\n}\n";
    let err = translate(source).unwrap_err();
    assert!(matches!(
        err,
        TranslateError::MissingParameterName { ref text, .. } if text == "int"
    ));
}

#[test]
fn unmapped_parameter_type_fails() {
    let source = "package main\nfunc f(p *int) {\n}\n";
    let err = translate(source).unwrap_err();
    assert!(matches!(
        err,
        TranslateError::UnsupportedTypeShape { ref text, .. } if text == "*int"
    ));
}

#[test]
fn duplicate_parameter_names_conflict() {
    let source = "package main\nfunc f(a int, a bool) {\n}\n";
    let err = translate(source).unwrap_err();
    assert!(matches!(err, TranslateError::DuplicateDeclaration { ref name, .. } if name == "a"));
}

#[test]
fn forward_declaration_gets_empty_body() {
    let source = "package main\nfunc External(x int) bool\n";
    assert_eq!(translate_exact(source), "bool External(long long int x) {\n}\n");
}

#[test]
fn parameters_are_visible_only_when_chained() {
    let source = "package main\nfunc f(n int) {\n\tn := 2\n}\n";
    assert_eq!(
        translate_exact(source),
        "void f(long long int n) {\nauto n = 2;\n}\n"
    );

    let chained = TranslateOptions::default().with_scope_policy(ScopePolicy::Chained);
    let translation = translate_with(source, chained).unwrap();
    assert_eq!(translation.text(), "void f(long long int n) {\nn = 2;\n}\n");
}

#[test]
fn error_idioms_translate_exactly() {
    let source = "package main\nfunc fail() string {\n\treturn errors.New(\"boom\")\n}\n";
    assert_eq!(translate_exact(source), "QString fail() {\nreturn QString(\"boom\");\n}\n");
}

#[test]
fn unrecognized_call_degrades() {
    let source = "package main\nfunc f() {\n\tx := compute(1)\n\tx = 2\n}\n";
    let translation = translate(source).unwrap();
    assert!(translation.is_degraded());
    assert_eq!(
        translation.text(),
        "void f() {\nauto x = unsupported;\nx = 2;\n}\n"
    );
    let degradations = translation.degradations();
    assert_eq!(degradations.len(), 1);
    assert_eq!(degradations[0].reason, DegradeReason::UnrecognizedCall);
    assert_eq!(degradations[0].text, "compute(1)");
}

#[test]
fn declarations_do_not_share_state() {
    let source = "package main\nfunc a() {\n\tx := f()\n}\nfunc b() {\n\tx := 1\n}\n";
    let file = parse(source);
    let src = SourceText::new(source);
    let results: Vec<Translation> = file
        .functions()
        .map(|func| translate_function(func, &src, TranslateOptions::default()).unwrap())
        .collect();
    assert!(results[0].is_degraded());
    assert_eq!(results[1], Translation::Exact("void b() {\nauto x = 1;\n}\n".to_string()));
}

#[test]
fn body_failure_fails_the_declaration() {
    let source = "package main\nfunc f() int {\n\treturn 1, 2\n}\n";
    let err = translate(source).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E3001);
}
