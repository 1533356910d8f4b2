use super::*;
use gocpp_ir::{Ident, Lit, SourceText, Span, Stmt};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::{Degradation, TranslateOptions};

/// Parse `x = <expr>` inside a function and return the right-hand side.
fn rhs_of(source: &str) -> Expr {
    let file = match gocpp_parse::parse(source) {
        Ok(file) => file,
        Err(e) => panic!("parse failed: {e}"),
    };
    let func = file.functions().next().cloned().unwrap();
    match func.body.unwrap().stmts.into_iter().next() {
        Some(Stmt::Assign(mut assign)) => assign.rhs.remove(0),
        other => panic!("expected an assignment, got {other:?}"),
    }
}

fn wrap(expr: &str) -> String {
    format!("package main\nfunc f() {{\n\tx = {expr}\n}}\n")
}

fn translate(expr: &str) -> (TranslateResult<String>, Vec<Degradation>) {
    let source = wrap(expr);
    let tree = rhs_of(&source);
    let src = SourceText::new(&source);
    let mut translator = Translator::new(&src, TranslateOptions::default());
    let result = translator.translate_expr(&tree);
    (result, translator.take_degradations())
}

fn translate_ok(expr: &str) -> String {
    let (result, degradations) = translate(expr);
    assert!(degradations.is_empty(), "{degradations:?}");
    match result {
        Ok(text) => text,
        Err(e) => panic!("translation of `{expr}` failed: {e}"),
    }
}

#[test]
fn literals_pass_through_verbatim() {
    for lit in ["42", "0x1F", "3.14", "1e9", "'a'", "\"hi\\n\"", "`raw`"] {
        assert_eq!(translate_ok(lit), lit);
    }
}

#[test]
fn identifiers_pass_through() {
    assert_eq!(translate_ok("count"), "count");
    assert_eq!(translate_ok("true"), "true");
}

#[test]
fn binary_expressions_are_spaced() {
    assert_eq!(translate_ok("a + b"), "a + b");
    assert_eq!(translate_ok("a+b*c"), "a + b * c");
    assert_eq!(translate_ok("n >= 0 && ok"), "n >= 0 && ok");
    assert_eq!(translate_ok("mask &^ bit"), "mask &^ bit");
}

#[test]
fn parentheses_are_preserved() {
    assert_eq!(translate_ok("(a + b) * c"), "(a + b) * c");
    assert_eq!(translate_ok("((x))"), "((x))");
}

#[test]
fn supported_unary_operators() {
    assert_eq!(translate_ok("-x"), "-x");
    assert_eq!(translate_ok("+x"), "+x");
    assert_eq!(translate_ok("!done"), "!done");
}

#[test]
fn unsupported_unary_operator_reports_source_text() {
    let (result, _) = translate("^x");
    assert_eq!(
        result.unwrap_err().to_string(),
        "unsupported operator `^` in: ^x"
    );
}

#[test]
fn pointer_and_channel_operators_are_rejected() {
    for expr in ["&v", "*p", "<-ch"] {
        let (result, _) = translate(expr);
        assert!(
            matches!(result, Err(TranslateError::UnsupportedOperator { .. })),
            "{expr}: {result:?}"
        );
    }
}

#[test]
fn unsupported_operand_fails_the_whole_expression() {
    let (result, _) = translate("a + p.field");
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        TranslateError::UnsupportedExpression { ref text, .. } if text == "p.field"
    ));
}

#[test]
fn composite_expressions_are_unsupported() {
    for expr in ["xs[0]", "[]int{1}", "func() {}", "s[1:2]"] {
        let (result, _) = translate(expr);
        assert!(
            matches!(result, Err(TranslateError::UnsupportedExpression { .. })),
            "{expr}: {result:?}"
        );
    }
}

#[test]
fn errors_new_becomes_qstring() {
    assert_eq!(translate_ok("errors.New(\"boom\")"), "QString(\"boom\")");
}

#[test]
fn errors_new_without_message_is_malformed() {
    let (result, _) = translate("errors.New()");
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "wrong call expression: errors.New()");
    assert_eq!(err.code(), crate::ErrorCode::E2006);
}

#[test]
fn fmt_errorf_drops_format_arguments() {
    let (result, degradations) = translate("fmt.Errorf(\"bad %d\", n)");
    assert_eq!(result.unwrap(), "QString(\"bad %d\")");
    assert_eq!(degradations.len(), 1);
    assert_eq!(degradations[0].reason, DegradeReason::DroppedArguments { count: 1 });
    assert_eq!(degradations[0].text, "fmt.Errorf(\"bad %d\", n)");
}

#[test]
fn unrecognized_calls_become_placeholders() {
    for call in ["compute(1, 2)", "strings.ToUpper(s)", "errors.Is(err)"] {
        let (result, degradations) = translate(call);
        assert_eq!(result.unwrap(), CALL_PLACEHOLDER);
        assert_eq!(degradations.len(), 1, "{call}");
        assert_eq!(degradations[0].reason, DegradeReason::UnrecognizedCall);
        assert_eq!(degradations[0].text, call);
    }
}

#[test]
fn placeholder_is_embedded_in_larger_expressions() {
    let (result, degradations) = translate("1 + f()");
    assert_eq!(result.unwrap(), "1 + unsupported");
    assert_eq!(degradations.len(), 1);
}

#[test]
fn unary_whitelist() {
    let supported: Vec<Token> = Token::ALL
        .into_iter()
        .filter(|&t| is_supported_unary_op(t))
        .collect();
    assert_eq!(supported, vec![Token::Add, Token::Sub, Token::Not]);
}

fn ident_expr(name: &str, start: u32) -> Expr {
    let end = start + u32::try_from(name.len()).unwrap();
    Expr::Ident(Ident::new(name, Span::new(start, end)))
}

proptest! {
    // Accepted operators keep their spelling and the operands their order.
    #[test]
    fn binary_operator_is_copied_between_operands(index in 0..Token::ALL.len()) {
        let op = Token::ALL[index];
        let source = format!("a {op} b");
        let b_start = u32::try_from(source.len() - 1).unwrap();
        let expr = Expr::Binary(BinaryExpr {
            op,
            lhs: Box::new(ident_expr("a", 0)),
            rhs: Box::new(ident_expr("b", b_start)),
            span: Span::new(0, b_start + 1),
        });
        let src = SourceText::new(&source);
        let mut translator = Translator::new(&src, TranslateOptions::default());
        prop_assert!(is_supported_binary_op(op));
        prop_assert_eq!(translator.translate_expr(&expr).unwrap(), source.clone());
    }

    #[test]
    fn integer_literals_are_copied(value in any::<u64>()) {
        let text = value.to_string();
        let end = u32::try_from(text.len()).unwrap();
        let expr = Expr::Lit(Lit {
            value: text.clone(),
            span: Span::new(0, end),
        });
        let src = SourceText::new(&text);
        let mut translator = Translator::new(&src, TranslateOptions::default());
        prop_assert_eq!(translator.translate_expr(&expr).unwrap(), text.clone());
    }
}

#[test]
fn every_operator_token_is_accepted_in_binary_position() {
    for tok in Token::ALL {
        assert!(is_supported_binary_op(tok), "{tok} rejected");
    }
}

#[test]
fn long_operator_chain_translates_without_overflow() {
    let chain = vec!["a"; 100_000].join(" + ");
    let source = wrap(&chain);
    let file = match gocpp_parse::parse(&source) {
        Ok(file) => file,
        Err(e) => panic!("parse failed: {e}"),
    };
    let Some(Stmt::Assign(assign)) = file
        .functions()
        .next()
        .and_then(|f| f.body.as_ref())
        .and_then(|b| b.stmts.first())
    else {
        panic!("expected an assignment");
    };

    let src = SourceText::new(&source);
    let mut translator = Translator::new(&src, TranslateOptions::default());
    let text = translator.translate_expr(&assign.rhs[0]).unwrap();
    assert!(text == chain, "chain of {} bytes was altered", chain.len());
}
