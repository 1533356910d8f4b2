//! Expression translation.

use gocpp_ir::{BinaryExpr, CallExpr, Expr, SelectorExpr, Spanned, Token, UnaryExpr};

use gocpp_stack::ensure_sufficient_stack;

use crate::{DegradeReason, TranslateError, TranslateResult, Translator};

/// Emitted in place of a call the translator cannot analyze.
pub const CALL_PLACEHOLDER: &str = "unsupported";

/// Operators accepted in a binary expression.
///
/// Several of these never appear in a well-formed binary expression; the
/// check still runs before the operands are translated.
pub const fn is_supported_binary_op(op: Token) -> bool {
    matches!(
        op,
        Token::Add
            | Token::Sub
            | Token::Mul
            | Token::Quo
            | Token::Rem
            | Token::And
            | Token::Or
            | Token::Xor
            | Token::Shl
            | Token::Shr
            | Token::AndNot
            | Token::AddAssign
            | Token::SubAssign
            | Token::MulAssign
            | Token::QuoAssign
            | Token::RemAssign
            | Token::AndAssign
            | Token::OrAssign
            | Token::XorAssign
            | Token::ShlAssign
            | Token::ShrAssign
            | Token::AndNotAssign
            | Token::LAnd
            | Token::LOr
            | Token::Arrow
            | Token::Inc
            | Token::Dec
            | Token::Eql
            | Token::Neq
            | Token::Lss
            | Token::Leq
            | Token::Gtr
            | Token::Geq
            | Token::Assign
            | Token::Define
            | Token::Not
    )
}

/// Prefix operators with an identical C++ spelling.
pub const fn is_supported_unary_op(op: Token) -> bool {
    matches!(op, Token::Add | Token::Sub | Token::Not)
}

/// The error-construction idioms, recognized by their qualified callee.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorIdiom {
    /// `errors.New(msg)`
    ErrorsNew,
    /// `fmt.Errorf(format, args...)`
    FmtErrorf,
}

impl ErrorIdiom {
    pub fn recognize(callee: &SelectorExpr) -> Option<Self> {
        match callee.qualified_name()? {
            ("errors", "New") => Some(ErrorIdiom::ErrorsNew),
            ("fmt", "Errorf") => Some(ErrorIdiom::FmtErrorf),
            _ => None,
        }
    }
}

impl Translator<'_, '_> {
    /// Translate an expression to C++ text.
    pub fn translate_expr(&mut self, expr: &Expr) -> TranslateResult<String> {
        let mut out = String::new();
        self.write_expr(expr, &mut out)?;
        Ok(out)
    }

    /// Append the translation of `expr` to `out`.
    ///
    /// Operator chains nest one level per operand, so the recursion is
    /// stack-guarded and every level writes into the same buffer.
    fn write_expr(&mut self, expr: &Expr, out: &mut String) -> TranslateResult<()> {
        ensure_sufficient_stack(|| self.write_expr_inner(expr, out))
    }

    fn write_expr_inner(&mut self, expr: &Expr, out: &mut String) -> TranslateResult<()> {
        match expr {
            Expr::Lit(lit) => out.push_str(&lit.value),
            Expr::Ident(ident) => out.push_str(&ident.name),
            Expr::Binary(binary) => self.write_binary(binary, out)?,
            Expr::Unary(unary) => self.write_unary(unary, out)?,
            Expr::Paren(paren) => {
                out.push('(');
                self.write_expr(&paren.inner, out)?;
                out.push(')');
            }
            Expr::Call(call) => self.write_call(call, out)?,
            Expr::Selector(_) | Expr::Unsupported(_) => {
                return Err(TranslateError::UnsupportedExpression {
                    text: self.text_of(expr),
                    span: expr.span(),
                });
            }
        }
        Ok(())
    }

    fn write_binary(&mut self, binary: &BinaryExpr, out: &mut String) -> TranslateResult<()> {
        if !is_supported_binary_op(binary.op) {
            return Err(TranslateError::UnsupportedOperator {
                op: binary.op,
                text: self.text_of(binary),
                span: binary.span,
            });
        }
        self.write_expr(&binary.lhs, out)?;
        out.push(' ');
        out.push_str(binary.op.as_str());
        out.push(' ');
        self.write_expr(&binary.rhs, out)
    }

    fn write_unary(&mut self, unary: &UnaryExpr, out: &mut String) -> TranslateResult<()> {
        if !is_supported_unary_op(unary.op) {
            return Err(TranslateError::UnsupportedOperator {
                op: unary.op,
                text: self.text_of(unary),
                span: unary.span,
            });
        }
        out.push_str(unary.op.as_str());
        self.write_expr(&unary.operand, out)
    }

    /// Error-construction idioms become `QString(<message>)`; any other call
    /// degrades to [`CALL_PLACEHOLDER`].
    fn write_call(&mut self, call: &CallExpr, out: &mut String) -> TranslateResult<()> {
        let idiom = match &*call.callee {
            Expr::Selector(selector) => ErrorIdiom::recognize(selector),
            _ => None,
        };
        let Some(idiom) = idiom else {
            self.degrade(call, DegradeReason::UnrecognizedCall);
            out.push_str(CALL_PLACEHOLDER);
            return Ok(());
        };

        let Some(message) = call.args.first() else {
            return Err(TranslateError::MalformedCall {
                text: self.text_of(call),
                span: call.span,
            });
        };
        out.push_str("QString(");
        self.write_expr(message, out)?;
        out.push(')');

        let extra = call.args.len() - 1;
        if extra > 0 {
            tracing::trace!(?idiom, extra, "dropping format arguments");
            self.degrade(call, DegradeReason::DroppedArguments { count: extra });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
