//! Expression lowering.

use gocpp_ir::{BinaryExpr, CallExpr, Expr, Lit, ParenExpr, SelectorExpr, Token, UnaryExpr};
use gocpp_stack::ensure_sufficient_stack;
use tree_sitter::Node;

use super::{named_children, node_span, Lowerer};

impl Lowerer<'_> {
    /// Lower one expression node; operator chains recurse once per operand.
    pub(super) fn lower_expr(&self, node: Node<'_>) -> Expr {
        ensure_sufficient_stack(|| self.lower_expr_inner(node))
    }

    fn lower_expr_inner(&self, node: Node<'_>) -> Expr {
        let span = node_span(node);
        match node.kind() {
            "int_literal"
            | "float_literal"
            | "imaginary_literal"
            | "rune_literal"
            | "interpreted_string_literal"
            | "raw_string_literal" => self.lit(node),

            // Predeclared names are plain identifiers in Go.
            "identifier" | "true" | "false" | "nil" | "iota" => Expr::Ident(self.ident(node)),

            "binary_expression" => self.lower_binary(node).unwrap_or(Expr::Unsupported(span)),
            "unary_expression" => self.lower_unary(node).unwrap_or(Expr::Unsupported(span)),
            "call_expression" => self.lower_call(node).unwrap_or(Expr::Unsupported(span)),
            "selector_expression" => self.lower_selector(node).unwrap_or(Expr::Unsupported(span)),
            "parenthesized_expression" => match named_children(node).first() {
                Some(inner) => Expr::Paren(ParenExpr {
                    inner: Box::new(self.lower_expr(*inner)),
                    span,
                }),
                None => Expr::Unsupported(span),
            },

            _ => Expr::Unsupported(span),
        }
    }

    /// Expressions of an `expression_list` (or a single bare expression).
    pub(super) fn lower_expr_list(&self, node: Node<'_>) -> Vec<Expr> {
        if node.kind() == "expression_list" {
            named_children(node)
                .into_iter()
                .map(|expr| self.lower_expr(expr))
                .collect()
        } else {
            vec![self.lower_expr(node)]
        }
    }

    fn lit(&self, node: Node<'_>) -> Expr {
        Expr::Lit(Lit {
            value: self.text(node).to_string(),
            span: node_span(node),
        })
    }

    fn operator(&self, node: Node<'_>) -> Option<Token> {
        let op = node.child_by_field_name("operator")?;
        Token::from_text(self.text(op))
    }

    fn lower_binary(&self, node: Node<'_>) -> Option<Expr> {
        let lhs = node.child_by_field_name("left")?;
        let rhs = node.child_by_field_name("right")?;
        Some(Expr::Binary(BinaryExpr {
            op: self.operator(node)?,
            lhs: Box::new(self.lower_expr(lhs)),
            rhs: Box::new(self.lower_expr(rhs)),
            span: node_span(node),
        }))
    }

    fn lower_unary(&self, node: Node<'_>) -> Option<Expr> {
        let operand = node.child_by_field_name("operand")?;
        Some(Expr::Unary(UnaryExpr {
            op: self.operator(node)?,
            operand: Box::new(self.lower_expr(operand)),
            span: node_span(node),
        }))
    }

    fn lower_call(&self, node: Node<'_>) -> Option<Expr> {
        let callee = node.child_by_field_name("function")?;
        let args = node
            .child_by_field_name("arguments")
            .map(|list| {
                named_children(list)
                    .into_iter()
                    .map(|arg| self.lower_expr(arg))
                    .collect()
            })
            .unwrap_or_default();
        Some(Expr::Call(CallExpr {
            callee: Box::new(self.lower_expr(callee)),
            args,
            span: node_span(node),
        }))
    }

    fn lower_selector(&self, node: Node<'_>) -> Option<Expr> {
        let operand = node.child_by_field_name("operand")?;
        let field = node.child_by_field_name("field")?;
        Some(Expr::Selector(SelectorExpr {
            operand: Box::new(self.lower_expr(operand)),
            field: self.ident(field),
            span: node_span(node),
        }))
    }
}
