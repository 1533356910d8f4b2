//! Statement and block lowering.

use gocpp_ir::{
    AssignStmt, Block, DeclKind, DeclStmt, ForStmt, IfStmt, IncDecStmt, ReturnStmt, Stmt, Token,
    ValueSpec,
};
use gocpp_stack::ensure_sufficient_stack;
use tree_sitter::Node;

use super::{field_children, named_children, node_span, Lowerer};

impl Lowerer<'_> {
    pub(super) fn lower_block(&self, node: Node<'_>) -> Block {
        let mut stmts = Vec::new();
        for child in named_children(node) {
            match child.kind() {
                // Newer grammars wrap the body in a visible statement list.
                "statement_list" => {
                    for stmt in named_children(child) {
                        self.push_stmt(&mut stmts, stmt);
                    }
                }
                _ => self.push_stmt(&mut stmts, child),
            }
        }
        Block {
            stmts,
            span: node_span(node),
        }
    }

    fn push_stmt(&self, stmts: &mut Vec<Stmt>, node: Node<'_>) {
        if node.kind() != "empty_statement" {
            stmts.push(self.lower_stmt(node));
        }
    }

    pub(super) fn lower_stmt(&self, node: Node<'_>) -> Stmt {
        ensure_sufficient_stack(|| self.lower_stmt_inner(node))
    }

    fn lower_stmt_inner(&self, node: Node<'_>) -> Stmt {
        let span = node_span(node);
        let lowered = match node.kind() {
            "return_statement" => Some(Stmt::Return(ReturnStmt {
                results: named_children(node)
                    .first()
                    .map(|list| self.lower_expr_list(*list))
                    .unwrap_or_default(),
                span,
            })),
            "short_var_declaration" => self.lower_assign(node, Some(Token::Define)),
            "assignment_statement" => self.lower_assign(node, None),
            "inc_statement" => self.lower_inc_dec(node, Token::Inc),
            "dec_statement" => self.lower_inc_dec(node, Token::Dec),
            "var_declaration" => Some(self.lower_decl(node, DeclKind::Var)),
            "const_declaration" => Some(self.lower_decl(node, DeclKind::Const)),
            "if_statement" => self.lower_if(node),
            "for_statement" => self.lower_for(node),
            "block" => Some(Stmt::Block(self.lower_block(node))),
            _ => None,
        };
        lowered.unwrap_or(Stmt::Unsupported(span))
    }

    fn lower_assign(&self, node: Node<'_>, tok: Option<Token>) -> Option<Stmt> {
        let tok = match tok {
            Some(tok) => tok,
            None => {
                let op = node.child_by_field_name("operator")?;
                Token::from_text(self.text(op))?
            }
        };
        Some(Stmt::Assign(AssignStmt {
            lhs: self.lower_expr_list(node.child_by_field_name("left")?),
            tok,
            rhs: self.lower_expr_list(node.child_by_field_name("right")?),
            span: node_span(node),
        }))
    }

    fn lower_inc_dec(&self, node: Node<'_>, tok: Token) -> Option<Stmt> {
        let operand = named_children(node).into_iter().next()?;
        Some(Stmt::IncDec(IncDecStmt {
            operand: self.lower_expr(operand),
            tok,
            span: node_span(node),
        }))
    }

    fn lower_decl(&self, node: Node<'_>, kind: DeclKind) -> Stmt {
        let mut specs = Vec::new();
        self.collect_specs(node, &mut specs);
        Stmt::Decl(DeclStmt {
            kind,
            specs,
            span: node_span(node),
        })
    }

    /// Gather `var_spec`/`const_spec` nodes, looking through grouping lists.
    fn collect_specs(&self, node: Node<'_>, specs: &mut Vec<ValueSpec>) {
        for child in named_children(node) {
            match child.kind() {
                "var_spec" | "const_spec" => specs.push(self.lower_value_spec(child)),
                "var_spec_list" | "const_spec_list" => self.collect_specs(child, specs),
                _ => {}
            }
        }
    }

    fn lower_value_spec(&self, node: Node<'_>) -> ValueSpec {
        ValueSpec {
            names: field_children(node, "name")
                .into_iter()
                .map(|name| self.ident(name))
                .collect(),
            ty: node
                .child_by_field_name("type")
                .map(|ty| self.lower_type(ty)),
            values: node
                .child_by_field_name("value")
                .map(|list| self.lower_expr_list(list))
                .unwrap_or_default(),
            span: node_span(node),
        }
    }

    fn lower_if(&self, node: Node<'_>) -> Option<Stmt> {
        let init = node
            .child_by_field_name("initializer")
            .map(|init| Box::new(self.lower_stmt(init)));
        let cond = self.lower_expr(node.child_by_field_name("condition")?);
        let body = self.lower_block(node.child_by_field_name("consequence")?);
        let else_branch = node
            .child_by_field_name("alternative")
            .map(|alt| Box::new(self.lower_stmt(alt)));
        Some(Stmt::If(IfStmt {
            init,
            cond,
            body,
            else_branch,
            span: node_span(node),
        }))
    }

    /// `for {}`, `for cond {}` and `for init; cond; post {}`.
    ///
    /// `range` loops are not modelled and stay unsupported.
    fn lower_for(&self, node: Node<'_>) -> Option<Stmt> {
        let body_node = node.child_by_field_name("body")?;
        let header = named_children(node)
            .into_iter()
            .find(|child| child.id() != body_node.id());

        let (init, cond, post) = match header {
            None => (None, None, None),
            Some(clause) if clause.kind() == "for_clause" => (
                clause
                    .child_by_field_name("initializer")
                    .map(|s| Box::new(self.lower_stmt(s))),
                clause
                    .child_by_field_name("condition")
                    .map(|c| self.lower_expr(c)),
                clause
                    .child_by_field_name("update")
                    .map(|s| Box::new(self.lower_stmt(s))),
            ),
            Some(clause) if clause.kind() == "range_clause" => return None,
            Some(cond) => (None, Some(self.lower_expr(cond)), None),
        };

        Some(Stmt::For(ForStmt {
            init,
            cond,
            post,
            body: self.lower_block(body_node),
            span: node_span(node),
        }))
    }
}
