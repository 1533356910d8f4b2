//! Statement and block translation.
//!
//! Simple statements (assignments, declarations, `++`/`--`) are first
//! translated to unterminated fragments so they can be reused inside `for`
//! headers; `translate_stmt` terminates them with `;\n`. Translation stops at
//! the first unsupported construct, with nothing emitted for the statement.

use gocpp_ir::{
    AssignStmt, Block, DeclKind, DeclStmt, Expr, ForStmt, Ident, IfStmt, IncDecStmt, ReturnStmt,
    Spanned, Stmt, Token,
};

use gocpp_stack::ensure_sufficient_stack;

use crate::{map_type, Scope, TranslateError, TranslateResult, Translator};

/// Type spelling for a declaration without an explicit type.
const INFERRED_TYPE: &str = "auto";

/// A value bound to the blank identifier is evaluated and discarded.
fn discard(value: &str) -> String {
    format!("(void)({value})")
}

fn is_blank(expr: &Expr) -> bool {
    matches!(expr, Expr::Ident(ident) if ident.is_blank())
}

impl Translator<'_, '_> {
    /// Translate a block with a fresh scope derived from `enclosing`.
    ///
    /// Produces `{\n<statements>}` with no trailing newline.
    pub fn translate_block(&mut self, block: &Block, enclosing: &Scope<'_>) -> TranslateResult<String> {
        let mut scope = enclosing.child();
        let mut out = String::from("{\n");
        for stmt in &block.stmts {
            out.push_str(&self.translate_stmt(stmt, &mut scope)?);
        }
        out.push('}');
        Ok(out)
    }

    /// Translate one statement, including its terminator.
    pub fn translate_stmt(&mut self, stmt: &Stmt, scope: &mut Scope<'_>) -> TranslateResult<String> {
        ensure_sufficient_stack(|| self.translate_stmt_inner(stmt, scope))
    }

    fn translate_stmt_inner(&mut self, stmt: &Stmt, scope: &mut Scope<'_>) -> TranslateResult<String> {
        match stmt {
            Stmt::Return(ret) => self.translate_return(ret),
            Stmt::Assign(_) | Stmt::Decl(_) | Stmt::IncDec(_) => {
                let fragments = self.translate_simple(stmt, scope)?;
                Ok(terminate(&fragments))
            }
            Stmt::If(if_stmt) => self.translate_if(if_stmt, scope),
            Stmt::For(for_stmt) => self.translate_for(for_stmt, scope),
            Stmt::Block(block) => Ok(self.translate_block(block, scope)? + "\n"),
            Stmt::Unsupported(_) => Err(self.unsupported_stmt(stmt)),
        }
    }

    /// Statements allowed in `if`/`for` headers, as unterminated fragments.
    fn translate_simple(&mut self, stmt: &Stmt, scope: &mut Scope<'_>) -> TranslateResult<Vec<String>> {
        match stmt {
            Stmt::Assign(assign) => self.translate_assign(assign, scope),
            Stmt::Decl(decl) => self.translate_decl(decl, scope),
            Stmt::IncDec(inc_dec) => Ok(vec![self.translate_inc_dec(inc_dec)?]),
            Stmt::Return(_)
            | Stmt::If(_)
            | Stmt::For(_)
            | Stmt::Block(_)
            | Stmt::Unsupported(_) => Err(self.unsupported_stmt(stmt)),
        }
    }

    fn unsupported_stmt<N: Spanned + ?Sized>(&self, node: &N) -> TranslateError {
        TranslateError::UnsupportedStatement {
            text: self.text_of(node),
            span: node.span(),
        }
    }

    fn translate_return(&mut self, ret: &ReturnStmt) -> TranslateResult<String> {
        match ret.results.as_slice() {
            [] => Ok("return;\n".to_string()),
            [value] => Ok(format!("return {};\n", self.translate_expr(value)?)),
            _ => Err(TranslateError::MultipleReturnUnsupported {
                text: self.text_of(ret),
                span: ret.span,
            }),
        }
    }

    /// Left and right sides are paired positionally; each pair becomes its own
    /// fragment. `_ = x` discards `x`.
    fn translate_assign(&mut self, assign: &AssignStmt, scope: &mut Scope<'_>) -> TranslateResult<Vec<String>> {
        if assign.lhs.len() != assign.rhs.len() || !assign.tok.is_assignment() {
            return Err(self.unsupported_stmt(assign));
        }
        if assign.tok == Token::Define {
            return self.translate_define(assign, scope);
        }

        let mut fragments = Vec::with_capacity(assign.lhs.len());
        for (lhs, rhs) in assign.lhs.iter().zip(&assign.rhs) {
            let right = self.translate_expr(rhs)?;
            if assign.tok == Token::Assign && is_blank(lhs) {
                fragments.push(discard(&right));
                continue;
            }
            let left = self.translate_expr(lhs)?;
            fragments.push(format!("{left} {} {right}", assign.tok));
        }
        Ok(fragments)
    }

    /// `a, b := x, y`: new names get `auto`, names already bound become plain
    /// assignments and values bound to `_` are discarded. At least one
    /// non-blank name must be new at this level.
    fn translate_define(&mut self, assign: &AssignStmt, scope: &mut Scope<'_>) -> TranslateResult<Vec<String>> {
        let names = assign
            .lhs
            .iter()
            .map(|lhs| match lhs {
                Expr::Ident(ident) => Ok(ident),
                _ => Err(self.unsupported_stmt(assign)),
            })
            .collect::<TranslateResult<Vec<&Ident>>>()?;

        let fresh = names
            .iter()
            .any(|name| !name.is_blank() && !scope.is_declared_here(&name.name));
        if !fresh {
            if let Some(first) = names.iter().find(|name| !name.is_blank()).or(names.first()) {
                return Err(TranslateError::DuplicateDeclaration {
                    name: first.name.clone(),
                    span: first.span,
                });
            }
        }

        let mut fragments = Vec::with_capacity(names.len());
        for (name, rhs) in names.into_iter().zip(&assign.rhs) {
            let right = self.translate_expr(rhs)?;
            if name.is_blank() {
                fragments.push(discard(&right));
            } else if scope.is_declared(&name.name) {
                fragments.push(format!("{} = {right}", name.name));
            } else {
                scope.declare(name)?;
                fragments.push(format!("{INFERRED_TYPE} {} = {right}", name.name));
            }
        }
        Ok(fragments)
    }

    /// `var`/`const` specs. Every name is declared in `scope`; repeating a name
    /// within the same scope fails. A blank name keeps only its value, if any.
    fn translate_decl(&mut self, decl: &DeclStmt, scope: &mut Scope<'_>) -> TranslateResult<Vec<String>> {
        let qualifier = match decl.kind {
            DeclKind::Var => "",
            DeclKind::Const => "const ",
        };

        let mut fragments = Vec::new();
        for spec in &decl.specs {
            let ty = match &spec.ty {
                Some(ty) => map_type(ty, self.src)?,
                None => INFERRED_TYPE,
            };
            if !spec.values.is_empty() && spec.values.len() != spec.names.len() {
                return Err(self.unsupported_stmt(spec));
            }

            for (i, name) in spec.names.iter().enumerate() {
                if name.is_blank() {
                    if let Some(value) = spec.values.get(i) {
                        fragments.push(discard(&self.translate_expr(value)?));
                    }
                    continue;
                }
                scope.declare(name)?;
                let mut fragment = format!("{qualifier}{ty} {}", name.name);
                if let Some(value) = spec.values.get(i) {
                    fragment.push_str(" = ");
                    fragment.push_str(&self.translate_expr(value)?);
                }
                fragments.push(fragment);
            }
        }
        Ok(fragments)
    }

    fn translate_inc_dec(&mut self, inc_dec: &IncDecStmt) -> TranslateResult<String> {
        let operand = self.translate_expr(&inc_dec.operand)?;
        Ok(format!("{operand}{}", inc_dec.tok))
    }

    /// `if(cond) {...}[ else ...]`. An initializer is emitted ahead of the
    /// `if` inside a wrapping block so its bindings stay local.
    fn translate_if(&mut self, if_stmt: &IfStmt, scope: &Scope<'_>) -> TranslateResult<String> {
        let mut header = scope.child();
        let init = match &if_stmt.init {
            Some(init) => Some(self.translate_simple(init, &mut header)?),
            None => None,
        };

        let mut out = String::new();
        if let Some(fragments) = &init {
            out.push_str("{\n");
            out.push_str(&terminate(fragments));
        }
        out.push_str(&self.translate_if_chain(if_stmt, &header)?);
        out.push('\n');
        if init.is_some() {
            out.push_str("}\n");
        }
        Ok(out)
    }

    fn translate_if_chain(&mut self, if_stmt: &IfStmt, header: &Scope<'_>) -> TranslateResult<String> {
        ensure_sufficient_stack(|| self.translate_if_chain_inner(if_stmt, header))
    }

    fn translate_if_chain_inner(&mut self, if_stmt: &IfStmt, header: &Scope<'_>) -> TranslateResult<String> {
        let cond = self.translate_expr(&if_stmt.cond)?;
        let body = self.translate_block(&if_stmt.body, header)?;
        let mut out = format!("if({cond}) {body}");

        match if_stmt.else_branch.as_deref() {
            None => {}
            Some(Stmt::Block(block)) => {
                out.push_str(" else ");
                out.push_str(&self.translate_block(block, header)?);
            }
            Some(Stmt::If(nested)) if nested.init.is_none() => {
                out.push_str(" else ");
                out.push_str(&self.translate_if_chain(nested, header)?);
            }
            Some(Stmt::If(nested)) => {
                out.push_str(" else {\n");
                out.push_str(&self.translate_if(nested, header)?);
                out.push('}');
            }
            Some(other) => return Err(self.unsupported_stmt(other)),
        }
        Ok(out)
    }

    /// `for(init; cond; post) {...}`. The header has its own scope shared by
    /// the initializer and the post statement.
    fn translate_for(&mut self, for_stmt: &ForStmt, scope: &Scope<'_>) -> TranslateResult<String> {
        let mut header = scope.child();
        let init = match &for_stmt.init {
            Some(init) => self.translate_simple(init, &mut header)?,
            None => Vec::new(),
        };
        let cond = match &for_stmt.cond {
            Some(cond) => self.translate_expr(cond)?,
            None => String::new(),
        };
        let post = match &for_stmt.post {
            Some(post) => self.translate_simple(post, &mut header)?.join(", "),
            None => String::new(),
        };
        let body = self.translate_block(&for_stmt.body, &header)?;

        // A multi-statement initializer cannot live in the header.
        let (hoisted, init) = match init.as_slice() {
            [] => (None, String::new()),
            [single] => (None, single.clone()),
            many => (Some(terminate(many)), String::new()),
        };

        let mut out = String::new();
        if let Some(hoisted) = &hoisted {
            out.push_str("{\n");
            out.push_str(hoisted);
        }
        out.push_str(&format!("for({init};{};{}) {body}\n", pad(&cond), pad(&post)));
        if hoisted.is_some() {
            out.push_str("}\n");
        }
        Ok(out)
    }
}

/// Terminate each fragment as its own statement.
fn terminate(fragments: &[String]) -> String {
    fragments.iter().map(|f| format!("{f};\n")).collect()
}

/// `" clause"`, or nothing for an empty clause.
fn pad(clause: &str) -> String {
    if clause.is_empty() {
        String::new()
    } else {
        format!(" {clause}")
    }
}
