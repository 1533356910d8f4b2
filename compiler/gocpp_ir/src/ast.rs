//! Syntax tree for the supported Go subset.
//!
//! Every node kind the translator understands has its own variant; anything
//! else the parser sees is lowered to an `Unsupported(Span)` case so the
//! translator can still report the exact original text. Nodes are plain owned
//! data and are never mutated after lowering.

use crate::{Span, Spanned, Token};

/// A parsed source file: its top-level items in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub items: Vec<Item>,
    pub span: Span,
}

impl SourceFile {
    /// Iterate the function declarations in source order.
    pub fn functions(&self) -> impl Iterator<Item = &FuncDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::Func(func) => Some(func),
            Item::Other { .. } => None,
        })
    }
}

/// A top-level declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    Func(FuncDecl),
    /// Package clause, imports, type/var/const declarations, methods.
    Other { kind: &'static str, span: Span },
}

/// An identifier with its position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Ident {
            name: name.into(),
            span,
        }
    }

    /// The blank identifier `_`.
    pub fn is_blank(&self) -> bool {
        self.name == "_"
    }
}

/// A function declaration: signature plus optional body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: Ident,
    pub params: FieldList,
    pub results: Option<FieldList>,
    /// `None` for a forward declaration (`func f() int` with no body).
    pub body: Option<Block>,
    pub span: Span,
}

/// A parameter or result list.
///
/// `span` covers the parentheses when present, so the reconstructed text is
/// exactly what the user wrote (e.g. `(int, error)`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldList {
    pub fields: Vec<Field>,
    pub span: Span,
}

impl FieldList {
    /// Number of values the list declares.
    ///
    /// A field `a, b int` declares two values; an unnamed field declares one.
    pub fn arity(&self) -> usize {
        self.fields.iter().map(|f| f.names.len().max(1)).sum()
    }
}

/// One `names type` group of a parameter or result list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub names: Vec<Ident>,
    pub ty: TypeExpr,
    pub span: Span,
}

/// A type reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    /// A plain identifier such as `int` or `MyType`.
    Named(Ident),
    /// Pointer, slice, array, map, qualified, function, variadic... types.
    Unsupported(Span),
}

/// A basic literal (number, rune or string). `value` is the literal exactly
/// as written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lit {
    pub value: String,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryExpr {
    pub op: Token,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnaryExpr {
    pub op: Token,
    pub operand: Box<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParenExpr {
    pub inner: Box<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// `operand.field`, e.g. the `errors.New` in `errors.New("boom")`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorExpr {
    pub operand: Box<Expr>,
    pub field: Ident,
    pub span: Span,
}

impl SelectorExpr {
    /// The `(package, member)` pair when this is a two-part qualified name.
    pub fn qualified_name(&self) -> Option<(&str, &str)> {
        match &*self.operand {
            Expr::Ident(pkg) => Some((pkg.name.as_str(), self.field.name.as_str())),
            _ => None,
        }
    }
}

/// Expressions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Lit(Lit),
    Ident(Ident),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Paren(ParenExpr),
    Call(CallExpr),
    Selector(SelectorExpr),
    Unsupported(Span),
}

impl Expr {
    /// Move every direct child expression into `out`, leaving placeholders.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            Expr::Binary(e) => {
                detach(&mut e.lhs, out);
                detach(&mut e.rhs, out);
            }
            Expr::Unary(e) => detach(&mut e.operand, out),
            Expr::Paren(e) => detach(&mut e.inner, out),
            Expr::Call(e) => {
                detach(&mut e.callee, out);
                out.append(&mut e.args);
            }
            Expr::Selector(e) => detach(&mut e.operand, out),
            Expr::Lit(_) | Expr::Ident(_) | Expr::Unsupported(_) => {}
        }
    }
}

fn detach(slot: &mut Expr, out: &mut Vec<Expr>) {
    out.push(std::mem::replace(slot, Expr::Unsupported(Span::DUMMY)));
}

/// Long operator chains nest one box per operand; tear them down with an
/// explicit work list so dropping a tree never recurses per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnStmt {
    pub results: Vec<Expr>,
    pub span: Span,
}

/// `lhs tok rhs` where `tok` is `=`, `:=` or a compound assignment operator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignStmt {
    pub lhs: Vec<Expr>,
    pub tok: Token,
    pub rhs: Vec<Expr>,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Var,
    Const,
}

/// `var`/`const` declaration statement, possibly grouped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclStmt {
    pub kind: DeclKind,
    pub specs: Vec<ValueSpec>,
    pub span: Span,
}

/// `names [type] [= values]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueSpec {
    pub names: Vec<Ident>,
    pub ty: Option<TypeExpr>,
    pub values: Vec<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncDecStmt {
    pub operand: Expr,
    /// `Token::Inc` or `Token::Dec`.
    pub tok: Token,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfStmt {
    pub init: Option<Box<Stmt>>,
    pub cond: Expr,
    pub body: Block,
    /// Either `Stmt::Block` or a chained `Stmt::If`.
    pub else_branch: Option<Box<Stmt>>,
    pub span: Span,
}

/// Three-clause `for`; every clause is optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForStmt {
    pub init: Option<Box<Stmt>>,
    pub cond: Option<Expr>,
    pub post: Option<Box<Stmt>>,
    pub body: Block,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

/// Statements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    Return(ReturnStmt),
    Assign(AssignStmt),
    Decl(DeclStmt),
    IncDec(IncDecStmt),
    If(IfStmt),
    For(ForStmt),
    Block(Block),
    Unsupported(Span),
}

macro_rules! impl_spanned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Spanned for $ty {
                #[inline]
                fn span(&self) -> Span {
                    self.span
                }
            }
        )*
    };
}

impl_spanned!(
    SourceFile,
    Ident,
    FuncDecl,
    FieldList,
    Field,
    Lit,
    BinaryExpr,
    UnaryExpr,
    ParenExpr,
    CallExpr,
    SelectorExpr,
    ReturnStmt,
    AssignStmt,
    DeclStmt,
    ValueSpec,
    IncDecStmt,
    IfStmt,
    ForStmt,
    Block,
);

impl Spanned for Item {
    fn span(&self) -> Span {
        match self {
            Item::Func(func) => func.span,
            Item::Other { span, .. } => *span,
        }
    }
}

impl Spanned for TypeExpr {
    fn span(&self) -> Span {
        match self {
            TypeExpr::Named(ident) => ident.span,
            TypeExpr::Unsupported(span) => *span,
        }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::Lit(e) => e.span,
            Expr::Ident(e) => e.span,
            Expr::Binary(e) => e.span,
            Expr::Unary(e) => e.span,
            Expr::Paren(e) => e.span,
            Expr::Call(e) => e.span,
            Expr::Selector(e) => e.span,
            Expr::Unsupported(span) => *span,
        }
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        match self {
            Stmt::Return(s) => s.span,
            Stmt::Assign(s) => s.span,
            Stmt::Decl(s) => s.span,
            Stmt::IncDec(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::Block(s) => s.span,
            Stmt::Unsupported(span) => *span,
        }
    }
}
