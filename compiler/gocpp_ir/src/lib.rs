//! gocpp IR - Syntax Tree Types
//!
//! This crate contains the data structures shared by the parser collaborator
//! and the translation engine:
//! - Spans for source locations
//! - Operator tokens
//! - Syntax tree nodes (`Decl`, `Stmt`, `Expr`, ...)
//! - `SourceText` for reconstructing the original text of a node
//!
//! # Design Philosophy
//!
//! - **Closed Sum Types**: one variant per supported node kind plus an
//!   `Unsupported(Span)` catch-all, so translation is an exhaustive match.
//! - **Read-Only Tree**: the translator only borrows nodes; it never mutates them.
//! - **Byte Offsets Everywhere**: every node carries a `Span` into the exact
//!   buffer that was parsed.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod source;
mod span;
mod token;
mod traits;

pub use ast::{
    AssignStmt, BinaryExpr, Block, CallExpr, DeclKind, DeclStmt, Expr, Field, FieldList, ForStmt,
    FuncDecl, Ident, IfStmt, IncDecStmt, Item, Lit, ParenExpr, ReturnStmt, SelectorExpr,
    SourceFile, Stmt, TypeExpr, UnaryExpr, ValueSpec,
};
pub use source::{LineOffsetTable, SourceText};
pub use span::Span;
pub use token::Token;
pub use traits::Spanned;
