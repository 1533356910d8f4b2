//! gocpp translate - Go subset to C++ text
//!
//! The translation engine. Given a parsed function declaration and the source
//! buffer it came from, produce the C++ text for it or the first reason it
//! cannot be translated.
//!
//! Pieces, bottom-up:
//! - [`map_type`]: Go primitive type names to C++/Qt names
//! - [`Translator::translate_expr`]: expressions, including the
//!   error-construction idioms
//! - [`Scope`]: names declared so far in a block
//! - [`Translator::translate_block`] / [`Translator::translate_stmt`]:
//!   statements and blocks
//! - [`translate_function`]: a whole declaration, the public entry point
//!
//! Translation is pure: it reads the tree and the source buffer and returns
//! text. It never logs failures and never writes anywhere; the caller decides
//! what to do with an error.

mod decl;
mod error;
mod expr;
mod options;
mod output;
mod scope;
mod stmt;
mod translator;
mod types;

pub use decl::translate_function;
pub use error::{ErrorCode, TranslateError, TranslateResult};
pub use expr::{is_supported_binary_op, is_supported_unary_op, ErrorIdiom, CALL_PLACEHOLDER};
pub use options::{ScopePolicy, TranslateOptions, UnknownScopePolicy};
pub use output::{DegradeReason, Degradation, Translation};
pub use scope::Scope;
pub use translator::Translator;
pub use types::{map_type, PrimitiveType};
