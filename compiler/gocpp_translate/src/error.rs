//! Translation failures.
//!
//! Every failure is fatal to the declaration being translated. Variants carry
//! the offending span plus the reconstructed source text, so a caller can
//! report the error without access to the tree.

use std::fmt;

use gocpp_ir::{Span, Token};

/// Stable codes for translation errors.
///
/// Format: E#### where the first digit indicates the category:
/// - E2xxx: construct outside the supported subset
/// - E3xxx: limitation of the target model
/// - E4xxx: declaration conflicts
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unsupported expression
    E2001,
    /// Unsupported operator
    E2002,
    /// Unsupported statement
    E2003,
    /// Unsupported type shape
    E2004,
    /// Unknown primitive type
    E2005,
    /// Recognized call used with the wrong arguments
    E2006,
    /// Multiple return values
    E3001,
    /// Multiple result types
    E3002,
    /// Unnamed parameter
    E3003,
    /// Duplicate declaration
    E4001,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E4001 => "E4001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A construct the translator cannot express.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("unsupported expression: {text}")]
    UnsupportedExpression { text: String, span: Span },

    /// `text` is the whole expression, not just the operator.
    #[error("unsupported operator `{op}` in: {text}")]
    UnsupportedOperator { op: Token, text: String, span: Span },

    #[error("unsupported statement: {text}")]
    UnsupportedStatement { text: String, span: Span },

    #[error("unsupported type: {text}")]
    UnsupportedTypeShape { text: String, span: Span },

    #[error("unknown primitive type: {name}")]
    UnknownPrimitiveType { name: String, span: Span },

    #[error("wrong call expression: {text}")]
    MalformedCall { text: String, span: Span },

    #[error("multiple return values are not supported: {text}")]
    MultipleReturnUnsupported { text: String, span: Span },

    #[error("multiple return types are not supported in C++: {text}")]
    MultipleReturnTypesUnsupported { text: String, span: Span },

    #[error("variable already declared: {name}")]
    DuplicateDeclaration { name: String, span: Span },

    #[error("parameter has no name: {text}")]
    MissingParameterName { text: String, span: Span },
}

impl TranslateError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TranslateError::UnsupportedExpression { .. } => ErrorCode::E2001,
            TranslateError::UnsupportedOperator { .. } => ErrorCode::E2002,
            TranslateError::UnsupportedStatement { .. } => ErrorCode::E2003,
            TranslateError::UnsupportedTypeShape { .. } => ErrorCode::E2004,
            TranslateError::UnknownPrimitiveType { .. } => ErrorCode::E2005,
            TranslateError::MalformedCall { .. } => ErrorCode::E2006,
            TranslateError::MultipleReturnUnsupported { .. } => ErrorCode::E3001,
            TranslateError::MultipleReturnTypesUnsupported { .. } => ErrorCode::E3002,
            TranslateError::MissingParameterName { .. } => ErrorCode::E3003,
            TranslateError::DuplicateDeclaration { .. } => ErrorCode::E4001,
        }
    }

    /// Where in the source the failure happened.
    pub fn span(&self) -> Span {
        match self {
            TranslateError::UnsupportedExpression { span, .. }
            | TranslateError::UnsupportedOperator { span, .. }
            | TranslateError::UnsupportedStatement { span, .. }
            | TranslateError::UnsupportedTypeShape { span, .. }
            | TranslateError::UnknownPrimitiveType { span, .. }
            | TranslateError::MalformedCall { span, .. }
            | TranslateError::MultipleReturnUnsupported { span, .. }
            | TranslateError::MultipleReturnTypesUnsupported { span, .. }
            | TranslateError::DuplicateDeclaration { span, .. }
            | TranslateError::MissingParameterName { span, .. } => *span,
        }
    }
}

/// Result type for translation operations.
pub type TranslateResult<T> = Result<T, TranslateError>;
