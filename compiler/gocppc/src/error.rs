//! Driver errors and their rendering.

use std::io;
use std::path::PathBuf;

use gocpp_ir::{SourceText, Span};
use gocpp_parse::ParseError;
use gocpp_translate::TranslateError;

/// Why a conversion produced no output.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to read `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The first declaration, in source order, that failed to translate.
    #[error("in function `{function}`: {source}")]
    Translate {
        function: String,
        source: TranslateError,
    },
}

impl ConvertError {
    /// Stable error code, for translation failures.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            ConvertError::Translate { source, .. } => Some(source.code().as_str()),
            ConvertError::Read { .. } | ConvertError::Write { .. } | ConvertError::Parse(_) => None,
        }
    }

    /// Location in the source file, when the error has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ConvertError::Translate { source, .. } => Some(source.span()),
            ConvertError::Parse(error) => error.span(),
            ConvertError::Read { .. } | ConvertError::Write { .. } => None,
        }
    }
}

/// Format an error for the terminal.
///
/// ```text
/// error[E3002]: in function `f`: multiple return types are not supported in C++: (int, error)
///   --> main.go:3:10
/// ```
///
/// The location line is omitted for errors without a span.
pub fn render_error(error: &ConvertError, file: &str, source: &str) -> String {
    let mut out = match error.code() {
        Some(code) => format!("error[{code}]: {error}"),
        None => format!("error: {error}"),
    };
    if let Some(span) = error.span() {
        if span.to_range().end <= source.len() {
            let (line, col) = SourceText::new(source).line_col(span.start);
            out.push_str(&format!("\n  --> {file}:{line}:{col}"));
        }
    }
    out
}
