//! Translation results.
//!
//! A declaration either fails, translates exactly, or translates with some
//! constructs replaced by best-effort output. The last case is a distinct
//! variant so callers cannot mistake an approximation for a faithful result.

use gocpp_ir::Span;

/// Why part of a translation is approximate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DegradeReason {
    /// A call that is not one of the recognized idioms; emitted as a placeholder.
    UnrecognizedCall,
    /// A recognized call whose trailing arguments were not translated.
    DroppedArguments { count: usize },
}

/// One approximated construct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Degradation {
    pub reason: DegradeReason,
    /// Original source text of the construct.
    pub text: String,
    pub span: Span,
}

/// The translated text of one function declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Translation {
    Exact(String),
    Degraded {
        text: String,
        degradations: Vec<Degradation>,
    },
}

impl Translation {
    pub(crate) fn new(text: String, degradations: Vec<Degradation>) -> Self {
        if degradations.is_empty() {
            Translation::Exact(text)
        } else {
            Translation::Degraded { text, degradations }
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Translation::Exact(text) | Translation::Degraded { text, .. } => text,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Translation::Degraded { .. })
    }

    pub fn degradations(&self) -> &[Degradation] {
        match self {
            Translation::Exact(_) => &[],
            Translation::Degraded { degradations, .. } => degradations,
        }
    }
}
