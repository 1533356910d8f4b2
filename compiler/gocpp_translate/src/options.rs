//! Translation options.

use std::fmt;
use std::str::FromStr;

/// How nested blocks see the bindings of their enclosing blocks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScopePolicy {
    /// Every block starts from an empty scope and sees nothing outside it.
    /// A `:=` inside a nested block always introduces a new C++ binding.
    #[default]
    Isolated,
    /// Scopes are linked to their parent and lookups walk outward, starting
    /// from a function scope that holds the parameters. A `:=` of a name bound
    /// in an enclosing scope becomes a plain assignment to that binding.
    Chained,
}

impl ScopePolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            ScopePolicy::Isolated => "isolated",
            ScopePolicy::Chained => "chained",
        }
    }
}

impl fmt::Display for ScopePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown scope policy `{0}` (expected `isolated` or `chained`)")]
pub struct UnknownScopePolicy(pub String);

impl FromStr for ScopePolicy {
    type Err = UnknownScopePolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "isolated" => Ok(ScopePolicy::Isolated),
            "chained" => Ok(ScopePolicy::Chained),
            other => Err(UnknownScopePolicy(other.to_string())),
        }
    }
}

/// Knobs for a single translation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    pub scope_policy: ScopePolicy,
}

impl TranslateOptions {
    #[must_use]
    pub fn with_scope_policy(mut self, scope_policy: ScopePolicy) -> Self {
        self.scope_policy = scope_policy;
        self
    }
}
