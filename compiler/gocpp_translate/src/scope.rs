//! Declared-name tracking for blocks.
//!
//! A `Scope` records which names a block's statements have already declared,
//! so a `:=` can decide between emitting a declaration and a plain
//! assignment. Scopes are created when a block (or an `if`/`for` header) is
//! entered and dropped when it is left; they never escape the translation of
//! that block.
//!
//! Under [`ScopePolicy::Isolated`] a child scope has no parent at all. Under
//! [`ScopePolicy::Chained`] it borrows its parent and lookups walk outward.
//! Duplicate detection always looks at the current level only.

use gocpp_ir::Ident;
use rustc_hash::FxHashSet;

use crate::{ScopePolicy, TranslateError, TranslateResult};

#[derive(Debug)]
pub struct Scope<'p> {
    declared: FxHashSet<String>,
    parent: Option<&'p Scope<'p>>,
    policy: ScopePolicy,
}

impl Scope<'static> {
    /// The outermost scope of a function.
    pub fn root(policy: ScopePolicy) -> Self {
        Scope {
            declared: FxHashSet::default(),
            parent: None,
            policy,
        }
    }
}

impl<'p> Scope<'p> {
    /// A fresh scope for a nested block or statement header.
    pub fn child(&'p self) -> Scope<'p> {
        let parent = match self.policy {
            ScopePolicy::Isolated => None,
            ScopePolicy::Chained => Some(self),
        };
        Scope {
            declared: FxHashSet::default(),
            parent,
            policy: self.policy,
        }
    }

    /// Record `name` as declared at this level.
    ///
    /// The blank identifier is never recorded.
    pub fn declare(&mut self, name: &Ident) -> TranslateResult<()> {
        if name.is_blank() {
            return Ok(());
        }
        if !self.declared.insert(name.name.clone()) {
            return Err(TranslateError::DuplicateDeclaration {
                name: name.name.clone(),
                span: name.span,
            });
        }
        Ok(())
    }

    /// Declared at this level.
    pub fn is_declared_here(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// Declared at this level or, when chained, in any enclosing scope.
    pub fn is_declared(&self, name: &str) -> bool {
        if self.is_declared_here(name) {
            return true;
        }
        let mut next = self.parent;
        while let Some(scope) = next {
            if scope.is_declared_here(name) {
                return true;
            }
            next = scope.parent;
        }
        false
    }
}
