//! Stack growth for deep recursion.
//!
//! Lowering and translation both walk the syntax tree recursively, one frame
//! per nesting level. A long operator chain such as `a + a + ... + a` nests
//! one level per operand, so the walk is guarded with
//! [`ensure_sufficient_stack`] instead of relying on the thread's default
//! stack size.
//!
//! On native targets the stack is grown on demand with `stacker`. On wasm32
//! the closure runs directly.

/// Grow the stack when less than this much (100KB) remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// nearly exhausted.
///
/// ```text
/// fn depth(expr: &Expr) -> usize {
///     ensure_sufficient_stack(|| match expr {
///         Expr::Paren(p) => 1 + depth(&p.inner),
///         _ => 0,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// wasm32 manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
