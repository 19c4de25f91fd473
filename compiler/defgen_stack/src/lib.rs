//! Stack safety for deep recursion.
//!
//! Macro bodies and reference chains are walked recursively. A generated
//! definitions file can chain thousands of macros, so each recursive step
//! goes through [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! - **Native targets**: `stacker` grows the stack.
//! - **WASM targets**: plain call.

/// If less than this remains, grow the stack (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
///
/// ```text
/// fn resolve(&mut self, name: &Name) -> EvalResult {
///     ensure_sufficient_stack(|| self.resolve_uncached(name))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
