//! Stack growth for deep recursion.
//!
//! The importer recurses once per nesting level of the input document.
//! Machine-generated documents (long `a + b + c + ...` chains, deeply nested
//! blocks) can nest far deeper than hand-written code, so every recursive
//! step runs inside [`ensure_sufficient_stack`].
//!
//! On native targets the stack grows on demand through `stacker`; on WASM
//! the call is a passthrough.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (1MB).
const GROWTH: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
