//! Stack safety for the recursive stages.
//!
//! Both the parser and the evaluator recurse once per nesting level of the
//! input, so `((((1))))` or `!!!!!!x` of arbitrary depth would otherwise be
//! able to overflow the native stack. Every recursive entry point wraps its
//! body in [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! This removes the crash, not the cost: a caller that parses untrusted
//! input should still set a nesting limit (`lox_parse::ParseOptions`).
//!
//! - **Red zone**: 64KB. Below this much remaining stack, a new segment is allocated.
//! - **Segment size**: 1MB per growth.

/// Remaining stack below which we grow.
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    #[test]
    fn passes_result_through() {
        let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("fault"));
        assert_eq!(result, Err("fault"));
    }

    #[test]
    fn shallow_recursion() {
        assert_eq!(depth(16), 16);
    }

    #[test]
    fn deep_recursion_does_not_overflow() {
        assert_eq!(depth(200_000), 200_000);
    }
}
