#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! With the `tracing` feature the macros below are the real `tracing` ones.
//! Without it they expand to nothing, so the layout and text crates can log
//! unconditionally and still build without a `tracing` dependency.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op debug_span macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }
}

/// Span stand-in returned by `debug_span!` when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Enter the span by reference (does nothing).
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }

    /// Enter the span by value, mirroring `tracing::Span::entered`.
    pub fn entered(self) -> NoopGuard {
        NoopGuard
    }
}

/// Guard held for the lifetime of a no-op span.
#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;

#[cfg(all(test, not(feature = "tracing")))]
mod tests {
    #[test]
    fn noop_span_can_be_entered_both_ways() {
        let span = crate::debug_span!("ring", positions = 28);
        let _by_ref = span.enter();
        let _by_value = span.entered();
        crate::debug!(dropped = 3, "ignored");
        crate::trace!("ignored");
    }
}
