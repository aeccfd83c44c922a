//! Level-tagged tracing macros for the filter pipeline.
//!
//! `create_hybrid_image` opens an `INFO` span; the correlation and band
//! filters it drives open `DEBUG` spans underneath it. Without the
//! `tracing` feature both macros expand to nothing observable.
//!
//! ```ignore
//! let _span = trace_span!(DEBUG, "low_pass", sigma = sigma).entered();
//! trace_event!(INFO, "hybrid_mixed", mixin_ratio = ratio);
//! ```

#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($level:ident, $name:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::span!(tracing::Level::$level, $name $(, $key = $value)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($level:ident, $name:expr $(, $key:ident = $value:expr)* $(,)?) => {{
        let _ = ($($value,)*);
        $crate::trace::NoopSpan
    }};
}

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::event!(name: $name, tracing::Level::$level, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Span guard returned by `trace_span!` when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
pub(crate) struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    #[inline]
    pub(crate) fn entered(self) -> Self {
        self
    }
}
