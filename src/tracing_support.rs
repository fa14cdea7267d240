//! Tracing support for diagnostics.
//!
//! This module re-exports the `tracing` macros used by the crate when the
//! `tracing` feature is enabled, and provides no-op replacements when it's
//! disabled, so call sites never need their own `cfg` attributes.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing::Level;
    use tracing_subscriber::{
        Layer, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    };

    /// Installs a formatting subscriber writing to stderr.  Only the first call
    /// has any effect; later calls, or a subscriber installed elsewhere, win.
    ///
    /// With `verbose` set, per-operation debug events are shown; otherwise
    /// only warnings and errors.
    pub fn init_tracing(verbose: bool) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let level = if verbose { Level::DEBUG } else { Level::WARN };
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(LevelFilter::from_level(level));
            let _ = tracing_subscriber::registry().with(layer).try_init();
        });
    }

    // Re-export tracing macros for convenience
    pub use tracing::{debug, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing(_verbose: bool) {
        // No-op when tracing is disabled
    }

    // Provide no-op macro replacements for the tracing macros
    #[macro_export]
    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    #[macro_export]
    macro_rules! debug {
        ($($tokens:tt)*) => {{}};
    }

    #[macro_export]
    macro_rules! trace {
        ($($tokens:tt)*) => {{}};
    }

    pub use {debug, info_span, trace};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

// Re-export the appropriate implementation
#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
