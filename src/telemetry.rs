//! Opt-in tracing setup for hosts embedding `dashboard-charts`.
//!
//! The library only emits `tracing` events. Hosts either call one of these
//! helpers or install their own subscriber.

/// Filter directive used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER_DIRECTIVE: &str = "dashboard_charts=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `fallback_directive`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_tracing_with_default_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}

/// [`init_tracing_with_default_filter`] with [`DEFAULT_FILTER_DIRECTIVE`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default_filter(DEFAULT_FILTER_DIRECTIVE)
}
