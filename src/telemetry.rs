//! Opt-in tracing setup for hosts embedding `graph-values`.
//!
//! The crate only emits `tracing` events (`debug` for configuration changes,
//! `trace` for per-pass counts). Hosts either call one of the helpers below or
//! install their own subscriber.

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "info";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback directive,
/// e.g. `"graph_values=trace"` while debugging axis layout.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
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
