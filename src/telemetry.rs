//! Telemetry helpers for applications embedding `sparkline-rs`.
//!
//! The engine only emits `tracing` events; installing a subscriber is left to
//! the host. The helpers here are a convenience for demos and tests.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_FILTER: &str = "sparkline_rs=info";

/// Installs a compact subscriber filtered by `RUST_LOG` or
/// [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_TRACING_FILTER)
}

/// Like [`init_default_tracing`], with a caller-supplied fallback directive
/// such as `"sparkline_rs=trace"` to follow pointer transitions.
#[must_use]
pub fn init_tracing_with_fallback(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn helpers_are_inert_without_feature() {
        assert!(!super::init_default_tracing());
        assert!(!super::init_tracing_with_fallback("sparkline_rs=trace"));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_install_reports_existing_subscriber() {
        let _ = super::init_tracing_with_fallback("sparkline_rs=debug");
        assert!(!super::init_default_tracing());
    }
}
