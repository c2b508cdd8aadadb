//! Optional log output for hosts that have no subscriber of their own.
//!
//! The layout passes report through `tracing`: one `debug` event per
//! `plan_layout` call and per rendered chart, `trace` events carrying the
//! compensated value range and every bar rectangle, and `warn` events when
//! the chart height leaves a partial grid row or the bars overlap.

/// Filter applied when `RUST_LOG` is unset or unparsable.
#[cfg(feature = "telemetry")]
const FALLBACK_FILTER: &str = "floating_bars=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Gives `false` without the `telemetry` feature, or when the process already
/// has a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(FALLBACK_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
