use crate::core::prelude::*;
use tracing_subscriber::fmt::time::OffsetTime;

/// Installs a `tracing` subscriber that writes to the test-aware stdout writer.
///
/// The library itself never installs a subscriber; binaries and tests opt in by calling this
/// once. Calling it again after a subscriber is already set returns an error, which tests
/// ignore:
///
/// ```
/// let _ = geomkit::util::setup_log();
/// ```
pub fn setup_log() -> Result<()> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_test_writer()
        .try_init()
        .map_err(|e| anyhow!(e))
}

pub mod gg_float {
    use num_traits::Float;
    use std::num::FpCategory;

    /// Like [`Float::is_finite`], but also rejects subnormal values.
    pub fn is_finite<T: Float>(x: T) -> bool {
        matches!(x.classify(), FpCategory::Zero | FpCategory::Normal)
    }

    pub fn force_positive_zero<T: Float>(x: T) -> T {
        if x.is_zero() { T::zero() } else { x }
    }

    /// Whether `a` and `b` differ by at most `tolerance`. Non-finite values compare exactly.
    pub fn approx_eq<T: Float>(a: T, b: T, tolerance: T) -> bool {
        if a.is_finite() && b.is_finite() {
            (a - b).abs() <= tolerance
        } else {
            a == b
        }
    }
}
