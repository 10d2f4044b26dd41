//! Volume-weighted mean over a trailing time window.

use super::{PriceHistory, PriceHistoryPoint, WindowedMeanResult};
use crate::error::FailureReason;
use chrono::Utc;
use std::time::Duration;

/// Volume-weighted mean of the points whose timestamp lies within `window`
/// of the current time.
pub fn trailing_mean(history: &[PriceHistoryPoint], window: Duration) -> WindowedMeanResult {
    trailing_mean_at(history, window, Utc::now().timestamp_millis())
}

/// [`trailing_mean`] against an explicit clock (`now_ms`, epoch millis).
///
/// Points with unreadable timestamps, timestamps before `now_ms - window`,
/// or zero volume are skipped. An empty series is a failed lookup; a series
/// with no volume inside the window is a successful one with no mean.
pub fn trailing_mean_at(
    history: &[PriceHistoryPoint],
    window: Duration,
    now_ms: i64,
) -> WindowedMeanResult {
    if history.is_empty() {
        return WindowedMeanResult::failed(FailureReason::Malformed);
    }

    let window_ms = i64::try_from(window.as_millis()).unwrap_or(i64::MAX);
    let cutoff = now_ms.saturating_sub(window_ms);

    let mut weighted_sum = 0.0;
    let mut volume_sum: u64 = 0;

    for point in history {
        let Some(ts) = point.timestamp_ms() else {
            tracing::trace!(label = %point.timestamp_label, "Skipping unparseable history label");
            continue;
        };
        if ts < cutoff {
            continue;
        }
        let volume = point.volume();
        if volume == 0 {
            continue;
        }
        weighted_sum += point.price * volume as f64;
        volume_sum = volume_sum.saturating_add(volume);
    }

    if volume_sum == 0 {
        return WindowedMeanResult::no_volume();
    }

    WindowedMeanResult {
        success: true,
        mean_price: Some(weighted_sum / volume_sum as f64),
        volume: volume_sum,
        rate_limited: false,
        failure: None,
    }
}

impl PriceHistory {
    /// Trailing mean of this series, or the fetch failure carried through.
    pub fn trailing_mean(&self, window: Duration) -> WindowedMeanResult {
        self.trailing_mean_at(window, Utc::now().timestamp_millis())
    }

    pub fn trailing_mean_at(&self, window: Duration, now_ms: i64) -> WindowedMeanResult {
        if !self.success {
            return WindowedMeanResult::failed(self.failure.unwrap_or(FailureReason::Malformed));
        }
        trailing_mean_at(&self.points, window, now_ms)
    }
}
