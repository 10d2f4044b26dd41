//! Price history domain — hourly/daily sale points and trailing averages.

pub mod aggregate;
#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::error::FailureReason;
use crate::shared::{parse_history_timestamp, parse_volume};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use aggregate::{trailing_mean, trailing_mean_at};
pub use convert::PayloadError;

/// Default lookback for [`trailing_mean`]: seven days.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// One sale bucket from the history series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryPoint {
    /// Steam's label, e.g. `"Aug 13 2020 01: +0"`.
    pub timestamp_label: String,
    /// Median sale price in the bucket, in the session's wallet currency.
    pub price: f64,
    /// Units sold, as Steam formats it (`"1,203"`).
    pub volume_label: String,
}

impl PriceHistoryPoint {
    pub fn new(timestamp_label: impl Into<String>, price: f64, volume_label: impl Into<String>) -> Self {
        Self {
            timestamp_label: timestamp_label.into(),
            price,
            volume_label: volume_label.into(),
        }
    }

    /// Epoch milliseconds, `None` if the label is not in Steam's format.
    pub fn timestamp_ms(&self) -> Option<i64> {
        parse_history_timestamp(&self.timestamp_label)
    }

    /// Units sold; unreadable labels count as zero.
    pub fn volume(&self) -> u64 {
        parse_volume(&self.volume_label)
    }
}

/// A fetched history series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub success: bool,
    pub points: Vec<PriceHistoryPoint>,
    pub price_prefix: Option<String>,
    pub price_suffix: Option<String>,
    pub failure: Option<FailureReason>,
}

impl PriceHistory {
    pub fn failed(reason: FailureReason) -> Self {
        Self {
            success: false,
            points: Vec::new(),
            price_prefix: None,
            price_suffix: None,
            failure: Some(reason),
        }
    }
}

/// Volume-weighted mean price over a trailing window.
///
/// `mean_price` is `None` whenever `volume == 0`. That includes a successful
/// lookup with no sales in the window, which is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowedMeanResult {
    pub success: bool,
    pub mean_price: Option<f64>,
    pub volume: u64,
    pub rate_limited: bool,
    pub failure: Option<FailureReason>,
}

impl WindowedMeanResult {
    pub fn failed(reason: FailureReason) -> Self {
        Self {
            success: false,
            mean_price: None,
            volume: 0,
            rate_limited: reason.is_rate_limited(),
            failure: Some(reason),
        }
    }

    /// Successful lookup, no trade volume inside the window.
    pub fn no_volume() -> Self {
        Self {
            success: true,
            mean_price: None,
            volume: 0,
            rate_limited: false,
            failure: None,
        }
    }
}
