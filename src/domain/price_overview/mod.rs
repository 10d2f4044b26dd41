//! Price overview domain — point-in-time lowest/median price for one item.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::error::FailureReason;
use serde::{Deserialize, Serialize};

/// Point-in-time prices for one item, in the requested currency.
///
/// Check `success` before reading any price: a failed snapshot never carries
/// prices, and a successful one may still lack either of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub success: bool,
    pub lowest_price: Option<f64>,
    pub median_price: Option<f64>,
    /// Units sold in the last 24 hours.
    pub volume: Option<u64>,
    pub failure: Option<FailureReason>,
    pub raw: wire::PriceOverviewResponse,
}

impl PriceSnapshot {
    /// A snapshot for a lookup that never produced a usable body.
    pub fn failed(reason: FailureReason) -> Self {
        Self {
            success: false,
            lowest_price: None,
            median_price: None,
            volume: None,
            failure: Some(reason),
            raw: wire::PriceOverviewResponse::default(),
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.failure.is_some_and(|f| f.is_rate_limited())
    }
}
