//! Conversion: PriceOverviewResponse → PriceSnapshot.

use super::wire::PriceOverviewResponse;
use super::PriceSnapshot;
use crate::error::FailureReason;
use crate::shared::{parse_price, parse_volume};

impl From<PriceOverviewResponse> for PriceSnapshot {
    fn from(raw: PriceOverviewResponse) -> Self {
        if !raw.success {
            return Self {
                raw,
                ..PriceSnapshot::failed(FailureReason::Unsuccessful)
            };
        }

        Self {
            success: true,
            lowest_price: parse_price(raw.lowest_price.as_deref()),
            median_price: parse_price(raw.median_price.as_deref()),
            volume: raw.volume.as_deref().map(parse_volume),
            failure: None,
            raw,
        }
    }
}
