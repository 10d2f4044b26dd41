//! Conversion: PriceHistoryResponse → PriceHistory, checked per step.

use super::wire::{PriceHistoryResponse, WirePricePoint};
use super::{PriceHistory, PriceHistoryPoint};
use crate::error::FailureReason;
use thiserror::Error;

/// Why a history body cannot be aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("response body was null")]
    NullBody,
    #[error("response reported success: false")]
    Unsuccessful,
    #[error("response has no prices field")]
    MissingPrices,
    #[error("response has an empty price series")]
    Empty,
}

impl From<PayloadError> for FailureReason {
    fn from(e: PayloadError) -> Self {
        match e {
            PayloadError::Unsuccessful => FailureReason::Unsuccessful,
            PayloadError::NullBody | PayloadError::MissingPrices | PayloadError::Empty => {
                FailureReason::Malformed
            }
        }
    }
}

impl From<WirePricePoint> for PriceHistoryPoint {
    fn from(p: WirePricePoint) -> Self {
        Self {
            timestamp_label: p.0,
            price: p.1,
            volume_label: p.2,
        }
    }
}

impl TryFrom<Option<PriceHistoryResponse>> for PriceHistory {
    type Error = PayloadError;

    fn try_from(source: Option<PriceHistoryResponse>) -> Result<Self, Self::Error> {
        let source = source.ok_or(PayloadError::NullBody)?;
        if !source.success {
            return Err(PayloadError::Unsuccessful);
        }
        let prices = source.prices.ok_or(PayloadError::MissingPrices)?;
        if prices.is_empty() {
            return Err(PayloadError::Empty);
        }

        Ok(PriceHistory {
            success: true,
            points: prices.into_iter().map(PriceHistoryPoint::from).collect(),
            price_prefix: source.price_prefix,
            price_suffix: source.price_suffix,
            failure: None,
        })
    }
}
