//! Wire types for `market/priceoverview`.

use serde::{Deserialize, Serialize};

/// Raw `priceoverview` body. Every field except `success` may be absent.
///
/// `{"success":true,"lowest_price":"1,93€","volume":"1,204","median_price":"1,95€"}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceOverviewResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowest_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_price: Option<String>,
}
