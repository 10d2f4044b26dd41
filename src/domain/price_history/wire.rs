//! Wire types for `market/pricehistory`.

use serde::{Deserialize, Serialize};

/// One `[label, price, volume]` entry: `["Aug 13 2020 01: +0", 1.234, "15"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WirePricePoint(pub String, pub f64, pub String);

/// Raw `pricehistory` body. Steam may also answer with a bare `null`,
/// which the HTTP layer surfaces as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<WirePricePoint>>,
}
