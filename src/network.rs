//! Network URL constants and defaults for the Steam Community Market.

use crate::shared::{AppId, Currency};

/// Default base URL for market requests.
///
/// Point this at a same-origin proxy prefix (e.g. `http://localhost:5173/steam`)
/// when the upstream host is not reachable directly.
pub const DEFAULT_BASE_URL: &str = "https://steamcommunity.com";

/// Public listing pages always live on the real host, never behind a proxy.
pub const LISTING_BASE_URL: &str = "https://steamcommunity.com/market/listings";

/// Path of the point-in-time price endpoint.
pub const PRICE_OVERVIEW_PATH: &str = "/market/priceoverview/";

/// Path of the price history endpoint (requires a logged-in session).
pub const PRICE_HISTORY_PATH: &str = "/market/pricehistory/";

/// CS2.
pub const DEFAULT_APP_ID: AppId = AppId::CS2;

/// Euro.
pub const DEFAULT_CURRENCY: Currency = Currency::EUR;
