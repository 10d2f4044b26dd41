//! Listing domain — public Steam Market listing page URLs.

#[cfg(feature = "http")]
pub mod client;

use crate::network::{DEFAULT_APP_ID, LISTING_BASE_URL};
use crate::shared::AppId;

/// Public listing URL for a CS2 item.
///
/// `item_url("Operation Bravo Case")` →
/// `https://steamcommunity.com/market/listings/730/Operation%20Bravo%20Case`
pub fn item_url(market_hash_name: &str) -> String {
    item_url_for(market_hash_name, DEFAULT_APP_ID)
}

/// Public listing URL for an item of any Steam app.
///
/// Every byte outside `A-Z a-z 0-9 - . _ ~` is percent-encoded, including
/// `( ) ! * '`. Browser `encodeURIComponent` leaves those five alone, so a
/// name like `"Redline (Field-Tested)"` yields `%28Field-Tested%29` here where
/// Steam's own links show `(Field-Tested)`. Steam resolves both forms.
pub fn item_url_for(market_hash_name: &str, app_id: AppId) -> String {
    format!(
        "{}/{}/{}",
        LISTING_BASE_URL,
        app_id,
        urlencoding::encode(market_hash_name)
    )
}
