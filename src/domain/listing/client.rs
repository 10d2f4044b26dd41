//! Listings sub-client — listing URLs for the client's app.

use crate::client::SteamMarketClient;
use crate::domain::listing::item_url_for;

pub struct Listings<'a> {
    pub(crate) client: &'a SteamMarketClient,
}

impl<'a> Listings<'a> {
    pub fn url(&self, market_hash_name: &str) -> String {
        item_url_for(market_hash_name, self.client.app_id)
    }
}
