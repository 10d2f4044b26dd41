//! History sub-client — price series and trailing averages.

use crate::client::SteamMarketClient;
use crate::domain::price_history::{PriceHistory, WindowedMeanResult};
use crate::domain::LookupOptions;
use crate::error::{FailureReason, SdkError};
use crate::http::RetryPolicy;
use crate::shared::MarketHashName;
use std::time::Duration;

/// Sub-client for `pricehistory` lookups.
///
/// Steam only serves history to a logged-in session; without one the
/// lookup fails with [`FailureReason::Unauthorized`] or an empty body.
pub struct History<'a> {
    pub(crate) client: &'a SteamMarketClient,
}

impl<'a> History<'a> {
    /// Fetch the full price series for one item.
    pub async fn get(
        &self,
        name: impl Into<MarketHashName>,
        options: LookupOptions,
    ) -> Result<PriceHistory, SdkError> {
        let name = name.into();
        let app_id = options.app_id.unwrap_or(self.client.app_id);
        let retry = options
            .retry
            .or_else(|| self.client.history_retry.clone())
            .map(RetryPolicy::Custom)
            .unwrap_or(RetryPolicy::PriceHistory);

        let result = self
            .client
            .http
            .get_price_history(app_id, &name, retry, options.cancel)
            .await;

        let body = match result {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(item = %name, error = %e, "Price history lookup failed");
                return Ok(PriceHistory::failed(FailureReason::try_from(e)?));
            }
        };

        Ok(PriceHistory::try_from(body).unwrap_or_else(|e| {
            tracing::debug!(item = %name, reason = %e, "Unusable price history payload");
            PriceHistory::failed(e.into())
        }))
    }

    /// Volume-weighted mean price over the trailing `window`.
    ///
    /// See [`trailing_mean`](crate::domain::price_history::trailing_mean) for
    /// the aggregation rules.
    pub async fn trailing_mean(
        &self,
        name: impl Into<MarketHashName>,
        window: Duration,
        options: LookupOptions,
    ) -> Result<WindowedMeanResult, SdkError> {
        let history = self.get(name, options).await?;
        Ok(history.trailing_mean(window))
    }
}
