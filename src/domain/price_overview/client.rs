//! Prices sub-client — point-in-time price lookups.

use crate::client::SteamMarketClient;
use crate::domain::price_overview::PriceSnapshot;
use crate::domain::LookupOptions;
use crate::error::{FailureReason, SdkError};
use crate::http::cancel::run_until_cancelled;
use crate::http::RetryPolicy;
use crate::shared::MarketHashName;
use std::time::Duration;

/// Sub-client for `priceoverview` lookups.
pub struct Prices<'a> {
    pub(crate) client: &'a SteamMarketClient,
}

impl<'a> Prices<'a> {
    /// Look up the current lowest and median price of one item.
    ///
    /// Upstream failures come back as a snapshot with `success == false`;
    /// the only `Err` is [`SdkError::Cancelled`].
    pub async fn get(
        &self,
        name: impl Into<MarketHashName>,
        options: LookupOptions,
    ) -> Result<PriceSnapshot, SdkError> {
        let name = name.into();
        let app_id = options.app_id.unwrap_or(self.client.app_id);
        let currency = options.currency.unwrap_or(self.client.currency);
        let retry = options
            .retry
            .or_else(|| self.client.overview_retry.clone())
            .map(RetryPolicy::Custom)
            .unwrap_or(RetryPolicy::PriceOverview);

        let result = self
            .client
            .http
            .get_price_overview(app_id, currency, &name, retry, options.cancel)
            .await;

        match result {
            Ok(raw) => Ok(PriceSnapshot::from(raw)),
            Err(e) => {
                tracing::debug!(item = %name, error = %e, "Price lookup failed");
                Ok(PriceSnapshot::failed(FailureReason::try_from(e)?))
            }
        }
    }

    /// Look up several items one after another, pausing between requests.
    ///
    /// Steam rate-limits `priceoverview` per client; `pause` is the only
    /// throttling applied. Results keep the input order. `options` apply to
    /// every item, and its cancel token covers the whole batch, pauses included.
    pub async fn get_many<I, N>(
        &self,
        names: I,
        pause: Duration,
        options: LookupOptions,
    ) -> Result<Vec<(MarketHashName, PriceSnapshot)>, SdkError>
    where
        I: IntoIterator<Item = N>,
        N: Into<MarketHashName>,
    {
        let LookupOptions {
            app_id,
            currency,
            retry,
            cancel,
        } = options;

        let batch = async {
            let mut out = Vec::new();
            for (i, name) in names.into_iter().enumerate() {
                if i > 0 && !pause.is_zero() {
                    futures_timer::Delay::new(pause).await;
                }
                let name = name.into();
                let item_options = LookupOptions {
                    app_id,
                    currency,
                    retry: retry.clone(),
                    cancel: None,
                };
                let snapshot = self.get(name.clone(), item_options).await?;
                out.push((name, snapshot));
            }
            Ok::<_, SdkError>(out)
        };

        match run_until_cancelled(batch, cancel).await {
            Some(result) => result,
            None => {
                tracing::debug!("Bulk price lookup cancelled");
                Err(SdkError::Cancelled)
            }
        }
    }
}
