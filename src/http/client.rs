//! Low-level HTTP client — `SteamMarketHttp`.
//!
//! One method per upstream endpoint. Returns wire types (conversion to domain
//! types happens in the domain sub-clients). Every call runs its own retry
//! state machine; nothing is shared between concurrent calls except the
//! connection pool and the session cookie.

use crate::domain::price_history::wire::PriceHistoryResponse;
use crate::domain::price_overview::wire::PriceOverviewResponse;
use crate::error::HttpError;
use crate::http::cancel::{run_cancellable, CancelToken};
use crate::http::retry::{RetryPolicy, RetryState};
use crate::network::{PRICE_HISTORY_PATH, PRICE_OVERVIEW_PATH};
use crate::session::SteamSession;
use crate::shared::{AppId, Currency, MarketHashName};

use reqwest::header::{COOKIE, RETRY_AFTER};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default per-request timeout on native targets.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the Steam Community Market.
#[derive(Clone)]
pub struct SteamMarketHttp {
    base_url: String,
    client: Client,
    session: SteamSession,
}

impl SteamMarketHttp {
    pub fn new(base_url: &str, session: SteamSession) -> Self {
        Self::with_timeout(base_url, session, DEFAULT_TIMEOUT)
    }

    #[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
    pub fn with_timeout(base_url: &str, session: SteamSession, timeout: Duration) -> Self {
        #[cfg_attr(target_arch = "wasm32", allow(unused_mut))]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Price overview ───────────────────────────────────────────────────

    pub fn price_overview_url(
        &self,
        app_id: AppId,
        currency: Currency,
        name: &MarketHashName,
    ) -> String {
        format!(
            "{}{}?appid={}&currency={}&market_hash_name={}",
            self.base_url,
            PRICE_OVERVIEW_PATH,
            app_id,
            currency,
            name.encoded()
        )
    }

    pub async fn get_price_overview(
        &self,
        app_id: AppId,
        currency: Currency,
        name: &MarketHashName,
        retry: RetryPolicy,
        cancel: Option<CancelToken>,
    ) -> Result<PriceOverviewResponse, HttpError> {
        let url = self.price_overview_url(app_id, currency, name);
        self.get(&url, retry, cancel, false).await
    }

    // ── Price history ────────────────────────────────────────────────────

    pub fn price_history_url(&self, app_id: AppId, name: &MarketHashName) -> String {
        format!(
            "{}{}?appid={}&market_hash_name={}",
            self.base_url,
            PRICE_HISTORY_PATH,
            app_id,
            name.encoded()
        )
    }

    /// `Ok(None)` when Steam answers with a literal `null` body.
    pub async fn get_price_history(
        &self,
        app_id: AppId,
        name: &MarketHashName,
        retry: RetryPolicy,
        cancel: Option<CancelToken>,
    ) -> Result<Option<PriceHistoryResponse>, HttpError> {
        let url = self.price_history_url(app_id, name);
        self.get(&url, retry, cancel, true).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
        cancel: Option<CancelToken>,
        with_session: bool,
    ) -> Result<T, HttpError> {
        let result = run_cancellable(self.request_with_retry(url, retry, with_session), cancel).await;
        if matches!(result, Err(HttpError::Cancelled)) {
            tracing::debug!("Request to {} cancelled", url);
        }
        result
    }

    async fn request_with_retry<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
        with_session: bool,
    ) -> Result<T, HttpError> {
        let config = match retry.config() {
            None => return self.do_request(url, with_session).await,
            Some(c) => c,
        };

        let mut state = RetryState::start();
        loop {
            state = match state {
                RetryState::Attempting { attempt } => {
                    let result = self.do_request(url, with_session).await;
                    RetryState::after_attempt(attempt, result, &config)
                }
                RetryState::Backoff {
                    attempt,
                    delay,
                    error,
                } => {
                    tracing::debug!(
                        attempt,
                        max = config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "Retrying request to {}",
                        url
                    );
                    futures_timer::Delay::new(delay).await;
                    RetryState::Attempting { attempt }
                }
                RetryState::Succeeded(value) => return Ok(value),
                RetryState::FailedTerminal(error) => {
                    if let HttpError::MaxRetriesExceeded { attempts, .. } = &error {
                        tracing::warn!(attempts, "Giving up on {}: {}", url, error);
                    }
                    return Err(error);
                }
                RetryState::Cancelled => return Err(HttpError::Cancelled),
            };
        }
    }

    async fn do_request<T: DeserializeOwned>(
        &self,
        url: &str,
        with_session: bool,
    ) -> Result<T, HttpError> {
        let mut req = self.client.get(url);

        if with_session {
            if let Some(cookie) = self.session.cookie_header().await {
                req = req.header(COOKIE, cookie);
            }
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();

        if status.is_success() {
            let body = resp.text().await.map_err(|e| {
                if e.is_timeout() {
                    HttpError::Timeout
                } else {
                    HttpError::Interrupted(e.to_string())
                }
            })?;
            return serde_json::from_str::<T>(&body)
                .map_err(|e| HttpError::Malformed(e.to_string()));
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after);
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            403 => Err(HttpError::Forbidden),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest {
                status: status_code,
                body: body_text,
            }),
            500..=599 => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
                retry_after_ms,
            }),
            _ => Err(HttpError::Malformed(format!(
                "unexpected status {}",
                status_code
            ))),
        }
    }
}

/// `Retry-After` in seconds → milliseconds. HTTP-date forms are ignored.
fn parse_retry_after(value: &str) -> Option<u64> {
    let secs: f64 = value.trim().parse().ok()?;
    (secs.is_finite() && secs >= 0.0).then(|| (secs * 1000.0).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http() -> SteamMarketHttp {
        SteamMarketHttp::new("http://localhost:5173/steam/", SteamSession::new())
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        assert_eq!(http().base_url(), "http://localhost:5173/steam");
    }

    #[test]
    fn test_price_overview_url() {
        let url = http().price_overview_url(
            AppId::CS2,
            Currency::EUR,
            &MarketHashName::from("Operation Bravo Case"),
        );
        assert_eq!(
            url,
            "http://localhost:5173/steam/market/priceoverview/?appid=730&currency=3&market_hash_name=Operation%20Bravo%20Case"
        );
    }

    #[test]
    fn test_price_history_url() {
        let url = http().price_history_url(
            AppId::CS2,
            &MarketHashName::from("AK-47 | Redline (Field-Tested)"),
        );
        assert_eq!(
            url,
            "http://localhost:5173/steam/market/pricehistory/?appid=730&market_hash_name=AK-47%20%7C%20Redline%20%28Field-Tested%29"
        );
    }

    #[test]
    fn test_parse_retry_after() {
        assert_eq!(parse_retry_after("3"), Some(3000));
        assert_eq!(parse_retry_after(" 1.5 "), Some(1500));
        assert_eq!(parse_retry_after("0"), Some(0));
        assert_eq!(parse_retry_after("-1"), None);
        assert_eq!(parse_retry_after("Wed, 21 Oct 2015 07:28:00 GMT"), None);
    }
}
