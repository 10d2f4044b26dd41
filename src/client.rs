//! High-level client — `SteamMarketClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, configuration, and accessor methods.

use crate::domain::listing::client::Listings;
use crate::domain::price_history::client::History;
use crate::domain::price_overview::client::Prices;
use crate::error::SdkError;
use crate::http::client::DEFAULT_TIMEOUT;
use crate::http::{RetryConfig, SteamMarketHttp};
use crate::network::{DEFAULT_APP_ID, DEFAULT_BASE_URL, DEFAULT_CURRENCY};
use crate::session::client::Session;
use crate::session::SteamSession;
use crate::shared::{AppId, Currency};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::listing::client::Listings as ListingsClient;
pub use crate::domain::price_history::client::History as HistoryClient;
pub use crate::domain::price_overview::client::Prices as PricesClient;
pub use crate::session::client::Session as SessionClient;

/// Environment variable overriding the base URL (e.g. a dev proxy prefix).
pub const ENV_BASE_URL: &str = "STEAM_MARKET_BASE_URL";
/// Environment variable overriding the app id.
pub const ENV_APP_ID: &str = "STEAM_MARKET_APP_ID";
/// Environment variable overriding the currency code.
pub const ENV_CURRENCY: &str = "STEAM_MARKET_CURRENCY";
/// Environment variable holding a `steamLoginSecure` cookie value.
pub const ENV_LOGIN_SECURE: &str = "STEAM_LOGIN_SECURE";

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.prices()`, `client.history()`, etc.
///
/// Cloning is cheap; clones share the connection pool and the session.
#[derive(Clone)]
pub struct SteamMarketClient {
    pub(crate) http: SteamMarketHttp,
    pub(crate) session: SteamSession,
    pub(crate) app_id: AppId,
    pub(crate) currency: Currency,
    pub(crate) overview_retry: Option<RetryConfig>,
    pub(crate) history_retry: Option<RetryConfig>,
}

impl SteamMarketClient {
    pub fn builder() -> SteamMarketClientBuilder {
        SteamMarketClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    pub fn listings(&self) -> Listings<'_> {
        Listings { client: self }
    }

    pub fn session(&self) -> Session<'_> {
        Session { client: self }
    }

    pub fn app_id(&self) -> AppId {
        self.app_id
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct SteamMarketClientBuilder {
    base_url: String,
    app_id: AppId,
    currency: Currency,
    timeout: Duration,
    login_secure: Option<String>,
    overview_retry: Option<RetryConfig>,
    history_retry: Option<RetryConfig>,
}

impl Default for SteamMarketClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_id: DEFAULT_APP_ID,
            currency: DEFAULT_CURRENCY,
            timeout: DEFAULT_TIMEOUT,
            login_secure: None,
            overview_retry: None,
            history_retry: None,
        }
    }
}

impl SteamMarketClientBuilder {
    /// Builder seeded from `STEAM_MARKET_*` / `STEAM_LOGIN_SECURE`.
    ///
    /// Unset variables keep their defaults; set but unparseable numbers are
    /// rejected.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SdkError> {
        let mut builder = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            builder.base_url = url;
        }
        if let Some(raw) = lookup(ENV_APP_ID) {
            let id = raw
                .trim()
                .parse::<u32>()
                .map_err(|e| SdkError::Validation(format!("{}={:?}: {}", ENV_APP_ID, raw, e)))?;
            builder.app_id = AppId(id);
        }
        if let Some(raw) = lookup(ENV_CURRENCY) {
            let code = raw
                .trim()
                .parse::<u16>()
                .map_err(|e| SdkError::Validation(format!("{}={:?}: {}", ENV_CURRENCY, raw, e)))?;
            builder.currency = Currency(code);
        }
        builder.login_secure = lookup(ENV_LOGIN_SECURE).filter(|v| !v.is_empty());

        Ok(builder)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn app_id(mut self, app_id: AppId) -> Self {
        self.app_id = app_id;
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Per-request timeout (native only).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pre-set the `steamLoginSecure` cookie on construction.
    pub fn login_secure(mut self, value: &str) -> Self {
        self.login_secure = Some(value.to_string());
        self
    }

    /// Replace the default `priceoverview` retry behaviour.
    pub fn overview_retry(mut self, config: RetryConfig) -> Self {
        self.overview_retry = Some(config);
        self
    }

    /// Replace the default `pricehistory` retry behaviour.
    pub fn history_retry(mut self, config: RetryConfig) -> Self {
        self.history_retry = Some(config);
        self
    }

    pub fn build(self) -> Result<SteamMarketClient, SdkError> {
        if self.base_url.trim().is_empty() {
            return Err(SdkError::Validation("base_url must not be empty".into()));
        }
        for (label, config) in [
            ("overview_retry", &self.overview_retry),
            ("history_retry", &self.history_retry),
        ] {
            if let Some(c) = config {
                if c.base_delay > c.max_delay {
                    return Err(SdkError::Validation(format!(
                        "{label}: base_delay exceeds max_delay"
                    )));
                }
            }
        }

        #[cfg(all(not(feature = "tls"), not(target_arch = "wasm32")))]
        if self.base_url.trim_start().starts_with("https://") {
            return Err(SdkError::Validation(
                "https base_url needs the `tls` feature".into(),
            ));
        }

        let session = SteamSession::with_login_secure(self.login_secure);
        Ok(SteamMarketClient {
            http: SteamMarketHttp::with_timeout(&self.base_url, session.clone(), self.timeout),
            session,
            app_id: self.app_id,
            currency: self.currency,
            overview_retry: self.overview_retry,
            history_retry: self.history_retry,
        })
    }
}
