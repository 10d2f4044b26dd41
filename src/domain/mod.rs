//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types handed to callers
//! - `wire.rs` — Raw serde structs matching Steam's responses
//! - `convert.rs` — Conversions from wire to domain types
//! - `client.rs` — Sub-client with HTTP methods

pub mod listing;
pub mod price_history;
pub mod price_overview;

#[cfg(feature = "http")]
use crate::http::{CancelToken, RetryConfig};
#[cfg(feature = "http")]
use crate::shared::{AppId, Currency};

/// Per-call overrides for a market lookup.
///
/// Unset fields fall back to the client's configuration. A [`CancelToken`]
/// is consumed by the call it is passed to.
#[cfg(feature = "http")]
#[derive(Debug, Default)]
pub struct LookupOptions {
    pub app_id: Option<AppId>,
    /// Ignored by the history endpoint, which prices in the session's wallet currency.
    pub currency: Option<Currency>,
    pub retry: Option<RetryConfig>,
    pub cancel: Option<CancelToken>,
}

#[cfg(feature = "http")]
impl LookupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_id(mut self, app_id: AppId) -> Self {
        self.app_id = Some(app_id);
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    pub fn cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }
}
