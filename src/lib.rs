//! # Steam Market SDK
//!
//! Price lookups for CS2 items on the Steam Community Market.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Newtypes, price/timestamp parsing, domain models, trailing
//!    averages (always available, WASM-safe, no I/O)
//! 2. **Session** — The `steamLoginSecure` cookie as an explicit context object
//! 3. **HTTP** — `SteamMarketHttp` with per-endpoint retry policies and
//!    per-call cancellation
//! 4. **High-Level Client** — `SteamMarketClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use steam_market_sdk::prelude::*;
//!
//! let client = SteamMarketClient::builder()
//!     .currency(Currency::EUR)
//!     .build()?;
//!
//! let snapshot = client
//!     .prices()
//!     .get("Operation Bravo Case", LookupOptions::default())
//!     .await?;
//! if snapshot.success {
//!     println!("lowest: {:?}", snapshot.lowest_price);
//! }
//!
//! let week = client
//!     .history()
//!     .trailing_mean("Operation Bravo Case", DEFAULT_WINDOW, LookupOptions::default())
//!     .await?;
//! ```
//!
//! Concurrent lookups are independent: each owns its retry counter and
//! backoff schedule, and nothing throttles across calls. Callers fanning out
//! over many items must pace themselves (see `prices().get_many`).

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and parsers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants and defaults.
pub mod network;

// ── Layer 2: Session ─────────────────────────────────────────────────────────

/// Steam login session context.
#[cfg(feature = "http")]
pub mod session;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with retry policies and cancellation.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `SteamMarketClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + parsers
    pub use crate::shared::{parse_history_timestamp, parse_price, AppId, Currency, MarketHashName};

    // Domain types
    pub use crate::domain::listing::{item_url, item_url_for};
    pub use crate::domain::price_history::{
        trailing_mean, trailing_mean_at, PriceHistory, PriceHistoryPoint, WindowedMeanResult,
        DEFAULT_WINDOW,
    };
    pub use crate::domain::price_overview::PriceSnapshot;

    // Errors
    pub use crate::error::{FailureReason, SdkError};

    // Network
    pub use crate::network::{DEFAULT_APP_ID, DEFAULT_BASE_URL, DEFAULT_CURRENCY};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        HistoryClient, ListingsClient, PricesClient, SessionClient, SteamMarketClient,
        SteamMarketClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::domain::LookupOptions;
    #[cfg(feature = "http")]
    pub use crate::http::{cancel_pair, CancelHandle, CancelToken, RetryConfig, RetryPolicy};
}
