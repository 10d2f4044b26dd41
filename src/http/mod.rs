//! HTTP client layer — `SteamMarketHttp` with per-endpoint retry policies
//! and per-call cancellation.

pub mod cancel;
pub mod client;
pub mod retry;

pub use cancel::{cancel_pair, CancelHandle, CancelToken};
pub use client::SteamMarketHttp;
pub use retry::{RetryConfig, RetryPolicy, RetryState};
