//! Steam login session context.
//!
//! The price history endpoint only answers for a logged-in browser session,
//! identified by the `steamLoginSecure` cookie. [`SteamSession`] carries that
//! cookie explicitly: the [`SteamMarketClient`](crate::client::SteamMarketClient)
//! owns it, the HTTP layer reads it per request, and only the
//! `client.session()` sub-client writes it.
//!
//! The cookie value is never exposed through the public API.

#[cfg(feature = "http")]
pub mod client;

use async_lock::RwLock;
use std::sync::Arc;

/// Name of the Steam session cookie.
pub const LOGIN_SECURE_COOKIE: &str = "steamLoginSecure";

/// Shared handle to the session cookie. Clones observe the same session.
#[derive(Debug, Clone, Default)]
pub struct SteamSession {
    login_secure: Arc<RwLock<Option<String>>>,
}

impl SteamSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_login_secure(value: Option<String>) -> Self {
        Self {
            login_secure: Arc::new(RwLock::new(value.filter(|v| !v.is_empty()))),
        }
    }

    pub(crate) async fn set_login_secure(&self, value: Option<String>) {
        *self.login_secure.write().await = value.filter(|v| !v.is_empty());
    }

    pub(crate) async fn clear(&self) {
        *self.login_secure.write().await = None;
    }

    pub async fn is_authenticated(&self) -> bool {
        self.login_secure.read().await.is_some()
    }

    /// `Cookie` header value, when a session is present.
    pub(crate) async fn cookie_header(&self) -> Option<String> {
        self.login_secure
            .read()
            .await
            .as_ref()
            .map(|v| format!("{}={}", LOGIN_SECURE_COOKIE, v))
    }
}
