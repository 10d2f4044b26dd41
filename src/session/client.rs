//! Session sub-client — sets and clears the Steam login cookie.

use crate::client::SteamMarketClient;

/// Sub-client for session management.
pub struct Session<'a> {
    pub(crate) client: &'a SteamMarketClient,
}

impl<'a> Session<'a> {
    /// Attach a `steamLoginSecure` cookie value to subsequent history requests.
    ///
    /// An empty value clears the session.
    pub async fn set_login_secure(&self, value: &str) {
        self.client
            .session
            .set_login_secure(Some(value.to_string()))
            .await;
        tracing::debug!("Steam session cookie updated");
    }

    /// Drop the session cookie. History lookups will fail until a new one is set.
    pub async fn clear(&self) {
        self.client.session.clear().await;
        tracing::debug!("Steam session cleared");
    }

    pub async fn is_authenticated(&self) -> bool {
        self.client.session.is_authenticated().await
    }
}
