//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format Steam sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod price;
pub mod time;

pub use price::{parse_price, parse_volume};
pub use time::parse_history_timestamp;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── MarketHashName ──────────────────────────────────────────────────────────

/// Newtype for Steam market hash names (e.g. `"AK-47 | Redline (Field-Tested)"`).
///
/// Stored unencoded; percent-encoding happens when a URL is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarketHashName(String);

impl MarketHashName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form, safe for query strings and path segments.
    /// Escapes `( ) ! * '` too, unlike browser `encodeURIComponent`.
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl std::fmt::Display for MarketHashName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MarketHashName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MarketHashName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for MarketHashName {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

impl FromStr for MarketHashName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MarketHashName(s.to_string()))
    }
}

impl Serialize for MarketHashName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MarketHashName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(MarketHashName(s))
    }
}

// ─── AppId ───────────────────────────────────────────────────────────────────

/// Steam application (catalog) id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub u32);

impl AppId {
    /// Counter-Strike 2.
    pub const CS2: AppId = AppId(730);
    /// Team Fortress 2.
    pub const TF2: AppId = AppId(440);
    /// Dota 2.
    pub const DOTA2: AppId = AppId(570);
}

impl Default for AppId {
    fn default() -> Self {
        Self::CS2
    }
}

impl std::fmt::Display for AppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AppId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

// ─── Currency ────────────────────────────────────────────────────────────────

/// Steam wallet currency code.
///
/// The set of codes is defined upstream. Requests do not check membership;
/// use [`Currency::is_known`] before sending a code that came from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(pub u16);

impl Currency {
    pub const USD: Currency = Currency(1);
    pub const GBP: Currency = Currency(2);
    pub const EUR: Currency = Currency(3);
    pub const RUB: Currency = Currency(5);
    pub const BRL: Currency = Currency(7);
    pub const JPY: Currency = Currency(8);
    pub const NOK: Currency = Currency(9);
    pub const IDR: Currency = Currency(10);
    pub const CAD: Currency = Currency(20);
    pub const AUD: Currency = Currency(21);
    pub const CNY: Currency = Currency(23);
    pub const INR: Currency = Currency(24);

    pub fn code(&self) -> u16 {
        self.0
    }

    /// Whether this code is part of the upstream-accepted set.
    pub fn is_known(&self) -> bool {
        matches!(
            self.0,
            1 | 2
                | 3
                | 5
                | 7..=10
                | 12..=16
                | 18..=25
                | 27..=32
                | 34
                | 35
                | 37..=47
                | 50..=58
                | 60..=108
                | 110..=141
                | 2001
        )
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::EUR
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for Currency {
    fn from(code: u16) -> Self {
        Self(code)
    }
}
