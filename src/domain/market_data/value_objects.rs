use derive_more::{Constructor, Deref, DerefMut, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - price in quote currency
#[derive(
    Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize,
)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - millisecond timestamp
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    From,
    Into,
    Deref,
    DerefMut,
    Constructor,
    Serialize,
    Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn from_millis(value: u64) -> Self {
        Self(value)
    }
}

/// Value Object - trading symbol, always uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, DerefMut, Display, Serialize, Deserialize)]
#[display(fmt = "Symbol({})", _0)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: String) -> Result<Self, String> {
        if symbol.is_empty() {
            return Err("Symbol cannot be empty".to_string());
        }
        Ok(Self(symbol.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_uppercase())
    }
}

/// Value Object - candle interval understood by the exchange API
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum TimeInterval {
    #[strum(serialize = "1m")]
    #[serde(rename = "1m")]
    OneMinute,

    #[strum(serialize = "1h")]
    #[serde(rename = "1h")]
    OneHour,

    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    OneDay,
}

impl TimeInterval {
    pub fn to_binance_str(&self) -> &str {
        self.as_ref()
    }

    pub fn duration_ms(&self) -> u64 {
        match self {
            Self::OneMinute => 60 * 1000,
            Self::OneHour => 60 * 60 * 1000,
            Self::OneDay => 24 * 60 * 60 * 1000,
        }
    }
}

/// Value Object - listing category shown in the token selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter)]
pub enum TokenCategory {
    #[strum(serialize = "Meme Coins")]
    Meme,
    #[strum(serialize = "ERC-20 Tokens")]
    Erc20,
}

/// One entry of the tracked-token catalogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub symbol: Symbol,
    pub name: &'static str,
    pub category: TokenCategory,
}

/// Catalogue of tokens the tracker can follow
pub fn listed_tokens() -> Vec<TokenInfo> {
    let entry = |symbol: &str, name: &'static str, category: TokenCategory| TokenInfo {
        symbol: Symbol::from(symbol),
        name,
        category,
    };

    vec![
        entry("SHIBUSDT", "Shiba Inu (SHIB)", TokenCategory::Meme),
        entry("DOGEUSDT", "Dogecoin (DOGE)", TokenCategory::Meme),
        entry("PEPEUSDT", "Pepe (PEPE)", TokenCategory::Meme),
        entry("FLOKIUSDT", "Floki (FLOKI)", TokenCategory::Meme),
        entry("LINKUSDT", "Chainlink (LINK)", TokenCategory::Erc20),
        entry("UNIUSDT", "Uniswap (UNI)", TokenCategory::Erc20),
        entry("AAVEUSDT", "Aave (AAVE)", TokenCategory::Erc20),
        entry("MKRUSDT", "Maker (MKR)", TokenCategory::Erc20),
        entry("SNXUSDT", "Synthetix (SNX)", TokenCategory::Erc20),
        entry("COMPUSDT", "Compound (COMP)", TokenCategory::Erc20),
    ]
}

/// 24h ticker statistics for the tracker header
#[derive(Debug, Clone, Copy, PartialEq, Constructor)]
pub struct TickerStats {
    pub last_price: Price,
    pub change_percent: f64,
}
