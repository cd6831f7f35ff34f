//! Asset identifiers shown on either end of the confirm track.
//!
//! Assets use `CHAIN.SYMBOL` notation, e.g. `BNB.BNB` or
//! `ETH.USDT-0xdac17f958d2ee523a2206206994597c13d831ec7`. The ticker is the
//! part of the symbol before the first `-`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("Asset notation is empty")]
    Empty,

    #[error("Asset notation `{0}` is missing the `.` between chain and symbol")]
    MissingSeparator(String),

    #[error("Asset notation `{0}` has an empty chain")]
    EmptyChain(String),

    #[error("Asset notation `{0}` has an empty symbol")]
    EmptySymbol(String),
}

pub type Result<T> = std::result::Result<T, AssetError>;

/// A chain-qualified asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Asset {
    chain: String,
    symbol: String,
}

impl Asset {
    pub fn new(chain: impl Into<String>, symbol: impl Into<String>) -> Result<Self> {
        let chain: String = chain.into();
        let symbol: String = symbol.into();
        let chain = chain.trim().to_uppercase();
        let symbol = symbol.trim().to_string();
        let notation = format!("{chain}.{symbol}");

        if chain.is_empty() {
            return Err(AssetError::EmptyChain(notation));
        }
        if symbol.is_empty() {
            return Err(AssetError::EmptySymbol(notation));
        }

        Ok(Self { chain, symbol })
    }

    pub fn chain(&self) -> &str {
        &self.chain
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Short display name (symbol without contract suffix).
    pub fn ticker(&self) -> &str {
        self.symbol
            .split_once('-')
            .map(|(ticker, _)| ticker)
            .unwrap_or(&self.symbol)
    }
}

impl FromStr for Asset {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AssetError::Empty);
        }

        let (chain, symbol) = trimmed
            .split_once('.')
            .ok_or_else(|| AssetError::MissingSeparator(trimmed.to_string()))?;

        Asset::new(chain, symbol)
    }
}

impl TryFrom<String> for Asset {
    type Error = AssetError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Asset> for String {
    fn from(asset: Asset) -> Self {
        asset.to_string()
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.chain, self.symbol)
    }
}
