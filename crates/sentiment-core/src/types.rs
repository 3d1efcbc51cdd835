use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of a single trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl TradeDirection {
    /// Map a raw direction token. Only the exact literal `BUY` is a buy;
    /// every other token, malformed ones included, counts as a sell.
    pub fn from_token(token: &str) -> Self {
        if token == "BUY" {
            TradeDirection::Buy
        } else {
            TradeDirection::Sell
        }
    }

    /// Contribution of one trade to a symbol's rank
    pub fn signal(&self) -> i64 {
        match self {
            TradeDirection::Buy => 1,
            TradeDirection::Sell => -1,
        }
    }

    /// Direction implied by a non-zero net rank
    pub fn from_rank(rank: i64) -> Self {
        if rank > 0 {
            TradeDirection::Buy
        } else {
            TradeDirection::Sell
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeDirection::Buy => "BUY",
            TradeDirection::Sell => "SELL",
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed trade record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub date: NaiveDate,
    pub direction: TradeDirection,
    pub symbol: String,
}

/// Symbol with its net, non-zero rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub symbol: String,
    pub rank: i64,
}

impl RankedEntry {
    pub fn new(symbol: impl Into<String>, rank: i64) -> Self {
        Self {
            symbol: symbol.into(),
            rank,
        }
    }

    pub fn magnitude(&self) -> u64 {
        self.rank.unsigned_abs()
    }
}

/// Final directional signal for one symbol.
///
/// Renders as `<magnitude>,<BUY|SELL>,<symbol>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub magnitude: u64,
    pub direction: TradeDirection,
    pub symbol: String,
}

impl From<&RankedEntry> for Alert {
    fn from(entry: &RankedEntry) -> Self {
        Self {
            magnitude: entry.magnitude(),
            direction: TradeDirection::from_rank(entry.rank),
            symbol: entry.symbol.clone(),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.magnitude, self.direction, self.symbol)
    }
}
