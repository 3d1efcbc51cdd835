//! Rank Accumulation Module
//!
//! Folds trade lines from every friend into one net rank per symbol:
//! +1 for each BUY, -1 for each SELL, counting only trades inside the window.

use chrono::NaiveDate;
use sentiment_core::{SentimentError, Trade};
use std::collections::hash_map::{self, HashMap};

use crate::trade::parse_trade;
use crate::window::is_within_window;

/// Net signed rank per stock symbol. Symbols are case-sensitive keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankMap {
    ranks: HashMap<String, i64>,
}

impl RankMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `line` and fold it in when it falls inside the window ending
    /// after `cutoff`.
    ///
    /// Returns whether the trade was counted. Parse failures propagate and
    /// leave the map untouched; so do out-of-window trades, which never
    /// insert an entry for an unseen symbol.
    pub fn accumulate(&mut self, line: &str, cutoff: NaiveDate) -> Result<bool, SentimentError> {
        let trade = parse_trade(line)?;
        if !is_within_window(trade.date, cutoff) {
            tracing::debug!(line, %cutoff, "Trade outside window");
            return Ok(false);
        }
        self.record(&trade);
        Ok(true)
    }

    /// Fold a trade in unconditionally.
    pub fn record(&mut self, trade: &Trade) {
        *self.ranks.entry(trade.symbol.clone()).or_insert(0) += trade.direction.signal();
    }

    /// Add another map's ranks into this one, symbol by symbol.
    pub fn merge(&mut self, other: RankMap) {
        for (symbol, rank) in other.ranks {
            *self.ranks.entry(symbol).or_insert(0) += rank;
        }
    }

    pub fn get(&self, symbol: &str) -> Option<i64> {
        self.ranks.get(symbol).copied()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.ranks.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Entries in arbitrary order
    pub fn iter(&self) -> hash_map::Iter<'_, String, i64> {
        self.ranks.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for RankMap {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut map = RankMap::new();
        for (symbol, rank) in iter {
            *map.ranks.entry(symbol.into()).or_insert(0) += rank;
        }
        map
    }
}

impl<'a> IntoIterator for &'a RankMap {
    type Item = (&'a String, &'a i64);
    type IntoIter = hash_map::Iter<'a, String, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
