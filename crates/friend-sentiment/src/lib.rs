//! Friend Sentiment Module
//!
//! Aggregates the recent trades of a user's friends into a ranked list of
//! BUY/SELL alerts per stock symbol.
//!
//! The pipeline is linear: friend list -> raw trade lines -> parsed trades
//! inside the trailing window -> net rank per symbol -> ordered entries ->
//! alert strings.

pub mod accumulator;
pub mod alerts;
pub mod config;
pub mod engine;
pub mod oracle;
pub mod ranker;
pub mod trade;
pub mod window;

pub use accumulator::RankMap;
pub use alerts::{build_alerts, format_alert, to_alerts};
pub use config::{MalformedPolicy, SentimentConfig};
pub use engine::{AccumulationStats, StockSentiment};
pub use oracle::InMemoryFriendOracle;
pub use ranker::rank;
pub use trade::{parse_trade, TRADE_DATE_FORMAT};
pub use window::{cutoff_for, is_within_window, DEFAULT_WINDOW_DAYS};

#[cfg(test)]
mod tests;
