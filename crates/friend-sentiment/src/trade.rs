//! Trade record parsing
//!
//! A record is a single `YYYY-MM-DD,BUY|SELL,SYMBOL` line.

use chrono::NaiveDate;
use sentiment_core::{SentimentError, Trade, TradeDirection};

/// Day-granularity date pattern for trade records
pub const TRADE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse one raw trade line.
///
/// Fields are taken verbatim (no whitespace trimming). Trailing empty fields
/// are dropped before counting, so `2024-03-09,BUY,` has only two fields.
/// Any direction token other than `BUY` is read as a sell.
pub fn parse_trade(line: &str) -> Result<Trade, SentimentError> {
    let mut fields: Vec<&str> = line.split(',').collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    let [date, direction, symbol] = fields.as_slice() else {
        return Err(SentimentError::MalformedTrade {
            line: line.to_string(),
            fields: fields.len(),
        });
    };

    let date = NaiveDate::parse_from_str(date, TRADE_DATE_FORMAT).map_err(|source| {
        SentimentError::InvalidDate {
            line: line.to_string(),
            source,
        }
    })?;

    if *direction != "BUY" && *direction != "SELL" {
        tracing::warn!(line, token = *direction, "Unrecognised trade direction, counting as SELL");
    }

    Ok(Trade {
        date,
        direction: TradeDirection::from_token(direction),
        symbol: symbol.to_string(),
    })
}
