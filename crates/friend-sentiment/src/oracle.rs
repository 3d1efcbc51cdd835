use sentiment_core::{FriendOracle, SentimentError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Friend graph and trade history held in memory.
///
/// Deserialises from `{"friends": {user: [friend, ..]}, "trades": {user: [line, ..]}}`.
/// Unknown users have no friends and no trades.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InMemoryFriendOracle {
    pub friends: HashMap<String, Vec<String>>,
    pub trades: HashMap<String, Vec<String>>,
}

impl InMemoryFriendOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a fixture. The top level must be a JSON object.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom(
                "oracle fixture must be a JSON object with `friends` and `trades`",
            ));
        }
        serde_json::from_value(value)
    }

    pub fn with_friends<I, S>(mut self, user_id: impl Into<String>, friends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.friends
            .insert(user_id.into(), friends.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_trades<I, S>(mut self, user_id: impl Into<String>, trades: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trades
            .insert(user_id.into(), trades.into_iter().map(Into::into).collect());
        self
    }
}

impl FriendOracle for InMemoryFriendOracle {
    fn get_friends_list_for_user(&self, user_id: &str) -> Result<Vec<String>, SentimentError> {
        Ok(self.friends.get(user_id).cloned().unwrap_or_default())
    }

    fn get_trade_transactions_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<String>, SentimentError> {
        Ok(self.trades.get(user_id).cloned().unwrap_or_default())
    }
}
