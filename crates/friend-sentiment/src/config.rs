use sentiment_core::SentimentError;
use serde::{Deserialize, Serialize};
use std::env;

use crate::window::DEFAULT_WINDOW_DAYS;

/// What to do with a trade line that cannot be parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MalformedPolicy {
    /// Abort the whole alert computation on the first bad record
    #[default]
    FailFast,
    /// Log the bad record and keep going
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentConfig {
    pub window_days: u32,                  // 7
    pub malformed_policy: MalformedPolicy, // FailFast
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            malformed_policy: MalformedPolicy::default(),
        }
    }
}

impl SentimentConfig {
    /// Read `SENTIMENT_WINDOW_DAYS` and `SENTIMENT_SKIP_MALFORMED`, defaulting
    /// whatever is unset.
    pub fn from_env() -> Result<Self, SentimentError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SentimentError> {
        let window_days = match lookup("SENTIMENT_WINDOW_DAYS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                SentimentError::Config(format!("SENTIMENT_WINDOW_DAYS='{}': {}", raw, e))
            })?,
            None => DEFAULT_WINDOW_DAYS,
        };

        let skip_malformed = match lookup("SENTIMENT_SKIP_MALFORMED") {
            Some(raw) => raw.trim().parse::<bool>().map_err(|e| {
                SentimentError::Config(format!("SENTIMENT_SKIP_MALFORMED='{}': {}", raw, e))
            })?,
            None => false,
        };

        let config = Self {
            window_days,
            malformed_policy: if skip_malformed {
                MalformedPolicy::Skip
            } else {
                MalformedPolicy::FailFast
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SentimentError> {
        if self.window_days == 0 {
            return Err(SentimentError::Config(
                "window_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
