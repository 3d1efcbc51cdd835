//! Stock sentiment orchestration
//!
//! Pulls a user's friends and their trades through the accumulate -> rank ->
//! format pipeline. Nothing is cached between calls: every call computes its
//! own cutoff and starts from an empty rank map.

use chrono::NaiveDate;
use sentiment_core::{Alert, Clock, FriendOracle, RankedEntry, SentimentError, SystemClock};

use crate::accumulator::RankMap;
use crate::alerts::{build_alerts, to_alerts};
use crate::config::{MalformedPolicy, SentimentConfig};
use crate::ranker::rank;
use crate::window::cutoff_for;

/// Counts gathered while pooling friends' trades
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccumulationStats {
    pub friends: usize,
    pub seen: usize,
    pub counted: usize,
    pub skipped: usize,
}

/// Computes friend-trade alerts for a user
pub struct StockSentiment<O, C = SystemClock> {
    oracle: O,
    clock: C,
    config: SentimentConfig,
}

impl<O: FriendOracle> StockSentiment<O> {
    /// Create an engine on the wall clock with default settings
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            clock: SystemClock,
            config: SentimentConfig::default(),
        }
    }
}

impl<O: FriendOracle, C: Clock> StockSentiment<O, C> {
    /// Replace the clock used to decide "today"
    pub fn with_clock<C2: Clock>(self, clock: C2) -> StockSentiment<O, C2> {
        StockSentiment {
            oracle: self.oracle,
            clock,
            config: self.config,
        }
    }

    pub fn with_config(mut self, config: SentimentConfig) -> Result<Self, SentimentError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &SentimentConfig {
        &self.config
    }

    /// Alerts for `user_id`, strongest signal first.
    pub fn get_alerts(&self, user_id: &str) -> Result<Vec<String>, SentimentError> {
        self.get_alerts_at(user_id, self.clock.today())
    }

    /// Alerts for `user_id` with the trailing window ending on `today`.
    pub fn get_alerts_at(&self, user_id: &str, today: NaiveDate) -> Result<Vec<String>, SentimentError> {
        let ranked = self.ranked_at(user_id, today)?;
        Ok(build_alerts(&ranked))
    }

    /// Typed form of [`Self::get_alerts_at`].
    pub fn alerts_at(&self, user_id: &str, today: NaiveDate) -> Result<Vec<Alert>, SentimentError> {
        let ranked = self.ranked_at(user_id, today)?;
        Ok(to_alerts(&ranked))
    }

    #[tracing::instrument(skip(self))]
    fn ranked_at(&self, user_id: &str, today: NaiveDate) -> Result<Vec<RankedEntry>, SentimentError> {
        let cutoff = cutoff_for(today, self.config.window_days);
        let (ranks, stats) = self.collect_ranks_with_stats(user_id, cutoff)?;
        let ranked = rank(&ranks);

        tracing::info!(
            friends = stats.friends,
            trades_seen = stats.seen,
            trades_counted = stats.counted,
            trades_skipped = stats.skipped,
            symbols = ranks.len(),
            alerts = ranked.len(),
            %cutoff,
            "Computed stock sentiment"
        );
        Ok(ranked)
    }

    /// Pool every friend's in-window trades into one rank map.
    pub fn collect_ranks(&self, user_id: &str, cutoff: NaiveDate) -> Result<RankMap, SentimentError> {
        self.collect_ranks_with_stats(user_id, cutoff)
            .map(|(ranks, _)| ranks)
    }

    /// [`Self::collect_ranks`] plus counts of what was read.
    pub fn collect_ranks_with_stats(
        &self,
        user_id: &str,
        cutoff: NaiveDate,
    ) -> Result<(RankMap, AccumulationStats), SentimentError> {
        let friends = self.oracle.get_friends_list_for_user(user_id)?;
        let mut ranks = RankMap::new();
        let mut stats = AccumulationStats {
            friends: friends.len(),
            ..AccumulationStats::default()
        };

        for friend_id in &friends {
            let trades = self.oracle.get_trade_transactions_for_user(friend_id)?;
            tracing::debug!(friend_id = %friend_id, trades = trades.len(), "Fetched friend trades");

            for line in &trades {
                stats.seen += 1;
                match ranks.accumulate(line, cutoff) {
                    Ok(true) => stats.counted += 1,
                    Ok(false) => {}
                    Err(e)
                        if e.is_parse_error()
                            && self.config.malformed_policy == MalformedPolicy::Skip =>
                    {
                        tracing::warn!(friend_id = %friend_id, error = %e, "Skipping malformed trade");
                        stats.skipped += 1;
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        Ok((ranks, stats))
    }
}
