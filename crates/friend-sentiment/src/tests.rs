use chrono::{Days, NaiveDate};
use sentiment_core::{FixedClock, FriendOracle, SentimentError};

use crate::{
    build_alerts, cutoff_for, rank, AccumulationStats, InMemoryFriendOracle, MalformedPolicy,
    RankMap, SentimentConfig, StockSentiment, TRADE_DATE_FORMAT,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

/// Helper: a trade line dated `days` after the start of the window.
fn trade(days: u64, direction: &str, symbol: &str) -> String {
    let base = cutoff_for(today(), 7) + Days::new(days);
    format!("{},{},{}", base.format(TRADE_DATE_FORMAT), direction, symbol)
}

/// Helper: the two-friend fixture with pooled trades.
fn two_friend_oracle() -> InMemoryFriendOracle {
    InMemoryFriendOracle::new()
        .with_friends("myUserId", ["user1", "user2"])
        .with_trades(
            "user1",
            vec![
                "2014-01-01,BUY,GOOG".to_string(),
                trade(1, "BUY", "AMZN"),
                trade(2, "SELL", "BABA"),
                trade(4, "SELL", "GRPN"),
                trade(6, "SELL", "GRPN"),
                trade(6, "SELL", "AAPL"),
                trade(6, "BUY", "CRM"),
            ],
        )
        .with_trades(
            "user2",
            vec![
                trade(1, "BUY", "GOOG"),
                trade(2, "BUY", "BABA"),
                trade(2, "SELL", "GRPN"),
                trade(6, "SELL", "AAPL"),
                trade(6, "BUY", "CRM"),
            ],
        )
}

/// Oracle whose trade source is down.
struct UnavailableOracle;

impl FriendOracle for UnavailableOracle {
    fn get_friends_list_for_user(&self, _user_id: &str) -> Result<Vec<String>, SentimentError> {
        Ok(vec!["user1".to_string()])
    }

    fn get_trade_transactions_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<String>, SentimentError> {
        Err(SentimentError::Oracle(format!("trade store unavailable for {}", user_id)))
    }
}

#[test]
fn test_get_alerts_pools_friends() {
    let engine = StockSentiment::new(two_friend_oracle()).with_clock(FixedClock(today()));
    let alerts = engine.get_alerts("myUserId").unwrap();

    assert_eq!(
        alerts,
        vec!["3,SELL,GRPN", "2,SELL,AAPL", "2,BUY,CRM", "1,BUY,AMZN", "1,BUY,GOOG"]
    );
}

#[test]
fn test_net_zero_symbol_is_not_alerted() {
    let engine = StockSentiment::new(two_friend_oracle());
    let cutoff = cutoff_for(today(), 7);

    let ranks = engine.collect_ranks("myUserId", cutoff).unwrap();
    assert_eq!(ranks.get("BABA"), Some(0));

    let alerts = engine.get_alerts_at("myUserId", today()).unwrap();
    assert!(alerts.iter().all(|a| !a.ends_with(",BABA")));
}

#[test]
fn test_accumulation_stats() {
    let engine = StockSentiment::new(two_friend_oracle());
    let cutoff = cutoff_for(today(), 7);

    let (_, stats) = engine.collect_ranks_with_stats("myUserId", cutoff).unwrap();
    assert_eq!(
        stats,
        AccumulationStats {
            friends: 2,
            seen: 12,
            counted: 11,
            skipped: 0,
        }
    );
}

#[test]
fn test_skipped_records_are_counted() {
    let oracle = InMemoryFriendOracle::new()
        .with_friends("me", ["f1"])
        .with_trades("f1", ["2024-03-09,BUY,GOOG", "2024-03-09,BUY,", "2016-01-01,SELL,GOOG"]);
    let config = SentimentConfig {
        malformed_policy: MalformedPolicy::Skip,
        ..SentimentConfig::default()
    };
    let engine = StockSentiment::new(oracle).with_config(config).unwrap();

    let (ranks, stats) = engine.collect_ranks_with_stats("me", cutoff_for(today(), 7)).unwrap();
    assert_eq!(ranks.get("GOOG"), Some(1));
    assert_eq!((stats.seen, stats.counted, stats.skipped), (3, 1, 1));
}

#[test]
fn test_repeated_calls_do_not_share_state() {
    let engine = StockSentiment::new(two_friend_oracle());
    let first = engine.get_alerts_at("myUserId", today()).unwrap();
    let second = engine.get_alerts_at("myUserId", today()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_window_moves_with_today() {
    let engine = StockSentiment::new(two_friend_oracle());
    // Two weeks later nothing from the fixture is recent
    let later = today() + Days::new(14);
    assert!(engine.get_alerts_at("myUserId", later).unwrap().is_empty());
}

#[test]
fn test_malformed_trade_aborts_by_default() {
    let oracle = two_friend_oracle()
        .with_trades("user2", vec![trade(1, "BUY", "GOOG"), "garbage".to_string()]);
    let engine = StockSentiment::new(oracle);

    let err = engine.get_alerts_at("myUserId", today()).unwrap_err();
    assert!(matches!(err, SentimentError::MalformedTrade { fields: 1, .. }));
}

#[test]
fn test_empty_symbol_aborts_by_default() {
    let oracle = InMemoryFriendOracle::new()
        .with_friends("me", ["f1"])
        .with_trades("f1", ["2024-03-09,BUY,GOOG", "2024-03-09,BUY,"]);
    let engine = StockSentiment::new(oracle);

    let err = engine.get_alerts_at("me", today()).unwrap_err();
    assert!(matches!(err, SentimentError::MalformedTrade { fields: 2, .. }));
}

#[test]
fn test_bad_date_aborts_by_default() {
    let oracle = InMemoryFriendOracle::new()
        .with_friends("me", ["f1"])
        .with_trades("f1", ["2024-03-09,BUY,GOOG", "03/09/2024,BUY,AAPL"]);
    let engine = StockSentiment::new(oracle);

    let err = engine.get_alerts_at("me", today()).unwrap_err();
    assert!(matches!(err, SentimentError::InvalidDate { .. }));
}

#[test]
fn test_skip_policy_isolates_bad_records() {
    let oracle = InMemoryFriendOracle::new()
        .with_friends("me", ["f1", "f2"])
        .with_trades("f1", ["2024-03-09,BUY,GOOG", "2024-03-09,BUY", "2024-03-08,BUY,GOOG"])
        .with_trades("f2", ["not-a-date,SELL,AAPL", "2024-03-07,SELL,AAPL"]);
    let config = SentimentConfig {
        malformed_policy: MalformedPolicy::Skip,
        ..SentimentConfig::default()
    };
    let engine = StockSentiment::new(oracle).with_config(config).unwrap();

    assert_eq!(
        engine.get_alerts_at("me", today()).unwrap(),
        vec!["2,BUY,GOOG", "1,SELL,AAPL"]
    );
}

#[test]
fn test_oracle_errors_propagate_under_skip_policy() {
    let config = SentimentConfig {
        malformed_policy: MalformedPolicy::Skip,
        ..SentimentConfig::default()
    };
    let engine = StockSentiment::new(UnavailableOracle).with_config(config).unwrap();

    let err = engine.get_alerts_at("me", today()).unwrap_err();
    assert!(matches!(err, SentimentError::Oracle(_)));
}

#[test]
fn test_unknown_direction_is_a_sell_signal() {
    let oracle = InMemoryFriendOracle::new()
        .with_friends("me", ["f1"])
        .with_trades("f1", ["2024-03-09,HOLD,TWTR", "2024-03-09,Buy,TWTR"]);
    let engine = StockSentiment::new(oracle);

    assert_eq!(engine.get_alerts_at("me", today()).unwrap(), vec!["2,SELL,TWTR"]);
}

#[test]
fn test_window_boundary() {
    let seven_back = today() - Days::new(7);
    let six_back = today() - Days::new(6);
    let oracle = InMemoryFriendOracle::new()
        .with_friends("me", ["f1"])
        .with_trades(
            "f1",
            [
                format!("{},BUY,OLD", seven_back.format(TRADE_DATE_FORMAT)),
                format!("{},BUY,NEW", six_back.format(TRADE_DATE_FORMAT)),
            ],
        );
    let engine = StockSentiment::new(oracle);

    assert_eq!(engine.get_alerts_at("me", today()).unwrap(), vec!["1,BUY,NEW"]);
}

#[test]
fn test_oracle_as_reference() {
    let oracle = two_friend_oracle();
    let engine = StockSentiment::new(&oracle);
    assert_eq!(engine.get_alerts_at("myUserId", today()).unwrap().len(), 5);
}

#[test]
fn test_ranked_output_properties() {
    // Pseudo-random ranks; magnitudes repeat so ties are exercised
    let ranks: RankMap = (0..60i64)
        .map(|i| (format!("S{:02}", (i * 37) % 60), (i * 7919) % 11 - 5))
        .collect();
    let ranked = rank(&ranks);

    // Zero ranks never surface
    assert!(ranked.iter().all(|e| e.rank != 0));
    let expected_len = ranks.iter().filter(|&(_, &r)| r != 0).count();
    assert_eq!(ranked.len(), expected_len);

    // Magnitude descending, then symbol ascending
    for pair in ranked.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.magnitude() >= b.magnitude());
        if a.magnitude() == b.magnitude() {
            assert!(a.symbol < b.symbol);
        }
    }

    // Formatting keeps order and sign
    let alerts = build_alerts(&ranked);
    for (alert, entry) in alerts.iter().zip(&ranked) {
        let label = if entry.rank > 0 { "BUY" } else { "SELL" };
        assert_eq!(*alert, format!("{},{},{}", entry.rank.abs(), label, entry.symbol));
    }
}
