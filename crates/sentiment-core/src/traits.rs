use chrono::{Local, NaiveDate};

use crate::SentimentError;

/// Source of a user's social graph and of each user's raw trade lines.
///
/// Implementations return an empty list for unknown users; `Err` is reserved
/// for the source itself being unavailable.
pub trait FriendOracle: Send + Sync {
    fn get_friends_list_for_user(&self, user_id: &str) -> Result<Vec<String>, SentimentError>;

    /// Raw `YYYY-MM-DD,BUY|SELL,SYMBOL` lines, in no particular order.
    fn get_trade_transactions_for_user(&self, user_id: &str)
        -> Result<Vec<String>, SentimentError>;
}

impl<T: FriendOracle + ?Sized> FriendOracle for &T {
    fn get_friends_list_for_user(&self, user_id: &str) -> Result<Vec<String>, SentimentError> {
        (**self).get_friends_list_for_user(user_id)
    }

    fn get_trade_transactions_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<String>, SentimentError> {
        (**self).get_trade_transactions_for_user(user_id)
    }
}

/// Supplies the calendar date the trailing window ends on.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
