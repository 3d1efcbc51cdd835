//! Symbol Ranking Module
//!
//! Orders net ranks into the final alert order.

use sentiment_core::RankedEntry;
use std::cmp::Ordering;

use crate::accumulator::RankMap;

/// Rank symbols by signal strength.
///
/// Symbols whose net rank is exactly zero are dropped. The rest are ordered
/// by `|rank|` descending, ties broken by symbol ascending (byte-wise, so
/// upper case sorts before lower case). The result does not depend on the
/// map's iteration order.
pub fn rank(ranks: &RankMap) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = ranks
        .iter()
        .filter(|&(_, &rank)| rank != 0)
        .map(|(symbol, &rank)| RankedEntry::new(symbol.clone(), rank))
        .collect();

    entries.sort_by(compare_entries);
    entries
}

fn compare_entries(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.magnitude()
        .cmp(&a.magnitude())
        .then_with(|| a.symbol.cmp(&b.symbol))
}
