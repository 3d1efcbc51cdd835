use sentiment_core::{Alert, RankedEntry};

/// Render one entry as `<|rank|>,<BUY|SELL>,<symbol>`.
pub fn format_alert(entry: &RankedEntry) -> String {
    Alert::from(entry).to_string()
}

/// Render every entry, keeping the ranked order.
pub fn build_alerts(entries: &[RankedEntry]) -> Vec<String> {
    entries.iter().map(format_alert).collect()
}

pub fn to_alerts(entries: &[RankedEntry]) -> Vec<Alert> {
    entries.iter().map(Alert::from).collect()
}
