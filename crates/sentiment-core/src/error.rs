use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Malformed trade '{line}': expected 3 comma-separated fields, found {fields}")]
    MalformedTrade { line: String, fields: usize },

    #[error("Invalid trade date in '{line}': {source}")]
    InvalidDate {
        line: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Oracle error: {0}")]
    Oracle(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl SentimentError {
    /// True for errors raised while parsing a single trade record.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            SentimentError::MalformedTrade { .. } | SentimentError::InvalidDate { .. }
        )
    }
}
