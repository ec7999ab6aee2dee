use reqwest::StatusCode;
use thiserror::Error;

/// Failures of the ranking data source
#[derive(Debug, Error)]
pub enum RankingError {
    #[error("group filter is required")]
    MissingFilter,

    #[error("unknown group filter: {0}")]
    UnknownFilter(String),

    #[error("{}", fetch_context(.url))]
    Fetch {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("ranking API returned status {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("{}", parse_context(.what))]
    Malformed {
        what: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl RankingError {
    /// Precondition failures are raised before any request and never retried
    pub fn is_precondition(&self) -> bool {
        matches!(self, RankingError::MissingFilter | RankingError::UnknownFilter(_))
    }
}

/// Render an error with its chain of sources, `outer: inner: root`
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
