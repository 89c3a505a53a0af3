use shared::error::TimetableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid backend url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("invalid search request: {0}")]
    InvalidRequest(#[from] TimetableError),
    #[error("lecture search request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("search {ticket} was superseded by a newer search")]
    Superseded { ticket: u64 },
    #[error("search event stream closed before search {ticket} finished")]
    EventsClosed { ticket: u64 },
}
