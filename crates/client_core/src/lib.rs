use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use shared::protocol::{RawRecord, SearchOutcome, SearchQuery, SearchRequest};
use timetable::search_events;
use tracing::{info, warn};
use url::Url;

pub mod controller;
pub mod error;

pub use controller::{SearchController, SearchEvent};
pub use error::ClientError;

/// Fallback for a blank base URL only; the `ttuns` CLI always passes its
/// configured base, so its settings default wins there.
pub const DEFAULT_BACKEND_BASE: &str = "https://ttuns-web.vercel.app/";
const SEARCH_PATH: &str = "api/snutt/search";

#[async_trait]
pub trait LectureSource: Send + Sync {
    async fn fetch_lectures(&self, query: &SearchQuery) -> Result<Vec<RawRecord>, ClientError>;
}

/// HTTP client for the lecture search proxy.
pub struct SnuttProxyClient {
    http: Client,
    endpoint: Url,
}

impl SnuttProxyClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, None)
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: search_endpoint(base_url)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LectureSource for SnuttProxyClient {
    async fn fetch_lectures(&self, query: &SearchQuery) -> Result<Vec<RawRecord>, ClientError> {
        let entries: Vec<Value> = self
            .http
            .get(self.endpoint.clone())
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(entries
            .into_iter()
            .filter_map(|entry| match entry {
                Value::Object(record) => Some(record),
                _ => None,
            })
            .collect())
    }
}

/// Resolves the search endpoint under `base_url`. A blank base falls back to
/// [`DEFAULT_BACKEND_BASE`]; a missing trailing slash is added so that any
/// path prefix on the base is kept.
pub fn search_endpoint(base_url: &str) -> Result<Url, ClientError> {
    let base = base_url.trim();
    let base = if base.is_empty() {
        DEFAULT_BACKEND_BASE.to_string()
    } else if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    };

    Url::parse(&base)
        .and_then(|url| url.join(SEARCH_PATH))
        .map_err(|source| ClientError::InvalidBaseUrl { url: base, source })
}

/// Fetches one term and lays out the lectures matching `request`.
///
/// Fetch and decode failures do not propagate: they are logged and reported
/// as a failed, empty outcome.
pub async fn run_search(source: &dyn LectureSource, request: &SearchRequest) -> SearchOutcome {
    info!(
        "search: year={} semester={} mode={} text={:?}",
        request.query.year, request.query.semester, request.mode, request.text
    );

    match source.fetch_lectures(&request.query).await {
        Ok(records) => {
            let events = search_events(&records, request.mode, &request.text);
            info!(
                "search: fetched_records={} events={}",
                records.len(),
                events.len()
            );
            SearchOutcome::from_events(events)
        }
        Err(err) => {
            warn!(
                "search: fetch failed year={} semester={}: {err}",
                request.query.year, request.query.semester
            );
            SearchOutcome::failed(err.to_string())
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
