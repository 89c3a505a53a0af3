use serde::{Deserialize, Serialize};

use crate::{
    domain::{PositionedEvent, SearchMode},
    error::TimetableError,
};

/// One lecture record as the backend proxy returns it. Key names and value
/// shapes vary between upstream versions.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Query parameters of `GET /api/snutt/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub year: i32,
    pub semester: String,
}

/// A user-issued search: which term to fetch and what to match against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: SearchQuery,
    pub mode: SearchMode,
    pub text: String,
}

impl SearchRequest {
    pub fn new(query: SearchQuery, mode: SearchMode, text: impl Into<String>) -> Self {
        Self {
            query,
            mode,
            text: text.into(),
        }
    }

    pub fn validate(&self) -> Result<(), TimetableError> {
        if self.query.semester.trim().is_empty() {
            return Err(TimetableError::BlankSemester);
        }
        if self.text.trim().is_empty() {
            return Err(TimetableError::BlankQuery);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchStatus {
    Found,
    NoMatches,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    pub events: Vec<PositionedEvent>,
}

impl SearchOutcome {
    pub fn from_events(events: Vec<PositionedEvent>) -> Self {
        let status = if events.is_empty() {
            SearchStatus::NoMatches
        } else {
            SearchStatus::Found
        };
        Self { status, events }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            status: SearchStatus::Failed {
                reason: reason.into(),
            },
            events: Vec::new(),
        }
    }

    /// True both for "no matches" and for a failed request.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, SearchStatus::Failed { .. })
    }
}
