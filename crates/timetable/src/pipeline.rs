use shared::{
    domain::{PositionedEvent, SearchMode},
    error::TimetableError,
    protocol::RawRecord,
};
use tracing::debug;

use crate::{filter::filter_lectures, layout::build_events, normalize::normalize_all};

/// Raw records in, positioned events for one search out.
pub fn search_events(records: &[RawRecord], mode: SearchMode, query: &str) -> Vec<PositionedEvent> {
    let lectures = normalize_all(records);
    let matched = filter_lectures(lectures, mode, query);
    let events = build_events(&matched);
    debug!(
        "pipeline: mode={mode} matched_lectures={} events={}",
        matched.len(),
        events.len()
    );
    events
}

/// Parses a saved backend response. Elements that are not objects are skipped.
pub fn parse_records(body: &str) -> Result<Vec<RawRecord>, TimetableError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|err| TimetableError::MalformedPayload(err.to_string()))?;
    let serde_json::Value::Array(entries) = value else {
        return Err(TimetableError::MalformedPayload(
            "expected a JSON array of lecture records".to_string(),
        ));
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            serde_json::Value::Object(record) => Some(record),
            _ => None,
        })
        .collect())
}
