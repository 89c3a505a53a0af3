//! Converts loosely-typed backend records into [`Lecture`] values.
//!
//! Every field is looked up through a list of candidate keys because the
//! upstream schema has several observed variants. Anything that cannot be
//! resolved is dropped rather than failing the whole batch.

use serde_json::Value;
use shared::{
    domain::{Lecture, TimeSlot, DAYS_PER_WEEK, MINUTES_PER_DAY},
    protocol::RawRecord,
};
use tracing::debug;

const TITLE_KEYS: &[&str] = &["title", "course_title", "name"];
const PROFESSOR_KEYS: &[&str] = &["instructor", "professor", "instructors"];
const TIMES_KEYS: &[&str] = &["class_time_json", "times", "classTimes"];
const NUMERIC_DAY_KEYS: &[&str] = &["day", "dayOfWeek"];
const START_KEYS: &[&str] = &["start", "start_min"];
const END_KEYS: &[&str] = &["end", "end_min"];
const ROOM_KEYS: &[&str] = &["place", "room", "location"];

const DAY_NAMES: &[(&str, u8)] = &[
    ("월", 0),
    ("Mon", 0),
    ("MON", 0),
    ("화", 1),
    ("Tue", 1),
    ("TUE", 1),
    ("수", 2),
    ("Wed", 2),
    ("WED", 2),
    ("목", 3),
    ("Thu", 3),
    ("THU", 3),
    ("금", 4),
    ("Fri", 4),
    ("FRI", 4),
    ("토", 5),
    ("Sat", 5),
    ("SAT", 5),
    ("일", 6),
    ("Sun", 6),
    ("SUN", 6),
];

pub fn normalize(raw: &RawRecord) -> Option<Lecture> {
    let Some(title) = resolve_title(raw) else {
        debug!("normalize: dropping record without title");
        return None;
    };

    let times = resolve_time_array(raw)
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(slot) => normalize_slot(slot),
            _ => None,
        })
        .collect();

    Some(Lecture {
        title,
        professor: resolve_professor(raw),
        times,
    })
}

pub fn normalize_all(records: &[RawRecord]) -> Vec<Lecture> {
    let lectures: Vec<Lecture> = records.iter().filter_map(normalize).collect();
    debug!(
        "normalize: kept {} of {} records",
        lectures.len(),
        records.len()
    );
    lectures
}

/// Looks up a weekday abbreviation. Matching is exact and case-sensitive.
pub fn day_index(name: &str) -> Option<u8> {
    DAY_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, day)| *day)
}

/// Parses `"HH:MM"` into minutes since midnight. Negative parts and minute
/// fields of 60 or more are rejected.
pub fn parse_clock(text: &str) -> Option<i64> {
    let (hours, minutes) = text.split_once(':')?;
    if minutes.contains(':') {
        return None;
    }
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;
    if hours < 0 || !(0..60).contains(&minutes) {
        return None;
    }
    hours.checked_mul(60)?.checked_add(minutes)
}

fn normalize_slot(slot: &RawRecord) -> Option<TimeSlot> {
    let day = resolve_day(slot)?;
    let start = resolve_minute(slot, START_KEYS, "start_time")?;
    let end = resolve_minute(slot, END_KEYS, "end_time")?;
    if start < 0 || end <= start || end > i64::from(MINUTES_PER_DAY) {
        debug!("normalize: dropping slot with range {start}..{end}");
        return None;
    }

    Some(TimeSlot {
        day,
        start_min: u32::try_from(start).ok()?,
        end_min: u32::try_from(end).ok()?,
        room: first_present(slot, ROOM_KEYS).and_then(stringify),
    })
}

fn resolve_title(raw: &RawRecord) -> Option<String> {
    TITLE_KEYS.iter().find_map(|key| {
        let title = raw.get(*key).and_then(scalar_text)?;
        let title = title.trim();
        (!title.is_empty()).then(|| title.to_string())
    })
}

fn resolve_professor(raw: &RawRecord) -> Option<String> {
    let joined = match first_present(raw, PROFESSOR_KEYS)? {
        Value::String(name) => name.clone(),
        Value::Array(names) => names
            .iter()
            .map(|name| stringify(name).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    let trimmed = joined.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn resolve_time_array(raw: &RawRecord) -> &[Value] {
    TIMES_KEYS
        .iter()
        .find_map(|key| match raw.get(*key) {
            Some(Value::Array(entries)) => Some(entries.as_slice()),
            _ => None,
        })
        .unwrap_or(&[])
}

fn resolve_day(slot: &RawRecord) -> Option<u8> {
    if let Some(day) = first_number(slot, NUMERIC_DAY_KEYS) {
        return u8::try_from(day)
            .ok()
            .filter(|day| *day < DAYS_PER_WEEK);
    }
    match slot.get("day") {
        Some(Value::String(name)) => day_index(name),
        _ => None,
    }
}

fn resolve_minute(slot: &RawRecord, numeric_keys: &[&str], clock_key: &str) -> Option<i64> {
    first_number(slot, numeric_keys).or_else(|| match slot.get(clock_key) {
        Some(Value::String(clock)) => parse_clock(clock),
        _ => None,
    })
}

fn first_present<'a>(map: &'a RawRecord, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| map.get(*key).filter(|value| !value.is_null()))
}

/// First numeric value under `keys`, truncated toward zero.
fn first_number(map: &RawRecord, keys: &[&str]) -> Option<i64> {
    keys.iter().find_map(|key| match map.get(*key) {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|value| value.trunc() as i64)),
        _ => None,
    })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => stringify(value),
        _ => None,
    }
}

fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
