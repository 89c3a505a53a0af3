use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::TimetableError;

/// Number of day indices a slot may carry: Monday = 0 through Sunday = 6.
pub const DAYS_PER_WEEK: u8 = 7;
/// Upper bound for slot minutes; a slot may end at 24:00 but not later.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    Professor,
    #[default]
    Room,
}

impl SearchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Professor => "professor",
            Self::Room => "room",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "professor" => Ok(Self::Professor),
            "room" => Ok(Self::Room),
            other => Err(TimetableError::UnknownSearchMode(other.to_string())),
        }
    }
}

/// One weekly meeting of a lecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: u8,
    pub start_min: u32,
    pub end_min: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

/// A lecture record after normalization. `title` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professor: Option<String>,
    pub times: Vec<TimeSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedEvent {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    pub day: u8,
    pub start: u32,
    pub end: u32,
    pub column: u32,
    pub column_count: u32,
}

impl PositionedEvent {
    /// Key shared by events that must agree on `column_count`.
    pub fn slot_key(&self) -> (u8, u32, u32) {
        (self.day, self.start, self.end)
    }

    pub fn overlaps(&self, other: &PositionedEvent) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}
