//! Terminal and JSON presentation of a search outcome.

use std::fmt::Write as _;

use serde::Serialize;
use shared::{
    domain::{PositionedEvent, SearchMode, DAYS_PER_WEEK},
    protocol::{SearchOutcome, SearchStatus},
};
use timetable::{
    time_bounds,
    viewport::{day_label, format_minutes, title_hue, BlockGeometry, Viewport},
};

pub const EMPTY_MESSAGE: &str = "결과가 없습니다. 입력값과 학기를 확인해 주세요.";

#[derive(Debug, Serialize)]
pub struct RenderedTimetable<'a> {
    pub status: &'a SearchStatus,
    pub window_start: u32,
    pub window_end: u32,
    pub total_height: u32,
    pub hour_marks: Vec<u32>,
    pub blocks: Vec<RenderedBlock<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RenderedBlock<'a> {
    #[serde(flatten)]
    pub event: &'a PositionedEvent,
    pub hue: u16,
    pub top: f32,
    pub height: f32,
    pub left_fraction: f32,
    pub width_fraction: f32,
}

pub fn layout(outcome: &SearchOutcome) -> RenderedTimetable<'_> {
    let viewport = Viewport::new(time_bounds(&outcome.events));
    RenderedTimetable {
        status: &outcome.status,
        window_start: viewport.start,
        window_end: viewport.end,
        total_height: viewport.total_height(),
        hour_marks: viewport.hour_marks(),
        blocks: outcome
            .events
            .iter()
            .map(|event| {
                let BlockGeometry {
                    top,
                    height,
                    left_fraction,
                    width_fraction,
                } = viewport.place(event);
                RenderedBlock {
                    event,
                    hue: title_hue(&event.title),
                    top,
                    height,
                    left_fraction,
                    width_fraction,
                }
            })
            .collect(),
    }
}

pub fn render_json(outcome: &SearchOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&layout(outcome))
}

/// Day-by-day agenda. The secondary line shows whatever the user did not
/// search by: the professor for room searches and the room for professor
/// searches.
pub fn render_text(outcome: &SearchOutcome, mode: SearchMode) -> String {
    let mut out = String::new();

    match &outcome.status {
        SearchStatus::Failed { reason } => {
            let _ = writeln!(out, "{EMPTY_MESSAGE}");
            let _ = writeln!(out, "(request failed: {reason})");
            return out;
        }
        SearchStatus::NoMatches => {
            let _ = writeln!(out, "{EMPTY_MESSAGE}");
            return out;
        }
        SearchStatus::Found => {}
    }

    let (start, end) = time_bounds(&outcome.events);
    let _ = writeln!(
        out,
        "{} events, {}-{}",
        outcome.events.len(),
        format_minutes(start),
        format_minutes(end)
    );

    for day in 0..DAYS_PER_WEEK {
        let mut events = outcome.events.iter().filter(|e| e.day == day).peekable();
        if events.peek().is_none() {
            continue;
        }
        let _ = writeln!(out, "\n[{}]", day_label(day));
        for event in events {
            let meta = match mode {
                SearchMode::Professor => event.room.as_deref(),
                SearchMode::Room => event.professor.as_deref(),
            }
            .unwrap_or_default();

            let _ = write!(
                out,
                "  {}-{}  {}/{}  {}",
                format_minutes(event.start),
                format_minutes(event.end),
                event.column + 1,
                event.column_count,
                event.title
            );
            if !meta.trim().is_empty() {
                let _ = write!(out, "  ({meta})");
            }
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
