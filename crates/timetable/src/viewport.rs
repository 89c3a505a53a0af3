//! Geometry of the rendered grid: vertical scale, hour rules, and the
//! rectangle each positioned event occupies inside its day column.

use shared::domain::PositionedEvent;

use crate::bounds::{ceil_hour, floor_hour};

pub const MINUTES_PER_UNIT: f32 = 1.1;
pub const MIN_TOTAL_HEIGHT: u32 = 400;
pub const MIN_BLOCK_HEIGHT: f32 = 22.0;
pub const BLOCK_GAP: f32 = 2.0;
pub const DAY_LABELS: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockGeometry {
    pub top: f32,
    pub height: f32,
    pub left_fraction: f32,
    pub width_fraction: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub start: u32,
    pub end: u32,
}

impl Viewport {
    pub fn new((start, end): (u32, u32)) -> Self {
        Self { start, end }
    }

    pub fn total_height(&self) -> u32 {
        let span = self.end.saturating_sub(self.start) as f32 / MINUTES_PER_UNIT;
        (span as u32).max(MIN_TOTAL_HEIGHT)
    }

    pub fn hour_marks(&self) -> Vec<u32> {
        (floor_hour(self.start)..=ceil_hour(self.end))
            .step_by(60)
            .collect()
    }

    pub fn offset_of(&self, minute: u32) -> f32 {
        (minute as f32 - self.start as f32) / MINUTES_PER_UNIT
    }

    pub fn place(&self, event: &PositionedEvent) -> BlockGeometry {
        let duration = event.end.saturating_sub(event.start) as f32;
        let columns = event.column_count.max(1) as f32;
        BlockGeometry {
            top: self.offset_of(event.start),
            height: (duration / MINUTES_PER_UNIT - BLOCK_GAP).max(MIN_BLOCK_HEIGHT),
            left_fraction: event.column as f32 / columns,
            width_fraction: 1.0 / columns,
        }
    }
}

pub fn format_minutes(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

pub fn day_label(day: u8) -> &'static str {
    DAY_LABELS.get(usize::from(day)).copied().unwrap_or("?")
}

/// Stable hue in `0..360` derived from a lecture title.
pub fn title_hue(title: &str) -> u16 {
    title
        .encode_utf16()
        .fold(0u32, |hue, unit| (hue * 31 + u32::from(unit)) % 360) as u16
}

#[cfg(test)]
#[path = "tests/viewport_tests.rs"]
mod tests;
