//! Column packing of overlapping time blocks.
//!
//! Phase one flattens every (lecture, slot) pair into an arena and sweeps each
//! day in start order, giving every block the smallest column not held by a
//! block it overlaps. Phase two rewrites `column_count` in place so that all
//! blocks sharing `(day, start, end)` agree on it.

use std::collections::HashMap;

use shared::domain::{Lecture, PositionedEvent, DAYS_PER_WEEK};

pub fn build_events(lectures: &[Lecture]) -> Vec<PositionedEvent> {
    let mut arena = flatten(lectures);
    assign_columns(&mut arena);
    correct_column_counts(&mut arena);

    arena.sort_by_key(|event| (event.day, event.start, event.column));
    arena
}

fn flatten(lectures: &[Lecture]) -> Vec<PositionedEvent> {
    lectures
        .iter()
        .flat_map(|lecture| {
            lecture.times.iter().map(|slot| PositionedEvent {
                title: lecture.title.clone(),
                professor: lecture.professor.clone(),
                room: slot.room.clone(),
                day: slot.day,
                start: slot.start_min,
                end: slot.end_min,
                column: 0,
                column_count: 1,
            })
        })
        .collect()
}

fn assign_columns(arena: &mut [PositionedEvent]) {
    for day in 0..DAYS_PER_WEEK {
        let mut order: Vec<usize> = (0..arena.len())
            .filter(|&ix| arena[ix].day == day)
            .collect();
        order.sort_by_key(|&ix| arena[ix].start);

        let mut active: Vec<usize> = Vec::new();
        for ix in order {
            let start = arena[ix].start;
            active.retain(|&other| arena[other].end > start);

            let column = lowest_free_column(active.iter().map(|&other| arena[other].column));
            arena[ix].column = column;
            active.push(ix);
        }
    }
}

fn lowest_free_column(taken: impl Iterator<Item = u32>) -> u32 {
    let mut taken: Vec<u32> = taken.collect();
    taken.sort_unstable();
    taken.dedup();
    taken
        .iter()
        .enumerate()
        .find(|(expected, column)| **column != *expected as u32)
        .map_or(taken.len() as u32, |(expected, _)| expected as u32)
}

fn correct_column_counts(arena: &mut [PositionedEvent]) {
    let mut widest: HashMap<(u8, u32, u32), u32> = HashMap::new();
    for event in arena.iter() {
        let max = widest.entry(event.slot_key()).or_insert(0);
        *max = (*max).max(event.column);
    }
    for event in arena.iter_mut() {
        event.column_count = widest[&event.slot_key()] + 1;
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
