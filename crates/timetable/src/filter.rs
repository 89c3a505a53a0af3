//! Exact-match search predicates. No partial or fuzzy matching.

use shared::domain::{Lecture, SearchMode};

/// Comparison key: every whitespace character removed, lowercased.
pub fn normalize_key(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn professor_exact(lecture: &Lecture, query: &str) -> bool {
    lecture
        .professor
        .as_deref()
        .is_some_and(|professor| normalize_key(professor) == normalize_key(query))
}

pub fn room_exact(lecture: &Lecture, query: &str) -> bool {
    let needle = normalize_key(query);
    lecture.times.iter().any(|slot| {
        slot.room
            .as_deref()
            .is_some_and(|room| normalize_key(room) == needle)
    })
}

pub fn matches(lecture: &Lecture, mode: SearchMode, query: &str) -> bool {
    match mode {
        SearchMode::Professor => professor_exact(lecture, query),
        SearchMode::Room => room_exact(lecture, query),
    }
}

pub fn filter_lectures(lectures: Vec<Lecture>, mode: SearchMode, query: &str) -> Vec<Lecture> {
    lectures
        .into_iter()
        .filter(|lecture| matches(lecture, mode, query))
        .collect()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
