use super::*;
use shared::domain::TimeSlot;

fn lecture(title: &str, slots: &[(u8, u32, u32)]) -> Lecture {
    Lecture {
        title: title.to_string(),
        professor: Some("Kim".to_string()),
        times: slots
            .iter()
            .map(|&(day, start_min, end_min)| TimeSlot {
                day,
                start_min,
                end_min,
                room: Some("301".to_string()),
            })
            .collect(),
    }
}

fn summary(events: &[PositionedEvent]) -> Vec<(&str, u8, u32, u32, u32, u32)> {
    events
        .iter()
        .map(|e| {
            (
                e.title.as_str(),
                e.day,
                e.start,
                e.end,
                e.column,
                e.column_count,
            )
        })
        .collect()
}

#[test]
fn empty_input_produces_no_events() {
    assert!(build_events(&[]).is_empty());
    assert!(build_events(&[lecture("No slots", &[])]).is_empty());
}

#[test]
fn overlapping_pair_gets_distinct_columns_and_touching_block_reuses_zero() {
    let lectures = vec![
        lecture("A", &[(0, 0, 60)]),
        lecture("B", &[(0, 30, 90)]),
        lecture("C", &[(0, 60, 120)]),
    ];
    let events = build_events(&lectures);

    assert_eq!(
        summary(&events),
        vec![
            ("A", 0, 0, 60, 0, 1),
            ("B", 0, 30, 90, 1, 2),
            ("C", 0, 60, 120, 0, 1),
        ]
    );
    assert_ne!(events[0].column, events[1].column);
}

#[test]
fn identical_intervals_share_one_column_count() {
    let lectures = vec![
        lecture("A", &[(2, 540, 600)]),
        lecture("B", &[(2, 540, 600)]),
        lecture("C", &[(2, 540, 600)]),
    ];
    let events = build_events(&lectures);

    let columns: Vec<u32> = events.iter().map(|e| e.column).collect();
    assert_eq!(columns, vec![0, 1, 2]);
    assert!(events.iter().all(|e| e.column_count == 3));
}

#[test]
fn freed_column_is_reused_before_opening_a_new_one() {
    let lectures = vec![
        lecture("Long", &[(1, 0, 120)]),
        lecture("Short", &[(1, 0, 60)]),
        lecture("Late", &[(1, 60, 120)]),
    ];
    let events = build_events(&lectures);

    assert_eq!(
        summary(&events),
        vec![
            ("Long", 1, 0, 120, 0, 1),
            ("Short", 1, 0, 60, 1, 2),
            ("Late", 1, 60, 120, 1, 2),
        ]
    );
}

#[test]
fn lowest_gap_column_is_chosen() {
    let lectures = vec![
        lecture("A", &[(0, 0, 300)]),
        lecture("B", &[(0, 10, 50)]),
        lecture("C", &[(0, 20, 300)]),
        lecture("D", &[(0, 60, 90)]),
    ];
    let events = build_events(&lectures);
    let d = events.iter().find(|e| e.title == "D").expect("D placed");
    assert_eq!(d.column, 1);
}

#[test]
fn days_are_packed_independently_and_sorted() {
    let lectures = vec![
        lecture("Wed", &[(2, 540, 600)]),
        lecture("Mon", &[(0, 600, 660), (2, 540, 600)]),
        lecture("Mon early", &[(0, 540, 630)]),
    ];
    let events = build_events(&lectures);

    assert_eq!(
        summary(&events),
        vec![
            ("Mon early", 0, 540, 630, 0, 1),
            ("Mon", 0, 600, 660, 1, 2),
            ("Wed", 2, 540, 600, 0, 2),
            ("Mon", 2, 540, 600, 1, 2),
        ]
    );
}

#[test]
fn one_event_per_lecture_slot() {
    let lectures = vec![
        lecture("A", &[(0, 0, 60), (0, 30, 90), (3, 0, 60)]),
        lecture("B", &[(0, 10, 20)]),
    ];
    assert_eq!(build_events(&lectures).len(), 4);
}

#[test]
fn overlapping_events_never_share_a_column_at_insertion() {
    let lectures = vec![
        lecture("A", &[(4, 0, 100)]),
        lecture("B", &[(4, 20, 40)]),
        lecture("C", &[(4, 30, 70)]),
        lecture("D", &[(4, 45, 80)]),
        lecture("E", &[(4, 90, 95)]),
    ];
    let events = build_events(&lectures);

    for (i, a) in events.iter().enumerate() {
        for b in events.iter().skip(i + 1) {
            if a.overlaps(b) {
                assert_ne!(a.column, b.column, "{} and {} collide", a.title, b.title);
            }
        }
    }
}
