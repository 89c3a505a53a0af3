use super::*;

fn event(start: u32, end: u32, column: u32, column_count: u32) -> PositionedEvent {
    PositionedEvent {
        title: "Algorithms".to_string(),
        professor: None,
        room: None,
        day: 0,
        start,
        end,
        column,
        column_count,
    }
}

#[test]
fn short_windows_keep_minimum_height() {
    let viewport = Viewport::new((540, 1080));
    assert_eq!(viewport.total_height(), 490);

    let viewport = Viewport::new((540, 600));
    assert_eq!(viewport.total_height(), MIN_TOTAL_HEIGHT);
}

#[test]
fn hour_marks_cover_window_inclusively() {
    let viewport = Viewport::new((540, 720));
    assert_eq!(viewport.hour_marks(), vec![540, 600, 660, 720]);
}

#[test]
fn block_geometry_splits_width_by_columns() {
    let viewport = Viewport::new((540, 720));
    let block = viewport.place(&event(595, 650, 1, 2));

    assert!((block.top - 50.0).abs() < 1e-3);
    assert!((block.height - 48.0).abs() < 1e-3);
    assert!((block.left_fraction - 0.5).abs() < f32::EPSILON);
    assert!((block.width_fraction - 0.5).abs() < f32::EPSILON);
}

#[test]
fn tiny_blocks_are_clamped_to_minimum_height() {
    let viewport = Viewport::new((540, 720));
    let block = viewport.place(&event(540, 550, 0, 1));
    assert_eq!(block.height, MIN_BLOCK_HEIGHT);
    assert_eq!(block.top, 0.0);
}

#[test]
fn minutes_format_as_clock() {
    assert_eq!(format_minutes(540), "09:00");
    assert_eq!(format_minutes(630), "10:30");
    assert_eq!(format_minutes(5), "00:05");
}

#[test]
fn day_labels_cover_the_week() {
    assert_eq!(day_label(0), "월");
    assert_eq!(day_label(6), "일");
    assert_eq!(day_label(9), "?");
}

#[test]
fn title_hue_is_stable_and_bounded() {
    assert_eq!(title_hue("A"), 65);
    assert_eq!(title_hue("AB"), (65 * 31 + 66) % 360);
    assert_eq!(title_hue("알고리즘"), title_hue("알고리즘"));
    assert!(title_hue("알고리즘") < 360);
}
