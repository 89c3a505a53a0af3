use shared::domain::PositionedEvent;

/// Window shown when there is nothing to lay out: 09:00 to 18:00.
pub const DEFAULT_BOUNDS: (u32, u32) = (9 * 60, 18 * 60);

/// Earliest start floored to the hour and latest end ceiled to the hour.
pub fn time_bounds(events: &[PositionedEvent]) -> (u32, u32) {
    let Some(earliest) = events.iter().map(|event| event.start).min() else {
        return DEFAULT_BOUNDS;
    };
    let latest = events.iter().map(|event| event.end).max().unwrap_or(earliest);

    (floor_hour(earliest), ceil_hour(latest))
}

pub fn floor_hour(minute: u32) -> u32 {
    minute / 60 * 60
}

/// Saturates at the last whole hour representable in `u32`.
pub fn ceil_hour(minute: u32) -> u32 {
    minute
        .div_ceil(60)
        .checked_mul(60)
        .unwrap_or(floor_hour(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(start: u32, end: u32) -> PositionedEvent {
        PositionedEvent {
            title: "T".to_string(),
            professor: None,
            room: None,
            day: 0,
            start,
            end,
            column: 0,
            column_count: 1,
        }
    }

    #[test]
    fn empty_events_use_default_window() {
        assert_eq!(time_bounds(&[]), (540, 1080));
    }

    #[test]
    fn bounds_snap_outward_to_whole_hours() {
        let events = [event(555, 630), event(600, 1261)];
        assert_eq!(time_bounds(&events), (540, 1320));
    }

    #[test]
    fn ceil_hour_saturates_near_u32_max() {
        assert_eq!(ceil_hour(u32::MAX), floor_hour(u32::MAX));
        assert_eq!(ceil_hour(u32::MAX - 1), floor_hour(u32::MAX));
        assert_eq!(time_bounds(&[event(540, u32::MAX)]), (540, floor_hour(u32::MAX)));
    }

    #[test]
    fn exact_hours_are_kept() {
        let events = [event(480, 600)];
        assert_eq!(time_bounds(&events), (480, 600));
    }
}
