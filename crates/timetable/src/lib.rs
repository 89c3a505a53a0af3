//! Lecture timetable core: normalization of backend records, exact-match
//! filtering, per-day column packing and viewport geometry.

pub mod bounds;
pub mod filter;
pub mod layout;
pub mod normalize;
pub mod pipeline;
pub mod viewport;

pub use bounds::time_bounds;
pub use filter::{professor_exact, room_exact};
pub use layout::build_events;
pub use normalize::normalize;
pub use pipeline::{parse_records, search_events};
