//! Tolerant parsing of the free-text team calendar.
//!
//! The calendar's source of truth is a raw UTF-8 text blob owned by the
//! hosting layer; this module only transforms text it is handed. Parsed
//! events are a transient projection recomputed on every read:
//! - `types` - event kinds and the marker vocabulary
//! - `date` - heuristic date resolution with season-based year inference
//! - `parser` - line-oriented, non-fatal event extraction
//! - `schedule` - upcoming-event projections for the landing page

pub mod date;
pub mod parser;
pub mod schedule;
pub mod types;

#[cfg(test)]
mod parser_props;

pub use date::SeasonWindow;
pub use parser::parse;
pub use schedule::{DEFAULT_CALENDAR, next_match, upcoming_social};
pub use types::{CalendarEvent, EventKind};
