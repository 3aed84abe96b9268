//! Calendar event types and the marker vocabulary.

use chrono::NaiveDate;
use serde::Serialize;

/// Kind of calendar event, keyed by its emoji marker in the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// Pastry/social duty ("paste").
    Social,
    /// Home match.
    HomeMatch,
    /// Away match.
    AwayMatch,
    /// Birthday.
    Birthday,
}

/// The fixed symbol -> type table scanned for in every calendar line.
pub const MARKERS: [(&str, EventKind); 4] = [
    ("\u{1f355}", EventKind::Social),    // 🍕
    ("\u{1f3e0}", EventKind::HomeMatch), // 🏠
    ("\u{2708}\u{fe0f}", EventKind::AwayMatch), // ✈️
    ("\u{1f382}", EventKind::Birthday),  // 🎂
];

impl EventKind {
    /// Returns the emoji marker for this kind.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Social => MARKERS[0].0,
            Self::HomeMatch => MARKERS[1].0,
            Self::AwayMatch => MARKERS[2].0,
            Self::Birthday => MARKERS[3].0,
        }
    }

    /// Returns true for home and away matches.
    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::HomeMatch | Self::AwayMatch)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Social => write!(f, "social"),
            Self::HomeMatch => write!(f, "home-match"),
            Self::AwayMatch => write!(f, "away-match"),
            Self::Birthday => write!(f, "birthday"),
        }
    }
}

/// One event extracted from a calendar line.
///
/// `raw` keeps the original untrimmed line for traceability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    /// The resolved event date.
    pub date: NaiveDate,
    /// The mapped event kind.
    pub kind: EventKind,
    /// Free text after the marker, punctuation-trimmed; may be empty.
    pub subject: String,
    /// The emoji marker that matched.
    pub marker: &'static str,
    /// The original untrimmed input line.
    pub raw: String,
}
