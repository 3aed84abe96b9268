//! Upcoming-event projections for the landing page.
//!
//! Pure functions over an already-parsed, date-sorted event slice. The
//! hosting layer seeds the raw text blob with `DEFAULT_CALENDAR` when the
//! file is absent.

use chrono::NaiveDate;

use super::types::{CalendarEvent, EventKind};

/// Seed content for a freshly created calendar file.
pub const DEFAULT_CALENDAR: &str = "\
# Esempi (una riga per evento). Modifica liberamente:
# 2025-10-14 \u{1f355} Dani
# 2025-10-18 \u{1f3e0} Scanzo vs XYZ
# 2025-10-25 \u{2708}\u{fe0f} Trasferta vs ABC
# 2025-11-02 \u{1f382} Mirco
";

/// Returns the next `limit` social events on or after `today`.
#[must_use]
pub fn upcoming_social(
    events: &[CalendarEvent],
    today: NaiveDate,
    limit: usize,
) -> Vec<&CalendarEvent> {
    events
        .iter()
        .filter(|e| e.kind == EventKind::Social && e.date >= today)
        .take(limit)
        .collect()
}

/// Returns the first home or away match on or after `today`.
#[must_use]
pub fn next_match(events: &[CalendarEvent], today: NaiveDate) -> Option<&CalendarEvent> {
    events
        .iter()
        .find(|e| e.kind.is_match() && e.date >= today)
}

#[cfg(test)]
mod tests {
    use super::super::date::SeasonWindow;
    use super::super::parser::parse;
    use super::*;

    const SEASON: SeasonWindow = SeasonWindow::new(2025, 2026);

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn sample_events() -> Vec<CalendarEvent> {
        parse(
            "\
2025-10-14 \u{1f355} Dani
2025-10-18 \u{1f3e0} Scanzo vs XYZ
2025-10-25 \u{2708}\u{fe0f} Trasferta vs ABC
2025-11-02 \u{1f382} Mirco
2025-11-10 \u{1f355} Gio",
            SEASON,
        )
    }

    #[test]
    fn test_upcoming_social_skips_past_events() {
        let events = sample_events();
        let upcoming = upcoming_social(&events, date(2025, 10, 20), 5);
        let subjects: Vec<&str> = upcoming.iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Gio"]);
    }

    #[test]
    fn test_upcoming_social_same_day_counts() {
        let events = sample_events();
        let upcoming = upcoming_social(&events, date(2025, 10, 14), 5);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].subject, "Dani");
    }

    #[test]
    fn test_upcoming_social_respects_limit() {
        let events = sample_events();
        let upcoming = upcoming_social(&events, date(2025, 1, 1), 1);
        assert_eq!(upcoming.len(), 1);
    }

    #[test]
    fn test_next_match_picks_first_of_either_kind() {
        let events = sample_events();

        let next = next_match(&events, date(2025, 10, 1)).unwrap();
        assert_eq!(next.kind, EventKind::HomeMatch);
        assert_eq!(next.subject, "Scanzo vs XYZ");

        let next = next_match(&events, date(2025, 10, 19)).unwrap();
        assert_eq!(next.kind, EventKind::AwayMatch);

        assert!(next_match(&events, date(2025, 12, 1)).is_none());
    }

    #[test]
    fn test_default_calendar_is_all_comments() {
        // The seed text only shows examples; a fresh calendar renders as
        // having no events.
        assert!(parse(DEFAULT_CALENDAR, SEASON).is_empty());
    }
}
