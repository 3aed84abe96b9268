//! Line-oriented calendar text parsing.
//!
//! Parsing is tolerant by design: a malformed line degrades output
//! completeness, never the correctness of other lines. The function is
//! pure; identical input always yields identical output.

use once_cell::sync::Lazy;
use regex::Regex;

use super::date::{self, SeasonWindow};
use super::types::{CalendarEvent, EventKind, MARKERS};

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Characters trimmed from both ends of the subject text.
const SUBJECT_TRIM: [char; 4] = [' ', '-', ':', '\u{2014}'];

/// Parses raw calendar text into events, sorted by date ascending.
///
/// Per line:
/// 1. Blank lines and `#` comments are skipped.
/// 2. Whitespace runs collapse to single spaces.
/// 3. The line must contain a marker from the fixed vocabulary; when more
///    than one appears, the leftmost occurrence wins. Lines without a
///    marker are silently dropped.
/// 4. The date is resolved from the text before the marker, falling back
///    to the whole line. Lines whose date cannot be resolved are dropped.
/// 5. The subject is the text after the marker with surrounding
///    punctuation trimmed; it may be empty.
///
/// The sort is stable: same-date events keep their input order.
#[must_use]
pub fn parse(text: &str, season: SeasonWindow) -> Vec<CalendarEvent> {
    let mut events: Vec<CalendarEvent> = text
        .lines()
        .filter_map(|raw| parse_line(raw, season))
        .collect();
    events.sort_by_key(|event| event.date);
    events
}

fn parse_line(raw: &str, season: SeasonWindow) -> Option<CalendarEvent> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let line = normalize(trimmed);
    let (position, marker, kind) = find_marker(&line)?;

    let before = &line[..position];
    let date = date::resolve(before, season).or_else(|| date::resolve(&line, season))?;

    let after = &line[position + marker.len()..];
    let subject = after.trim_matches(SUBJECT_TRIM).to_string();

    Some(CalendarEvent {
        date,
        kind,
        subject,
        marker,
        raw: raw.to_string(),
    })
}

/// Collapses internal whitespace runs to single spaces.
fn normalize(line: &str) -> String {
    WHITESPACE_RUNS.replace_all(line, " ").into_owned()
}

/// Finds the leftmost marker occurrence in the line.
fn find_marker(line: &str) -> Option<(usize, &'static str, EventKind)> {
    MARKERS
        .iter()
        .filter_map(|&(marker, kind)| line.find(marker).map(|pos| (pos, marker, kind)))
        .min_by_key(|&(pos, ..)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const SEASON: SeasonWindow = SeasonWindow::new(2025, 2026);

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_iso_social_line() {
        let events = parse("2025-10-14 \u{1f355} Dani", SEASON);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, date(2025, 10, 14));
        assert_eq!(events[0].kind, EventKind::Social);
        assert_eq!(events[0].subject, "Dani");
        assert_eq!(events[0].raw, "2025-10-14 \u{1f355} Dani");
    }

    #[test]
    fn test_month_name_home_match_line() {
        let events = parse("18 ott \u{1f3e0} Scanzo vs XYZ", SEASON);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, date(2025, 10, 18));
        assert_eq!(events[0].kind, EventKind::HomeMatch);
        assert_eq!(events[0].subject, "Scanzo vs XYZ");
    }

    #[test]
    fn test_line_without_marker_is_dropped() {
        assert!(parse("2025-10-14 Dani compleanno", SEASON).is_empty());
    }

    #[test]
    fn test_line_without_date_is_dropped() {
        assert!(parse("\u{1f355} Dani", SEASON).is_empty());
    }

    #[test]
    fn test_comments_and_blanks_are_skipped() {
        let text = "\n   \n# 2025-10-14 \u{1f355} Dani\n  # indented comment\n";
        assert!(parse(text, SEASON).is_empty());
    }

    #[test]
    fn test_bad_line_does_not_affect_others() {
        let text = "garbage without anything\n2025-11-02 \u{1f382} Mirco\n\u{1f3e0} no date here";
        let events = parse(text, SEASON);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Birthday);
        assert_eq!(events[0].subject, "Mirco");
    }

    #[test]
    fn test_whitespace_collapse_and_subject_trim() {
        let events = parse("2025-10-25   \u{2708}\u{fe0f}  -  Trasferta vs ABC : ", SEASON);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::AwayMatch);
        assert_eq!(events[0].subject, "Trasferta vs ABC");
    }

    #[test]
    fn test_empty_subject() {
        let events = parse("2025-10-14 \u{1f355}", SEASON);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].subject, "");
    }

    #[test]
    fn test_date_after_marker_resolves_via_whole_line() {
        // Nothing parseable before the marker; the whole-line fallback
        // still finds the date.
        let events = parse("\u{1f382} Mirco 2 nov", SEASON);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, date(2025, 11, 2));
    }

    #[test]
    fn test_leftmost_marker_wins() {
        let events = parse("2025-10-14 \u{1f3e0} festa \u{1f355} dopo", SEASON);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::HomeMatch);
        assert_eq!(events[0].subject, "festa \u{1f355} dopo");
    }

    #[test]
    fn test_sorted_by_date_with_stable_ties() {
        let text = "\
2025-11-02 \u{1f382} Mirco
2025-10-14 \u{1f355} Dani
2025-10-14 \u{1f355} Gio
14-10-25 \u{1f3e0} Scanzo";
        let events = parse(text, SEASON);
        let summary: Vec<(NaiveDate, &str)> = events
            .iter()
            .map(|e| (e.date, e.subject.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (date(2025, 10, 14), "Dani"),
                (date(2025, 10, 14), "Gio"),
                (date(2025, 10, 14), "Scanzo"),
                (date(2025, 11, 2), "Mirco"),
            ]
        );
    }

    #[test]
    fn test_parse_is_pure() {
        let text = "2025-10-14 \u{1f355} Dani\n18 ott \u{1f3e0} Scanzo";
        assert_eq!(parse(text, SEASON), parse(text, SEASON));
    }
}
