//! Property tests for calendar parsing.

use proptest::prelude::*;

use super::date::SeasonWindow;
use super::parser::parse;
use super::types::MARKERS;

const SEASON: SeasonWindow = SeasonWindow::new(2025, 2026);

/// A well-formed event line: day-first numeric date, one marker, subject.
fn event_line_strategy() -> impl Strategy<Value = String> {
    (1u32..=28, 1u32..=12, 0usize..MARKERS.len(), "[A-Za-z]{0,10}").prop_map(
        |(day, month, marker_idx, subject)| {
            format!("{day:02}-{month:02}-2025 {} {subject}", MARKERS[marker_idx].0)
        },
    )
}

/// A line the parser must drop: letters only, no marker, no digits.
fn junk_line_strategy() -> impl Strategy<Value = String> {
    "[a-z ]{0,20}"
}

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![event_line_strategy(), junk_line_strategy()],
        0..12,
    )
}

/// Normalized event fingerprint used to compare runs.
fn fingerprints(text: &str) -> Vec<(chrono::NaiveDate, String, String)> {
    let mut out: Vec<_> = parse(text, SEASON)
        .into_iter()
        .map(|e| (e.date, e.kind.to_string(), e.subject))
        .collect();
    out.sort();
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Repeated calls over the same text yield identical output.
    #[test]
    fn prop_parse_is_pure(lines in lines_strategy()) {
        let text = lines.join("\n");
        prop_assert_eq!(parse(&text, SEASON), parse(&text, SEASON));
    }

    /// Output is always sorted by date ascending.
    #[test]
    fn prop_output_sorted_by_date(lines in lines_strategy()) {
        let text = lines.join("\n");
        let events = parse(&text, SEASON);
        for pair in events.windows(2) {
            prop_assert!(pair[0].date <= pair[1].date);
        }
    }

    /// Reordering lines never changes any individual event's resolved
    /// date, kind, or subject - only their pre-sort position.
    #[test]
    fn prop_line_order_does_not_change_events(
        (original, shuffled) in lines_strategy()
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(
            fingerprints(&original.join("\n")),
            fingerprints(&shuffled.join("\n"))
        );
    }

    /// Interleaving junk lines leaves the parsed events untouched.
    #[test]
    fn prop_junk_lines_do_not_affect_others(
        events in prop::collection::vec(event_line_strategy(), 0..8),
        junk in prop::collection::vec(junk_line_strategy(), 0..8),
    ) {
        let clean = events.join("\n");

        let mut mixed: Vec<String> = Vec::new();
        for (i, line) in events.iter().enumerate() {
            if let Some(j) = junk.get(i) {
                mixed.push(j.clone());
            }
            mixed.push(line.clone());
        }
        mixed.extend(junk.iter().skip(events.len()).cloned());

        prop_assert_eq!(fingerprints(&clean), fingerprints(&mixed.join("\n")));
    }

    /// Every emitted event carries a marker from the fixed vocabulary and
    /// keeps its raw line verbatim from the input.
    #[test]
    fn prop_events_trace_back_to_input(lines in lines_strategy()) {
        let text = lines.join("\n");
        for event in parse(&text, SEASON) {
            prop_assert!(MARKERS.iter().any(|&(m, _)| m == event.marker));
            prop_assert!(lines.iter().any(|l| l == &event.raw));
        }
    }
}
