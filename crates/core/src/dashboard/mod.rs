//! Read-only overview assembly for the landing page.

pub mod types;

pub use types::Overview;

use chrono::{DateTime, Datelike, Utc};

use crate::calendar::{self, CalendarEvent};
use crate::ledger::LedgerStore;

/// Number of recent entries shown on the landing page.
const RECENT_LIMIT: usize = 50;

/// Number of upcoming social events shown on the landing page.
const UPCOMING_SOCIAL_LIMIT: usize = 5;

/// Assembles the landing-page overview from the ledger and the parsed
/// calendar events.
///
/// `events` must already be date-sorted (as produced by
/// `calendar::parse`). The recent panel covers the month containing
/// `now`.
#[must_use]
pub fn overview(store: &LedgerStore, events: &[CalendarEvent], now: DateTime<Utc>) -> Overview {
    let month_start = now
        .date_naive()
        .with_day(1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or(now, |dt| dt.and_utc());
    let today = now.date_naive();

    Overview {
        rows: store.member_summaries(),
        totals: store.global_balance(),
        recent: store.recent(month_start, RECENT_LIMIT),
        latest: store.latest(),
        upcoming_social: calendar::upcoming_social(events, today, UPCOMING_SOCIAL_LIMIT)
            .into_iter()
            .cloned()
            .collect(),
        next_match: calendar::next_match(events, today).cloned(),
    }
}
