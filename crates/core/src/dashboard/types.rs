//! Dashboard data types.

use serde::Serialize;

use crate::calendar::CalendarEvent;
use crate::ledger::{Balance, LedgerEntry, MemberSummary};

/// Everything the landing page shows, assembled in one read.
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    /// One row per member, sorted by name.
    pub rows: Vec<MemberSummary>,
    /// Global crocette totals.
    pub totals: Balance,
    /// Entries recorded this month, newest first, capped.
    pub recent: Vec<LedgerEntry>,
    /// The newest entry overall, if any.
    pub latest: Option<LedgerEntry>,
    /// The next few social events.
    pub upcoming_social: Vec<CalendarEvent>,
    /// The next home or away match.
    pub next_match: Option<CalendarEvent>,
}
