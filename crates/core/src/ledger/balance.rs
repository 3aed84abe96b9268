//! Crocette balance aggregation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crocette_shared::types::MemberId;

use super::entry::{EntryKind, LedgerEntry};

/// Aggregated crocette position, per member or global.
///
/// `owed` is always `taken - paid` clamped at zero: a member who overpays
/// never shows negative debt. Balances are derived on read and never
/// persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Total crocette taken (non-deleted debit entries).
    pub taken: u64,
    /// Total crocette paid (non-deleted credit entries).
    pub paid: u64,
    /// Outstanding crocette, clamped at zero.
    pub owed: u64,
}

impl Balance {
    /// Creates a balance from debit and credit totals.
    #[must_use]
    pub const fn new(taken: u64, paid: u64) -> Self {
        Self {
            taken,
            paid,
            owed: taken.saturating_sub(paid),
        }
    }

    /// Folds a non-deleted entry into this balance.
    ///
    /// Soft-deleted entries must be filtered out before this is called.
    pub fn apply(&mut self, entry: &LedgerEntry) {
        match entry.kind {
            EntryKind::Debit => self.taken = self.taken.saturating_add(entry.crocette),
            EntryKind::Credit => self.paid = self.paid.saturating_add(entry.crocette),
        }
        self.owed = self.taken.saturating_sub(self.paid);
    }

    /// Pointwise sum of two balances, with `owed` recomputed from the
    /// summed totals.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self::new(
            self.taken.saturating_add(other.taken),
            self.paid.saturating_add(other.paid),
        )
    }

    /// Returns true if no units were ever taken or paid.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.taken == 0 && self.paid == 0
    }
}

/// Per-member dashboard row: balance plus last activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    /// The member ID.
    pub id: MemberId,
    /// The member's display name.
    pub name: String,
    /// The member's current balance.
    pub balance: Balance,
    /// Timestamp of the newest non-deleted entry, if any.
    pub last_activity: Option<DateTime<Utc>>,
}
