//! Ledger entry domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crocette_shared::types::{EntryId, MemberId, RuleId, UserId};

/// Kind of ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Debit entry (crocette taken - increases what the member owes).
    Debit,
    /// Credit entry (crocette paid - decreases what the member owes).
    Credit,
}

impl EntryKind {
    /// Returns true if this is a debit entry.
    #[must_use]
    pub const fn is_debit(self) -> bool {
        matches!(self, Self::Debit)
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debit => write!(f, "debit"),
            Self::Credit => write!(f, "credit"),
        }
    }
}

impl std::str::FromStr for EntryKind {
    type Err = super::error::LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debit" => Ok(Self::Debit),
            "credit" => Ok(Self::Credit),
            _ => Err(super::error::LedgerError::UnknownKind(s.to_string())),
        }
    }
}

/// A single crocette movement against a member.
///
/// Entries are immutable once recorded, except for `deleted_at`, which is
/// set exactly once by a soft-delete and never cleared. Soft-deleted
/// entries are excluded from every balance computation but stay in storage
/// for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique identifier for this entry.
    pub id: EntryId,
    /// The member this entry is charged to or credited against.
    pub member_id: MemberId,
    /// The user account that recorded the entry.
    pub recorded_by: UserId,
    /// Whether this is a debit or credit.
    pub kind: EntryKind,
    /// Number of crocette units (never negative).
    pub crocette: u64,
    /// Optional catalog rule this entry was recorded under.
    pub rule_id: Option<RuleId>,
    /// Free-text note.
    pub note: String,
    /// When the entry was recorded (UTC).
    pub created_at: DateTime<Utc>,
    /// Soft-delete marker; `Some` means excluded from all aggregates.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl LedgerEntry {
    /// Returns true if this entry has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns the signed quantity (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_crocette(&self) -> i128 {
        let units = i128::from(self.crocette);
        match self.kind {
            EntryKind::Debit => units,
            EntryKind::Credit => -units,
        }
    }
}
