//! Ledger input and filter types.

use serde::{Deserialize, Serialize};

use crocette_shared::types::{MemberId, RuleId, UserId};

use super::entry::{EntryKind, LedgerEntry};

/// Input for recording a new ledger entry.
///
/// The quantity arrives as a signed integer straight from the submitting
/// layer; the store rejects negative values rather than silently clamping
/// or flipping the kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEntry {
    /// The member the entry is recorded against.
    pub member_id: MemberId,
    /// The user account recording the entry.
    pub recorded_by: UserId,
    /// Debit or credit.
    pub kind: EntryKind,
    /// Crocette quantity; must be >= 0.
    pub crocette: i64,
    /// Optional catalog rule providing context.
    pub rule_id: Option<RuleId>,
    /// Free-text note.
    #[serde(default)]
    pub note: String,
}

/// Input for creating a catalog rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRule {
    /// Short rule title.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// Default crocette quantity.
    pub crocette: u64,
    /// Whether the rule starts active.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Filter for history queries. Empty filter matches every entry.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HistoryFilter {
    /// Restrict to one entry kind.
    pub kind: Option<EntryKind>,
    /// Restrict to one member.
    pub member: Option<MemberId>,
}

impl HistoryFilter {
    /// Restricts the filter to one entry kind.
    #[must_use]
    pub const fn kind(mut self, kind: EntryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restricts the filter to one member.
    #[must_use]
    pub const fn member(mut self, member: MemberId) -> Self {
        self.member = Some(member);
        self
    }

    /// Returns true if the entry passes this filter.
    #[must_use]
    pub fn matches(&self, entry: &LedgerEntry) -> bool {
        self.kind.is_none_or(|k| entry.kind == k)
            && self.member.is_none_or(|m| entry.member_id == m)
    }
}
