//! Concurrent in-memory entry store.
//!
//! The store is the only stateful component in the crate. All state lives
//! in sharded maps, so writers touching different members or entries do
//! not contend, and every mutation is atomic with respect to concurrent
//! balance reads: a reader observes whole entries, never a partial write.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry as MapEntry;
use std::collections::HashMap;
use tracing::{debug, info};

use crocette_shared::types::{EntryId, MemberId, RuleId, UserId};

use super::balance::{Balance, MemberSummary};
use super::entry::LedgerEntry;
use super::error::LedgerError;
use super::member::Member;
use super::rule::Rule;
use super::types::{HistoryFilter, NewEntry, NewRule};

/// Append-only crocette ledger with soft-delete.
///
/// Entries are immutable once recorded except for the soft-delete marker,
/// which is set exactly once under the entry's shard write lock.
#[derive(Debug, Default)]
pub struct LedgerStore {
    members: DashMap<MemberId, Member>,
    member_names: DashMap<String, MemberId>,
    rules: DashMap<RuleId, Rule>,
    entries: DashMap<EntryId, LedgerEntry>,
}

impl LedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Members ==========

    /// Adds a member with a unique, non-empty name.
    ///
    /// # Errors
    ///
    /// Returns `EmptyMemberName` for blank names and `DuplicateMember` when
    /// the name is already taken.
    pub fn add_member(&self, name: &str) -> Result<MemberId, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::EmptyMemberName);
        }

        // The name index entry doubles as the uniqueness lock: two racing
        // inserts for the same name serialize on its shard.
        match self.member_names.entry(name.to_string()) {
            MapEntry::Occupied(_) => Err(LedgerError::DuplicateMember(name.to_string())),
            MapEntry::Vacant(slot) => {
                let id = MemberId::new();
                self.members.insert(
                    id,
                    Member {
                        id,
                        name: name.to_string(),
                        created_at: Utc::now(),
                    },
                );
                slot.insert(id);
                info!(member = %id, name, "member added");
                Ok(id)
            }
        }
    }

    /// Removes a member together with all of its entries (cascade).
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if the member does not exist.
    pub fn remove_member(&self, id: MemberId) -> Result<(), LedgerError> {
        let (_, member) = self
            .members
            .remove(&id)
            .ok_or(LedgerError::MemberNotFound(id))?;
        self.member_names.remove(&member.name);
        self.entries.retain(|_, entry| entry.member_id != id);
        info!(member = %id, name = %member.name, "member removed with entries");
        Ok(())
    }

    /// Looks up a member by id.
    #[must_use]
    pub fn member(&self, id: MemberId) -> Option<Member> {
        self.members.get(&id).map(|m| m.value().clone())
    }

    /// Looks up a member by exact name.
    #[must_use]
    pub fn member_by_name(&self, name: &str) -> Option<Member> {
        let id = *self.member_names.get(name.trim())?;
        self.member(id)
    }

    /// Returns all members sorted by name.
    #[must_use]
    pub fn members(&self) -> Vec<Member> {
        let mut members: Vec<Member> = self.members.iter().map(|m| m.value().clone()).collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        members
    }

    // ========== Rules ==========

    /// Adds a catalog rule.
    pub fn add_rule(&self, rule: NewRule) -> RuleId {
        let id = RuleId::new();
        self.rules.insert(
            id,
            Rule {
                id,
                title: rule.title,
                description: rule.description,
                crocette: rule.crocette,
                active: rule.active,
            },
        );
        debug!(rule = %id, "rule added");
        id
    }

    /// Looks up a rule by id.
    #[must_use]
    pub fn rule(&self, id: RuleId) -> Option<Rule> {
        self.rules.get(&id).map(|r| r.value().clone())
    }

    /// Returns all rules sorted by title.
    #[must_use]
    pub fn rules(&self) -> Vec<Rule> {
        let mut rules: Vec<Rule> = self.rules.iter().map(|r| r.value().clone()).collect();
        rules.sort_by(|a, b| a.title.cmp(&b.title));
        rules
    }

    /// Returns active rules sorted by title.
    #[must_use]
    pub fn active_rules(&self) -> Vec<Rule> {
        let mut rules: Vec<Rule> = self
            .rules
            .iter()
            .filter(|r| r.active)
            .map(|r| r.value().clone())
            .collect();
        rules.sort_by(|a, b| a.title.cmp(&b.title));
        rules
    }

    /// Activates or deactivates a rule.
    ///
    /// # Errors
    ///
    /// Returns `RuleNotFound` if the rule does not exist.
    pub fn set_rule_active(&self, id: RuleId, active: bool) -> Result<(), LedgerError> {
        let mut rule = self
            .rules
            .get_mut(&id)
            .ok_or(LedgerError::RuleNotFound(id))?;
        rule.active = active;
        Ok(())
    }

    // ========== Entries ==========

    /// Records a new immutable entry, stamped with the current UTC time.
    ///
    /// # Errors
    ///
    /// Returns `NegativeQuantity` for negative quantities, `MemberNotFound`
    /// for unknown members, and `RuleNotFound` for unknown rule references.
    pub fn record(&self, input: NewEntry) -> Result<EntryId, LedgerError> {
        let crocette =
            u64::try_from(input.crocette).map_err(|_| LedgerError::NegativeQuantity)?;

        // Holding the member guard across the insert keeps a concurrent
        // cascade delete from interleaving between the existence check and
        // the entry landing in the map.
        let member = self
            .members
            .get(&input.member_id)
            .ok_or(LedgerError::MemberNotFound(input.member_id))?;

        if let Some(rule_id) = input.rule_id {
            if !self.rules.contains_key(&rule_id) {
                return Err(LedgerError::RuleNotFound(rule_id));
            }
        }

        let id = EntryId::new();
        self.entries.insert(
            id,
            LedgerEntry {
                id,
                member_id: member.id,
                recorded_by: input.recorded_by,
                kind: input.kind,
                crocette,
                rule_id: input.rule_id,
                note: input.note,
                created_at: Utc::now(),
                deleted_at: None,
            },
        );
        debug!(entry = %id, member = %member.id, kind = %input.kind, crocette, "entry recorded");
        Ok(id)
    }

    /// Soft-deletes an entry.
    ///
    /// Idempotent: deleting an already-deleted entry reports success and
    /// preserves the original deletion timestamp. The caller is expected to
    /// have passed `auth::authorize(role, Role::Admin)` first.
    ///
    /// # Errors
    ///
    /// Returns `EntryNotFound` if the entry does not exist.
    pub fn soft_delete(&self, id: EntryId, actor: UserId) -> Result<(), LedgerError> {
        let mut entry = self
            .entries
            .get_mut(&id)
            .ok_or(LedgerError::EntryNotFound(id))?;
        if entry.deleted_at.is_none() {
            entry.deleted_at = Some(Utc::now());
            info!(entry = %id, actor = %actor, "entry soft-deleted");
        } else {
            debug!(entry = %id, actor = %actor, "entry already soft-deleted");
        }
        Ok(())
    }

    /// Looks up an entry by id, soft-deleted ones included.
    #[must_use]
    pub fn entry(&self, id: EntryId) -> Option<LedgerEntry> {
        self.entries.get(&id).map(|e| e.value().clone())
    }

    // ========== Aggregation ==========

    /// Computes the balance for one member over non-deleted entries.
    ///
    /// Total: an unknown member (or one with no entries) yields the zero
    /// balance.
    #[must_use]
    pub fn balance_for(&self, member: MemberId) -> Balance {
        let mut balance = Balance::default();
        for entry in &self.entries {
            if entry.member_id == member && !entry.is_deleted() {
                balance.apply(entry.value());
            }
        }
        balance
    }

    /// Computes the global balance over all members' non-deleted entries.
    ///
    /// An empty store yields the zero balance.
    #[must_use]
    pub fn global_balance(&self) -> Balance {
        let mut balance = Balance::default();
        for entry in &self.entries {
            if !entry.is_deleted() {
                balance.apply(entry.value());
            }
        }
        balance
    }

    /// Returns non-deleted entries matching the filter, newest first.
    ///
    /// Ties on the creation timestamp break on the time-ordered entry id,
    /// so the ordering is deterministic.
    #[must_use]
    pub fn history(&self, filter: &HistoryFilter) -> Vec<LedgerEntry> {
        let mut entries: Vec<LedgerEntry> = self
            .entries
            .iter()
            .filter(|e| !e.is_deleted() && filter.matches(e.value()))
            .map(|e| e.value().clone())
            .collect();
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        entries
    }

    /// Returns the newest non-deleted entries recorded at or after `since`,
    /// capped at `limit`.
    #[must_use]
    pub fn recent(&self, since: DateTime<Utc>, limit: usize) -> Vec<LedgerEntry> {
        let mut entries: Vec<LedgerEntry> = self
            .entries
            .iter()
            .filter(|e| !e.is_deleted() && e.created_at >= since)
            .map(|e| e.value().clone())
            .collect();
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        entries.truncate(limit);
        entries
    }

    /// Returns the newest non-deleted entry, if any.
    #[must_use]
    pub fn latest(&self) -> Option<LedgerEntry> {
        self.entries
            .iter()
            .filter(|e| !e.is_deleted())
            .max_by(|a, b| {
                a.created_at
                    .cmp(&b.created_at)
                    .then_with(|| a.id.cmp(&b.id))
            })
            .map(|e| e.value().clone())
    }

    /// Returns one summary row per member, sorted by name.
    #[must_use]
    pub fn member_summaries(&self) -> Vec<MemberSummary> {
        let mut per_member: HashMap<MemberId, (Balance, Option<DateTime<Utc>>)> = HashMap::new();
        for entry in &self.entries {
            if entry.is_deleted() {
                continue;
            }
            let (balance, last) = per_member.entry(entry.member_id).or_default();
            balance.apply(entry.value());
            if last.is_none_or(|t| entry.created_at > t) {
                *last = Some(entry.created_at);
            }
        }

        self.members()
            .into_iter()
            .map(|member| {
                let (balance, last_activity) =
                    per_member.get(&member.id).copied().unwrap_or_default();
                MemberSummary {
                    id: member.id,
                    name: member.name,
                    balance,
                    last_activity,
                }
            })
            .collect()
    }
}
