//! Property tests for ledger aggregation invariants.

use proptest::prelude::*;

use crocette_shared::types::UserId;

use super::balance::Balance;
use super::entry::EntryKind;
use super::store::LedgerStore;
use super::types::{HistoryFilter, NewEntry};

const MEMBER_NAMES: [&str; 3] = ["Cri", "Dani", "Mirco"];

/// One recorded movement: (member index, is_debit, quantity).
fn op_strategy() -> impl Strategy<Value = (usize, bool, i64)> {
    (0..MEMBER_NAMES.len(), any::<bool>(), 0..500i64)
}

fn ops_strategy(max_len: usize) -> impl Strategy<Value = Vec<(usize, bool, i64)>> {
    prop::collection::vec(op_strategy(), 0..=max_len)
}

fn build_store(ops: &[(usize, bool, i64)]) -> (LedgerStore, Vec<crocette_shared::types::MemberId>) {
    let store = LedgerStore::new();
    let members: Vec<_> = MEMBER_NAMES
        .iter()
        .map(|name| store.add_member(name).unwrap())
        .collect();
    let author = UserId::new();

    for &(member_idx, is_debit, quantity) in ops {
        store
            .record(NewEntry {
                member_id: members[member_idx],
                recorded_by: author,
                kind: if is_debit {
                    EntryKind::Debit
                } else {
                    EntryKind::Credit
                },
                crocette: quantity,
                rule_id: None,
                note: String::new(),
            })
            .unwrap();
    }
    (store, members)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any record sequence without deletes, `owed` is `taken - paid`
    /// when non-negative and zero otherwise.
    #[test]
    fn prop_owed_is_clamped_difference(ops in ops_strategy(30)) {
        let (store, members) = build_store(&ops);

        for member in members {
            let balance = store.balance_for(member);
            if balance.taken >= balance.paid {
                prop_assert_eq!(balance.owed, balance.taken - balance.paid);
            } else {
                prop_assert_eq!(balance.owed, 0);
            }
        }
    }

    /// The global balance equals the pointwise sum of per-member balances.
    #[test]
    fn prop_global_is_pointwise_sum(ops in ops_strategy(30)) {
        let (store, members) = build_store(&ops);

        let summed = members
            .iter()
            .fold(Balance::default(), |acc, &m| acc.merge(store.balance_for(m)));
        prop_assert_eq!(store.global_balance(), summed);
    }

    /// Soft-deleting an entry removes exactly its quantity from the
    /// relevant aggregate, and deleting twice changes nothing further.
    #[test]
    fn prop_soft_delete_removes_exactly_once(
        ops in ops_strategy(20),
        victim_debit in any::<bool>(),
        victim_quantity in 0..500i64,
    ) {
        let (store, members) = build_store(&ops);
        let actor = UserId::new();

        let victim = store
            .record(NewEntry {
                member_id: members[0],
                recorded_by: actor,
                kind: if victim_debit { EntryKind::Debit } else { EntryKind::Credit },
                crocette: victim_quantity,
                rule_id: None,
                note: String::new(),
            })
            .unwrap();

        let before = store.balance_for(members[0]);
        store.soft_delete(victim, actor).unwrap();
        let after = store.balance_for(members[0]);

        let removed = u64::try_from(victim_quantity).unwrap();
        if victim_debit {
            prop_assert_eq!(after.taken, before.taken - removed);
            prop_assert_eq!(after.paid, before.paid);
        } else {
            prop_assert_eq!(after.paid, before.paid - removed);
            prop_assert_eq!(after.taken, before.taken);
        }

        let marker = store.entry(victim).unwrap().deleted_at;
        store.soft_delete(victim, actor).unwrap();
        prop_assert_eq!(store.balance_for(members[0]), after);
        prop_assert_eq!(store.entry(victim).unwrap().deleted_at, marker);
    }

    /// History never exposes soft-deleted entries and is sorted newest
    /// first.
    #[test]
    fn prop_history_excludes_deleted_and_is_sorted(ops in ops_strategy(20)) {
        let (store, members) = build_store(&ops);
        let actor = UserId::new();

        // Delete every third entry.
        let all = store.history(&HistoryFilter::default());
        for entry in all.iter().step_by(3) {
            store.soft_delete(entry.id, actor).unwrap();
        }

        let history = store.history(&HistoryFilter::default());
        prop_assert!(history.iter().all(|e| !e.is_deleted()));
        for pair in history.windows(2) {
            prop_assert!(pair[0].created_at >= pair[1].created_at);
        }

        // The surviving aggregate matches the surviving history rows.
        let rebuilt = history
            .iter()
            .filter(|e| e.member_id == members[0])
            .fold(Balance::default(), |mut acc, e| { acc.apply(e); acc });
        prop_assert_eq!(store.balance_for(members[0]), rebuilt);
    }
}
