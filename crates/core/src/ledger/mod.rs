//! Penalty/credit ledger ("crocette").
//!
//! This module implements the core ledger functionality:
//! - Ledger entries (debits and credits) with soft-delete
//! - Team members and the regulation rule catalog
//! - Balance aggregation (per member and global)
//! - The concurrent in-memory entry store
//! - Error types for ledger operations

pub mod balance;
pub mod catalog;
pub mod entry;
pub mod error;
pub mod member;
pub mod rule;
pub mod store;
pub mod types;

#[cfg(test)]
mod store_props;

pub use balance::{Balance, MemberSummary};
pub use catalog::default_rules;
pub use entry::{EntryKind, LedgerEntry};
pub use error::LedgerError;
pub use member::Member;
pub use rule::Rule;
pub use store::LedgerStore;
pub use types::{HistoryFilter, NewEntry, NewRule};
