//! Team member domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crocette_shared::types::MemberId;

/// A team member tracked by the ledger.
///
/// Names are unique and non-empty. A member is only ever hard-deleted
/// together with all of its entries (cascade), never while leaving entries
/// behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier.
    pub id: MemberId,
    /// Display name, unique across the team.
    pub name: String,
    /// When the member was added.
    pub created_at: DateTime<Utc>,
}
