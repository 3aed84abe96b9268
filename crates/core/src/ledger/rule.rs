//! Regulation rule catalog types.

use serde::{Deserialize, Serialize};

use crocette_shared::types::RuleId;

/// A catalog entry describing a standard infraction and its default penalty.
///
/// Rules are purely referential metadata attached to entries for context;
/// changing a rule never mutates already-recorded entry amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique identifier.
    pub id: RuleId,
    /// Short rule title shown in the recording form.
    pub title: String,
    /// Longer description of when the rule applies.
    pub description: String,
    /// Default crocette quantity for this infraction.
    pub crocette: u64,
    /// Inactive rules are hidden from the recording form but kept for
    /// entries that reference them.
    pub active: bool,
}
