//! The standing bagherone score.
//!
//! A single two-sided score row (giovani vs vecchi), updated in place by
//! admins. Negative inputs clamp to zero rather than erroring, matching
//! the forgiving admin form this feeds.

use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// The bagherone score at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BagheroneScore {
    /// Points for the giovani side.
    pub giovani: u64,
    /// Points for the vecchi side.
    pub vecchi: u64,
    /// When the score was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Holder of the single score row.
#[derive(Debug)]
pub struct Scoreboard {
    score: RwLock<BagheroneScore>,
}

impl Scoreboard {
    /// Creates a scoreboard starting at zero for both sides.
    #[must_use]
    pub fn new() -> Self {
        Self {
            score: RwLock::new(BagheroneScore {
                giovani: 0,
                vecchi: 0,
                updated_at: Utc::now(),
            }),
        }
    }

    /// Returns the current score.
    #[must_use]
    pub fn get(&self) -> BagheroneScore {
        *self.score.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces both sides, clamping negative inputs to zero, and stamps
    /// the update time. The caller is expected to have passed
    /// `auth::authorize(role, Role::Admin)` first.
    pub fn set(&self, giovani: i64, vecchi: i64) -> BagheroneScore {
        let mut score = self.score.write().unwrap_or_else(PoisonError::into_inner);
        score.giovani = u64::try_from(giovani.max(0)).unwrap_or_default();
        score.vecchi = u64::try_from(vecchi.max(0)).unwrap_or_default();
        score.updated_at = Utc::now();
        debug!(giovani = score.giovani, vecchi = score.vecchi, "score updated");
        *score
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}
