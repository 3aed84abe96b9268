//! Role ordering and the authorization policy.
//!
//! This module provides:
//! - The `viewer < editor < admin` role hierarchy
//! - Pure permission checks used by the request-handling layer before it
//!   invokes privileged ledger or calendar-write operations
//!
//! Identity resolution (credential -> role) is NOT done here; callers pass
//! already-resolved roles as plain arguments.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crocette_shared::AppError;

/// User roles, ordered from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Read-only access.
    Viewer,
    /// Can record new ledger entries.
    Editor,
    /// Full access: soft-deletes, member/rule administration, calendar writes.
    Admin,
}

impl Role {
    /// Returns the numeric rank of this role in the total order.
    ///
    /// Higher rank means more privilege. Comparisons always go through this
    /// function rather than list positions or string matching.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Viewer => 0,
            Self::Editor => 1,
            Self::Admin => 2,
        }
    }

    /// Returns true if this role may soft-delete ledger entries.
    #[must_use]
    pub const fn can_delete_entries(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Returns true if this role may edit the calendar text.
    #[must_use]
    pub const fn can_edit_calendar(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Viewer => write!(f, "viewer"),
            Self::Editor => write!(f, "editor"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "viewer" => Ok(Self::Viewer),
            "editor" => Ok(Self::Editor),
            "admin" => Ok(Self::Admin),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized role string.
#[derive(Debug, Clone, Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

/// Errors raised by the authorization policy.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The caller's role ranks strictly below the required role.
    #[error("Permission denied: role '{role}' is below required '{required}'")]
    PermissionDenied {
        /// The caller's role.
        role: Role,
        /// The role the operation requires.
        required: Role,
    },
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        Self::Forbidden(err.to_string())
    }
}

/// Returns true if `caller` may invoke an operation requiring `required`.
#[must_use]
pub const fn permits(caller: Role, required: Role) -> bool {
    caller.rank() >= required.rank()
}

/// Checks that `caller` may invoke an operation requiring `required`.
///
/// # Errors
///
/// Returns `AuthError::PermissionDenied` when the caller's rank is strictly
/// lower than required.
pub const fn authorize(caller: Role, required: Role) -> Result<(), AuthError> {
    if permits(caller, required) {
        Ok(())
    } else {
        Err(AuthError::PermissionDenied {
            role: caller,
            required,
        })
    }
}
