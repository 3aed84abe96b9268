//! Ledger error types for validation and lookup failures.

use thiserror::Error;

use crocette_shared::AppError;
use crocette_shared::types::{EntryId, MemberId, RuleId};

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Crocette quantity cannot be negative.
    #[error("Crocette quantity cannot be negative")]
    NegativeQuantity,

    /// Entry kind string is neither "debit" nor "credit".
    #[error("Unknown entry kind: {0}")]
    UnknownKind(String),

    /// Member name cannot be empty.
    #[error("Member name cannot be empty")]
    EmptyMemberName,

    // ========== Conflict Errors ==========
    /// A member with this name already exists.
    #[error("Member already exists: {0}")]
    DuplicateMember(String),

    // ========== Lookup Errors ==========
    /// Member not found.
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    /// Rule not found.
    #[error("Rule not found: {0}")]
    RuleNotFound(RuleId),

    /// Entry not found.
    #[error("Entry not found: {0}")]
    EntryNotFound(EntryId),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeQuantity => "NEGATIVE_QUANTITY",
            Self::UnknownKind(_) => "UNKNOWN_KIND",
            Self::EmptyMemberName => "EMPTY_MEMBER_NAME",
            Self::DuplicateMember(_) => "DUPLICATE_MEMBER",
            Self::MemberNotFound(_) => "MEMBER_NOT_FOUND",
            Self::RuleNotFound(_) => "RULE_NOT_FOUND",
            Self::EntryNotFound(_) => "ENTRY_NOT_FOUND",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation errors
            Self::NegativeQuantity | Self::UnknownKind(_) | Self::EmptyMemberName => 400,

            // 404 Not Found
            Self::MemberNotFound(_) | Self::RuleNotFound(_) | Self::EntryNotFound(_) => 404,

            // 409 Conflict
            Self::DuplicateMember(_) => 409,
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        let message = err.to_string();
        match err {
            LedgerError::NegativeQuantity
            | LedgerError::UnknownKind(_)
            | LedgerError::EmptyMemberName => Self::Validation(message),
            LedgerError::DuplicateMember(_) => Self::Conflict(message),
            LedgerError::MemberNotFound(_)
            | LedgerError::RuleNotFound(_)
            | LedgerError::EntryNotFound(_) => Self::NotFound(message),
        }
    }
}
