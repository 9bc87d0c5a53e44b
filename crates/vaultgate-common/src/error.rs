//! Error types for the VaultGate authorization gate
//!
//! Provides a unified error type for gate operations plus granular
//! configuration errors

use crate::types::account::AccountId;
use thiserror::Error;

/// Result type alias using GateError
pub type Result<T> = std::result::Result<T, GateError>;

/// Unified error type for gate operations
///
/// Every operation reports the specific failure it detected; nothing is
/// swallowed. All variants abort the triggering operation with no partial
/// mutation, except [`GateError::TransferFailed`] which is raised after the
/// executed flag has been committed (see `ApprovalLedger::execute`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GateError {
    // Construction errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    // Authorization errors
    #[error("Account {caller} is not a registered owner")]
    Unauthorized { caller: AccountId },

    // Proposal lookup errors
    #[error("Proposal {index} does not exist")]
    NotFound { index: u64 },

    // State machine errors
    #[error("Proposal {index} has already been executed")]
    AlreadyExecuted { index: u64 },

    #[error("Owner {owner} has already approved proposal {index}")]
    DuplicateApproval { index: u64, owner: AccountId },

    #[error("Proposal {index} has {approvals} of {threshold} required approvals")]
    InsufficientApprovals {
        index: u64,
        approvals: u32,
        threshold: u32,
    },

    // Treasury errors
    #[error("Transfer for proposal {index} was refused by the treasury")]
    TransferFailed { index: u64 },

    // Input validation
    #[error("Amount must not be negative")]
    InvalidAmount,
}

/// Construction-time configuration errors
///
/// Raised while validating the owner list and threshold. A failed
/// construction produces no registry at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Owner list must not be empty")]
    EmptyOwnerSet,

    #[error("Threshold {threshold} is out of range for {owners} owners")]
    ThresholdOutOfRange { threshold: u32, owners: usize },

    #[error("The zero account is not a valid owner")]
    NullOwner,

    #[error("Owner {owner} appears more than once")]
    DuplicateOwner { owner: AccountId },

    #[error("Invalid owner id: {value}")]
    InvalidOwnerId { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GateError::InsufficientApprovals {
            index: 3,
            approvals: 1,
            threshold: 2,
        };
        assert!(err.to_string().contains("1 of 2"));
    }

    #[test]
    fn test_config_error_wraps_into_gate_error() {
        let err: GateError = ConfigError::EmptyOwnerSet.into();
        assert!(matches!(err, GateError::Configuration(_)));
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_unauthorized_names_caller() {
        let caller = AccountId::from_bytes([7u8; 32]);
        let err = GateError::Unauthorized { caller };
        assert!(err.to_string().contains(&caller.to_string()));
    }
}
