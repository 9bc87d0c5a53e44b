//! Proposal - a recorded transfer intent and its approval set
//!
//! Proposals are identified by their position in the approval ledger,
//! assigned at submission and never reused. A proposal is a permanent
//! record: it is appended, approved, possibly executed, and never deleted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::account::AccountId;

/// A single distinct owner approval on a proposal
///
/// Once recorded, an approval is never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    /// Approving owner
    pub owner: AccountId,
    /// Approval timestamp (Unix milliseconds)
    pub approved_at: i64,
}

/// Derived proposal lifecycle state
///
/// The only path is forward: a proposal is pending, may reach quorum, and
/// may then be executed exactly once. Nothing leaves `Executed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    /// Below quorum, not executed
    Pending,
    /// Quorum reached, awaiting an explicit execute call
    Approved,
    /// Executed. Terminal state.
    Executed,
}

impl std::fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProposalStatus::Pending => write!(f, "pending"),
            ProposalStatus::Approved => write!(f, "approved"),
            ProposalStatus::Executed => write!(f, "executed"),
        }
    }
}

/// A recorded transfer intent awaiting or having received quorum approval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Position in the ledger sequence, assigned at submission
    pub index: u64,

    /// Owner who submitted the proposal
    pub proposer: AccountId,

    /// Transfer target; opaque to the gate
    pub destination: AccountId,

    /// Transfer amount; non-negative
    pub amount: Decimal,

    /// Whether execution has been committed. Monotonic: set once, never
    /// cleared, even when the treasury refuses the transfer.
    pub executed: bool,

    /// Distinct owner approvals, in arrival order
    pub approvals: Vec<Approval>,

    /// Submission timestamp (Unix milliseconds)
    pub created_at: i64,

    /// Execution timestamp, once executed (Unix milliseconds)
    pub executed_at: Option<i64>,
}

impl Proposal {
    /// Create a fresh pending proposal
    pub fn new(index: u64, proposer: AccountId, destination: AccountId, amount: Decimal) -> Self {
        Self {
            index,
            proposer,
            destination,
            amount,
            executed: false,
            approvals: Vec::new(),
            created_at: chrono::Utc::now().timestamp_millis(),
            executed_at: None,
        }
    }

    /// Number of distinct owners who have approved
    #[inline]
    pub fn approval_count(&self) -> u32 {
        self.approvals.len() as u32
    }

    /// Whether the given owner has already approved
    pub fn has_approval_from(&self, owner: &AccountId) -> bool {
        self.approvals.iter().any(|a| a.owner == *owner)
    }

    /// Append an approval for the given owner
    ///
    /// Callers enforce distinctness; the ledger rejects duplicates before
    /// this is reached.
    pub fn push_approval(&mut self, owner: AccountId) {
        self.approvals.push(Approval {
            owner,
            approved_at: chrono::Utc::now().timestamp_millis(),
        });
    }

    /// Commit the terminal executed state
    pub fn mark_executed(&mut self) {
        self.executed = true;
        self.executed_at = Some(chrono::Utc::now().timestamp_millis());
    }

    /// Lifecycle state relative to the given quorum threshold
    pub fn status(&self, threshold: u32) -> ProposalStatus {
        if self.executed {
            ProposalStatus::Executed
        } else if self.approval_count() >= threshold {
            ProposalStatus::Approved
        } else {
            ProposalStatus::Pending
        }
    }
}

impl std::fmt::Display for Proposal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Proposal(index={}, amount={}, destination={}, approvals={}, executed={})",
            self.index,
            self.amount,
            self.destination,
            self.approval_count(),
            self.executed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> Proposal {
        let (proposer, _) = AccountId::generate();
        let (destination, _) = AccountId::generate();
        Proposal::new(0, proposer, destination, dec!(100))
    }

    #[test]
    fn test_new_proposal_is_pending() {
        let proposal = sample();
        assert_eq!(proposal.approval_count(), 0);
        assert!(!proposal.executed);
        assert_eq!(proposal.status(2), ProposalStatus::Pending);
    }

    #[test]
    fn test_status_follows_quorum() {
        let mut proposal = sample();
        let (a, _) = AccountId::generate();
        let (b, _) = AccountId::generate();

        proposal.push_approval(a);
        assert_eq!(proposal.status(2), ProposalStatus::Pending);

        proposal.push_approval(b);
        assert_eq!(proposal.status(2), ProposalStatus::Approved);

        proposal.mark_executed();
        assert_eq!(proposal.status(2), ProposalStatus::Executed);
        assert!(proposal.executed_at.is_some());
    }

    #[test]
    fn test_tracks_distinct_approvers() {
        let mut proposal = sample();
        let (a, _) = AccountId::generate();

        assert!(!proposal.has_approval_from(&a));
        proposal.push_approval(a);
        assert!(proposal.has_approval_from(&a));
        assert_eq!(proposal.approval_count(), 1);
    }
}
