//! Gate event stream
//!
//! Three observable notifications, one per state mutation. Each is emitted
//! synchronously after the corresponding mutation commits, in mutation
//! order; transporting them further (bus, store, webhook) is up to the
//! embedding application.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use vaultgate_common::AccountId;

/// Events emitted by the approval ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum GateEvent {
    /// A proposal was appended to the ledger
    Submitted {
        index: u64,
        proposer: AccountId,
        destination: AccountId,
        amount: Decimal,
        timestamp: i64,
    },
    /// An owner approved a proposal
    Approved {
        index: u64,
        approver: AccountId,
        timestamp: i64,
    },
    /// A proposal was executed and the treasury released the transfer
    Executed {
        index: u64,
        executor: AccountId,
        timestamp: i64,
    },
}

impl GateEvent {
    /// Build a `Submitted` event stamped with the current time
    pub fn submitted(
        index: u64,
        proposer: AccountId,
        destination: AccountId,
        amount: Decimal,
    ) -> Self {
        Self::Submitted {
            index,
            proposer,
            destination,
            amount,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Build an `Approved` event stamped with the current time
    pub fn approved(index: u64, approver: AccountId) -> Self {
        Self::Approved {
            index,
            approver,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Build an `Executed` event stamped with the current time
    pub fn executed(index: u64, executor: AccountId) -> Self {
        Self::Executed {
            index,
            executor,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Stable event name, used for logging and routing
    pub fn event_type(&self) -> &'static str {
        match self {
            GateEvent::Submitted { .. } => "Submitted",
            GateEvent::Approved { .. } => "Approved",
            GateEvent::Executed { .. } => "Executed",
        }
    }

    /// Ledger index of the proposal the event concerns
    pub fn index(&self) -> u64 {
        match self {
            GateEvent::Submitted { index, .. }
            | GateEvent::Approved { index, .. }
            | GateEvent::Executed { index, .. } => *index,
        }
    }
}
