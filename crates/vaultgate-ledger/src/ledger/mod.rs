//! Approval ledger - the proposal/approval/execution state machine
//!
//! Coordinates the authorization flow:
//! 1. An owner submits a transfer proposal, appended at the next index
//! 2. Owners individually approve it, one vote per owner per proposal
//! 3. At quorum, any owner may execute; the executed flag commits first
//! 4. The treasury capability is then invoked, at most once per proposal
//!
//! Every mutating operation serializes behind one write lock, so each runs
//! to completion with no interleaving and no partially visible state. The
//! lock stays held across the treasury call during execution.

pub mod events;

use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, instrument, warn};

use vaultgate_common::{AccountId, Approval, GateError, Proposal, ProposalStatus, Result};

use crate::registry::OwnerRegistry;
use crate::treasury::Treasury;
use events::GateEvent;

/// Buffered events per subscriber before a slow consumer starts lagging
const EVENT_CHANNEL_CAPACITY: usize = 128;

/// Append-only proposal ledger gated by an owner registry
///
/// Proposals are permanent records: appended at sequential indices starting
/// at 0, never reordered, never deleted. A proposal that never reaches
/// quorum simply stays pending forever.
pub struct ApprovalLedger {
    registry: Arc<OwnerRegistry>,
    treasury: Arc<dyn Treasury>,
    proposals: RwLock<Vec<Proposal>>,
    events: broadcast::Sender<GateEvent>,
}

impl std::fmt::Debug for ApprovalLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApprovalLedger")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl ApprovalLedger {
    /// Create a ledger over the given registry and treasury
    pub fn new(registry: Arc<OwnerRegistry>, treasury: Arc<dyn Treasury>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            registry,
            treasury,
            proposals: RwLock::new(Vec::new()),
            events,
        }
    }

    /// Subscribe to gate events
    ///
    /// Events arrive in mutation-commit order. A subscriber that falls more
    /// than the channel capacity behind observes a lag, not a ledger stall.
    pub fn subscribe(&self) -> broadcast::Receiver<GateEvent> {
        self.events.subscribe()
    }

    /// The owner registry this ledger authorizes against
    pub fn registry(&self) -> &OwnerRegistry {
        &self.registry
    }

    /// Submit a transfer proposal
    ///
    /// Appends a pending proposal at the next sequential index and returns
    /// that index. Fund availability and destination validity are not
    /// checked here; only the treasury decides those, at execution.
    #[instrument(skip(self))]
    pub async fn submit(
        &self,
        caller: AccountId,
        destination: AccountId,
        amount: Decimal,
    ) -> Result<u64> {
        self.require_member(&caller)?;
        if amount < Decimal::ZERO {
            return Err(GateError::InvalidAmount);
        }

        let mut proposals = self.proposals.write().await;
        let index = proposals.len() as u64;
        proposals.push(Proposal::new(index, caller, destination, amount));

        info!(
            index,
            proposer = %caller,
            destination = %destination,
            amount = %amount,
            "Proposal submitted"
        );
        self.emit(GateEvent::submitted(index, caller, destination, amount));

        Ok(index)
    }

    /// Approve a proposal
    ///
    /// Each owner's approval counts at most once per proposal; a repeat
    /// attempt fails with `DuplicateApproval` and changes nothing. Reaching
    /// quorum never triggers execution by itself - an explicit
    /// [`execute`](Self::execute) call is always required.
    #[instrument(skip(self))]
    pub async fn approve(&self, caller: AccountId, index: u64) -> Result<()> {
        let mut proposals = self.proposals.write().await;
        let proposal = proposals
            .get_mut(index as usize)
            .ok_or(GateError::NotFound { index })?;

        self.require_member(&caller)?;
        if proposal.executed {
            return Err(GateError::AlreadyExecuted { index });
        }
        if proposal.has_approval_from(&caller) {
            return Err(GateError::DuplicateApproval {
                index,
                owner: caller,
            });
        }

        proposal.push_approval(caller);

        debug!(
            index,
            approver = %caller,
            approvals = proposal.approval_count(),
            required = self.registry.threshold(),
            "Approval recorded"
        );
        self.emit(GateEvent::approved(index, caller));

        Ok(())
    }

    /// Execute a proposal that has reached quorum
    ///
    /// Any owner may execute, not only the proposer or an approver. The
    /// executed flag is committed *before* the treasury is invoked, so a
    /// reentrant or concurrent attempt can never release value twice. The
    /// flip side is deliberate and preserved: if the treasury refuses the
    /// transfer, the proposal is already terminal - it reports
    /// `TransferFailed` and can never be retried through this path. Moving
    /// the funds after such a refusal takes a fresh proposal.
    #[instrument(skip(self))]
    pub async fn execute(&self, caller: AccountId, index: u64) -> Result<()> {
        let mut proposals = self.proposals.write().await;
        let proposal = proposals
            .get_mut(index as usize)
            .ok_or(GateError::NotFound { index })?;

        self.require_member(&caller)?;
        if proposal.executed {
            return Err(GateError::AlreadyExecuted { index });
        }
        let approvals = proposal.approval_count();
        let threshold = self.registry.threshold();
        if approvals < threshold {
            return Err(GateError::InsufficientApprovals {
                index,
                approvals,
                threshold,
            });
        }

        // Terminal state commits first; only then is the treasury invoked.
        proposal.mark_executed();
        let destination = proposal.destination;
        let amount = proposal.amount;

        // The write guard stays held across the transfer, so no other
        // operation can observe or act on the proposal mid-execution.
        if !self.treasury.transfer(&destination, amount).await {
            warn!(
                index,
                destination = %destination,
                amount = %amount,
                "Treasury refused transfer; proposal stays executed"
            );
            return Err(GateError::TransferFailed { index });
        }

        info!(
            index,
            executor = %caller,
            destination = %destination,
            amount = %amount,
            "Proposal executed"
        );
        self.emit(GateEvent::executed(index, caller));

        Ok(())
    }

    /// Accept incoming value into custody
    ///
    /// Pass-through to the treasury; deposits never touch the approval
    /// state machine.
    pub async fn deposit(&self, amount: Decimal) {
        self.treasury.deposit(amount).await;
    }

    /// Number of proposals ever submitted
    pub async fn count(&self) -> u64 {
        self.proposals.read().await.len() as u64
    }

    /// Snapshot of a proposal record
    pub async fn proposal(&self, index: u64) -> Option<Proposal> {
        self.proposals.read().await.get(index as usize).cloned()
    }

    /// Approvals recorded on a proposal, in arrival order
    pub async fn approvals(&self, index: u64) -> Option<Vec<Approval>> {
        self.proposals
            .read()
            .await
            .get(index as usize)
            .map(|p| p.approvals.clone())
    }

    /// Whether the given owner has approved the proposal
    pub async fn has_approved(&self, index: u64, owner: &AccountId) -> bool {
        self.proposals
            .read()
            .await
            .get(index as usize)
            .map(|p| p.has_approval_from(owner))
            .unwrap_or(false)
    }

    /// Whether the proposal has been executed
    pub async fn is_executed(&self, index: u64) -> bool {
        self.proposals
            .read()
            .await
            .get(index as usize)
            .map(|p| p.executed)
            .unwrap_or(false)
    }

    /// Lifecycle state of a proposal
    pub async fn status(&self, index: u64) -> Option<ProposalStatus> {
        self.proposals
            .read()
            .await
            .get(index as usize)
            .map(|p| p.status(self.registry.threshold()))
    }

    /// Value currently held in custody, per the treasury
    pub async fn balance_held(&self) -> Decimal {
        self.treasury.balance().await
    }

    fn require_member(&self, caller: &AccountId) -> Result<()> {
        if !self.registry.is_member(caller) {
            return Err(GateError::Unauthorized { caller: *caller });
        }
        Ok(())
    }

    fn emit(&self, event: GateEvent) {
        // A send with no live subscribers is not a failure
        let _ = self.events.send(event);
    }
}
