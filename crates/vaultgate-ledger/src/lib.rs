//! # VaultGate Ledger
//!
//! Multi-party authorization gate for value transfers. A fixed owner set
//! jointly approves proposed transfers; once a proposal collects the quorum
//! threshold of distinct approvals, any owner may execute it, exactly once.
//!
//! ## Components
//!
//! - **Registry**: immutable owner set and quorum threshold
//! - **Ledger**: append-only proposal sequence and the approval/execution
//!   state machine
//! - **Treasury**: external fund custody capability, invoked at most once
//!   per proposal
//! - **Events**: synchronous notifications at each committed mutation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ApprovalLedger                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐  │
//! │  │ OwnerRegistry│  │  Proposals   │  │     Treasury     │  │
//! │  │ (who / how   │──│ (append-only │──│ (external fund   │  │
//! │  │  many votes) │  │  sequence)   │  │  custody)        │  │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘  │
//! │                          │ GateEvent broadcast              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use rust_decimal_macros::dec;
//! use vaultgate_ledger::{AccountId, ApprovalLedger, InMemoryTreasury, OwnerRegistry};
//!
//! # async fn demo() -> vaultgate_ledger::Result<()> {
//! let (alice, _) = AccountId::generate();
//! let (bob, _) = AccountId::generate();
//! let (dest, _) = AccountId::generate();
//!
//! let registry = OwnerRegistry::new(vec![alice, bob], 2)?;
//! let treasury = InMemoryTreasury::with_balance(dec!(1000));
//! let gate = ApprovalLedger::new(Arc::new(registry), Arc::new(treasury));
//!
//! let index = gate.submit(alice, dest, dec!(100)).await?;
//! gate.approve(alice, index).await?;
//! gate.approve(bob, index).await?;
//! gate.execute(alice, index).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod ledger;
pub mod registry;
pub mod treasury;

pub use config::GateConfig;
pub use ledger::events::GateEvent;
pub use ledger::ApprovalLedger;
pub use registry::OwnerRegistry;
pub use treasury::{InMemoryTreasury, Treasury};

// Re-export the shared surface so embedders need only this crate
pub use vaultgate_common::{
    AccountId, Approval, ConfigError, GateError, Proposal, ProposalStatus, Result,
};
