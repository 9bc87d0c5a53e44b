//! # VaultGate Common
//!
//! Shared types and errors for the VaultGate authorization gate.
//!
//! ## Core Types
//!
//! - [`AccountId`]: opaque 32-byte principal identity for owners,
//!   transfer destinations, and executors
//! - [`Proposal`]: a recorded transfer intent with its approval set
//! - [`Approval`]: a single distinct owner approval on a proposal
//! - [`ProposalStatus`]: derived lifecycle view (pending → approved → executed)
//!
//! ## Errors
//!
//! - [`GateError`]: unified error for every gate operation
//! - [`ConfigError`]: construction-time configuration failures

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ConfigError, GateError, Result};
pub use types::{
    account::AccountId,
    proposal::{Approval, Proposal, ProposalStatus},
};

/// VaultGate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest quorum threshold a registry will accept
pub const MIN_THRESHOLD: u32 = 1;
