//! Core domain types

pub mod account;
pub mod proposal;

pub use account::AccountId;
pub use proposal::{Approval, Proposal, ProposalStatus};
