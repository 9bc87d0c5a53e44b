//! Owner registry - the immutability anchor for authorization
//!
//! The registry is established once at startup and never mutated
//! afterwards; every authorization check downstream reads from it.

use std::collections::HashSet;

use vaultgate_common::{AccountId, ConfigError, MIN_THRESHOLD};

/// Immutable owner set plus quorum threshold
///
/// Invariants, validated at construction and unchangeable afterwards:
/// the set is non-empty, contains no zero id and no duplicate, and
/// `1 <= threshold <= owners.len()`.
#[derive(Debug, Clone)]
pub struct OwnerRegistry {
    /// Owners in construction order
    owners: Vec<AccountId>,
    /// Membership index for O(1) lookups
    index: HashSet<AccountId>,
    /// Distinct approvals required before a proposal may execute
    threshold: u32,
}

impl OwnerRegistry {
    /// Validate the owner set and threshold and build the registry
    ///
    /// Either a fully valid registry is produced or none is; a failed
    /// construction has no partial effect.
    pub fn new(owners: Vec<AccountId>, threshold: u32) -> Result<Self, ConfigError> {
        if owners.is_empty() {
            return Err(ConfigError::EmptyOwnerSet);
        }

        if threshold < MIN_THRESHOLD || threshold as usize > owners.len() {
            return Err(ConfigError::ThresholdOutOfRange {
                threshold,
                owners: owners.len(),
            });
        }

        let mut index = HashSet::with_capacity(owners.len());
        for owner in &owners {
            if owner.is_zero() {
                return Err(ConfigError::NullOwner);
            }
            if !index.insert(*owner) {
                return Err(ConfigError::DuplicateOwner { owner: *owner });
            }
        }

        Ok(Self {
            owners,
            index,
            threshold,
        })
    }

    /// Whether the account is a registered owner
    #[inline]
    pub fn is_member(&self, account: &AccountId) -> bool {
        self.index.contains(account)
    }

    /// Distinct approvals required for execution
    #[inline]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Owners in construction order
    pub fn owners(&self) -> &[AccountId] {
        &self.owners
    }

    /// Number of registered owners
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Always false for a constructed registry; the empty set is rejected
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
