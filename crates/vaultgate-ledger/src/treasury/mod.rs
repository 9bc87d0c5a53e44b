//! Fund custody capability
//!
//! The gate decides *when* value may move; a [`Treasury`] decides *how*.
//! The ledger invokes `transfer` at most once per proposal, exactly when an
//! execute call passes every precondition. Implementations must report
//! refusal as `false` rather than faulting, so the ledger can surface it as
//! `TransferFailed`.

use async_trait::async_trait;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use vaultgate_common::AccountId;

/// External fund custody contract consumed by the approval ledger
#[async_trait]
pub trait Treasury: Send + Sync {
    /// Move value to the destination, reporting success
    ///
    /// Returns `false` on refusal; must not panic or otherwise fault.
    async fn transfer(&self, destination: &AccountId, amount: Decimal) -> bool;

    /// Accept incoming value into custody, from any source
    async fn deposit(&self, amount: Decimal);

    /// Value currently held in custody
    async fn balance(&self) -> Decimal;
}

/// In-process treasury backed by a single balance
///
/// Debits on transfer and refuses when the balance is insufficient.
/// Suitable for tests and single-process deployments; production embeddings
/// supply their own [`Treasury`] over a real settlement system.
pub struct InMemoryTreasury {
    held: RwLock<Decimal>,
}

impl InMemoryTreasury {
    /// Create an empty treasury
    pub fn new() -> Self {
        Self {
            held: RwLock::new(Decimal::ZERO),
        }
    }

    /// Create a treasury seeded with an initial balance
    pub fn with_balance(initial: Decimal) -> Self {
        Self {
            held: RwLock::new(initial),
        }
    }
}

impl Default for InMemoryTreasury {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Treasury for InMemoryTreasury {
    async fn transfer(&self, destination: &AccountId, amount: Decimal) -> bool {
        let mut held = self.held.write();

        if amount < Decimal::ZERO || *held < amount {
            warn!(
                destination = %destination,
                amount = %amount,
                held = %*held,
                "Refusing transfer"
            );
            return false;
        }

        *held -= amount;
        debug!(destination = %destination, amount = %amount, held = %*held, "Transfer released");
        true
    }

    async fn deposit(&self, amount: Decimal) {
        if amount <= Decimal::ZERO {
            debug!(amount = %amount, "Ignoring non-positive deposit");
            return;
        }

        let mut held = self.held.write();
        *held += amount;
        debug!(amount = %amount, held = %*held, "Deposit accepted");
    }

    async fn balance(&self) -> Decimal {
        *self.held.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_deposit_and_balance() {
        let treasury = InMemoryTreasury::new();
        assert_eq!(treasury.balance().await, Decimal::ZERO);

        treasury.deposit(dec!(250)).await;
        treasury.deposit(dec!(50)).await;
        assert_eq!(treasury.balance().await, dec!(300));
    }

    #[tokio::test]
    async fn test_transfer_debits_once() {
        let treasury = InMemoryTreasury::with_balance(dec!(100));
        let (dest, _) = AccountId::generate();

        assert!(treasury.transfer(&dest, dec!(60)).await);
        assert_eq!(treasury.balance().await, dec!(40));
    }

    #[tokio::test]
    async fn test_refuses_insufficient_balance() {
        let treasury = InMemoryTreasury::with_balance(dec!(10));
        let (dest, _) = AccountId::generate();

        assert!(!treasury.transfer(&dest, dec!(11)).await);
        // A refused transfer moves nothing
        assert_eq!(treasury.balance().await, dec!(10));
    }

    #[tokio::test]
    async fn test_ignores_non_positive_deposit() {
        let treasury = InMemoryTreasury::with_balance(dec!(5));
        treasury.deposit(dec!(-1)).await;
        treasury.deposit(Decimal::ZERO).await;
        assert_eq!(treasury.balance().await, dec!(5));
    }
}
