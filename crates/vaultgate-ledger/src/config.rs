//! Gate configuration
//!
//! The owner list and threshold are supplied exactly once, at startup;
//! there is no runtime reconfiguration path. `load` reads the environment,
//! `build` validates and assembles the gate.

use std::sync::Arc;

use anyhow::Context;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use vaultgate_common::{AccountId, ConfigError, MIN_THRESHOLD};

use crate::ledger::ApprovalLedger;
use crate::registry::OwnerRegistry;
use crate::treasury::InMemoryTreasury;

/// Deployment-time gate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Hex-encoded owner account ids
    pub owners: Vec<String>,
    /// Distinct approvals required before a proposal may execute
    pub threshold: u32,
    /// Value seeded into custody at startup
    pub initial_balance: Decimal,
}

impl Default for GateConfig {
    fn default() -> Self {
        // There is no sensible default owner set; building a default
        // config fails validation until owners are supplied.
        Self {
            owners: Vec::new(),
            threshold: MIN_THRESHOLD,
            initial_balance: Decimal::ZERO,
        }
    }
}

impl GateConfig {
    /// Load configuration from environment and .env file
    ///
    /// Recognized variables: `VAULTGATE_OWNERS` (comma-separated hex ids),
    /// `VAULTGATE_THRESHOLD`, `VAULTGATE_INITIAL_BALANCE`.
    pub fn load() -> anyhow::Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();

        if let Ok(owners) = std::env::var("VAULTGATE_OWNERS") {
            cfg.owners = owners
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Ok(threshold) = std::env::var("VAULTGATE_THRESHOLD") {
            cfg.threshold = threshold
                .parse()
                .context("VAULTGATE_THRESHOLD must be an integer")?;
        }
        if let Ok(balance) = std::env::var("VAULTGATE_INITIAL_BALANCE") {
            cfg.initial_balance = balance
                .parse()
                .context("VAULTGATE_INITIAL_BALANCE must be a decimal")?;
        }

        Ok(cfg)
    }

    /// Parse the configured owner list
    pub fn owner_ids(&self) -> Result<Vec<AccountId>, ConfigError> {
        self.owners.iter().map(|s| s.parse()).collect()
    }

    /// Validate the configuration and assemble the gate
    ///
    /// Either a fully valid gate is produced or none is.
    pub fn build(&self) -> vaultgate_common::Result<ApprovalLedger> {
        let owners = self.owner_ids()?;
        let registry = OwnerRegistry::new(owners, self.threshold)?;
        let treasury = InMemoryTreasury::with_balance(self.initial_balance);

        Ok(ApprovalLedger::new(Arc::new(registry), Arc::new(treasury)))
    }
}
