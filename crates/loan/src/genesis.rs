//! # Genesis Import/Export
//!
//! `init_genesis` installs a genesis state into the keeper's store dan
//! menandai genesis marker; `export_genesis` membaca store kembali ke
//! `GenesisState`. Export langsung setelah init harus sama dengan input.

use crate::context::TxContext;
use crate::keeper::Keeper;
use lendnet_common::{Loan, Params, StoreError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::info;

// ════════════════════════════════════════════════════════════════════════════
// GENESIS STATE
// ════════════════════════════════════════════════════════════════════════════

/// Initial persisted state of the module at chain start.
///
/// Dipakai dua arah: bootstrap saat chain start dan export untuk
/// snapshot/migration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    /// Module parameters
    pub params: Params,
    /// Loan records to install, ascending by id on export
    pub loans: Vec<Loan>,
    /// Counter: id berikutnya yang akan di-assign oleh append
    pub loan_count: u64,
}

/// Genesis validation error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenesisError {
    /// Id muncul lebih dari sekali di loan list
    #[error("duplicated id {0} for loan")]
    DuplicateLoanId(u64),

    /// Id harus lebih kecil dari loan_count
    #[error("loan id {id} should be lower than the loan count {count}")]
    IdAboveCount { id: u64, count: u64 },
}

impl GenesisState {
    /// Check id uniqueness and counter consistency.
    ///
    /// Invariant: setiap id unik dan `id < loan_count` (append assigns
    /// `id = loan_count` lalu bump, jadi counter selalu di atas semua id).
    pub fn validate(&self) -> Result<(), GenesisError> {
        let mut seen = HashSet::new();
        for loan in &self.loans {
            if !seen.insert(loan.id) {
                return Err(GenesisError::DuplicateLoanId(loan.id));
            }
            if loan.id >= self.loan_count {
                return Err(GenesisError::IdAboveCount {
                    id: loan.id,
                    count: self.loan_count,
                });
            }
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// INSTALL / EXPORT
// ════════════════════════════════════════════════════════════════════════════

/// Install a genesis state into the keeper's store.
///
/// Menulis semua loan, counter, dan params, lalu set genesis marker.
pub fn init_genesis(
    _ctx: &TxContext,
    keeper: &Keeper,
    state: &GenesisState,
) -> Result<(), StoreError> {
    for loan in &state.loans {
        keeper.set_loan(loan)?;
    }
    keeper.set_loan_count(state.loan_count)?;
    keeper.set_params(&state.params)?;
    keeper.mark_genesis()?;
    info!(
        "loan genesis installed: {} loans, count {}",
        state.loans.len(),
        state.loan_count
    );
    Ok(())
}

/// Read the store back into a `GenesisState`.
///
/// Params fall back to `Params::default()` when never written, mirroring
/// the install path of a default genesis.
pub fn export_genesis(_ctx: &TxContext, keeper: &Keeper) -> Result<GenesisState, StoreError> {
    Ok(GenesisState {
        params: keeper.params()?,
        loans: keeper.all_loans()?,
        loan_count: keeper.loan_count()?,
    })
}

// ════════════════════════════════════════════════════════════════════════════
// TESTS
// ════════════════════════════════════════════════════════════════════════════
