//! # Loan Keeper
//!
//! Keeper adalah store-access facade untuk loan module: semua read/write
//! dari handler dan genesis lewat sini, tidak pernah langsung ke backend.
//!
//! ```text
//! handler ──► Keeper ──► Arc<dyn LoanStore> ──► LoanDb | MemStore
//! ```
//!
//! Keeper sengaja tipis: tidak ada caching, tidak ada locking sendiri.
//! Sinkronisasi adalah tanggung jawab backend (kontrak `LoanStore`).

use lendnet_common::{Loan, LoanStore, Params, StoreError};
use std::sync::Arc;
use tracing::debug;

/// Store-access facade for the loan module.
#[derive(Clone)]
pub struct Keeper {
    store: Arc<dyn LoanStore>,
}

impl Keeper {
    pub fn new(store: Arc<dyn LoanStore>) -> Self {
        Self { store }
    }

    // ════════════════════════════════════════════════════════════════════════
    // LOAN RECORDS
    // ════════════════════════════════════════════════════════════════════════

    /// Lookup by id. `None` when the id was never stored (not an error).
    pub fn get_loan(&self, id: u64) -> Result<Option<Loan>, StoreError> {
        self.store.get_loan(id)
    }

    /// Insert or overwrite a loan keyed by `loan.id`.
    pub fn set_loan(&self, loan: &Loan) -> Result<(), StoreError> {
        self.store.put_loan(loan)
    }

    /// Remove a loan by id. Returns whether a record existed.
    pub fn remove_loan(&self, id: u64) -> Result<bool, StoreError> {
        self.store.delete_loan(id)
    }

    /// All loans in ascending id order.
    pub fn all_loans(&self) -> Result<Vec<Loan>, StoreError> {
        self.store.all_loans()
    }

    /// Append a new loan, assigning `id = loan_count` and bumping the counter.
    /// Returns the assigned id.
    pub fn append_loan(
        &self,
        borrower: impl Into<String>,
        amount: u128,
        collateral: u128,
        deadline: u64,
    ) -> Result<u64, StoreError> {
        let id = self.store.get_loan_count()?;
        let loan = Loan {
            id,
            borrower: borrower.into(),
            amount,
            collateral,
            deadline,
        };
        self.store.put_loan(&loan)?;
        self.store.put_loan_count(id + 1)?;
        debug!("keeper: appended loan {}", id);
        Ok(id)
    }

    // ════════════════════════════════════════════════════════════════════════
    // COUNTER / PARAMS / GENESIS MARKER
    // ════════════════════════════════════════════════════════════════════════

    /// Loan counter: the next id `append_loan` will assign.
    pub fn loan_count(&self) -> Result<u64, StoreError> {
        self.store.get_loan_count()
    }

    pub fn set_loan_count(&self, count: u64) -> Result<(), StoreError> {
        self.store.put_loan_count(count)
    }

    /// Module params; default when never written.
    pub fn params(&self) -> Result<Params, StoreError> {
        Ok(self.store.get_params()?.unwrap_or_default())
    }

    pub fn set_params(&self, params: &Params) -> Result<(), StoreError> {
        self.store.put_params(params)
    }

    /// True once genesis has been installed on this backend.
    pub fn has_genesis(&self) -> Result<bool, StoreError> {
        self.store.has_genesis()
    }

    pub fn mark_genesis(&self) -> Result<(), StoreError> {
        self.store.mark_genesis()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// TESTS
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use lendnet_common::MemStore;

    fn keeper() -> Keeper {
        Keeper::new(Arc::new(MemStore::new()))
    }

    #[test]
    fn append_assigns_sequential_ids_from_zero() {
        let k = keeper();
        let a = k.append_loan("lend1alice", 1_000, 2_000, 1_800_000_000).expect("append");
        let b = k.append_loan("lend1bob", 5_000, 9_000, 1_900_000_000).expect("append");
        let c = k.append_loan("lend1carol", 250, 500, 2_000_000_000).expect("append");
        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(k.loan_count().expect("count"), 3);
    }

    #[test]
    fn appended_loan_is_readable_by_assigned_id() {
        let k = keeper();
        let id = k.append_loan("lend1alice", 1_000, 2_000, 1_800_000_000).expect("append");
        let loan = k.get_loan(id).expect("get").expect("present");
        assert_eq!(loan.borrower, "lend1alice");
        assert_eq!(loan.amount, 1_000);
    }

    #[test]
    fn params_default_until_written() {
        let k = keeper();
        assert_eq!(k.params().expect("params"), Params::default());
    }

    #[test]
    fn remove_loan_reports_existence() {
        let k = keeper();
        let id = k.append_loan("lend1alice", 1, 2, 3).expect("append");
        assert!(k.remove_loan(id).expect("remove"));
        assert!(!k.remove_loan(id).expect("remove again"));
    }
}
