//! In-Memory Store Backend for Testing
//!
//! This module provides an in-memory `LoanStore` implementation for unit
//! and integration testing. MemStore keeps everything in a `BTreeMap`
//! behind an `RwLock` and performs no disk or network I/O.
//!
//! # Features
//!
//! - Deterministic behavior for reproducible tests
//! - Ascending-id iteration for free via `BTreeMap`
//! - Test helpers for seeding and inspection
//!
//! # Example
//!
//! ```ignore
//! use lendnet_common::MemStore;
//!
//! let store = MemStore::new();
//! store.put_loan(&loan)?;
//! assert!(store.get_loan(loan.id)?.is_some());
//! ```

use crate::store::{LoanStore, StoreError};
use crate::types::{Loan, Params};
use std::collections::BTreeMap;
use std::sync::RwLock;
use tracing::debug;

// ════════════════════════════════════════════════════════════════════════════
// MEM STORE STRUCT
// ════════════════════════════════════════════════════════════════════════════

/// In-memory loan store for testing and tooling.
///
/// Internally a single `RwLock` over the whole module state; good enough
/// for the synchronous one-message-at-a-time execution model.
pub struct MemStore {
    inner: RwLock<MemInner>,
}

#[derive(Default)]
struct MemInner {
    /// loan id -> record, ordered by id
    loans: BTreeMap<u64, Loan>,
    params: Option<Params>,
    loan_count: Option<u64>,
    genesis_marked: bool,
}

impl std::fmt::Debug for MemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        match inner {
            Ok(inner) => f
                .debug_struct("MemStore")
                .field("loans", &inner.loans.len())
                .field("loan_count", &inner.loan_count)
                .field("genesis_marked", &inner.genesis_marked)
                .finish(),
            Err(_) => f.debug_struct("MemStore").field("poisoned", &true).finish(),
        }
    }
}

impl MemStore {
    /// Create an empty MemStore.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemInner::default()),
        }
    }

    /// Number of stored loans. Test helper.
    pub fn len(&self) -> usize {
        self.inner.read().map(|i| i.loans.len()).unwrap_or(0)
    }

    /// True when no loans are stored. Test helper.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, MemInner>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Backend("mem store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, MemInner>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Backend("mem store lock poisoned".to_string()))
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// LOAN STORE IMPLEMENTATION
// ════════════════════════════════════════════════════════════════════════════

impl LoanStore for MemStore {
    fn get_loan(&self, id: u64) -> Result<Option<Loan>, StoreError> {
        Ok(self.read()?.loans.get(&id).cloned())
    }

    fn put_loan(&self, loan: &Loan) -> Result<(), StoreError> {
        self.write()?.loans.insert(loan.id, loan.clone());
        debug!("mem store: put loan {}", loan.id);
        Ok(())
    }

    fn delete_loan(&self, id: u64) -> Result<bool, StoreError> {
        Ok(self.write()?.loans.remove(&id).is_some())
    }

    fn all_loans(&self) -> Result<Vec<Loan>, StoreError> {
        // BTreeMap iterates in key order, so the result is ascending by id
        Ok(self.read()?.loans.values().cloned().collect())
    }

    fn get_params(&self) -> Result<Option<Params>, StoreError> {
        Ok(self.read()?.params.clone())
    }

    fn put_params(&self, params: &Params) -> Result<(), StoreError> {
        self.write()?.params = Some(params.clone());
        Ok(())
    }

    fn get_loan_count(&self) -> Result<u64, StoreError> {
        Ok(self.read()?.loan_count.unwrap_or(0))
    }

    fn put_loan_count(&self, count: u64) -> Result<(), StoreError> {
        self.write()?.loan_count = Some(count);
        Ok(())
    }

    fn has_genesis(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.genesis_marked)
    }

    fn mark_genesis(&self) -> Result<(), StoreError> {
        self.write()?.genesis_marked = true;
        debug!("mem store: genesis marked");
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// TESTS
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn make_loan(id: u64) -> Loan {
        Loan {
            id,
            borrower: format!("lend1borrower{:03}", id),
            amount: 1_000,
            collateral: 2_500,
            deadline: 1_800_000_000,
        }
    }

    #[test]
    fn get_missing_loan_is_none() {
        let store = MemStore::new();
        assert!(store.get_loan(42).expect("get").is_none());
    }

    #[test]
    fn put_then_get_round_trips() {
        let store = MemStore::new();
        let loan = make_loan(7);
        store.put_loan(&loan).expect("put");
        assert_eq!(store.get_loan(7).expect("get"), Some(loan));
    }

    #[test]
    fn delete_reports_existence() {
        let store = MemStore::new();
        store.put_loan(&make_loan(3)).expect("put");
        assert!(store.delete_loan(3).expect("delete"));
        assert!(!store.delete_loan(3).expect("delete again"));
        assert!(store.get_loan(3).expect("get").is_none());
    }

    #[test]
    fn all_loans_ascending_by_id() {
        let store = MemStore::new();
        for id in [9, 2, 5] {
            store.put_loan(&make_loan(id)).expect("put");
        }
        let ids: Vec<u64> = store.all_loans().expect("all").iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn loan_count_defaults_to_zero() {
        let store = MemStore::new();
        assert_eq!(store.get_loan_count().expect("count"), 0);
        store.put_loan_count(11).expect("put count");
        assert_eq!(store.get_loan_count().expect("count"), 11);
    }

    #[test]
    fn params_unset_until_written() {
        let store = MemStore::new();
        assert!(store.get_params().expect("params").is_none());
        store.put_params(&Params::default()).expect("put params");
        assert_eq!(store.get_params().expect("params"), Some(Params::default()));
    }

    #[test]
    fn genesis_marker_flips_once_set() {
        let store = MemStore::new();
        assert!(!store.has_genesis().expect("has"));
        store.mark_genesis().expect("mark");
        assert!(store.has_genesis().expect("has"));
    }
}
