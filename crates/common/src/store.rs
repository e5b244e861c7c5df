//! Loan Store Abstraction
//!
//! Modul ini mendefinisikan trait `LoanStore` sebagai kontrak abstraksi
//! untuk penyimpanan record loan. Trait ini memungkinkan keeper dan
//! message handler diuji tanpa runtime ledger penuh: backend persisten
//! (LMDB) dan backend in-memory memenuhi kontrak yang sama.

use crate::types::{Loan, Params};
use thiserror::Error;

// ════════════════════════════════════════════════════════════════════════════
// STORE ERROR
// ════════════════════════════════════════════════════════════════════════════

/// Error dari store backend.
///
/// Lookup yang tidak menemukan record BUKAN error: kontrak trait
/// mengembalikan `Ok(None)` untuk kasus itu.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Gagal serialisasi/deserialisasi record
    #[error("codec error: {0}")]
    Codec(String),

    /// Error dari backend database
    #[error("backend error: {0}")]
    Backend(String),

    /// IO error umum
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// ════════════════════════════════════════════════════════════════════════════
// LOAN STORE TRAIT
// ════════════════════════════════════════════════════════════════════════════

/// Narrow store contract for the loan module.
///
/// All methods take `&self`; implementations are internally synchronized
/// (RwLock for the in-memory store, LMDB transactions for the persistent
/// one), so one message at a time sees a consistent view.
pub trait LoanStore: Send + Sync {
    /// Fetch a loan by id. `Ok(None)` when the id was never stored.
    fn get_loan(&self, id: u64) -> Result<Option<Loan>, StoreError>;

    /// Insert or overwrite a loan keyed by `loan.id`.
    fn put_loan(&self, loan: &Loan) -> Result<(), StoreError>;

    /// Delete a loan by id. Returns whether a record existed.
    fn delete_loan(&self, id: u64) -> Result<bool, StoreError>;

    /// All loans in ascending id order.
    fn all_loans(&self) -> Result<Vec<Loan>, StoreError>;

    /// Module params, if ever written.
    fn get_params(&self) -> Result<Option<Params>, StoreError>;

    /// Persist module params.
    fn put_params(&self, params: &Params) -> Result<(), StoreError>;

    /// Loan counter: the next id to assign. Zero when unset.
    fn get_loan_count(&self) -> Result<u64, StoreError>;

    /// Persist the loan counter.
    fn put_loan_count(&self, count: u64) -> Result<(), StoreError>;

    /// Return true if the genesis marker exists.
    fn has_genesis(&self) -> Result<bool, StoreError>;

    /// Mark genesis as initialized.
    fn mark_genesis(&self) -> Result<(), StoreError>;
}
