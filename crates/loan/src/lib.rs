//! # Lendnet Loan Module
//!
//! Library untuk loan module yang di-mount ke app-chain lendnet oleh
//! routing layer eksternal. Module ini deterministic: satu message masuk
//! menghasilkan satu response atau error, dan semua mutasi lewat keeper.
//!
//! ## Module Overview
//!
//! | Module | Fungsi |
//! |--------|--------|
//! | `context` | Per-message TxContext dari router |
//! | `msg` | Message types: MsgCancelLoan, MsgLiquidateLoan |
//! | `keeper` | Store-access facade over LoanStore |
//! | `cancel_loan_handler` | CancelLoan entry point |
//! | `liquidate_loan_handler` | LiquidateLoan entry point |
//! | `genesis` | GenesisState: install, export, validate |
//! | `db` | LMDB persistence: LoanDb |
//!
//! ## Message Flow
//!
//! ```text
//! router (external) ──► handle_cancel_loan ─────┐
//!                  └──► handle_liquidate_loan ──┤
//!                                               ▼
//!                                            Keeper ──► LoanStore (LoanDb | MemStore)
//! ```

pub mod cancel_loan_handler;
pub mod context;
pub mod db;
pub mod genesis;
pub mod keeper;
pub mod liquidate_loan_handler;
pub mod msg;

use lendnet_common::StoreError;
use thiserror::Error;

// ════════════════════════════════════════════════════════════════════════════
// RE-EXPORTS
// ════════════════════════════════════════════════════════════════════════════

pub use cancel_loan_handler::handle_cancel_loan;
pub use context::TxContext;
pub use db::LoanDb;
pub use genesis::{export_genesis, init_genesis, GenesisError, GenesisState};
pub use keeper::Keeper;
pub use liquidate_loan_handler::handle_liquidate_loan;
pub use msg::{MsgCancelLoan, MsgCancelLoanResponse, MsgLiquidateLoan, MsgLiquidateLoanResponse};

// ════════════════════════════════════════════════════════════════════════════
// MESSAGE ERROR
// ════════════════════════════════════════════════════════════════════════════

/// Error type untuk message handlers.
///
/// Digunakan oleh:
/// - handle_cancel_loan() saat target lookup gagal
/// - handle_liquidate_loan() belum punya error path
#[derive(Debug, Error)]
pub enum MsgError {
    /// Loan id tidak ditemukan di store
    #[error("key {0} doesn't exist")]
    KeyNotFound(u64),

    /// Error dari store backend
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
