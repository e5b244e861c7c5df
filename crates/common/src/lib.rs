//! # Lendnet Common Crate
//!
//! Common utilities dan Store Abstraction Layer untuk loan module.
//!
//! ## Modules
//! - `types`: Core record types (Loan, Params)
//! - `store`: LoanStore trait definition
//! - `mem_store`: In-memory implementation for testing
//! - `config`: Configuration management
//!
//! ## Store Layer Architecture
//! ```text
//! ┌─────────────────┐
//! │    LoanStore    │  <- Abstract trait
//! └────────┬────────┘
//!          │
//!     ┌────┴─────┐
//!     │          │
//! ┌───▼────┐ ┌───▼────┐
//! │ LoanDb │ │MemStore│
//! └────────┘ └────────┘
//! ```
//!
//! `LoanDb` (LMDB backend) lives in the `lendnet-loan` crate; `MemStore`
//! lives here so every consumer can test against the trait without disk.
//!
//! ## Usage
//! ```rust,ignore
//! use lendnet_common::MemStore;
//!
//! let store = std::sync::Arc::new(MemStore::new());
//! let loan = store.get_loan(7)?;
//! ```

pub mod config;
pub mod mem_store;
pub mod store;
pub mod types;

pub use mem_store::MemStore;
pub use store::{LoanStore, StoreError};
pub use types::{Loan, Params};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
