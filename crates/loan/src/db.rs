//! # LMDB Persistence for the Loan Module
//!
//! `LoanDb` adalah backend persisten untuk `LoanStore`, dibangun di atas
//! LMDB dengan bincode sebagai codec value.
//!
//! ## Bucket Layout
//!
//! Key formats are on-disk formats. Jangan diubah tanpa migration.
//!
//! | Bucket | Key | Value |
//! |--------|-----|-------|
//! | `loans` | loan id (u64 big-endian, 8 bytes) | bincode serialized Loan |
//! | `meta` | `"params"` | bincode serialized Params |
//! | `meta` | `"loan_count"` | u64 big-endian, 8 bytes |
//! | `meta` | `"genesis_marker"` | `"1"` |
//!
//! Big-endian id keys membuat iterasi cursor terurut ascending by id.

use anyhow::Result;
use lendnet_common::{Loan, LoanStore, Params, StoreError};
use lmdb::{
    Cursor,
    Database,
    DatabaseFlags,
    Environment,
    Transaction as LmdbTxn,
    WriteFlags,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

// ════════════════════════════════════════════════════════════════════════════
// BUCKET CONSTANTS
// ════════════════════════════════════════════════════════════════════════════

/// Loans bucket
/// Key: loan id (u64 big-endian, 8 bytes)
/// Value: bincode serialized Loan
pub const BUCKET_LOANS: &str = "loans";

/// Meta bucket: params, loan counter, genesis marker
pub const BUCKET_META: &str = "meta";

const META_PARAMS: &[u8] = b"params";
const META_LOAN_COUNT: &[u8] = b"loan_count";
const META_GENESIS_MARKER: &[u8] = b"genesis_marker";

fn backend(e: lmdb::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

fn codec(e: bincode::Error) -> StoreError {
    StoreError::Codec(e.to_string())
}

// ════════════════════════════════════════════════════════════════════════════
// LOAN DB
// ════════════════════════════════════════════════════════════════════════════

/// LMDB-backed loan store.
#[derive(Clone)]
pub struct LoanDb {
    env: Arc<Environment>,
    env_path: PathBuf,
    db_loans: Database,
    db_meta: Database,
}

impl LoanDb {
    /// Open LMDB environment at path, create named DBs
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let p = path.as_ref();
        std::fs::create_dir_all(p)?;

        let env = Environment::new()
            .set_max_dbs(2)
            .set_map_size(64_000_000usize)
            .open(p)?;

        let db_loans = env.create_db(Some(BUCKET_LOANS), DatabaseFlags::empty())?;
        let db_meta = env.create_db(Some(BUCKET_META), DatabaseFlags::empty())?;

        info!("loan db opened at {}", p.display());

        Ok(Self {
            env: Arc::new(env),
            env_path: p.to_path_buf(),
            db_loans,
            db_meta,
        })
    }

    /// Filesystem path of the LMDB environment.
    pub fn path(&self) -> &Path {
        &self.env_path
    }

    fn id_key(id: u64) -> [u8; 8] {
        id.to_be_bytes()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// LOAN STORE IMPLEMENTATION
// ════════════════════════════════════════════════════════════════════════════

impl LoanStore for LoanDb {
    fn get_loan(&self, id: u64) -> Result<Option<Loan>, StoreError> {
        let rtxn = self.env.begin_ro_txn().map_err(backend)?;
        match rtxn.get(self.db_loans, &Self::id_key(id)) {
            Ok(val) => {
                let loan: Loan = bincode::deserialize(val).map_err(codec)?;
                Ok(Some(loan))
            }
            Err(lmdb::Error::NotFound) => Ok(None),
            Err(e) => Err(backend(e)),
        }
    }

    fn put_loan(&self, loan: &Loan) -> Result<(), StoreError> {
        let blob = bincode::serialize(loan).map_err(codec)?;
        let mut wtxn = self.env.begin_rw_txn().map_err(backend)?;
        wtxn.put(self.db_loans, &Self::id_key(loan.id), &blob, WriteFlags::empty())
            .map_err(backend)?;
        wtxn.commit().map_err(backend)?;
        Ok(())
    }

    fn delete_loan(&self, id: u64) -> Result<bool, StoreError> {
        let mut wtxn = self.env.begin_rw_txn().map_err(backend)?;
        match wtxn.del(self.db_loans, &Self::id_key(id), None) {
            Ok(()) => {
                wtxn.commit().map_err(backend)?;
                Ok(true)
            }
            Err(lmdb::Error::NotFound) => {
                wtxn.abort();
                Ok(false)
            }
            Err(e) => Err(backend(e)),
        }
    }

    fn all_loans(&self) -> Result<Vec<Loan>, StoreError> {
        let rtxn = self.env.begin_ro_txn().map_err(backend)?;
        let mut cursor = rtxn.open_ro_cursor(self.db_loans).map_err(backend)?;
        let mut out = Vec::new();

        // Cursor iterates keys in order; BE keys sort by id
        for (key, val) in cursor.iter() {
            if key.len() == 8 {
                let loan: Loan = bincode::deserialize(val).map_err(codec)?;
                out.push(loan);
            }
        }

        Ok(out)
    }

    fn get_params(&self) -> Result<Option<Params>, StoreError> {
        let rtxn = self.env.begin_ro_txn().map_err(backend)?;
        match rtxn.get(self.db_meta, &META_PARAMS) {
            Ok(val) => {
                let params: Params = bincode::deserialize(val).map_err(codec)?;
                Ok(Some(params))
            }
            Err(lmdb::Error::NotFound) => Ok(None),
            Err(e) => Err(backend(e)),
        }
    }

    fn put_params(&self, params: &Params) -> Result<(), StoreError> {
        let blob = bincode::serialize(params).map_err(codec)?;
        let mut wtxn = self.env.begin_rw_txn().map_err(backend)?;
        wtxn.put(self.db_meta, &META_PARAMS, &blob, WriteFlags::empty())
            .map_err(backend)?;
        wtxn.commit().map_err(backend)?;
        Ok(())
    }

    fn get_loan_count(&self) -> Result<u64, StoreError> {
        let rtxn = self.env.begin_ro_txn().map_err(backend)?;
        match rtxn.get(self.db_meta, &META_LOAN_COUNT) {
            Ok(val) => {
                let bytes: [u8; 8] = val
                    .try_into()
                    .map_err(|_| StoreError::Codec("invalid loan_count length".to_string()))?;
                Ok(u64::from_be_bytes(bytes))
            }
            Err(lmdb::Error::NotFound) => Ok(0),
            Err(e) => Err(backend(e)),
        }
    }

    fn put_loan_count(&self, count: u64) -> Result<(), StoreError> {
        let mut wtxn = self.env.begin_rw_txn().map_err(backend)?;
        wtxn.put(
            self.db_meta,
            &META_LOAN_COUNT,
            &count.to_be_bytes(),
            WriteFlags::empty(),
        )
        .map_err(backend)?;
        wtxn.commit().map_err(backend)?;
        Ok(())
    }

    fn has_genesis(&self) -> Result<bool, StoreError> {
        let rtxn = self.env.begin_ro_txn().map_err(backend)?;
        match rtxn.get(self.db_meta, &META_GENESIS_MARKER) {
            Ok(_) => Ok(true),
            Err(lmdb::Error::NotFound) => Ok(false),
            Err(e) => Err(backend(e)),
        }
    }

    fn mark_genesis(&self) -> Result<(), StoreError> {
        let mut wtxn = self.env.begin_rw_txn().map_err(backend)?;
        wtxn.put(self.db_meta, &META_GENESIS_MARKER, b"1", WriteFlags::empty())
            .map_err(backend)?;
        wtxn.commit().map_err(backend)?;
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
    fn put_get_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = LoanDb::open(dir.path()).expect("open");
        let loan = make_loan(7);
        db.put_loan(&loan).expect("put");
        assert_eq!(db.get_loan(7).expect("get"), Some(loan));
        assert!(db.get_loan(8).expect("get missing").is_none());
    }

    #[test]
    fn records_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        {
            let db = LoanDb::open(dir.path()).expect("open");
            db.put_loan(&make_loan(1)).expect("put");
            db.put_loan_count(2).expect("count");
            db.put_params(&Params::default()).expect("params");
            db.mark_genesis().expect("mark");
        }
        let db = LoanDb::open(dir.path()).expect("reopen");
        assert_eq!(db.get_loan(1).expect("get"), Some(make_loan(1)));
        assert_eq!(db.get_loan_count().expect("count"), 2);
        assert_eq!(db.get_params().expect("params"), Some(Params::default()));
        assert!(db.has_genesis().expect("marker"));
    }

    #[test]
    fn all_loans_ascending_by_id() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = LoanDb::open(dir.path()).expect("open");
        for id in [300, 4, 17] {
            db.put_loan(&make_loan(id)).expect("put");
        }
        let ids: Vec<u64> = db.all_loans().expect("all").iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![4, 17, 300]);
    }

    #[test]
    fn delete_reports_existence() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = LoanDb::open(dir.path()).expect("open");
        db.put_loan(&make_loan(5)).expect("put");
        assert!(db.delete_loan(5).expect("delete"));
        assert!(!db.delete_loan(5).expect("delete again"));
    }

    #[test]
    fn loan_count_defaults_to_zero() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = LoanDb::open(dir.path()).expect("open");
        assert_eq!(db.get_loan_count().expect("count"), 0);
    }
}
