use serde::{Deserialize, Serialize};

/// Per-message execution context handed down by the outer router.
///
/// Konteks dibawa ke setiap handler dan ke genesis install/export.
/// Belum ada cancellation/timeout semantics: module mengeksekusi satu
/// message sampai selesai secara sinkron.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxContext {
    /// Height of the block carrying the message
    pub block_height: u64,
    /// Block timestamp (Unix seconds)
    pub block_time: u64,
    /// Chain id string of the enclosing chain
    pub chain_id: String,
}

impl TxContext {
    pub fn new(block_height: u64, block_time: u64, chain_id: impl Into<String>) -> Self {
        Self {
            block_height,
            block_time,
            chain_id: chain_id.into(),
        }
    }
}
