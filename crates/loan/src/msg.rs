//! Message types consumed from the external routing layer.
//!
//! Satu struct per message plus response kosong yang dikembalikan ke
//! router. Field layout mengikuti record di `lendnet_common::types`.

use serde::{Deserialize, Serialize};

/// Cancel a previously requested loan by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCancelLoan {
    /// Account submitting the cancellation
    pub creator: String,
    /// Id of the loan to cancel
    pub id: u64,
}

/// Empty response for a processed `MsgCancelLoan`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCancelLoanResponse {}

/// Liquidate a loan by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgLiquidateLoan {
    /// Account submitting the liquidation
    pub creator: String,
    /// Id of the loan to liquidate
    pub id: u64,
}

/// Empty response for a processed `MsgLiquidateLoan`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgLiquidateLoanResponse {}
