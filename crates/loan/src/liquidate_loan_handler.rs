//! # LiquidateLoan Message Handler
//!
//! Entry point untuk message LiquidateLoan dari routing layer.
//!
//! Handler ini belum punya logika liquidation: tidak ada lookup dan
//! tidak ada mutasi state. Setiap message dijawab dengan response
//! kosong tanpa error path.

use crate::context::TxContext;
use crate::keeper::Keeper;
use crate::msg::{MsgLiquidateLoan, MsgLiquidateLoanResponse};
use crate::MsgError;

/// Handle one `MsgLiquidateLoan`. Unconditionally succeeds.
pub fn handle_liquidate_loan(
    _ctx: &TxContext,
    _keeper: &Keeper,
    _msg: &MsgLiquidateLoan,
) -> Result<MsgLiquidateLoanResponse, MsgError> {
    // TODO: liquidation handling
    Ok(MsgLiquidateLoanResponse {})
}
