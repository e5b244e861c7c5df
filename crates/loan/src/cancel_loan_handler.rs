//! # CancelLoan Message Handler
//!
//! Entry point untuk message CancelLoan dari routing layer.
//!
//! ## Flow
//!
//! ```text
//! handle_cancel_loan(ctx, keeper, msg)
//!   STEP 1 ─ LOOKUP (read-only)
//!   │  keeper.get_loan(msg.id)?
//!   │  ← None → return MsgError::KeyNotFound
//!   │
//!   STEP 2 ─ RESPOND
//!      Some(_) → MsgCancelLoanResponse (state unchanged)
//! ```
//!
//! Cancellation state transition belum diimplementasikan: handler hanya
//! memverifikasi keberadaan record. Store tidak pernah dimutasi di sini.

use crate::context::TxContext;
use crate::keeper::Keeper;
use crate::msg::{MsgCancelLoan, MsgCancelLoanResponse};
use crate::MsgError;

/// Handle one `MsgCancelLoan`.
///
/// Returns `KeyNotFound` when `msg.id` has no record; otherwise an empty
/// response. No state is mutated either way.
pub fn handle_cancel_loan(
    _ctx: &TxContext,
    keeper: &Keeper,
    msg: &MsgCancelLoan,
) -> Result<MsgCancelLoanResponse, MsgError> {
    // TODO: cancellation state transition
    if keeper.get_loan(msg.id)?.is_none() {
        return Err(MsgError::KeyNotFound(msg.id));
    }

    Ok(MsgCancelLoanResponse {})
}
