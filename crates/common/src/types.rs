use serde::{Deserialize, Serialize};

/// A single loan record persisted by the module.
///
/// Record bersifat append-only dari sisi module: handler membaca record
/// by id, tetapi belum ada handler yang memutasi atau menghapusnya.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// Record id, assigned from the module counter at append time
    pub id: u64,
    /// Account that requested the loan (bech32-style account string)
    pub borrower: String,
    /// Principal in smallest units
    pub amount: u128,
    /// Collateral locked for the loan, smallest units
    pub collateral: u128,
    /// Unix timestamp (seconds) after which the loan is past due
    pub deadline: u64,
}

/// Module-wide parameters.
///
/// Params saat ini kosong: belum ada parameter yang bisa di-tune. Struct
/// dipertahankan supaya genesis state dan keeper surface tidak berubah
/// ketika parameter pertama ditambahkan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {}
