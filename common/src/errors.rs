//! Error types for complexity calculation and transaction decoding

use thiserror::Error;

use crate::dimensions::FeeDimension;

/// Complexity calculation error
///
/// Every variant is fatal to the call that produced it: no partial or default complexity is
/// ever returned alongside one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ComplexityError {
    /// **Cause:** The transaction type ID is not one of the supported platform transactions
    #[error("Unsupported transaction type: type ID {type_id}")]
    UnsupportedTransactionKind { type_id: u32 },

    /// **Cause:** Subnet authorization is not a simple signature input
    #[error(
        "Unable to calculate auth complexity of transaction. Expected {expected} as subnet auth, got {found}"
    )]
    UnsupportedAuthorizationShape { expected: String, found: String },

    /// **Cause:** Summing complexities exceeded the range of a dimension
    #[error("Complexity overflow in {dimension} dimension")]
    Overflow { dimension: FeeDimension },

    /// **Cause:** Weighting complexity into gas exceeded the gas range
    #[error("Gas overflow while weighting complexity")]
    GasOverflow,
}

/// Error decoding a JSON transaction description
#[derive(Error, Debug)]
pub enum TxDecodeError {
    #[error("Transaction description has no numeric typeId")]
    MissingTypeId,

    #[error("{0}")]
    Unsupported(#[from] ComplexityError),

    #[error("Invalid transaction body: {0}")]
    Json(#[from] serde_json::Error),
}
