//! Fee from complexity
//!
//! Weights collapse a complexity vector into gas; the gas price comes from the caller. How
//! the price moves over time is decided by consensus and is not modelled here.

use dashu_int::UBig;
use platform_fee_common::{ComplexityError, Dimensions, FeeConfig, FeeDimension, Transaction};
use tracing::debug;

use crate::complexity::get_tx_complexity;

pub type Gas = u64;

/// Weighted sum of the complexity dimensions
pub fn to_gas(complexity: &Dimensions, weights: &Dimensions) -> Result<Gas, ComplexityError> {
    FeeDimension::ALL.iter().try_fold(0u64, |gas, dimension| {
        complexity[*dimension]
            .checked_mul(weights[*dimension])
            .and_then(|weighted| gas.checked_add(weighted))
            .ok_or(ComplexityError::GasOverflow)
    })
}

/// Fee for a given complexity, in the smallest denomination
pub fn calculate_fee(complexity: &Dimensions, fee: &FeeConfig) -> Result<UBig, ComplexityError> {
    let gas = to_gas(complexity, &fee.weights)?;
    Ok(UBig::from(gas) * UBig::from(fee.gas_price))
}

/// Minimum fee a transaction must burn at the given gas price
pub fn get_tx_fee(tx: &Transaction, fee: &FeeConfig) -> Result<UBig, ComplexityError> {
    let complexity = get_tx_complexity(tx)?;
    let amount = calculate_fee(&complexity, fee)?;
    debug!("{:?} fee {} at gas price {}", tx.kind(), amount, fee.gas_price);
    Ok(amount)
}
