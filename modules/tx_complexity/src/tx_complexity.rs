//! Platform chain transaction complexity
//!
//! Computes the multi-dimensional complexity a validator will charge for a transaction, so
//! that a client can pay the minimum fee before submitting it. Every function is a pure
//! transform of its argument and can be called from any thread.

pub mod complexity;
pub mod constants;
pub mod fee;
pub mod spend;

pub use complexity::{
    get_auth_complexity, get_base_tx_complexity, get_create_chain_dynamic_complexity,
    get_input_complexity, get_output_complexity, get_owner_complexity, get_signer_complexity,
    get_single_input_complexity, get_single_output_complexity, get_tx_complexity,
    ComplexityResult,
};
pub use constants::intrinsic_tx_complexity;
pub use fee::{calculate_fee, get_tx_fee, to_gas, Gas};
pub use spend::{
    run_steps, AddressMap, SpendCalcResult, SpendError, SpendOptions, SpendResult, SpendState,
    SpendStep,
};
