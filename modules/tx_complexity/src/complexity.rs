//! Transaction complexity
//!
//! Prices the shape of a transaction (counts and byte lengths of its fields) along each fee
//! dimension, matching the accounting a validator performs for the same transaction.

use platform_fee_common::{
    add_dimensions, AddPermissionlessDelegatorTx, AddPermissionlessValidatorTx,
    AddSubnetValidatorTx, Authorization, BaseTx, ComplexityError, CreateChainTx, CreateSubnetTx,
    Dimensions, ExportTx, FeeDimension, ImportTx, OutputOwners, PlatformBaseTx,
    RemoveSubnetValidatorTx, Signer, Transaction, TransferSubnetOwnershipTx, TransferableInput,
    TransferableOutput,
};
use tracing::{debug, error};

use crate::constants::*;

pub type ComplexityResult = Result<Dimensions, ComplexityError>;

fn count(n: usize, unit: u64) -> Result<u64, ComplexityError> {
    (n as u64).checked_mul(unit).ok_or(ComplexityError::Overflow {
        dimension: FeeDimension::Bandwidth,
    })
}

fn byte_len(bytes: usize) -> u64 {
    bytes as u64
}

/// Complexity of a single output
pub fn get_single_output_complexity(output: &TransferableOutput) -> ComplexityResult {
    let mut bandwidth = INTRINSIC_OUTPUT_BANDWIDTH + INTRINSIC_SECP256K1_FX_OUTPUT_BANDWIDTH;
    if output.output.is_stakeable_lock() {
        bandwidth += INTRINSIC_STAKEABLE_LOCKED_OUTPUT_BANDWIDTH;
    }

    let num_addresses = output.output.owners().map_or(0, |owners| owners.addrs.len());

    Dimensions::new(bandwidth, 0, INTRINSIC_OUTPUT_DB_WRITE, 0)
        .checked_add_bandwidth(count(num_addresses, SHORT_ID_LEN)?)
}

/// Complexity outputs add to a transaction
pub fn get_output_complexity(outputs: &[TransferableOutput]) -> ComplexityResult {
    outputs.iter().try_fold(Dimensions::ZERO, |acc, output| {
        acc.checked_add(&get_single_output_complexity(output)?)
    })
}

/// Complexity of a single input, including its credential.
///
/// Signatures are counted from the indices the input declares, so the result is the same
/// before and after signing.
pub fn get_single_input_complexity(input: &TransferableInput) -> ComplexityResult {
    let mut bandwidth =
        INTRINSIC_INPUT_BANDWIDTH + INTRINSIC_SECP256K1_FX_TRANSFERABLE_INPUT_BANDWIDTH;
    if input.input.is_stakeable_lock() {
        bandwidth += INTRINSIC_STAKEABLE_LOCKED_INPUT_BANDWIDTH;
    }

    let num_signatures = input.sig_indices().len();

    Dimensions::new(
        bandwidth,
        INTRINSIC_INPUT_DB_READ,
        INTRINSIC_INPUT_DB_WRITE,
        0, // signature verification is not priced yet
    )
    .checked_add_bandwidth(count(num_signatures, INTRINSIC_SECP256K1_FX_SIGNATURE_BANDWIDTH)?)
}

/// Complexity inputs add to a transaction, including their credentials
pub fn get_input_complexity(inputs: &[TransferableInput]) -> ComplexityResult {
    inputs.iter().try_fold(Dimensions::ZERO, |acc, input| {
        acc.checked_add(&get_single_input_complexity(input)?)
    })
}

pub fn get_signer_complexity(signer: &Signer) -> Dimensions {
    match signer {
        Signer::Empty => Dimensions::ZERO,
        Signer::ProofOfPossession { .. } => Dimensions::bandwidth(INTRINSIC_POP_BANDWIDTH),
    }
}

pub fn get_owner_complexity(owners: &OutputOwners) -> ComplexityResult {
    let bandwidth = count(owners.addrs.len(), SHORT_ID_LEN)?;
    Dimensions::bandwidth(INTRINSIC_SECP256K1_FX_OUTPUT_OWNERS_BANDWIDTH)
        .checked_add_bandwidth(bandwidth)
}

/// Complexity a subnet authorization adds to a transaction.
///
/// Covers the credential that will carry its signatures but neither of their type IDs,
/// which are part of the intrinsic transaction complexity.
pub fn get_auth_complexity(auth: &Authorization) -> ComplexityResult {
    let Authorization::Input(input) = auth else {
        error!("Subnet auth must be a signature input, got {}", auth.shape());
        return Err(ComplexityError::UnsupportedAuthorizationShape {
            expected: "Input".to_string(),
            found: auth.shape(),
        });
    };

    let signature_bandwidth =
        count(input.sig_indices.len(), INTRINSIC_SECP256K1_FX_SIGNATURE_BANDWIDTH)?;
    Dimensions::bandwidth(INTRINSIC_SECP256K1_FX_INPUT_BANDWIDTH)
        .checked_add_bandwidth(signature_bandwidth)
}

/// Outputs, inputs and memo of the common envelope
pub fn get_base_tx_complexity(base_tx: &BaseTx) -> ComplexityResult {
    get_output_complexity(&base_tx.outputs)?
        .checked_add(&get_input_complexity(&base_tx.inputs)?)?
        .checked_add_bandwidth(byte_len(base_tx.memo.len()))
}

fn base_tx(tx: &PlatformBaseTx) -> ComplexityResult {
    add_dimensions(&[
        INTRINSIC_BASE_TX_COMPLEXITIES,
        get_base_tx_complexity(&tx.base_tx)?,
    ])
}

fn add_permissionless_validator_tx(tx: &AddPermissionlessValidatorTx) -> ComplexityResult {
    add_dimensions(&[
        INTRINSIC_ADD_PERMISSIONLESS_VALIDATOR_TX_COMPLEXITIES,
        get_base_tx_complexity(&tx.base_tx)?,
        get_signer_complexity(&tx.signer),
        get_output_complexity(&tx.stake)?,
        get_owner_complexity(&tx.validator_rewards_owner)?,
        get_owner_complexity(&tx.delegator_rewards_owner)?,
    ])
}

fn add_permissionless_delegator_tx(tx: &AddPermissionlessDelegatorTx) -> ComplexityResult {
    add_dimensions(&[
        INTRINSIC_ADD_PERMISSIONLESS_DELEGATOR_TX_COMPLEXITIES,
        get_base_tx_complexity(&tx.base_tx)?,
        get_owner_complexity(&tx.delegator_rewards_owner)?,
        get_output_complexity(&tx.stake)?,
    ])
}

fn add_subnet_validator_tx(tx: &AddSubnetValidatorTx) -> ComplexityResult {
    add_dimensions(&[
        INTRINSIC_ADD_SUBNET_VALIDATOR_TX_COMPLEXITIES,
        get_base_tx_complexity(&tx.base_tx)?,
        get_auth_complexity(&tx.subnet_auth)?,
    ])
}

/// Bandwidth of the variable-length create chain fields
pub fn get_create_chain_dynamic_complexity(tx: &CreateChainTx) -> ComplexityResult {
    Dimensions::bandwidth(count(tx.fx_ids.len(), ID_LEN)?)
        .checked_add_bandwidth(byte_len(tx.chain_name.len()))?
        .checked_add_bandwidth(byte_len(tx.genesis_data.len()))
}

fn create_chain_tx(tx: &CreateChainTx) -> ComplexityResult {
    add_dimensions(&[
        INTRINSIC_CREATE_CHAIN_TX_COMPLEXITIES,
        get_create_chain_dynamic_complexity(tx)?,
        get_base_tx_complexity(&tx.base_tx)?,
        get_auth_complexity(&tx.subnet_auth)?,
    ])
}

fn create_subnet_tx(tx: &CreateSubnetTx) -> ComplexityResult {
    add_dimensions(&[
        INTRINSIC_CREATE_SUBNET_TX_COMPLEXITIES,
        get_base_tx_complexity(&tx.base_tx)?,
        get_owner_complexity(&tx.owner)?,
    ])
}

fn export_tx(tx: &ExportTx) -> ComplexityResult {
    add_dimensions(&[
        INTRINSIC_EXPORT_TX_COMPLEXITIES,
        get_base_tx_complexity(&tx.base_tx)?,
        get_output_complexity(&tx.exported_outputs)?,
    ])
}

fn import_tx(tx: &ImportTx) -> ComplexityResult {
    add_dimensions(&[
        INTRINSIC_IMPORT_TX_COMPLEXITIES,
        get_base_tx_complexity(&tx.base_tx)?,
        get_input_complexity(&tx.imported_inputs)?,
    ])
}

fn remove_subnet_validator_tx(tx: &RemoveSubnetValidatorTx) -> ComplexityResult {
    add_dimensions(&[
        INTRINSIC_REMOVE_SUBNET_VALIDATOR_TX_COMPLEXITIES,
        get_base_tx_complexity(&tx.base_tx)?,
        get_auth_complexity(&tx.subnet_auth)?,
    ])
}

fn transfer_subnet_ownership_tx(tx: &TransferSubnetOwnershipTx) -> ComplexityResult {
    add_dimensions(&[
        INTRINSIC_TRANSFER_SUBNET_OWNERSHIP_TX_COMPLEXITIES,
        get_base_tx_complexity(&tx.base_tx)?,
        get_auth_complexity(&tx.subnet_auth)?,
        get_owner_complexity(&tx.owner)?,
    ])
}

/// Total complexity of an unsigned transaction
pub fn get_tx_complexity(tx: &Transaction) -> ComplexityResult {
    let complexity = match tx {
        Transaction::Base(tx) => base_tx(tx),
        Transaction::AddPermissionlessValidator(tx) => add_permissionless_validator_tx(tx),
        Transaction::AddPermissionlessDelegator(tx) => add_permissionless_delegator_tx(tx),
        Transaction::AddSubnetValidator(tx) => add_subnet_validator_tx(tx),
        Transaction::CreateChain(tx) => create_chain_tx(tx),
        Transaction::CreateSubnet(tx) => create_subnet_tx(tx),
        Transaction::Export(tx) => export_tx(tx),
        Transaction::Import(tx) => import_tx(tx),
        Transaction::RemoveSubnetValidator(tx) => remove_subnet_validator_tx(tx),
        Transaction::TransferSubnetOwnership(tx) => transfer_subnet_ownership_tx(tx),
    }?;

    debug!("{:?} complexity {}", tx.kind(), complexity);
    Ok(complexity)
}
