//! Intrinsic complexity of transaction fields
//!
//! Each bandwidth figure is the serialized size of the fixed-width fields it covers, so the
//! tables track the codec layout field for field.

use platform_fee_common::{
    Dimensions, TxKind, BLS_PUBLIC_KEY_LEN, BLS_SIGNATURE_LEN, ID_LEN as ID_BYTES, NODE_ID_LEN,
    SECP256K1_SIGNATURE_LEN, SHORT_ID_LEN as SHORT_ID_BYTES,
};

pub const ID_LEN: u64 = ID_BYTES as u64;
pub const SHORT_ID_LEN: u64 = SHORT_ID_BYTES as u64;
const NODE_ID_BYTES: u64 = NODE_ID_LEN as u64;

const CODEC_VERSION_LEN: u64 = 2;
const SHORT_LEN: u64 = 2;
const INT_LEN: u64 = 4;
const LONG_LEN: u64 = 8;

const INTRINSIC_VALIDATOR_BANDWIDTH: u64 = NODE_ID_BYTES // node ID
    + LONG_LEN // start
    + LONG_LEN // end
    + LONG_LEN; // weight

const INTRINSIC_SUBNET_VALIDATOR_BANDWIDTH: u64 = INTRINSIC_VALIDATOR_BANDWIDTH + ID_LEN; // subnet ID

pub const INTRINSIC_OUTPUT_BANDWIDTH: u64 = ID_LEN // asset ID
    + INT_LEN; // output type ID

pub const INTRINSIC_STAKEABLE_LOCKED_OUTPUT_BANDWIDTH: u64 = LONG_LEN // locktime
    + INT_LEN; // output type ID

pub const INTRINSIC_SECP256K1_FX_OUTPUT_OWNERS_BANDWIDTH: u64 = LONG_LEN // locktime
    + INT_LEN // threshold
    + INT_LEN; // number of addresses

pub const INTRINSIC_SECP256K1_FX_OUTPUT_BANDWIDTH: u64 = LONG_LEN // amount
    + INTRINSIC_SECP256K1_FX_OUTPUT_OWNERS_BANDWIDTH;

pub const INTRINSIC_INPUT_BANDWIDTH: u64 = ID_LEN // tx ID
    + INT_LEN // output index
    + ID_LEN // asset ID
    + INT_LEN // input type ID
    + INT_LEN; // credential type ID

pub const INTRINSIC_STAKEABLE_LOCKED_INPUT_BANDWIDTH: u64 = LONG_LEN // locktime
    + INT_LEN; // input type ID

pub const INTRINSIC_SECP256K1_FX_INPUT_BANDWIDTH: u64 = INT_LEN // number of signature indices
    + INT_LEN; // number of signatures

pub const INTRINSIC_SECP256K1_FX_TRANSFERABLE_INPUT_BANDWIDTH: u64 = LONG_LEN // amount
    + INTRINSIC_SECP256K1_FX_INPUT_BANDWIDTH;

pub const INTRINSIC_SECP256K1_FX_SIGNATURE_BANDWIDTH: u64 = INT_LEN // signature index
    + SECP256K1_SIGNATURE_LEN as u64;

pub const INTRINSIC_POP_BANDWIDTH: u64 = BLS_PUBLIC_KEY_LEN as u64 + BLS_SIGNATURE_LEN as u64;

pub const INTRINSIC_INPUT_DB_READ: u64 = 1;
pub const INTRINSIC_INPUT_DB_WRITE: u64 = 1; // consume the UTXO
pub const INTRINSIC_OUTPUT_DB_WRITE: u64 = 1; // produce the UTXO

pub const INTRINSIC_BASE_TX_COMPLEXITIES: Dimensions = Dimensions::new(
    CODEC_VERSION_LEN
        + INT_LEN // type ID
        + INT_LEN // network ID
        + ID_LEN // blockchain ID
        + INT_LEN // number of outputs
        + INT_LEN // number of inputs
        + INT_LEN // length of memo
        + INT_LEN, // number of credentials
    0,
    0,
    0,
);

const BASE_BANDWIDTH: u64 = INTRINSIC_BASE_TX_COMPLEXITIES.bandwidth;

pub const INTRINSIC_ADD_PERMISSIONLESS_VALIDATOR_TX_COMPLEXITIES: Dimensions = Dimensions::new(
    BASE_BANDWIDTH
        + INTRINSIC_VALIDATOR_BANDWIDTH
        + ID_LEN // subnet ID
        + INT_LEN // signer type ID
        + INT_LEN // number of stake outputs
        + INT_LEN // validator rewards type ID
        + INT_LEN // delegator rewards type ID
        + INT_LEN, // delegation shares
    1, // staking config
    1, // current staker
    0,
);

pub const INTRINSIC_ADD_PERMISSIONLESS_DELEGATOR_TX_COMPLEXITIES: Dimensions = Dimensions::new(
    BASE_BANDWIDTH
        + INTRINSIC_VALIDATOR_BANDWIDTH
        + ID_LEN // subnet ID
        + INT_LEN // number of stake outputs
        + INT_LEN, // delegator rewards type ID
    1, // staking config
    1, // current staker
    0,
);

pub const INTRINSIC_ADD_SUBNET_VALIDATOR_TX_COMPLEXITIES: Dimensions = Dimensions::new(
    BASE_BANDWIDTH
        + INTRINSIC_SUBNET_VALIDATOR_BANDWIDTH
        + INT_LEN // subnet auth type ID
        + INT_LEN, // subnet auth credential type ID
    2, // subnet auth and subnet transformation
    1, // current staker
    0,
);

pub const INTRINSIC_CREATE_CHAIN_TX_COMPLEXITIES: Dimensions = Dimensions::new(
    BASE_BANDWIDTH
        + ID_LEN // subnet ID
        + SHORT_LEN // chain name length
        + ID_LEN // VM ID
        + INT_LEN // number of fx IDs
        + INT_LEN // genesis length
        + INT_LEN // subnet auth type ID
        + INT_LEN, // subnet auth credential type ID
    1, // subnet auth
    1, // chain
    0,
);

pub const INTRINSIC_CREATE_SUBNET_TX_COMPLEXITIES: Dimensions = Dimensions::new(
    BASE_BANDWIDTH + INT_LEN, // owner type ID
    0,
    1, // subnet owner
    0,
);

pub const INTRINSIC_EXPORT_TX_COMPLEXITIES: Dimensions = Dimensions::new(
    BASE_BANDWIDTH
        + ID_LEN // destination chain ID
        + INT_LEN, // number of exported outputs
    0,
    0,
    0,
);

pub const INTRINSIC_IMPORT_TX_COMPLEXITIES: Dimensions = Dimensions::new(
    BASE_BANDWIDTH
        + ID_LEN // source chain ID
        + INT_LEN, // number of imported inputs
    0,
    0,
    0,
);

pub const INTRINSIC_REMOVE_SUBNET_VALIDATOR_TX_COMPLEXITIES: Dimensions = Dimensions::new(
    BASE_BANDWIDTH
        + NODE_ID_BYTES
        + ID_LEN // subnet ID
        + INT_LEN // subnet auth type ID
        + INT_LEN, // subnet auth credential type ID
    1, // subnet auth
    1, // validator weight
    0,
);

pub const INTRINSIC_TRANSFER_SUBNET_OWNERSHIP_TX_COMPLEXITIES: Dimensions = Dimensions::new(
    BASE_BANDWIDTH
        + ID_LEN // subnet ID
        + INT_LEN // subnet auth type ID
        + INT_LEN // owner type ID
        + INT_LEN, // subnet auth credential type ID
    1, // subnet auth
    1, // subnet owner
    0,
);

/// Intrinsic complexity of a transaction kind
pub fn intrinsic_tx_complexity(kind: TxKind) -> Dimensions {
    match kind {
        TxKind::Base => INTRINSIC_BASE_TX_COMPLEXITIES,
        TxKind::AddPermissionlessValidator => INTRINSIC_ADD_PERMISSIONLESS_VALIDATOR_TX_COMPLEXITIES,
        TxKind::AddPermissionlessDelegator => INTRINSIC_ADD_PERMISSIONLESS_DELEGATOR_TX_COMPLEXITIES,
        TxKind::AddSubnetValidator => INTRINSIC_ADD_SUBNET_VALIDATOR_TX_COMPLEXITIES,
        TxKind::CreateChain => INTRINSIC_CREATE_CHAIN_TX_COMPLEXITIES,
        TxKind::CreateSubnet => INTRINSIC_CREATE_SUBNET_TX_COMPLEXITIES,
        TxKind::Export => INTRINSIC_EXPORT_TX_COMPLEXITIES,
        TxKind::Import => INTRINSIC_IMPORT_TX_COMPLEXITIES,
        TxKind::RemoveSubnetValidator => INTRINSIC_REMOVE_SUBNET_VALIDATOR_TX_COMPLEXITIES,
        TxKind::TransferSubnetOwnership => INTRINSIC_TRANSFER_SUBNET_OWNERSHIP_TX_COMPLEXITIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn field_level_constants() {
        assert_eq!(INTRINSIC_OUTPUT_BANDWIDTH, 36);
        assert_eq!(INTRINSIC_SECP256K1_FX_OUTPUT_BANDWIDTH, 24);
        assert_eq!(INTRINSIC_SECP256K1_FX_OUTPUT_OWNERS_BANDWIDTH, 16);
        assert_eq!(INTRINSIC_STAKEABLE_LOCKED_OUTPUT_BANDWIDTH, 12);
        assert_eq!(INTRINSIC_INPUT_BANDWIDTH, 76);
        assert_eq!(INTRINSIC_STAKEABLE_LOCKED_INPUT_BANDWIDTH, 12);
        assert_eq!(INTRINSIC_SECP256K1_FX_INPUT_BANDWIDTH, 8);
        assert_eq!(INTRINSIC_SECP256K1_FX_TRANSFERABLE_INPUT_BANDWIDTH, 16);
        assert_eq!(INTRINSIC_SECP256K1_FX_SIGNATURE_BANDWIDTH, 69);
        assert_eq!(INTRINSIC_POP_BANDWIDTH, 144);
    }

    #[test_case(TxKind::Base => Dimensions::new(58, 0, 0, 0))]
    #[test_case(TxKind::AddPermissionlessValidator => Dimensions::new(154, 1, 1, 0))]
    #[test_case(TxKind::AddPermissionlessDelegator => Dimensions::new(142, 1, 1, 0))]
    #[test_case(TxKind::AddSubnetValidator => Dimensions::new(142, 2, 1, 0))]
    #[test_case(TxKind::CreateChain => Dimensions::new(140, 1, 1, 0))]
    #[test_case(TxKind::CreateSubnet => Dimensions::new(62, 0, 1, 0))]
    #[test_case(TxKind::Export => Dimensions::new(94, 0, 0, 0))]
    #[test_case(TxKind::Import => Dimensions::new(94, 0, 0, 0))]
    #[test_case(TxKind::RemoveSubnetValidator => Dimensions::new(118, 1, 1, 0))]
    #[test_case(TxKind::TransferSubnetOwnership => Dimensions::new(102, 1, 1, 0))]
    fn per_kind_intrinsics(kind: TxKind) -> Dimensions {
        intrinsic_tx_complexity(kind)
    }
}
