//! Shared transaction fixtures for complexity tests.
//!
//! Every fixture shares one envelope: a single plain transfer input needing one signature,
//! a single plain transfer output to one address and an empty memo.

#![allow(dead_code)]

use platform_fee_common::{
    AddPermissionlessDelegatorTx, AddPermissionlessValidatorTx, AddSubnetValidatorTx,
    Authorization, BaseTx, BlsPublicKey, BlsSignature, CreateChainTx, CreateSubnetTx, ExportTx,
    Id, ImportTx, Input, NodeId, Output, OutputOwners, PlatformBaseTx, RemoveSubnetValidatorTx,
    ShortId, SignatureInput, Signer, StakeableLockIn, StakeableLockOut, SubnetValidator,
    Transaction, TransferInput, TransferOutput, TransferSubnetOwnershipTx, TransferableInput,
    TransferableOutput, UtxoId, Validator,
};

pub fn asset() -> Id {
    Id::from([0x21; 32])
}

pub fn owners(addresses: usize) -> OutputOwners {
    OutputOwners::new(0, 1, (0..addresses).map(|i| ShortId::from([i as u8; 20])).collect())
}

pub fn transfer_out(addresses: usize) -> TransferableOutput {
    TransferableOutput {
        asset_id: asset(),
        output: Output::Transfer(TransferOutput {
            amount: 1_000,
            owners: owners(addresses),
        }),
    }
}

pub fn locked_out(addresses: usize) -> TransferableOutput {
    TransferableOutput {
        asset_id: asset(),
        output: Output::StakeableLock(StakeableLockOut {
            locktime: 1_700_000_000,
            transferable_out: TransferOutput {
                amount: 1_000,
                owners: owners(addresses),
            },
        }),
    }
}

pub fn transfer_in(signatures: u32) -> TransferableInput {
    TransferableInput {
        utxo_id: UtxoId {
            tx_id: Id::from([0x33; 32]),
            output_index: signatures,
        },
        asset_id: asset(),
        input: Input::Transfer(TransferInput {
            amount: 1_000,
            input: SignatureInput::new((0..signatures).collect()),
        }),
    }
}

pub fn locked_in(signatures: u32) -> TransferableInput {
    TransferableInput {
        utxo_id: UtxoId::default(),
        asset_id: asset(),
        input: Input::StakeableLock(StakeableLockIn {
            locktime: 1_700_000_000,
            transferable_in: TransferInput {
                amount: 1_000,
                input: SignatureInput::new((0..signatures).collect()),
            },
        }),
    }
}

pub fn auth(signatures: u32) -> Authorization {
    Authorization::Input(SignatureInput::new((0..signatures).collect()))
}

pub fn pop_signer() -> Signer {
    Signer::ProofOfPossession {
        public_key: BlsPublicKey::default(),
        signature: BlsSignature::default(),
    }
}

pub fn envelope() -> BaseTx {
    BaseTx {
        network_id: 1,
        blockchain_id: Id::default(),
        outputs: vec![transfer_out(1)],
        inputs: vec![transfer_in(1)],
        memo: Vec::new(),
    }
}

pub fn validator() -> Validator {
    Validator {
        node_id: NodeId::from([0x44; 20]),
        start_time: 1_700_000_000,
        end_time: 1_701_209_600,
        weight: 2_000_000_000_000,
    }
}

pub fn base_tx() -> Transaction {
    Transaction::Base(PlatformBaseTx {
        base_tx: envelope(),
    })
}

pub fn add_permissionless_validator_tx(signer: Signer) -> Transaction {
    Transaction::AddPermissionlessValidator(AddPermissionlessValidatorTx {
        base_tx: envelope(),
        validator: validator(),
        subnet_id: Id::default(),
        signer,
        stake: vec![locked_out(1)],
        validator_rewards_owner: owners(1),
        delegator_rewards_owner: owners(1),
        delegation_shares: 20_000,
    })
}

pub fn add_permissionless_delegator_tx() -> Transaction {
    Transaction::AddPermissionlessDelegator(AddPermissionlessDelegatorTx {
        base_tx: envelope(),
        validator: validator(),
        subnet_id: Id::default(),
        stake: vec![transfer_out(1)],
        delegator_rewards_owner: owners(1),
    })
}

pub fn add_subnet_validator_tx(subnet_auth: Authorization) -> Transaction {
    Transaction::AddSubnetValidator(AddSubnetValidatorTx {
        base_tx: envelope(),
        subnet_validator: SubnetValidator {
            validator: validator(),
            subnet_id: Id::from([0x55; 32]),
        },
        subnet_auth,
    })
}

pub fn create_chain_tx(fx_ids: usize, chain_name: &str, genesis_len: usize) -> Transaction {
    Transaction::CreateChain(CreateChainTx {
        base_tx: envelope(),
        subnet_id: Id::from([0x55; 32]),
        chain_name: chain_name.to_string(),
        vm_id: Id::from([0x66; 32]),
        fx_ids: (0..fx_ids).map(|i| Id::from([i as u8; 32])).collect(),
        genesis_data: vec![0xff; genesis_len],
        subnet_auth: auth(1),
    })
}

pub fn create_subnet_tx() -> Transaction {
    Transaction::CreateSubnet(CreateSubnetTx {
        base_tx: envelope(),
        owner: owners(1),
    })
}

pub fn export_tx() -> Transaction {
    Transaction::Export(ExportTx {
        base_tx: envelope(),
        destination_chain: Id::from([0x77; 32]),
        exported_outputs: vec![transfer_out(1)],
    })
}

pub fn import_tx() -> Transaction {
    Transaction::Import(ImportTx {
        base_tx: envelope(),
        source_chain: Id::from([0x77; 32]),
        imported_inputs: vec![transfer_in(1)],
    })
}

pub fn remove_subnet_validator_tx() -> Transaction {
    Transaction::RemoveSubnetValidator(RemoveSubnetValidatorTx {
        base_tx: envelope(),
        node_id: NodeId::from([0x44; 20]),
        subnet_id: Id::from([0x55; 32]),
        subnet_auth: auth(1),
    })
}

pub fn transfer_subnet_ownership_tx() -> Transaction {
    Transaction::TransferSubnetOwnership(TransferSubnetOwnershipTx {
        base_tx: envelope(),
        subnet_id: Id::from([0x55; 32]),
        subnet_auth: auth(1),
        owner: owners(1),
    })
}
