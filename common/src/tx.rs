//! Platform chain transaction model
//!
//! Read-only view of already-constructed transactions. Byte-level (de)serialization lives
//! with the codec; these types only carry the shape needed to price a transaction.

use serde_with::{hex::Hex, serde_as};

use crate::{
    errors::{ComplexityError, TxDecodeError},
    BlsPublicKey, BlsSignature, Id, NodeId, Secp256k1Signature, ShortId,
};

/// Owners of an output: addresses plus the number of them that must sign
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOwners {
    #[serde(default)]
    pub locktime: u64,
    pub threshold: u32,
    pub addrs: Vec<ShortId>,
}

impl OutputOwners {
    pub fn new(locktime: u64, threshold: u32, addrs: Vec<ShortId>) -> Self {
        Self {
            locktime,
            threshold,
            addrs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferOutput {
    pub amount: u64,
    pub owners: OutputOwners,
}

/// Transfer output that cannot be spent before `locktime`, other than for staking
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeableLockOut {
    pub locktime: u64,
    pub transferable_out: TransferOutput,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintOutput {
    pub owners: OutputOwners,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Output {
    Transfer(TransferOutput),
    StakeableLock(StakeableLockOut),
    Mint(MintOutput),
}

impl Output {
    pub fn is_stakeable_lock(&self) -> bool {
        matches!(self, Output::StakeableLock(_))
    }

    /// Owners of the funds held by a plain or stake-locked transfer output.
    /// Mint outputs hold no funds and give `None`.
    pub fn owners(&self) -> Option<&OutputOwners> {
        match self {
            Output::Transfer(out) => Some(&out.owners),
            Output::StakeableLock(out) => Some(&out.transferable_out.owners),
            Output::Mint(_) => None,
        }
    }

    pub fn amount(&self) -> u64 {
        match self {
            Output::Transfer(out) => out.amount,
            Output::StakeableLock(out) => out.transferable_out.amount,
            Output::Mint(_) => 0,
        }
    }
}

/// Signature indices into the owners of the output being spent
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureInput {
    pub sig_indices: Vec<u32>,
}

impl SignatureInput {
    pub fn new(sig_indices: Vec<u32>) -> Self {
        Self { sig_indices }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferInput {
    pub amount: u64,
    pub input: SignatureInput,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeableLockIn {
    pub locktime: u64,
    pub transferable_in: TransferInput,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Input {
    Transfer(TransferInput),
    StakeableLock(StakeableLockIn),
}

impl Input {
    pub fn is_stakeable_lock(&self) -> bool {
        matches!(self, Input::StakeableLock(_))
    }

    /// Signature indices this input declares it needs
    pub fn sig_indices(&self) -> &[u32] {
        match self {
            Input::Transfer(input) => &input.input.sig_indices,
            Input::StakeableLock(input) => &input.transferable_in.input.sig_indices,
        }
    }

    pub fn amount(&self) -> u64 {
        match self {
            Input::Transfer(input) => input.amount,
            Input::StakeableLock(input) => input.transferable_in.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferableOutput {
    pub asset_id: Id,
    pub output: Output,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoId {
    pub tx_id: Id,
    pub output_index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferableInput {
    pub utxo_id: UtxoId,
    pub asset_id: Id,
    pub input: Input,
}

impl TransferableInput {
    pub fn sig_indices(&self) -> &[u32] {
        self.input.sig_indices()
    }
}

/// Unspent output, as consumed by spend calculation
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utxo {
    pub utxo_id: UtxoId,
    pub asset_id: Id,
    pub output: Output,
}

/// Credential carrying the signatures for one input
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Credential {
    pub signatures: Vec<Secp256k1Signature>,
}

/// Subnet authorization
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Authorization {
    /// Signature indices into the subnet owners
    Input(SignatureInput),
    Credential(Credential),
    #[serde(rename_all = "camelCase")]
    Unknown { type_id: u32 },
}

impl Authorization {
    pub fn shape(&self) -> String {
        match self {
            Authorization::Input(_) => "Input".to_string(),
            Authorization::Credential(_) => "Credential".to_string(),
            Authorization::Unknown { type_id } => format!("type ID {type_id}"),
        }
    }
}

/// BLS proof of possession of a validator key
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Signer {
    Empty,
    #[serde(rename_all = "camelCase")]
    ProofOfPossession {
        public_key: BlsPublicKey,
        signature: BlsSignature,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validator {
    pub node_id: NodeId,
    pub start_time: u64,
    pub end_time: u64,
    pub weight: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetValidator {
    pub validator: Validator,
    pub subnet_id: Id,
}

/// Envelope shared by every transaction kind
#[serde_as]
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseTx {
    pub network_id: u32,
    pub blockchain_id: Id,
    #[serde(default)]
    pub outputs: Vec<TransferableOutput>,
    #[serde(default)]
    pub inputs: Vec<TransferableInput>,
    #[serde_as(as = "Hex")]
    #[serde(default)]
    pub memo: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformBaseTx {
    pub base_tx: BaseTx,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPermissionlessValidatorTx {
    pub base_tx: BaseTx,
    pub validator: Validator,
    pub subnet_id: Id,
    pub signer: Signer,
    pub stake: Vec<TransferableOutput>,
    pub validator_rewards_owner: OutputOwners,
    pub delegator_rewards_owner: OutputOwners,
    pub delegation_shares: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPermissionlessDelegatorTx {
    pub base_tx: BaseTx,
    pub validator: Validator,
    pub subnet_id: Id,
    pub stake: Vec<TransferableOutput>,
    pub delegator_rewards_owner: OutputOwners,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSubnetValidatorTx {
    pub base_tx: BaseTx,
    pub subnet_validator: SubnetValidator,
    pub subnet_auth: Authorization,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChainTx {
    pub base_tx: BaseTx,
    pub subnet_id: Id,
    pub chain_name: String,
    pub vm_id: Id,
    #[serde(default)]
    pub fx_ids: Vec<Id>,
    #[serde_as(as = "Hex")]
    pub genesis_data: Vec<u8>,
    pub subnet_auth: Authorization,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubnetTx {
    pub base_tx: BaseTx,
    pub owner: OutputOwners,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTx {
    pub base_tx: BaseTx,
    pub destination_chain: Id,
    pub exported_outputs: Vec<TransferableOutput>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportTx {
    pub base_tx: BaseTx,
    pub source_chain: Id,
    pub imported_inputs: Vec<TransferableInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveSubnetValidatorTx {
    pub base_tx: BaseTx,
    pub node_id: NodeId,
    pub subnet_id: Id,
    pub subnet_auth: Authorization,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferSubnetOwnershipTx {
    pub base_tx: BaseTx,
    pub subnet_id: Id,
    pub subnet_auth: Authorization,
    pub owner: OutputOwners,
}

/// Platform chain transaction kinds that can be priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TxKind {
    Base,
    AddPermissionlessValidator,
    AddPermissionlessDelegator,
    AddSubnetValidator,
    CreateChain,
    CreateSubnet,
    Export,
    Import,
    RemoveSubnetValidator,
    TransferSubnetOwnership,
}

impl TxKind {
    /// Codec type ID of the unsigned transaction
    pub fn type_id(&self) -> u32 {
        match self {
            TxKind::AddSubnetValidator => 13,
            TxKind::CreateChain => 15,
            TxKind::CreateSubnet => 16,
            TxKind::Import => 17,
            TxKind::Export => 18,
            TxKind::RemoveSubnetValidator => 23,
            TxKind::AddPermissionlessValidator => 25,
            TxKind::AddPermissionlessDelegator => 26,
            TxKind::TransferSubnetOwnership => 33,
            TxKind::Base => 34,
        }
    }
}

impl TryFrom<u32> for TxKind {
    type Error = ComplexityError;

    fn try_from(type_id: u32) -> Result<Self, Self::Error> {
        match type_id {
            13 => Ok(TxKind::AddSubnetValidator),
            15 => Ok(TxKind::CreateChain),
            16 => Ok(TxKind::CreateSubnet),
            17 => Ok(TxKind::Import),
            18 => Ok(TxKind::Export),
            23 => Ok(TxKind::RemoveSubnetValidator),
            25 => Ok(TxKind::AddPermissionlessValidator),
            26 => Ok(TxKind::AddPermissionlessDelegator),
            33 => Ok(TxKind::TransferSubnetOwnership),
            34 => Ok(TxKind::Base),
            // Legacy validator/delegator, advance time, reward and transform subnet
            // transactions are not priced by complexity
            _ => Err(ComplexityError::UnsupportedTransactionKind { type_id }),
        }
    }
}

/// Unsigned platform chain transaction
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Transaction {
    Base(PlatformBaseTx),
    AddPermissionlessValidator(AddPermissionlessValidatorTx),
    AddPermissionlessDelegator(AddPermissionlessDelegatorTx),
    AddSubnetValidator(AddSubnetValidatorTx),
    CreateChain(CreateChainTx),
    CreateSubnet(CreateSubnetTx),
    Export(ExportTx),
    Import(ImportTx),
    RemoveSubnetValidator(RemoveSubnetValidatorTx),
    TransferSubnetOwnership(TransferSubnetOwnershipTx),
}

impl Transaction {
    pub fn kind(&self) -> TxKind {
        match self {
            Transaction::Base(_) => TxKind::Base,
            Transaction::AddPermissionlessValidator(_) => TxKind::AddPermissionlessValidator,
            Transaction::AddPermissionlessDelegator(_) => TxKind::AddPermissionlessDelegator,
            Transaction::AddSubnetValidator(_) => TxKind::AddSubnetValidator,
            Transaction::CreateChain(_) => TxKind::CreateChain,
            Transaction::CreateSubnet(_) => TxKind::CreateSubnet,
            Transaction::Export(_) => TxKind::Export,
            Transaction::Import(_) => TxKind::Import,
            Transaction::RemoveSubnetValidator(_) => TxKind::RemoveSubnetValidator,
            Transaction::TransferSubnetOwnership(_) => TxKind::TransferSubnetOwnership,
        }
    }

    pub fn base_tx(&self) -> &BaseTx {
        match self {
            Transaction::Base(tx) => &tx.base_tx,
            Transaction::AddPermissionlessValidator(tx) => &tx.base_tx,
            Transaction::AddPermissionlessDelegator(tx) => &tx.base_tx,
            Transaction::AddSubnetValidator(tx) => &tx.base_tx,
            Transaction::CreateChain(tx) => &tx.base_tx,
            Transaction::CreateSubnet(tx) => &tx.base_tx,
            Transaction::Export(tx) => &tx.base_tx,
            Transaction::Import(tx) => &tx.base_tx,
            Transaction::RemoveSubnetValidator(tx) => &tx.base_tx,
            Transaction::TransferSubnetOwnership(tx) => &tx.base_tx,
        }
    }

    /// Decode a JSON description of the form `{"typeId": n, ...fields}`.
    ///
    /// The type ID picks the variant; an ID outside the supported set fails with
    /// [`ComplexityError::UnsupportedTransactionKind`].
    pub fn from_json(value: serde_json::Value) -> Result<Transaction, TxDecodeError> {
        let type_id = value
            .get("typeId")
            .and_then(|v| v.as_u64())
            .and_then(|v| u32::try_from(v).ok())
            .ok_or(TxDecodeError::MissingTypeId)?;

        let tx = match TxKind::try_from(type_id)? {
            TxKind::Base => Transaction::Base(serde_json::from_value(value)?),
            TxKind::AddPermissionlessValidator => {
                Transaction::AddPermissionlessValidator(serde_json::from_value(value)?)
            }
            TxKind::AddPermissionlessDelegator => {
                Transaction::AddPermissionlessDelegator(serde_json::from_value(value)?)
            }
            TxKind::AddSubnetValidator => {
                Transaction::AddSubnetValidator(serde_json::from_value(value)?)
            }
            TxKind::CreateChain => Transaction::CreateChain(serde_json::from_value(value)?),
            TxKind::CreateSubnet => Transaction::CreateSubnet(serde_json::from_value(value)?),
            TxKind::Export => Transaction::Export(serde_json::from_value(value)?),
            TxKind::Import => Transaction::Import(serde_json::from_value(value)?),
            TxKind::RemoveSubnetValidator => {
                Transaction::RemoveSubnetValidator(serde_json::from_value(value)?)
            }
            TxKind::TransferSubnetOwnership => {
                Transaction::TransferSubnetOwnership(serde_json::from_value(value)?)
            }
        };
        Ok(tx)
    }
}
