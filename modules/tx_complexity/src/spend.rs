//! Working state of spend calculation
//!
//! Picking which UTXOs to consume is left to the steps a caller runs over this state. The
//! fee depends on the complexity of the very inputs and outputs chosen to pay it, so every
//! addition here recomputes the running complexity through the single-item calculators.

use std::collections::{BTreeMap, HashMap};

use dashu_int::UBig;
use platform_fee_common::{
    ComplexityError, Dimensions, FeeConfig, Id, ShortId, TransferableInput, TransferableOutput,
    Utxo,
};
use thiserror::Error;
use tracing::debug;

use crate::{
    complexity::{get_single_input_complexity, get_single_output_complexity},
    fee::calculate_fee,
};

/// Signature index of each address that signs for an input
pub type AddressMap = BTreeMap<ShortId, u32>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpendError {
    #[error("{0}")]
    Complexity(#[from] ComplexityError),

    #[error("Insufficient funds: {missing} more of asset {asset_id} needed")]
    Insufficient { asset_id: Id, missing: UBig },
}

pub type SpendCalcResult<T> = Result<T, SpendError>;

/// Caller-supplied spend configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpendOptions {
    pub fee: FeeConfig,
    pub change_addresses: Vec<ShortId>,
    pub threshold: u32,
    pub locktime: u64,
    pub memo: Vec<u8>,
}

/// Inputs and outputs produced by spend calculation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpendResult {
    pub inputs: Vec<TransferableInput>,
    pub input_utxos: Vec<Utxo>,
    pub stake_outputs: Vec<TransferableOutput>,
    pub change_outputs: Vec<TransferableOutput>,
    pub address_maps: Vec<AddressMap>,
}

#[derive(Debug, Clone)]
pub struct SpendState {
    pub result: SpendResult,

    /// Amounts per asset still owed to burn, fee excluded
    pub amounts_to_burn: HashMap<Id, UBig>,

    /// Amounts per asset still owed to stake
    pub amounts_to_stake: HashMap<Id, UBig>,

    /// Candidate UTXOs not yet consumed
    pub utxos: Vec<Utxo>,
    pub from_addresses: Vec<ShortId>,
    pub options: SpendOptions,

    /// Complexity of the transaction as built so far
    pub complexity: Dimensions,
}

/// One stage of spend calculation
pub type SpendStep = fn(SpendState) -> SpendCalcResult<SpendState>;

impl SpendState {
    /// `complexity` is that of the transaction before any spend inputs or outputs are added
    pub fn new(
        utxos: Vec<Utxo>,
        from_addresses: Vec<ShortId>,
        amounts_to_burn: HashMap<Id, UBig>,
        amounts_to_stake: HashMap<Id, UBig>,
        options: SpendOptions,
        complexity: Dimensions,
    ) -> Self {
        Self {
            result: SpendResult::default(),
            amounts_to_burn,
            amounts_to_stake,
            utxos,
            from_addresses,
            options,
            complexity,
        }
    }

    pub fn add_input(
        &mut self,
        input: TransferableInput,
        utxo: Utxo,
        address_map: AddressMap,
    ) -> SpendCalcResult<()> {
        self.complexity =
            self.complexity.checked_add(&get_single_input_complexity(&input)?)?;
        self.result.inputs.push(input);
        self.result.input_utxos.push(utxo);
        self.result.address_maps.push(address_map);
        Ok(())
    }

    pub fn add_change_output(&mut self, output: TransferableOutput) -> SpendCalcResult<()> {
        self.complexity =
            self.complexity.checked_add(&get_single_output_complexity(&output)?)?;
        self.result.change_outputs.push(output);
        Ok(())
    }

    pub fn add_stake_output(&mut self, output: TransferableOutput) -> SpendCalcResult<()> {
        self.complexity =
            self.complexity.checked_add(&get_single_output_complexity(&output)?)?;
        self.result.stake_outputs.push(output);
        Ok(())
    }

    /// Fee the transaction needs at its current complexity
    pub fn required_fee(&self) -> SpendCalcResult<UBig> {
        Ok(calculate_fee(&self.complexity, &self.options.fee)?)
    }

    /// Apply `available` of an asset to what is still owed, staking before burning.
    /// Returns what is left over for change.
    pub fn allocate(&mut self, asset_id: &Id, available: UBig) -> UBig {
        let mut remaining = available;
        for owed in [
            self.amounts_to_stake.get_mut(asset_id),
            self.amounts_to_burn.get_mut(asset_id),
        ]
        .into_iter()
        .flatten()
        {
            let used = if *owed < remaining {
                owed.clone()
            } else {
                remaining.clone()
            };
            *owed -= &used;
            remaining -= &used;
        }
        remaining
    }

    /// Fails on the first asset (in ID order) that is still owed
    pub fn verify_settled(&self) -> SpendCalcResult<()> {
        let mut owed: BTreeMap<Id, UBig> = BTreeMap::new();
        for (asset_id, amount) in self.amounts_to_stake.iter().chain(&self.amounts_to_burn) {
            *owed.entry(*asset_id).or_insert(UBig::ZERO) += amount;
        }

        match owed.into_iter().find(|(_, amount)| *amount != UBig::ZERO) {
            Some((asset_id, missing)) => Err(SpendError::Insufficient { asset_id, missing }),
            None => Ok(()),
        }
    }

    pub fn into_result(self) -> SpendResult {
        self.result
    }
}

/// Run each step in turn over the state
pub fn run_steps(state: SpendState, steps: &[SpendStep]) -> SpendCalcResult<SpendState> {
    steps.iter().try_fold(state, |state, step| {
        let state = step(state)?;
        debug!(
            "Spend step done: {} inputs, complexity {}",
            state.result.inputs.len(),
            state.complexity
        );
        Ok(state)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform_fee_common::{
        Input, Output, OutputOwners, SignatureInput, TransferInput, TransferOutput, UtxoId,
    };

    const AVAX: Id = Id([1; 32]);

    fn owner() -> ShortId {
        ShortId::from([9; 20])
    }

    fn utxo(amount: u64) -> Utxo {
        Utxo {
            utxo_id: UtxoId::default(),
            asset_id: AVAX,
            output: Output::Transfer(TransferOutput {
                amount,
                owners: OutputOwners::new(0, 1, vec![owner()]),
            }),
        }
    }

    fn spend(utxo: &Utxo) -> TransferableInput {
        TransferableInput {
            utxo_id: utxo.utxo_id,
            asset_id: utxo.asset_id,
            input: Input::Transfer(TransferInput {
                amount: utxo.output.amount(),
                input: SignatureInput::new(vec![0]),
            }),
        }
    }

    fn state(burn: u64, stake: u64) -> SpendState {
        SpendState::new(
            vec![utxo(1_000), utxo(5_000)],
            vec![owner()],
            HashMap::from([(AVAX, UBig::from(burn))]),
            HashMap::from([(AVAX, UBig::from(stake))]),
            SpendOptions {
                fee: FeeConfig {
                    weights: Dimensions::new(1, 0, 0, 0),
                    gas_price: 1,
                },
                ..SpendOptions::default()
            },
            Dimensions::bandwidth(58),
        )
    }

    fn consume_all(mut state: SpendState) -> SpendCalcResult<SpendState> {
        for utxo in std::mem::take(&mut state.utxos) {
            let input = spend(&utxo);
            let change = state.allocate(&utxo.asset_id, UBig::from(utxo.output.amount()));
            state.add_input(input, utxo, AddressMap::from([(owner(), 0)]))?;
            if change != UBig::ZERO {
                let amount = u64::try_from(&change).unwrap_or(u64::MAX);
                state.add_change_output(TransferableOutput {
                    asset_id: AVAX,
                    output: Output::Transfer(TransferOutput {
                        amount,
                        owners: OutputOwners::new(0, 1, vec![owner()]),
                    }),
                })?;
            }
        }
        Ok(state)
    }

    #[test]
    fn adding_input_updates_complexity_and_fee() {
        let mut state = state(0, 0);
        let utxo = utxo(10);
        state.add_input(spend(&utxo), utxo, AddressMap::new()).unwrap();
        assert_eq!(state.complexity, Dimensions::new(58 + 161, 1, 1, 0));
        assert_eq!(state.required_fee(), Ok(UBig::from(219u32)));
    }

    #[test]
    fn allocate_stakes_before_burning() {
        let mut state = state(300, 500);
        let change = state.allocate(&AVAX, UBig::from(600u32));
        assert_eq!(change, UBig::ZERO);
        assert_eq!(state.amounts_to_stake[&AVAX], UBig::ZERO);
        assert_eq!(state.amounts_to_burn[&AVAX], UBig::from(200u32));
        assert_eq!(
            state.verify_settled(),
            Err(SpendError::Insufficient {
                asset_id: AVAX,
                missing: UBig::from(200u32)
            })
        );
    }

    #[test]
    fn steps_run_in_order() {
        let state = run_steps(state(1_500, 2_000), &[consume_all]).unwrap();
        assert!(state.verify_settled().is_ok());
        assert!(state.utxos.is_empty());

        // 2 inputs at 161 each plus one change output at 80
        assert_eq!(state.complexity, Dimensions::new(58 + 2 * 161 + 80, 2, 3, 0));

        let result = state.into_result();
        assert_eq!(result.inputs.len(), 2);
        assert_eq!(result.change_outputs[0].output.amount(), 2_500);
    }

    #[test]
    fn allocate_ignores_assets_not_owed() {
        let mut state = state(10, 10);
        let other = Id::from([2; 32]);
        assert_eq!(state.allocate(&other, UBig::from(7u32)), UBig::from(7u32));
    }
}
