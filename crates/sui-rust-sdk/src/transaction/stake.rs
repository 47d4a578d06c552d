//! Staking transactions.
//!
//! Staking goes through `0x3::sui_system`, which takes the shared system
//! state object mutably.

use crate::error::SuiResult;
use crate::transaction::argument::{Argument, ObjectArg};
use crate::transaction::builder::ProgrammableTransactionBuilder;
use crate::transaction::command::Command;
use crate::transaction::types::TransactionData;
use crate::types::framework::{
    ADD_STAKE_FUN_NAME, SUI_SYSTEM_MODULE_NAME, SUI_SYSTEM_PACKAGE_ID, WITHDRAW_STAKE_FUN_NAME,
};
use crate::types::{Identifier, ObjectRef, SuiAddress};

impl ProgrammableTransactionBuilder {
    /// Splits `amount` off the gas coin and stakes it with `validator`.
    ///
    /// # Errors
    ///
    /// Returns an error if the system state object was already registered
    /// with a conflicting argument.
    pub fn request_add_stake(&mut self, amount: u64, validator: SuiAddress) -> SuiResult<Argument> {
        self.atomically(|builder| {
            let amt_arg = builder.pure(amount)?;
            let system = builder.obj(ObjectArg::SUI_SYSTEM_MUT)?;
            let coin = builder.command(Command::SplitCoins(Argument::GasCoin, vec![amt_arg]))?;
            let validator_arg = builder.pure(validator)?;
            builder.programmable_move_call(
                SUI_SYSTEM_PACKAGE_ID,
                Identifier::from_static(SUI_SYSTEM_MODULE_NAME),
                Identifier::from_static(ADD_STAKE_FUN_NAME),
                vec![],
                vec![system, coin, validator_arg],
            )
        })
    }

    /// Withdraws the stake held by the `StakedSui` object `staked_sui`.
    ///
    /// # Errors
    ///
    /// Returns an error if either object was already registered with a
    /// conflicting argument.
    pub fn request_withdraw_stake(&mut self, staked_sui: ObjectRef) -> SuiResult<Argument> {
        self.atomically(|builder| {
            let system = builder.obj(ObjectArg::SUI_SYSTEM_MUT)?;
            let staked = builder.obj(ObjectArg::ImmOrOwnedObject(staked_sui))?;
            builder.programmable_move_call(
                SUI_SYSTEM_PACKAGE_ID,
                Identifier::from_static(SUI_SYSTEM_MODULE_NAME),
                Identifier::from_static(WITHDRAW_STAKE_FUN_NAME),
                vec![],
                vec![system, staked],
            )
        })
    }
}

/// Builds a transaction that stakes `amount` MIST from the gas coin with
/// `validator`, paying gas with `coins`.
///
/// # Errors
///
/// Returns [`SuiError::EmptyInput`](crate::error::SuiError::EmptyInput) if
/// `coins` is empty.
pub fn request_add_stake(
    sender: SuiAddress,
    coins: Vec<ObjectRef>,
    amount: u64,
    validator: SuiAddress,
    gas_budget: u64,
    gas_price: u64,
) -> SuiResult<TransactionData> {
    let mut ptb = ProgrammableTransactionBuilder::new();
    ptb.request_add_stake(amount, validator)?;
    TransactionData::new_programmable(sender, coins, ptb.finish(), gas_budget, gas_price)
}

/// Builds a transaction that withdraws the stake in `staked_sui`, paying
/// gas with `gas`.
///
/// # Errors
///
/// Returns [`SuiError::EmptyInput`](crate::error::SuiError::EmptyInput) if
/// `gas` is empty.
pub fn request_withdraw_stake(
    sender: SuiAddress,
    staked_sui: ObjectRef,
    gas: Vec<ObjectRef>,
    gas_budget: u64,
    gas_price: u64,
) -> SuiResult<TransactionData> {
    let mut ptb = ProgrammableTransactionBuilder::new();
    ptb.request_withdraw_stake(staked_sui)?;
    TransactionData::new_programmable(sender, gas, ptb.finish(), gas_budget, gas_price)
}
