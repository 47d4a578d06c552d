//! The programmable transaction builder.
//!
//! The builder owns a deduplicating input table and an ordered command
//! list. Each operation registers the inputs it needs, appends one or more
//! commands wired to those inputs and to earlier results, and hands back an
//! [`Argument`] for whatever the caller may want to use next.
//!
//! Every operation is all-or-nothing: if any step fails, the builder is left
//! exactly as it was before the call.

use crate::codec;
use crate::error::{SuiError, SuiResult};
use crate::transaction::argument::{Argument, BuilderArg, CallArg, ObjectArg};
use crate::transaction::command::{Command, ProgrammableMoveCall};
use crate::transaction::input_table::InputTable;
use crate::transaction::types::ProgrammableTransaction;
use crate::types::framework::SUI_FRAMEWORK_PACKAGE_ID;
use crate::types::{Identifier, ObjectID, ObjectRef, SuiAddress, TypeTag};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Builds a [`ProgrammableTransaction`].
///
/// # Example
///
/// ```rust
/// use sui_rust_sdk::transaction::{Command, ProgrammableTransactionBuilder};
/// use sui_rust_sdk::types::SuiAddress;
///
/// let alice = SuiAddress::from_hex("0xa11ce").unwrap();
/// let bob = SuiAddress::from_hex("0xb0b").unwrap();
///
/// let mut ptb = ProgrammableTransactionBuilder::new();
/// ptb.pay_sui(vec![alice, bob, alice], vec![10, 20, 30]).unwrap();
/// let pt = ptb.finish();
///
/// // one split, then one transfer per distinct recipient
/// assert_eq!(pt.commands.len(), 3);
/// assert!(matches!(pt.commands[0], Command::SplitCoins(_, ref amounts) if amounts.len() == 3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProgrammableTransactionBuilder {
    inputs: InputTable,
    commands: Vec<Command>,
}

impl ProgrammableTransactionBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct inputs registered so far.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Returns the number of commands appended so far.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Returns the inputs and commands accumulated so far without
    /// consuming the builder. Calling it twice with no mutation in between
    /// gives equal results.
    pub fn snapshot(&self) -> ProgrammableTransaction {
        ProgrammableTransaction {
            inputs: self.inputs.values().cloned().collect(),
            commands: self.commands.clone(),
        }
    }

    /// Consumes the builder and returns the finished transaction body.
    pub fn finish(self) -> ProgrammableTransaction {
        debug!(
            inputs = self.inputs.len(),
            commands = self.commands.len(),
            "finished programmable transaction"
        );
        ProgrammableTransaction {
            inputs: self.inputs.into_values(),
            commands: self.commands,
        }
    }

    /// Runs `f` against the builder, rolling back every change if it fails.
    pub(crate) fn atomically<T>(&mut self, f: impl FnOnce(&mut Self) -> SuiResult<T>) -> SuiResult<T> {
        let checkpoint = self.inputs.checkpoint();
        let commands = self.commands.len();
        let result = f(self);
        if result.is_ok() {
            self.inputs.commit(checkpoint);
        } else {
            self.inputs.rollback(checkpoint);
            self.commands.truncate(commands);
        }
        result
    }

    /// Stores `value` under `key`, refusing to open a slot past the `u16`
    /// index space. Existing keys can always be updated.
    fn insert_input(&mut self, key: BuilderArg, value: CallArg) -> SuiResult<Argument> {
        let len = self.inputs.len();
        if len > usize::from(u16::MAX) && self.inputs.get(&key).is_none() {
            return Err(SuiError::InvariantViolation(format!(
                "input index {len} exceeds u16"
            )));
        }
        let slot = self.inputs.insert(key, value);
        u16::try_from(slot)
            .map(Argument::Input)
            .map_err(|_| SuiError::InvariantViolation(format!("input index {slot} exceeds u16")))
    }

    // ---------------------------------------------------------------------
    // Inputs
    // ---------------------------------------------------------------------

    /// Registers already-encoded pure bytes.
    ///
    /// Unless `force_separate` is set, byte-identical values share a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the input table outgrows the `u16` index space.
    pub fn pure_bytes(&mut self, bytes: Vec<u8>, force_separate: bool) -> SuiResult<Argument> {
        let key = if force_separate {
            // the table only grows, so its length never repeats
            BuilderArg::ForcedNonUniquePure(self.inputs.len())
        } else {
            BuilderArg::Pure(bytes.clone())
        };
        self.insert_input(key, CallArg::Pure(bytes))
    }

    /// Encodes `value` and registers it as a pure input, sharing a slot
    /// with any byte-identical pure input.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be encoded.
    pub fn pure<T: Serialize>(&mut self, value: T) -> SuiResult<Argument> {
        let bytes = codec::to_bytes(&value)?;
        self.pure_bytes(bytes, false)
    }

    /// Encodes `value` and registers it in a new input slot, even if an
    /// identical value is already present.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be encoded.
    pub fn force_separate_pure<T: Serialize>(&mut self, value: T) -> SuiResult<Argument> {
        let bytes = codec::to_bytes(&value)?;
        self.pure_bytes(bytes, true)
    }

    /// Registers an object input.
    ///
    /// Registering the same object twice returns the same slot. Two shared
    /// registrations with the same initial version merge, and the merged
    /// entry is mutable if either asked for mutability. Any other pair must
    /// be identical.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::IncompatibleArgument`] when the new registration
    /// conflicts with the existing one.
    pub fn obj(&mut self, obj_arg: ObjectArg) -> SuiResult<Argument> {
        let id = obj_arg.id();
        let key = BuilderArg::Object(id);

        let merged = match self.inputs.get(&key) {
            None => obj_arg,
            Some((_, CallArg::Pure(_))) => {
                return Err(SuiError::InvariantViolation(format!(
                    "object {id} has a pure argument"
                )));
            }
            Some((_, CallArg::Object(old))) => Self::merge_object_args(id, old, obj_arg)?,
        };

        self.insert_input(key, CallArg::Object(merged))
    }

    fn merge_object_args(id: ObjectID, old: &ObjectArg, new: ObjectArg) -> SuiResult<ObjectArg> {
        match (old, new) {
            (
                ObjectArg::SharedObject {
                    id: old_id,
                    initial_shared_version: old_version,
                    mutable: old_mutable,
                },
                ObjectArg::SharedObject {
                    id: new_id,
                    initial_shared_version: new_version,
                    mutable: new_mutable,
                },
            ) if *old_version == new_version => {
                if *old_id != new_id || new_id != id {
                    return Err(SuiError::InvariantViolation(format!(
                        "object id {id} does not match call arg"
                    )));
                }
                let mutable = *old_mutable || new_mutable;
                if mutable != *old_mutable {
                    debug!(object_id = %id, "upgrading shared object to mutable");
                }
                Ok(ObjectArg::SharedObject {
                    id,
                    initial_shared_version: new_version,
                    mutable,
                })
            }
            (old, new) if *old == new => Ok(new),
            (old, new) => {
                warn!(object_id = %id, ?old, ?new, "rejecting incompatible object argument");
                Err(SuiError::incompatible(format!(
                    "mismatched object argument kind for object {id}. {old:?} is not compatible with {new:?}"
                )))
            }
        }
    }

    /// Registers an object sent to another object, to be received in this
    /// transaction.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::IncompatibleArgument`] if the object is already
    /// registered differently.
    pub fn receiving(&mut self, object_ref: ObjectRef) -> SuiResult<Argument> {
        self.obj(ObjectArg::Receiving(object_ref))
    }

    /// Registers a call argument, dispatching on whether it is pure or an
    /// object.
    ///
    /// # Errors
    ///
    /// Fails as [`pure_bytes`](Self::pure_bytes) or [`obj`](Self::obj) does.
    pub fn input(&mut self, call_arg: CallArg) -> SuiResult<Argument> {
        match call_arg {
            CallArg::Pure(bytes) => self.pure_bytes(bytes, false),
            CallArg::Object(obj_arg) => self.obj(obj_arg),
        }
    }

    // ---------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------

    /// Appends a command and returns a reference to its result.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::InvariantViolation`] if the command reads the
    /// result of itself or of a command that has not been appended yet.
    pub fn command(&mut self, command: Command) -> SuiResult<Argument> {
        let position = self.commands.len();
        let index = u16::try_from(position).map_err(|_| {
            SuiError::InvariantViolation(format!("command index {position} exceeds u16"))
        })?;
        if let Some(bad) = command
            .arguments()
            .into_iter()
            .find(|arg| arg.command_index().is_some_and(|i| i >= index))
        {
            return Err(SuiError::InvariantViolation(format!(
                "command {index} references {bad}, which is not an earlier command"
            )));
        }
        self.commands.push(command);
        Ok(Argument::Result(index))
    }

    /// Registers each object and builds a vector of them.
    ///
    /// # Errors
    ///
    /// Propagates the first registration failure; nothing is appended.
    pub fn make_obj_vec(&mut self, objs: impl IntoIterator<Item = ObjectArg>) -> SuiResult<Argument> {
        let objs: Vec<ObjectArg> = objs.into_iter().collect();
        self.atomically(|builder| {
            let args = objs
                .into_iter()
                .map(|obj| builder.obj(obj))
                .collect::<SuiResult<Vec<_>>>()?;
            builder.command(Command::MakeMoveVec(None, args))
        })
    }

    /// Resolves each call argument and appends a move call.
    ///
    /// # Errors
    ///
    /// Propagates the first argument registration failure; nothing is
    /// appended.
    pub fn move_call(
        &mut self,
        package: ObjectID,
        module: Identifier,
        function: Identifier,
        type_arguments: Vec<TypeTag>,
        call_args: Vec<CallArg>,
    ) -> SuiResult<Argument> {
        self.atomically(|builder| {
            let arguments = call_args
                .into_iter()
                .map(|arg| builder.input(arg))
                .collect::<SuiResult<Vec<_>>>()?;
            builder.programmable_move_call(package, module, function, type_arguments, arguments)
        })
    }

    /// Appends a move call over already-resolved arguments.
    ///
    /// # Errors
    ///
    /// Fails as [`command`](Self::command) does.
    pub fn programmable_move_call(
        &mut self,
        package: ObjectID,
        module: Identifier,
        function: Identifier,
        type_arguments: Vec<TypeTag>,
        arguments: Vec<Argument>,
    ) -> SuiResult<Argument> {
        self.command(Command::MoveCall(Box::new(ProgrammableMoveCall {
            package,
            module,
            function,
            type_arguments,
            arguments,
        })))
    }

    /// Sends the value behind `arg` to `recipient`.
    ///
    /// # Errors
    ///
    /// Fails as [`command`](Self::command) does.
    pub fn transfer_arg(&mut self, recipient: SuiAddress, arg: Argument) -> SuiResult<()> {
        self.transfer_args(recipient, vec![arg])
    }

    /// Sends the values behind `args` to `recipient` in one command.
    ///
    /// # Errors
    ///
    /// Fails as [`command`](Self::command) does.
    pub fn transfer_args(&mut self, recipient: SuiAddress, args: Vec<Argument>) -> SuiResult<()> {
        self.atomically(|builder| {
            let rec_arg = builder.pure(recipient)?;
            builder.command(Command::TransferObjects(args, rec_arg))?;
            Ok(())
        })
    }

    /// Transfers owned objects to `recipient` in one command.
    ///
    /// # Errors
    ///
    /// Propagates registration failures; nothing is appended.
    pub fn transfer_object(&mut self, recipient: SuiAddress, object_refs: Vec<ObjectRef>) -> SuiResult<()> {
        self.atomically(|builder| {
            let rec_arg = builder.pure(recipient)?;
            let obj_args = object_refs
                .into_iter()
                .map(|obj| builder.obj(ObjectArg::ImmOrOwnedObject(obj)))
                .collect::<SuiResult<Vec<_>>>()?;
            builder.command(Command::TransferObjects(obj_args, rec_arg))?;
            Ok(())
        })
    }

    /// Transfers SUI from the gas coin.
    ///
    /// With an amount, that much is split off the gas coin and sent;
    /// without one, the whole gas coin is sent.
    ///
    /// # Errors
    ///
    /// Only fails if the builder's index space is exhausted.
    pub fn transfer_sui(&mut self, recipient: SuiAddress, amount: Option<u64>) -> SuiResult<()> {
        self.atomically(|builder| {
            let rec_arg = builder.pure(recipient)?;
            let coin_arg = match amount {
                Some(amount) => {
                    let amt_arg = builder.pure(amount)?;
                    builder.command(Command::SplitCoins(Argument::GasCoin, vec![amt_arg]))?
                }
                None => Argument::GasCoin,
            };
            builder.command(Command::TransferObjects(vec![coin_arg], rec_arg))?;
            Ok(())
        })
    }

    /// Sends whatever is left of the gas coin to `recipient`. This must be
    /// the last use of the gas coin.
    ///
    /// # Errors
    ///
    /// Only fails if the builder's index space is exhausted.
    pub fn pay_all_sui(&mut self, recipient: SuiAddress) -> SuiResult<()> {
        self.transfer_arg(recipient, Argument::GasCoin)
    }

    /// Pays each recipient the matching amount out of the gas coin.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::LengthMismatch`] if the lists differ in length.
    pub fn pay_sui(&mut self, recipients: Vec<SuiAddress>, amounts: Vec<u64>) -> SuiResult<()> {
        self.atomically(|builder| builder.pay_impl(recipients, amounts, Argument::GasCoin))
    }

    /// Merges `coins` into the first one and pays each recipient the
    /// matching amount out of it.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::EmptyInput`] if `coins` is empty,
    /// [`SuiError::LengthMismatch`] if the lists differ in length, and
    /// [`SuiError::IncompatibleArgument`] if a coin conflicts with an
    /// existing registration. Nothing is appended on error.
    pub fn pay(
        &mut self,
        coins: Vec<ObjectRef>,
        recipients: Vec<SuiAddress>,
        amounts: Vec<u64>,
    ) -> SuiResult<()> {
        let mut coins = coins.into_iter();
        let Some(first) = coins.next() else {
            return Err(SuiError::EmptyInput("coins vector is empty".to_string()));
        };
        self.atomically(|builder| {
            let coin_arg = builder.obj(ObjectArg::ImmOrOwnedObject(first))?;
            let merge_args = coins
                .map(|coin| builder.obj(ObjectArg::ImmOrOwnedObject(coin)))
                .collect::<SuiResult<Vec<_>>>()?;
            if !merge_args.is_empty() {
                builder.command(Command::MergeCoins(coin_arg, merge_args))?;
            }
            builder.pay_impl(recipients, amounts, coin_arg)
        })
    }

    fn pay_impl(&mut self, recipients: Vec<SuiAddress>, amounts: Vec<u64>, coin: Argument) -> SuiResult<()> {
        if recipients.len() != amounts.len() {
            return Err(SuiError::LengthMismatch {
                recipients: recipients.len(),
                amounts: amounts.len(),
            });
        }
        if amounts.is_empty() {
            return Ok(());
        }
        if amounts.len() > usize::from(u16::MAX) {
            return Err(SuiError::InvariantViolation(format!(
                "cannot split a coin into {} parts",
                amounts.len()
            )));
        }

        // Shares per distinct recipient, in first-seen order.
        let mut order: Vec<SuiAddress> = Vec::new();
        let mut shares: HashMap<SuiAddress, Vec<u16>> = HashMap::new();
        let mut amt_args = Vec::with_capacity(amounts.len());
        for (i, (recipient, amount)) in (0u16..).zip(recipients.into_iter().zip(amounts)) {
            amt_args.push(self.pure(amount)?);
            shares
                .entry(recipient)
                .or_insert_with(|| {
                    order.push(recipient);
                    Vec::new()
                })
                .push(i);
        }

        let split = self.command(Command::SplitCoins(coin, amt_args))?;
        let Argument::Result(split_index) = split else {
            return Err(SuiError::Internal(
                "command should always give an Argument::Result".to_string(),
            ));
        };

        for recipient in order {
            let rec_arg = self.pure(recipient)?;
            let coins = shares
                .remove(&recipient)
                .unwrap_or_default()
                .into_iter()
                .map(|j| Argument::NestedResult(split_index, j))
                .collect();
            self.command(Command::TransferObjects(coins, rec_arg))?;
        }
        Ok(())
    }

    /// Splits `coin` into one new coin per amount and returns the split
    /// command's result.
    ///
    /// # Errors
    ///
    /// Fails as [`command`](Self::command) does.
    pub fn split_coins(&mut self, coin: Argument, amounts: Vec<u64>) -> SuiResult<Argument> {
        self.atomically(|builder| {
            let amt_args = amounts
                .into_iter()
                .map(|amount| builder.pure(amount))
                .collect::<SuiResult<Vec<_>>>()?;
            builder.command(Command::SplitCoins(coin, amt_args))
        })
    }

    /// Merges owned `coins` into `target`.
    ///
    /// # Errors
    ///
    /// Propagates registration failures; nothing is appended.
    pub fn merge_coins(&mut self, target: ObjectRef, coins: Vec<ObjectRef>) -> SuiResult<Argument> {
        self.atomically(|builder| {
            let target_arg = builder.obj(ObjectArg::ImmOrOwnedObject(target))?;
            let coin_args = coins
                .into_iter()
                .map(|coin| builder.obj(ObjectArg::ImmOrOwnedObject(coin)))
                .collect::<SuiResult<Vec<_>>>()?;
            builder.command(Command::MergeCoins(target_arg, coin_args))
        })
    }

    /// Publishes a package and returns its upgrade capability.
    ///
    /// # Errors
    ///
    /// Fails as [`command`](Self::command) does.
    pub fn publish_upgradeable(
        &mut self,
        modules: Vec<Vec<u8>>,
        dep_ids: Vec<ObjectID>,
    ) -> SuiResult<Argument> {
        self.command(Command::Publish(modules, dep_ids))
    }

    /// Publishes a package and immediately makes it immutable by consuming
    /// its upgrade capability.
    ///
    /// # Errors
    ///
    /// Fails as [`command`](Self::command) does.
    pub fn publish_immutable(&mut self, modules: Vec<Vec<u8>>, dep_ids: Vec<ObjectID>) -> SuiResult<()> {
        self.atomically(|builder| {
            let cap = builder.publish_upgradeable(modules, dep_ids)?;
            builder.programmable_move_call(
                SUI_FRAMEWORK_PACKAGE_ID,
                Identifier::from_static("package"),
                Identifier::from_static("make_immutable"),
                vec![],
                vec![cap],
            )?;
            Ok(())
        })
    }

    /// Upgrades `current_package` using an authorized upgrade ticket and
    /// returns the upgrade receipt.
    ///
    /// # Errors
    ///
    /// Fails as [`command`](Self::command) does.
    pub fn upgrade(
        &mut self,
        current_package: ObjectID,
        upgrade_ticket: Argument,
        transitive_deps: Vec<ObjectID>,
        modules: Vec<Vec<u8>>,
    ) -> SuiResult<Argument> {
        self.command(Command::Upgrade(
            modules,
            transitive_deps,
            current_package,
            upgrade_ticket,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ObjectDigest;

    fn addr(v: u64) -> SuiAddress {
        SuiAddress::from_u64(v)
    }

    fn coin(v: u64) -> ObjectRef {
        ObjectRef::new(ObjectID::from_u64(v), 1u64, ObjectDigest::new([v as u8; 32]))
    }

    #[test]
    fn test_pure_dedup() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let a = ptb.pure(10u64).unwrap();
        let b = ptb.pure(10u64).unwrap();
        let c = ptb.pure(11u64).unwrap();
        assert_eq!(a, Argument::Input(0));
        assert_eq!(a, b);
        assert_eq!(c, Argument::Input(1));
        assert_eq!(ptb.input_count(), 2);
    }

    #[test]
    fn test_force_separate_pure() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let a = ptb.force_separate_pure(10u64).unwrap();
        let b = ptb.force_separate_pure(10u64).unwrap();
        let c = ptb.pure(10u64).unwrap();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(ptb.input_count(), 3);

        let pt = ptb.finish();
        let expected = CallArg::Pure(10u64.to_le_bytes().to_vec());
        assert!(pt.inputs.iter().all(|input| input == &expected));
    }

    #[test]
    fn test_shared_object_mutability_merges() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let id = ObjectID::from_u64(0x77);
        let a = ptb.obj(ObjectArg::shared(id, 4u64, false)).unwrap();
        let b = ptb.obj(ObjectArg::shared(id, 4u64, true)).unwrap();
        let c = ptb.obj(ObjectArg::shared(id, 4u64, false)).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);

        let pt = ptb.finish();
        assert_eq!(pt.inputs, vec![CallArg::Object(ObjectArg::shared(id, 4u64, true))]);
    }

    #[test]
    fn test_shared_object_version_conflict() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let id = ObjectID::from_u64(0x77);
        ptb.obj(ObjectArg::shared(id, 4u64, false)).unwrap();
        let err = ptb.obj(ObjectArg::shared(id, 5u64, false)).unwrap_err();
        assert!(err.is_incompatible_argument());
    }

    #[test]
    fn test_owned_object_conflicts() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let first = coin(1);
        let stale = ObjectRef::new(first.object_id, 2u64, first.digest);

        assert_eq!(ptb.obj(ObjectArg::ImmOrOwnedObject(first)).unwrap(), Argument::Input(0));
        assert_eq!(ptb.obj(ObjectArg::ImmOrOwnedObject(first)).unwrap(), Argument::Input(0));

        let err = ptb.obj(ObjectArg::ImmOrOwnedObject(stale)).unwrap_err();
        assert!(err.is_incompatible_argument());

        let err = ptb.obj(ObjectArg::Receiving(first)).unwrap_err();
        assert!(err.is_incompatible_argument());

        let err = ptb.obj(ObjectArg::shared(first.object_id, 1u64, true)).unwrap_err();
        assert!(err.is_incompatible_argument());
        assert_eq!(ptb.input_count(), 1);
    }

    #[test]
    fn test_object_slot_holding_pure_is_invariant_violation() {
        let id = ObjectID::from_u64(3);
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.inputs.insert(BuilderArg::Object(id), CallArg::Pure(vec![0]));
        let err = ptb.obj(ObjectArg::shared(id, 1u64, false)).unwrap_err();
        assert!(matches!(err, SuiError::InvariantViolation(_)));
    }

    #[test]
    fn test_full_input_table_rejects_new_slots_without_inserting() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        for i in 0..=u64::from(u16::MAX) {
            ptb.pure(i).unwrap();
        }
        assert_eq!(ptb.input_count(), usize::from(u16::MAX) + 1);

        let err = ptb.pure(u64::MAX).unwrap_err();
        assert!(matches!(err, SuiError::InvariantViolation(_)));
        let err = ptb.force_separate_pure(0u64).unwrap_err();
        assert!(matches!(err, SuiError::InvariantViolation(_)));
        let err = ptb.obj(ObjectArg::ImmOrOwnedObject(coin(1))).unwrap_err();
        assert!(matches!(err, SuiError::InvariantViolation(_)));
        assert_eq!(ptb.input_count(), usize::from(u16::MAX) + 1);

        // Values already present still resolve to their slots.
        assert_eq!(ptb.pure(0u64).unwrap(), Argument::Input(0));
        assert_eq!(ptb.pure(u64::from(u16::MAX)).unwrap(), Argument::Input(u16::MAX));
    }

    #[test]
    fn test_failed_operation_undoes_shared_upgrade() {
        let shared_id = ObjectID::from_u64(0x51);
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.obj(ObjectArg::shared(shared_id, 2u64, false)).unwrap();
        ptb.obj(ObjectArg::ImmOrOwnedObject(coin(1))).unwrap();
        let before = ptb.snapshot();

        let stale = ObjectRef::new(ObjectID::from_u64(1), 9u64, ObjectDigest::new([1; 32]));
        let err = ptb
            .make_obj_vec([
                ObjectArg::shared(shared_id, 2u64, true),
                ObjectArg::ImmOrOwnedObject(coin(2)),
                ObjectArg::ImmOrOwnedObject(stale),
            ])
            .unwrap_err();
        assert!(err.is_incompatible_argument());
        assert_eq!(ptb.snapshot(), before);

        // The rolled-back slot is handed out again.
        assert_eq!(
            ptb.obj(ObjectArg::ImmOrOwnedObject(coin(3))).unwrap(),
            Argument::Input(2)
        );
    }

    #[test]
    fn test_input_dispatch() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let p = ptb.input(CallArg::Pure(vec![1, 2])).unwrap();
        let o = ptb.input(CallArg::SUI_SYSTEM_MUT).unwrap();
        assert_eq!(p, ptb.pure_bytes(vec![1, 2], false).unwrap());
        assert_eq!(o, ptb.obj(ObjectArg::sui_system_mut()).unwrap());
        assert_eq!(ptb.input_count(), 2);
    }

    #[test]
    fn test_command_returns_position() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let first = ptb.command(Command::SplitCoins(Argument::GasCoin, vec![])).unwrap();
        let second = ptb
            .command(Command::MergeCoins(Argument::GasCoin, vec![first]))
            .unwrap();
        assert_eq!(first, Argument::Result(0));
        assert_eq!(second, Argument::Result(1));
        assert_eq!(ptb.command_count(), 2);
    }

    #[test]
    fn test_command_rejects_forward_and_self_references() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let err = ptb
            .command(Command::TransferObjects(vec![Argument::Result(0)], Argument::Input(0)))
            .unwrap_err();
        assert!(matches!(err, SuiError::InvariantViolation(_)));

        ptb.command(Command::SplitCoins(Argument::GasCoin, vec![])).unwrap();
        let err = ptb
            .command(Command::MergeCoins(Argument::NestedResult(3, 0), vec![]))
            .unwrap_err();
        assert!(matches!(err, SuiError::InvariantViolation(_)));
        assert_eq!(ptb.command_count(), 1);
    }

    #[test]
    fn test_make_obj_vec() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let result = ptb
            .make_obj_vec([ObjectArg::ImmOrOwnedObject(coin(1)), ObjectArg::ImmOrOwnedObject(coin(2))])
            .unwrap();
        assert_eq!(result, Argument::Result(0));
        let pt = ptb.finish();
        assert_eq!(
            pt.commands,
            vec![Command::MakeMoveVec(None, vec![Argument::Input(0), Argument::Input(1)])]
        );
    }

    #[test]
    fn test_make_obj_vec_failure_appends_nothing() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let first = coin(1);
        let stale = ObjectRef::new(first.object_id, 9u64, first.digest);
        let err = ptb
            .make_obj_vec([
                ObjectArg::ImmOrOwnedObject(coin(2)),
                ObjectArg::ImmOrOwnedObject(first),
                ObjectArg::ImmOrOwnedObject(stale),
            ])
            .unwrap_err();
        assert!(err.is_incompatible_argument());
        assert_eq!(ptb.input_count(), 0);
        assert_eq!(ptb.command_count(), 0);
    }

    #[test]
    fn test_transfer_object() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.transfer_object(addr(0xb), vec![coin(1), coin(2)]).unwrap();
        let pt = ptb.finish();
        assert_eq!(pt.inputs[0], CallArg::Pure(addr(0xb).as_bytes().to_vec()));
        assert_eq!(
            pt.commands,
            vec![Command::TransferObjects(
                vec![Argument::Input(1), Argument::Input(2)],
                Argument::Input(0)
            )]
        );
    }

    #[test]
    fn test_transfer_sui_with_amount() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.transfer_sui(addr(0xb), Some(500)).unwrap();
        let pt = ptb.finish();
        assert_eq!(
            pt.inputs,
            vec![
                CallArg::Pure(addr(0xb).as_bytes().to_vec()),
                CallArg::Pure(500u64.to_le_bytes().to_vec()),
            ]
        );
        assert_eq!(
            pt.commands,
            vec![
                Command::SplitCoins(Argument::GasCoin, vec![Argument::Input(1)]),
                Command::TransferObjects(vec![Argument::Result(0)], Argument::Input(0)),
            ]
        );
    }

    #[test]
    fn test_transfer_sui_whole_gas_coin() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.transfer_sui(addr(0xb), None).unwrap();
        let pt = ptb.finish();
        assert_eq!(
            pt.commands,
            vec![Command::TransferObjects(vec![Argument::GasCoin], Argument::Input(0))]
        );
    }

    #[test]
    fn test_pay_all_sui() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.pay_all_sui(addr(0xb)).unwrap();
        let pt = ptb.finish();
        assert_eq!(pt.inputs.len(), 1);
        assert_eq!(
            pt.commands,
            vec![Command::TransferObjects(vec![Argument::GasCoin], Argument::Input(0))]
        );
    }

    #[test]
    fn test_pay_sui_groups_by_recipient() {
        let (a, b) = (addr(0xa), addr(0xb));
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.pay_sui(vec![a, b, a], vec![10, 20, 30]).unwrap();
        let pt = ptb.finish();

        assert_eq!(
            pt.inputs,
            vec![
                CallArg::Pure(10u64.to_le_bytes().to_vec()),
                CallArg::Pure(20u64.to_le_bytes().to_vec()),
                CallArg::Pure(30u64.to_le_bytes().to_vec()),
                CallArg::Pure(a.as_bytes().to_vec()),
                CallArg::Pure(b.as_bytes().to_vec()),
            ]
        );
        assert_eq!(
            pt.commands,
            vec![
                Command::SplitCoins(
                    Argument::GasCoin,
                    vec![Argument::Input(0), Argument::Input(1), Argument::Input(2)]
                ),
                Command::TransferObjects(
                    vec![Argument::NestedResult(0, 0), Argument::NestedResult(0, 2)],
                    Argument::Input(3)
                ),
                Command::TransferObjects(vec![Argument::NestedResult(0, 1)], Argument::Input(4)),
            ]
        );
    }

    #[test]
    fn test_pay_sui_duplicate_amounts_share_input() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.pay_sui(vec![addr(1), addr(2)], vec![5, 5]).unwrap();
        let pt = ptb.finish();
        assert_eq!(
            pt.commands[0],
            Command::SplitCoins(Argument::GasCoin, vec![Argument::Input(0), Argument::Input(0)])
        );
    }

    #[test]
    fn test_pay_sui_length_mismatch_and_empty() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let err = ptb.pay_sui(vec![addr(1)], vec![1, 2]).unwrap_err();
        assert!(matches!(
            err,
            SuiError::LengthMismatch {
                recipients: 1,
                amounts: 2
            }
        ));

        ptb.pay_sui(vec![], vec![]).unwrap();
        assert_eq!(ptb.input_count(), 0);
        assert_eq!(ptb.command_count(), 0);
    }

    #[test]
    fn test_pay_merges_extra_coins_first() {
        let (a, b) = (addr(0xa), addr(0xb));
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.pay(vec![coin(1), coin(2), coin(3)], vec![a, b], vec![5, 7]).unwrap();
        let pt = ptb.finish();

        assert_eq!(pt.commands.len(), 4);
        assert_eq!(
            pt.commands[0],
            Command::MergeCoins(Argument::Input(0), vec![Argument::Input(1), Argument::Input(2)])
        );
        assert_eq!(
            pt.commands[1],
            Command::SplitCoins(Argument::Input(0), vec![Argument::Input(3), Argument::Input(4)])
        );
        assert_eq!(
            pt.commands[2],
            Command::TransferObjects(vec![Argument::NestedResult(1, 0)], Argument::Input(5))
        );
        assert_eq!(
            pt.commands[3],
            Command::TransferObjects(vec![Argument::NestedResult(1, 1)], Argument::Input(6))
        );
    }

    #[test]
    fn test_pay_single_coin_skips_merge() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.pay(vec![coin(1)], vec![addr(0xa)], vec![5]).unwrap();
        let pt = ptb.finish();
        assert!(matches!(pt.commands[0], Command::SplitCoins(Argument::Input(0), _)));
        assert_eq!(pt.commands.len(), 2);
    }

    #[test]
    fn test_pay_errors_leave_builder_untouched() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let err = ptb.pay(vec![], vec![addr(1)], vec![1]).unwrap_err();
        assert!(matches!(err, SuiError::EmptyInput(_)));

        ptb.pure(99u64).unwrap();
        let before = ptb.snapshot();
        let err = ptb
            .pay(vec![coin(1), coin(2)], vec![addr(1), addr(2)], vec![1])
            .unwrap_err();
        assert!(matches!(err, SuiError::LengthMismatch { .. }));
        assert_eq!(ptb.snapshot(), before);
    }

    #[test]
    fn test_move_call() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let result = ptb
            .move_call(
                ObjectID::from_u64(0xcafe),
                Identifier::new("counter").unwrap(),
                Identifier::new("increment").unwrap(),
                vec![TypeTag::U64],
                vec![
                    CallArg::Object(ObjectArg::shared(ObjectID::from_u64(0x10), 3u64, true)),
                    CallArg::Pure(vec![1]),
                ],
            )
            .unwrap();
        assert_eq!(result, Argument::Result(0));

        let pt = ptb.finish();
        let Command::MoveCall(call) = &pt.commands[0] else {
            panic!("expected a move call");
        };
        assert_eq!(call.to_string(), "0xcafe::counter::increment<u64>");
        assert_eq!(call.arguments, vec![Argument::Input(0), Argument::Input(1)]);
    }

    #[test]
    fn test_split_and_merge_coins() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let split = ptb.split_coins(Argument::GasCoin, vec![1, 2]).unwrap();
        let merged = ptb.merge_coins(coin(1), vec![coin(2)]).unwrap();
        assert_eq!(split, Argument::Result(0));
        assert_eq!(merged, Argument::Result(1));

        let pt = ptb.finish();
        assert_eq!(
            pt.commands[1],
            Command::MergeCoins(Argument::Input(2), vec![Argument::Input(3)])
        );
    }

    #[test]
    fn test_publish_and_upgrade() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let cap = ptb
            .publish_upgradeable(vec![vec![0xa1, 0x1c]], vec![ObjectID::from_u64(1), ObjectID::from_u64(2)])
            .unwrap();
        ptb.transfer_arg(addr(0xa), cap).unwrap();
        ptb.publish_immutable(vec![vec![1]], vec![]).unwrap();
        let receipt = ptb
            .upgrade(ObjectID::from_u64(0xbeef), Argument::Result(0), vec![], vec![vec![2]])
            .unwrap();
        assert_eq!(receipt, Argument::Result(4));

        let pt = ptb.finish();
        assert_eq!(pt.commands.len(), 5);
        let Command::MoveCall(call) = &pt.commands[3] else {
            panic!("expected make_immutable");
        };
        assert_eq!(call.to_string(), "0x2::package::make_immutable");
        assert_eq!(call.arguments, vec![Argument::Result(2)]);
    }

    #[test]
    fn test_receiving() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        let arg = ptb.receiving(coin(4)).unwrap();
        assert_eq!(arg, Argument::Input(0));
        assert_eq!(ptb.snapshot().inputs, vec![CallArg::Object(ObjectArg::Receiving(coin(4)))]);
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut ptb = ProgrammableTransactionBuilder::new();
        ptb.pay_sui(vec![addr(1)], vec![3]).unwrap();
        let first = ptb.snapshot();
        let second = ptb.snapshot();
        assert_eq!(first, second);
        assert_eq!(ptb.finish(), first);
    }
}
