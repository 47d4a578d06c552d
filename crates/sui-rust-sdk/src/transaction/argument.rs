//! Arguments, inputs, and object arguments.
//!
//! [`CallArg`] is what a transaction declares as an input; [`Argument`] is
//! how a command refers to an input, the gas coin, or the result of an
//! earlier command. [`BuilderArg`] is the builder's deduplication key and
//! never reaches the wire.

use crate::types::framework::{SUI_SYSTEM_STATE_OBJECT_ID, SUI_SYSTEM_STATE_OBJECT_SHARED_VERSION};
use crate::types::{ObjectID, ObjectRef, SequenceNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value available to a command.
///
/// Variant order is part of the wire format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Argument {
    /// The gas coin. Only usable by reference in a move call, or by value
    /// in `TransferObjects`.
    GasCoin,
    /// One of the transaction's inputs.
    Input(u16),
    /// The result of the command at this index.
    Result(u16),
    /// One element of a tuple-valued command result:
    /// (command index, element index).
    NestedResult(u16, u16),
}

impl Argument {
    /// Returns the command index this argument reads from, if it reads a
    /// command result at all.
    pub fn command_index(&self) -> Option<u16> {
        match self {
            Argument::Result(i) | Argument::NestedResult(i, _) => Some(*i),
            Argument::GasCoin | Argument::Input(_) => None,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::GasCoin => write!(f, "GasCoin"),
            Argument::Input(i) => write!(f, "Input({i})"),
            Argument::Result(i) => write!(f, "Result({i})"),
            Argument::NestedResult(i, j) => write!(f, "NestedResult({i},{j})"),
        }
    }
}

/// How a transaction accesses an object input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectArg {
    /// An owned or immutable object, by exact reference.
    ImmOrOwnedObject(ObjectRef),
    /// A shared object. The version is assigned by consensus, so only the
    /// version at which it became shared is recorded.
    SharedObject {
        /// The object's identifier.
        id: ObjectID,
        /// The version at which the object became shared.
        initial_shared_version: SequenceNumber,
        /// Whether the transaction needs mutable access.
        mutable: bool,
    },
    /// An object sent to another object, received in this transaction.
    Receiving(ObjectRef),
}

impl ObjectArg {
    /// The system state object, mutably.
    pub const SUI_SYSTEM_MUT: Self = Self::SharedObject {
        id: SUI_SYSTEM_STATE_OBJECT_ID,
        initial_shared_version: SUI_SYSTEM_STATE_OBJECT_SHARED_VERSION,
        mutable: true,
    };

    /// Returns the system state object argument with mutable access.
    pub fn sui_system_mut() -> Self {
        Self::SUI_SYSTEM_MUT
    }

    /// Creates a shared object argument.
    pub fn shared(id: ObjectID, initial_shared_version: impl Into<SequenceNumber>, mutable: bool) -> Self {
        Self::SharedObject {
            id,
            initial_shared_version: initial_shared_version.into(),
            mutable,
        }
    }

    /// Returns the identifier of the referenced object.
    pub fn id(&self) -> ObjectID {
        match self {
            ObjectArg::ImmOrOwnedObject(obj) | ObjectArg::Receiving(obj) => obj.object_id,
            ObjectArg::SharedObject { id, .. } => *id,
        }
    }
}

/// A transaction input as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallArg {
    /// Already-encoded bytes of a primitive value.
    Pure(Vec<u8>),
    /// An object argument.
    Object(ObjectArg),
}

impl CallArg {
    /// The system state object, mutably.
    pub const SUI_SYSTEM_MUT: Self = Self::Object(ObjectArg::SUI_SYSTEM_MUT);
}

impl From<ObjectArg> for CallArg {
    fn from(arg: ObjectArg) -> Self {
        Self::Object(arg)
    }
}

/// The key the builder deduplicates inputs under.
///
/// Objects are keyed by ID alone so that conflicting uses of the same
/// object meet and can be merged or rejected. Pure values are keyed by
/// their encoded bytes. A forced-unique key carries an ordinal that no other
/// key in the same table shares.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BuilderArg {
    /// An object, by ID.
    Object(ObjectID),
    /// A pure value, by its encoded bytes.
    Pure(Vec<u8>),
    /// A pure value that must get its own input slot.
    ForcedNonUniquePure(usize),
}
