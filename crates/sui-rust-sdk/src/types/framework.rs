//! Well-known on-chain packages, objects, and function names.

use crate::types::{ObjectID, SequenceNumber};

/// The Move standard library package (`0x1`).
pub const MOVE_STDLIB_PACKAGE_ID: ObjectID = ObjectID::from_u64(1);

/// The Sui framework package (`0x2`): coins, transfers, objects.
pub const SUI_FRAMEWORK_PACKAGE_ID: ObjectID = ObjectID::from_u64(2);

/// The Sui system package (`0x3`): validators and staking.
pub const SUI_SYSTEM_PACKAGE_ID: ObjectID = ObjectID::from_u64(3);

/// The shared system state object (`0x5`).
pub const SUI_SYSTEM_STATE_OBJECT_ID: ObjectID = ObjectID::from_u64(5);

/// The system state object was shared at genesis, version 1.
pub const SUI_SYSTEM_STATE_OBJECT_SHARED_VERSION: SequenceNumber = SequenceNumber::new(1);

/// The shared clock object (`0x6`).
pub const SUI_CLOCK_OBJECT_ID: ObjectID = ObjectID::from_u64(6);

/// The clock object was shared at genesis, version 1.
pub const SUI_CLOCK_OBJECT_SHARED_VERSION: SequenceNumber = SequenceNumber::new(1);

/// `0x3::sui_system`
pub const SUI_SYSTEM_MODULE_NAME: &str = "sui_system";

/// `0x3::sui_system::request_add_stake`
pub const ADD_STAKE_FUN_NAME: &str = "request_add_stake";

/// `0x3::sui_system::request_withdraw_stake`
pub const WITHDRAW_STAKE_FUN_NAME: &str = "request_withdraw_stake";

/// 1 SUI = 10^9 MIST.
pub const MIST_PER_SUI: u64 = 1_000_000_000;
