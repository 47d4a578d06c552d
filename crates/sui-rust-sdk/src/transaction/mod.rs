//! Transaction building and signing.
//!
//! This module provides the types and builders for constructing Sui
//! programmable transactions, wrapping them into signable transaction
//! data, and signing them under the transaction intent.
//!
//! # Overview
//!
//! - [`ProgrammableTransactionBuilder`] registers inputs (deduplicated) and
//!   appends commands that may read earlier commands' results.
//! - [`TransactionData`] / [`TransactionDataBuilder`] wrap the finished
//!   body with sender, gas payment, gas price and budget, and expiration.
//! - [`sign_transaction`] produces a [`SignedTransaction`] through a
//!   caller-supplied [`TransactionSigner`].
//!
//! # Example: Paying Several Recipients
//!
//! ```rust
//! use sui_rust_sdk::transaction::{ProgrammableTransactionBuilder, TransactionDataBuilder};
//! use sui_rust_sdk::types::{ObjectDigest, ObjectID, ObjectRef, SuiAddress};
//!
//! let sender = SuiAddress::from_hex("0xa11ce").unwrap();
//! let bob = SuiAddress::from_hex("0xb0b").unwrap();
//! let carol = SuiAddress::from_hex("0xca201").unwrap();
//! let gas = ObjectRef::new(ObjectID::from_u64(0x99), 7u64, ObjectDigest::default());
//!
//! let mut ptb = ProgrammableTransactionBuilder::new();
//! ptb.pay_sui(vec![bob, carol], vec![1_000, 2_000]).unwrap();
//!
//! let data = TransactionDataBuilder::new()
//!     .sender(sender)
//!     .programmable(ptb.finish())
//!     .gas_payment(vec![gas])
//!     .build()
//!     .unwrap();
//! let tx_bytes = data.to_base64().unwrap();
//! # assert!(!tx_bytes.is_empty());
//! ```
//!
//! # Example: Move Call
//!
//! ```rust
//! use sui_rust_sdk::transaction::{CallArg, ObjectArg, ProgrammableTransactionBuilder};
//! use sui_rust_sdk::types::{Identifier, ObjectID};
//!
//! let mut ptb = ProgrammableTransactionBuilder::new();
//! ptb.move_call(
//!     ObjectID::from_hex("0xcafe").unwrap(),
//!     Identifier::new("counter").unwrap(),
//!     Identifier::new("increment").unwrap(),
//!     vec![],
//!     vec![CallArg::Object(ObjectArg::shared(ObjectID::from_u64(0x10), 3u64, true))],
//! )
//! .unwrap();
//! let pt = ptb.finish();
//! assert_eq!(pt.inputs.len(), 1);
//! ```

pub mod argument;
pub mod builder;
pub mod command;
pub mod input_table;
pub mod intent;
pub mod stake;
pub mod types;

pub use argument::{Argument, BuilderArg, CallArg, ObjectArg};
pub use builder::ProgrammableTransactionBuilder;
pub use command::{Command, ProgrammableMoveCall};
pub use input_table::{Checkpoint, InputTable};
pub use intent::{
    AppId, Intent, IntentMessage, IntentScope, IntentVersion, SignedTransaction,
    TransactionSigner, sign_transaction,
};
pub use types::{
    GasData, ProgrammableTransaction, TransactionData, TransactionDataBuilder, TransactionDataV1,
    TransactionExpiration, TransactionKind,
};
