//! # Sui Rust SDK
//!
//! Build, encode, and sign Sui programmable transactions.
//!
//! A programmable transaction is a list of deduplicated inputs followed by
//! commands that read those inputs, the gas coin, or earlier commands'
//! results. This crate assembles that structure, wraps it in gas and sender
//! metadata, and produces the exact BCS bytes the network verifies.
//!
//! ## Quick Start
//!
//! ```rust
//! use sui_rust_sdk::transaction::{ProgrammableTransactionBuilder, TransactionDataBuilder};
//! use sui_rust_sdk::types::{ObjectDigest, ObjectID, ObjectRef};
//! use sui_rust_sdk::{SuiAddress, SuiConfig};
//!
//! # fn main() -> sui_rust_sdk::SuiResult<()> {
//! let config = SuiConfig::testnet();
//! let sender = SuiAddress::from_hex("0xa11ce")?;
//! let recipient = SuiAddress::from_hex("0xb0b")?;
//! let gas = ObjectRef::new(ObjectID::from_u64(0x99), 4u64, ObjectDigest::default());
//!
//! let mut ptb = ProgrammableTransactionBuilder::new();
//! ptb.transfer_sui(recipient, Some(1_000_000))?;
//!
//! let data = TransactionDataBuilder::from_config(&config)
//!     .sender(sender)
//!     .programmable(ptb.finish())
//!     .gas_payment(vec![gas])
//!     .build()?;
//!
//! println!("digest: {}", data.digest()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`codec`] - Canonical BCS encoding
//! - [`types`] - Addresses, digests, object references, Move type tags
//! - [`transaction`] - The builder, transaction envelope, and signing
//! - [`api`] - Execution responses and the executor trait
//! - [`config`] - Network presets and gas defaults

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod api;
pub mod codec;
pub mod config;
pub mod error;
pub mod transaction;
pub mod types;

pub use config::{Network, SuiConfig};
pub use error::{SuiError, SuiResult};

pub use types::{ObjectID, ObjectRef, SuiAddress, TypeTag};
