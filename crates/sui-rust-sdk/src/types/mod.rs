//! Core Sui types.
//!
//! This module contains the fundamental on-chain types the transaction
//! builder consumes: addresses and object IDs, digests, object references,
//! Move type tags, and well-known framework constants.

mod address;
mod digest;
pub mod framework;
mod move_types;
mod object;

pub use address::{ADDRESS_LENGTH, ObjectID, PackageID, SuiAddress};
pub use digest::{DIGEST_LENGTH, Digest, ObjectDigest, TransactionDigest};
pub use move_types::{Identifier, StructTag, TypeTag};
pub use object::{ObjectRef, SequenceNumber};
