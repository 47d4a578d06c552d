//! Execution responses and the executor seam.
//!
//! The SDK does not talk to the network itself. It defines the response
//! shapes a fullnode returns and the [`TransactionExecutor`] trait a
//! transport implements.
//!
//! - [`TransactionBlockResponse`] - Result of executing a transaction
//! - [`DryRunTransactionBlockResponse`] - Result of simulating one
//! - [`sign_and_execute`] - Sign, submit, and check the status in one call

pub mod executor;
pub mod response;

pub use executor::{TransactionExecutor, dry_run_checked, sign_and_execute};
pub use response::{
    BalanceChange, DryRunTransactionBlockResponse, ExecutionStatus, GasCostSummary, ObjectChange,
    OwnedObjectRef, Owner, SuiObjectRef, TransactionBlockEffects, TransactionBlockEffectsV1,
    TransactionBlockResponse,
};
