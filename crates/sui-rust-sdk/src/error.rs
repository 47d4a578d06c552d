//! Error types for the Sui SDK.
//!
//! This module provides a unified error type [`SuiError`] covering every
//! failure that can occur while building, encoding, signing, or interpreting
//! the results of a transaction.

use std::fmt;
use thiserror::Error;

/// A specialized Result type for Sui SDK operations.
pub type SuiResult<T> = Result<T, SuiError>;

/// The main error type for the Sui SDK.
#[derive(Error, Debug)]
pub enum SuiError {
    /// Error occurred during BCS serialization/deserialization
    #[error("BCS error: {0}")]
    Bcs(String),

    /// Two registrations of the same object disagree about how it is used
    #[error("Incompatible argument: {0}")]
    IncompatibleArgument(String),

    /// Parallel recipient/amount lists have different lengths
    #[error(
        "recipients and amounts mismatch. Got {recipients} recipients but {amounts} amounts"
    )]
    LengthMismatch {
        /// Number of recipients supplied
        recipients: usize,
        /// Number of amounts supplied
        amounts: usize,
    },

    /// A required non-empty input list was empty
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// An internal builder invariant was broken
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Error occurred during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error occurred during hex encoding/decoding
    #[error("Hex error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Error occurred during base64 decoding
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Invalid address or object ID
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Invalid object or transaction digest
    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    /// Invalid type tag or identifier
    #[error("Invalid type tag: {0}")]
    InvalidTypeTag(String),

    /// Transaction building error
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// The external signer refused or failed to sign
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Transaction execution failed on chain
    #[error("Execution failed: {status}")]
    ExecutionFailed {
        /// The failure status reported by the execution engine
        status: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal SDK error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Any other error
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl SuiError {
    /// Creates a new BCS error
    pub fn bcs<E: fmt::Display>(err: E) -> Self {
        Self::Bcs(err.to_string())
    }

    /// Creates a new transaction error
    pub fn transaction<S: Into<String>>(msg: S) -> Self {
        Self::Transaction(msg.into())
    }

    /// Creates a new incompatible argument error
    pub fn incompatible<S: Into<String>>(msg: S) -> Self {
        Self::IncompatibleArgument(msg.into())
    }

    /// Returns true if this error came from the canonical codec
    pub fn is_codec_error(&self) -> bool {
        matches!(self, Self::Bcs(_))
    }

    /// Returns true if this is a conflicting object registration
    pub fn is_incompatible_argument(&self) -> bool {
        matches!(self, Self::IncompatibleArgument(_))
    }

    /// Returns true if the failure came from the remote execution engine.
    ///
    /// Builder errors are programmer errors and never succeed on retry; an
    /// execution failure may succeed after refreshing object versions.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ExecutionFailed { .. })
    }

    /// Returns the error message suitable for display to end users.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Bcs(_) => "Failed to process data",
            Self::IncompatibleArgument(_) => "Conflicting object arguments",
            Self::LengthMismatch { .. } => "Recipients and amounts do not match",
            Self::EmptyInput(_) => "Required input is empty",
            Self::InvariantViolation(_) => "Invalid transaction structure",
            Self::Json(_) => "Failed to process response",
            Self::Hex(_) => "Invalid hex format",
            Self::Base64(_) => "Invalid base64 format",
            Self::InvalidAddress(_) => "Invalid address",
            Self::InvalidDigest(_) => "Invalid digest",
            Self::InvalidTypeTag(_) => "Invalid type format",
            Self::Transaction(_) => "Transaction error",
            Self::Signing(_) => "Signing failed",
            Self::ExecutionFailed { .. } => "Transaction execution failed",
            Self::Config(_) => "Configuration error",
            Self::Internal(_) => "Internal error",
            Self::Other(_) => "An error occurred",
        }
    }
}
