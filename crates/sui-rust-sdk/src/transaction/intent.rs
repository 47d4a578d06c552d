//! Intent-scoped signing.
//!
//! A signature never covers raw transaction bytes. It covers an intent
//! message: a three-byte intent (scope, version, app) followed by the BCS
//! value, hashed with Blake2b-256. The intent keeps a signature made for one
//! purpose from being replayed as another.

use crate::codec;
use crate::error::{SuiError, SuiResult};
use crate::transaction::types::TransactionData;
use crate::types::{Digest, SuiAddress};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What kind of data a signature is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentScope {
    /// Transaction data (0).
    TransactionData,
    /// Transaction effects (1).
    TransactionEffects,
    /// Checkpoint summary (2).
    CheckpointSummary,
    /// An arbitrary personal message (3).
    PersonalMessage,
}

/// Intent format version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentVersion {
    /// Version 0.
    V0,
}

/// The application the intent targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppId {
    /// Sui (0).
    Sui,
    /// Narwhal (1).
    Narwhal,
    /// Consensus (2).
    Consensus,
}

/// The three-byte signing intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intent {
    /// What is being signed.
    pub scope: IntentScope,
    /// Intent format version.
    pub version: IntentVersion,
    /// Target application.
    pub app_id: AppId,
}

impl Intent {
    /// The intent for signing Sui transaction data: `[0, 0, 0]`.
    pub const fn sui_transaction() -> Self {
        Self {
            scope: IntentScope::TransactionData,
            version: IntentVersion::V0,
            app_id: AppId::Sui,
        }
    }

    /// The intent for signing a personal message: `[3, 0, 0]`.
    pub const fn personal_message() -> Self {
        Self {
            scope: IntentScope::PersonalMessage,
            version: IntentVersion::V0,
            app_id: AppId::Sui,
        }
    }

    /// Returns the intent's three wire bytes.
    pub fn to_bytes(&self) -> [u8; 3] {
        [self.scope as u8, self.version as u8, self.app_id as u8]
    }
}

/// A value paired with the intent it is signed under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentMessage<T> {
    /// The signing intent.
    pub intent: Intent,
    /// The value being signed.
    pub value: T,
}

impl<T: Serialize> IntentMessage<T> {
    /// Pairs `value` with `intent`.
    pub fn new(intent: Intent, value: T) -> Self {
        Self { intent, value }
    }

    /// Serializes to BCS bytes: intent bytes, then the value.
    ///
    /// # Errors
    ///
    /// Returns an error if BCS serialization fails.
    pub fn to_bcs(&self) -> SuiResult<Vec<u8>> {
        codec::to_bytes(self)
    }

    /// Computes the Blake2b-256 digest that is actually signed.
    ///
    /// # Errors
    ///
    /// Returns an error if BCS serialization fails.
    pub fn signing_digest(&self) -> SuiResult<Digest> {
        Ok(Digest::blake2b256(self.to_bcs()?))
    }
}

/// Something that can sign on behalf of an address.
///
/// Implementations hold or reach the key material; this crate never does.
pub trait TransactionSigner: Send + Sync {
    /// Returns the address this signer signs for.
    fn address(&self) -> SuiAddress;

    /// Signs `message`, the 32-byte signing digest of an intent message
    /// built under `intent`.
    ///
    /// The returned bytes are the serialized signature as the network
    /// expects it (scheme flag, signature, public key).
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::Signing`] if the key is unavailable or refuses.
    fn sign(&self, message: &[u8], intent: &Intent) -> SuiResult<Vec<u8>>;
}

/// Transaction data together with the signatures that authorize it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedTransaction {
    /// The signed data.
    pub data: TransactionData,
    /// One signature per required signer: the sender, plus the gas owner
    /// when the transaction is sponsored. Order is not significant; the
    /// network matches each signature to its signer.
    pub signatures: Vec<Vec<u8>>,
}

impl SignedTransaction {
    /// Pairs `data` with its signatures.
    pub fn new(data: TransactionData, signatures: Vec<Vec<u8>>) -> Self {
        Self { data, signatures }
    }

    /// Adds another required signer's signature.
    pub fn add_signature(&mut self, signature: Vec<u8>) {
        self.signatures.push(signature);
    }

    /// Returns the base64-encoded BCS transaction bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if BCS serialization fails.
    pub fn tx_bytes(&self) -> SuiResult<String> {
        self.data.to_base64()
    }

    /// Returns each signature base64-encoded.
    pub fn signatures_base64(&self) -> Vec<String> {
        self.signatures.iter().map(base64::encode).collect()
    }
}

/// Signs transaction data under the transaction intent.
///
/// # Errors
///
/// Returns [`SuiError::Signing`] if the signer is neither the sender nor the
/// gas owner, or if signing fails.
pub fn sign_transaction<S: TransactionSigner + ?Sized>(
    data: &TransactionData,
    signer: &S,
) -> SuiResult<SignedTransaction> {
    let signer_address = signer.address();
    if signer_address != data.sender() && signer_address != data.gas_owner() {
        return Err(SuiError::Signing(format!(
            "{signer_address} is neither the sender nor the gas owner"
        )));
    }

    let intent = Intent::sui_transaction();
    let digest = IntentMessage::new(intent, data).signing_digest()?;
    let signature = signer.sign(digest.as_bytes(), &intent)?;

    debug!(signer = %signer_address, "signed transaction");
    Ok(SignedTransaction::new(data.clone(), vec![signature]))
}
