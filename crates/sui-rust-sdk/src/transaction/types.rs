//! Transaction types and the envelope assembler.

use crate::codec;
use crate::config::{DEFAULT_GAS_BUDGET, DEFAULT_GAS_PRICE, SuiConfig};
use crate::error::{SuiError, SuiResult};
use crate::transaction::argument::CallArg;
use crate::transaction::command::Command;
use crate::types::{Digest, ObjectRef, SuiAddress, TransactionDigest};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Domain separator hashed in front of the encoded data to form the digest.
const TRANSACTION_DATA_SALT: &[u8] = b"TransactionData::";

/// The finished output of the programmable transaction builder: inputs in
/// slot order and commands in execution order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgrammableTransaction {
    /// Inputs, referenced by `Argument::Input(i)`.
    pub inputs: Vec<CallArg>,
    /// Commands, referenced by `Argument::Result(i)` and
    /// `Argument::NestedResult(i, _)`.
    pub commands: Vec<Command>,
}

/// The kind of a transaction. Only user-submittable programmable
/// transactions are modeled.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// A programmable transaction (variant 0).
    ProgrammableTransaction(ProgrammableTransaction),
}

impl TransactionKind {
    /// Returns the programmable transaction.
    pub fn programmable(&self) -> &ProgrammableTransaction {
        match self {
            TransactionKind::ProgrammableTransaction(pt) => pt,
        }
    }
}

impl From<ProgrammableTransaction> for TransactionKind {
    fn from(pt: ProgrammableTransaction) -> Self {
        Self::ProgrammableTransaction(pt)
    }
}

/// Who pays for gas, with which coins, and how much.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GasData {
    /// Coins used to pay for gas. The first is the gas coin; the rest are
    /// merged into it before execution.
    pub payment: Vec<ObjectRef>,
    /// Owner of the gas coins. Differs from the sender for sponsored
    /// transactions.
    pub owner: SuiAddress,
    /// Gas price in MIST per unit.
    pub price: u64,
    /// Maximum gas the transaction may consume, in MIST.
    pub budget: u64,
}

/// When a transaction stops being valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionExpiration {
    /// Valid until executed.
    #[default]
    None,
    /// Valid only through the end of the given epoch.
    Epoch(u64),
}

/// Version 1 of the transaction data layout.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionDataV1 {
    /// What the transaction does.
    pub kind: TransactionKind,
    /// The sender.
    pub sender: SuiAddress,
    /// Gas payment, owner, price, and budget.
    pub gas_data: GasData,
    /// Expiration policy.
    pub expiration: TransactionExpiration,
}

/// The data a sender signs.
///
/// # Example
///
/// ```rust
/// use sui_rust_sdk::transaction::{ProgrammableTransactionBuilder, TransactionData};
/// use sui_rust_sdk::types::{ObjectDigest, ObjectID, ObjectRef, SuiAddress};
///
/// let sender = SuiAddress::from_hex("0xa11ce").unwrap();
/// let gas = ObjectRef::new(ObjectID::from_u64(0x99), 4u64, ObjectDigest::default());
///
/// let mut ptb = ProgrammableTransactionBuilder::new();
/// ptb.pay_all_sui(SuiAddress::from_hex("0xb0b").unwrap()).unwrap();
///
/// let data =
///     TransactionData::new_programmable(sender, vec![gas], ptb.finish(), 10_000_000, 1_000).unwrap();
/// assert_eq!(data.gas_owner(), sender);
/// let bytes = data.to_bcs().unwrap();
/// assert_eq!(TransactionData::from_bcs(&bytes).unwrap(), data);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionData {
    /// Variant 0.
    V1(TransactionDataV1),
}

impl TransactionData {
    /// Wraps a programmable transaction paid for by the sender.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::EmptyInput`] if `gas_payment` is empty.
    pub fn new_programmable(
        sender: SuiAddress,
        gas_payment: Vec<ObjectRef>,
        pt: ProgrammableTransaction,
        gas_budget: u64,
        gas_price: u64,
    ) -> SuiResult<Self> {
        Self::new_programmable_allow_sponsor(sender, gas_payment, pt, gas_budget, gas_price, sender)
    }

    /// Wraps a programmable transaction whose gas is paid by `sponsor`.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::EmptyInput`] if `gas_payment` is empty.
    pub fn new_programmable_allow_sponsor(
        sender: SuiAddress,
        gas_payment: Vec<ObjectRef>,
        pt: ProgrammableTransaction,
        gas_budget: u64,
        gas_price: u64,
        sponsor: SuiAddress,
    ) -> SuiResult<Self> {
        if gas_payment.is_empty() {
            return Err(SuiError::EmptyInput(
                "gas payment must contain at least one coin".to_string(),
            ));
        }
        Ok(Self::V1(TransactionDataV1 {
            kind: TransactionKind::ProgrammableTransaction(pt),
            sender,
            gas_data: GasData {
                payment: gas_payment,
                owner: sponsor,
                price: gas_price,
                budget: gas_budget,
            },
            expiration: TransactionExpiration::None,
        }))
    }

    fn v1(&self) -> &TransactionDataV1 {
        match self {
            TransactionData::V1(v1) => v1,
        }
    }

    /// Returns the sender.
    pub fn sender(&self) -> SuiAddress {
        self.v1().sender
    }

    /// Returns the gas owner (the sponsor, or the sender when unsponsored).
    pub fn gas_owner(&self) -> SuiAddress {
        self.v1().gas_data.owner
    }

    /// Returns true if someone other than the sender pays for gas.
    pub fn is_sponsored(&self) -> bool {
        self.gas_owner() != self.sender()
    }

    /// Returns the gas data.
    pub fn gas_data(&self) -> &GasData {
        &self.v1().gas_data
    }

    /// Returns the gas payment coins.
    pub fn gas(&self) -> &[ObjectRef] {
        &self.v1().gas_data.payment
    }

    /// Returns the gas budget in MIST.
    pub fn gas_budget(&self) -> u64 {
        self.v1().gas_data.budget
    }

    /// Returns the gas price in MIST per unit.
    pub fn gas_price(&self) -> u64 {
        self.v1().gas_data.price
    }

    /// Returns the transaction kind.
    pub fn kind(&self) -> &TransactionKind {
        &self.v1().kind
    }

    /// Returns the expiration policy.
    pub fn expiration(&self) -> TransactionExpiration {
        self.v1().expiration
    }

    /// Serializes this transaction data to BCS bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if BCS serialization fails.
    pub fn to_bcs(&self) -> SuiResult<Vec<u8>> {
        codec::to_bytes(self)
    }

    /// Deserializes transaction data from exactly `bytes`.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed, truncated, or over-long input.
    pub fn from_bcs(bytes: &[u8]) -> SuiResult<Self> {
        codec::from_bytes(bytes)
    }

    /// Serializes to BCS and encodes the bytes as base64.
    ///
    /// # Errors
    ///
    /// Returns an error if BCS serialization fails.
    pub fn to_base64(&self) -> SuiResult<String> {
        codec::to_base64(self)
    }

    /// Computes the transaction digest: Blake2b-256 over
    /// `"TransactionData::"` followed by the BCS bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if BCS serialization fails.
    pub fn digest(&self) -> SuiResult<TransactionDigest> {
        let bytes = self.to_bcs()?;
        Ok(Digest::blake2b256_of([TRANSACTION_DATA_SALT, bytes.as_slice()]).into())
    }
}

/// A builder for [`TransactionData`].
///
/// Defaults to no expiration, self-sponsorship, and the default gas
/// budget and price.
///
/// # Example
///
/// ```rust
/// use sui_rust_sdk::transaction::{ProgrammableTransactionBuilder, TransactionDataBuilder};
/// use sui_rust_sdk::types::{ObjectDigest, ObjectID, ObjectRef, SuiAddress};
///
/// let sender = SuiAddress::from_hex("0xa11ce").unwrap();
/// let mut ptb = ProgrammableTransactionBuilder::new();
/// ptb.transfer_sui(sender, Some(1_000)).unwrap();
///
/// let data = TransactionDataBuilder::new()
///     .sender(sender)
///     .programmable(ptb.finish())
///     .gas_payment(vec![ObjectRef::new(ObjectID::from_u64(0x99), 1u64, ObjectDigest::default())])
///     .gas_budget(5_000_000)
///     .build()
///     .unwrap();
/// assert_eq!(data.gas_budget(), 5_000_000);
/// ```
#[derive(Debug, Clone)]
pub struct TransactionDataBuilder {
    sender: Option<SuiAddress>,
    programmable: Option<ProgrammableTransaction>,
    gas_payment: Vec<ObjectRef>,
    gas_budget: u64,
    gas_price: u64,
    sponsor: Option<SuiAddress>,
    expiration: TransactionExpiration,
}

impl Default for TransactionDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionDataBuilder {
    /// Creates a new builder with default gas parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sender: None,
            programmable: None,
            gas_payment: Vec::new(),
            gas_budget: DEFAULT_GAS_BUDGET,
            gas_price: DEFAULT_GAS_PRICE,
            sponsor: None,
            expiration: TransactionExpiration::None,
        }
    }

    /// Creates a new builder seeded with the config's gas parameters.
    #[must_use]
    pub fn from_config(config: &SuiConfig) -> Self {
        Self::new()
            .gas_budget(config.gas_budget())
            .gas_price(config.gas_price())
    }

    /// Sets the sender address.
    #[must_use]
    pub fn sender(mut self, sender: SuiAddress) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Sets the programmable transaction to wrap.
    #[must_use]
    pub fn programmable(mut self, pt: ProgrammableTransaction) -> Self {
        self.programmable = Some(pt);
        self
    }

    /// Sets the gas payment coins.
    #[must_use]
    pub fn gas_payment(mut self, payment: Vec<ObjectRef>) -> Self {
        self.gas_payment = payment;
        self
    }

    /// Sets the gas budget in MIST.
    #[must_use]
    pub fn gas_budget(mut self, gas_budget: u64) -> Self {
        self.gas_budget = gas_budget;
        self
    }

    /// Sets the gas price in MIST per unit.
    #[must_use]
    pub fn gas_price(mut self, gas_price: u64) -> Self {
        self.gas_price = gas_price;
        self
    }

    /// Sets a sponsor to pay for gas. Defaults to the sender.
    #[must_use]
    pub fn sponsor(mut self, sponsor: SuiAddress) -> Self {
        self.sponsor = Some(sponsor);
        self
    }

    /// Makes the transaction expire at the end of `epoch`.
    #[must_use]
    pub fn expiration_epoch(mut self, epoch: u64) -> Self {
        self.expiration = TransactionExpiration::Epoch(epoch);
        self
    }

    /// Builds the transaction data.
    ///
    /// # Errors
    ///
    /// Returns an error if the sender or programmable transaction is
    /// missing, or if no gas payment coins were given.
    pub fn build(self) -> SuiResult<TransactionData> {
        let sender = self
            .sender
            .ok_or_else(|| SuiError::transaction("sender is required"))?;
        let pt = self
            .programmable
            .ok_or_else(|| SuiError::transaction("programmable transaction is required"))?;
        let gas_owner = self.sponsor.unwrap_or(sender);

        let mut data = TransactionData::new_programmable_allow_sponsor(
            sender,
            self.gas_payment,
            pt,
            self.gas_budget,
            self.gas_price,
            gas_owner,
        )?;
        let TransactionData::V1(v1) = &mut data;
        v1.expiration = self.expiration;

        debug!(
            sender = %sender,
            gas_owner = %gas_owner,
            inputs = v1.kind.programmable().inputs.len(),
            commands = v1.kind.programmable().commands.len(),
            gas_coins = v1.gas_data.payment.len(),
            gas_budget = v1.gas_data.budget,
            gas_price = v1.gas_data.price,
            "assembled transaction data"
        );
        Ok(data)
    }
}
