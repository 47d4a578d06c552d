//! Execution and dry-run response types.
//!
//! These model the JSON a fullnode returns after executing or simulating a
//! transaction. Only the parts the SDK interprets are typed; everything
//! else is skipped.

use crate::types::{ObjectDigest, ObjectID, ObjectRef, SequenceNumber, SuiAddress, TransactionDigest};
use serde::{Deserialize, Serialize};

/// Serde helpers for integers the RPC sends as decimal strings.
///
/// Accepts both `"123"` and `123` when reading; always writes a string.
pub(crate) mod decimal {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        String(String),
        Unsigned(u64),
        Signed(i64),
    }

    pub(crate) fn serialize<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub(crate) fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let text = match Raw::deserialize(deserializer)? {
            Raw::String(s) => s,
            Raw::Unsigned(n) => n.to_string(),
            Raw::Signed(n) => n.to_string(),
        };
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Who owns an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    /// Owned by an account.
    AddressOwner(SuiAddress),
    /// Owned by another object.
    ObjectOwner(SuiAddress),
    /// Shared, usable by anyone.
    Shared {
        /// The version at which the object became shared.
        #[serde(with = "decimal")]
        initial_shared_version: u64,
    },
    /// Frozen; readable by anyone, writable by no one.
    Immutable,
}

/// An object reference as the RPC renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiObjectRef {
    /// The object's identifier.
    pub object_id: ObjectID,
    /// The object's version.
    #[serde(with = "decimal")]
    pub version: u64,
    /// The object's digest.
    pub digest: ObjectDigest,
}

impl SuiObjectRef {
    /// Converts to the wire-level [`ObjectRef`].
    pub fn to_object_ref(&self) -> ObjectRef {
        ObjectRef::new(self.object_id, self.version, self.digest)
    }
}

/// An object reference paired with its owner after execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedObjectRef {
    /// The owner after execution.
    pub owner: Owner,
    /// The object reference after execution.
    pub reference: SuiObjectRef,
}

/// Whether execution succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExecutionStatus {
    /// Every command ran.
    Success,
    /// Execution aborted; only gas was charged.
    Failure {
        /// The abort reason.
        error: String,
    },
}

impl ExecutionStatus {
    /// Returns true on success.
    pub fn is_ok(&self) -> bool {
        matches!(self, ExecutionStatus::Success)
    }
}

/// Gas charged for a transaction, in MIST.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasCostSummary {
    /// Cost of computation.
    #[serde(with = "decimal")]
    pub computation_cost: u64,
    /// Cost of storage written.
    #[serde(with = "decimal")]
    pub storage_cost: u64,
    /// Refund for storage freed.
    #[serde(with = "decimal")]
    pub storage_rebate: u64,
    /// Part of the storage fee that is never refunded.
    #[serde(default, with = "decimal")]
    pub non_refundable_storage_fee: u64,
}

impl GasCostSummary {
    /// Computation plus storage minus rebate. Negative when the rebate
    /// outweighs the cost.
    pub fn net_gas_usage(&self) -> i64 {
        let cost = i128::from(self.computation_cost) + i128::from(self.storage_cost);
        let net = cost - i128::from(self.storage_rebate);
        i64::try_from(net).unwrap_or(if net < 0 { i64::MIN } else { i64::MAX })
    }

    /// Computation plus storage, ignoring the rebate.
    pub fn gas_used(&self) -> u64 {
        self.computation_cost.saturating_add(self.storage_cost)
    }
}

/// Version 1 of transaction effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlockEffectsV1 {
    /// The execution status.
    pub status: ExecutionStatus,
    /// The epoch the transaction executed in.
    #[serde(with = "decimal")]
    pub executed_epoch: u64,
    /// Gas charged.
    pub gas_used: GasCostSummary,
    /// The transaction's digest.
    pub transaction_digest: TransactionDigest,
    /// Objects created.
    #[serde(default)]
    pub created: Vec<OwnedObjectRef>,
    /// Objects mutated.
    #[serde(default)]
    pub mutated: Vec<OwnedObjectRef>,
    /// Objects deleted.
    #[serde(default)]
    pub deleted: Vec<SuiObjectRef>,
    /// The gas coin after execution.
    pub gas_object: OwnedObjectRef,
}

/// Transaction effects, tagged by message version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "messageVersion")]
pub enum TransactionBlockEffects {
    /// Version 1.
    #[serde(rename = "v1")]
    V1(TransactionBlockEffectsV1),
}

impl TransactionBlockEffects {
    fn v1(&self) -> &TransactionBlockEffectsV1 {
        match self {
            TransactionBlockEffects::V1(v1) => v1,
        }
    }

    /// Returns the execution status.
    pub fn status(&self) -> &ExecutionStatus {
        &self.v1().status
    }

    /// Returns true if execution succeeded.
    pub fn is_success(&self) -> bool {
        self.status().is_ok()
    }

    /// Returns the gas charged.
    pub fn gas_cost_summary(&self) -> &GasCostSummary {
        &self.v1().gas_used
    }

    /// Returns the created objects.
    pub fn created(&self) -> &[OwnedObjectRef] {
        &self.v1().created
    }

    /// Returns the mutated objects.
    pub fn mutated(&self) -> &[OwnedObjectRef] {
        &self.v1().mutated
    }

    /// Returns the gas coin after execution.
    pub fn gas_object(&self) -> &OwnedObjectRef {
        &self.v1().gas_object
    }
}

/// A change to an object, as reported with `showObjectChanges`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ObjectChange {
    /// A package was published.
    #[serde(rename_all = "camelCase")]
    Published {
        /// The new package's ID.
        package_id: ObjectID,
        /// The package version.
        #[serde(with = "decimal")]
        version: u64,
        /// The package digest.
        digest: ObjectDigest,
        /// The module names in the package.
        modules: Vec<String>,
    },
    /// An object was created.
    #[serde(rename_all = "camelCase")]
    Created {
        /// The transaction sender.
        sender: SuiAddress,
        /// The new owner.
        owner: Owner,
        /// The Move type of the object.
        object_type: String,
        /// The object's ID.
        object_id: ObjectID,
        /// The object's version.
        #[serde(with = "decimal")]
        version: u64,
        /// The object's digest.
        digest: ObjectDigest,
    },
    /// An object was modified.
    #[serde(rename_all = "camelCase")]
    Mutated {
        /// The transaction sender.
        sender: SuiAddress,
        /// The owner after execution.
        owner: Owner,
        /// The Move type of the object.
        object_type: String,
        /// The object's ID.
        object_id: ObjectID,
        /// The version after execution.
        #[serde(with = "decimal")]
        version: u64,
        /// The version before execution.
        #[serde(with = "decimal")]
        previous_version: u64,
        /// The digest after execution.
        digest: ObjectDigest,
    },
    /// An object was sent to a new owner.
    #[serde(rename_all = "camelCase")]
    Transferred {
        /// The transaction sender.
        sender: SuiAddress,
        /// The new owner.
        recipient: Owner,
        /// The Move type of the object.
        object_type: String,
        /// The object's ID.
        object_id: ObjectID,
        /// The version after execution.
        #[serde(with = "decimal")]
        version: u64,
        /// The digest after execution.
        digest: ObjectDigest,
    },
    /// An object was deleted.
    #[serde(rename_all = "camelCase")]
    Deleted {
        /// The transaction sender.
        sender: SuiAddress,
        /// The Move type of the object.
        object_type: String,
        /// The object's ID.
        object_id: ObjectID,
        /// The version at deletion.
        #[serde(with = "decimal")]
        version: u64,
    },
    /// An object was wrapped into another.
    #[serde(rename_all = "camelCase")]
    Wrapped {
        /// The transaction sender.
        sender: SuiAddress,
        /// The Move type of the object.
        object_type: String,
        /// The object's ID.
        object_id: ObjectID,
        /// The version at wrapping.
        #[serde(with = "decimal")]
        version: u64,
    },
}

impl ObjectChange {
    /// Returns the affected object's ID (the package ID for publishes).
    pub fn object_id(&self) -> ObjectID {
        match self {
            ObjectChange::Published { package_id, .. } => *package_id,
            ObjectChange::Created { object_id, .. }
            | ObjectChange::Mutated { object_id, .. }
            | ObjectChange::Transferred { object_id, .. }
            | ObjectChange::Deleted { object_id, .. }
            | ObjectChange::Wrapped { object_id, .. } => *object_id,
        }
    }

    /// Returns the object's Move type, if the change carries one.
    pub fn object_type(&self) -> Option<&str> {
        match self {
            ObjectChange::Published { .. } => None,
            ObjectChange::Created { object_type, .. }
            | ObjectChange::Mutated { object_type, .. }
            | ObjectChange::Transferred { object_type, .. }
            | ObjectChange::Deleted { object_type, .. }
            | ObjectChange::Wrapped { object_type, .. } => Some(object_type),
        }
    }
}

/// A change in an owner's balance of one coin type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceChange {
    /// Whose balance changed.
    pub owner: Owner,
    /// The coin type, e.g. `0x2::sui::SUI`.
    pub coin_type: String,
    /// The signed change in the smallest unit.
    #[serde(with = "decimal")]
    pub amount: i128,
}

/// Returns true if `object_type`'s base type is `<address>::module::name`.
fn type_matches(object_type: &str, module: &str, name: &str) -> bool {
    let base = object_type.split('<').next().unwrap_or(object_type);
    let mut parts = base.rsplitn(3, "::");
    parts.next() == Some(name) && parts.next() == Some(module) && parts.next().is_some()
}

/// The response to executing a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlockResponse {
    /// The transaction digest.
    pub digest: TransactionDigest,
    /// Effects, if requested.
    #[serde(default)]
    pub effects: Option<TransactionBlockEffects>,
    /// Object changes, if requested.
    #[serde(default)]
    pub object_changes: Option<Vec<ObjectChange>>,
    /// Balance changes, if requested.
    #[serde(default)]
    pub balance_changes: Option<Vec<BalanceChange>>,
    /// Checkpoint timestamp in milliseconds, once checkpointed.
    #[serde(default, with = "option_decimal")]
    pub timestamp_ms: Option<u64>,
    /// The checkpoint the transaction landed in.
    #[serde(default, with = "option_decimal")]
    pub checkpoint: Option<u64>,
    /// Errors the node reported while rendering the response.
    #[serde(default)]
    pub errors: Vec<String>,
}

impl TransactionBlockResponse {
    /// Returns true if effects were returned and report success.
    pub fn is_success(&self) -> bool {
        self.effects.as_ref().is_some_and(TransactionBlockEffects::is_success)
    }

    /// Returns the abort reason, if execution failed.
    pub fn status_error(&self) -> Option<&str> {
        match self.effects.as_ref()?.status() {
            ExecutionStatus::Failure { error } => Some(error),
            ExecutionStatus::Success => None,
        }
    }

    /// Returns the gas charged, if effects were returned.
    pub fn gas_cost_summary(&self) -> Option<&GasCostSummary> {
        self.effects.as_ref().map(TransactionBlockEffects::gas_cost_summary)
    }

    /// Returns the ID of the first package the transaction published.
    pub fn published_package_id(&self) -> Option<ObjectID> {
        self.object_changes.as_ref()?.iter().find_map(|change| match change {
            ObjectChange::Published { package_id, .. } => Some(*package_id),
            _ => None,
        })
    }

    /// Returns references to every object the transaction created.
    pub fn created_objects(&self) -> Vec<ObjectRef> {
        self.effects
            .as_ref()
            .map(|effects| {
                effects
                    .created()
                    .iter()
                    .map(|created| created.reference.to_object_ref())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Finds a created object whose type is `<any address>::module::name`,
    /// with any type parameters. Returns its ID, version, and full type.
    pub fn created_object_of_type(
        &self,
        module: &str,
        name: &str,
    ) -> Option<(ObjectID, SequenceNumber, &str)> {
        self.object_changes.as_ref()?.iter().find_map(|change| match change {
            ObjectChange::Created {
                object_type,
                object_id,
                version,
                ..
            } if type_matches(object_type, module, name) => {
                Some((*object_id, SequenceNumber::new(*version), object_type.as_str()))
            }
            _ => None,
        })
    }

    /// Returns the IDs of every object the transaction mutated.
    pub fn mutated_object_ids(&self) -> Vec<ObjectID> {
        self.effects
            .as_ref()
            .map(|effects| {
                effects
                    .mutated()
                    .iter()
                    .map(|mutated| mutated.reference.object_id)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// The response to simulating a transaction without committing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryRunTransactionBlockResponse {
    /// Simulated effects.
    pub effects: TransactionBlockEffects,
    /// Simulated object changes.
    #[serde(default)]
    pub object_changes: Vec<ObjectChange>,
    /// Simulated balance changes.
    #[serde(default)]
    pub balance_changes: Vec<BalanceChange>,
    /// Simulated events, untyped.
    #[serde(default)]
    pub events: Vec<serde_json::Value>,
}

impl DryRunTransactionBlockResponse {
    /// Returns true if the simulation succeeded.
    pub fn is_success(&self) -> bool {
        self.effects.is_success()
    }

    /// Returns the abort reason, if the simulation failed.
    pub fn status_error(&self) -> Option<&str> {
        match self.effects.status() {
            ExecutionStatus::Failure { error } => Some(error),
            ExecutionStatus::Success => None,
        }
    }

    /// Returns the simulated gas charge.
    pub fn gas_cost_summary(&self) -> &GasCostSummary {
        self.effects.gas_cost_summary()
    }
}

mod option_decimal {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    struct Wrapped(#[serde(with = "super::decimal")] u64);

    pub(crate) fn serialize<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(v)| v))
    }
}
