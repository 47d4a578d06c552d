//! Object versions and references.

use crate::types::{ObjectDigest, ObjectID};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An object's version number.
///
/// Encoded as a little-endian `u64`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SequenceNumber(u64);

impl SequenceNumber {
    /// Creates a sequence number.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for SequenceNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reference to a specific version of an object: (id, version, digest).
///
/// Owned and immutable objects are always referenced this way, and gas
/// payment is a list of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    /// The object's identifier.
    pub object_id: ObjectID,
    /// The version being referenced.
    pub version: SequenceNumber,
    /// The digest of the object's contents at that version.
    pub digest: ObjectDigest,
}

impl ObjectRef {
    /// Creates a new object reference.
    pub fn new(object_id: ObjectID, version: impl Into<SequenceNumber>, digest: ObjectDigest) -> Self {
        Self {
            object_id,
            version: version.into(),
            digest,
        }
    }
}

impl From<(ObjectID, SequenceNumber, ObjectDigest)> for ObjectRef {
    fn from((object_id, version, digest): (ObjectID, SequenceNumber, ObjectDigest)) -> Self {
        Self {
            object_id,
            version,
            digest,
        }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.object_id.to_short_string(),
            self.version,
            self.digest
        )
    }
}
