//! Object and transaction digests.
//!
//! A digest is a 32-byte Blake2b-256 value. Unlike addresses, digests are
//! encoded on the wire as a length-prefixed byte sequence (so the encoding
//! always starts with `0x20`) and are displayed in Base58.

use crate::error::{SuiError, SuiResult};
use blake2b_simd::Params;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of a digest in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// A raw 32-byte digest.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Digest([u8; DIGEST_LENGTH]);

impl Digest {
    /// The "zero" digest (all zeros).
    pub const ZERO: Self = Self([0u8; DIGEST_LENGTH]);

    /// Creates a digest from a byte array.
    pub const fn new(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Computes the Blake2b-256 hash of the given byte slices, in order.
    pub fn blake2b256_of<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        let mut state = Params::new().hash_length(DIGEST_LENGTH).to_state();
        for item in items {
            state.update(item.as_ref());
        }
        let mut bytes = [0u8; DIGEST_LENGTH];
        bytes.copy_from_slice(state.finalize().as_bytes());
        Self(bytes)
    }

    /// Computes the Blake2b-256 hash of `data`.
    pub fn blake2b256<T: AsRef<[u8]>>(data: T) -> Self {
        Self::blake2b256_of([data])
    }

    /// Creates a digest from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not exactly 32 bytes.
    pub fn from_bytes<T: AsRef<[u8]>>(bytes: T) -> SuiResult<Self> {
        let bytes = bytes.as_ref();
        if bytes.len() != DIGEST_LENGTH {
            return Err(SuiError::InvalidDigest(format!(
                "expected {} bytes, got {}",
                DIGEST_LENGTH,
                bytes.len()
            )));
        }
        let mut digest = [0u8; DIGEST_LENGTH];
        digest.copy_from_slice(bytes);
        Ok(Self(digest))
    }

    /// Parses a Base58 digest string.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid Base58 or a decoded length other than 32.
    pub fn from_base58(s: &str) -> SuiResult<Self> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| SuiError::InvalidDigest(e.to_string()))?;
        Self::from_bytes(bytes)
    }

    /// Returns the digest as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the Base58 rendering.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_base58())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl FromStr for Digest {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_base58())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Self::from_base58(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = Vec::<u8>::deserialize(deserializer)?;
            Self::from_bytes(bytes).map_err(serde::de::Error::custom)
        }
    }
}

impl From<[u8; DIGEST_LENGTH]> for Digest {
    fn from(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }
}

/// The digest of an object's contents at a specific version.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct ObjectDigest(Digest);

impl ObjectDigest {
    /// Creates an object digest from a byte array.
    pub const fn new(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(Digest::new(bytes))
    }

    /// Parses a Base58 object digest.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid Base58 or a decoded length other than 32.
    pub fn from_base58(s: &str) -> SuiResult<Self> {
        Digest::from_base58(s).map(Self)
    }

    /// Returns the underlying digest.
    pub fn inner(&self) -> &Digest {
        &self.0
    }
}

impl fmt::Debug for ObjectDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectDigest({})", self.0)
    }
}

impl fmt::Display for ObjectDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ObjectDigest {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

/// The digest identifying a transaction.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct TransactionDigest(Digest);

impl TransactionDigest {
    /// Creates a transaction digest from a byte array.
    pub const fn new(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(Digest::new(bytes))
    }

    /// Parses a Base58 transaction digest.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid Base58 or a decoded length other than 32.
    pub fn from_base58(s: &str) -> SuiResult<Self> {
        Digest::from_base58(s).map(Self)
    }

    /// Returns the underlying digest.
    pub fn inner(&self) -> &Digest {
        &self.0
    }
}

impl From<Digest> for TransactionDigest {
    fn from(digest: Digest) -> Self {
        Self(digest)
    }
}

impl fmt::Debug for TransactionDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransactionDigest({})", self.0)
    }
}

impl fmt::Display for TransactionDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TransactionDigest {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}
