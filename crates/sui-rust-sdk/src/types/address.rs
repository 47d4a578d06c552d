//! Account addresses and object identifiers.
//!
//! Both are 32-byte values displayed as 64 hex characters with a `0x`
//! prefix, and both are encoded on the wire as 32 raw bytes with no length
//! prefix.

use crate::error::{SuiError, SuiResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of an address or object ID in bytes.
pub const ADDRESS_LENGTH: usize = 32;

/// Parses `0x`-prefixed or bare hex, zero-padding short forms on the left.
fn parse_hex_32(hex_str: &[u8]) -> SuiResult<[u8; ADDRESS_LENGTH]> {
    if hex_str.is_empty() {
        return Err(SuiError::InvalidAddress(
            "address cannot be empty".to_string(),
        ));
    }

    let hex_str = if hex_str.starts_with(b"0x") || hex_str.starts_with(b"0X") {
        &hex_str[2..]
    } else {
        hex_str
    };

    let hex_string =
        std::str::from_utf8(hex_str).map_err(|e| SuiError::InvalidAddress(e.to_string()))?;

    if hex_string.is_empty() {
        return Err(SuiError::InvalidAddress(
            "address must contain at least one hex digit".to_string(),
        ));
    }

    if hex_string.len() > ADDRESS_LENGTH * 2 {
        return Err(SuiError::InvalidAddress(format!(
            "address too long: {} characters (max {})",
            hex_string.len(),
            ADDRESS_LENGTH * 2
        )));
    }

    let padded = format!("{:0>64}", hex_string);
    let bytes = hex::decode(&padded)?;

    let mut address = [0u8; ADDRESS_LENGTH];
    address.copy_from_slice(&bytes);
    Ok(address)
}

fn copy_32(bytes: &[u8]) -> SuiResult<[u8; ADDRESS_LENGTH]> {
    if bytes.len() != ADDRESS_LENGTH {
        return Err(SuiError::InvalidAddress(format!(
            "expected {} bytes, got {}",
            ADDRESS_LENGTH,
            bytes.len()
        )));
    }
    let mut out = [0u8; ADDRESS_LENGTH];
    out.copy_from_slice(bytes);
    Ok(out)
}

const fn from_u64(value: u64) -> [u8; ADDRESS_LENGTH] {
    let mut bytes = [0u8; ADDRESS_LENGTH];
    let value_bytes = value.to_be_bytes();
    let mut i = 0;
    while i < 8 {
        bytes[ADDRESS_LENGTH - 8 + i] = value_bytes[i];
        i += 1;
    }
    bytes
}

fn short_hex(bytes: &[u8; ADDRESS_LENGTH]) -> String {
    let hex = hex::encode(bytes);
    let trimmed = hex.trim_start_matches('0');
    if trimmed.is_empty() {
        "0x0".to_string()
    } else {
        format!("0x{}", trimmed)
    }
}

fn serialize_32<S: Serializer>(bytes: &[u8; ADDRESS_LENGTH], serializer: S) -> Result<S::Ok, S::Error> {
    if serializer.is_human_readable() {
        serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
    } else {
        // Fixed-size array: each byte as a tuple element, no length prefix.
        use serde::ser::SerializeTuple;
        let mut tuple = serializer.serialize_tuple(ADDRESS_LENGTH)?;
        for byte in bytes {
            tuple.serialize_element(byte)?;
        }
        tuple.end()
    }
}

fn deserialize_32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; ADDRESS_LENGTH], D::Error> {
    if deserializer.is_human_readable() {
        let s = String::deserialize(deserializer)?;
        parse_hex_32(s.as_bytes()).map_err(serde::de::Error::custom)
    } else {
        <[u8; ADDRESS_LENGTH]>::deserialize(deserializer)
    }
}

/// A 32-byte Sui account address.
///
/// # Example
///
/// ```rust
/// use sui_rust_sdk::SuiAddress;
///
/// let addr = SuiAddress::from_hex("0x2").unwrap();
/// assert_eq!(addr.to_short_string(), "0x2");
/// assert_eq!(addr.to_string().len(), 66);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SuiAddress([u8; ADDRESS_LENGTH]);

impl SuiAddress {
    /// The "zero" address (all zeros).
    pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

    /// Creates an address from a byte array.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a small integer (e.g. `0x2`).
    pub const fn from_u64(value: u64) -> Self {
        Self(from_u64(value))
    }

    /// Creates an address from a hex string (with or without `0x` prefix).
    ///
    /// # Errors
    ///
    /// Returns an error for empty input, non-hex characters, or more than
    /// 64 hex digits.
    pub fn from_hex<T: AsRef<[u8]>>(hex_str: T) -> SuiResult<Self> {
        parse_hex_32(hex_str.as_ref()).map(Self)
    }

    /// Creates an address from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not exactly 32 bytes.
    pub fn from_bytes<T: AsRef<[u8]>>(bytes: T) -> SuiResult<Self> {
        copy_32(bytes.as_ref()).map(Self)
    }

    /// Returns the address as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the address as a byte array.
    pub fn to_bytes(&self) -> [u8; ADDRESS_LENGTH] {
        self.0
    }

    /// Returns the address as a hex string with `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Returns a short hex string, trimming leading zeros.
    pub fn to_short_string(&self) -> String {
        short_hex(&self.0)
    }

    /// Returns true if this is the zero address.
    pub fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }
}

impl Default for SuiAddress {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SuiAddress({})", self.to_short_string())
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for SuiAddress {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for SuiAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_32(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for SuiAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_32(deserializer).map(Self)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for SuiAddress {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<ObjectID> for SuiAddress {
    fn from(id: ObjectID) -> Self {
        Self(id.0)
    }
}

impl AsRef<[u8]> for SuiAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A 32-byte on-chain object identifier.
///
/// Package IDs are object IDs as well; [`PackageID`] is an alias.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectID([u8; ADDRESS_LENGTH]);

/// Packages are objects; their IDs share the representation.
pub type PackageID = ObjectID;

impl ObjectID {
    /// The "zero" object ID.
    pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

    /// Creates an object ID from a byte array.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Creates an object ID from a small integer (e.g. `0x5`).
    pub const fn from_u64(value: u64) -> Self {
        Self(from_u64(value))
    }

    /// Creates an object ID from a hex string (with or without `0x` prefix).
    ///
    /// # Errors
    ///
    /// Returns an error for empty input, non-hex characters, or more than
    /// 64 hex digits.
    pub fn from_hex<T: AsRef<[u8]>>(hex_str: T) -> SuiResult<Self> {
        parse_hex_32(hex_str.as_ref()).map(Self)
    }

    /// Creates an object ID from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not exactly 32 bytes.
    pub fn from_bytes<T: AsRef<[u8]>>(bytes: T) -> SuiResult<Self> {
        copy_32(bytes.as_ref()).map(Self)
    }

    /// Returns the object ID as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the object ID as a hex string with `0x` prefix.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Returns a short hex string, trimming leading zeros.
    pub fn to_short_string(&self) -> String {
        short_hex(&self.0)
    }
}

impl fmt::Debug for ObjectID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectID({})", self.to_short_string())
    }
}

impl fmt::Display for ObjectID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for ObjectID {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for ObjectID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_32(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for ObjectID {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_32(deserializer).map(Self)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for ObjectID {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<SuiAddress> for ObjectID {
    fn from(addr: SuiAddress) -> Self {
        Self(addr.0)
    }
}

impl AsRef<[u8]> for ObjectID {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
