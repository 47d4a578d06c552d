//! Canonical binary codec.
//!
//! Everything that goes on the wire is encoded with BCS: fixed-width
//! integers little-endian, fixed-size byte arrays verbatim, sequences and
//! byte strings prefixed by a ULEB128 length, options by a presence byte,
//! and enums by a ULEB128 variant index. Decoding is exact: truncated input,
//! unknown variant indices, and trailing bytes are all rejected.

use crate::error::{SuiError, SuiResult};
use serde::{Deserialize, Serialize};

/// Maximum container nesting accepted while decoding.
pub const MAX_CONTAINER_DEPTH: usize = 500;

/// Serializes a value to its canonical byte form.
///
/// # Errors
///
/// Returns [`SuiError::Bcs`] if the value contains something BCS cannot
/// express (e.g. a map with non-canonical ordering or a sequence longer
/// than 2^31 elements).
pub fn to_bytes<T>(value: &T) -> SuiResult<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    ::bcs::to_bytes(value).map_err(SuiError::bcs)
}

/// Deserializes a value from exactly `bytes`.
///
/// # Errors
///
/// Returns [`SuiError::Bcs`] when the input is truncated, contains an
/// out-of-range variant index or an invalid boolean, or has bytes left over
/// once the value is complete.
pub fn from_bytes<'a, T>(bytes: &'a [u8]) -> SuiResult<T>
where
    T: Deserialize<'a>,
{
    ::bcs::from_bytes_with_limit(bytes, MAX_CONTAINER_DEPTH).map_err(SuiError::bcs)
}

/// Returns the number of bytes `value` occupies once encoded.
///
/// # Errors
///
/// Fails under the same conditions as [`to_bytes`].
pub fn serialized_size<T>(value: &T) -> SuiResult<usize>
where
    T: Serialize + ?Sized,
{
    ::bcs::serialized_size(value).map_err(SuiError::bcs)
}

/// Serializes a value and renders the bytes as standard base64, the form
/// JSON-RPC endpoints accept for transaction bytes.
///
/// # Errors
///
/// Fails under the same conditions as [`to_bytes`].
pub fn to_base64<T>(value: &T) -> SuiResult<String>
where
    T: Serialize + ?Sized,
{
    Ok(base64::encode(to_bytes(value)?))
}

/// Decodes standard base64 and then deserializes exactly those bytes.
///
/// # Errors
///
/// Returns [`SuiError::Base64`] for malformed base64 and [`SuiError::Bcs`]
/// for malformed payloads.
pub fn from_base64<T>(encoded: &str) -> SuiResult<T>
where
    T: for<'de> Deserialize<'de>,
{
    let bytes = base64::decode(encoded)?;
    from_bytes(&bytes)
}
