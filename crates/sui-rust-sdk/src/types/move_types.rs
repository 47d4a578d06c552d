//! Move type tags.
//!
//! Type arguments of a move call are carried on the wire as [`TypeTag`]s.
//! They can be parsed from the familiar string syntax
//! (`0x2::coin::Coin<0x2::sui::SUI>`, `vector<u8>`) and print back the same
//! way, with addresses in their short form.

use crate::error::{SuiError, SuiResult};
use crate::types::SuiAddress;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length for type tag strings.
const MAX_TYPE_TAG_LENGTH: usize = 1024;

/// Maximum length for identifier strings.
const MAX_IDENTIFIER_LENGTH: usize = 128;

/// Maximum depth for nested type arguments (e.g. `vector<vector<...>>`).
const MAX_TYPE_NESTING_DEPTH: usize = 8;

/// A Move identifier (module name, function name, struct name).
///
/// Identifiers start with a letter or underscore and contain only ASCII
/// alphanumerics and underscores. On the wire they are plain BCS strings.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Creates a new identifier, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty, longer than 128 bytes,
    /// does not start with a letter or underscore, or contains any other
    /// character than alphanumerics and underscore. A lone `_` is rejected.
    pub fn new(s: impl Into<String>) -> SuiResult<Self> {
        let s = s.into();
        if s.len() > MAX_IDENTIFIER_LENGTH {
            return Err(SuiError::InvalidTypeTag(format!(
                "identifier too long: {} bytes (max {})",
                s.len(),
                MAX_IDENTIFIER_LENGTH
            )));
        }
        let Some(first) = s.chars().next() else {
            return Err(SuiError::InvalidTypeTag(
                "identifier cannot be empty".into(),
            ));
        };
        if !first.is_ascii_alphabetic() && first != '_' {
            return Err(SuiError::InvalidTypeTag(format!(
                "identifier must start with letter or underscore: {s}"
            )));
        }
        if s == "_" {
            return Err(SuiError::InvalidTypeTag(
                "identifier cannot be a single underscore".into(),
            ));
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(SuiError::InvalidTypeTag(format!(
                "identifier contains invalid characters: {s}"
            )));
        }
        Ok(Self(s))
    }

    /// Creates an identifier without validation, for compile-time constants.
    pub(crate) fn from_static(s: &'static str) -> Self {
        Self(s.to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Identifier {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = SuiError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

/// A struct tag identifies a specific struct type in Move.
///
/// Format: `address::module::StructName<TypeArg1, TypeArg2, ...>`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructTag {
    /// The address of the package that defines the struct.
    pub address: SuiAddress,
    /// The module name.
    pub module: Identifier,
    /// The struct name.
    pub name: Identifier,
    /// Type parameters (for generic structs).
    #[serde(default)]
    pub type_params: Vec<TypeTag>,
}

impl StructTag {
    /// Creates a new struct tag.
    pub fn new(
        address: SuiAddress,
        module: Identifier,
        name: Identifier,
        type_params: Vec<TypeTag>,
    ) -> Self {
        Self {
            address,
            module,
            name,
            type_params,
        }
    }

    /// `0x2::sui::SUI`, the native coin type.
    pub fn sui() -> Self {
        Self {
            address: SuiAddress::from_u64(2),
            module: Identifier::from_static("sui"),
            name: Identifier::from_static("SUI"),
            type_params: vec![],
        }
    }

    /// `0x2::coin::Coin<T>`.
    pub fn coin(coin_type: TypeTag) -> Self {
        Self {
            address: SuiAddress::from_u64(2),
            module: Identifier::from_static("coin"),
            name: Identifier::from_static("Coin"),
            type_params: vec![coin_type],
        }
    }

    /// `0x2::coin::Coin<0x2::sui::SUI>`, the type of the gas coin.
    pub fn gas_coin() -> Self {
        Self::coin(TypeTag::Struct(Box::new(Self::sui())))
    }

    /// `0x3::staking_pool::StakedSui`.
    pub fn staked_sui() -> Self {
        Self {
            address: SuiAddress::from_u64(3),
            module: Identifier::from_static("staking_pool"),
            name: Identifier::from_static("StakedSui"),
            type_params: vec![],
        }
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}::{}",
            self.address.to_short_string(),
            self.module,
            self.name
        )?;
        if !self.type_params.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.type_params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

impl FromStr for StructTag {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match TypeTag::from_str_strict(s)? {
            TypeTag::Struct(tag) => Ok(*tag),
            other => Err(SuiError::InvalidTypeTag(format!(
                "expected a struct type, got {other}"
            ))),
        }
    }
}

/// A Move type.
///
/// Variant order is part of the wire format:
/// Bool, U8, U64, U128, Address, Signer, Vector, Struct, U16, U32, U256.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// Boolean type (variant 0)
    Bool,
    /// 8-bit unsigned integer (variant 1)
    U8,
    /// 64-bit unsigned integer (variant 2)
    U64,
    /// 128-bit unsigned integer (variant 3)
    U128,
    /// Address type (variant 4)
    Address,
    /// Signer type (variant 5)
    Signer,
    /// Vector type with element type (variant 6)
    Vector(Box<TypeTag>),
    /// Struct type (variant 7)
    Struct(Box<StructTag>),
    /// 16-bit unsigned integer (variant 8)
    U16,
    /// 32-bit unsigned integer (variant 9)
    U32,
    /// 256-bit unsigned integer (variant 10)
    U256,
}

impl TypeTag {
    /// Creates a vector type tag with the given element type.
    pub fn vector(element: TypeTag) -> Self {
        Self::Vector(Box::new(element))
    }

    /// Creates a struct type tag.
    pub fn struct_tag(tag: StructTag) -> Self {
        Self::Struct(Box::new(tag))
    }

    /// Returns the `0x2::sui::SUI` type tag.
    pub fn sui() -> Self {
        Self::Struct(Box::new(StructTag::sui()))
    }

    /// Parses a type tag from a string.
    ///
    /// Supports primitives (`bool`, `u8` .. `u256`, `address`, `signer`),
    /// `vector<T>`, and struct types with or without type parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the string exceeds 1024 characters, nests more
    /// than 8 levels deep, or has invalid syntax in any component.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sui_rust_sdk::types::TypeTag;
    ///
    /// let tag = TypeTag::from_str_strict("0x2::coin::Coin<0x2::sui::SUI>").unwrap();
    /// assert_eq!(tag.to_string(), "0x2::coin::Coin<0x2::sui::SUI>");
    /// let tag = TypeTag::from_str_strict("vector<u8>").unwrap();
    /// assert_eq!(tag, TypeTag::vector(TypeTag::U8));
    /// ```
    pub fn from_str_strict(s: &str) -> SuiResult<Self> {
        let s = s.trim();
        if s.len() > MAX_TYPE_TAG_LENGTH {
            return Err(SuiError::InvalidTypeTag(format!(
                "type tag too long: {} bytes (max {})",
                s.len(),
                MAX_TYPE_TAG_LENGTH
            )));
        }
        Self::parse_with_depth(s, 0)
    }

    fn parse_with_depth(s: &str, depth: usize) -> SuiResult<Self> {
        if depth > MAX_TYPE_NESTING_DEPTH {
            return Err(SuiError::InvalidTypeTag(format!(
                "type tag nesting too deep: {depth} levels (max {MAX_TYPE_NESTING_DEPTH})"
            )));
        }

        match s {
            "bool" => return Ok(TypeTag::Bool),
            "u8" => return Ok(TypeTag::U8),
            "u16" => return Ok(TypeTag::U16),
            "u32" => return Ok(TypeTag::U32),
            "u64" => return Ok(TypeTag::U64),
            "u128" => return Ok(TypeTag::U128),
            "u256" => return Ok(TypeTag::U256),
            "address" => return Ok(TypeTag::Address),
            "signer" => return Ok(TypeTag::Signer),
            _ => {}
        }

        if s.starts_with("vector<") && s.ends_with('>') {
            let inner = s[7..s.len() - 1].trim();
            let inner_tag = Self::parse_with_depth(inner, depth + 1)?;
            return Ok(TypeTag::Vector(Box::new(inner_tag)));
        }

        Self::parse_struct_with_depth(s, depth)
    }

    fn parse_struct_with_depth(s: &str, depth: usize) -> SuiResult<Self> {
        let (base, params_str) = match s.find('<') {
            Some(idx) => {
                if !s.ends_with('>') {
                    return Err(SuiError::InvalidTypeTag(format!(
                        "malformed generic type: {s}"
                    )));
                }
                (&s[..idx], Some(&s[idx + 1..s.len() - 1]))
            }
            None => (s, None),
        };

        let parts: Vec<&str> = base.split("::").collect();
        if parts.len() != 3 {
            return Err(SuiError::InvalidTypeTag(format!(
                "invalid struct type format (expected address::module::name): {s}"
            )));
        }

        let address = SuiAddress::from_hex(parts[0].trim())
            .map_err(|e| SuiError::InvalidTypeTag(format!("{s}: {e}")))?;
        let module = Identifier::new(parts[1].trim())?;
        let name = Identifier::new(parts[2].trim())?;

        let type_params = match params_str {
            Some(params) => Self::parse_params_with_depth(params, depth)?,
            None => vec![],
        };

        Ok(TypeTag::Struct(Box::new(StructTag {
            address,
            module,
            name,
            type_params,
        })))
    }

    fn parse_params_with_depth(s: &str, depth: usize) -> SuiResult<Vec<TypeTag>> {
        if s.trim().is_empty() {
            return Ok(vec![]);
        }

        let mut result = Vec::new();
        let mut bracket_depth: i32 = 0;
        let mut start = 0;

        for (i, c) in s.char_indices() {
            match c {
                '<' => bracket_depth += 1,
                '>' => {
                    bracket_depth -= 1;
                    if bracket_depth < 0 {
                        return Err(SuiError::InvalidTypeTag(format!(
                            "unbalanced angle brackets: {s}"
                        )));
                    }
                }
                ',' if bracket_depth == 0 => {
                    result.push(Self::parse_with_depth(s[start..i].trim(), depth + 1)?);
                    start = i + 1;
                }
                _ => {}
            }
        }
        if bracket_depth != 0 {
            return Err(SuiError::InvalidTypeTag(format!(
                "unbalanced angle brackets: {s}"
            )));
        }

        result.push(Self::parse_with_depth(s[start..].trim(), depth + 1)?);
        Ok(result)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::U8 => write!(f, "u8"),
            TypeTag::U16 => write!(f, "u16"),
            TypeTag::U32 => write!(f, "u32"),
            TypeTag::U64 => write!(f, "u64"),
            TypeTag::U128 => write!(f, "u128"),
            TypeTag::U256 => write!(f, "u256"),
            TypeTag::Address => write!(f, "address"),
            TypeTag::Signer => write!(f, "signer"),
            TypeTag::Vector(inner) => write!(f, "vector<{inner}>"),
            TypeTag::Struct(tag) => write!(f, "{tag}"),
        }
    }
}

impl FromStr for TypeTag {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_strict(s)
    }
}

impl From<StructTag> for TypeTag {
    fn from(tag: StructTag) -> Self {
        Self::Struct(Box::new(tag))
    }
}
