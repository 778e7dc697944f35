//! Opaque account identity.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwapError};

/// An opaque, chain-agnostic account handle (wallet, mint, fee account).
///
/// The engine never interprets the bytes; identities are only compared
/// for equality and ordered for canonical pair sorting.
///
/// # Examples
///
/// ```
/// use token_swap::domain::Identity;
///
/// let admin = Identity::from_bytes([7u8; 32]);
/// assert_eq!(admin.as_bytes(), [7u8; 32]);
/// assert_ne!(admin, Identity::zero());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity([u8; 32]);

impl Identity {
    /// Creates an `Identity` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// The all-zero identity.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Lowercase hex of the first four bytes, for log lines.
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl TryFrom<String> for Identity {
    type Error = SwapError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Identity> for String {
    fn from(value: Identity) -> Self {
        value.to_string()
    }
}

impl FromStr for Identity {
    type Err = SwapError;

    /// Parses 64 hex characters.
    fn from_str(s: &str) -> Result<Self> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| SwapError::Configuration(format!("invalid identity {s:?}: {e}")))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({}..)", self.short())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_full_hex() {
        let id = Identity::from_bytes([0xab; 32]);
        assert_eq!(id.to_string(), "ab".repeat(32));
    }

    #[test]
    fn debug_is_shortened() {
        let id = Identity::from_bytes([1; 32]);
        assert_eq!(format!("{id:?}"), "Identity(01010101..)");
    }

    #[test]
    fn parse_round_trip() {
        let id = Identity::from_bytes([0x5a; 32]);
        let parsed: Result<Identity> = id.to_string().parse();
        assert_eq!(parsed, Ok(id));
        assert!("zz".parse::<Identity>().is_err());
    }

    #[test]
    fn serde_as_hex_string() {
        let id = Identity::from_bytes([0x0f; 32]);
        let json = serde_json::to_string(&id).unwrap_or_default();
        assert_eq!(json, format!("\"{}\"", "0f".repeat(32)));
    }

    #[test]
    fn ordering_by_bytes() {
        assert!(Identity::from_bytes([1; 32]) < Identity::from_bytes([2; 32]));
    }
}
