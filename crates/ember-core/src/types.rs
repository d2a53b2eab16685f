//! Core protocol types: block hashes and checkpoint entries.
//!
//! Block hashes display in the conventional big-endian hex form used in
//! release notes and explorer URLs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HashParseError;

/// A 32-byte block hash.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// The zero hash (32 zero bytes).
    pub const ZERO: Self = Self([0u8; 32]);

    /// Create a Hash256 from a byte array.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Return the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if this is the zero hash.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parse a hash from 64 hex characters, with or without a `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`HashParseError`] on wrong length or non-hex characters.
    pub fn from_hex(s: &str) -> Result<Self, HashParseError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.len() != 64 {
            return Err(HashParseError::InvalidLength(s.len()));
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| {
            let bad = s.chars().find(|c| !c.is_ascii_hexdigit()).unwrap_or('?');
            HashParseError::InvalidCharacter(bad)
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for Hash256 {
    type Err = HashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A trusted (height, hash) anchor baked into the node.
///
/// Blocks claiming a checkpoint height with a different hash are rejected
/// by policy. Within a table, heights are unique and strictly ascending.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckpointEntry {
    /// Height the anchor applies to.
    pub height: u64,
    /// Expected block hash at that height.
    pub hash: Hash256,
}

impl CheckpointEntry {
    /// Create a checkpoint entry. Const so tables can live in static data.
    pub const fn new(height: u64, hash: Hash256) -> Self {
        Self { height, hash }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS_HEX: &str = "00000393a7de08ce23b3882ae7b5c1567e83bda4849ed24b52610a9b2541c6c9";

    // --- Hash256 ---

    #[test]
    fn hash256_zero_is_zero() {
        let h = Hash256::ZERO;
        assert!(h.is_zero());
        assert_eq!(h, Hash256::default());
    }

    #[test]
    fn hash256_nonzero_is_not_zero() {
        assert!(!Hash256([1; 32]).is_zero());
    }

    #[test]
    fn hash256_display_hex() {
        let h = Hash256([0xAB; 32]);
        let s = format!("{h}");
        assert_eq!(s.len(), 64);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(&s[0..2], "ab");
    }

    #[test]
    fn hash256_hex_round_trip() {
        let h = Hash256::from_hex(GENESIS_HEX).unwrap();
        assert_eq!(format!("{h}"), GENESIS_HEX);
        assert_eq!(h.as_bytes()[0..2], [0x00, 0x00]);
        assert_eq!(h.as_bytes()[31], 0xc9);
    }

    #[test]
    fn hash256_from_hex_accepts_0x_prefix() {
        let plain = Hash256::from_hex(GENESIS_HEX).unwrap();
        let prefixed = Hash256::from_hex(&format!("0x{GENESIS_HEX}")).unwrap();
        assert_eq!(plain, prefixed);
    }

    #[test]
    fn hash256_from_hex_rejects_bad_length() {
        assert_eq!(
            Hash256::from_hex("abcd"),
            Err(HashParseError::InvalidLength(4))
        );
        let long = "0".repeat(65);
        assert_eq!(
            Hash256::from_hex(&long),
            Err(HashParseError::InvalidLength(65))
        );
    }

    #[test]
    fn hash256_from_hex_rejects_bad_character() {
        let bad = format!("zz{}", &GENESIS_HEX[2..]);
        assert_eq!(
            Hash256::from_hex(&bad),
            Err(HashParseError::InvalidCharacter('z'))
        );
    }

    #[test]
    fn hash256_from_str_delegates() {
        let parsed: Hash256 = GENESIS_HEX.parse().unwrap();
        assert_eq!(parsed, Hash256::from_hex(GENESIS_HEX).unwrap());
    }

    #[test]
    fn hash256_serde_round_trip() {
        let h = Hash256([0x5A; 32]);
        let json = serde_json::to_string(&h).unwrap();
        let back: Hash256 = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }

    // --- CheckpointEntry ---

    #[test]
    fn checkpoint_entry_const_construction() {
        const ENTRY: CheckpointEntry = CheckpointEntry::new(42, Hash256([0xCC; 32]));
        assert_eq!(ENTRY.height, 42);
        assert_eq!(ENTRY.hash, Hash256([0xCC; 32]));
    }

    // --- properties ---

    proptest::proptest! {
        /// Display and from_hex round-trip for arbitrary hashes.
        #[test]
        fn hex_round_trips(bytes in proptest::array::uniform32(proptest::num::u8::ANY)) {
            let h = Hash256(bytes);
            let parsed = Hash256::from_hex(&format!("{h}")).unwrap();
            proptest::prop_assert_eq!(h, parsed);
        }
    }
}
