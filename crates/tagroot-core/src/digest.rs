//! # Digest32 — Fixed-Length Tree Hashes
//!
//! Every node of a tagroot tree, including the root, is a 32-byte SHA-256
//! output. Externally a digest is always a 64-character lowercase hex
//! string; that rendering is also what branch hashing consumes, so
//! [`Digest32::to_hex`] is part of the hashing contract and must never change
//! case or padding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MerkleError;

/// Length of a digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// A 32-byte tagged SHA-256 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest32([u8; DIGEST_LEN]);

impl Digest32 {
    /// Wrap raw digest bytes.
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Render the digest as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 64-character hex string (either case, surrounding whitespace
    /// ignored).
    pub fn from_hex(s: &str) -> Result<Self, MerkleError> {
        let s = s.trim();
        if s.len() != DIGEST_LEN * 2 {
            return Err(MerkleError::HexDecode(format!(
                "expected {} hex chars, got {}",
                DIGEST_LEN * 2,
                s.len()
            )));
        }
        let mut out = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut out).map_err(|e| MerkleError::HexDecode(e.to_string()))?;
        Ok(Self(out))
    }
}

impl From<[u8; DIGEST_LEN]> for Digest32 {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Digest32 {
    type Err = MerkleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Digest32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest32({})", self.to_hex())
    }
}

impl Serialize for Digest32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "e7f68d419f5f14c1726af867348263fa20b7598bef8f4027cfe60a408631101a";

    #[test]
    fn test_hex_is_lowercase_64_chars() {
        let d = Digest32::new([0xAB; 32]);
        let hex = d.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(hex, "ab".repeat(32));
    }

    #[test]
    fn test_from_hex_accepts_uppercase_and_whitespace() {
        let upper = format!("  {}\n", SAMPLE.to_uppercase());
        let d = Digest32::from_hex(&upper).unwrap();
        assert_eq!(d.to_hex(), SAMPLE);
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        let err = Digest32::from_hex("aabb").unwrap_err();
        assert!(matches!(err, MerkleError::HexDecode(_)));
    }

    #[test]
    fn test_from_hex_rejects_non_hex() {
        let bad = "zz".repeat(32);
        assert!(Digest32::from_hex(&bad).is_err());
    }

    #[test]
    fn test_display_matches_hex() {
        let d: Digest32 = SAMPLE.parse().unwrap();
        assert_eq!(d.to_string(), SAMPLE);
        assert_eq!(format!("{d:?}"), format!("Digest32({SAMPLE})"));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let d: Digest32 = SAMPLE.parse().unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, format!("\"{SAMPLE}\""));
        let back: Digest32 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_serde_rejects_short_string() {
        assert!(serde_json::from_str::<Digest32>("\"00\"").is_err());
    }
}
