//! # Tagged SHA-256
//!
//! Domain-separated hashing in the BIP-340 style:
//!
//! `tagged_hash(msg, tag) = SHA256( SHA256(tag) || SHA256(tag) || msg )`
//!
//! Message and tag are hashed as their UTF-8 bytes. The doubled tag hash
//! fills exactly one 64-byte SHA-256 block, so [`TaggedHasher`] absorbs it
//! once per tag and clones that prefix state for every digest. Each clone
//! starts from the prefix alone; no message bytes ever carry over between
//! digests.
//!
//! ## Branch Encoding
//!
//! [`TaggedHasher::hash_pair`] hashes the *hex text* of the two children
//! (128 ASCII bytes), not their 64 raw bytes. A textbook Merkle tree hashes
//! raw concatenated digests; tagroot does not, and existing roots depend on
//! the hex encoding.

use std::fmt;

use sha2::{Digest, Sha256};
use tagroot_core::{Digest32, Tag};

/// A SHA-256 state pre-seeded with `SHA256(tag) || SHA256(tag)`.
#[derive(Clone)]
pub struct TaggedHasher {
    tag: Tag,
    prefix: Sha256,
}

impl TaggedHasher {
    /// Precompute the tag prefix for `tag`.
    pub fn new(tag: &Tag) -> Self {
        let tag_hash = Sha256::digest(tag.as_bytes());
        let mut prefix = Sha256::new();
        prefix.update(&tag_hash);
        prefix.update(&tag_hash);
        Self {
            tag: tag.clone(),
            prefix,
        }
    }

    /// The tag this hasher separates.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Tagged hash of raw message bytes.
    pub fn hash_bytes(&self, message: &[u8]) -> Digest32 {
        let mut hasher = self.prefix.clone();
        hasher.update(message);
        finish(hasher)
    }

    /// Tagged hash of a string's UTF-8 bytes.
    pub fn hash_str(&self, message: &str) -> Digest32 {
        self.hash_bytes(message.as_bytes())
    }

    /// Tagged hash of `hex(left) + hex(right)`.
    pub fn hash_pair(&self, left: &Digest32, right: &Digest32) -> Digest32 {
        let mut hasher = self.prefix.clone();
        hasher.update(left.to_hex().as_bytes());
        hasher.update(right.to_hex().as_bytes());
        finish(hasher)
    }
}

impl fmt::Debug for TaggedHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedHasher").field("tag", &self.tag).finish()
    }
}

fn finish(hasher: Sha256) -> Digest32 {
    let hash = hasher.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash);
    Digest32::new(bytes)
}

/// Tagged hash of a string message.
pub fn tagged_hash(message: &str, tag: &Tag) -> Digest32 {
    TaggedHasher::new(tag).hash_str(message)
}

/// Tagged hash of raw message bytes.
pub fn tagged_hash_bytes(message: &[u8], tag: &Tag) -> Digest32 {
    TaggedHasher::new(tag).hash_bytes(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn btc() -> Tag {
        Tag::from("Bitcoin_Transaction")
    }

    /// Reference: `sha256(sha256(t) + sha256(t) + m)` via Python hashlib.
    #[test]
    fn test_known_vector_single_char() {
        assert_eq!(
            tagged_hash("x", &btc()).to_hex(),
            "e7f68d419f5f14c1726af867348263fa20b7598bef8f4027cfe60a408631101a"
        );
    }

    #[test]
    fn test_known_vector_empty_message_and_tag() {
        assert_eq!(
            tagged_hash("", &Tag::new("")).to_hex(),
            "2dba5dbc339e7316aea2683faf839c1b7b1ee2313db792112588118df066aa35"
        );
    }

    #[test]
    fn test_known_vector_non_ascii_is_utf8() {
        assert_eq!(
            tagged_hash("h\u{e9}llo", &btc()).to_hex(),
            "93a075e06e4f91da5e0c7f9249c2e197f46ee1c115c4ba2c912bea1bcdd5ed88"
        );
    }

    #[test]
    fn test_known_vector_raw_bytes() {
        let tag = Tag::from("BIP0340/challenge");
        assert_eq!(
            tagged_hash_bytes(b"abc", &tag).to_hex(),
            "770a5b7e7c304bbcc3ea107343ff951dd404312ef418db0c3b94e2ebfbb50087"
        );
    }

    #[test]
    fn test_str_and_bytes_agree() {
        let tag = btc();
        assert_eq!(tagged_hash("aaa", &tag), tagged_hash_bytes(b"aaa", &tag));
    }

    #[test]
    fn test_tag_separates_domains() {
        let leaf = tagged_hash("aaa", &Tag::from("ProofOfReserve_Leaf"));
        let branch = tagged_hash("aaa", &Tag::from("ProofOfReserve_Branch"));
        assert_ne!(leaf, branch);
    }

    #[test]
    fn test_hasher_reuse_does_not_leak_state() {
        let hasher = TaggedHasher::new(&btc());
        let first = hasher.hash_str("aaa");
        let _ = hasher.hash_str("something else entirely");
        assert_eq!(hasher.hash_str("aaa"), first);
        assert_eq!(first, tagged_hash("aaa", &btc()));
    }

    #[test]
    fn test_hash_pair_uses_hex_text() {
        let hasher = TaggedHasher::new(&btc());
        let a = hasher.hash_str("aaa");
        let b = hasher.hash_str("bbb");
        let expected = hasher.hash_str(&format!("{}{}", a.to_hex(), b.to_hex()));
        assert_eq!(hasher.hash_pair(&a, &b), expected);

        let mut raw = Vec::with_capacity(64);
        raw.extend_from_slice(a.as_bytes());
        raw.extend_from_slice(b.as_bytes());
        assert_ne!(hasher.hash_pair(&a, &b), hasher.hash_bytes(&raw));
    }

    #[test]
    fn test_hash_pair_is_order_sensitive() {
        let hasher = TaggedHasher::new(&btc());
        let a = hasher.hash_str("aaa");
        let b = hasher.hash_str("bbb");
        assert_ne!(hasher.hash_pair(&a, &b), hasher.hash_pair(&b, &a));
    }

    #[test]
    fn test_debug_shows_tag_only() {
        let hasher = TaggedHasher::new(&btc());
        assert!(format!("{hasher:?}").contains("Bitcoin_Transaction"));
    }
}
