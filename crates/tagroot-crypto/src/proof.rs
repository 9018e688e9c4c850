//! # Inclusion Proofs
//!
//! A proof for one leaf is the ordered list of sibling digests met on the
//! way from that leaf to the root, each tagged with the side the sibling
//! sits on. Index 0 is the sibling at the leaf level; the last step is the
//! sibling directly below the root. Steps must be replayed in that order.
//!
//! [`ProofIndex`] maps leaf digests to their paths. Because the key is the
//! leaf digest, inputs that hash identically share a single entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tagroot_core::{Digest32, Tag};

use crate::tagged::TaggedHasher;

/// Which side of the running hash a sibling is concatenated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Side {
    /// Sibling goes first: `hash(sibling + current)`.
    Left = 0,
    /// Sibling goes second: `hash(current + sibling)`.
    Right = 1,
}

impl Side {
    /// Numeric encoding: `Left = 0`, `Right = 1`.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// One sibling on a leaf's path to the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// The sibling digest at this level.
    pub sibling: Digest32,
    /// Where the sibling is concatenated relative to the running hash.
    pub side: Side,
}

impl ProofStep {
    /// A sibling that precedes the running hash.
    pub fn left(sibling: Digest32) -> Self {
        Self {
            sibling,
            side: Side::Left,
        }
    }

    /// A sibling that follows the running hash.
    pub fn right(sibling: Digest32) -> Self {
        Self {
            sibling,
            side: Side::Right,
        }
    }
}

/// Proof paths keyed by leaf digest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProofIndex {
    paths: BTreeMap<Digest32, Vec<ProofStep>>,
}

impl ProofIndex {
    /// Number of distinct leaf digests with a stored path.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the index holds no paths.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Whether `leaf` has a stored path.
    pub fn contains(&self, leaf: &Digest32) -> bool {
        self.paths.contains_key(leaf)
    }

    /// Borrow the stored path for `leaf`.
    pub fn get(&self, leaf: &Digest32) -> Option<&[ProofStep]> {
        self.paths.get(leaf).map(Vec::as_slice)
    }

    /// Iterate `(leaf, path)` pairs in digest order.
    pub fn iter(&self) -> impl Iterator<Item = (&Digest32, &[ProofStep])> {
        self.paths.iter().map(|(leaf, path)| (leaf, path.as_slice()))
    }

    /// Store `path` for `leaf` unless the leaf already has one.
    ///
    /// Tree construction inserts in input order, so a repeated input keeps
    /// the path of its first occurrence.
    pub(crate) fn insert_first(&mut self, leaf: Digest32, path: Vec<ProofStep>) {
        self.paths.entry(leaf).or_insert(path);
    }
}

/// Look up the proof for `input`.
///
/// Returns the computed leaf digest together with an owned copy of its path.
/// An input that was never part of the tree yields an empty path; that is a
/// valid outcome, not an error.
pub fn get_proof(input: &str, leaf_tag: &Tag, index: &ProofIndex) -> (Digest32, Vec<ProofStep>) {
    lookup(&TaggedHasher::new(leaf_tag), input, index)
}

pub(crate) fn lookup(
    leaf_hasher: &TaggedHasher,
    input: &str,
    index: &ProofIndex,
) -> (Digest32, Vec<ProofStep>) {
    let leaf = leaf_hasher.hash_str(input);
    let path = index.get(&leaf).map(<[ProofStep]>::to_vec).unwrap_or_default();
    (leaf, path)
}

/// Recompute the root from `leaf` and `path` and compare with
/// `expected_root`.
pub fn verify_proof(
    leaf: &Digest32,
    path: &[ProofStep],
    branch_tag: &Tag,
    expected_root: &Digest32,
) -> bool {
    verify_with(&TaggedHasher::new(branch_tag), leaf, path, expected_root)
}

/// Hex-string form of [`verify_proof`]. Malformed digests make the proof
/// invalid rather than producing an error.
pub fn verify_proof_hex(
    leaf_hex: &str,
    path: &[ProofStep],
    branch_tag: &Tag,
    expected_root_hex: &str,
) -> bool {
    let (Ok(leaf), Ok(root)) = (
        Digest32::from_hex(leaf_hex),
        Digest32::from_hex(expected_root_hex),
    ) else {
        return false;
    };
    verify_proof(&leaf, path, branch_tag, &root)
}

pub(crate) fn verify_with(
    branch_hasher: &TaggedHasher,
    leaf: &Digest32,
    path: &[ProofStep],
    expected_root: &Digest32,
) -> bool {
    let computed = path.iter().fold(*leaf, |current, step| match step.side {
        Side::Right => branch_hasher.hash_pair(&current, &step.sibling),
        Side::Left => branch_hasher.hash_pair(&step.sibling, &current),
    });
    computed == *expected_root
}
