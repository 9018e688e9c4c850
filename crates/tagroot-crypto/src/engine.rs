//! # MerkleEngine — Configured Tree Builder
//!
//! Bundles a [`TagConfig`] with pre-seeded hashers for its two tags, so
//! repeated root computations and proof checks skip re-hashing the tags.
//! The engine holds no per-tree state: every call builds its levels and
//! proof index from scratch and returns them by value.

use tagroot_core::{Digest32, MerkleError, TagConfig};

use crate::proof::{self, ProofIndex, ProofStep};
use crate::tagged::TaggedHasher;
use crate::tree;

/// Merkle root and proof computation under a fixed tag configuration.
#[derive(Debug, Clone)]
pub struct MerkleEngine {
    config: TagConfig,
    leaf_hasher: TaggedHasher,
    branch_hasher: TaggedHasher,
}

impl MerkleEngine {
    /// Create an engine for `config`.
    pub fn new(config: TagConfig) -> Self {
        let leaf_hasher = TaggedHasher::new(&config.leaf_tag);
        let branch_hasher = TaggedHasher::new(&config.branch_tag);
        Self {
            config,
            leaf_hasher,
            branch_hasher,
        }
    }

    /// The tag configuration this engine hashes with.
    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    /// Tagged hash of `message` under the leaf tag.
    pub fn leaf_hash(&self, message: &str) -> Digest32 {
        self.leaf_hasher.hash_str(message)
    }

    /// Root with the leaf tag used at every level (the single-tag variant).
    pub fn compute_root<S: AsRef<str>>(&self, inputs: &[S]) -> Result<Digest32, MerkleError> {
        tree::root_with(&self.leaf_hasher, inputs)
    }

    /// Root under the leaf/branch tag split, plus every leaf's proof.
    pub fn compute_root_with_proofs<S: AsRef<str>>(
        &self,
        inputs: &[S],
    ) -> Result<(Digest32, ProofIndex), MerkleError> {
        tree::root_and_proofs_with(&self.leaf_hasher, &self.branch_hasher, inputs)
    }

    /// Leaf digest of `input` and a copy of its stored path (empty if absent).
    pub fn get_proof(&self, input: &str, index: &ProofIndex) -> (Digest32, Vec<ProofStep>) {
        proof::lookup(&self.leaf_hasher, input, index)
    }

    /// Recompute the root from `leaf` and `path` under the branch tag.
    pub fn verify_proof(&self, leaf: &Digest32, path: &[ProofStep], expected_root: &Digest32) -> bool {
        proof::verify_with(&self.branch_hasher, leaf, path, expected_root)
    }
}

impl Default for MerkleEngine {
    fn default() -> Self {
        Self::new(TagConfig::default())
    }
}
