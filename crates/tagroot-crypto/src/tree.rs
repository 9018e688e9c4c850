//! # Merkle Root Construction
//!
//! Builds a binary Merkle tree level by level from an ordered list of input
//! strings:
//!
//! 1. Level 0 holds `tagged_hash(input, leaf_tag)` for each input, in order.
//! 2. Each following level pairs indices `2i, 2i + 1` and hashes
//!    `hex(left) + hex(right)` under the branch tag. An odd level's last
//!    element is paired with itself.
//! 3. Folding stops when one digest, the root, remains.
//!
//! The tree is never materialized as nodes. Each fold reads the previous
//! level and writes a fresh one.
//!
//! ## Proof Bookkeeping
//!
//! Leaf `p` sits under node `p >> h` at height `h`, so the leaves under node
//! `j` are the range `[j << h, (j + 1) << h)` clipped to the leaf count. For
//! every processed pair the leaves under the left node record
//! `(right, Right)`; the leaves under the right node record `(left, Left)`
//! only when a real right node exists. A duplicated odd tail therefore adds
//! exactly one step, with itself as sibling.

use std::ops::Range;

use tagroot_core::{Digest32, MerkleError, Tag};

use crate::proof::{ProofIndex, ProofStep};
use crate::tagged::TaggedHasher;

/// Compute the root of `inputs` using `tag` for leaves and branches alike.
///
/// Fails with [`MerkleError::InvalidArgument`] when `inputs` is empty. A
/// single input's root is its leaf digest.
pub fn compute_root<S: AsRef<str>>(inputs: &[S], tag: &Tag) -> Result<Digest32, MerkleError> {
    root_with(&TaggedHasher::new(tag), inputs)
}

/// Every level of the single-tag tree, leaves first, root last.
pub fn compute_levels<S: AsRef<str>>(
    inputs: &[S],
    tag: &Tag,
) -> Result<Vec<Vec<Digest32>>, MerkleError> {
    ensure_non_empty(inputs)?;
    let hasher = TaggedHasher::new(tag);
    let mut levels = vec![hash_leaves(&hasher, inputs)];
    while let Some(level) = levels.last().filter(|level| level.len() > 1) {
        let next = fold_level(&hasher, level);
        levels.push(next);
    }
    Ok(levels)
}

/// Compute the root of `inputs` with separate leaf and branch tags, and the
/// inclusion proof of every leaf.
///
/// Fails with [`MerkleError::InvalidArgument`] when `inputs` is empty.
pub fn compute_root_with_proofs<S: AsRef<str>>(
    inputs: &[S],
    leaf_tag: &Tag,
    branch_tag: &Tag,
) -> Result<(Digest32, ProofIndex), MerkleError> {
    root_and_proofs_with(
        &TaggedHasher::new(leaf_tag),
        &TaggedHasher::new(branch_tag),
        inputs,
    )
}

pub(crate) fn root_with<S: AsRef<str>>(
    hasher: &TaggedHasher,
    inputs: &[S],
) -> Result<Digest32, MerkleError> {
    ensure_non_empty(inputs)?;
    tracing::debug!(leaves = inputs.len(), tag = %hasher.tag(), "computing merkle root");

    let mut level = hash_leaves(hasher, inputs);
    let mut height = 0u32;
    while level.len() > 1 {
        level = fold_level(hasher, &level);
        height += 1;
        tracing::trace!(height, width = level.len(), "folded level");
    }
    Ok(level[0])
}

pub(crate) fn root_and_proofs_with<S: AsRef<str>>(
    leaf_hasher: &TaggedHasher,
    branch_hasher: &TaggedHasher,
    inputs: &[S],
) -> Result<(Digest32, ProofIndex), MerkleError> {
    ensure_non_empty(inputs)?;
    tracing::debug!(
        leaves = inputs.len(),
        leaf_tag = %leaf_hasher.tag(),
        branch_tag = %branch_hasher.tag(),
        "computing merkle root with proofs"
    );

    let leaves = hash_leaves(leaf_hasher, inputs);
    let leaf_count = leaves.len();
    let mut paths: Vec<Vec<ProofStep>> = vec![Vec::new(); leaf_count];

    let mut level = leaves.clone();
    let mut height = 0u32;
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        for (pair, nodes) in level.chunks(2).enumerate() {
            let left = nodes[0];
            let right = nodes.get(1).copied();
            let partner = right.unwrap_or(left);

            let left_node = 2 * pair;
            for p in leaves_under(left_node, height, leaf_count) {
                paths[p].push(ProofStep::right(partner));
            }
            if right.is_some() {
                for p in leaves_under(left_node + 1, height, leaf_count) {
                    paths[p].push(ProofStep::left(left));
                }
            }
            next.push(branch_hasher.hash_pair(&left, &partner));
        }
        level = next;
        height += 1;
        tracing::trace!(height, width = level.len(), "folded level");
    }

    let mut index = ProofIndex::default();
    for (leaf, path) in leaves.into_iter().zip(paths) {
        index.insert_first(leaf, path);
    }
    if index.len() < leaf_count {
        tracing::debug!(
            leaves = leaf_count,
            distinct = index.len(),
            "duplicate leaf digests share one proof entry"
        );
    }
    Ok((level[0], index))
}

fn ensure_non_empty<S>(inputs: &[S]) -> Result<(), MerkleError> {
    if inputs.is_empty() {
        return Err(MerkleError::InvalidArgument(
            "inputs must contain at least one element".to_string(),
        ));
    }
    Ok(())
}

fn hash_leaves<S: AsRef<str>>(hasher: &TaggedHasher, inputs: &[S]) -> Vec<Digest32> {
    inputs
        .iter()
        .map(|input| hasher.hash_str(input.as_ref()))
        .collect()
}

fn fold_level(hasher: &TaggedHasher, level: &[Digest32]) -> Vec<Digest32> {
    level
        .chunks(2)
        .map(|nodes| {
            let left = &nodes[0];
            let right = nodes.get(1).unwrap_or(left);
            hasher.hash_pair(left, right)
        })
        .collect()
}

/// Leaf positions covered by node `node` at `height`.
fn leaves_under(node: usize, height: u32, leaf_count: usize) -> Range<usize> {
    let start = node << height;
    let end = ((node + 1) << height).min(leaf_count);
    start..end
}
