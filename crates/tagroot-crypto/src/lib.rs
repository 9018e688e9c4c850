//! # tagroot-crypto — Tagged Merkle Trees
//!
//! Provides the Merkle building blocks for tagroot:
//!
//! - **Tagged SHA-256** (`SHA256(SHA256(tag) || SHA256(tag) || msg)`) for
//!   domain-separated leaf and branch hashing.
//! - **Root computation** over an ordered list of strings with odd-tail
//!   duplication.
//! - **Proof indexing** keyed by leaf digest, built in the same pass as the
//!   root.
//! - **Proof verification** replaying a sibling path up to the root.
//!
//! ## Compatibility Note
//!
//! Branch nodes hash the concatenated *hex text* of their children, not the
//! raw digest bytes. This departs from a textbook Merkle tree and is kept so
//! existing roots reproduce bit-for-bit.
//!
//! ## Crate Policy
//!
//! - Depends only on `tagroot-core` internally.
//! - No mocking of hash operations in tests; fixtures come from an
//!   independent SHA-256 implementation.

pub mod engine;
pub mod proof;
pub mod tagged;
pub mod tree;

pub use engine::MerkleEngine;
pub use proof::{get_proof, verify_proof, verify_proof_hex, ProofIndex, ProofStep, Side};
pub use tagged::{tagged_hash, tagged_hash_bytes, TaggedHasher};
pub use tree::{compute_levels, compute_root, compute_root_with_proofs};
