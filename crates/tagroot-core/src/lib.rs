//! # tagroot-core — Foundational Types for tagroot
//!
//! Defines the type-system primitives shared by every tagroot crate. It
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`Digest32` newtype.** Tree hashes are 32 raw bytes with a single
//!    canonical rendering: 64 lowercase hex characters.
//!
//! 2. **Explicit tags.** Domain-separation tags are `Tag` values passed to
//!    every call (or bundled in `TagConfig`), never process-wide constants.
//!
//! 3. **One validated precondition.** `MerkleError::InvalidArgument` is the
//!    only failure a tree computation can produce.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tagroot-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest;
pub mod error;
pub mod tag;

// Re-export primary types for ergonomic imports.
pub use digest::{Digest32, DIGEST_LEN};
pub use error::{ConfigError, MerkleError};
pub use tag::{Tag, TagConfig, DEFAULT_BRANCH_TAG, DEFAULT_LEAF_TAG, DEFAULT_ROOT_TAG};
