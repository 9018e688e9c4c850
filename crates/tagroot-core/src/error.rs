//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout tagroot. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Tree construction has exactly one validated precondition: the input
//!   sequence must be non-empty. Hashing itself cannot fail.
//! - Hex parsing errors carry the offending length or character position.
//! - Configuration errors wrap the underlying I/O or YAML failure.

use thiserror::Error;

/// Errors from Merkle tree construction and digest parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    /// A root computation was called with an empty input sequence.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A hex digest string could not be decoded to 32 bytes.
    #[error("hex decode error: {0}")]
    HexDecode(String),
}

/// Errors from loading a tag configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid YAML for `TagConfig`.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}
