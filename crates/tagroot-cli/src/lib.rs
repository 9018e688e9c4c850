//! # tagroot-cli — tagroot Command-Line Interface
//!
//! Thin clap-based wrapper over `tagroot-crypto`.
//!
//! ## Subcommands
//!
//! - `root`: single-tag Merkle root of a list of strings
//! - `prove`: leaf/branch tagged root plus inclusion proofs as JSON
//! - `verify`: replay a proof path against an expected root
//! - `hash`: tagged hash of one message
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers write to a caller-supplied writer and return an exit code;
//!   logs go to stderr.

pub mod hash;
pub mod input;
pub mod prove;
pub mod root;
pub mod verify;
