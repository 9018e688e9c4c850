//! # Hash Subcommand
//!
//! `tagroot hash [--tag T] MESSAGE` prints the tagged hash of one message.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use tagroot_core::{Tag, DEFAULT_ROOT_TAG};
use tagroot_crypto::tagged_hash;

/// Arguments for the hash subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Domain-separation tag.
    #[arg(long, default_value = DEFAULT_ROOT_TAG)]
    pub tag: String,

    /// Message to hash (UTF-8).
    pub message: String,
}

/// Execute the hash subcommand.
pub fn run_hash(args: &HashArgs, out: &mut impl Write) -> Result<u8> {
    let digest = tagged_hash(&args.message, &Tag::new(args.tag.as_str()));
    writeln!(out, "{digest}")?;
    Ok(0)
}
