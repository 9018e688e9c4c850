//! # Verify Subcommand
//!
//! `tagroot verify --root R --path JSON (--leaf-hash H | --input X)` replays
//! a proof path and prints `valid` (exit 0) or `invalid` (exit 1).

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use tagroot_core::{Digest32, TagConfig};
use tagroot_crypto::{MerkleEngine, ProofStep};

use crate::input::override_tags;

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Leaf digest (64 hex chars).
    #[arg(long, required_unless_present = "input", conflicts_with = "input")]
    pub leaf_hash: Option<String>,

    /// Input string; its leaf digest is computed with the leaf tag.
    #[arg(long)]
    pub input: Option<String>,

    /// Expected root (64 hex chars).
    #[arg(long)]
    pub root: String,

    /// Proof path as a JSON array of `{"sibling": HEX, "side": "left"|"right"}`.
    #[arg(long)]
    pub path: String,

    /// Leaf tag (overrides config file and environment).
    #[arg(long)]
    pub leaf_tag: Option<String>,

    /// Branch tag (overrides config file and environment).
    #[arg(long)]
    pub branch_tag: Option<String>,
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs, base: &TagConfig, out: &mut impl Write) -> Result<u8> {
    let config = override_tags(base, args.leaf_tag.as_deref(), args.branch_tag.as_deref());
    let engine = MerkleEngine::new(config);

    let leaf = match (&args.leaf_hash, &args.input) {
        (Some(hex), _) => Digest32::from_hex(hex).context("invalid --leaf-hash")?,
        (None, Some(input)) => engine.leaf_hash(input),
        (None, None) => anyhow::bail!("one of --leaf-hash or --input is required"),
    };
    let root = Digest32::from_hex(&args.root).context("invalid --root")?;
    let path: Vec<ProofStep> =
        serde_json::from_str(&args.path).context("invalid --path JSON")?;

    let valid = engine.verify_proof(&leaf, &path, &root);
    tracing::info!(%leaf, %root, steps = path.len(), valid, "verified proof");
    writeln!(out, "{}", if valid { "valid" } else { "invalid" })?;
    Ok(if valid { 0 } else { 1 })
}
