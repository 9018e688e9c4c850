//! # Prove Subcommand
//!
//! `tagroot prove [--leaf-tag L] [--branch-tag B] [--input X] [INPUTS...]`
//! builds the leaf/branch tagged tree and prints a JSON [`ProofDocument`]:
//! the root plus the proof of every input, or only of `X` when given.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};

use tagroot_core::{Digest32, Tag, TagConfig};
use tagroot_crypto::{MerkleEngine, ProofStep};

use crate::input::{collect_inputs, override_tags};

/// Arguments for the prove subcommand.
#[derive(Args, Debug)]
pub struct ProveArgs {
    /// Leaf tag (overrides config file and environment).
    #[arg(long)]
    pub leaf_tag: Option<String>,

    /// Branch tag (overrides config file and environment).
    #[arg(long)]
    pub branch_tag: Option<String>,

    /// Emit only the proof for this input. An input absent from the tree
    /// yields an empty path.
    #[arg(long)]
    pub input: Option<String>,

    /// Input strings in tree order. Read one per line from stdin when omitted.
    pub inputs: Vec<String>,
}

/// Root and inclusion proofs, as exported by `tagroot prove`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofDocument {
    /// Tag the leaves were hashed under.
    pub leaf_tag: Tag,
    /// Tag every internal node was hashed under.
    pub branch_tag: Tag,
    /// Merkle root of the full input list.
    pub root: Digest32,
    /// In input order, or the single `--input` selection.
    pub proofs: Vec<LeafProof>,
}

/// One input's leaf digest and sibling path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafProof {
    /// The input string as given.
    pub input: String,
    /// Tagged hash of `input` under the leaf tag.
    pub leaf_hash: Digest32,
    /// Sibling steps from the leaf level up to the root; empty if absent.
    pub path: Vec<ProofStep>,
}

/// Build the proof document for `inputs` under `config`.
pub fn build_document(
    inputs: &[String],
    config: TagConfig,
    only: Option<&str>,
) -> Result<ProofDocument> {
    let engine = MerkleEngine::new(config);
    let (root, index) = engine.compute_root_with_proofs(inputs)?;

    let selected: Vec<&str> = match only {
        Some(input) => vec![input],
        None => inputs.iter().map(String::as_str).collect(),
    };
    let proofs = selected
        .into_iter()
        .map(|input| {
            let (leaf_hash, path) = engine.get_proof(input, &index);
            if !index.contains(&leaf_hash) {
                tracing::warn!(input, "input is not part of the tree; emitting empty path");
            }
            LeafProof {
                input: input.to_string(),
                leaf_hash,
                path,
            }
        })
        .collect();

    let config = engine.config().clone();
    Ok(ProofDocument {
        leaf_tag: config.leaf_tag,
        branch_tag: config.branch_tag,
        root,
        proofs,
    })
}

/// Execute the prove subcommand.
pub fn run_prove(
    args: &ProveArgs,
    base: &TagConfig,
    stdin: impl BufRead,
    out: &mut impl Write,
) -> Result<u8> {
    let inputs = collect_inputs(&args.inputs, stdin)?;
    let config = override_tags(base, args.leaf_tag.as_deref(), args.branch_tag.as_deref());
    let document = build_document(&inputs, config, args.input.as_deref())?;
    tracing::info!(
        leaves = inputs.len(),
        proofs = document.proofs.len(),
        root = %document.root,
        "built proof document"
    );
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tagroot_crypto::verify_proof;

    fn accounts() -> Vec<String> {
        ["alice:100", "bob:250", "carol:75", "dave:10", "erin:5"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn document_proofs_verify() {
        let doc = build_document(&accounts(), TagConfig::default(), None).unwrap();
        assert_eq!(
            doc.root.to_hex(),
            "4b4ce7f229f04b7f59ee5564bd3a105cded81c2af93f5124d1aee6d8b99a3ffa"
        );
        assert_eq!(doc.proofs.len(), 5);
        for proof in &doc.proofs {
            assert!(verify_proof(&proof.leaf_hash, &proof.path, &doc.branch_tag, &doc.root));
        }
    }

    #[test]
    fn single_input_selection() {
        let doc = build_document(&accounts(), TagConfig::default(), Some("bob:250")).unwrap();
        assert_eq!(doc.proofs.len(), 1);
        assert_eq!(doc.proofs[0].input, "bob:250");
        assert_eq!(doc.proofs[0].path.len(), 3);
    }

    #[test]
    fn unknown_selection_has_empty_path() {
        let doc = build_document(&accounts(), TagConfig::default(), Some("mallory")).unwrap();
        assert!(doc.proofs[0].path.is_empty());
    }

    #[test]
    fn run_prove_emits_parseable_json() {
        let args = ProveArgs {
            leaf_tag: Some("Cli_Leaf".to_string()),
            branch_tag: None,
            input: None,
            inputs: vec![],
        };
        let mut out = Vec::new();
        let code = run_prove(&args, &TagConfig::default(), Cursor::new("a\nb\nc\n"), &mut out)
            .unwrap();
        assert_eq!(code, 0);

        let doc: ProofDocument = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc.leaf_tag, Tag::from("Cli_Leaf"));
        assert_eq!(doc.branch_tag, TagConfig::default().branch_tag);
        assert_eq!(doc.proofs.len(), 3);
    }
}
