//! # Root Subcommand
//!
//! `tagroot root [--tag T] [INPUTS...]` prints the single-tag Merkle root of
//! the inputs as 64 hex characters.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Args;

use tagroot_core::{Tag, DEFAULT_ROOT_TAG};
use tagroot_crypto::compute_root;

use crate::input::collect_inputs;

/// Arguments for the root subcommand.
#[derive(Args, Debug)]
pub struct RootArgs {
    /// Domain-separation tag used for leaves and branches.
    #[arg(long, default_value = DEFAULT_ROOT_TAG)]
    pub tag: String,

    /// Input strings in tree order. Read one per line from stdin when omitted.
    pub inputs: Vec<String>,
}

/// Execute the root subcommand.
pub fn run_root(args: &RootArgs, stdin: impl BufRead, out: &mut impl Write) -> Result<u8> {
    let inputs = collect_inputs(&args.inputs, stdin)?;
    let root = compute_root(&inputs, &Tag::new(args.tag.as_str()))?;
    tracing::info!(leaves = inputs.len(), %root, "computed root");
    writeln!(out, "{root}")?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(inputs: &[&str]) -> RootArgs {
        RootArgs {
            tag: DEFAULT_ROOT_TAG.to_string(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn prints_reference_root() {
        let mut out = Vec::new();
        let code = run_root(&args(&["aaa", "bbb", "ccc"]), Cursor::new(""), &mut out).unwrap();
        assert_eq!(code, 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "4992d4b7fc980731ffabc0bd9e1e27be3367a3a79305c0a331cc92ecb2fb15ff\n"
        );
    }

    #[test]
    fn stdin_matches_positional() {
        let mut from_args = Vec::new();
        run_root(&args(&["aaa", "bbb", "ccc"]), Cursor::new(""), &mut from_args).unwrap();
        let mut from_stdin = Vec::new();
        run_root(&args(&[]), Cursor::new("aaa\nbbb\nccc\n"), &mut from_stdin).unwrap();
        assert_eq!(from_args, from_stdin);
    }

    #[test]
    fn no_inputs_is_an_error() {
        let mut out = Vec::new();
        let err = run_root(&args(&[]), Cursor::new(""), &mut out).unwrap_err();
        assert!(err.to_string().contains("invalid argument"));
        assert!(out.is_empty());
    }
}
