//! # tagroot CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Command output goes to stdout; tracing output goes to stderr.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tagroot_cli::hash::{run_hash, HashArgs};
use tagroot_cli::input::load_config;
use tagroot_cli::prove::{run_prove, ProveArgs};
use tagroot_cli::root::{run_root, RootArgs};
use tagroot_cli::verify::{run_verify, VerifyArgs};

/// tagroot — tagged SHA-256 Merkle roots and inclusion proofs.
///
/// Computes Merkle roots over ordered lists of strings, exports per-leaf
/// inclusion proofs, and verifies them.
#[derive(Parser, Debug)]
#[command(name = "tagroot", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML tag configuration (`leaf_tag`, `branch_tag`).
    /// Read by `prove` and `verify` only; `root` and `hash` take `--tag`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the single-tag Merkle root of the inputs.
    Root(RootArgs),

    /// Compute the leaf/branch tagged root and export inclusion proofs.
    Prove(ProveArgs),

    /// Verify an inclusion proof against an expected root.
    Verify(VerifyArgs),

    /// Print the tagged hash of a single message.
    Hash(HashArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    tracing::debug!("tagroot CLI v{} starting", env!("CARGO_PKG_VERSION"));

    match dispatch(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<u8> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    if let Some(path) = cli.config.as_deref() {
        if let Some(name) = ignores_config(&cli.command) {
            tracing::warn!(
                path = %path.display(),
                "--config is ignored by `{name}`; pass --tag instead"
            );
        }
    }

    let code = match cli.command {
        Commands::Root(args) => run_root(&args, stdin, &mut stdout)?,
        Commands::Prove(args) => {
            let base = load_config(cli.config.as_deref())?;
            run_prove(&args, &base, stdin, &mut stdout)?
        }
        Commands::Verify(args) => {
            let base = load_config(cli.config.as_deref())?;
            run_verify(&args, &base, &mut stdout)?
        }
        Commands::Hash(args) => run_hash(&args, &mut stdout)?,
    };
    stdout.flush()?;
    Ok(code)
}

/// Name of the subcommand if it does not read the tag configuration.
fn ignores_config(command: &Commands) -> Option<&'static str> {
    match command {
        Commands::Root(_) => Some("root"),
        Commands::Hash(_) => Some("hash"),
        Commands::Prove(_) | Commands::Verify(_) => None,
    }
}
