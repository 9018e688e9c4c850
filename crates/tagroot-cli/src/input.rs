//! # Input and Configuration Resolution
//!
//! Shared plumbing for every subcommand: collecting the input strings
//! (positional arguments, else one per line from stdin) and resolving the
//! effective tag configuration.

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};

use tagroot_core::{Tag, TagConfig};

/// Load the base tag configuration.
///
/// A `--config` YAML file wins over `TAGROOT_LEAF_TAG` / `TAGROOT_BRANCH_TAG`,
/// which win over the built-in defaults. Keys the file omits keep the
/// environment value.
pub fn load_config(path: Option<&Path>) -> Result<TagConfig> {
    load_config_over(TagConfig::from_env(), path)
}

/// [`load_config`] with an explicit environment layer.
pub fn load_config_over(env: TagConfig, path: Option<&Path>) -> Result<TagConfig> {
    let Some(path) = path else {
        return Ok(env);
    };
    let config = env
        .load_over(path)
        .with_context(|| format!("failed to load tag config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded tag config");
    Ok(config)
}

/// Apply per-command tag flags on top of `base`.
pub fn override_tags(
    base: &TagConfig,
    leaf_tag: Option<&str>,
    branch_tag: Option<&str>,
) -> TagConfig {
    TagConfig {
        leaf_tag: leaf_tag.map_or_else(|| base.leaf_tag.clone(), Tag::from),
        branch_tag: branch_tag.map_or_else(|| base.branch_tag.clone(), Tag::from),
    }
}

/// Positional inputs if any were given, otherwise every line of `reader`.
///
/// Lines keep interior whitespace; only the line terminator (`\n` or
/// `\r\n`) is dropped. Non-UTF-8 input is an error, never re-encoded.
pub fn collect_inputs(positional: &[String], reader: impl BufRead) -> Result<Vec<String>> {
    if !positional.is_empty() {
        return Ok(positional.to_vec());
    }
    let mut inputs = Vec::new();
    for line in reader.lines() {
        inputs.push(line.context("failed to read input line from stdin")?);
    }
    tracing::debug!(count = inputs.len(), "read inputs from stdin");
    Ok(inputs)
}
