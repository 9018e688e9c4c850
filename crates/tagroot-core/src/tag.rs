//! # Domain-Separation Tags
//!
//! A [`Tag`] is an opaque label mixed into every tagged hash so that digests
//! computed for one domain can never be replayed in another. Tags are passed
//! explicitly to every operation; [`TagConfig`] bundles the leaf and branch
//! tags a proof-producing tree uses.
//!
//! ## Configuration Precedence
//!
//! Explicit values (CLI flags) > YAML config file > environment variables
//! (`TAGROOT_LEAF_TAG`, `TAGROOT_BRANCH_TAG`) > built-in defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default leaf tag for proof-producing trees.
pub const DEFAULT_LEAF_TAG: &str = "ProofOfReserve_Leaf";

/// Default branch tag for proof-producing trees.
pub const DEFAULT_BRANCH_TAG: &str = "ProofOfReserve_Branch";

/// Default tag for single-tag root computation.
pub const DEFAULT_ROOT_TAG: &str = "Bitcoin_Transaction";

/// Environment variable overriding the default leaf tag.
pub const LEAF_TAG_ENV: &str = "TAGROOT_LEAF_TAG";

/// Environment variable overriding the default branch tag.
pub const BRANCH_TAG_ENV: &str = "TAGROOT_BRANCH_TAG";

/// An immutable domain-separation label. Any UTF-8 string, including the
/// empty string, is a valid tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Create a tag from any string-like value.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The UTF-8 bytes that are hashed for this tag.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Leaf and branch tags for a proof-producing tree.
///
/// Using distinct tags keeps leaf-domain and branch-domain digests
/// non-confusable: a leaf hash can never be presented as an internal node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    /// Tag applied to every input string at level 0.
    pub leaf_tag: Tag,
    /// Tag applied to every internal combination step.
    pub branch_tag: Tag,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            leaf_tag: Tag::from(DEFAULT_LEAF_TAG),
            branch_tag: Tag::from(DEFAULT_BRANCH_TAG),
        }
    }
}

impl TagConfig {
    /// Create a configuration from explicit tags.
    pub fn new(leaf_tag: impl Into<Tag>, branch_tag: impl Into<Tag>) -> Self {
        Self {
            leaf_tag: leaf_tag.into(),
            branch_tag: branch_tag.into(),
        }
    }

    /// Defaults, overridden by `TAGROOT_LEAF_TAG` / `TAGROOT_BRANCH_TAG`
    /// when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the two
    /// environment keys. Split out from [`TagConfig::from_env`] so tests do
    /// not touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(tag) = lookup(LEAF_TAG_ENV) {
            config.leaf_tag = Tag::new(tag);
        }
        if let Some(tag) = lookup(BRANCH_TAG_ENV) {
            config.branch_tag = Tag::new(tag);
        }
        config
    }

    /// Parse a YAML document. Missing keys fall back to the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::default().overlay_yaml(yaml)
    }

    /// Replace the tags present in a YAML document, keeping `self` for the
    /// keys the document omits.
    pub fn overlay_yaml(self, yaml: &str) -> Result<Self, ConfigError> {
        let file: TagFile = serde_yaml::from_str(yaml)?;
        Ok(Self {
            leaf_tag: file.leaf_tag.unwrap_or(self.leaf_tag),
            branch_tag: file.branch_tag.unwrap_or(self.branch_tag),
        })
    }

    /// Load a YAML configuration file layered over the environment: keys in
    /// the file win, missing keys come from `TAGROOT_*` or the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_env().load_over(path)
    }

    /// Load a YAML configuration file layered over `self`.
    pub fn load_over(self, path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        self.overlay_yaml(&text)
    }
}

/// On-disk form of [`TagConfig`]; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TagFile {
    leaf_tag: Option<Tag>,
    branch_tag: Option<Tag>,
}
