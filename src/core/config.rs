//! Filter configuration
//!
//! Immutable per-run configuration for the selection pipeline. Built once from
//! CLI input and never mutated afterwards; defaults are explicit constants.

use std::collections::BTreeSet;
use thiserror::Error;

/// Extensions selected when the user supplies none
pub const DEFAULT_EXTENSIONS: &[&str] = &[".md", ".mdx"];

/// Fatal configuration problems that abort a run before traversal starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("root path is empty")]
    EmptyRoot,

    #[error("root path does not exist: {0}")]
    RootNotFound(String),

    #[error("root path is not a directory: {0}")]
    RootNotADirectory(String),

    #[error("empty extension token in configuration")]
    EmptyExtension,
}

/// Filtering rules applied to every candidate path
///
/// Extensions are stored in normalized leading-dot, lowercase form and the set
/// is never empty. Blacklist entries are lowercased; filename comparison is
/// case-insensitive. Directory names are matched case-sensitively.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    include_dirs: BTreeSet<String>,
    exclude_dirs: BTreeSet<String>,
    blacklist: BTreeSet<String>,
    extensions: BTreeSet<String>,
}

impl FilterConfig {
    pub fn new<I, X, B, E>(
        include_dirs: I,
        exclude_dirs: X,
        blacklist: B,
        extensions: E,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
        X: IntoIterator<Item = String>,
        B: IntoIterator<Item = String>,
        E: IntoIterator<Item = String>,
    {
        let mut normalized = BTreeSet::new();
        for token in extensions {
            normalized.insert(normalize_extension(&token)?);
        }
        if normalized.is_empty() {
            normalized = DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect();
        }

        Ok(Self {
            include_dirs: include_dirs.into_iter().collect(),
            exclude_dirs: exclude_dirs.into_iter().collect(),
            blacklist: blacklist.into_iter().map(|n| n.to_lowercase()).collect(),
            extensions: normalized,
        })
    }

    /// Configuration with no directory rules and the default extension set
    pub fn default_set() -> Self {
        Self::new(
            std::iter::empty(),
            std::iter::empty(),
            std::iter::empty(),
            std::iter::empty(),
        )
        .expect("default configuration is valid")
    }

    pub fn include_dirs(&self) -> &BTreeSet<String> {
        &self.include_dirs
    }

    pub fn exclude_dirs(&self) -> &BTreeSet<String> {
        &self.exclude_dirs
    }

    pub fn blacklist(&self) -> &BTreeSet<String> {
        &self.blacklist
    }

    pub fn extensions(&self) -> &BTreeSet<String> {
        &self.extensions
    }
}

/// Normalize an extension token to leading-dot, lowercase form
fn normalize_extension(token: &str) -> Result<String, ConfigError> {
    let trimmed = token.trim();
    let bare = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if bare.is_empty() {
        return Err(ConfigError::EmptyExtension);
    }
    Ok(format!(".{}", bare.to_lowercase()))
}
