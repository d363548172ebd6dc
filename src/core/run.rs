//! Run orchestration
//!
//! Composes walker -> matcher -> aggregator against a resolved local root.
//! The only place with knowledge of all three; wiring is explicit.

use std::path::Path;

use crate::core::aggregate::{aggregate, AggregatedDocument, SkipWarning};
use crate::core::config::{ConfigError, FilterConfig};
use crate::core::matcher::{matches, CandidatePath};
use crate::core::walker::{walk, TraversalError};

/// Everything a run produced: the document plus all recoverable errors.
/// Recoverable errors never abort the run; they are collected here so the
/// caller can report them alongside the output.
#[derive(Debug)]
pub struct RunReport {
    pub document: AggregatedDocument,
    pub skipped: Vec<SkipWarning>,
    pub traversal_errors: Vec<TraversalError>,
}

impl RunReport {
    pub fn has_warnings(&self) -> bool {
        !self.skipped.is_empty() || !self.traversal_errors.is_empty()
    }
}

/// Run the full selection-and-aggregation pipeline over `root`
///
/// Only configuration-level problems are fatal; they are detected here,
/// before traversal begins.
pub fn run(root: &Path, config: &FilterConfig) -> Result<RunReport, ConfigError> {
    if root.as_os_str().is_empty() {
        return Err(ConfigError::EmptyRoot);
    }
    if !root.exists() {
        return Err(ConfigError::RootNotFound(root.display().to_string()));
    }
    if !root.is_dir() {
        return Err(ConfigError::RootNotADirectory(root.display().to_string()));
    }

    let mut traversal_errors = Vec::new();
    let accepted: Vec<CandidatePath> = walk(root, config)
        .filter_map(|item| match item {
            Ok(candidate) => matches(&candidate, config).accepted.then_some(candidate),
            Err(err) => {
                traversal_errors.push(err);
                None
            }
        })
        .collect();

    let (document, skipped) = aggregate(accepted, root);

    Ok(RunReport {
        document,
        skipped,
        traversal_errors,
    })
}
