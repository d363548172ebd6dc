//! Directory traversal
//!
//! Depth-first walk over a local directory tree using walkdir, producing
//! candidate paths in a stable lexicographic order so repeated runs over the
//! same tree yield identical sequences. Filtering is the matcher's job; the
//! walker only prunes descent into excluded directories, since no descendant
//! of an excluded directory can ever be accepted.

use std::path::Path;

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::core::config::FilterConfig;
use crate::core::matcher::CandidatePath;
use crate::core::paths::make_relative;

/// A subtree that could not be read; the walk continues with its siblings
#[derive(Debug, Error)]
#[error("cannot traverse {path}: {source}")]
pub struct TraversalError {
    pub path: String,
    #[source]
    pub source: walkdir::Error,
}

impl From<walkdir::Error> for TraversalError {
    fn from(source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        Self { path, source }
    }
}

fn pruned(entry: &DirEntry, config: &FilterConfig) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| config.exclude_dirs().contains(name))
            .unwrap_or(false)
}

/// Walk the tree rooted at `root`, yielding candidate file paths in
/// deterministic depth-first order
///
/// Each call starts a fresh traversal. Symbolic links are not followed and
/// non-regular files are skipped. Unreadable directories surface as
/// `TraversalError` items instead of aborting the walk.
pub fn walk<'a>(
    root: &'a Path,
    config: &'a FilterConfig,
) -> impl Iterator<Item = Result<CandidatePath, TraversalError>> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !pruned(entry, config))
        .filter_map(move |result| match result {
            Ok(entry) => {
                if !entry.file_type().is_file() {
                    return None;
                }
                let rel = make_relative(entry.path(), root)?;
                CandidatePath::new(&rel).map(Ok)
            }
            Err(err) => Some(Err(TraversalError::from(err))),
        })
}
