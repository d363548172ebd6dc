//! Path matching
//!
//! Pure predicate logic deciding whether a single candidate path qualifies for
//! aggregation. Rules apply in a fixed precedence order and the first failing
//! rule rejects the path; exclusion is evaluated unconditionally, so an
//! excluded directory always wins over an included one.

use crate::core::config::FilterConfig;

/// A file path relative to the repository root, decomposed into directory
/// segments and a final filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePath {
    rel: String,
    dirs: Vec<String>,
    file_name: String,
}

impl CandidatePath {
    /// Build from a '/'-separated root-relative path. Returns `None` for an
    /// empty path or one without a filename component.
    pub fn new(relative: &str) -> Option<Self> {
        let mut segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        let file_name = segments.pop()?.to_string();
        Some(Self {
            rel: relative.trim_matches('/').to_string(),
            dirs: segments.into_iter().map(|s| s.to_string()).collect(),
            file_name,
        })
    }

    /// Root-relative path with '/' separators
    pub fn relative(&self) -> &str {
        &self.rel
    }

    /// Ancestor directory segments, outermost first
    pub fn dir_segments(&self) -> &[String] {
        &self.dirs
    }

    /// Parent directory as a '/'-joined string, empty for root-level files
    pub fn parent(&self) -> String {
        self.dirs.join("/")
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Lowercased extension including the leading dot. A lone leading dot
    /// (dotfiles such as `.gitignore`) does not count as an extension.
    pub fn extension(&self) -> Option<String> {
        match self.file_name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(self.file_name[idx..].to_lowercase()),
        }
    }
}

/// The rule that rejected a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Extension,
    Blacklist,
    ExcludedDir,
    NotIncluded,
}

/// Outcome of matching one candidate, with the violated rule for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchDecision {
    pub accepted: bool,
    pub rejected_by: Option<Rule>,
}

impl MatchDecision {
    fn accept() -> Self {
        Self {
            accepted: true,
            rejected_by: None,
        }
    }

    fn reject(rule: Rule) -> Self {
        Self {
            accepted: false,
            rejected_by: Some(rule),
        }
    }
}

/// Apply all filter rules to a candidate, in precedence order
pub fn matches(candidate: &CandidatePath, config: &FilterConfig) -> MatchDecision {
    if !extension_allowed(candidate, config) {
        return MatchDecision::reject(Rule::Extension);
    }
    if blacklisted(candidate, config) {
        return MatchDecision::reject(Rule::Blacklist);
    }
    if in_excluded_dir(candidate, config) {
        return MatchDecision::reject(Rule::ExcludedDir);
    }
    if !include_satisfied(candidate, config) {
        return MatchDecision::reject(Rule::NotIncluded);
    }
    MatchDecision::accept()
}

fn extension_allowed(candidate: &CandidatePath, config: &FilterConfig) -> bool {
    candidate
        .extension()
        .map(|ext| config.extensions().contains(&ext))
        .unwrap_or(false)
}

fn blacklisted(candidate: &CandidatePath, config: &FilterConfig) -> bool {
    config
        .blacklist()
        .contains(&candidate.file_name().to_lowercase())
}

fn in_excluded_dir(candidate: &CandidatePath, config: &FilterConfig) -> bool {
    candidate
        .dir_segments()
        .iter()
        .any(|seg| config.exclude_dirs().contains(seg))
}

fn include_satisfied(candidate: &CandidatePath, config: &FilterConfig) -> bool {
    if config.include_dirs().is_empty() {
        return true;
    }
    candidate
        .dir_segments()
        .iter()
        .any(|seg| config.include_dirs().contains(seg))
}
