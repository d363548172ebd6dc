//! Repository acquisition
//!
//! Clones a GitHub repository into a caller-owned directory by shelling out
//! to `git clone`. The core never sees this module; it only consumes the
//! resulting local path.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static GITHUB_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://github\.com/[\w-]+/[\w.-]+(?:\.git)?$").expect("valid pattern")
});

/// Whether `url` looks like a GitHub repository URL
pub fn is_valid_github_url(url: &str) -> bool {
    GITHUB_URL.is_match(url)
}

/// Repository name from its URL, without a trailing `.git`
pub fn repo_name(url: &str) -> &str {
    let last = url.rsplit('/').next().unwrap_or(url);
    last.strip_suffix(".git").unwrap_or(last)
}

/// Map raw git output to a message a user can act on
fn describe_clone_failure(stderr: &str) -> &'static str {
    let lower = stderr.to_lowercase();
    if stderr.contains("Authentication failed") || stderr.contains("could not read Username") {
        "repository is private; check the URL or your access permissions"
    } else if lower.contains("not found") {
        "repository does not exist; check the URL"
    } else {
        "repository is either private or does not exist"
    }
}

/// Clone `url` under `dest_dir`, returning the path of the checkout
pub fn clone(url: &str, dest_dir: &Path) -> Result<PathBuf> {
    if !is_valid_github_url(url) {
        bail!(
            "invalid GitHub URL format; expected https://github.com/username/repository, got {url}"
        );
    }

    let target = dest_dir.join(repo_name(url));
    let output = Command::new("git")
        .arg("clone")
        .arg(url)
        .arg(&target)
        .output()
        .context("failed to launch git; is it installed?")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("clone failed: {}", describe_clone_failure(&stderr));
    }

    Ok(target)
}
