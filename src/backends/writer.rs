//! Output writing
//!
//! Persists the aggregated document under the output directory. Sections are
//! grouped by their source folder, one artifact file per folder, each opened
//! by a banner naming the folder and the number of files merged into it. A
//! manifest.json with run metadata sits next to the artifacts.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::aggregate::{AggregatedDocument, Section, SkipWarning};
use crate::core::run::RunReport;

/// Banner rule drawn around each folder header
pub const FOLDER_RULE: &str = "##################################################";

/// Run metadata written next to the artifacts
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub repo: String,
    pub generated_at: DateTime<Utc>,
    pub folders: usize,
    pub files: usize,
    pub artifacts: Vec<String>,
    pub skipped: Vec<SkipWarning>,
    pub traversal_errors: Vec<String>,
}

/// Sections grouped by parent folder, in first-seen order
fn group_by_folder(document: &AggregatedDocument) -> Vec<(String, Vec<&Section>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<&Section>> = HashMap::new();

    for section in &document.sections {
        let folder = match section.path.rsplit_once('/') {
            Some((dir, _)) => dir.to_string(),
            None => String::new(),
        };
        if !groups.contains_key(&folder) {
            order.push(folder.clone());
        }
        groups.entry(folder).or_default().push(section);
    }

    order
        .into_iter()
        .map(|folder| {
            let sections = groups.remove(&folder).unwrap_or_default();
            (folder, sections)
        })
        .collect()
}

fn folder_banner(folder: &str, file_count: usize) -> String {
    let display = if folder.is_empty() { "." } else { folder };
    format!(
        "{rule}\n# Folder: {display}\n# Number of files merged: {file_count}\n{rule}\n",
        rule = FOLDER_RULE,
    )
}

/// Artifact filename for the n-th folder group
fn artifact_name(index: usize, folder: &str, repo: &str) -> String {
    let leaf = match folder.rsplit_once('/') {
        Some((_, last)) => last,
        None if folder.is_empty() => repo,
        None => folder,
    };
    format!("{}_{}.txt", index, leaf)
}

/// Write one artifact per folder group plus the manifest
///
/// Returns the paths of all written artifact files, in write order.
pub fn write_report(report: &RunReport, repo: &str, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let target_dir = output_dir.join(repo);
    fs::create_dir_all(&target_dir)
        .with_context(|| format!("cannot create output directory {}", target_dir.display()))?;

    let groups = group_by_folder(&report.document);
    let mut written = Vec::new();

    for (index, (folder, sections)) in groups.iter().enumerate() {
        let mut content = folder_banner(folder, sections.len());
        content.push('\n');
        for (i, section) in sections.iter().enumerate() {
            content.push_str(&AggregatedDocument::render_section(i, section));
            content.push('\n');
        }

        let path = target_dir.join(artifact_name(index + 1, folder, repo));
        fs::write(&path, content)
            .with_context(|| format!("cannot write artifact {}", path.display()))?;
        written.push(path);
    }

    let manifest = Manifest {
        repo: repo.to_string(),
        generated_at: Utc::now(),
        folders: groups.len(),
        files: report.document.len(),
        artifacts: written
            .iter()
            .map(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default()
            })
            .collect(),
        skipped: report.skipped.clone(),
        traversal_errors: report
            .traversal_errors
            .iter()
            .map(|e| e.to_string())
            .collect(),
    };
    let manifest_path = target_dir.join("manifest.json");
    let json = serde_json::to_string_pretty(&manifest)?;
    fs::write(&manifest_path, json)
        .with_context(|| format!("cannot write manifest {}", manifest_path.display()))?;

    Ok(written)
}
