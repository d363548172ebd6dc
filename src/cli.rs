//! CLI module - command-line interface definitions and handlers

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use serde::Serialize;

use crate::backends::{git, writer};
use crate::core::aggregate::SkipWarning;
use crate::core::config::FilterConfig;

/// docsew - clone a repository and sew its documentation into combined artifacts.
#[derive(Parser, Debug)]
#[command(name = "docsew")]
#[command(
    author,
    version,
    about,
    long_about = r#"docsew aggregates documentation files from a repository into combined
text artifacts, one per source folder, ready for ingestion by
document-oriented tools.

The selection pipeline filters candidate files by extension whitelist,
filename blacklist, and include/exclude directory rules. Excluded
directories always win over included ones.

Examples:
    docsew -r https://github.com/rust-lang/book
    docsew -r https://github.com/user/repo -i docs -x test
    docsew --path ./checkout -e .md -e .rst -b CHANGELOG.md
"#
)]
#[command(group(clap::ArgGroup::new("source").required(true).args(["repo_url", "path"])))]
pub struct Cli {
    /// GitHub repository URL to clone.
    #[arg(
        short = 'r',
        long,
        value_name = "URL",
        long_help = "GitHub repository URL to clone into a temporary directory.\n\n\
Expected format: https://github.com/username/repository"
    )]
    pub repo_url: Option<String>,

    /// Use a local directory instead of cloning.
    #[arg(
        long,
        value_name = "DIR",
        long_help = "Use an already-materialized local directory tree as the root.\n\n\
No network or git operations are performed."
    )]
    pub path: Option<PathBuf>,

    /// Output directory for the combined artifacts.
    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        long_help = "Destination directory for the artifacts. A subdirectory named after\n\
the repository is created inside it.\n\n\
Defaults to ~/.docsew."
    )]
    pub output_dir: Option<PathBuf>,

    /// Only include files under directories with this name (repeatable).
    #[arg(
        short = 'i',
        long = "include-dirs",
        value_name = "NAME",
        long_help = "Directory name that qualifies files beneath it for inclusion.\n\n\
Repeatable. When omitted, all directories are considered."
    )]
    pub include_dirs: Vec<String>,

    /// Exclude files under directories with this name (repeatable).
    #[arg(
        short = 'x',
        long = "exclude-dirs",
        value_name = "NAME",
        long_help = "Directory name whose subtree is excluded from the output.\n\n\
Repeatable. Exclusion always wins over inclusion."
    )]
    pub exclude_dirs: Vec<String>,

    /// Filename to always exclude, regardless of directory (repeatable).
    #[arg(short = 'b', long, value_name = "NAME")]
    pub blacklist: Vec<String>,

    /// File extension to include (repeatable).
    #[arg(
        short = 'e',
        long,
        value_name = "EXT",
        long_help = "File extension to whitelist, with or without the leading dot.\n\n\
Repeatable. Defaults to .md and .mdx when omitted."
    )]
    pub extensions: Vec<String>,

    /// Summary format (text/json).
    #[arg(
        long,
        default_value = "text",
        value_parser = ["text", "json"],
        value_name = "FORMAT",
        long_help = "Select the run summary format.\n\n\
Supported values:\n\
- text (default): colored status lines on stderr\n\
- json: machine-readable summary on stdout"
    )]
    pub summary: String,

    /// Quiet mode (suppress status lines).
    #[arg(short, long)]
    pub quiet: bool,
}

/// Machine-readable run summary for --summary json
#[derive(Debug, Serialize)]
struct RunSummary {
    repo: String,
    output_dir: String,
    files: usize,
    artifacts: Vec<String>,
    skipped: Vec<SkipWarning>,
    traversal_errors: Vec<String>,
}

/// Default artifact destination, as an explicit constant location under HOME
fn default_output_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".docsew")
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = FilterConfig::new(
        cli.include_dirs,
        cli.exclude_dirs,
        cli.blacklist,
        cli.extensions,
    )?;
    let output_dir = cli.output_dir.unwrap_or_else(default_output_dir);

    // the clone's temp dir must outlive the run
    let mut clone_dir: Option<tempfile::TempDir> = None;
    let (root, repo) = if let Some(path) = cli.path {
        let root = path
            .canonicalize()
            .with_context(|| format!("cannot resolve path {}", path.display()))?;
        let repo = root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "source".to_string());
        (root, repo)
    } else if let Some(url) = cli.repo_url {
        let temp = tempfile::tempdir().context("cannot create temporary directory")?;
        if !cli.quiet {
            eprintln!("{}", format!("Cloning repo: {}", url).blue());
        }
        let root = git::clone(&url, temp.path())?;
        if !cli.quiet {
            eprintln!(
                "{}",
                format!("Successfully cloned repository to: {}", root.display()).green()
            );
        }
        let repo = git::repo_name(&url).to_string();
        clone_dir = Some(temp);
        (root, repo)
    } else {
        // clap's arg group enforces this; kept for direct callers
        bail!("either --repo-url or --path must be provided");
    };

    if !cli.quiet {
        eprintln!("{}", "Analyzing...".blue());
    }
    let report = crate::core::run::run(&root, &config)?;

    if !cli.quiet {
        eprintln!(
            "{}",
            format!("Found {} files to merge.", report.document.len()).blue()
        );
    }

    let artifacts = writer::write_report(&report, &repo, &output_dir)?;

    let summary = RunSummary {
        repo,
        output_dir: output_dir.display().to_string(),
        files: report.document.len(),
        artifacts: artifacts
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
        skipped: report.skipped.clone(),
        traversal_errors: report
            .traversal_errors
            .iter()
            .map(|e| e.to_string())
            .collect(),
    };

    match cli.summary.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        _ => {
            for warning in &summary.skipped {
                eprintln!(
                    "{}",
                    format!("Skipped {}: {}", warning.path, warning.reason).yellow()
                );
            }
            for error in &summary.traversal_errors {
                eprintln!("{}", error.red());
            }
            if !cli.quiet {
                eprintln!(
                    "{}",
                    format!(
                        "Done! Wrote {} artifact(s) to {}",
                        summary.artifacts.len(),
                        summary.output_dir
                    )
                    .green()
                    .bold()
                );
            }
        }
    }

    drop(clone_dir);

    Ok(())
}
