use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// tree: docs/a.md, docs/b.rst, test/c.md, README.md
fn sample_repo(root: &Path) {
    write_file(&root.join("docs/a.md"), "alpha\n");
    write_file(&root.join("docs/b.rst"), "beta\n");
    write_file(&root.join("test/c.md"), "gamma\n");
    write_file(&root.join("README.md"), "readme\n");
}

fn docsew_cmd() -> Command {
    Command::cargo_bin("docsew").expect("docsew binary builds")
}

#[test]
fn sews_md_files_excluding_test_dir() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    sample_repo(&repo);
    let out = temp.path().join("out");

    docsew_cmd()
        .arg("--path")
        .arg(&repo)
        .arg("-o")
        .arg(&out)
        .arg("-x")
        .arg("test")
        .assert()
        .success();

    let top = fs::read_to_string(out.join("repo/1_repo.txt")).unwrap();
    assert!(top.contains("Source File 1: README.md"));
    assert!(top.contains("readme"));

    let docs = fs::read_to_string(out.join("repo/2_docs.txt")).unwrap();
    assert!(docs.contains("Source File 1: docs/a.md"));
    assert!(docs.contains("alpha"));
    assert!(!docs.contains("b.rst"));

    // the excluded subtree produced no artifact
    assert!(!out.join("repo").read_dir().unwrap().any(|e| {
        e.unwrap()
            .file_name()
            .to_string_lossy()
            .contains("test")
    }));
}

#[test]
fn include_dirs_limits_to_docs() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    sample_repo(&repo);
    let out = temp.path().join("out");

    docsew_cmd()
        .arg("--path")
        .arg(&repo)
        .arg("-o")
        .arg(&out)
        .arg("-i")
        .arg("docs")
        .arg("-e")
        .arg(".md")
        .arg("-e")
        .arg(".rst")
        .assert()
        .success();

    let docs = fs::read_to_string(out.join("repo/1_docs.txt")).unwrap();
    assert!(docs.contains("docs/a.md"));
    assert!(docs.contains("docs/b.rst"));
    assert!(!docs.contains("README.md"));
    assert!(!docs.contains("test/c.md"));
}

#[test]
fn blacklist_drops_readme() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    sample_repo(&repo);
    let out = temp.path().join("out");

    docsew_cmd()
        .arg("--path")
        .arg(&repo)
        .arg("-o")
        .arg(&out)
        .arg("-b")
        .arg("README.md")
        .arg("-x")
        .arg("test")
        .assert()
        .success();

    let docs = fs::read_to_string(out.join("repo/1_docs.txt")).unwrap();
    assert!(docs.contains("docs/a.md"));

    for entry in out.join("repo").read_dir().unwrap() {
        let content = fs::read_to_string(entry.unwrap().path()).unwrap();
        assert!(!content.contains("Source File 1: README.md"));
    }
}

#[test]
fn json_summary_reports_counts() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    sample_repo(&repo);
    let out = temp.path().join("out");

    let assert = docsew_cmd()
        .arg("--path")
        .arg(&repo)
        .arg("-o")
        .arg(&out)
        .arg("-x")
        .arg("test")
        .arg("--summary")
        .arg("json")
        .arg("--quiet")
        .assert()
        .success();

    let summary: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid json summary");
    assert_eq!(summary["repo"], "repo");
    assert_eq!(summary["files"], 2);
    assert_eq!(summary["artifacts"].as_array().unwrap().len(), 2);
    assert!(summary["skipped"].as_array().unwrap().is_empty());
}

#[test]
fn manifest_written_next_to_artifacts() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    sample_repo(&repo);
    let out = temp.path().join("out");

    docsew_cmd()
        .arg("--path")
        .arg(&repo)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let manifest: Value = serde_json::from_str(
        &fs::read_to_string(out.join("repo/manifest.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest["repo"], "repo");
    assert!(manifest["generated_at"].is_string());
}

#[test]
fn binary_file_skipped_with_warning() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    write_file(&repo.join("docs/good.md"), "fine\n");
    fs::write(repo.join("docs/bad.md"), [0xFFu8, 0xFE, 0x00, 0x01]).unwrap();
    let out = temp.path().join("out");

    let assert = docsew_cmd()
        .arg("--path")
        .arg(&repo)
        .arg("-o")
        .arg(&out)
        .arg("--summary")
        .arg("json")
        .arg("--quiet")
        .assert()
        .success();

    let summary: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(summary["files"], 1);
    let skipped = summary["skipped"].as_array().unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0]["path"], "docs/bad.md");
}

#[test]
fn invalid_repo_url_is_fatal() {
    docsew_cmd()
        .arg("-r")
        .arg("not-a-url")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid GitHub URL"));
}

#[test]
fn empty_extension_token_is_fatal() {
    let temp = tempdir().unwrap();
    let repo = temp.path().join("repo");
    sample_repo(&repo);

    docsew_cmd()
        .arg("--path")
        .arg(&repo)
        .arg("-e")
        .arg("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty extension"));
}

#[test]
fn missing_root_is_fatal() {
    docsew_cmd()
        .arg("--path")
        .arg("/definitely/not/a/real/path")
        .assert()
        .failure();
}
