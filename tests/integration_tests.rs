//! Integration tests for the dirsift CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Build a command isolated from the user's config and environment
fn dirsift(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dirsift").unwrap();
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env_remove("DIRSIFT_QUERY__RECURSIVE")
        .env_remove("DIRSIFT_QUERY__SHOW_HIDDEN")
        .env_remove("DIRSIFT_OUTPUT__FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

fn fixture() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("data");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("a.png"), "").unwrap();
    fs::write(root.join("b.txt"), "").unwrap();
    fs::write(root.join(".hidden.png"), "").unwrap();
    fs::write(root.join("sub/c.txt"), "").unwrap();
    temp_dir
}

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().unwrap();
    dirsift(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("file categories"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().unwrap();
    dirsift(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dirsift"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let temp_dir = TempDir::new().unwrap();
    dirsift(temp_dir.path())
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_list_excludes_hidden_by_default() {
    let temp_dir = fixture();
    dirsift(temp_dir.path())
        .args(["list", "data"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.png"))
        .stdout(predicate::str::contains("b.txt"))
        .stdout(predicate::str::contains(".hidden.png").not())
        .stdout(predicate::str::contains("c.txt").not());
}

#[test]
fn test_list_with_flags() {
    let temp_dir = fixture();
    dirsift(temp_dir.path())
        .args(["list", "data", "-t", "image", "--hidden"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".hidden.png"))
        .stdout(predicate::str::contains("b.txt").not());

    dirsift(temp_dir.path())
        .args(["list", "data", "-e", "TXT", "-r"])
        .assert()
        .success()
        .stdout(predicate::str::contains("b.txt"))
        .stdout(predicate::str::contains("c.txt"));
}

#[test]
fn test_list_json() {
    let temp_dir = fixture();
    let output = dirsift(temp_dir.path())
        .args(["--format", "json", "list", "data", "--dirs", "-e", "txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].ends_with("sub"));
}

#[test]
fn test_count() {
    let temp_dir = fixture();
    dirsift(temp_dir.path())
        .args(["count", "data", "-r", "-e", "txt"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_tree_json() {
    let temp_dir = fixture();
    let output = dirsift(temp_dir.path())
        .args(["--format", "json", "tree", "data", "-r", "-e", "txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tree, serde_json::json!({ "b.txt": null, "sub": { "c.txt": null } }));
}

#[test]
fn test_tree_rejects_dirs() {
    let temp_dir = fixture();
    dirsift(temp_dir.path())
        .args(["tree", "data", "--dirs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dirs"));
}

#[test]
fn test_unknown_type_lists_valid_types() {
    let temp_dir = fixture();
    dirsift(temp_dir.path())
        .args(["list", "data", "-t", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("foo"))
        .stderr(predicate::str::contains("image, text, pdf"));
}

#[test]
fn test_missing_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    dirsift(temp_dir.path())
        .args(["list", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_project_config_sets_defaults() {
    let temp_dir = fixture();
    fs::write(temp_dir.path().join("dirsift.toml"), "[query]\nrecursive = true\n").unwrap();
    dirsift(temp_dir.path())
        .args(["count", "data", "-e", "txt"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_no_recursive_overrides_project_config() {
    let temp_dir = fixture();
    fs::write(
        temp_dir.path().join("dirsift.toml"),
        "[query]\nrecursive = true\nshow_hidden = true\n",
    )
    .unwrap();
    dirsift(temp_dir.path())
        .args(["count", "data", "--no-recursive", "--no-hidden"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_categories() {
    let temp_dir = TempDir::new().unwrap();
    dirsift(temp_dir.path())
        .args(["categories", "--ext", "PNG"])
        .assert()
        .success()
        .stdout(predicate::str::contains("image"))
        .stdout(predicate::str::contains("archive").not());
}

#[test]
fn test_many() {
    let temp_dir = fixture();
    fs::create_dir(temp_dir.path().join("other")).unwrap();
    fs::write(temp_dir.path().join("other/d.txt"), "").unwrap();

    let output = dirsift(temp_dir.path())
        .args(["--format", "json", "many", "data", "other", "-e", "txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let listings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listings.as_array().unwrap().len(), 2);
    assert_eq!(listings[1]["entries"].as_array().unwrap().len(), 1);
}
