mod common;

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

use common::{detach_head, diverged_repo};

#[test]
fn files_lists_only_branch_changes_with_extension() {
    let repo = diverged_repo();

    assert_cmd::cargo::cargo_bin_cmd!("difflint")
        .args(["files", "--base", "main", "--compare", "feature"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(contains("a.py"))
        .stdout(contains("c.py"))
        .stdout(contains("b.py").not())
        .stdout(contains("notes.txt").not());
}

#[test]
fn files_count_prints_number_only() {
    let repo = diverged_repo();

    assert_cmd::cargo::cargo_bin_cmd!("difflint")
        .args(["files", "--base", "main", "--count"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn files_extension_flag_changes_filter() {
    let repo = diverged_repo();

    assert_cmd::cargo::cargo_bin_cmd!("difflint")
        .args(["files", "--base", "main", "--extension", ".txt"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(contains("notes.txt"))
        .stdout(contains("a.py").not());
}

#[test]
fn files_unknown_compare_branch_lists_nothing() {
    let repo = diverged_repo();

    assert_cmd::cargo::cargo_bin_cmd!("difflint")
        .args(["files", "--base", "main", "--compare", "gone", "--count"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn files_path_flag_selects_repository() {
    let repo = diverged_repo();
    let elsewhere = TempDir::new().expect("failed to create temp dir");

    assert_cmd::cargo::cargo_bin_cmd!("difflint")
        .arg("-C")
        .arg(repo.path())
        .args(["files", "--base", "main", "--count"])
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn files_detached_head_needs_explicit_compare() {
    let repo = diverged_repo();
    detach_head(&repo);

    assert_cmd::cargo::cargo_bin_cmd!("difflint")
        .args(["files", "--base", "main"])
        .current_dir(repo.path())
        .assert()
        .failure()
        .stderr(contains("detached"));
}

#[test]
fn files_outside_repository_fails() {
    let dir = TempDir::new().expect("failed to create temp dir");

    assert_cmd::cargo::cargo_bin_cmd!("difflint")
        .args(["files", "--base", "main"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(contains("not a git repository"));
}

#[test]
fn version_flag_reports_package_version() {
    assert_cmd::cargo::cargo_bin_cmd!("difflint")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::starts_with(concat!(
            "difflint ",
            env!("CARGO_PKG_VERSION")
        )));
}
