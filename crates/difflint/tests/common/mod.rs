#![allow(dead_code)]

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn git(dir: &TempDir, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir.path())
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

pub fn init_git_repo(dir: &TempDir) {
    git(dir, &["init", "--initial-branch=main"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "user.name", "Test"]);
}

pub fn git_add_and_commit(dir: &TempDir, message: &str) {
    git(dir, &["add", "-A"]);
    git(dir, &["commit", "-m", message]);
}

pub fn create_branch(dir: &TempDir, name: &str) {
    git(dir, &["checkout", "-b", name]);
}

pub fn checkout(dir: &TempDir, name: &str) {
    git(dir, &["checkout", name]);
}

pub fn detach_head(dir: &TempDir) {
    git(dir, &["checkout", "--detach"]);
}

pub fn write_file(dir: &TempDir, path: &str, content: &str) {
    let full = dir.path().join(path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).expect("failed to create parent dir");
    }
    fs::write(full, content).expect("failed to write file");
}

/// `feature` adds `a.py`, `pkg/c.py` and `notes.txt`; `main` later adds
/// `b.py`. Leaves `feature` checked out.
pub fn diverged_repo() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    init_git_repo(&dir);

    write_file(&dir, "README.md", "# demo\n");
    git_add_and_commit(&dir, "initial");

    create_branch(&dir, "feature");
    write_file(&dir, "a.py", "print('a')\n");
    write_file(&dir, "pkg/c.py", "print('c')\n");
    write_file(&dir, "notes.txt", "notes\n");
    git_add_and_commit(&dir, "feature work");

    checkout(&dir, "main");
    write_file(&dir, "b.py", "print('b')\n");
    git_add_and_commit(&dir, "main work");

    checkout(&dir, "feature");
    dir
}
