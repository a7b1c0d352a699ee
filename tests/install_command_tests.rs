//! Tests for the install command
//!
//! This module tests:
//! - Symlink and copy modes, including idempotent re-runs
//! - Conflict handling with and without --force
//! - Invalid folder names and unknown requested names
//! - Default destination under the home directory

mod common;

use predicates::prelude::*;
use std::fs;

#[test]
fn test_install_copy_mode() {
    let repo = common::TestRepo::new();
    repo.create_valid_skill("demo");
    repo.write_file("demo/reference/guide.md", "guide");

    repo.install_cmd()
        .args(["--mode", "copy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("COPY:"))
        .stdout(predicate::str::contains("Done. Installed: 1, Skipped: 0"));

    let target = repo.dest.join("demo");
    assert!(
        !fs::symlink_metadata(&target)
            .expect("target exists")
            .file_type()
            .is_symlink()
    );
    assert_eq!(
        fs::read_to_string(target.join("reference/guide.md")).expect("read"),
        "guide"
    );
}

#[test]
fn test_install_creates_destination_parents() {
    let repo = common::TestRepo::new();
    repo.create_valid_skill("demo");
    assert!(!repo.dest.exists());

    repo.install_cmd()
        .args(["--mode", "copy"])
        .assert()
        .success();

    assert!(repo.dest.is_dir());
}

#[test]
fn test_install_skips_existing_without_force() {
    let repo = common::TestRepo::new();
    repo.create_valid_skill("demo");
    let target = repo.dest.join("demo");
    fs::create_dir_all(&target).expect("Failed to create target");
    fs::write(target.join("local.txt"), "mine").expect("Failed to write");

    repo.install_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "SKIP (exists, use --force to overwrite)",
        ))
        .stdout(predicate::str::contains("Installed: 0, Skipped: 1"));

    assert_eq!(
        fs::read_to_string(target.join("local.txt")).expect("read"),
        "mine"
    );
    assert!(!target.join("SKILL.md").exists());
}

#[test]
fn test_install_force_copy_replaces_existing() {
    let repo = common::TestRepo::new();
    repo.create_valid_skill("demo");
    let target = repo.dest.join("demo");
    fs::create_dir_all(&target).expect("Failed to create target");
    fs::write(target.join("local.txt"), "mine").expect("Failed to write");

    repo.install_cmd()
        .args(["--mode", "copy", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OVERWRITE:"))
        .stdout(predicate::str::contains("Installed: 1, Skipped: 0"));

    assert!(!target.join("local.txt").exists());
    assert_eq!(
        fs::read_to_string(target.join("SKILL.md")).expect("read"),
        repo.read_file("demo/SKILL.md")
    );
}

#[test]
fn test_install_invalid_name_skipped_even_with_force() {
    let repo = common::TestRepo::new();
    repo.create_valid_skill("good");
    repo.create_skill("My_Skill", "My_Skill", "Bad folder name");

    repo.install_cmd()
        .args(["--mode", "copy", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SKIP (invalid folder name): My_Skill"))
        .stdout(predicate::str::contains("Installed: 1, Skipped: 1"));

    assert!(repo.dest.join("good").is_dir());
    assert!(!repo.dest.join("My_Skill").exists());
}

#[test]
fn test_install_unknown_skill_fails_up_front() {
    let repo = common::TestRepo::new();
    repo.create_valid_skill("real");

    repo.install_cmd()
        .args(["--skills", "real", "ghost"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Requested skills not found: ghost"));

    assert!(!repo.dest.exists());
}

#[test]
fn test_install_selected_skills_only() {
    let repo = common::TestRepo::new();
    repo.create_valid_skill("one");
    repo.create_valid_skill("two");

    repo.install_cmd()
        .args(["--mode", "copy", "--skills", "two"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed: 1, Skipped: 0"));

    assert!(!repo.dest.join("one").exists());
    assert!(repo.dest.join("two").is_dir());
}

#[test]
fn test_install_default_destination_under_home() {
    let repo = common::TestRepo::new();
    repo.create_valid_skill("demo");

    repo.cmd()
        .args(["install", "--mode", "copy"])
        .assert()
        .success();

    assert!(
        repo.temp
            .path()
            .join("home/.claude/skills/demo/SKILL.md")
            .is_file()
    );
}

#[test]
fn test_install_destination_from_environment() {
    let repo = common::TestRepo::new();
    repo.create_valid_skill("demo");

    repo.cmd()
        .env("SKILLPACK_DEST", &repo.dest)
        .args(["install", "--mode", "copy"])
        .assert()
        .success();

    assert!(repo.dest.join("demo/SKILL.md").is_file());
}

#[cfg(unix)]
#[test]
fn test_install_symlink_example_and_idempotent_rerun() {
    let repo = common::TestRepo::new();
    let source = repo.create_skill("code-review", "code-review", "Reviews code changes");
    let target = repo.dest.join("code-review");

    repo.install_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("LINK:"))
        .stdout(predicate::str::contains("Installed: 1, Skipped: 0"));

    assert_eq!(fs::read_link(&target).expect("should be a link"), source);

    repo.install_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("OK (already linked)"))
        .stdout(predicate::str::contains("Installed: 1, Skipped: 0"));

    assert_eq!(fs::read_link(&target).expect("should be a link"), source);
}

#[cfg(unix)]
#[test]
fn test_install_force_replaces_directory_with_link() {
    let repo = common::TestRepo::new();
    let source = repo.create_valid_skill("demo");
    fs::create_dir_all(repo.dest.join("demo/old")).expect("Failed to create target");

    repo.install_cmd()
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains("OVERWRITE:"))
        .stdout(predicate::str::contains("LINK:"));

    assert_eq!(
        fs::read_link(repo.dest.join("demo")).expect("should be a link"),
        source
    );
}

#[cfg(unix)]
#[test]
fn test_install_link_to_elsewhere_is_a_conflict() {
    let repo = common::TestRepo::new();
    repo.create_valid_skill("demo");
    let elsewhere = repo.temp.path().join("elsewhere");
    fs::create_dir_all(&elsewhere).expect("Failed to create elsewhere");
    fs::create_dir_all(&repo.dest).expect("Failed to create dest");
    std::os::unix::fs::symlink(&elsewhere, repo.dest.join("demo")).expect("Failed to link");

    repo.install_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("SKIP (exists"));

    assert_eq!(
        fs::read_link(repo.dest.join("demo")).expect("should be a link"),
        elsewhere
    );
}

#[cfg(unix)]
#[test]
fn test_install_failure_does_not_stop_other_skills() {
    let repo = common::TestRepo::new();
    repo.create_valid_skill("alpha");
    repo.create_valid_skill("beta");
    std::os::unix::fs::symlink(
        repo.root.join("alpha/missing-target"),
        repo.root.join("alpha/broken"),
    )
    .expect("Failed to create dangling link");

    repo.install_cmd()
        .args(["--mode", "copy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Done. Installed: 1, Skipped: 0, Failed: 1"))
        .stderr(predicate::str::contains("FAILED"))
        .stderr(predicate::str::contains("alpha:"));

    assert!(repo.dest.join("beta/SKILL.md").is_file());
}

#[test]
fn test_install_relative_dest_is_reported_canonical() {
    let repo = common::TestRepo::new();
    repo.create_valid_skill("demo");
    let expected = repo.root.join("local-skills").join("demo");

    repo.cmd()
        .args(["install", "--mode", "copy", "--dest", "./local-skills"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));

    assert!(expected.join("SKILL.md").is_file());
}
