use std::fs::{self, File, create_dir_all};
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

const EPISODE_PATTERN: &str = r"media/ShowA/.*S([0-9]{2})E([0-9]{2}).*\.mkv";
const EPISODE_TEMPLATE: &str = "out/Season $1/ShowA S$1E$2.mkv";

fn media_library() -> TempDir {
    let dir = tempdir().expect("Failed to create temp directory");
    let show = dir.path().join("media/ShowA");
    create_dir_all(&show).expect("Failed to create show directory");
    File::create(show.join("ShowA.S01E02.mkv")).expect("Failed to create episode");
    dir
}

fn supalink(dir: &Path) -> Command {
    let mut command = Command::cargo_bin("supalink").expect("Binary not built");
    command.current_dir(dir);
    command
}

#[test]
fn test_dry_run_shows_mapping_without_linking() {
    let dir = media_library();

    supalink(dir.path())
        .args([EPISODE_PATTERN, EPISODE_TEMPLATE, "--dry-run", "--format", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("media/ShowA/ShowA.S01E02.mkv"))
        .stdout(predicate::str::contains("out/Season 01/ShowA S01E02.mkv"))
        .stdout(predicate::str::contains("Dry run enabled"));

    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_tree_format_is_the_default() {
    let dir = media_library();

    supalink(dir.path())
        .args([EPISODE_PATTERN, EPISODE_TEMPLATE, "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("└── ShowA.S01E02.mkv"))
        .stdout(predicate::str::contains("└── ShowA S01E02.mkv"));
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_created() {
    let dir = media_library();

    supalink(dir.path())
        .args([EPISODE_PATTERN, EPISODE_TEMPLATE])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 1 symlink(s), 0 failed"));

    let link = dir.path().join("out/Season 01/ShowA S01E02.mkv");
    let target = fs::read_link(&link).expect("Destination should be a symlink");
    assert!(target.is_absolute());
    assert!(target.ends_with("media/ShowA/ShowA.S01E02.mkv"));
}

#[cfg(unix)]
#[test]
fn test_existing_destination_is_reported_but_not_fatal() {
    let dir = media_library();
    let taken = dir.path().join("out/Season 01/ShowA S01E02.mkv");
    create_dir_all(taken.parent().unwrap()).unwrap();
    fs::write(&taken, "already here").unwrap();

    supalink(dir.path())
        .args([EPISODE_PATTERN, EPISODE_TEMPLATE])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to create symlink"))
        .stdout(predicate::str::contains("Created 0 symlink(s), 1 failed"))
        .stdout(predicate::str::contains("1 symlink(s) could not be created"));

    assert_eq!(fs::read_to_string(&taken).unwrap(), "already here");
}

#[test]
fn test_declined_confirmation_creates_nothing() {
    let dir = media_library();

    supalink(dir.path())
        .args([EPISODE_PATTERN, EPISODE_TEMPLATE, "--confirm"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you sure"))
        .stdout(predicate::str::contains("Operation cancelled by user."));

    assert!(!dir.path().join("out").exists());
}

#[test]
fn test_no_matches_is_not_an_error() {
    let dir = media_library();

    supalink(dir.path())
        .args([r"media/ShowA/.*\.avi", "out/$1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching paths found."));
}

#[test]
fn test_invalid_pattern_fails() {
    let dir = media_library();

    supalink(dir.path())
        .args(["media/ShowA/(unclosed", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid source pattern"));
}

#[test]
fn test_step_exhaustion_fails() {
    let dir = media_library();
    File::create(dir.path().join("media/ShowA/ShowA.S01E03.mkv")).unwrap();

    supalink(dir.path())
        .args([EPISODE_PATTERN, "out/Part $STEP/E$2.mkv", "-s", "1", "-d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Exceeded the number of defined steps"));
}

#[test]
fn test_invalid_step_value_fails() {
    let dir = media_library();

    supalink(dir.path())
        .args([EPISODE_PATTERN, EPISODE_TEMPLATE, "-s", "zero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid step value: zero"));
}

#[test]
fn test_settings_file_provides_defaults() {
    let dir = media_library();
    File::create(dir.path().join("media/ShowA/ShowA.S01E03.mkv")).unwrap();
    fs::write(
        dir.path().join("supalink.yaml"),
        "steps: [1, 1]\ndry_run: true\nformat: table\n",
    )
    .unwrap();

    supalink(dir.path())
        .args([EPISODE_PATTERN, "out/Part $STEP/E$2.mkv", "--config", "supalink.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("out/Part 1/E02.mkv"))
        .stdout(predicate::str::contains("out/Part 2/E03.mkv"))
        .stdout(predicate::str::contains("Dry run enabled"));
}

#[test]
fn test_missing_arguments_fail() {
    let dir = media_library();

    supalink(dir.path())
        .arg(EPISODE_PATTERN)
        .assert()
        .failure();
}
