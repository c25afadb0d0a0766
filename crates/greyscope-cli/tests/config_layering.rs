//! Configuration file layering tests.
//!
//! Each test pins XDG_CONFIG_HOME to an empty directory so only the
//! project-local `.greyscope.toml` under the temp working directory is
//! in play.

#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn grey_fixture(dir: &Path) -> PathBuf {
    let img = image::GrayImage::from_fn(4, 4, |_, y| match y {
        0 | 1 => image::Luma([0u8]),
        2 => image::Luma([128u8]),
        _ => image::Luma([255u8]),
    });
    let path = dir.join("grey.png");
    img.save(&path).unwrap();
    path
}

fn greyscope_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("greyscope").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg-empty"));
    cmd
}

#[test]
fn test_project_config_enables_csv() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = grey_fixture(temp_dir.path());
    std::fs::write(
        temp_dir.path().join(".greyscope.toml"),
        "[colors]\ncsv = true\nnonzero = true\n",
    )
    .unwrap();

    let mut cmd = greyscope_in(temp_dir.path());
    cmd.arg("colors").arg("-i").arg(&fixture);

    cmd.assert().success().stdout(predicate::eq(
        "0,Black,0,15,8,50.00\n8,Light Gray,128,143,4,25.00\n15,White,240,255,4,25.00\n",
    ));
}

#[test]
fn test_cli_top_overrides_config_top() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = grey_fixture(temp_dir.path());
    std::fs::write(
        temp_dir.path().join(".greyscope.toml"),
        "[colors]\ncsv = true\ntop = 1\n",
    )
    .unwrap();

    // Config alone keeps one bucket; --top 16 keeps all three non-zero ones.
    let mut cmd = greyscope_in(temp_dir.path());
    cmd.arg("colors").arg("-i").arg(&fixture);
    cmd.assert()
        .success()
        .stdout(predicate::eq("0,Black,0,15,8,50.00\n"));

    let mut cmd = greyscope_in(temp_dir.path());
    cmd.arg("colors").arg("-i").arg(&fixture).arg("--top").arg("16");
    let output = cmd.assert().success().get_output().stdout.clone();
    assert_eq!(String::from_utf8(output).unwrap().lines().count(), 3);
}

#[test]
fn test_invalid_config_top_warns_and_is_dropped() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = grey_fixture(temp_dir.path());
    std::fs::write(
        temp_dir.path().join(".greyscope.toml"),
        "[colors]\ncsv = true\ntop = 20\n",
    )
    .unwrap();

    let mut cmd = greyscope_in(temp_dir.path());
    cmd.arg("colors").arg("-i").arg(&fixture);

    // The bad value is dropped, so all 16 rows come through.
    let assert = cmd
        .assert()
        .success()
        .stderr(predicate::str::contains("colors.top"));
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 16);
}

#[test]
fn test_unparseable_config_is_ignored() {
    let temp_dir = tempfile::tempdir().unwrap();
    let fixture = grey_fixture(temp_dir.path());
    std::fs::write(temp_dir.path().join(".greyscope.toml"), "[colors\ncsv = true\n").unwrap();

    // Broken TOML falls back to defaults: Markdown table on stdout.
    let mut cmd = greyscope_in(temp_dir.path());
    cmd.arg("colors").arg("-i").arg(&fixture);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("# Color Histogram"));
}
