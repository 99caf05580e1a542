use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn inspect_renders_indented_tree() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("doc.xml");
    fs::write(
        &path,
        r#"<x:root xmlns:x="urn:a"><group><item>v</item></group></x:root>"#,
    )
    .expect("write fixture");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("xml-assert"));
    cmd.arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("x:root"))
        .stdout(predicate::str::contains("  group"))
        .stdout(predicate::str::contains("    item \"v\""));
}

#[test]
fn depth_limits_rendering() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("doc.xml");
    fs::write(&path, "<root><group><item>v</item></group></root>").expect("write fixture");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("xml-assert"));
    cmd.arg("inspect")
        .arg(&path)
        .arg("--depth")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("group"))
        .stdout(predicate::str::contains("item").not());
}

#[test]
fn prune_empty_drops_empty_branches() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("doc.xml");
    fs::write(&path, "<root><hollow><inner/></hollow><kept>v</kept></root>")
        .expect("write fixture");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("xml-assert"));
    cmd.arg("inspect")
        .arg(&path)
        .arg("--prune-empty")
        .assert()
        .success()
        .stdout(predicate::str::contains("kept"))
        .stdout(predicate::str::contains("hollow").not());
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("doc.xml");
    fs::write(&path, "<root><broken>").expect("write fixture");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("xml-assert"));
    cmd.arg("inspect")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}
