use assert_cmd::prelude::*;
use predicates::prelude::predicate;
use std::process::Command;

#[test]
fn unknown_icon_test() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("iconfinder")?;

    cmd.arg("iconfinder-test-nonexistent-icon-name");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no icon found"));

    Ok(())
}

#[test]
fn empty_icon_name_test() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("iconfinder")?;

    cmd.arg("");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));

    Ok(())
}

#[test]
fn missing_argument_test() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("iconfinder")?;

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    Ok(())
}
