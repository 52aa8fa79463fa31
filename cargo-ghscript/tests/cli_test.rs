use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ghscript() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cargo-ghscript"));
    cmd.env_remove("GHSCRIPT_REPO")
        .env_remove("GHSCRIPT_BRANCH")
        .env_remove("GHSCRIPT_RAW_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(content: &str) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("goreleaser.yml");
    fs::write(&config_path, content).unwrap();
    let config_path = config_path.to_string_lossy().into_owned();
    (dir, config_path)
}

#[test]
fn test_help() {
    ghscript()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--repo"));
}

#[test]
fn test_missing_repo_and_file() {
    ghscript()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("need a repo or file"));
}

#[test]
fn test_local_file() {
    let (_dir, config_path) = write_config("build:\n  binary: bar-cli\n");

    ghscript()
        .args(["--repo", "foo/bar", &config_path])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#!/bin/sh\n"))
        .stdout(predicate::str::contains("\nOWNER=foo\n"))
        .stdout(predicate::str::contains("\nREPO=bar\n"))
        .stdout(predicate::str::contains("\nBINARY=bar-cli\n"))
        .stdout(predicate::str::contains("\nFORMAT=tar.gz\n"))
        .stderr(predicate::str::contains("Reading"));
}

#[test]
fn test_cargo_subcommand_form() {
    let (_dir, config_path) = write_config(
        "release:\n  github:\n    owner: acme\n    name: widgets\n",
    );

    ghscript()
        .args(["ghscript", &config_path])
        .assert()
        .success()
        .stdout(predicate::str::contains("\nBINARY=widgets\n"));
}

#[test]
fn test_file_without_owner_repo() {
    let (_dir, config_path) = write_config("build:\n  binary: bar-cli\n");

    ghscript()
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("need to provide owner/name repo"));
}

#[test]
fn test_unsupported_name_template() {
    let (_dir, config_path) = write_config(
        r#"
archive:
  name_template: '{{ .Binary }}_{{ if eq .Os "darwin" }}mac{{ end }}'
release:
  github:
    owner: acme
    name: widgets
"#,
    );

    ghscript()
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unable to generate name"));
}

#[tokio::test]
async fn test_default_location_from_repo() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/foo/bar/master/goreleaser.yml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("build:\n  binary: bar-cli\n"))
        .mount(&server)
        .await;
    let base_url = server.uri();

    let output = tokio::task::spawn_blocking(move || {
        ghscript()
            .args(["--repo", "foo/bar", "--raw-base-url", &base_url])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\nBINARY=bar-cli\n"));
    assert!(stdout.contains("\nOWNER=foo\n"));
    assert!(stdout.contains("\nREPO=bar\n"));
    assert!(stdout.contains("\nFORMAT=tar.gz\n"));
    assert!(stdout.contains("\nNAME=${BINARY}_${OS}_${ARCH}${ARM}\n"));
}
