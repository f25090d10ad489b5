//
//  podio
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use predicates::prelude::*;

fn podio() -> Command {
    let mut cmd = Command::cargo_bin("podio").unwrap();
    cmd.env_remove("PODIO_TOKEN")
        .env_remove("PODIO_BASE_URL")
        .env_remove("PODIO_CLIENT_ID")
        .env_remove("PODIO_CLIENT_SECRET");
    cmd
}

#[test]
fn test_help_lists_commands() {
    podio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("item"))
        .stdout(predicate::str::contains("auth"));
}

#[test]
fn test_version() {
    podio()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("podio version "));
}

#[test]
fn test_item_view_without_token_fails() {
    let dir = tempfile::tempdir().unwrap();
    podio()
        .env("PODIO_CONFIG", dir.path().join("config.toml"))
        .args(["item", "view", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No access token"));
}

#[test]
fn test_auth_without_client_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    podio()
        .env("PODIO_CONFIG", dir.path().join("config.toml"))
        .args(["auth", "app", "42", "--app-token", "secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No client id"));
}

#[test]
fn test_item_view_not_found_exit_code() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/item/7")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error":"not_found","error_description":"missing"}"#)
        .create();

    let url = server.url();
    let dir = tempfile::tempdir().unwrap();
    podio()
        .env("PODIO_CONFIG", dir.path().join("config.toml"))
        .args(["--token", "T1", "--base-url", url.as_str(), "item", "view", "7"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("not_found: missing"));

    mock.assert();
}
