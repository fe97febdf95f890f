use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("bookstall").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Online bookstore backend"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("bookstall").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_search_flags_conflict() {
    let mut cmd = Command::cargo_bin("bookstall").unwrap();
    cmd.args(["search", "dune", "--subject", "--author"]).assert().failure();
}

#[test]
fn test_cli_attributes_are_stable() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("cli.db");

    let first = Command::cargo_bin("bookstall")
        .unwrap()
        .env("BOOKSTALL_DB_PATH", &db_path)
        .env_remove("DATABASE_URL")
        .args(["attributes", "vol-1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = Command::cargo_bin("bookstall")
        .unwrap()
        .env("BOOKSTALL_DB_PATH", &db_path)
        .env_remove("DATABASE_URL")
        .args(["attributes", "vol-1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(first, second);
    assert!(String::from_utf8_lossy(&first).contains("\"price\""));
}

#[test]
fn test_cli_like_unknown_book_fails() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("bookstall")
        .unwrap()
        .env("BOOKSTALL_DB_PATH", dir.path().join("cli.db"))
        .env_remove("DATABASE_URL")
        .args(["like", "ghost", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
