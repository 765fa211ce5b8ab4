//! Integration tests for the login/logout subcommands against a mock backend.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a temp BOLSO_HOME directory for test isolation.
fn temp_bolso_home() -> TempDir {
    TempDir::new().expect("create temp bolso home")
}

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

#[tokio::test]
async fn test_login_persists_session_flag() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_bolso_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("email=ana%40example.com"))
        .and(body_string_contains("password=segredo"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("bolso")
        .env("BOLSO_HOME", home.path())
        .env("BOLSO_BLOCK_REAL_API", "1")
        .args([
            "--base-url",
            &server.uri(),
            "login",
            "--email",
            "ana@example.com",
            "--password",
            "segredo",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sessão salva"));

    let flag = std::fs::read_to_string(home.path().join("session")).unwrap();
    assert_eq!(flag.trim(), "1");
}

#[tokio::test]
async fn test_rejected_login_fails_without_session() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_bolso_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    cargo_bin_cmd!("bolso")
        .env("BOLSO_HOME", home.path())
        .env("BOLSO_BLOCK_REAL_API", "1")
        .args([
            "--base-url",
            &server.uri(),
            "login",
            "--email",
            "ana@example.com",
            "--password",
            "errada",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Falha no login"));

    assert!(!home.path().join("session").exists());
}

#[tokio::test]
async fn test_register_persists_session_flag() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_bolso_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_string_contains("name=Ana"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("bolso")
        .env("BOLSO_HOME", home.path())
        .env("BOLSO_BLOCK_REAL_API", "1")
        .args([
            "--base-url",
            &server.uri(),
            "register",
            "--name",
            "Ana",
            "--email",
            "ana@example.com",
            "--password",
            "segredo",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conta criada"));

    let flag = std::fs::read_to_string(home.path().join("session")).unwrap();
    assert_eq!(flag.trim(), "1");
}

#[test]
fn test_logout_clears_flag_even_when_server_is_down() {
    let home = temp_bolso_home();
    std::fs::write(home.path().join("session"), "1").unwrap();

    // Port 9 (discard) refuses connections; logout must still succeed locally.
    cargo_bin_cmd!("bolso")
        .env("BOLSO_HOME", home.path())
        .env("BOLSO_BLOCK_REAL_API", "1")
        .args(["--base-url", "http://127.0.0.1:9", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sessão encerrada"));

    assert!(!home.path().join("session").exists());
}
