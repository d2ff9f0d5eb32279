#![allow(clippy::unwrap_used)]
//! End-to-end runs of the translate command against a local Gemini stand-in.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SOURCE: &str = "fn main() {\n// این یک تست است\n// خط دوم\n    run();\n}\n";

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(credentials: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("credentials.toml"), credentials).unwrap();
        fs::write(dir.path().join("main.rs"), SOURCE).unwrap();
        Self { dir }
    }

    fn with_credentials() -> Self {
        Self::new("api_key = \"test-key\"\napi_model = \"gemini-2.0-flash\"\n")
    }

    fn source(&self) -> PathBuf {
        self.dir.path().join("main.rs")
    }

    #[allow(deprecated)]
    fn command(&self, server: &MockServer) -> Command {
        let mut cmd = Command::cargo_bin("commenti").unwrap();
        cmd.env("COMMENTI_CREDENTIALS", self.dir.path().join("credentials.toml"))
            .env("COMMENTI_API_BASE", server.uri())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

fn gemini_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
    }))
}

async fn mount(server: &MockServer, response: ResponseTemplate, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(response)
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_write_rewrites_selected_lines_in_place() {
    let server = MockServer::start().await;
    mount(&server, gemini_reply("This is a test\nSecond line\n"), 1).await;
    let ws = Workspace::with_credentials();

    ws.command(&server)
        .arg(ws.source())
        .args(["--lines", "2-3", "--write"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Translated 2 line(s)."));

    assert_eq!(
        fs::read_to_string(ws.source()).unwrap(),
        "fn main() {\n// This is a test\n// Second line\n    run();\n}\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_without_write_prints_document() {
    let server = MockServer::start().await;
    mount(&server, gemini_reply("This is a test\nSecond line"), 1).await;
    let ws = Workspace::with_credentials();

    ws.command(&server)
        .arg(ws.source())
        .args(["--lines", "2-3"])
        .assert()
        .success()
        .stdout("fn main() {\n// This is a test\n// Second line\n    run();\n}\n");

    assert_eq!(fs::read_to_string(ws.source()).unwrap(), SOURCE);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_failure_leaves_file_untouched() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(500).set_body_string("internal"),
        1,
    )
    .await;
    let ws = Workspace::with_credentials();

    ws.command(&server)
        .arg(ws.source())
        .args(["--lines", "2-3", "--write"])
        .assert()
        .code(69)
        .stderr(predicate::str::contains(
            "An error occurred while getting response from gemini!",
        ))
        .stderr(predicate::str::contains("test-key").not());

    assert_eq!(fs::read_to_string(ws.source()).unwrap(), SOURCE);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_translation_reports_error() {
    let server = MockServer::start().await;
    mount(&server, gemini_reply(""), 1).await;
    let ws = Workspace::with_credentials();

    ws.command(&server)
        .arg(ws.source())
        .args(["--lines", "2-3", "--write"])
        .assert()
        .code(69)
        .stderr(predicate::str::contains("An error occurred!"));

    assert_eq!(fs::read_to_string(ws.source()).unwrap(), SOURCE);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_short_translation_keeps_trailing_lines() {
    let server = MockServer::start().await;
    mount(&server, gemini_reply("This is a test\n"), 1).await;
    let ws = Workspace::with_credentials();

    ws.command(&server)
        .arg(ws.source())
        .args(["--lines", "2-3", "--write"])
        .assert()
        .success()
        .stderr(predicate::str::contains("1 line(s) left unchanged"));

    assert_eq!(
        fs::read_to_string(ws.source()).unwrap(),
        "fn main() {\n// This is a test\n// خط دوم\n    run();\n}\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_credentials_without_terminal_sends_nothing() {
    let server = MockServer::start().await;
    mount(&server, gemini_reply("unused"), 0).await;
    let ws = Workspace::new("");

    ws.command(&server)
        .arg(ws.source())
        .args(["--lines", "2-3", "--write"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to read the Gemini API key",
        ))
        .stderr(predicate::str::contains("not a TTY"));

    assert_eq!(fs::read_to_string(ws.source()).unwrap(), SOURCE);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_selection_past_end_of_file_fails() {
    let server = MockServer::start().await;
    mount(&server, gemini_reply("unused"), 0).await;
    let ws = Workspace::with_credentials();

    ws.command(&server)
        .arg(ws.source())
        .args(["--lines", "4-40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no line 6"));
}
