// Tests driving the decs-scores binary

use mockito::{Matcher, Server};
use serde_json::json;
use std::process::{Command, Output};

fn run(args: &[&str], base_url: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_decs-scores"));
    cmd.args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env_remove("RUST_LOG");
    if let Some(url) = base_url {
        cmd.env("DECS__SERVICE__BASE_URL", url);
    }
    cmd.output().expect("run decs-scores")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_no_argument_prints_usage() {
    let output = run(&[], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

#[test]
fn test_missing_file_exits_with_error() {
    let output = run(&["file=doesnotexist.txt"], None);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("doesnotexist.txt"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_prints_url_then_scores() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/decshighlighter/serv")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"scores":[{"descriptor":"D1","quantity":"3","score":"0.75"}]}"#)
        .create();

    let output = run(&["hepatite"], Some(&server.url()));
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_lines(&output),
        vec![
            format!("{}/decshighlighter/serv", server.url()),
            r#"[{"descriptor":"D1","quantity":3,"score":0.75}]"#.to_string(),
        ]
    );
}

#[test]
fn test_unreachable_service_prints_empty_list() {
    let output = run(&["hepatite"], Some("http://127.0.0.1:1"));
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_lines(&output),
        vec!["http://127.0.0.1:1/decshighlighter/serv", "[]"]
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to reach scoring service"), "{stderr}");
    assert!(stderr.contains("http://127.0.0.1:1/decshighlighter/serv"), "{stderr}");
}

#[test]
fn test_extra_arguments_are_ignored() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/decshighlighter/serv")
        .match_body(Matcher::PartialJson(json!({"document": "febre"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"scores":[]}"#)
        .create();

    let output = run(&["febre", "amarela"], Some(&server.url()));
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output)[1], "[]");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Ignoring 1 extra argument"));
    mock.assert();
}

#[test]
fn test_malformed_response_exits_with_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/decshighlighter/serv")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"scores":[{"descriptor":"D1"}]}"#)
        .create();

    let output = run(&["hepatite"], Some(&server.url()));
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid response"));
}
