use assert_cmd::Command;
use mockito::Server;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Contract tests for the pkgver CLI surface

fn site_packages(dirs: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for dir in dirs {
        fs::create_dir(temp_dir.path().join(dir)).unwrap();
    }
    temp_dir
}

fn index_page(wheels: &[&str]) -> String {
    let links: String = wheels
        .iter()
        .map(|wheel| format!("<a href=\"/demo/{wheel}\">{wheel}</a><br/>\n"))
        .collect();
    format!("<html><body>\n{links}</body></html>")
}

#[test]
fn test_list_prints_installed_packages() {
    let temp_dir = site_packages(&[
        "requests-2.31.0.dist-info",
        "flask-2.3.2.dist-info",
        "legacy-0.9.1.egg-info",
    ]);

    let mut cmd = Command::cargo_bin("pkgver").unwrap();
    cmd.args(["list", "--path"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("requests 2.31.0"))
        .stdout(predicate::str::contains("flask 2.3.2"))
        .stdout(predicate::str::contains("legacy 0.9.1"));
}

#[test]
fn test_list_json_output() {
    let temp_dir = site_packages(&["requests-2.31.0.dist-info"]);

    let output = Command::cargo_bin("pkgver")
        .unwrap()
        .args(["list", "--json", "--path"])
        .arg(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries[0]["name"], "requests");
    assert_eq!(entries[0]["version"], "2.31.0");
}

#[test]
fn test_list_empty_directory() {
    let temp_dir = site_packages(&[]);

    let mut cmd = Command::cargo_bin("pkgver").unwrap();
    cmd.args(["list", "--path"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_latest_against_mock_index() {
    let mut server = Server::new();
    server
        .mock("GET", "/demo/")
        .with_status(200)
        .with_body(index_page(&[
            "demo-1.0.0-py3-none-any.whl",
            "demo-2.1.0-py3-none-any.whl",
        ]))
        .create();

    let mut cmd = Command::cargo_bin("pkgver").unwrap();
    cmd.args(["latest", "demo", "--index-url"])
        .arg(server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains("demo 2.1.0"));
}

#[test]
fn test_latest_files_newest_first() {
    let mut server = Server::new();
    server
        .mock("GET", "/demo/")
        .with_status(200)
        .with_body(index_page(&[
            "demo-1.0.0-py3-none-any.whl",
            "demo-2.1.0-py3-none-any.whl",
            "demo-1.5.3-py3-none-any.whl",
        ]))
        .create();

    let output = Command::cargo_bin("pkgver")
        .unwrap()
        .args(["latest", "demo", "--files", "--index-url"])
        .arg(server.url())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "demo-2.1.0-py3-none-any.whl",
            "demo-1.5.3-py3-none-any.whl",
            "demo-1.0.0-py3-none-any.whl",
        ]
    );
}

#[test]
fn test_latest_unreachable_index_fails() {
    let mut cmd = Command::cargo_bin("pkgver").unwrap();
    cmd.args(["latest", "demo", "--index-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("demo"));
}

#[test]
fn test_check_reports_outdated() {
    let temp_dir = site_packages(&["demo-1.0.0.dist-info"]);
    let mut server = Server::new();
    server
        .mock("GET", "/demo/")
        .with_status(200)
        .with_body(index_page(&["demo-2.1.0-py3-none-any.whl"]))
        .create();

    let mut cmd = Command::cargo_bin("pkgver").unwrap();
    cmd.args(["check", "demo", "--index-url"])
        .arg(server.url())
        .arg("--path")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "demo: installed 1.0.0, latest 2.1.0 (outdated)",
        ));
}

#[test]
fn test_check_reports_up_to_date() {
    let temp_dir = site_packages(&["demo-2.1.0.dist-info"]);
    let mut server = Server::new();
    server
        .mock("GET", "/demo/")
        .with_status(200)
        .with_body(index_page(&["demo-2.1.0-py3-none-any.whl"]))
        .create();

    let mut cmd = Command::cargo_bin("pkgver").unwrap();
    cmd.args(["check", "demo", "--index-url"])
        .arg(server.url())
        .arg("--path")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(up-to-date)"));
}

#[test]
fn test_check_missing_package_uses_sentinel() {
    let temp_dir = site_packages(&[]);
    let mut server = Server::new();
    server
        .mock("GET", "/demo/")
        .with_status(200)
        .with_body(index_page(&["demo-0.1.0-py3-none-any.whl"]))
        .create();

    // Not installed compares as 0.0.0, so it is outdated rather than an error
    let mut cmd = Command::cargo_bin("pkgver").unwrap();
    cmd.args(["check", "demo", "--index-url"])
        .arg(server.url())
        .arg("--path")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "demo: installed 0.0.0, latest 0.1.0 (outdated)",
        ));
}

#[test]
fn test_check_undeterminable_installed_version_fails() {
    let temp_dir = site_packages(&["demo-1.0rc1.dist-info"]);
    let mut server = Server::new();
    server
        .mock("GET", "/demo/")
        .with_status(200)
        .with_body(index_page(&["demo-2.1.0-py3-none-any.whl"]))
        .create();

    let mut cmd = Command::cargo_bin("pkgver").unwrap();
    cmd.args(["check", "demo", "--index-url"])
        .arg(server.url())
        .arg("--path")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no determinable version"));
}

#[test]
fn test_check_json_output() {
    let temp_dir = site_packages(&["demo-1.0.0.dist-info"]);
    let mut server = Server::new();
    server
        .mock("GET", "/demo/")
        .with_status(200)
        .with_body(index_page(&["demo-2.1.0-py3-none-any.whl"]))
        .create();

    let output = Command::cargo_bin("pkgver")
        .unwrap()
        .args(["check", "demo", "--json", "--index-url"])
        .arg(server.url())
        .arg("--path")
        .arg(temp_dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let entry: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entry["name"], "demo");
    assert_eq!(entry["installed"], "1.0.0");
    assert_eq!(entry["latest"], "2.1.0");
    assert_eq!(entry["status"], "outdated");
}
