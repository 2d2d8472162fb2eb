use assert_cmd::Command;
use predicates::prelude::*;

fn viewport_audit() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("viewport-audit")
}

#[test]
fn check_mobile_page_passes() {
    viewport_audit()
        .args(["check", "tests/fixtures/mobile-page.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"));
}

#[test]
fn check_desktop_page_fails() {
    viewport_audit()
        .args(["check", "tests/fixtures/desktop-page.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL"));
}

#[test]
fn check_missing_viewport_json_format() {
    viewport_audit()
        .args(["check", "tests/fixtures/missing-viewport.json", "--format", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"rawValue\": -1"))
        .stdout(predicate::str::contains("Error in determining viewport"));
}

#[test]
fn check_warning_passes_unless_strict() {
    viewport_audit()
        .args(["check", "tests/fixtures/typo-page.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid properties found: minimal-ui."));

    viewport_audit()
        .args(["check", "tests/fixtures/typo-page.json", "--strict"])
        .assert()
        .code(1);
}

#[test]
fn check_directory() {
    viewport_audit()
        .args(["check", "tests/fixtures/site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("index.json"))
        .stdout(predicate::str::contains("about.json"));

    viewport_audit()
        .args(["check", "tests/fixtures/mixed"])
        .assert()
        .code(1);
}

#[test]
fn check_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.json");

    viewport_audit()
        .args(["check", "tests/fixtures/mobile-page.json", "--format", "json", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Output written to"));

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("\"passed\": true"));
}

#[test]
fn check_with_config_disabling_viewport() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("viewport-audit.toml");
    std::fs::write(&config, "[audits]\nviewport = false\n").unwrap();

    viewport_audit()
        .args(["check", "tests/fixtures/desktop-page.json", "--config"])
        .arg(&config)
        .assert()
        .success();
}

#[test]
fn check_nonexistent_path_exits_2() {
    viewport_audit()
        .args(["check", "tests/fixtures/does-not-exist.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn check_empty_directory_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    viewport_audit()
        .arg("check")
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no artifact files"));
}

#[test]
fn check_missing_config_exits_2() {
    viewport_audit()
        .args([
            "check",
            "tests/fixtures/mobile-page.json",
            "--config",
            "tests/fixtures/no-such-config.toml",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn list_audits_shows_viewport() {
    viewport_audit()
        .args(["list-audits"])
        .assert()
        .success()
        .stdout(predicate::str::contains("viewport"))
        .stdout(predicate::str::contains("Mobile Friendly"));
}

#[test]
fn explain_viewport() {
    viewport_audit()
        .args(["explain", "viewport"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mobile Friendly"))
        .stdout(predicate::str::contains("Viewport"));
}

#[test]
fn explain_unknown_audit_exits_2() {
    viewport_audit()
        .args(["explain", "nonexistent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown audit"));
}

#[test]
fn parse_prints_parsed_content() {
    viewport_audit()
        .args(["parse", "width=device-width, wdth=300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"validProperties\""))
        .stdout(predicate::str::contains("\"device-width\""))
        .stdout(predicate::str::contains("\"wdth\": \"300\""));
}
