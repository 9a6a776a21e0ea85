use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

const VALID_CSV: &str = "Name,Branch,Vendor Code,Account Number,Date\n\
                         john smith,Main,AB12CD,1234567890,2024-01-15\n";

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("vfv").unwrap();
    cmd.env_remove("VFV_SENDER_EMAIL")
        .env_remove("VFV_SENDER_PASSWORD");
    cmd
}

fn write_csv(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn declared(cmd: &mut Command, branch: &str) {
    cmd.args([
        "--name",
        "John Smith",
        "--branch",
        branch,
        "--vendor-code",
        "AB12CD",
        "--account-number",
        "1234567890",
        "--date",
        "2024-01-15",
    ]);
}

fn write_config(dir: &Path, archive_dir: &Path) -> std::path::PathBuf {
    let config = serde_json::json!({
        "smtp": { "enabled": false },
        "archive": { "dir": archive_dir },
    });
    let path = dir.join("config.json");
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
    path
}

#[test]
fn extract_csv_as_json() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_csv(tmp.path(), "vendor.csv", VALID_CSV);

    cmd()
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("\"Name\": \"John Smith\""))
        .stdout(contains("\"Vendor Code\": \"AB12CD\""));
}

#[test]
fn extract_reports_blank_fields() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_csv(tmp.path(), "partial.csv", "Name,Branch\nJane Doe,North\n");

    cmd()
        .args(["extract", "--format", "csv"])
        .arg(&input)
        .assert()
        .success()
        .stdout(contains("Name,Branch,Vendor Code,Account Number,Date"))
        .stdout(contains("Jane Doe,North,Blank,Blank,Blank"));
}

#[test]
fn validate_dry_run_passes() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_csv(tmp.path(), "vendor.csv", VALID_CSV);

    let mut validate = cmd();
    validate.arg("validate").arg(&input).arg("--dry-run");
    declared(&mut validate, "Main");

    validate
        .assert()
        .success()
        .stdout(contains("File validated successfully!"))
        .stdout(contains("Total Fields: 5, Errors: 0"));
}

#[test]
fn validate_mismatch_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_csv(tmp.path(), "vendor.csv", VALID_CSV);

    let mut validate = cmd();
    validate.arg("validate").arg(&input).arg("--dry-run");
    declared(&mut validate, "North");

    validate
        .assert()
        .code(1)
        .stdout(contains("Errors detected!"))
        .stdout(contains("Branch mismatch: Expected 'North', Found 'Main'"));
}

#[test]
fn validate_json_lists_messages() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_csv(tmp.path(), "partial.csv", "Name,Branch\nJohn Smith,Main\n");

    let mut validate = cmd();
    validate
        .arg("validate")
        .arg(&input)
        .args(["--dry-run", "--format", "json"]);
    declared(&mut validate, "Main");

    validate
        .assert()
        .code(1)
        .stdout(contains("\"passed\": false"))
        .stdout(contains("Missing values: Vendor Code, Account Number, Date"))
        .stdout(contains("dispatch").not());
}

#[test]
fn validate_unsupported_extension_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let input = write_csv(tmp.path(), "vendor.txt", "Name: John Smith\n");

    cmd()
        .arg("validate")
        .arg(&input)
        .arg("--dry-run")
        .assert()
        .code(2)
        .stderr(contains("unsupported document type"));
}

#[test]
fn validate_missing_input_fails() {
    cmd()
        .args(["validate", "does-not-exist.csv", "--dry-run"])
        .assert()
        .code(2)
        .stderr(contains("Input file not found"));
}

#[test]
fn validate_archives_passing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("validated_files");
    let config = write_config(tmp.path(), &archive);
    let input = write_csv(tmp.path(), "vendor.csv", VALID_CSV);

    let mut validate = cmd();
    validate
        .arg("--config")
        .arg(&config)
        .arg("validate")
        .arg(&input)
        .args(["--email", "vendor@example.com"]);
    declared(&mut validate, "Main");

    validate
        .assert()
        .success()
        .stdout(contains("Archive: "))
        .stdout(contains("Notification: "));

    assert_eq!(
        fs::read_to_string(archive.join("vendor.csv")).unwrap(),
        VALID_CSV
    );
}

#[test]
fn validate_does_not_archive_failing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("validated_files");
    let config = write_config(tmp.path(), &archive);
    let input = write_csv(tmp.path(), "vendor.csv", VALID_CSV);

    let mut validate = cmd();
    validate
        .arg("--config")
        .arg(&config)
        .arg("validate")
        .arg(&input);
    declared(&mut validate, "North");

    validate.assert().code(1).stdout(contains("validation failed"));

    assert!(!archive.join("vendor.csv").exists());
}

#[test]
fn config_init_and_get() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("nested").join("config.json");

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "smtp.port"])
        .assert()
        .success()
        .stdout(contains("587"));

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn config_set_persists() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("config.json");

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "archive.overwrite", "false"])
        .assert()
        .success();

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "archive.overwrite"])
        .assert()
        .success()
        .stdout(contains("false"));
}
