use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("acotool"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn sample_swatches() -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join("basic")
        .join("input.aco")
}

#[test]
fn help_covers_convert_and_show() {
    cmd().arg("convert").arg("--help").assert().success();
    cmd().arg("show").arg("--help").assert().success();
}

#[test]
fn version_prints_build_info() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("acotool"));
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.aco");
    let out = temp.path().join("out");

    cmd()
        .arg("convert")
        .arg(missing)
        .arg("-o")
        .arg(out)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn convert_writes_listing_and_rebuilt_aco() {
    let temp = TempDir::new().expect("tempdir");
    let out = temp.path().join("out");

    cmd()
        .arg("convert")
        .arg(sample_swatches())
        .arg("-o")
        .arg(&out)
        .arg("--quiet")
        .assert()
        .success();

    let listing = std::fs::read_to_string(out.join("input.txt")).expect("listing written");
    assert!(listing.contains("\"Red\""));

    // The fixture is in canonical form, so the rebuilt copy is identical.
    let rebuilt = std::fs::read(out.join("input.aco")).expect("rebuilt written");
    let original = std::fs::read(sample_swatches()).expect("fixture");
    assert_eq!(rebuilt, original);
}

#[test]
fn text_only_skips_rebuilt_aco() {
    let temp = TempDir::new().expect("tempdir");
    let out = temp.path().join("out");

    cmd()
        .arg("convert")
        .arg(sample_swatches())
        .arg("-o")
        .arg(&out)
        .arg("--text-only")
        .arg("--quiet")
        .assert()
        .success();

    assert!(out.join("input.txt").exists());
    assert!(!out.join("input.aco").exists());
}

#[test]
fn batch_continues_past_failing_file() {
    let temp = TempDir::new().expect("tempdir");
    let bad = temp.path().join("bad.aco");
    std::fs::write(&bad, [0x00, 0x09, 0x00]).expect("write bad file");
    let out = temp.path().join("out");

    cmd()
        .arg("convert")
        .arg(sample_swatches())
        .arg(&bad)
        .arg("-o")
        .arg(&out)
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(contains("bad.aco").and(contains("1 of 2 files failed")));

    // The good file was still converted.
    assert!(out.join("input.txt").exists());
    assert!(out.join("input.aco").exists());
}

#[test]
fn refuses_to_overwrite_input() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("input.aco");
    std::fs::copy(sample_swatches(), &input).expect("copy fixture");

    cmd()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(temp.path())
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(contains("overwrite"));

    let untouched = std::fs::read(&input).expect("input still present");
    let original = std::fs::read(sample_swatches()).expect("fixture");
    assert_eq!(untouched, original);

    // A refused conversion leaves no partial output behind.
    assert!(!temp.path().join("input.txt").exists());
}

#[test]
fn show_prints_listing() {
    let assert = cmd()
        .arg("show")
        .arg(sample_swatches())
        .assert()
        .success()
        .stdout(contains("\"Red\"").and(contains("SPACE(9999)")));
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn show_json_outputs_valid_records() {
    let assert = cmd()
        .arg("show")
        .arg(sample_swatches())
        .arg("--json")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let records: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(records.as_array().map(Vec::len), Some(4));
    assert_eq!(records[0]["name"], "Red");
    assert_eq!(records[3]["color_space_code"], 9999);
}
