//! Tests for the command-line binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture_path(parts: &[&str]) -> PathBuf {
    parts.iter().fold(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures"),
        |path, part| path.join(part),
    )
}

fn parser() -> Command {
    Command::cargo_bin("bundestag-parser").unwrap()
}

#[test]
fn test_speeches_directory_to_csv() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("speeches.csv");

    parser()
        .arg("speeches")
        .arg(fixture_path(&["protocols"]))
        .arg("--output")
        .arg(&output)
        .arg("--metadata")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to:"));

    let csv = fs::read_to_string(&output).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Speaker,Party,Role,Text,location,date,period,session")
    );
    assert!(csv.contains("Carsten Schneider,SPD,,"));
    assert!(csv.contains("Alice Weidel,AfD,,Frau Präsidentin!,Berlin,21.11.2017,19,2"));
    assert!(csv.contains(
        ",,,\"Ein Wortbeitrag ohne Rednerangabe, mit \"\"Zitat\"\", Komma.\",Berlin,24.10.2017,19,1"
    ));
}

#[test]
fn test_speeches_single_file_to_json() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("speeches.json");

    parser()
        .args(["speeches", "-o"])
        .arg(&output)
        .arg(fixture_path(&["protocols", "19002-data.xml"]))
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let speeches = json.as_array().unwrap();
    assert_eq!(speeches.len(), 1);
    assert_eq!(speeches[0]["Speaker"], "Alice Weidel");
    assert!(speeches[0].get("location").is_none());
}

#[test]
fn test_members_period_with_institutions() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("members.json");

    parser()
        .arg("members")
        .arg(fixture_path(&["members", "MDB_STAMMDATEN.XML"]))
        .arg("-o")
        .arg(&output)
        .args(["--period", "19", "-i", "Ältestenrat", "--occupation-list"])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let members = json.as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0]["Name"], "Carsten Schneider");
    assert_eq!(members[0]["Occupation"], serde_json::json!(["Bankkaufmann"]));
    assert_eq!(members[0]["member_Ältestenrat"], true);
    assert_eq!(members[1]["member_Ältestenrat"], false);
    assert!(members[1]["District"].is_null());
}

#[test]
fn test_members_period_with_leading_zero() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("members.json");

    parser()
        .arg("members")
        .arg(fixture_path(&["members"]))
        .arg("-o")
        .arg(&output)
        .args(["--period", "019"])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let members = json.as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0]["Period"], "19");
    assert_eq!(members[0]["Periods"], "18;19");
}

#[test]
fn test_members_csv_with_separator() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("members.csv");

    parser()
        .arg("members")
        .arg(fixture_path(&["members"]))
        .arg("-o")
        .arg(&output)
        .args(["-s", ";"])
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with(
        "ID;FirstName;LastName;Name;AcademicTitle;BirthYear;BirthPlace;DeathYear;Gender;Party;Occupation;Periods;Vita\n"
    ));
    assert!(csv.contains("11003196;Carsten;Schneider;Carsten Schneider;;"));
    assert!(csv.contains("\"18;19\""));
}

#[test]
fn test_institutions_without_period_fail() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("members.csv");

    parser()
        .arg("members")
        .arg(fixture_path(&["members"]))
        .arg("-o")
        .arg(&output)
        .args(["-i", "Ältestenrat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("legislative period"));

    assert!(!output.exists());
}

#[test]
fn test_unsupported_output_fails_before_parsing() {
    let dir = TempDir::new().unwrap();

    parser()
        .arg("speeches")
        .arg(dir.path().join("does-not-exist.xml"))
        .arg("-o")
        .arg(dir.path().join("speeches.xlsx"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported output format"));
}

#[test]
fn test_invalid_period_fails() {
    let dir = TempDir::new().unwrap();

    parser()
        .arg("members")
        .arg(fixture_path(&["members"]))
        .arg("-o")
        .arg(dir.path().join("members.csv"))
        .args(["--period", "XIX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid legislative period"));
}

#[test]
fn test_invalid_input_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "kein XML").unwrap();

    parser()
        .arg("speeches")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("speeches.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("neither an XML file nor a directory"));
}
