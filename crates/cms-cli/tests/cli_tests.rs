//! Integration tests for the cms CLI binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Get a Command for the cms binary
fn cms_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("cms"))
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn custom_object(dir: &TempDir) -> PathBuf {
    write(
        dir.path(),
        "home.json",
        r#"{
            "container": "co-cms-pages",
            "key": "home",
            "value": {
                "content": { "title": "Home", "pageContent": { "headline": "Welcome" } },
                "dependencies": [
                    { "obj": { "value": { "content": { "pageContent": { "description": "Hello" } } } } }
                ]
            }
        }"#,
    )
}

fn entry(dir: &TempDir) -> PathBuf {
    write(
        dir.path(),
        "entry.json",
        r#"{
            "id": "home",
            "locale": "en",
            "contentType": { "id": "page", "fields": [
                { "id": "title", "type": "Symbol" },
                { "id": "visits", "type": "Integer" }
            ]},
            "fields": {
                "title": { "en": "Home", "de": "Startseite" },
                "visits": { "en": 13 }
            }
        }"#,
    )
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    cms_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("field"))
        .stdout(predicate::str::contains("compose"));
}

#[test]
fn test_version_output() {
    cms_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cms"));
}

#[test]
fn test_no_command_shows_help_hint() {
    cms_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("cms --help"));
}

// ============================================================================
// field
// ============================================================================

#[test]
fn test_field_on_custom_object() {
    let dir = tempdir().unwrap();
    let document = custom_object(&dir);

    cms_cmd()
        .args(["field", "--backend", "custom-objects"])
        .arg(&document)
        .args(["pageContent.description", "title", "missing"])
        .assert()
        .success()
        .stdout("Hello\nHome\n\n");
}

#[test]
fn test_field_on_entry_with_locales() {
    let dir = tempdir().unwrap();
    let document = entry(&dir);

    cms_cmd()
        .args(["field", "-b", "entries", "-l", "fr", "-l", "de"])
        .arg(&document)
        .args(["title", "visits", "title[0]"])
        .assert()
        .success()
        .stdout("Startseite\n\n\n");
}

#[test]
fn test_field_on_entry_without_locales_uses_entry_locale() {
    let dir = tempdir().unwrap();
    let document = entry(&dir);

    cms_cmd()
        .args(["field", "-b", "entries"])
        .arg(&document)
        .args(["title", "visits"])
        .assert()
        .success()
        .stdout("Home\n13\n");
}

#[test]
fn test_field_reads_backend_and_locales_from_config() {
    let dir = tempdir().unwrap();
    let document = entry(&dir);
    let config = write(
        dir.path(),
        "config.toml",
        "[cms]\nbackend = \"entries\"\nlocales = [\"de\", \"en\"]\n",
    );

    cms_cmd()
        .arg("field")
        .arg("--config")
        .arg(&config)
        .arg(&document)
        .arg("title")
        .assert()
        .success()
        .stdout("Startseite\n");
}

#[test]
fn test_field_with_invalid_config_fails() {
    let dir = tempdir().unwrap();
    let document = custom_object(&dir);
    let config = write(dir.path(), "config.toml", "[cms]\nbackend = \"ftp\"\n");

    cms_cmd()
        .arg("field")
        .arg("--config")
        .arg(&config)
        .arg(&document)
        .arg("title")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_field_with_missing_document_fails() {
    let dir = tempdir().unwrap();

    cms_cmd()
        .args(["field", "-b", "custom-objects"])
        .arg(dir.path().join("missing.json"))
        .arg("title")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read document"));
}

#[test]
fn test_field_with_wrong_backend_fails() {
    let dir = tempdir().unwrap();
    let document = custom_object(&dir);

    cms_cmd()
        .args(["field", "-b", "entries"])
        .arg(&document)
        .arg("title")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid CMS document"));
}

// ============================================================================
// compose
// ============================================================================

#[test]
fn test_compose_prints_merged_document() {
    let dir = tempdir().unwrap();
    let document = custom_object(&dir);

    let output = cms_cmd().arg("compose").arg(&document).output().unwrap();

    assert!(output.status.success());
    let composed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(composed["pageContent"]["description"], "Hello");
    assert_eq!(composed["pageContent"]["headline"], "Welcome");
    assert_eq!(composed["title"], "Home");
}

#[test]
fn test_compose_rejects_non_custom_object() {
    let dir = tempdir().unwrap();
    let document = write(dir.path(), "list.json", "[1, 2, 3]");

    cms_cmd()
        .arg("compose")
        .arg(&document)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no content object"));
}

// ============================================================================
// identifier
// ============================================================================

#[test]
fn test_identifier() {
    cms_cmd()
        .args(["identifier", "banner:homeTopLeft.subtitle"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "entry type: 'banner', entry key: 'homeTopLeft', field name: 'subtitle'",
        ));
}
