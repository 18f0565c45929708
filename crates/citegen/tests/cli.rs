use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::{TempDir, tempdir};

/// A `citegen` command isolated from any ambient configuration.
fn citegen(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("citegen");
    cmd.current_dir(dir.path()).env_remove("CITEGEN_CONFIG");
    cmd
}

#[test]
fn types_lists_registry() {
    let dir = tempdir().unwrap();
    citegen(&dir)
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("journal"))
        .stdout(predicate::str::contains("Audio/Visual Material"));
}

#[test]
fn styles_lists_all_five() {
    let dir = tempdir().unwrap();
    citegen(&dir)
        .arg("styles")
        .assert()
        .success()
        .stdout(predicate::str::contains("APA (7th Edition)"))
        .stdout(predicate::str::contains("ieee"));
}

#[test]
fn schema_json_is_machine_readable() {
    let dir = tempdir().unwrap();
    let output = citegen(&dir)
        .args(["schema", "website", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let schema: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(schema["display_name"], "Website");
    assert_eq!(schema["source_type"], "website");
    assert_eq!(schema["fields"][4]["id"], "url");
    assert_eq!(schema["fields"][4]["required"], true);
}

#[test]
fn cite_book_with_repeated_authors() {
    let dir = tempdir().unwrap();
    citegen(&dir)
        .args([
            "cite",
            "--type",
            "book",
            "-f",
            "author=Smith, J.",
            "-f",
            "author=Doe, J.",
            "-f",
            "year=2023",
            "-f",
            "title=Shared work",
            "-f",
            "publisher=Acme",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Smith, J., & Doe, J. (2023). Shared work. Acme.",
        ))
        .stdout(predicate::str::contains("(Smith & Doe, 2023)"));
}

#[test]
fn cite_missing_field_prints_diagnostic() {
    let dir = tempdir().unwrap();
    citegen(&dir)
        .args(["cite", "-t", "book", "-f", "author=Y", "-f", "year=2020"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error [C-1-2]: Missing Required Field"))
        .stderr(predicate::str::contains("Book Title"));
}

#[test]
fn cite_unknown_type_prints_diagnostic() {
    let dir = tempdir().unwrap();
    citegen(&dir)
        .args(["cite", "-t", "podcast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[C-1-1]"));
}

#[test]
fn cite_malformed_field_arg() {
    let dir = tempdir().unwrap();
    citegen(&dir)
        .args(["cite", "-t", "book", "-f", "title"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[C-3-1]"));
}

#[test]
fn cite_reads_json_input_and_prints_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("source.json");
    fs::write(
        &input,
        r#"{
  "author": ["Smith, J.", "Doe, J."],
  "year": 2023,
  "title": "Deep learning for citation parsing",
  "journal": "Journal of Documentation"
}"#,
    )
    .unwrap();

    let output = citegen(&dir)
        .args(["cite", "-t", "journal", "-s", "mla", "--json", "--input"])
        .arg(&input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let citation: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(citation["style"], "mla");
    assert_eq!(citation["source_type"], "journal");
    assert_eq!(citation["in_text"], "(Smith)");
    assert_eq!(
        citation["full"],
        "Smith, J. & Doe, J. \"Deep learning for citation parsing.\" Journal of Documentation, 2023."
    );
}

#[test]
fn config_sets_default_style() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("citegen.toml"), "[defaults]\nstyle = \"ieee\"\n").unwrap();
    citegen(&dir)
        .args([
            "cite",
            "-t",
            "book",
            "-f",
            "author=Newport, C.",
            "-f",
            "year=2016",
            "-f",
            "title=Deep Work",
            "-f",
            "publisher=Grand Central",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[N16]"));
}

#[test]
fn explicit_config_with_unknown_style_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[defaults]\nstyle = \"vancouver\"\n").unwrap();
    citegen(&dir)
        .arg("--config")
        .arg(&config)
        .args(["cite", "-t", "book"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[C-1-3]"));
}

#[test]
fn cite_exports_into_directory() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    citegen(&dir)
        .args([
            "cite",
            "-t",
            "website",
            "-s",
            "harvard",
            "-f",
            "title=Home",
            "-f",
            "site=Example",
            "-f",
            "url=https://example.com",
            "--export",
        ])
        .arg(&out)
        .assert()
        .success();

    let entries: Vec<_> = fs::read_dir(&out).unwrap().map(|e| e.unwrap().path()).collect();
    assert_eq!(entries.len(), 1);
    let name = entries[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("citations_") && name.ends_with(".txt"), "{name}");

    let text = fs::read_to_string(&entries[0]).unwrap();
    assert!(text.starts_with("Academic Citation Generator Export\nGenerated on: "));
    assert!(text.contains("Citation Style: Harvard\nSource Type: Website\n\n"));
    assert!(text.ends_with("(n.d.) 'Home', Example. Available at: https://example.com."));
}

#[test]
fn identify_doi() {
    let dir = tempdir().unwrap();
    citegen(&dir)
        .args(["identify", "https://doi.org/10.1038/nature12373"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DOI: 10.1038/nature12373"))
        .stdout(predicate::str::contains("Suggested source type: journal"));
}

#[test]
fn identify_unrecognized() {
    let dir = tempdir().unwrap();
    citegen(&dir)
        .args(["identify", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[C-4-1]"));
}

#[test]
fn identify_bare_keyword_is_unrecognized() {
    let dir = tempdir().unwrap();
    citegen(&dir)
        .args(["identify", "isbn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[C-4-1]"));
}

#[test]
fn json_mode_reports_errors_as_json() {
    let dir = tempdir().unwrap();
    let output = citegen(&dir)
        .args(["cite", "-t", "book", "-f", "author=Y", "-f", "year=2020", "--json"])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let diagnostic: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(diagnostic["code"], "C-1-2");
    assert_eq!(diagnostic["kind"], "error");
    assert_eq!(diagnostic["title"], "Missing Required Field");
    assert_eq!(diagnostic["docs_url"], "https://citegen.dev/errors/C-1-2");
}

#[test]
fn config_output_json_applies_to_errors() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("citegen.toml"), "[defaults]\noutput = \"json\"\n").unwrap();
    let output = citegen(&dir)
        .args(["identify", "hello"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let diagnostic: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(diagnostic["code"], "C-4-1");
}
