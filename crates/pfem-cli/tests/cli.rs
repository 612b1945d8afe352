use assert_cmd::Command;
use pfem_test_util::{copydecks_dir, deck_path, fixtures_dir, golden, strip_html};
use predicates::prelude::*;

#[allow(deprecated)]
fn pfem_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pfem").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn traces(name: &str) -> String {
    fixtures_dir().join("traces").join(name).to_string()
}

#[test]
fn explain_from_files_prints_text_with_patch() {
    pfem_cmd()
        .args(["explain", "--decks", copydecks_dir().as_str()])
        .args(["--error-file", &traces("name_error_skulpt.txt")])
        .args(["--code", &traces("name_error.py")])
        .assert()
        .success()
        .stdout(predicate::str::contains("This name doesn't exist yet"))
        .stdout(predicate::str::contains("kittens = 0"));
}

#[test]
fn explain_json_matches_golden() {
    let output = pfem_cmd()
        .args(["explain", "--decks", copydecks_dir().as_str(), "--format", "json"])
        .args(["--error-file", &traces("name_error_skulpt.txt")])
        .args(["--code", &traces("name_error.py")])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(value["html"].as_str().unwrap().contains("pfem__"));
    assert_eq!(strip_html(value), golden("name_error_skulpt"));
}

#[test]
fn explain_reads_stdin_and_emits_json() {
    let output = pfem_cmd()
        .args(["explain", "--deck", deck_path("en").as_str(), "--format", "json"])
        .write_stdin("AttributeError: 'list' object has no attribute 'push'\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["trace"]["type"], "AttributeError");
    assert_eq!(value["variantId"], "AttributeError/variants/1");
}

#[test]
fn explain_uses_regional_locale_fallback() {
    pfem_cmd()
        .args(["explain", "--decks", copydecks_dir().as_str(), "--locale", "fr-CA"])
        .write_stdin("NameError: name 'chat' is not defined")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ce nom n'existe pas encore"));
}

#[test]
fn explain_kid_audience_and_brief_verbosity() {
    pfem_cmd()
        .args(["explain", "--deck", deck_path("en").as_str()])
        .args(["--audience", "kid", "--verbosity", "brief", "--format", "markdown"])
        .write_stdin("NameError: name 'x' is not defined")
        .assert()
        .success()
        .stdout(predicate::str::contains("name box"))
        .stdout(predicate::str::contains("Check spelling.").not());
}

#[test]
fn explain_with_missing_deck_tree_fails() {
    let dir = tempfile::tempdir().unwrap();
    pfem_cmd()
        .args(["explain", "--decks", dir.path().to_str().unwrap()])
        .write_stdin("NameError: name 'x' is not defined")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no copy deck found for en"));
}

#[test]
fn explain_rejects_unknown_format() {
    pfem_cmd()
        .args(["explain", "--deck", deck_path("en").as_str(), "--format", "yaml"])
        .write_stdin("oops")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

#[test]
fn check_deck_passes_for_sample_and_fails_for_broken() {
    pfem_cmd()
        .args(["check-deck", deck_path("en").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[warning]"));

    pfem_cmd()
        .args(["check-deck", fixtures_dir().join("broken/copydeck.json").as_str()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[error] meta.language"));
}

#[test]
fn schema_prints_copy_deck_schema() {
    let output = pfem_cmd().arg("schema").assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["title"], "CopyDeck");
    assert!(value["required"].as_array().unwrap().iter().any(|v| v == "errors"));
}
