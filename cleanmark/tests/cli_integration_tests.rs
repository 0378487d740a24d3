// cleanmark/tests/cli_integration_tests.rs
//! Command-line integration tests for the `cleanmark` executable.
//!
//! These tests run the real binary with `assert_cmd`, feeding input via
//! stdin or temp files and asserting on stdout/stderr and exit status.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

/// Helper to run `cleanmark` with stdin input and arguments.
fn run_cleanmark(input: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cleanmark").unwrap();
    cmd.env("RUST_LOG", "debug");
    cmd.args(args);
    cmd.write_stdin(input.as_bytes().to_vec());
    cmd.assert()
}

#[test]
fn clean_strips_attributes_from_stdin() {
    run_cleanmark(
        r#"<p class="x" data-track="1">hello</p>"#,
        &["clean", "--quiet"],
    )
    .success()
    .stdout(predicate::str::contains("hello"))
    .stdout(predicate::str::contains("<p>"))
    .stdout(predicate::str::contains("class").not())
    .stdout(predicate::str::contains("data-track").not());
}

#[test]
fn paste_preset_converts_plain_text_documents() {
    let doc = "## 🦷 Whitening Aftercare\n\nAvoid coffee for two days.\n";
    run_cleanmark(doc, &["clean", "--preset", "paste", "--quiet"])
        .success()
        .stdout(predicate::str::contains("<h1>"))
        .stdout(predicate::str::contains("Whitening Aftercare"))
        .stdout(predicate::str::contains("Avoid coffee for two days."));
}

#[test]
fn save_preset_leaves_plain_text_unconverted() {
    run_cleanmark("just words\n", &["clean", "--quiet"])
        .success()
        .stdout(predicate::str::contains("<h1>").not())
        .stdout(predicate::str::contains("just words"));
}

#[test]
fn convert_command_emits_structured_html() {
    run_cleanmark("## 🦷 Title\nintro line\n", &["convert", "--quiet"])
        .success()
        .stdout(predicate::str::contains("<h1>🦷 Title</h1>"))
        .stdout(predicate::str::contains("<p>intro line</p>"))
        .stdout(predicate::str::contains("<footer>"));
}

#[test]
fn diff_flag_shows_removed_and_added_lines() {
    run_cleanmark(
        r#"<p style="color:red">styled</p>"#,
        &["clean", "--diff", "--quiet"],
    )
    .success()
    .stdout(predicate::str::contains("--- Cleanup Diff ---"))
    .stdout(predicate::str::contains("- "))
    .stdout(predicate::str::contains("+ "));
}

#[test]
fn strip_override_removes_a_kept_family() {
    run_cleanmark(
        r#"<p>intro</p><table><tr><td>cell</td></tr></table>"#,
        &["clean", "--strip", "tables", "--quiet"],
    )
    .success()
    .stdout(predicate::str::contains("<table").not())
    .stdout(predicate::str::contains("intro"));
}

#[test]
fn unknown_strip_family_fails() {
    run_cleanmark("<p>x</p>", &["clean", "--strip", "bogus", "--quiet"])
        .failure()
        .stderr(predicate::str::contains("Unknown family 'bogus'"));
}

#[test]
fn file_input_and_output_round_trip() -> Result<()> {
    let mut input_file = NamedTempFile::new()?;
    input_file.write_all(br#"<div id="wrap"><p>content</p></div>"#)?;
    let output_file = NamedTempFile::new()?;

    let mut cmd = Command::cargo_bin("cleanmark")?;
    cmd.args([
        "clean",
        "--quiet",
        "-i",
        input_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
    ]);
    cmd.assert().success();

    let written = fs::read_to_string(output_file.path())?;
    assert!(written.contains("<p>"));
    assert!(written.contains("content"));
    assert!(!written.contains("id=\"wrap\""));
    Ok(())
}

#[test]
fn custom_config_file_is_honored() -> Result<()> {
    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(b"remove_links: true\nformat_with_line_breaks: false\n")?;

    let mut cmd = Command::cargo_bin("cleanmark")?;
    cmd.args([
        "clean",
        "--quiet",
        "--config",
        config_file.path().to_str().unwrap(),
    ]);
    cmd.write_stdin(r#"<p>See <a href="/x">here</a></p>"#);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<a ").not())
        .stdout(predicate::str::contains("See here"));
    Ok(())
}

#[test]
fn no_arguments_prints_help() {
    let mut cmd = Command::cargo_bin("cleanmark").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
