//! End-to-end tests for the fixmark binary

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixmark() -> Command {
    let mut cmd = Command::cargo_bin("fixmark").expect("binary to build");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn sample(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(name)
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn segment_defaults_to_tag_format() {
    fixmark()
        .arg("segment")
        .arg(sample("010-comment-and-fence.txt"))
        .assert()
        .success()
        .stdout(
            "<segments>\n  <comment>// fix applied</comment>\n  \
             <fenced-code language=\"js\">const x = 1;</fenced-code>\n</segments>\n",
        );
}

#[test]
fn segment_as_json() {
    let output = fixmark()
        .args(["segment", "--format", "json"])
        .arg(sample("020-explanation-and-inline-code.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let kinds: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["kind"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        kinds,
        ["explanation", "plain-text", "inline-code", "plain-text"]
    );
}

#[test]
fn segment_reads_stdin() {
    fixmark()
        .args(["segment", "-f", "code-view", "-"])
        .write_stdin("// note\n```py\nx = 1\n```")
        .assert()
        .success()
        .stdout("// note\n--- py\nx = 1\n");
}

#[test]
fn segment_unwraps_prediction_response() {
    let dir = TempDir::new().unwrap();
    let payload = write(
        &dir,
        "prediction.json",
        r#"{"predictedCategory":"Async Wait","generatedFix":"```\nawait done();\n```"}"#,
    );

    fixmark()
        .args(["segment", "--response", "-f", "code-view"])
        .arg(&payload)
        .assert()
        .success()
        .stdout("--- javascript\nawait done();\n");
}

#[test]
fn config_file_changes_defaults() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "fixmark.toml",
        "[render]\ndefault_language = \"python\"\n\n[output]\nformat = \"code-view\"\n",
    );

    fixmark()
        .arg("--config")
        .arg(&config)
        .arg("segment")
        .arg(sample("040-empty-fence.txt"))
        .assert()
        .success()
        .stdout("--- python\n");
}

#[test]
fn local_config_file_is_picked_up() {
    let dir = TempDir::new().unwrap();
    write(&dir, "fixmark.toml", "[output]\nformat = \"code\"\n");

    fixmark()
        .current_dir(dir.path())
        .arg("segment")
        .arg(sample("010-comment-and-fence.txt"))
        .assert()
        .success()
        .stdout("const x = 1;\n");
}

#[test]
fn explicit_config_replaces_local_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "fixmark.toml", "[output]\nformat = \"code\"\n");
    let explicit = write(&dir, "other.toml", "[output]\nformat = \"treeviz\"\n");

    fixmark()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&explicit)
        .arg("segment")
        .arg(sample("040-empty-fence.txt"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("⧉ 1 segment\n"));
}

#[test]
fn unknown_format_fails() {
    fixmark()
        .args(["segment", "--format", "html"])
        .arg(sample("010-comment-and-fence.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Format 'html' not found"));
}

#[test]
fn missing_input_fails() {
    fixmark()
        .args(["segment", "no/such/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading no/such/file.txt"));
}

#[test]
fn malformed_response_fails() {
    fixmark()
        .args(["extract", "--response", "-"])
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid service response"));
}

#[test]
fn extract_prints_fence_contents() {
    fixmark()
        .args(["extract", "-"])
        .write_stdin("intro\n```js\na();\n```\nmiddle\n```\nb();\n```")
        .assert()
        .success()
        .stdout("a();\nb();\n");
}

#[test]
fn extract_without_fences_prints_nothing() {
    fixmark()
        .arg("extract")
        .arg(sample("020-explanation-and-inline-code.txt"))
        .assert()
        .success()
        .stdout("");
}

#[test]
fn extract_with_reference_builds_score_request() {
    let dir = TempDir::new().unwrap();
    let reference = write(&dir, "reference.js", "await done();\n");

    let output = fixmark()
        .args(["extract", "-", "--reference"])
        .arg(&reference)
        .write_stdin("```js\nawait finish();\n```")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["code"], "await finish();");
    assert_eq!(value["reference_code"], "await done();\n");
}

#[test]
fn score_prints_percentages() {
    fixmark()
        .args(["score", "-"])
        .write_stdin(
            r#"{"codebleu":{"ngram_match_score":0.5,"weighted_ngram_match_score":0.25,
                "syntax_match":1.0,"semantic_match":0.75,"codebleu_score":0.625}}"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("50.00%"))
        .stdout(predicate::str::contains("62.50%"));
}

#[test]
fn score_without_results() {
    fixmark()
        .args(["score", "-"])
        .write_stdin("{}")
        .assert()
        .success()
        .stdout("No results yet.\n");
}

#[test]
fn list_formats_names_every_format() {
    let output = fixmark().arg("list-formats").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for name in [
        "code",
        "code-view",
        "explanation-view",
        "json",
        "tag",
        "treeviz",
        "yaml",
    ] {
        assert!(stdout.contains(&format!("  {name}\n")), "{name} missing");
    }
}
