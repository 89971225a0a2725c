//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

const GUIDE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/guia.html");

const GUIDE_EXCERPT: &str = "Um roteiro prático para organizar a manutenção preventiva, \
reduzir custos e evitar paradas inesperadas na sua fábrica este ano.";

fn score_json(args: &[&str]) -> Value {
    let output = cmd()
        .arg("score")
        .args(args)
        .arg("--json")
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("score --json should output valid JSON")
}

fn item<'a>(report: &'a Value, id: &str) -> &'a Value {
    report["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|it| it["id"] == id)
        .unwrap_or_else(|| panic!("missing item {id}"))
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn long_help_lists_environment_variables() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CLAREZA_TARGETS__"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Score Command
// =============================================================================

#[test]
fn score_guide_is_perfect() {
    let report = score_json(&[GUIDE, "--title", "Guia de manutenção", "--excerpt", GUIDE_EXCERPT]);

    assert_eq!(report["score"], 100);
    assert_eq!(report["items"].as_array().unwrap().len(), 8);
    assert_eq!(report["totals"]["paragraphs"], 7);
    assert_eq!(report["totals"]["sentences"], 19);
    assert_eq!(item(&report, "meta")["status"], "good");
    assert_eq!(item(&report, "excerpt")["status"], "good");
}

#[test]
fn score_text_shows_totals_and_items() {
    cmd()
        .args(["--color", "never", "score", GUIDE, "--title", "Guia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100/100"))
        .stdout(predicate::str::contains("· 19 frases · 7 parágrafos"))
        .stdout(predicate::str::contains("✓ Voz passiva: 0.0%"))
        .stdout(predicate::str::contains("✗ Resumo: 0 palavras"));
}

#[test]
fn score_details_flag_prints_targets() {
    cmd()
        .args(["--color", "never", "score", GUIDE, "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prefira voz ativa"));
}

#[test]
fn score_reads_stdin() {
    let output = cmd()
        .args(["score", "-", "--json"])
        .write_stdin("<p>Olá mundo. Tudo bem?</p>")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let report: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["totals"]["words_total"], 4);
    assert_eq!(report["totals"]["sentences"], 2);
}

#[test]
fn byte_order_mark_does_not_change_score() {
    let tmp = tempfile::TempDir::new().unwrap();
    let body = "<p>Eu vim. Eu vi. Eu venci.</p>";
    let plain = tmp.path().join("plain.html");
    let marked = tmp.path().join("marked.html");
    std::fs::write(&plain, body).unwrap();
    std::fs::write(&marked, format!("\u{FEFF}{body}")).unwrap();

    let plain = score_json(&[plain.to_str().unwrap()]);
    let marked = score_json(&[marked.to_str().unwrap()]);

    assert_eq!(item(&plain, "consecutive")["label"], "Inícios repetidos: 1");
    assert_eq!(marked, plain);
}

#[test]
fn byte_order_mark_on_stdin_is_dropped() {
    let output = cmd()
        .args(["score", "-", "--json"])
        .write_stdin("\u{FEFF}<p>Eu vim. Eu vi. Eu venci.</p>")
        .assert()
        .success();

    let report: Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    assert_eq!(item(&report, "consecutive")["label"], "Inícios repetidos: 1");
}

#[test]
fn empty_body_scores_zero() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "<p></p>").unwrap();
    let report = score_json(&[tmp.path().to_str().unwrap()]);

    assert_eq!(report["score"], 0);
    assert_eq!(report["totals"]["words_total"], 0);
    assert_eq!(
        item(&report, "subheadings")["label"],
        "Distribuição de subtítulos: nenhum H2/H3 encontrado"
    );
}

#[test]
fn threshold_flag_changes_grade() {
    // With a 5-word limit almost no sentence of the guide is short.
    let report = score_json(&[GUIDE, "--max-sentence-words", "5"]);
    assert_eq!(item(&report, "sentences")["status"], "bad");
    assert!(report["score"].as_u64().unwrap() < 100);
}

#[test]
fn min_score_below_fails() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "").unwrap();
    cmd()
        .args(["score", tmp.path().to_str().unwrap(), "--min-score", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scores 0 (min: 50)"));
}

#[test]
fn min_score_met_succeeds() {
    cmd()
        .args(["score", GUIDE, "--min-score", "90"])
        .assert()
        .success();
}

#[test]
fn min_score_out_of_range_is_rejected() {
    cmd()
        .args(["score", GUIDE, "--min-score", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn missing_file_fails() {
    cmd()
        .args(["score", "/nonexistent/post.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Info & Schema Commands
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"]["targets"].is_object());
}

#[test]
fn schema_is_valid_json() {
    let output = cmd().arg("schema").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let schema: Value = serde_json::from_str(&stdout).expect("schema should be valid JSON");
    assert_eq!(schema["title"], "ReadabilityReport");
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

#[test]
fn log_dir_env_writes_jsonl() {
    let tmp = tempfile::TempDir::new().unwrap();
    let log_dir = tmp.path().join("logs");
    cmd()
        .env("CLAREZA_LOG_DIR", &log_dir)
        .args(["-v", "score", GUIDE])
        .assert()
        .success();

    let files: Vec<_> = std::fs::read_dir(&log_dir).unwrap().collect();
    assert!(!files.is_empty(), "log directory should contain a file");
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
