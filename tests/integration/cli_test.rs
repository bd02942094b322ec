//! Integration tests for the folio CLI

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::run_folio;

fn folio(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env("FOLIO_CONFIG_DIR", config_dir.path())
        .env("NO_COLOR", "1")
        .env_remove("FOLIO_LOG");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(dir.path(), &["--help"]);

    assert_eq!(exit_code, 0);
    for name in ["open", "run", "theme", "contact", "config", "completions"] {
        assert!(stdout.contains(name), "missing {}", name);
    }
}

#[test]
fn version_includes_build_date() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("built"));
}

// ============================================================================
// run
// ============================================================================

#[test]
fn run_prints_prompt_and_output() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(dir.path(), &["run", "whoami"]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    $ whoami
    Software Engineer @ Swimage | Full‑Stack Developer
    ");
}

#[test]
fn run_unknown_command_still_succeeds() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["run", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Command not found: ls. Type 'help' for available commands.",
        ));
}

#[test]
fn run_reads_lines_from_stdin() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .arg("run")
        .write_stdin("echo one\necho   two\n")
        .assert()
        .success()
        .stdout("$ echo one\none\n$ echo   two\ntwo\n");
}

#[test]
fn run_json_emits_kind_and_text() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(dir.path(), &["run", "--json", "help", "nope"]);
    assert_eq!(exit_code, 0);

    let rows: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let kinds: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["prompt", "output", "prompt", "error"]);
    assert_eq!(rows[0]["text"], "$ help");
}

#[test]
fn run_uses_configured_prompt_marker() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[terminal]\nprompt_marker = \">\"\n",
    )
    .unwrap();
    let (stdout, _stderr, _) = run_folio(dir.path(), &["run", "echo hi"]);
    assert_eq!(stdout, "> echo hi\nhi\n");
}

// ============================================================================
// theme
// ============================================================================

#[test]
fn theme_defaults_to_dark() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(dir.path(), &["theme", "show"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "dark");
}

#[test]
fn theme_set_persists_to_config() {
    let dir = TempDir::new().unwrap();
    let (_stdout, _stderr, exit_code) = run_folio(dir.path(), &["theme", "set", "Synthwave"]);
    assert_eq!(exit_code, 0);

    let (stdout, _, _) = run_folio(dir.path(), &["theme", "show"]);
    assert_eq!(stdout.trim(), "synthwave");

    let config = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(config.contains("name = \"synthwave\""));
}

#[test]
fn theme_set_keeps_other_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "# mine\n[terminal]\nintro = false\n").unwrap();

    run_folio(dir.path(), &["theme", "set", "neon"]);
    let config = fs::read_to_string(&path).unwrap();
    assert!(config.contains("# mine"));
    assert!(config.contains("intro = false"));
    assert!(config.contains("name = \"neon\""));
}

#[test]
fn theme_set_rejects_unknown_names() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_folio(dir.path(), &["theme", "set", "vaporwave"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Unknown theme 'vaporwave'"));
}

#[test]
fn theme_list_marks_current() {
    let dir = TempDir::new().unwrap();
    run_folio(dir.path(), &["theme", "set", "miami"]);
    let (stdout, _, _) = run_folio(dir.path(), &["theme", "list"]);

    assert_eq!(stdout.lines().count(), 7);
    let current: Vec<&str> = stdout.lines().filter(|l| l.starts_with('*')).collect();
    assert_eq!(current.len(), 1);
    assert!(current[0].contains("miami"));
}

// ============================================================================
// contact
// ============================================================================

#[test]
fn contact_accepts_valid_message() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["contact", "--name", "Ada", "--email", "ada@example.com", "--message", "Hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Message sent successfully! I'll get back to you soon.",
        ));
}

#[test]
fn contact_rejects_empty_fields() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_folio(
        dir.path(),
        &["contact", "--name", "", "--email", "ada@example.com", "--message", "Hi"],
    );
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Please fill in all fields"));
}

#[test]
fn contact_rejects_bad_email() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_folio(
        dir.path(),
        &["contact", "--name", "Ada", "--email", "ada@nodot", "--message", "Hi"],
    );
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Please enter a valid email address"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_uses_override_dir() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(dir.path(), &["config", "path"]);
    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout.trim(),
        dir.path().join("config.toml").display().to_string()
    );
}

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(dir.path(), &["config", "show"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[theme]"));
    assert!(stdout.contains("type_delay_ms = 50"));
}

#[test]
fn config_migrate_yes_creates_file() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(dir.path(), &["config", "migrate", "--yes"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Config updated successfully."));

    let content = fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(content.contains("autofocus_delay_ms = 2000"));

    let (stdout, _, _) = run_folio(dir.path(), &["config", "migrate", "--yes"]);
    assert!(stdout.contains("already up to date"));
}

#[test]
fn config_migrate_without_tty_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_folio(dir.path(), &["config", "migrate"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("No changes made."));
    assert!(!dir.path().join("config.toml").exists());
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();
    folio(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}
