//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. HOME is
//! pointed at a per-test scratch directory so the session document and
//! config never touch the real user profile or each other.

use std::path::PathBuf;
use std::process::Command;

fn scratch_home(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("studybody-cli-test-{}-{tag}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("Failed to create scratch HOME");
    dir
}

/// Run a CLI command in an isolated HOME and return (stdout, stderr, exit code).
fn run_cli(tag: &str, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "studybody-cli", "--"])
        .args(args)
        .env("HOME", scratch_home(tag))
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_energy_index_with_overrides() {
    let (stdout, _, code) = run_cli(
        "energy-index",
        &["energy", "index", "--sleep", "8", "--water", "6", "--caffeine", "0"],
    );
    assert_eq!(code, 0, "energy index failed");
    // Fresh session has no completed study minutes: 50+20+10+4-5 = 79.
    assert!(stdout.contains("79"), "unexpected output: {stdout}");
}

#[test]
fn test_energy_index_json() {
    let (stdout, _, code) = run_cli("energy-json", &["energy", "index", "--json"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("energy index --json not valid JSON");
    assert!(parsed["index"].is_u64());
}

#[test]
fn test_energy_curve_renders_chart() {
    let (stdout, _, code) = run_cli(
        "energy-curve",
        &["energy", "curve", "--chronotype", "neutral", "--wake", "07:00"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("00:00"));
    assert!(stdout.contains("█"));
}

#[test]
fn test_energy_slots() {
    let (stdout, _, code) = run_cli("energy-slots", &["energy", "slots", "--count", "3"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("expected focus"));
}

#[test]
fn test_plan_add_list_progress() {
    let tag = "plan-flow";
    let (stdout, _, code) = run_cli(
        tag,
        &[
            "plan", "add", "redox reactions", "--subject", "chemistry", "--minutes", "60",
            "--date", "2026-08-07",
        ],
    );
    assert_eq!(code, 0, "plan add failed");
    assert!(stdout.contains("Task added:"));

    let (stdout, _, code) = run_cli(tag, &["plan", "list", "--date", "2026-08-07", "--json"]);
    assert_eq!(code, 0, "plan list failed");
    let tasks: serde_json::Value = serde_json::from_str(&stdout).expect("plan list not JSON");
    let tasks = tasks.as_array().expect("plan list not an array");
    assert!(!tasks.is_empty());

    let task_id = tasks[0]["id"].as_str().expect("task id missing");
    let (_, _, code) = run_cli(tag, &["plan", "done", task_id]);
    assert_eq!(code, 0, "plan done failed");

    let (stdout, _, code) = run_cli(tag, &["plan", "progress", "--date", "2026-08-07"]);
    assert_eq!(code, 0, "plan progress failed");
    assert!(stdout.contains("100%"), "unexpected output: {stdout}");
}

#[test]
fn test_plan_add_rejects_blank_topic() {
    let (_, stderr, code) = run_cli("plan-blank", &["plan", "add", "   "]);
    assert_ne!(code, 0);
    assert!(stderr.contains("blank"), "unexpected stderr: {stderr}");
}

#[test]
fn test_rhythm_set_and_show() {
    let tag = "rhythm-set";
    let (_, _, code) = run_cli(
        tag,
        &["rhythm", "set", "--chronotype", "evening", "--wake", "08:30", "--water", "7"],
    );
    assert_eq!(code, 0, "rhythm set failed");

    let (stdout, _, code) = run_cli(tag, &["rhythm", "show", "--json"]);
    assert_eq!(code, 0, "rhythm show failed");
    let session: serde_json::Value = serde_json::from_str(&stdout).expect("rhythm show not JSON");
    assert_eq!(session["chronotype"], "evening");
    assert_eq!(session["water_cups"], 7);
}

#[test]
fn test_career_lookup() {
    let (stdout, _, code) = run_cli("career", &["career", "intj"]);
    assert_eq!(code, 0, "career lookup failed");
    assert!(stdout.contains("INTJ"));
    assert!(stdout.contains("Scientist"));
}

#[test]
fn test_career_unknown_type_fails() {
    let (_, stderr, code) = run_cli("career-bad", &["career", "ABCD"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown MBTI"));
}

#[test]
fn test_tips_with_seeded_cards() {
    let (stdout, _, code) = run_cli("tips", &["tips", "math", "--cards", "2", "--seed", "7"]);
    assert_eq!(code, 0, "tips failed");
    assert!(stdout.contains("Tips for math"));
    assert!(stdout.contains("Q."));

    // Same seed, same draw.
    let (again, _, _) = run_cli("tips", &["tips", "math", "--cards", "2", "--seed", "7"]);
    assert_eq!(stdout, again);
}

#[test]
fn test_timer_preview() {
    let (stdout, _, code) = run_cli("timer", &["timer", "preview", "--elapsed", "32"]);
    assert_eq!(code, 0, "timer preview failed");
    // 32 minutes into a 25/5 cadence: focus phase of round two.
    assert!(stdout.contains("focus"));
    assert!(stdout.contains("round 2/4"));
}

#[test]
fn test_report_runs() {
    let (stdout, _, code) = run_cli("report", &["report", "--date", "2026-08-07"]);
    assert_eq!(code, 0, "report failed");
    assert!(stdout.contains("Brain energy index"));
}

#[test]
fn test_config_list_get_set() {
    let tag = "config";
    let (stdout, _, code) = run_cli(tag, &["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert!(stdout.contains("daily_target_minutes"));

    let (_, _, code) = run_cli(tag, &["config", "set", "goals.daily_target_minutes", "300"]);
    assert_eq!(code, 0, "config set failed");

    let (stdout, _, code) = run_cli(tag, &["config", "get", "goals.daily_target_minutes"]);
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "300");
}

#[test]
fn test_completions_generate() {
    let (stdout, _, code) = run_cli("completions", &["completions", "bash"]);
    assert_eq!(code, 0, "completions failed");
    assert!(stdout.contains("studybody-cli"));
}
