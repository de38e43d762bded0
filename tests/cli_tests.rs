#![cfg(feature = "cli_api")]

use assert_cmd::Command;
use predicates::str::contains as str_contains;
use tempfile::tempdir;

#[allow(deprecated)]
fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.env("TIMETABLE_LOG", "error")
        .write_stdin(script.to_string())
        .assert()
}

#[test]
fn cli_edits_and_shows_current_day() {
    run_cli("classes 1,2\nset 1 Math\nset 3 Korean\nshow\nquit\n")
        .success()
        .stdout(str_contains("2 class(es) selected."))
        .stdout(str_contains("1-1 · 월요일 (7교시)"))
        .stdout(str_contains("| 1      | Math"))
        .stdout(str_contains("| 3      | Korean"));
}

#[test]
fn cli_rejects_out_of_range_period() {
    run_cli("classes 1\nperiods 3\nset 4 Art\nquit\n")
        .success()
        .stdout(str_contains("Periods set to 3."))
        .stdout(str_contains("Nothing changed (period must be 1-3"));
}

#[test]
fn cli_browses_sections_circularly() {
    run_cli("dims 2 5 1,2\nprev\nquit\n")
        .success()
        .stdout(str_contains("2-2 · 월요일 (5교시)"));
}

#[test]
fn cli_clear_requires_confirmation() {
    run_cli("classes 1\nset 1 Math\nclear\nn\nclear\ny\nquit\n")
        .success()
        .stdout(str_contains("Clear cancelled."))
        .stdout(str_contains("Cleared 1-1 mon."));
}

#[test]
fn cli_export_refuses_without_classes() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("timetable.json");
    let script = format!("export json {}\nquit\n", path.display());
    run_cli(&script)
        .success()
        .stdout(str_contains("Export failed"))
        .stdout(str_contains("section list is empty"));
    assert!(!path.exists());
}

#[test]
fn cli_export_writes_timetable_json() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("timetable.json");
    let script = format!(
        "dims 1 7 1,2\nday tue\nset 2 English\nexport json {}\nquit\n",
        path.display()
    );
    run_cli(&script)
        .success()
        .stdout(str_contains("Exported 2 class(es)"));

    let text = std::fs::read_to_string(&path).expect("export file");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["1-1"]["tue"], serde_json::json!(["", "English"]));
    assert_eq!(value["1-2"]["fri"], serde_json::json!([]));
}

#[test]
fn cli_reports_unknown_weekday() {
    run_cli("classes 1\nday sat\nquit\n")
        .success()
        .stdout(str_contains("Unknown weekday 'sat'"));
}
