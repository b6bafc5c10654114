use std::fs;
use std::process::Command;

#[test]
fn cli_writes_a_chart_file() {
    let bin = env!("CARGO_BIN_EXE_seatplan");
    let dir = tempfile::tempdir().unwrap();
    let names = dir.path().join("names.txt");
    fs::write(&names, "Alice\nBob\nCarol\n").unwrap();
    let chart = dir.path().join("chart.txt");

    let status = Command::new(bin)
        .args([
            "--rows",
            "2",
            "--cols",
            "2",
            "--participants",
            "3",
            "--names",
            names.to_str().unwrap(),
            "--seed",
            "7",
            "--out",
            chart.to_str().unwrap(),
        ])
        .status()
        .expect("run failed");
    assert!(status.success());

    let text = fs::read_to_string(&chart).unwrap();
    assert!(text.contains("Alice"));
    assert!(text.contains("(empty)"));
    assert!(text.contains("Legend:"));
}

#[test]
fn cli_find_reports_coordinates() {
    let bin = env!("CARGO_BIN_EXE_seatplan");
    let dir = tempfile::tempdir().unwrap();
    let names = dir.path().join("names.txt");
    fs::write(&names, "Alice\nBob\n").unwrap();

    let output = Command::new(bin)
        .args([
            "--rows",
            "2",
            "--cols",
            "2",
            "--participants",
            "2",
            "--names",
            names.to_str().unwrap(),
            "--seed",
            "1",
            "--find",
            "Alice",
        ])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Alice: row"), "stdout was: {stdout}");
    assert!(stdout.contains('⭐'));
}

#[test]
fn cli_find_miss_is_not_an_error() {
    let bin = env!("CARGO_BIN_EXE_seatplan");
    let output = Command::new(bin)
        .args([
            "--rows", "2", "--cols", "2", "--participants", "2", "--seed", "1", "--find", "Zzz",
        ])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No participant name contains"));
}

#[test]
fn cli_json_summary_lists_matches() {
    let bin = env!("CARGO_BIN_EXE_seatplan");
    let dir = tempfile::tempdir().unwrap();
    let names = dir.path().join("names.txt");
    fs::write(&names, "Alice\nBob\n").unwrap();

    let output = Command::new(bin)
        .args([
            "--rows",
            "1",
            "--cols",
            "2",
            "--participants",
            "2",
            "--names",
            names.to_str().unwrap(),
            "--seed",
            "3",
            "--find",
            "Bob",
            "--json",
        ])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid json");
    assert_eq!(summary["capacity"], 2);
    assert_eq!(summary["matches"][0]["name"], "Bob");
}

#[test]
fn cli_accepts_a_json_config() {
    let bin = env!("CARGO_BIN_EXE_seatplan");
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("seating.json");
    fs::write(
        &config,
        r#"{ "participants": 2, "rows": 1, "cols": 3, "names": ["Alice", "Bob"] }"#,
    )
    .unwrap();

    let output = Command::new(bin)
        .args([
            "--config",
            config.to_str().unwrap(),
            "--seed",
            "5",
            "--json",
        ])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid json");
    assert_eq!(summary["rows"], 1);
    assert_eq!(summary["capacity"], 3);
}

#[test]
fn cli_rejects_overfull_config() {
    let bin = env!("CARGO_BIN_EXE_seatplan");
    let output = Command::new(bin)
        .args(["--rows", "2", "--cols", "2", "--participants", "5"])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config error"), "stderr was: {stderr}");
}

#[test]
fn cli_missing_names_file_fails_cleanly() {
    let bin = env!("CARGO_BIN_EXE_seatplan");
    let output = Command::new(bin)
        .args(["--names", "/nonexistent/names.txt"])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reading names file"), "stderr was: {stderr}");
}
