use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "clinsim-rs-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn run_clinic_sim(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_clinic_sim"))
        .args(args)
        .output()
        .expect("run clinic_sim")
}

fn stat_line<'a>(stdout: &'a str, key: &str) -> &'a str {
    stdout
        .lines()
        .find(|line| line.starts_with(key))
        .unwrap_or_else(|| panic!("missing `{key}` line in output:\n{stdout}"))
}

#[test]
fn clinic_sim_same_seed_prints_identical_output() {
    let args = [
        "--hours-open",
        "10",
        "--rooms",
        "1",
        "--mean-interarrival",
        "2",
        "--mean-exam",
        "1",
        "--horizon",
        "100",
        "--seed",
        "7",
    ];

    let first = run_clinic_sim(&args);
    let second = run_clinic_sim(&args);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let stdout = String::from_utf8(first.stdout).expect("utf8 stdout");
    let arrived: u64 = stat_line(&stdout, "patients_arrived ")
        .split_whitespace()
        .nth(1)
        .expect("count field")
        .parse()
        .expect("numeric count");
    assert!(arrived > 0);
    stat_line(&stdout, "patients_served ");
    stat_line(&stdout, "room_utilization ");
}

#[test]
fn clinic_sim_writes_report_json() {
    let dir = unique_temp_dir("report");
    let report_path = dir.join("report.json");

    let output = run_clinic_sim(&[
        "--hours-open",
        "5",
        "--seed",
        "3",
        "--report-json",
        report_path.to_str().expect("utf8 path"),
    ]);
    assert!(output.status.success());

    let report: Value =
        serde_json::from_str(&fs::read_to_string(&report_path).expect("read report"))
            .expect("parse report JSON");
    assert!(report["n_arrived"].is_u64());
    assert!(report["ave_patients_waiting"].is_number());

    let path = report["patients_in_system_path"]
        .as_array()
        .expect("step sequence array");
    assert!(!path.is_empty());
    assert_eq!(path[0]["value"], 0);
}

#[test]
fn clinic_sim_reports_scenario_errors() {
    let output = run_clinic_sim(&["--rooms", "0"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("exam rooms"), "stderr was: {stderr}");
}

#[test]
fn clinic_sim_trace_is_chronological() {
    let output = run_clinic_sim(&[
        "--hours-open",
        "2",
        "--rooms",
        "1",
        "--seed",
        "5",
        "--trace",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let times: Vec<f64> = stdout
        .lines()
        .filter(|line| line.starts_with("At "))
        .map(|line| {
            line.trim_start_matches("At ")
                .split(':')
                .next()
                .expect("time field")
                .parse()
                .expect("numeric trace time")
        })
        .collect();

    assert!(!times.is_empty());
    assert!(times.windows(2).all(|w| w[0] <= w[1]));
    assert!(stdout.contains("The clinic closes."));
}

#[test]
fn clinic_sim_loads_scenario_file_with_flag_overrides() {
    let dir = unique_temp_dir("scenario");
    let scenario = dir.join("scenario.json");
    fs::write(
        &scenario,
        r#"{ "hours_open": 5.0, "num_rooms": 1, "seed": 9 }"#,
    )
    .expect("write scenario");

    let from_file = run_clinic_sim(&["--scenario", scenario.to_str().expect("utf8 path")]);
    assert!(from_file.status.success());

    // Same file, overridden seed: a different replication.
    let overridden = run_clinic_sim(&[
        "--scenario",
        scenario.to_str().expect("utf8 path"),
        "--seed",
        "10",
    ]);
    assert!(overridden.status.success());
    assert_ne!(from_file.stdout, overridden.stdout);
}
