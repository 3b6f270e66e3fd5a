use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "codeclock-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

fn bin() -> String {
    std::env::var("CARGO_BIN_EXE_codeclock").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("codeclock.exe");
        } else {
            path.push("codeclock");
        }
        path.to_string_lossy().into_owned()
    })
}

fn run_codeclock(args: &[&str], data_dir: &Path) -> (bool, Vec<u8>, Vec<u8>) {
    let output = Command::new(bin())
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env("HOME", data_dir)
        .env_remove("CODECLOCK_LOG")
        .output()
        .expect("run codeclock");
    (output.status.success(), output.stdout, output.stderr)
}

fn today_utc() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

const SAMPLE: &str = r#"[
  {"workspace":"Proj","date":"2024-01-01","duration":3661,"startTime":"09:00:00","endTime":"10:01:01"},
  {"workspace":"Acme, Inc","date":"2024-02-10","duration":600,"startTime":"13:00:00","endTime":"13:10:00"},
  {"workspace":"Proj","date":"2024-03-05","duration":120,"startTime":"08:00:00","endTime":"08:02:00"}
]"#;

#[test]
fn track_with_time_limit_records_one_session() {
    let root = unique_temp_dir("track");

    let (ok, stdout, stderr) = run_codeclock(
        &["--timezone", "UTC", "track", "-w", "Proj", "--stop-after", "1", "-q"],
        &root,
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    assert!(String::from_utf8_lossy(&stdout).starts_with("Recorded "));

    let raw = fs::read_to_string(root.join("sessionData.json")).expect("session data");
    let json: Value = serde_json::from_str(&raw).expect("json");
    let arr = json.as_array().expect("array");
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["workspace"], "Proj");
    let duration = arr[0]["duration"].as_u64().expect("duration");
    assert!((1..=3).contains(&duration), "duration {duration}");
    assert!(arr[0]["startedAt"].is_string());

    let time = |key: &str| {
        chrono::NaiveTime::parse_from_str(arr[0][key].as_str().expect(key), "%H:%M:%S")
            .expect("time of day")
    };
    let shown = (time("endTime") - time("startTime")).num_seconds();
    if shown >= 0 {
        assert_eq!(shown as u64, duration);
    }

    let _ = fs::remove_dir_all(root);
}

#[test]
fn track_over_corrupt_store_keeps_old_contents() {
    let root = unique_temp_dir("track-corrupt");
    let corrupt = r#"[{"workspace":"Old","date":"2024-01-01","duration":5,"startTime":"09:00:00","endTime":"09:00:05"},]"#;
    write_file(&root.join("sessionData.json"), corrupt);

    let (ok, _, stderr) = run_codeclock(&["track", "-w", "Proj", "--stop-after", "0", "-q"], &root);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    assert!(String::from_utf8_lossy(&stderr).contains("sessionData.json.corrupt"));

    let aside = fs::read_to_string(root.join("sessionData.json.corrupt")).expect("moved aside");
    assert_eq!(aside, corrupt);
    let raw = fs::read_to_string(root.join("sessionData.json")).expect("session data");
    let json: Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(json.as_array().expect("array").len(), 1);
    assert_eq!(json[0]["workspace"], "Proj");

    let _ = fs::remove_dir_all(root);
}

#[test]
fn show_json_sorts_newest_first_and_groups() {
    let root = unique_temp_dir("show");
    write_file(&root.join("sessionData.json"), SAMPLE);

    let (ok, stdout, stderr) = run_codeclock(&["show", "-j"], &root);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json: Value = serde_json::from_slice(&stdout).expect("json");
    let records = json["records"].as_array().expect("records");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["date"], "2024-03-05");
    assert_eq!(records[2]["date"], "2024-01-01");
    assert_eq!(json["totalSeconds"].as_u64(), Some(4381));

    let groups = json["byWorkspace"].as_array().expect("groups");
    assert_eq!(groups[0]["workspace"], "Proj");
    assert_eq!(groups[0]["seconds"].as_u64(), Some(3781));
    assert_eq!(groups[1]["workspace"], "Acme, Inc");

    let _ = fs::remove_dir_all(root);
}

#[test]
fn show_project_filter() {
    let root = unique_temp_dir("show-project");
    write_file(&root.join("sessionData.json"), SAMPLE);

    let (ok, stdout, _) = run_codeclock(&["show", "-j", "--project", "Acme, Inc"], &root);
    assert!(ok);
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    assert_eq!(json["records"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["totalSeconds"].as_u64(), Some(600));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn show_today_only_includes_todays_sessions() {
    let root = unique_temp_dir("show-today");
    let today = today_utc();
    write_file(
        &root.join("sessionData.json"),
        &format!(
            r#"[
  {{"workspace":"Old","date":"2001-01-01","duration":5,"startTime":"09:00:00","endTime":"09:00:05"}},
  {{"workspace":"Now","date":"{today}","duration":7,"startTime":"09:00:00","endTime":"09:00:07"}}
]"#
        ),
    );

    let (ok, stdout, _) = run_codeclock(
        &["--timezone", "UTC", "show", "-j", "--period", "today"],
        &root,
    );
    assert!(ok);
    let json: Value = serde_json::from_slice(&stdout).expect("json");
    let records = json["records"].as_array().expect("records");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["workspace"], "Now");

    let _ = fs::remove_dir_all(root);
}

#[test]
fn show_table_without_data() {
    let root = unique_temp_dir("show-empty");

    let (ok, stdout, _) = run_codeclock(&["show", "--no-color"], &root);
    assert!(ok);
    assert!(String::from_utf8_lossy(&stdout).contains("No session data found."));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn corrupt_store_warns_and_shows_nothing() {
    let root = unique_temp_dir("corrupt");
    write_file(&root.join("sessionData.json"), "[{broken");

    let (ok, stdout, stderr) = run_codeclock(&["show"], &root);
    assert!(ok);
    assert!(String::from_utf8_lossy(&stderr).contains("corrupt"));
    assert!(String::from_utf8_lossy(&stdout).contains("No session data found."));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn export_writes_escaped_csv() {
    let root = unique_temp_dir("export");
    write_file(&root.join("sessionData.json"), SAMPLE);
    let out = root.join("report.csv");

    let (ok, _, stderr) = run_codeclock(&["export", out.to_str().expect("utf8 path")], &root);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let csv = fs::read_to_string(&out).expect("csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Workspace,Date,Duration,Start Time,End Time");
    assert_eq!(lines[1], "Proj,2024-01-01,01:01:01,09:00:00,10:01:01");
    assert_eq!(lines[2], "\"Acme, Inc\",2024-02-10,00:10:00,13:00:00,13:10:00");
    assert_eq!(lines.len(), 4);

    let _ = fs::remove_dir_all(root);
}

#[test]
fn export_without_path_is_noop() {
    let root = unique_temp_dir("export-none");
    write_file(&root.join("sessionData.json"), SAMPLE);

    let (ok, stdout, _) = run_codeclock(&["export"], &root);
    assert!(ok);
    assert!(String::from_utf8_lossy(&stdout).contains("nothing written"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn export_to_missing_directory_fails() {
    let root = unique_temp_dir("export-fail");
    write_file(&root.join("sessionData.json"), SAMPLE);
    let out = root.join("missing").join("report.csv");

    let (ok, _, stderr) = run_codeclock(&["export", out.to_str().expect("utf8 path")], &root);
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Failed to export CSV"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn invalid_timezone_is_rejected() {
    let root = unique_temp_dir("bad-tz");

    let (ok, _, stderr) = run_codeclock(&["--timezone", "Mars/Olympus", "show"], &root);
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Invalid timezone: Mars/Olympus"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn statusline_counts_today() {
    let root = unique_temp_dir("statusline");
    let today = today_utc();
    write_file(
        &root.join("sessionData.json"),
        &format!(
            r#"[{{"workspace":"Now","date":"{today}","duration":3661,"startTime":"09:00:00","endTime":"10:01:01"}}]"#
        ),
    );

    let (ok, stdout, _) = run_codeclock(&["--timezone", "UTC", "statusline"], &root);
    assert!(ok);
    assert_eq!(
        String::from_utf8_lossy(&stdout).trim(),
        "Today: 1:01:01 | 1 sessions | top: Now"
    );

    let _ = fs::remove_dir_all(root);
}

#[test]
fn statusline_warns_on_corrupt_store() {
    let root = unique_temp_dir("statusline-corrupt");
    write_file(&root.join("sessionData.json"), "[{broken");

    let (ok, _, stderr) = run_codeclock(&["--timezone", "UTC", "statusline"], &root);
    assert!(ok);
    assert!(String::from_utf8_lossy(&stderr).contains("corrupt"));

    let _ = fs::remove_dir_all(root);
}

#[test]
fn view_answers_get_session_data() {
    let root = unique_temp_dir("view");
    write_file(&root.join("sessionData.json"), SAMPLE);

    let mut child = Command::new(bin())
        .arg("--data-dir")
        .arg(&root)
        .arg("view")
        .env("HOME", &root)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn codeclock view");
    {
        let mut stdin = child.stdin.take().expect("stdin");
        stdin
            .write_all(b"{\"command\":\"getSessionData\"}\n")
            .expect("write request");
    }
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success());

    let line = String::from_utf8_lossy(&output.stdout);
    let reply: Value = serde_json::from_str(line.trim()).expect("json reply");
    assert_eq!(reply["command"], "sessionData");
    assert_eq!(reply["data"].as_array().map(Vec::len), Some(3));

    let _ = fs::remove_dir_all(root);
}
