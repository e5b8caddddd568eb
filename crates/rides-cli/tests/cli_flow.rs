use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn tracker() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ride-tracker"))
}

fn viewer() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ride-viewer"))
}

fn temp_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::create_dir_all(dir.path().join("config")).expect("create config dir");
    dir
}

fn command(bin: PathBuf, dir: &Path) -> Command {
    let mut cmd = Command::new(bin);
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env_remove("RIDES_FILE")
        .env_remove("RIDES_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("COLUMNS");
    cmd
}

fn save_ride(dir: &Path, file: &Path, fields: &[&str]) -> Output {
    let mut cmd = command(tracker(), dir);
    cmd.arg("--no-input").arg("--file").arg(file);
    for field in fields {
        cmd.arg("--field").arg(field);
    }
    cmd.output().expect("run ride-tracker")
}

fn describe(output: &Output) -> String {
    format!(
        "status={:?} stdout={} stderr={}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn test_tracker_saves_then_viewer_lists() {
    let temp = temp_dir();
    let dir = temp.path();
    let file = dir.join("rides.csv");

    let save = save_ride(
        &dir,
        &file,
        &[
            "Date=2024-01-01",
            "Pickup Location=A St",
            "Drop-off Location=B Ave",
        ],
    );
    assert!(save.status.success(), "save failed: {}", describe(&save));

    let contents = std::fs::read_to_string(&file).expect("read ride file");
    assert_eq!(
        contents,
        "Date,Time,Pickup Location,Drop-off Location,Fare,Driver,Rating,Payment Method,Notes\n\
         2024-01-01,,A St,B Ave,,,,,\n"
    );

    let save = save_ride(
        &dir,
        &file,
        &["date=2024-01-02", "pickup=C Rd", "dropoff=D Ln", "Fare=12.50"],
    );
    assert!(save.status.success(), "second save failed: {}", describe(&save));

    let list = command(viewer(), &dir)
        .arg("--json")
        .arg("--file")
        .arg(&file)
        .output()
        .expect("run ride-viewer");
    assert!(list.status.success(), "viewer failed: {}", describe(&list));

    let value: serde_json::Value = serde_json::from_slice(&list.stdout).expect("parse json");
    let rows = value.as_array().expect("json array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Date"], "2024-01-01");
    assert_eq!(rows[1]["Pickup Location"], "C Rd");
    assert_eq!(rows[1]["Fare"], "12.50");
}

#[test]
fn test_tracker_rejects_missing_required_fields() {
    let temp = temp_dir();
    let dir = temp.path();
    let file = dir.join("rides.csv");

    let save = save_ride(&dir, &file, &["Date=2024-01-01", "Fare=9"]);
    assert_eq!(save.status.code(), Some(4), "{}", describe(&save));
    let stderr = String::from_utf8_lossy(&save.stderr);
    assert!(stderr.contains("Pickup Location and Drop-off Location are required"));
    assert!(!file.exists());
}

#[test]
fn test_tracker_rejects_unknown_field() {
    let temp = temp_dir();
    let dir = temp.path();
    let file = dir.join("rides.csv");

    let save = save_ride(&dir, &file, &["Vehicle=Sedan"]);
    assert_eq!(save.status.code(), Some(4), "{}", describe(&save));
    assert!(!file.exists());

    let save = save_ride(&dir, &file, &["Date"]);
    assert_eq!(save.status.code(), Some(4), "{}", describe(&save));
}

#[test]
fn test_viewer_plain_output_and_missing_file() {
    let temp = temp_dir();
    let dir = temp.path();
    let file = dir.join("rides.csv");

    let empty = command(viewer(), &dir)
        .arg("--file")
        .arg(&file)
        .output()
        .expect("run ride-viewer");
    assert!(empty.status.success(), "{}", describe(&empty));
    assert!(String::from_utf8_lossy(&empty.stdout).trim().is_empty());
    assert!(!file.exists());

    let save = save_ride(
        &dir,
        &file,
        &["Date=2024-03-05", "Pickup=Home", "Dropoff=Work", "Notes=left\tbag"],
    );
    assert!(save.status.success(), "{}", describe(&save));

    let plain = command(viewer(), &dir)
        .arg("--format")
        .arg("plain")
        .arg("--file")
        .arg(&file)
        .output()
        .expect("run ride-viewer");
    assert!(plain.status.success(), "{}", describe(&plain));
    assert_eq!(
        String::from_utf8_lossy(&plain.stdout),
        "2024-03-05\t\tHome\tWork\t\t\t\t\tleft bag\n"
    );
}

#[test]
fn test_viewer_rejects_bad_format() {
    let temp = temp_dir();
    let dir = temp.path();
    let output = command(viewer(), &dir)
        .arg("--format")
        .arg("csv")
        .output()
        .expect("run ride-viewer");
    assert_eq!(output.status.code(), Some(4), "{}", describe(&output));
}

#[test]
fn test_config_file_sets_ride_path() {
    let temp = temp_dir();
    let dir = temp.path();
    let file = dir.join("from-config.csv");
    let config_dir = dir.join("config").join("rides");
    std::fs::create_dir_all(&config_dir).expect("create config dir");
    std::fs::write(
        config_dir.join("config.toml"),
        format!("[rides]\npath = \"{}\"\n", file.to_string_lossy()),
    )
    .expect("write config");

    let save = command(tracker(), &dir)
        .arg("--no-input")
        .arg("--field")
        .arg("Date=2024-01-01")
        .arg("--field")
        .arg("Pickup=A")
        .arg("--field")
        .arg("Dropoff=B")
        .output()
        .expect("run ride-tracker");
    assert!(save.status.success(), "{}", describe(&save));
    assert!(file.exists());
    assert!(!dir.join("rides.csv").exists());
}

#[test]
fn test_explicit_missing_config_fails() {
    let temp = temp_dir();
    let dir = temp.path();
    let output = command(viewer(), &dir)
        .arg("--config")
        .arg(dir.join("nope.toml"))
        .output()
        .expect("run ride-viewer");
    assert_eq!(output.status.code(), Some(1), "{}", describe(&output));
}

#[test]
fn test_viewer_reports_unreadable_file() {
    let temp = temp_dir();
    let dir = temp.path();
    let file = dir.join("rides.csv");
    std::fs::write(&file, "2024-01-01,,A St,B Ave,,,,,\n").expect("write ride file");

    let output = command(viewer(), dir)
        .arg("--file")
        .arg(&file)
        .output()
        .expect("run ride-viewer");
    assert_eq!(output.status.code(), Some(1), "{}", describe(&output));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("error=").count(), 1, "{}", stderr);
    assert!(stderr.contains("no recognizable ride columns"));
    assert!(!stderr.contains("Error:"));
}

#[test]
fn test_viewer_keeps_rows_before_a_bad_row() {
    let temp = temp_dir();
    let dir = temp.path();
    let file = dir.join("rides.csv");
    let mut bytes = b"Date,Time,Pickup Location,Drop-off Location,Fare,Driver,Rating,Payment Method,Notes\n\
        2024-01-01,,A St,B Ave,,,,,\n2024-01-02,,"
        .to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    bytes.extend_from_slice(b",D,,,,,\n");
    std::fs::write(&file, bytes).expect("write ride file");

    let output = command(viewer(), dir)
        .arg("--file")
        .arg(&file)
        .output()
        .expect("run ride-viewer");
    assert_eq!(output.status.code(), Some(1), "{}", describe(&output));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "2024-01-01\t\tA St\tB Ave\t\t\t\t\t\n"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("error="));
}

#[test]
fn test_tracker_reports_unwritable_file() {
    let temp = temp_dir();
    let dir = temp.path();
    let file = dir.join("missing").join("rides.csv");

    let save = save_ride(
        dir,
        &file,
        &["Date=2024-01-01", "Pickup=A St", "Dropoff=B Ave"],
    );
    assert_eq!(save.status.code(), Some(1), "{}", describe(&save));
    let stderr = String::from_utf8_lossy(&save.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("rides.csv"));
    assert!(!file.exists());
}

#[test]
fn test_tracker_appends_after_unterminated_row() {
    let temp = temp_dir();
    let dir = temp.path();
    let file = dir.join("rides.csv");
    std::fs::write(
        &file,
        "Date,Time,Pickup Location,Drop-off Location,Fare,Driver,Rating,Payment Method,Notes\n\
         2024-01-01,,A,B,,,,,",
    )
    .expect("write ride file");

    let save = save_ride(dir, &file, &["Date=2024-01-02", "Pickup=C", "Dropoff=D"]);
    assert!(save.status.success(), "{}", describe(&save));

    let plain = command(viewer(), dir)
        .arg("--format")
        .arg("plain")
        .arg("--file")
        .arg(&file)
        .output()
        .expect("run ride-viewer");
    assert_eq!(
        String::from_utf8_lossy(&plain.stdout),
        "2024-01-01\t\tA\tB\t\t\t\t\t\n2024-01-02\t\tC\tD\t\t\t\t\t\n"
    );
}

#[test]
fn test_tracker_without_fields_is_invalid_input() {
    let temp = temp_dir();
    let dir = temp.path();
    let file = dir.join("rides.csv");

    let save = save_ride(dir, &file, &[]);
    assert_eq!(save.status.code(), Some(4), "{}", describe(&save));
    assert!(String::from_utf8_lossy(&save.stderr).contains("No ride fields given"));
    assert!(!file.exists());
}
