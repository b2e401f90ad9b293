#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rdriverlog::{DailyLog, DutyStatus, LogEvent};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const EPS: f64 = 1e-9;

pub fn rdl() -> Command {
    cargo_bin_cmd!("rdriverlog")
}

pub fn fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdriverlog.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temporary input file and return its path
pub fn temp_input(name: &str, content: &str) -> String {
    let p = temp_out(name, "json");
    fs::write(&p, content).expect("write temp input");
    p
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

pub fn ev(status: DutyStatus, start: f64, duration: f64, remarks: &str) -> LogEvent {
    LogEvent::new(status, start, duration, remarks)
}

pub fn log_of(events: Vec<LogEvent>) -> DailyLog {
    DailyLog::new(day(), events)
}

/// The example day used throughout: off duty, a driving stint, off duty again.
pub fn off_drive_off_day() -> DailyLog {
    log_of(vec![
        ev(DutyStatus::OffDuty, 0.0, 360.0, ""),
        ev(DutyStatus::Driving, 360.0, 480.0, "Pickup at Richmond, VA"),
        ev(DutyStatus::OffDuty, 840.0, 600.0, ""),
    ])
    .with_total(DutyStatus::OffDuty, 16.0)
    .with_total(DutyStatus::SleeperBerth, 0.0)
    .with_total(DutyStatus::Driving, 8.0)
    .with_total(DutyStatus::OnDutyNotDriving, 0.0)
}

pub fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
