//! Coordinate mapper for the daily log grid.
//!
//! Everything here works in fractional coordinates: x and y are in `[0, 1]`,
//! origin at the top-left corner (midnight, top of the Off Duty band).
//! Output surfaces scale them to their own size.

use crate::models::duty_status::DutyStatus;
use serde::Serialize;

pub const MINUTES_PER_DAY: f64 = 1440.0;
pub const HOURS_PER_DAY: u32 = 24;
pub const MINUTES_PER_UNIT: f64 = 15.0;
/// Quarter-hour columns across the day.
pub const GRID_UNITS: usize = 96;
pub const STATUS_ROWS: u8 = 4;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Clamp a time of day to `[0, 1440]`. NaN collapses to midnight.
pub fn clamp_minutes(minutes: f64) -> f64 {
    if minutes.is_nan() {
        return 0.0;
    }
    minutes.clamp(0.0, MINUTES_PER_DAY)
}

pub fn x_fraction(minutes: f64) -> f64 {
    clamp_minutes(minutes) / MINUTES_PER_DAY
}

/// Vertical centre of a status row band.
pub fn y_fraction(row: u8) -> f64 {
    let row = row.clamp(1, STATUS_ROWS);
    (f64::from(row) - 0.5) / f64::from(STATUS_ROWS)
}

pub fn status_y(status: DutyStatus) -> f64 {
    y_fraction(status.row())
}

/// Top edge of a row band, used to draw the band separators.
pub fn row_top(row: u8) -> f64 {
    let row = row.clamp(1, STATUS_ROWS);
    f64::from(row - 1) / f64::from(STATUS_ROWS)
}

/// Quarter-hour column holding `minutes` (0..=96).
pub fn grid_unit(minutes: f64) -> usize {
    (clamp_minutes(minutes) / MINUTES_PER_UNIT).floor() as usize
}

pub fn hour_label(hour: u32) -> String {
    match hour % HOURS_PER_DAY {
        0 => "MIDNIGHT".to_string(),
        12 => "NOON".to_string(),
        h => h.to_string(),
    }
}

/// The 25 hour boundaries, midnight to midnight.
pub fn hour_lines() -> Vec<f64> {
    (0..=HOURS_PER_DAY)
        .map(|h| f64::from(h) / f64::from(HOURS_PER_DAY))
        .collect()
}

/// Quarter-hour ticks that do not fall on an hour boundary (72 of them).
pub fn quarter_ticks() -> Vec<f64> {
    (0..GRID_UNITS)
        .filter(|u| u % 4 != 0)
        .map(|u| u as f64 / GRID_UNITS as f64)
        .collect()
}
