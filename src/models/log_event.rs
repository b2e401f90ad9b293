use super::duty_status::DutyStatus;
use serde::{Deserialize, Serialize};

/// One duty-status interval as delivered by the trip planner.
///
/// `status` stays raw text: an unknown status is a problem of this single
/// event (it gets skipped), not of the whole file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEvent {
    pub status: String,
    pub start_minutes: f64, // minutes from midnight, may be fractional
    pub duration_minutes: f64,
    #[serde(default)]
    pub remarks: String,
}

impl LogEvent {
    pub fn new(status: DutyStatus, start_minutes: f64, duration_minutes: f64, remarks: &str) -> Self {
        Self {
            status: status.label().to_string(),
            start_minutes,
            duration_minutes,
            remarks: remarks.to_string(),
        }
    }

    pub fn duty_status(&self) -> Option<DutyStatus> {
        DutyStatus::parse(&self.status)
    }

    pub fn end_minutes(&self) -> f64 {
        self.start_minutes + self.duration_minutes
    }

    pub fn has_remarks(&self) -> bool {
        !self.remarks.trim().is_empty()
    }
}
