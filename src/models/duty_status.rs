use serde::{Deserialize, Serialize};
use std::fmt;

/// The four regulatory duty statuses, in grid order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DutyStatus {
    #[serde(rename = "Off Duty")]
    OffDuty,
    #[serde(rename = "Sleeper Berth")]
    SleeperBerth,
    #[serde(rename = "Driving")]
    Driving,
    #[serde(rename = "On Duty (Not Driving)")]
    OnDutyNotDriving,
}

impl DutyStatus {
    /// Display order of the grid rows and of the totals column.
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDutyNotDriving,
    ];

    /// Row index on the log grid, 1 (top) to 4 (bottom).
    pub fn row(&self) -> u8 {
        match self {
            DutyStatus::OffDuty => 1,
            DutyStatus::SleeperBerth => 2,
            DutyStatus::Driving => 3,
            DutyStatus::OnDutyNotDriving => 4,
        }
    }

    pub fn from_row(row: u8) -> Option<Self> {
        match row {
            1 => Some(DutyStatus::OffDuty),
            2 => Some(DutyStatus::SleeperBerth),
            3 => Some(DutyStatus::Driving),
            4 => Some(DutyStatus::OnDutyNotDriving),
            _ => None,
        }
    }

    /// Label printed on the paper log and used as wire name by the planner.
    pub fn label(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDutyNotDriving => "On Duty (Not Driving)",
        }
    }

    /// Lenient parser: accepts labels, variant names, snake case and short codes.
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "offduty" | "off" => Some(DutyStatus::OffDuty),
            "sleeperberth" | "sleeper" | "sb" => Some(DutyStatus::SleeperBerth),
            "driving" | "d" => Some(DutyStatus::Driving),
            "ondutynotdriving" | "onduty" | "on" => Some(DutyStatus::OnDutyNotDriving),
            _ => None,
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
