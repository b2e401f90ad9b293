use crate::core::calculator::edges::Edge;
use crate::core::calculator::remarks::Remark;
use crate::core::calculator::totals::TotalsSummary;
use crate::core::validate::LogWarning;
use crate::models::duty_status::DutyStatus;
use crate::utils::date;
use chrono::NaiveDate;
use serde::Serialize;

pub const LOG_TITLE: &str = "DRIVER'S DAILY LOG";

/// Everything a surface needs to draw one day's log.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LogSheet {
    #[serde(with = "date::log_date")]
    pub date: NaiveDate,
    pub header: String,
    pub edges: Vec<Edge>,
    pub final_status: DutyStatus,
    pub totals: TotalsSummary,
    pub remarks: Vec<Remark>,
    pub warnings: Vec<LogWarning>,
}

impl LogSheet {
    pub fn date_str(&self) -> String {
        date::format_log_date(self.date)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
