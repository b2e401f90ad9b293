use crate::core::grid::clamp_minutes;
use crate::models::daily_log::DailyLog;
use crate::models::duty_status::DutyStatus;
use crate::utils::date::{at_minutes, format_clock};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Used when the configured pattern cannot be printed.
const FALLBACK_CLOCK: &str = "%H:%M";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Remark {
    pub at: NaiveDateTime,
    pub clock: String,
    pub status: Option<DutyStatus>,
    pub text: String,
}

/// Events carrying a non-blank remark, in input order, stamped with the clock
/// time of their start instant.
pub fn build_remarks(log: &DailyLog, time_format: &str) -> Vec<Remark> {
    log.events
        .iter()
        .flatten()
        .filter(|ev| ev.has_remarks())
        .map(|ev| {
            let at = at_minutes(log.date, clamp_minutes(ev.start_minutes));
            Remark {
                at,
                clock: format_clock(at, time_format)
                    .unwrap_or_else(|| at.format(FALLBACK_CLOCK).to_string()),
                status: ev.duty_status(),
                text: ev.remarks.trim().to_string(),
            }
        })
        .collect()
}
