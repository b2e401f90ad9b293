use super::duty_status::DutyStatus;
use super::log_event::LogEvent;
use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One calendar day of a trip: events plus the totals computed upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyLog {
    #[serde(with = "date::log_date")]
    pub date: NaiveDate,
    // None ⇔ the field is missing from the input
    #[serde(default)]
    pub events: Option<Vec<LogEvent>>,
    #[serde(default)]
    pub totals: BTreeMap<String, f64>,
}

impl DailyLog {
    pub fn new(date: NaiveDate, events: Vec<LogEvent>) -> Self {
        Self {
            date,
            events: Some(events),
            totals: BTreeMap::new(),
        }
    }

    /// Builder used by tests and by callers that already know the totals.
    pub fn with_total(mut self, status: DutyStatus, value: f64) -> Self {
        self.totals.insert(status.label().to_string(), value);
        self
    }

    pub fn date_str(&self) -> String {
        date::format_log_date(self.date)
    }

    /// Supplied total for a status, looking up any accepted key spelling.
    /// Missing statuses count as zero.
    pub fn declared_total(&self, status: DutyStatus) -> f64 {
        self.totals
            .iter()
            .filter(|(k, _)| DutyStatus::parse(k) == Some(status))
            .map(|(_, v)| *v)
            .sum()
    }

    /// Totals keys that do not name any duty status.
    pub fn unknown_totals_keys(&self) -> Vec<&str> {
        self.totals
            .keys()
            .filter(|k| DutyStatus::parse(k).is_none())
            .map(String::as_str)
            .collect()
    }
}
