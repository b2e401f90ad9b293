use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use std::fmt::Write;

/// Wire format used by the trip planner for log dates.
pub const LOG_DATE_FORMAT: &str = "%m-%d-%Y";

pub fn parse_log_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, LOG_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

pub fn format_log_date(d: NaiveDate) -> String {
    d.format(LOG_DATE_FORMAT).to_string()
}

/// Midnight of `date` plus `minutes`, rounded to the second.
/// chrono handles the rollover if `minutes` reaches the next day.
pub fn at_minutes(date: NaiveDate, minutes: f64) -> NaiveDateTime {
    let seconds = (minutes * 60.0).round() as i64;
    date.and_time(NaiveTime::MIN) + TimeDelta::seconds(seconds)
}

/// strftime rendering that reports failure instead of panicking.
/// Offset specifiers (`%z`, `%Z`) have nothing to print for a naive timestamp.
pub fn format_clock(at: NaiveDateTime, pattern: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", at.format(pattern)).ok()?;
    Some(out)
}

/// serde adapter for `DailyLog::date`.
pub mod log_date {
    use super::{format_log_date, parse_log_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(d: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format_log_date(*d))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse_log_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid log date '{raw}' (MM-DD-YYYY)")))
    }
}
