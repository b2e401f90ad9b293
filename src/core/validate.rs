//! Soft consistency checks on a daily log.
//!
//! Nothing here fails a render: findings are returned as warnings and the
//! caller decides what to do with them (`check --strict` turns them into an error).

use crate::core::calculator::edges::Anomaly;
use crate::core::calculator::totals::TotalsSummary;
use crate::core::grid::MINUTES_PER_DAY;
use crate::models::daily_log::DailyLog;
use crate::models::duty_status::DutyStatus;
use crate::utils::time::format_minutes;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogWarning {
    #[error("event #{index}: unknown duty status '{status}', event skipped")]
    MalformedEvent { index: usize, status: String },

    #[error("event #{index}: time {start_minutes}..{end_minutes} min outside the day, clamped")]
    OutOfRangeTime {
        index: usize,
        start_minutes: f64,
        end_minutes: f64,
    },

    #[error("event #{index}: nothing logged between {} and {}", hhmm(.from_minutes), hhmm(.to_minutes))]
    Gap {
        index: usize,
        from_minutes: f64,
        to_minutes: f64,
    },

    #[error("event #{index}: starts at {} before the previous event ends at {}", hhmm(.start_minutes), hhmm(.previous_end_minutes))]
    Overlap {
        index: usize,
        start_minutes: f64,
        previous_end_minutes: f64,
    },

    #[error("events cover {} of 24:00", hhmm(.covered_minutes))]
    IncompleteDay { covered_minutes: f64 },

    #[error("totals add up to {} instead of 24:00", hhmm(.grand_total_minutes))]
    InconsistentTotals { grand_total_minutes: f64 },

    #[error("{status}: declared {} but events add up to {}", hhmm(.declared_minutes), hhmm(.computed_minutes))]
    TotalsMismatch {
        status: DutyStatus,
        declared_minutes: f64,
        computed_minutes: f64,
    },

    #[error("totals entry '{key}' does not name a duty status")]
    UnknownTotalsKey { key: String },
}

fn hhmm(minutes: &f64) -> String {
    format_minutes(*minutes)
}

impl From<Anomaly> for LogWarning {
    fn from(a: Anomaly) -> Self {
        match a {
            Anomaly::MalformedEvent { index, status } => LogWarning::MalformedEvent { index, status },
            Anomaly::OutOfRangeTime {
                index,
                start_minutes,
                end_minutes,
            } => LogWarning::OutOfRangeTime {
                index,
                start_minutes,
                end_minutes,
            },
            Anomaly::Gap {
                index,
                from_minutes,
                to_minutes,
            } => LogWarning::Gap {
                index,
                from_minutes,
                to_minutes,
            },
            Anomaly::Overlap {
                index,
                start_minutes,
                previous_end_minutes,
            } => LogWarning::Overlap {
                index,
                start_minutes,
                previous_end_minutes,
            },
        }
    }
}

/// Day-level checks: coverage, totals sum, totals vs events.
pub fn check_log(log: &DailyLog, totals: &TotalsSummary, tolerance_minutes: f64) -> Vec<LogWarning> {
    let mut out = Vec::new();

    let covered = totals.covered_minutes();
    if (covered - MINUTES_PER_DAY).abs() > tolerance_minutes {
        out.push(LogWarning::IncompleteDay {
            covered_minutes: covered,
        });
    }

    // Nothing supplied: the planner sent no totals, nothing to compare.
    if log.totals.is_empty() {
        return out;
    }

    for key in log.unknown_totals_keys() {
        out.push(LogWarning::UnknownTotalsKey {
            key: key.to_string(),
        });
    }

    let grand = totals.grand_total_minutes();
    if (grand - MINUTES_PER_DAY).abs() > tolerance_minutes {
        out.push(LogWarning::InconsistentTotals {
            grand_total_minutes: grand,
        });
    }

    for row in &totals.rows {
        let declared = totals.unit.to_minutes(row.value);
        if (declared - row.recomputed_minutes).abs() > tolerance_minutes {
            out.push(LogWarning::TotalsMismatch {
                status: row.status,
                declared_minutes: declared,
                computed_minutes: row.recomputed_minutes,
            });
        }
    }

    out
}
