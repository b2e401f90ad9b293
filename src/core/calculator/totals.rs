//! Totals column of the log sheet.
//!
//! The supplied totals are displayed as given. The per-status minutes are also
//! recomputed from the events so the validator can compare the two.

use crate::core::calculator::edges::ClampedSpan;
use crate::models::daily_log::DailyLog;
use crate::models::duty_status::DutyStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TotalsUnit {
    #[default]
    Hours,
    Minutes,
}

impl TotalsUnit {
    pub fn to_minutes(&self, value: f64) -> f64 {
        match self {
            TotalsUnit::Hours => value * 60.0,
            TotalsUnit::Minutes => value,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            TotalsUnit::Hours => "h",
            TotalsUnit::Minutes => "min",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TotalRow {
    pub status: DutyStatus,
    pub label: &'static str,
    pub value: f64,
    pub recomputed_minutes: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TotalsSummary {
    pub unit: TotalsUnit,
    pub rows: Vec<TotalRow>,
    pub grand_total: f64,
}

impl TotalsSummary {
    pub fn from_log(log: &DailyLog, unit: TotalsUnit) -> Self {
        let recomputed = recompute_minutes(log);

        let rows: Vec<TotalRow> = DutyStatus::ALL
            .iter()
            .zip(recomputed)
            .map(|(status, minutes)| TotalRow {
                status: *status,
                label: status.label(),
                value: log.declared_total(*status),
                recomputed_minutes: minutes,
            })
            .collect();

        let grand_total = rows.iter().map(|r| r.value).sum();

        Self {
            unit,
            rows,
            grand_total,
        }
    }

    pub fn value(&self, status: DutyStatus) -> f64 {
        self.rows
            .iter()
            .find(|r| r.status == status)
            .map(|r| r.value)
            .unwrap_or(0.0)
    }

    pub fn grand_total_minutes(&self) -> f64 {
        self.unit.to_minutes(self.grand_total)
    }

    /// Minutes covered by valid events, all statuses together.
    pub fn covered_minutes(&self) -> f64 {
        self.rows.iter().map(|r| r.recomputed_minutes).sum()
    }
}

/// Minutes per status (display order) from the clamped events.
/// Events with an unknown status do not count.
pub fn recompute_minutes(log: &DailyLog) -> [f64; 4] {
    let mut out = [0.0; 4];

    for ev in log.events.iter().flatten() {
        if let Some(status) = ev.duty_status() {
            out[usize::from(status.row() - 1)] += ClampedSpan::of(ev).minutes();
        }
    }

    out
}

/// Two decimals, as on the paper log.
pub fn format_total(value: f64) -> String {
    format!("{:.2}", value)
}
