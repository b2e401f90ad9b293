use crate::config::Config;
use crate::core::calculator::edges::build_edges;
use crate::core::calculator::remarks::build_remarks;
use crate::core::calculator::totals::{TotalsSummary, TotalsUnit};
use crate::core::validate::{LogWarning, check_log};
use crate::errors::{AppError, AppResult};
use crate::models::daily_log::DailyLog;
use crate::models::log_sheet::{LOG_TITLE, LogSheet};

/// Timeline renderer. Holds only the settings that shape its output; every
/// call is a pure function of the given log.
#[derive(Debug, Clone)]
pub struct Renderer {
    pub totals_unit: TotalsUnit,
    pub tolerance_minutes: f64,
    pub remark_time_format: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Renderer {
    pub fn new(cfg: &Config) -> Self {
        Self {
            totals_unit: cfg.totals_unit,
            tolerance_minutes: cfg.totals_tolerance_minutes,
            remark_time_format: cfg.remark_time_format.clone(),
        }
    }

    /// Render one day. Fails only when the log has no `events` field at all;
    /// problems inside single events end up in `LogSheet::warnings`.
    pub fn render(&self, log: &DailyLog) -> AppResult<LogSheet> {
        let events = log
            .events
            .as_deref()
            .ok_or_else(|| AppError::MissingEvents(log.date_str()))?;

        let path = build_edges(events);
        let totals = TotalsSummary::from_log(log, self.totals_unit);
        let remarks = build_remarks(log, &self.remark_time_format);

        let mut warnings: Vec<LogWarning> = path.anomalies.into_iter().map(Into::into).collect();
        warnings.extend(check_log(log, &totals, self.tolerance_minutes));

        Ok(LogSheet {
            date: log.date,
            header: LOG_TITLE.to_string(),
            edges: path.edges,
            final_status: path.final_status,
            totals,
            remarks,
            warnings,
        })
    }

    pub fn render_all(&self, logs: &[DailyLog]) -> AppResult<Vec<LogSheet>> {
        logs.iter().map(|l| self.render(l)).collect()
    }
}
