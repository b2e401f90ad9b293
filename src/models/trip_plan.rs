//! Planner response loader.
//!
//! The planning backend answers either with `{ "daily_logs": [...], "route_info": {...} }`
//! or with `{ "error": "..." }`. Route geometry and stops belong to the map view
//! and are ignored here.

use super::daily_log::DailyLog;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct TripPlan {
    pub daily_logs: Vec<DailyLog>,
}

impl TripPlan {
    /// Parse any of the accepted shapes:
    /// - planner response with `daily_logs`
    /// - planner failure with `error` (→ `AppError::Planner`)
    /// - a bare array of daily logs
    /// - a single daily log object
    pub fn from_json(content: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(content)?;

        if let Some(err) = value.get("error") {
            let msg = match err {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Err(AppError::Planner(msg));
        }

        if value.get("daily_logs").is_some() {
            return Ok(serde_json::from_value(value)?);
        }

        if value.is_array() {
            return Ok(Self {
                daily_logs: serde_json::from_value(value)?,
            });
        }

        if value.get("date").is_some() {
            return Ok(Self {
                daily_logs: vec![serde_json::from_value(value)?],
            });
        }

        Err(AppError::InvalidInput(
            "expected a planner response, a daily log or an array of daily logs".into(),
        ))
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Select a single day (1-based), or all of them.
    pub fn select(&self, day: Option<usize>) -> AppResult<Vec<DailyLog>> {
        match day {
            None => Ok(self.daily_logs.clone()),
            Some(n) if n >= 1 && n <= self.daily_logs.len() => {
                Ok(vec![self.daily_logs[n - 1].clone()])
            }
            Some(n) => Err(AppError::InvalidDay {
                requested: n,
                available: self.daily_logs.len(),
            }),
        }
    }
}
