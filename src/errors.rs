//! Unified application error type.
//! Every layer (models, core, export, cli) returns AppError so the
//! error handling stays consistent from the loader down to main().

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Input contract
    // ---------------------------
    #[error("Daily log {0} has no events field")]
    MissingEvents(String),

    #[error("Trip planner reported an error: {0}")]
    Planner(String),

    #[error("Invalid day {requested}: input contains {available} daily log(s)")]
    InvalidDay { requested: usize, available: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Validation failed with {0} warning(s)")]
    Validation(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
