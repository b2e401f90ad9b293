//! User-facing status lines.
//!
//! All of them go to stderr: stdout is reserved for rendered logs so that
//! `rdriverlog render log.json --format svg > day.svg` stays clean.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

static QUIET: AtomicBool = AtomicBool::new(false);

#[derive(Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn colour(self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    /// Info and success lines can be silenced with `--quiet`.
    fn muted(self) -> bool {
        matches!(self, Level::Info | Level::Success) && QUIET.load(Ordering::Relaxed)
    }
}

fn emit(level: Level, msg: &dyn fmt::Display) {
    if level.muted() {
        return;
    }
    eprintln!("{}{}{} {}{}", level.colour(), BOLD, level.icon(), RESET, msg);
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, &msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, &msg);
}

/// One line per finding, prefixed with the log date.
pub fn sheet_warnings<W: fmt::Display>(date: &str, warnings: &[W]) {
    for w in warnings {
        warning(format!("{date}: {w}"));
    }
}
