//! Color helpers for the terminal and for vector output.

use crate::models::duty_status::DutyStatus;
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// Terminal color of a duty status row.
pub fn status_colour(status: DutyStatus) -> Colour {
    match status {
        DutyStatus::OffDuty => Colour::Blue,
        DutyStatus::SleeperBerth => Colour::Green,
        DutyStatus::Driving => Colour::Red,
        DutyStatus::OnDutyNotDriving => Colour::Yellow,
    }
}

/// Hex color of a status row band (same palette as the web log sheet).
pub fn status_hex(status: DutyStatus) -> &'static str {
    match status {
        DutyStatus::OffDuty => "#3498db",
        DutyStatus::SleeperBerth => "#2ecc71",
        DutyStatus::Driving => "#e74c3c",
        DutyStatus::OnDutyNotDriving => "#f1c40f",
    }
}

/// `#rrggbb`, six hex digits after the hash.
pub fn is_hex_colour(s: &str) -> bool {
    s.trim()
        .strip_prefix('#')
        .is_some_and(|h| h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()))
}

/// `#rrggbb` → RGB components in `[0, 1]`, as pdf-writer wants them.
/// Anything unparsable falls back to black.
pub fn hex_to_rgb(hex: &str) -> (f32, f32, f32) {
    let h = hex.trim().trim_start_matches('#');
    if h.len() != 6 || !h.chars().all(|c| c.is_ascii_hexdigit()) {
        return (0.0, 0.0, 0.0);
    }

    let channel = |i: usize| {
        u8::from_str_radix(&h[i..i + 2], 16)
            .map(|v| f32::from(v) / 255.0)
            .unwrap_or(0.0)
    };

    (channel(0), channel(2), channel(4))
}

/// Grey out an empty value, leave the rest untouched.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "0.00" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
