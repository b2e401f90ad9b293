//! Time utilities: minutes → HH:MM.

/// Minutes as `HH:MM`, rounded to the nearest minute. Negative values get a sign.
pub fn format_minutes(mins: f64) -> String {
    let total = mins.round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let m = total.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

