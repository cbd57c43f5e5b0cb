//! Display formatting for report values.

use std::fmt::Write;

use chrono::{Datelike, Local};

use crate::breach::BreachRecord;

/// Format a count with `,` thousands separators.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// "1 data breach", "2 data breaches".
pub fn breach_count_label(count: usize) -> String {
    if count == 1 {
        "1 data breach".to_string()
    } else {
        format!("{} data breaches", count)
    }
}

/// Breach date formatted with `date_format`.
///
/// Dates that don't parse are shown as received. An invalid pattern
/// falls back to ISO 8601.
pub fn format_breach_date(record: &BreachRecord, date_format: &str) -> String {
    let Some(date) = record.parsed_breach_date() else {
        return record.breach_date.trim().to_string();
    };

    let mut out = String::new();
    if write!(out, "{}", date.format(date_format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Year shown in the footer.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// The two footer lines.
pub fn footer_lines(year: i32) -> [String; 2] {
    [
        format!("© {} breachwatch. Built with privacy in mind.", year),
        "Powered by XposedOrNot API".to_string(),
    ]
}
