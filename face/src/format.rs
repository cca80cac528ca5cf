// ABOUTME: Digital time and date strings for the clock screen.
// ABOUTME: Patterns are chrono strftime strings, validated before use.

//! Weekday and month names always come out in English; chrono's default
//! formatter carries no locale data.

use std::fmt::Write;

use anyhow::{bail, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;
use tracing::warn;

use crate::time::ClockTime;

pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";
pub const DEFAULT_DATE_FORMAT: &str = "%A, %B %d, %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    time_format: String,
    date_format: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Formatter {
    pub fn new(time_format: &str, date_format: &str) -> Result<Self> {
        validate_pattern(time_format)?;
        validate_pattern(date_format)?;
        Ok(Self {
            time_format: time_format.to_string(),
            date_format: date_format.to_string(),
        })
    }

    pub fn time(&self, time: &ClockTime) -> String {
        format_or_empty(time.datetime(), &self.time_format)
    }

    pub fn date(&self, time: &ClockTime) -> String {
        format_or_empty(time.datetime(), &self.date_format)
    }
}

fn render(datetime: NaiveDateTime, pattern: &str) -> std::result::Result<String, std::fmt::Error> {
    let mut out = String::new();
    write!(out, "{}", datetime.format(pattern))?;
    Ok(out)
}

// Patterns are validated on construction, so the empty fallback is unreachable in practice.
fn format_or_empty(datetime: NaiveDateTime, pattern: &str) -> String {
    render(datetime, pattern).unwrap_or_else(|_| {
        warn!(pattern, "failed to format clock text");
        String::new()
    })
}

/// Rejects patterns chrono cannot render for a local time without an offset:
/// unknown specifiers, and zone specifiers such as `%z`, `%Z` or `%+`.
pub fn validate_pattern(pattern: &str) -> Result<()> {
    if StrftimeItems::new(pattern).any(|item| item == Item::Error) {
        bail!("invalid strftime pattern: {pattern:?}");
    }
    if render(NaiveDateTime::default(), pattern).is_err() {
        bail!("strftime pattern needs a time zone: {pattern:?}");
    }
    Ok(())
}
