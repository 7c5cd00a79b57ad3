//! Field Formatting
//!
//! Per-field display rules shared by the resource tables.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::cell::{Cell, Tone};
use crate::state::Scalar;

pub const NOT_AVAILABLE: &str = "N/A";
pub const INVALID_DATE: &str = "Invalid Date";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%m/%d/%Y"];

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%#z", "%Y-%m-%dT%H:%M:%S%z"];

/// Render a date as `Mon D, YYYY`.
///
/// Absent, empty or zero input gives `N/A`; anything unparseable gives
/// `Invalid Date`. Integers are milliseconds since the Unix epoch. The date
/// shown is the calendar date in the input's own offset.
pub fn format_date(value: Option<&Scalar>) -> String {
    let Some(value) = value.filter(|v| !v.is_blank() && !is_zero(v)) else {
        return NOT_AVAILABLE.to_string();
    };

    match parse_date(value) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn is_zero(value: &Scalar) -> bool {
    match value {
        Scalar::Int(n) => *n == 0,
        Scalar::Float(n) => *n == 0.0,
        _ => false,
    }
}

fn parse_date(value: &Scalar) -> Option<NaiveDate> {
    match value {
        Scalar::Text(text) => parse_date_str(text.trim()),
        Scalar::Int(millis) => DateTime::from_timestamp_millis(*millis).map(|dt| dt.date_naive()),
        Scalar::Float(millis) if millis.is_finite() => {
            DateTime::from_timestamp_millis(*millis as i64).map(|dt| dt.date_naive())
        }
        _ => None,
    }
}

fn parse_date_str(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.date_naive());
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
    {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        })
        .or_else(|| parse_partial_date(text))
}

/// `YYYY-MM` and `YYYY`, taken as the first day of the month or year.
fn parse_partial_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('-');
    let year = parts.next().filter(|y| y.len() == 4)?;
    let month = parts.next();
    if parts.next().is_some() {
        return None;
    }
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let month = match month {
        Some(m) if m.len() == 2 && m.bytes().all(|b| b.is_ascii_digit()) => m.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

/// Workout difficulty badge: coded colors for the three known levels.
pub fn difficulty_cell(value: Option<&Scalar>) -> Cell {
    let Some(value) = value.filter(|v| !v.is_blank()) else {
        return Cell::placeholder();
    };

    match value.as_str() {
        Some("easy") => Cell::badge(Tone::Success, "Easy"),
        Some("medium") => Cell::badge(Tone::Warning, "Medium"),
        Some("hard") => Cell::badge(Tone::Danger, "Hard"),
        _ => Cell::badge(Tone::Neutral, value.to_string()),
    }
}

/// Leaderboard rank by position: medals for the podium, a number otherwise.
pub fn rank_cell(index: usize) -> Cell {
    match index {
        0 => Cell::Medal("🥇"),
        1 => Cell::Medal("🥈"),
        2 => Cell::Medal("🥉"),
        _ => Cell::badge(Tone::Neutral, (index + 1).to_string()),
    }
}

/// Record id badge, `#42`.
pub fn hash_id_cell(value: Option<&Scalar>) -> Cell {
    match value.filter(|v| !v.is_blank()) {
        Some(id) => Cell::badge(Tone::Primary, format!("#{}", id)),
        None => Cell::placeholder(),
    }
}

/// Display value for a numeric total, `0` when absent.
pub fn count_or_zero(value: Option<&Scalar>) -> String {
    value
        .filter(|v| !v.is_blank())
        .map_or_else(|| "0".to_string(), Scalar::to_string)
}

/// Display value for a text field, `N/A` when absent.
pub fn text_or_na(value: Option<&Scalar>) -> String {
    value
        .filter(|v| !v.is_blank())
        .map_or_else(|| NOT_AVAILABLE.to_string(), Scalar::to_string)
}
