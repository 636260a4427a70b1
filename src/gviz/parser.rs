//! A module to convert feed rows into [`crate::Tournament`] records
//!
//! All per-cell parsing failures degrade to safe defaults (None, empty string,
//! false) rather than aborting ingestion: one malformed row must never take
//! the whole feed down.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::Tournament;
use super::{Row, Table};

// Fixed column contract of the feed (position 0 is unused)
const COL_DAY: usize = 1;
const COL_DATE: usize = 2;
const COL_TIME: usize = 3;
const COL_COMPLETED: usize = 4;
const COL_NAME: usize = 5;
const COL_ORGANIZER: usize = 6;
const COL_LOCATION: usize = 7;
const COL_PROVINCE: usize = 8;
const COL_REMARKS: usize = 9;
const COL_LINK: usize = 10;

/// The tagged numeric-constructor date form emitted by the feed.
/// `month` is zero-based; the time part is optional
static DATE_CONSTRUCTOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Date\((\d+),(\d+),(\d+)(?:,(\d+),(\d+),(\d+))?\)")
        .expect("cannot compile the Date() pattern")
});

const DAY_NAMES: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

/// Generic fallbacks for date cells that are not in constructor form
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%B %d, %Y", "%m/%d/%Y"];


/// Convert every row of a feed table.
///
/// This performs no inclusion filtering: completed or incomplete records are
/// returned as-is, for [`crate::Schedule`] to exclude
pub fn tournaments_from_table(table: &Table) -> Vec<Tournament> {
    table.rows.iter().map(tournament_from_row).collect()
}

/// Build one record from a feed row, cell by cell
pub fn tournament_from_row(row: &Row) -> Tournament {
    let date_raw = text_at(row, COL_DATE);
    let date = parse_feed_date(&date_raw);
    if date.is_none() && !date_raw.is_empty() {
        log::debug!("Ignoring unparseable date cell {:?}", date_raw);
    }
    let date_key = date.as_ref().map(Tournament::date_key_for).unwrap_or_default();

    // An explicit day name from the sheet wins over the derived one
    let day_from_sheet = text_at(row, COL_DAY);
    let day = if day_from_sheet.is_empty() {
        date.as_ref().map(|d| day_name(d).to_string()).unwrap_or_default()
    } else {
        day_from_sheet
    };

    let time = match row.cell(COL_TIME) {
        Some(cell) => match parse_feed_date(&cell.text()) {
            Some(t) => format_time(&t),
            None => cell.display_or_text(),
        },
        None => String::new(),
    };

    let is_completed = is_completed_value(row.cell(COL_COMPLETED).and_then(|c| c.value()));

    Tournament {
        day,
        date,
        date_key,
        time,
        is_completed,
        name: text_at(row, COL_NAME),
        organizer: text_at(row, COL_ORGANIZER),
        location: text_at(row, COL_LOCATION),
        province: text_at(row, COL_PROVINCE),
        remarks: text_at(row, COL_REMARKS),
        link: text_at(row, COL_LINK),
    }
}

fn text_at(row: &Row, index: usize) -> String {
    row.cell(index).map(|cell| cell.text()).unwrap_or_default()
}

/// Parse a date cell.
///
/// The constructor form `Date(year,month,day[,hour,minute,second])` is
/// attempted first (month is zero-based); generic date formats are the
/// fallback. Anything else yields None
pub fn parse_feed_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(caps) = DATE_CONSTRUCTOR.captures(raw) {
        let year: i32 = caps[1].parse().ok()?;
        let month0: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        let hour: u32 = caps.get(4).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
        let minute: u32 = caps.get(5).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
        let second: u32 = caps.get(6).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
        return NaiveDate::from_ymd_opt(year, month0 + 1, day)
            .and_then(|d| d.and_hms_opt(hour, minute, second));
    }

    for format in &DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    for format in &DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(raw, format) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Day name of a date (feed-local interpretation, no timezone involved)
pub fn day_name(date: &NaiveDateTime) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Display format for time cells: `H:MM AM/PM`, 12-hour wraparound
/// (hours 0 and 12 both display as 12), zero-padded minutes
pub fn format_time(datetime: &NaiveDateTime) -> String {
    let (is_pm, hour) = datetime.hour12();
    format!("{}:{:02} {}", hour, datetime.minute(), if is_pm { "PM" } else { "AM" })
}

/// Whether a raw cell value means "this tournament is already played".
///
/// The feed is loose here: booleans, numbers and a handful of string spellings
/// all occur. Anything unrecognized counts as not completed
pub fn is_completed_value(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() == Some(1.0),
        Some(Value::String(s)) => {
            matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "y")
        }
        _ => false,
    }
}
