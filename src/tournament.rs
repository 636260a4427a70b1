//! The normalized tournament record

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One tournament, as derived from a single feed row.
///
/// Every field is already coerced to its display-ready shape: dates are
/// timezone-naive wall-clock values as published by the feed, and text fields
/// default to the empty string when the source cell is absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    /// Day name, either straight from the sheet or derived from `date`
    pub day: String,
    /// The parsed date, or None when the source cell was absent or unparseable
    pub date: Option<NaiveDateTime>,
    /// Canonical key derived from `date` (empty when `date` is None).
    /// Two tournaments on the same instant always share a key
    pub date_key: String,
    /// Display-formatted time (`H:MM AM/PM`), or the feed's raw text when the
    /// cell did not parse as a date-time
    pub time: String,
    /// Whether the feed marked this tournament as already played
    pub is_completed: bool,

    pub name: String,
    pub organizer: String,
    pub location: String,
    pub province: String,
    pub remarks: String,
    pub link: String,
}

impl Tournament {
    /// The canonical key for a given date. Naive ISO-8601, so that equal
    /// instants compare equal as strings
    pub fn date_key_for(date: &NaiveDateTime) -> String {
        date.format("%Y-%m-%dT%H:%M:%S").to_string()
    }

    /// Human-readable date, e.g. "October 28, 2025". Empty when there is no date
    pub fn formatted_date(&self) -> String {
        match &self.date {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => String::new(),
        }
    }
}
