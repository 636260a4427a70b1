//! The working set of upcoming tournaments, and its filter projection

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::Tournament;

/// The current filter selection: at most one province and one date key.
///
/// Ephemeral UI state, recomputed from the controls on every change; absent
/// values impose no constraint
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    pub province: Option<String>,
    pub date_key: Option<String>,
}

impl Filter {
    /// Whether a record passes the selection. Both criteria are exact,
    /// case-sensitive matches, combined with AND
    pub fn matches(&self, tournament: &Tournament) -> bool {
        if let Some(province) = &self.province {
            if &tournament.province != province {
                return false;
            }
        }
        if let Some(date_key) = &self.date_key {
            if &tournament.date_key != date_key {
                return false;
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.province.is_none() && self.date_key.is_none()
    }

    /// Reset both criteria, like the "clear filters" control
    pub fn clear(&mut self) {
        self.province = None;
        self.date_key = None;
    }
}

/// One entry of the date dropdown: the exact-match key plus its display label
#[derive(Clone, Debug, PartialEq)]
pub struct DateOption {
    pub key: String,
    pub label: String,
}

/// The filtered, sorted collection of tournaments kept after the exclusion
/// rules.
///
/// This is an immutable snapshot: it is built once per feed load and replaced
/// wholly on the next load, never mutated incrementally
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    tournaments: Vec<Tournament>,
}

impl Schedule {
    /// Build the working set from freshly normalized records.
    ///
    /// Keeps only records that are not completed, have a date, and have a
    /// non-blank organizer, then sorts ascending by date. The sort is stable:
    /// records on the same instant keep their feed order
    pub fn new(mut records: Vec<Tournament>) -> Self {
        records.retain(|t| !t.is_completed && t.date.is_some() && !t.organizer.trim().is_empty());
        records.sort_by_key(|t| t.date);
        Self { tournaments: records }
    }

    pub fn tournaments(&self) -> &[Tournament] {
        &self.tournaments
    }

    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }

    /// The subset selected by `filter`, in working-set order.
    ///
    /// Pure: calling this any number of times with any filters never touches
    /// the snapshot itself
    pub fn project<'a>(&'a self, filter: &Filter) -> Vec<&'a Tournament> {
        self.tournaments.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Distinct, non-empty provinces across the whole set, sorted
    pub fn provinces(&self) -> Vec<String> {
        let provinces: BTreeSet<&str> = self.tournaments.iter()
            .map(|t| t.province.as_str())
            .filter(|p| !p.is_empty())
            .collect();
        provinces.into_iter().map(String::from).collect()
    }

    /// Distinct date keys with display labels, ascending by date.
    ///
    /// Duplicates collapse to one entry; the first-seen day name wins
    pub fn date_options(&self) -> Vec<DateOption> {
        let mut seen = HashSet::new();
        let mut options = Vec::new();
        // The working set is already sorted ascending, so first-seen order is date order
        for tournament in &self.tournaments {
            if tournament.date_key.is_empty() || !seen.insert(tournament.date_key.clone()) {
                continue;
            }
            let date_display = tournament.formatted_date();
            let label = if tournament.day.is_empty() {
                date_display
            } else {
                format!("{} - {}", date_display, tournament.day)
            };
            options.push(DateOption { key: tournament.date_key.clone(), label });
        }
        options
    }
}

/// The result-count line shown under the filter controls
pub fn summary(filtered_count: usize, total_count: usize) -> String {
    if filtered_count == 0 {
        return String::new();
    }
    let plural = if filtered_count != 1 { "s" } else { "" };
    if filtered_count == total_count {
        format!("Showing all {} tournament{}", filtered_count, plural)
    } else {
        format!("Showing {} of {} tournament{}", filtered_count, total_count, plural)
    }
}
