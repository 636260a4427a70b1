//! A terminal front-end that pretty-prints tournaments

use crate::html::NO_NAME_PLACEHOLDER;
use crate::schedule::DateOption;
use crate::traits::Frontend;
use crate::Tournament;

/// A [`Frontend`] that renders to stdout
#[derive(Debug, Default)]
pub struct ConsoleFrontend;

impl ConsoleFrontend {
    pub fn new() -> Self {
        Self
    }
}

impl Frontend for ConsoleFrontend {
    fn set_loading(&mut self, loading: bool) {
        if loading {
            println!("Loading tournaments...");
        }
    }

    fn set_error(&mut self, message: &str) {
        eprintln!("⚠ {}", message);
    }

    fn render_options(&mut self, provinces: &[String], dates: &[DateOption]) {
        println!("Provinces:");
        println!("    0. All Provinces");
        for (index, province) in provinces.iter().enumerate() {
            println!("    {}. {}", index + 1, province);
        }

        println!("Dates:");
        println!("    0. All Dates");
        for (index, date) in dates.iter().enumerate() {
            println!("    {}. {}", index + 1, date.label);
        }
    }

    fn render(&mut self, tournaments: &[&Tournament]) {
        if tournaments.is_empty() {
            println!("No tournaments found.");
            return;
        }
        for tournament in tournaments {
            print_tournament(tournament);
        }
    }

    fn render_result_count(&mut self, summary: &str) {
        if !summary.is_empty() {
            println!("{}", summary);
        }
    }
}

fn print_tournament(tournament: &Tournament) {
    let name = match tournament.name.trim() {
        "" => NO_NAME_PLACEHOLDER,
        trimmed => trimmed,
    };
    println!("* {}", name);
    println!("    {} ({})\t{}", tournament.formatted_date(), tournament.day, tournament.time);
    println!("    Organizer: {}", tournament.organizer);
    println!("    Location: {}", tournament.location);
    if !tournament.remarks.is_empty() {
        println!("    Remarks: {}", tournament.remarks);
    }
    if !tournament.link.is_empty() {
        println!("    {}", tournament.link);
    }
}
