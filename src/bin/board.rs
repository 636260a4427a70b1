//! Interactive console front-end.
//!
//! Fetches the feed once at startup, then re-projects and re-renders the
//! working set every time a filter command is entered. This is the terminal
//! analog of the dropdown controls: `province N`, `date N`, `clear`,
//! `export PATH`, `quit`.

use std::io::{self, BufRead, Write};

use tourney_board::console::ConsoleFrontend;
use tourney_board::html;
use tourney_board::schedule::{self, DateOption};
use tourney_board::traits::Frontend;
use tourney_board::{Client, Filter, Schedule};

/// The single user-facing message for any fetch or parse failure
const LOAD_ERROR_MESSAGE: &str = "Failed to load tournaments. Please try again.";

#[tokio::main]
async fn main() {
    env_logger::init();

    let mut ui = ConsoleFrontend::new();

    let client = match Client::for_default_feed() {
        Ok(client) => client,
        Err(err) => {
            log::error!("Invalid feed URL: {}", err);
            ui.set_error(LOAD_ERROR_MESSAGE);
            std::process::exit(1);
        }
    };

    ui.set_loading(true);
    let schedule = match client.load_schedule().await {
        Ok(schedule) => schedule,
        Err(err) => {
            log::error!("Error loading data: {}", err);
            ui.set_loading(false);
            ui.set_error(LOAD_ERROR_MESSAGE);
            std::process::exit(1);
        }
    };
    ui.set_loading(false);

    let provinces = schedule.provinces();
    let dates = schedule.date_options();
    ui.render_options(&provinces, &dates);

    let mut filter = Filter::default();
    show(&mut ui, &schedule, &filter);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        match parse_command(line.trim(), &provinces, &dates) {
            Command::Province(province) => {
                filter.province = province;
                show(&mut ui, &schedule, &filter);
            }
            Command::Date(date_key) => {
                filter.date_key = date_key;
                show(&mut ui, &schedule, &filter);
            }
            Command::Clear => {
                filter.clear();
                show(&mut ui, &schedule, &filter);
            }
            Command::Export(path) => export(&schedule, &filter, &path),
            Command::Quit => break,
            Command::Help => print_help(),
        }
    }
}

enum Command {
    Province(Option<String>),
    Date(Option<String>),
    Clear,
    Export(String),
    Quit,
    Help,
}

fn parse_command(line: &str, provinces: &[String], dates: &[DateOption]) -> Command {
    let mut words = line.splitn(2, ' ');
    let keyword = words.next().unwrap_or("");
    let argument = words.next().unwrap_or("").trim();

    match keyword {
        "province" => match pick(argument, provinces.len()) {
            Some(0) | None => Command::Province(None),
            Some(n) => Command::Province(Some(provinces[n - 1].clone())),
        },
        "date" => match pick(argument, dates.len()) {
            Some(0) | None => Command::Date(None),
            Some(n) => Command::Date(Some(dates[n - 1].key.clone())),
        },
        "clear" => Command::Clear,
        "export" if !argument.is_empty() => Command::Export(argument.to_string()),
        "quit" | "exit" => Command::Quit,
        _ => Command::Help,
    }
}

/// A choice index, validated against the option count (0 is the "All" sentinel)
fn pick(argument: &str, count: usize) -> Option<usize> {
    let n: usize = argument.parse().ok()?;
    if n > count {
        log::warn!("No such option: {}", n);
        return None;
    }
    Some(n)
}

fn show(ui: &mut ConsoleFrontend, schedule: &Schedule, filter: &Filter) {
    let filtered = schedule.project(filter);
    ui.render(&filtered);
    ui.render_result_count(&schedule::summary(filtered.len(), schedule.len()));
}

fn export(schedule: &Schedule, filter: &Filter, path: &str) {
    let filtered = schedule.project(filter);
    let page = html::render_page(&filtered, &schedule::summary(filtered.len(), schedule.len()));
    match std::fs::write(path, page) {
        Ok(()) => println!("Wrote {}", path),
        Err(err) => log::error!("Unable to write {}: {}", path, err),
    }
}

fn print_help() {
    println!("Commands:");
    println!("    province N    keep only the N-th province (0 for all)");
    println!("    date N        keep only the N-th date (0 for all)");
    println!("    clear         drop both filters");
    println!("    export PATH   write the current view as an HTML page");
    println!("    quit          leave");
}
