// File: ./src/cli.rs
//! Command-line parsing and the plain-text renderings used by the
//! non-interactive commands.

use crate::client::FeedClient;
use crate::config::Config;
use crate::model::calendar::{CalendarMonth, WEEKDAY_INITIALS};
use crate::model::{Celebration, ViewState};
use crate::store::EventStore;
use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};
use std::fmt::Write;
use std::path::PathBuf;

pub const EMPTY_DAY_MESSAGE: &str = "No hay celebraciones para este día... ¡Inventa una!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tui,
    /// `None` means the current month.
    Month(Option<ViewState>),
    Day(NaiveDate),
    Export,
    Init,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub root: Option<PathBuf>,
    pub command: Command,
}

/// Parses arguments, excluding the binary name.
pub fn parse_args(args: &[String]) -> Result<Invocation> {
    let mut root = None;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => {
                return Ok(Invocation {
                    root,
                    command: Command::Help,
                });
            }
            "-r" | "--root" => {
                let path = iter.next().context("--root needs a path")?;
                root = Some(PathBuf::from(path));
            }
            _ => positional.push(arg.as_str()),
        }
    }

    let command = match positional.as_slice() {
        [] => Command::Tui,
        ["month"] => Command::Month(None),
        ["month", when] => Command::Month(Some(parse_month_year(when)?)),
        ["day", date] => Command::Day(parse_day(date)?),
        ["export"] => Command::Export,
        ["init"] => Command::Init,
        other => bail!("Unknown command: {}", other.join(" ")),
    };
    Ok(Invocation { root, command })
}

/// `MM/YYYY` into a view of that month.
pub fn parse_month_year(s: &str) -> Result<ViewState> {
    let (month, year) = s
        .split_once('/')
        .with_context(|| format!("Expected MM/YYYY, got '{}'", s))?;
    let month: u32 = month
        .trim()
        .parse()
        .with_context(|| format!("Invalid month in '{}'", s))?;
    let year: i32 = year
        .trim()
        .parse()
        .with_context(|| format!("Invalid year in '{}'", s))?;
    if !(1..=12).contains(&month) {
        bail!("Month must be between 1 and 12, got {}", month);
    }
    Ok(ViewState::at(month - 1, year))
}

/// `DD/MM/YYYY`, the same order the occasional feed uses by default.
pub fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y")
        .with_context(|| format!("Expected DD/MM/YYYY, got '{}'", s))
}

fn describe(out: &mut String, event: &Celebration<'_>) {
    let _ = writeln!(
        out,
        "  {} {} [{}]",
        event.icon().unwrap_or("·"),
        event.title(),
        event.kind()
    );
    if !event.description().is_empty() {
        let _ = writeln!(out, "      {}", event.description());
    }
}

/// Fetches both feeds once for a non-interactive command.
pub async fn load_store(cfg: &Config) -> Result<EventStore> {
    let feeds = match FeedClient::new().load_feeds(&cfg.feed_sources()).await {
        Ok(feeds) => feeds,
        Err(e) => {
            log::error!("Error loading feeds: {}", e);
            return Err(e).context("Error cargando datos");
        }
    };
    Ok(EventStore::from_feeds(&feeds, cfg.date_order))
}

/// The selected-day panel as text: a heading and one entry per event.
pub fn render_day(store: &EventStore, date: NaiveDate) -> String {
    let month = CalendarMonth::containing(date);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Eventos del {} de {} {}",
        date.day(),
        month.display_name(),
        date.year()
    );
    let events = store.events_on(date.day(), date.month0(), date.year());
    if events.is_empty() {
        let _ = writeln!(out, "  {}", EMPTY_DAY_MESSAGE);
    }
    for event in &events {
        describe(&mut out, event);
    }
    out
}

/// The month grid, `*` marking days with celebrations, then the list of
/// those days.
pub fn render_month(store: &EventStore, view: &ViewState, today: NaiveDate) -> Result<String> {
    let month = view.month().context("Month out of range")?;
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", month.display_name(), month.year());
    let _ = writeln!(out, "{}", WEEKDAY_INITIALS.map(|d| format!(" {:>2} ", d)).join(""));

    for week in month.weeks() {
        for cell in week {
            match cell {
                Some(day) => {
                    let has_events = !store.events_in_view(view, day).is_empty();
                    let left = if view.is_today(day, today) { '[' } else { ' ' };
                    let right = if view.is_today(day, today) { ']' } else { ' ' };
                    let mark = if has_events { '*' } else { ' ' };
                    let _ = write!(out, "{}{:>2}{}{}", left, day, mark, right);
                }
                None => out.push_str("    "),
            }
        }
        out.push('\n');
    }

    for day in 1..=month.days_in_month() {
        let events = store.events_in_view(view, day);
        if events.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{} de {}", day, month.display_name());
        for event in &events {
            describe(&mut out, event);
        }
    }
    Ok(out)
}

pub fn export_json(store: &EventStore) -> Result<String> {
    Ok(serde_json::to_string_pretty(store)?)
}

pub fn print_help(binary_name: &str) {
    println!(
        "Celebra v{} - En esta casa se celebra: a calendar of family celebrations",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]                 Start interactive TUI", binary_name);
    println!("    {} month [MM/YYYY]                 Print a month with its celebrations", binary_name);
    println!("    {} day DD/MM/YYYY                  Print the celebrations of a day", binary_name);
    println!("    {} export                          Print all loaded events as JSON", binary_name);
    println!("    {} init                            Write a default config file", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and logs.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("KEYBINDINGS (TUI):");
    println!("    Left/Right  Previous/next day       Up/Down   Previous/next week");
    println!("    PgUp/PgDn   Previous/next month     [ / ]     Previous/next month");
    println!("    t           Today                   Esc       Clear selection");
    println!("    i           About                   r         Reload feeds");
    println!("    q           Quit");
    println!();
    println!("FEEDS:");
    println!("    Fixed events:      day, month, title, description, icon (TSV, header row)");
    println!("    Occasional events: timestamp, title, description, DD/MM/YYYY, icon");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FixedEvent, OccasionalEvent};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn store() -> EventStore {
        EventStore::new(
            vec![FixedEvent {
                day: 25,
                month: Some(12),
                title: "Navidad".to_string(),
                description: "Cena familiar".to_string(),
                icon: Some("🎄".to_string()),
            }],
            vec![OccasionalEvent {
                day: 27,
                month: Some(2),
                year: Some(2026),
                title: "Cumple de Sofi".to_string(),
                description: String::new(),
                icon: None,
            }],
        )
    }

    #[test]
    fn parses_commands_and_root() {
        let inv = parse_args(&args(&["--root", "/tmp/x", "day", "25/12/2025"])).unwrap();
        assert_eq!(inv.root, Some(PathBuf::from("/tmp/x")));
        assert_eq!(
            inv.command,
            Command::Day(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap())
        );

        assert_eq!(parse_args(&[]).unwrap().command, Command::Tui);
        assert_eq!(parse_args(&args(&["export"])).unwrap().command, Command::Export);
        assert_eq!(parse_args(&args(&["-h"])).unwrap().command, Command::Help);

        let month = parse_args(&args(&["month", "02/2026"])).unwrap();
        assert_eq!(month.command, Command::Month(Some(ViewState::at(1, 2026))));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(&args(&["--root"])).is_err());
        assert!(parse_args(&args(&["frobnicate"])).is_err());
        assert!(parse_args(&args(&["month", "13/2026"])).is_err());
        assert!(parse_args(&args(&["day", "2026-02-27"])).is_err());
    }

    #[test]
    fn day_rendering_lists_events_or_empty_message() {
        let store = store();
        let christmas = render_day(&store, NaiveDate::from_ymd_opt(2030, 12, 25).unwrap());
        assert!(christmas.starts_with("Eventos del 25 de diciembre 2030"));
        assert!(christmas.contains("🎄 Navidad [Anual]"));
        assert!(christmas.contains("Cena familiar"));

        let quiet = render_day(&store, NaiveDate::from_ymd_opt(2030, 12, 24).unwrap());
        assert!(quiet.contains(EMPTY_DAY_MESSAGE));
    }

    #[test]
    fn month_rendering_marks_event_days() {
        let store = store();
        let today = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
        let text = render_month(&store, &ViewState::at(1, 2026), today).unwrap();
        assert!(text.starts_with("febrero 2026"));
        assert!(text.contains("27*"));
        assert!(text.contains("[ 3 ]"));
        assert!(text.contains("Cumple de Sofi [Ocasional]"));
        assert!(!text.contains("Navidad"));
    }

    #[test]
    fn export_contains_both_collections() {
        let json = export_json(&store()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["fixed"][0]["title"], "Navidad");
        assert_eq!(value["occasional"][0]["year"], 2026);
    }
}
