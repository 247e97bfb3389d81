// File: src/model/parser.rs
// Turns the published spreadsheet exports (tab separated) into event records.
use crate::model::{FixedEvent, OccasionalEvent};
use serde::{Deserialize, Serialize};

/// Part order of the date column in the occasional feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `DD/MM/YYYY`, what a Spanish-locale form writes.
    #[default]
    DayFirst,
    /// `MM/DD/YYYY`
    MonthFirst,
}

/// Parses the leading integer of a cell the way spreadsheet exports are read
/// leniently: leading whitespace is skipped, an optional sign is accepted and
/// the longest run of digits is taken. `"12abc"` is 12, `"abc"` is `None`.
/// Out-of-range runs saturate instead of failing, so the row is kept.
pub fn parse_leading_int(cell: &str) -> Option<i64> {
    let s = cell.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

fn clean_icon(cell: Option<&str>) -> Option<String> {
    cell.map(|c| c.trim().to_string())
}

/// Rows after the header line. `lines()` also drops the `\r` of CRLF exports.
fn data_rows(text: &str) -> impl Iterator<Item = &str> {
    text.lines().skip(1)
}

/// Parses the fixed-events export. Columns: day, month, title, description, icon.
///
/// A row is kept only when its day is numeric; the month is parsed but not
/// validated, so a row with a garbage month survives and simply never matches.
pub fn parse_fixed_events(text: &str) -> Vec<FixedEvent> {
    let mut dropped = 0usize;
    let events: Vec<FixedEvent> = data_rows(text)
        .filter_map(|row| {
            let mut cols = row.split('\t');
            let day = cols.next().and_then(parse_leading_int);
            let month = cols.next().and_then(parse_leading_int);
            let title = cols.next().unwrap_or_default().to_string();
            let description = cols.next().unwrap_or_default().to_string();
            let icon = clean_icon(cols.next());

            let Some(day) = day else {
                dropped += 1;
                return None;
            };
            Some(FixedEvent {
                day,
                month,
                title,
                description,
                icon,
            })
        })
        .collect();

    if dropped > 0 {
        log::debug!("Dropped {} malformed fixed-event rows", dropped);
    }
    events
}

/// Splits a `/`-separated date into (day, month, year) according to `order`.
pub fn parse_date_parts(date: &str, order: DateOrder) -> (Option<i64>, Option<i64>, Option<i64>) {
    let mut parts = date.split('/');
    let first = parts.next().and_then(parse_leading_int);
    let second = parts.next().and_then(parse_leading_int);
    let year = parts.next().and_then(parse_leading_int);
    match order {
        DateOrder::DayFirst => (first, second, year),
        DateOrder::MonthFirst => (second, first, year),
    }
}

/// Parses the occasional-events export (form responses).
/// Columns: submission timestamp (ignored), title, description, date, icon.
pub fn parse_occasional_events(text: &str, order: DateOrder) -> Vec<OccasionalEvent> {
    let mut dropped = 0usize;
    let events: Vec<OccasionalEvent> = data_rows(text)
        .filter_map(|row| {
            let cols: Vec<&str> = row.split('\t').collect();
            if cols.len() < 4 {
                dropped += 1;
                return None;
            }

            let (day, month, year) = parse_date_parts(cols[3], order);
            let Some(day) = day else {
                dropped += 1;
                return None;
            };
            if order == DateOrder::DayFirst && month.is_some_and(|m| m > 12) {
                log::warn!(
                    "Date '{}' has a month above 12, is the form exporting MM/DD/YYYY?",
                    cols[3]
                );
            }

            Some(OccasionalEvent {
                day,
                month,
                year,
                title: cols[1].to_string(),
                description: cols[2].to_string(),
                icon: clean_icon(cols.get(4).copied()),
            })
        })
        .collect();

    if dropped > 0 {
        log::debug!("Dropped {} malformed occasional-event rows", dropped);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_matches_lenient_cell_reading() {
        assert_eq!(parse_leading_int("25"), Some(25));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+4"), Some(4));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999"), Some(99_999_999_999));
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999999"), Some(-i64::MAX));
    }

    #[test]
    fn date_parts_follow_configured_order() {
        assert_eq!(
            parse_date_parts("27/02/2026", DateOrder::DayFirst),
            (Some(27), Some(2), Some(2026))
        );
        assert_eq!(
            parse_date_parts("02/27/2026", DateOrder::MonthFirst),
            (Some(27), Some(2), Some(2026))
        );
        assert_eq!(
            parse_date_parts("2026-02-27", DateOrder::DayFirst),
            (Some(2026), None, None)
        );
    }

    #[test]
    fn header_only_feed_is_empty() {
        assert!(parse_fixed_events("Dia\tMes\tTitulo\tDescripcion\tIcono").is_empty());
        assert!(parse_occasional_events("", DateOrder::DayFirst).is_empty());
    }
}
