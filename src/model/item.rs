// File: ./src/model/item.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A celebration that comes back every year on the same day and month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedEvent {
    pub day: i64,
    /// `None` when the spreadsheet cell was not numeric. Such a record is kept
    /// but never lands on any calendar day.
    pub month: Option<i64>,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
}

/// A celebration that happens once, on an exact date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccasionalEvent {
    pub day: i64,
    pub month: Option<i64>,
    pub year: Option<i64>,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
}

impl FixedEvent {
    /// `month` is 1-based here, as written in the spreadsheet.
    pub fn falls_on(&self, day: i64, month: i64) -> bool {
        self.day == day && self.month == Some(month)
    }
}

impl OccasionalEvent {
    pub fn falls_on(&self, day: i64, month: i64, year: i64) -> bool {
        self.day == day && self.month == Some(month) && self.year == Some(year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CelebrationKind {
    Annual,
    Occasional,
}

impl fmt::Display for CelebrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CelebrationKind::Annual => write!(f, "Anual"),
            CelebrationKind::Occasional => write!(f, "Ocasional"),
        }
    }
}

/// Borrowed view over either kind of event, as returned by the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Celebration<'a> {
    Fixed(&'a FixedEvent),
    Occasional(&'a OccasionalEvent),
}

impl<'a> Celebration<'a> {
    pub fn kind(&self) -> CelebrationKind {
        match self {
            Celebration::Fixed(_) => CelebrationKind::Annual,
            Celebration::Occasional(_) => CelebrationKind::Occasional,
        }
    }

    pub fn title(&self) -> &'a str {
        match self {
            Celebration::Fixed(e) => &e.title,
            Celebration::Occasional(e) => &e.title,
        }
    }

    pub fn description(&self) -> &'a str {
        match self {
            Celebration::Fixed(e) => &e.description,
            Celebration::Occasional(e) => &e.description,
        }
    }

    pub fn icon(&self) -> Option<&'a str> {
        match self {
            Celebration::Fixed(e) => e.icon.as_deref(),
            Celebration::Occasional(e) => e.icon.as_deref(),
        }
    }
}
