// Month geometry: how many days, where the first one falls, what it is called.
use chrono::{Datelike, Locale, Months, NaiveDate};

/// Locale used for month names.
pub const DISPLAY_LOCALE: Locale = Locale::es_ES;

/// Column headers of the week grid, Sunday first.
pub const WEEKDAY_INITIALS: [&str; 7] = ["D", "L", "M", "X", "J", "V", "S"];

/// A month of a year. `month0` is zero-based (0 = January), like the view
/// state that drives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// `None` when `month0 > 11` or the year is outside chrono's range.
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, 1)?;
        Some(Self { first })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        match self.first.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.first).num_days() as u32,
            // December of the last representable year.
            None => 31,
        }
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn display_name(&self) -> String {
        self.first.format_localized("%B", DISPLAY_LOCALE).to_string()
    }

    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    /// Lays the month out in weeks of seven cells, Sunday first. Cells before
    /// the first and after the last day are `None`.
    pub fn weeks(&self) -> Vec<[Option<u32>; 7]> {
        let lead = self.first_weekday() as usize;
        let days = self.days_in_month() as usize;
        let cells = lead + days;
        let rows = cells.div_ceil(7);

        (0..rows)
            .map(|row| {
                let mut week = [None; 7];
                for (col, cell) in week.iter_mut().enumerate() {
                    let idx = row * 7 + col;
                    if idx >= lead && idx < cells {
                        *cell = Some((idx - lead + 1) as u32);
                    }
                }
                week
            })
            .collect()
    }
}

pub fn days_in_month(year: i32, month0: u32) -> Option<u32> {
    CalendarMonth::new(year, month0).map(|m| m.days_in_month())
}

pub fn first_weekday_of_month(year: i32, month0: u32) -> Option<u32> {
    CalendarMonth::new(year, month0).map(|m| m.first_weekday())
}

pub fn month_display_name(year: i32, month0: u32) -> Option<String> {
    CalendarMonth::new(year, month0).map(|m| m.display_name())
}

pub fn month_grid(year: i32, month0: u32) -> Option<Vec<[Option<u32>; 7]>> {
    CalendarMonth::new(year, month0).map(|m| m.weeks())
}
