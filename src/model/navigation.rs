// Month navigation and day selection as plain values.
use crate::model::calendar::CalendarMonth;
use chrono::{Datelike, Local, NaiveDate};

/// What the user is looking at. Transitions consume the state and return
/// the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Zero-based, 0..=11.
    pub selected_month: u32,
    pub selected_year: i32,
    pub selected_day: Option<u32>,
    pub info_open: bool,
}

impl ViewState {
    /// Month of `today`, nothing selected.
    pub fn starting_at(today: NaiveDate) -> Self {
        Self {
            selected_month: today.month0(),
            selected_year: today.year(),
            selected_day: None,
            info_open: false,
        }
    }

    pub fn current() -> Self {
        Self::starting_at(Local::now().date_naive())
    }

    /// Out-of-range month indices are folded into the year.
    pub fn at(selected_month: u32, selected_year: i32) -> Self {
        Self {
            selected_month: selected_month % 12,
            selected_year: selected_year + (selected_month / 12) as i32,
            selected_day: None,
            info_open: false,
        }
    }

    pub fn month(&self) -> Option<CalendarMonth> {
        CalendarMonth::new(self.selected_year, self.selected_month)
    }

    pub fn prev_month(self) -> Self {
        let (month, year) = if self.selected_month == 0 {
            (11, self.selected_year - 1)
        } else {
            (self.selected_month - 1, self.selected_year)
        };
        Self {
            selected_month: month,
            selected_year: year,
            selected_day: None,
            ..self
        }
    }

    pub fn next_month(self) -> Self {
        let (month, year) = if self.selected_month >= 11 {
            (0, self.selected_year + 1)
        } else {
            (self.selected_month + 1, self.selected_year)
        };
        Self {
            selected_month: month,
            selected_year: year,
            selected_day: None,
            ..self
        }
    }

    /// Selects `day` if the viewed month has it; otherwise the state is
    /// returned unchanged.
    pub fn select_day(self, day: u32) -> Self {
        let in_range = self
            .month()
            .is_some_and(|m| (1..=m.days_in_month()).contains(&day));
        if !in_range {
            log::debug!(
                "Ignoring selection of day {} in {}/{}",
                day,
                self.selected_month + 1,
                self.selected_year
            );
            return self;
        }
        Self {
            selected_day: Some(day),
            ..self
        }
    }

    pub fn clear_selection(self) -> Self {
        Self {
            selected_day: None,
            ..self
        }
    }

    /// Moves the selection by `delta` days, crossing into neighbouring months
    /// when needed. Starts from day 1 when nothing is selected.
    pub fn shift_selection(self, delta: i64) -> Self {
        let Some(month) = self.month() else {
            return self;
        };
        let Some(day) = self.selected_day else {
            return self.select_day(1);
        };
        let Some(target) = month
            .date_of(day)
            .and_then(|d| d.checked_add_signed(chrono::Duration::days(delta)))
        else {
            return self;
        };
        Self {
            selected_month: target.month0(),
            selected_year: target.year(),
            selected_day: Some(target.day()),
            ..self
        }
    }

    /// Jumps to `today` and selects it.
    pub fn go_to(self, today: NaiveDate) -> Self {
        Self {
            selected_month: today.month0(),
            selected_year: today.year(),
            selected_day: Some(today.day()),
            ..self
        }
    }

    pub fn toggle_info(self) -> Self {
        Self {
            info_open: !self.info_open,
            ..self
        }
    }

    pub fn is_today(&self, day: u32, today: NaiveDate) -> bool {
        day == today.day()
            && self.selected_month == today.month0()
            && self.selected_year == today.year()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::current()
    }
}
