// In-memory snapshot of the loaded celebrations.
use crate::client::RawFeeds;
use crate::model::matcher::events_for_day;
use crate::model::parser::{DateOrder, parse_fixed_events, parse_occasional_events};
use crate::model::{Celebration, FixedEvent, OccasionalEvent, ViewState};
use serde::Serialize;

/// Both event collections. A store is never edited in place: a reload builds
/// a new one and replaces the old.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventStore {
    pub fixed: Vec<FixedEvent>,
    pub occasional: Vec<OccasionalEvent>,
}

impl EventStore {
    pub fn new(fixed: Vec<FixedEvent>, occasional: Vec<OccasionalEvent>) -> Self {
        Self { fixed, occasional }
    }

    pub fn from_feeds(feeds: &RawFeeds, order: DateOrder) -> Self {
        let store = Self::new(
            parse_fixed_events(&feeds.fixed),
            parse_occasional_events(&feeds.occasional, order),
        );
        log::info!(
            "Loaded {} fixed and {} occasional events",
            store.fixed.len(),
            store.occasional.len()
        );
        store
    }

    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty() && self.occasional.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fixed.len() + self.occasional.len()
    }

    pub fn events_on(&self, day: u32, month0: u32, year: i32) -> Vec<Celebration<'_>> {
        events_for_day(day as i32, month0, year, &self.fixed, &self.occasional)
    }

    /// Events of `day` in the month the view is showing.
    pub fn events_in_view(&self, view: &ViewState, day: u32) -> Vec<Celebration<'_>> {
        self.events_on(day, view.selected_month, view.selected_year)
    }

    /// Events of the selected day, empty when no day is selected.
    pub fn selected_events(&self, view: &ViewState) -> Vec<Celebration<'_>> {
        view.selected_day
            .map(|day| self.events_in_view(view, day))
            .unwrap_or_default()
    }
}
