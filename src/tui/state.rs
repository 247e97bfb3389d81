// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::model::ViewState;
use crate::store::EventStore;
use chrono::{Local, NaiveDate};

pub struct AppState {
    // Data
    pub store: EventStore,

    // UI State
    pub view: ViewState,
    pub today: NaiveDate,
    pub message: String,
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            store: EventStore::default(),
            view: ViewState::starting_at(today),
            today,
            message: "Cargando fiestas...".to_string(),
            loading: true,
        }
    }

    /// Applies a view transition.
    pub fn update_view(&mut self, f: impl FnOnce(ViewState) -> ViewState) {
        self.view = f(self.view);
    }
}
