// File: src/tui/handlers.rs
// Handles keyboard input and network events for the TUI.
use crate::tui::action::{Action, AppEvent};
use crate::tui::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_app_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Status(s) => state.message = s,
        AppEvent::Error(s) => {
            state.message = format!("Error: {} (r para reintentar)", s);
            state.loading = false;
        }
        AppEvent::FeedsLoaded(store) => {
            state.message = format!("{} celebraciones cargadas.", store.len());
            state.store = store;
            state.loading = false;
        }
    }
}

/// Applies a key to the state. Returns an action for the network actor when
/// the key asks for one.
pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // The about panel swallows everything but its own close keys.
    if state.view.info_open {
        match key.code {
            KeyCode::Esc | KeyCode::Char('i') | KeyCode::Char('q') => {
                state.update_view(|v| v.toggle_info())
            }
            _ => {}
        }
        return None;
    }

    match key.code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Char('r') if !state.loading => {
            state.loading = true;
            return Some(Action::Reload);
        }
        KeyCode::Char('i') => state.update_view(|v| v.toggle_info()),
        KeyCode::PageUp | KeyCode::Char('[') => state.update_view(|v| v.prev_month()),
        KeyCode::PageDown | KeyCode::Char(']') => state.update_view(|v| v.next_month()),
        KeyCode::Left | KeyCode::Char('h') => state.update_view(|v| v.shift_selection(-1)),
        KeyCode::Right | KeyCode::Char('l') => state.update_view(|v| v.shift_selection(1)),
        KeyCode::Up | KeyCode::Char('k') => state.update_view(|v| v.shift_selection(-7)),
        KeyCode::Down | KeyCode::Char('j') => state.update_view(|v| v.shift_selection(7)),
        KeyCode::Char('t') => {
            let today = state.today;
            state.update_view(|v| v.go_to(today));
        }
        KeyCode::Esc => state.update_view(|v| v.clear_selection()),
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FixedEvent;
    use crate::store::EventStore;
    use chrono::NaiveDate;

    fn press(state: &mut AppState, code: KeyCode) -> Option<Action> {
        handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), state)
    }

    fn state() -> AppState {
        AppState::new(NaiveDate::from_ymd_opt(2025, 12, 24).unwrap())
    }

    #[test]
    fn month_keys_navigate_and_clear_selection() {
        let mut state = state();
        press(&mut state, KeyCode::Right);
        assert_eq!(state.view.selected_day, Some(1));

        press(&mut state, KeyCode::PageDown);
        assert_eq!(state.view.selected_month, 0);
        assert_eq!(state.view.selected_year, 2026);
        assert_eq!(state.view.selected_day, None);

        press(&mut state, KeyCode::Char('['));
        press(&mut state, KeyCode::Char('['));
        assert_eq!((state.view.selected_month, state.view.selected_year), (10, 2025));
    }

    #[test]
    fn info_panel_captures_keys_until_closed() {
        let mut state = state();
        press(&mut state, KeyCode::Char('i'));
        assert!(state.view.info_open);

        assert!(press(&mut state, KeyCode::Char('r')).is_none());
        press(&mut state, KeyCode::PageDown);
        assert_eq!(state.view.selected_month, 11);

        press(&mut state, KeyCode::Esc);
        assert!(!state.view.info_open);
    }

    #[test]
    fn reload_and_quit_become_actions() {
        let mut state = state();
        state.loading = false;
        assert!(matches!(press(&mut state, KeyCode::Char('r')), Some(Action::Reload)));
        assert!(state.loading);
        assert!(matches!(press(&mut state, KeyCode::Char('q')), Some(Action::Quit)));
    }

    #[test]
    fn reload_is_ignored_while_a_load_is_in_flight() {
        let mut state = state();
        assert!(state.loading);
        for _ in 0..20 {
            assert!(press(&mut state, KeyCode::Char('r')).is_none());
        }

        handle_app_event(&mut state, AppEvent::Error("timeout".to_string()));
        assert!(matches!(press(&mut state, KeyCode::Char('r')), Some(Action::Reload)));
        assert!(press(&mut state, KeyCode::Char('r')).is_none());
    }

    #[test]
    fn today_key_selects_today() {
        let mut state = state();
        press(&mut state, KeyCode::PageUp);
        press(&mut state, KeyCode::Char('t'));
        assert_eq!(state.view.selected_month, 11);
        assert_eq!(state.view.selected_day, Some(24));
    }

    #[test]
    fn failed_load_stops_loading_and_keeps_old_events() {
        let mut state = state();
        let store = EventStore::new(
            vec![FixedEvent {
                day: 25,
                month: Some(12),
                title: "Navidad".to_string(),
                description: String::new(),
                icon: None,
            }],
            vec![],
        );
        handle_app_event(&mut state, AppEvent::FeedsLoaded(store));
        assert!(!state.loading);
        assert_eq!(state.store.len(), 1);

        state.loading = true;
        handle_app_event(&mut state, AppEvent::Error("boom".to_string()));
        assert!(!state.loading);
        assert!(state.message.contains("boom"));
        assert_eq!(state.store.len(), 1);
    }
}
