// File: ./src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod handlers;
pub mod network;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};
use tokio::sync::mpsc;

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

pub async fn run(cfg: Config) -> Result<()> {
    // Panic Hook
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        log::error!("PANIC: {}", info);
        default_hook(info);
    }));

    // --- 1. TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // --- 2. STATE INIT ---
    let mut app_state = AppState::default();

    let (action_tx, action_rx) = mpsc::channel(10);
    let (event_tx, mut event_rx) = mpsc::channel(10);

    // --- 3. NETWORK TASK ---
    tokio::spawn(network::run_network_actor(
        cfg.feed_sources(),
        cfg.date_order,
        action_rx,
        event_tx,
    ));

    // --- 4. UI LOOP ---
    let result = loop {
        if let Err(e) = terminal.draw(|f| draw(f, &app_state)) {
            break Err(e.into());
        }

        // A. Network Events
        if let Ok(event) = event_rx.try_recv() {
            handlers::handle_app_event(&mut app_state, event);
        }

        // B. Input Events
        match event::poll(Duration::from_millis(50)) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => break Err(e.into()),
        }
        match event::read() {
            Ok(Event::Key(key)) => {
                // Filter out KeyRelease events to prevent double input on Windows
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if let Some(action) = handlers::handle_key_event(key, &mut app_state) {
                    let quit = matches!(action, Action::Quit);
                    let _ = action_tx.send(action).await;
                    if quit {
                        break Ok(());
                    }
                }
            }
            Ok(_) => {}
            Err(e) => break Err(e.into()),
        }
    };

    // --- 5. CLEANUP ---
    restore_terminal();
    terminal.show_cursor()?;
    result
}
