// File: src/tui/view.rs
use crate::cli::EMPTY_DAY_MESSAGE;
use crate::model::calendar::WEEKDAY_INITIALS;
use crate::model::matcher::icon_preview;
use crate::model::{Celebration, CelebrationKind};
use crate::tui::state::AppState;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};
use unicode_width::UnicodeWidthStr;

const TITLE: &str = "🎉 En Esta Casa Se Celebra 🎉";
const MORE_MARKER: &str = "➕";
const CELL_ICONS: usize = 2;

/// Joins a day's preview icons, dropping trailing ones that would not fit in
/// `width` terminal columns. Emoji are usually two columns wide.
pub fn fit_icons(icons: &[&str], more: bool, width: usize) -> String {
    let mut out = String::new();
    let pieces = icons
        .iter()
        .copied()
        .chain(more.then_some(MORE_MARKER));
    for piece in pieces {
        if out.width() + piece.width() > width {
            break;
        }
        out.push_str(piece);
    }
    out
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn kind_badge(kind: CelebrationKind) -> Span<'static> {
    let color = match kind {
        CelebrationKind::Annual => Color::Blue,
        CelebrationKind::Occasional => Color::Magenta,
    };
    Span::styled(
        format!(" {} ", kind.to_string().to_uppercase()),
        Style::default().fg(Color::White).bg(color),
    )
}

fn event_lines<'a>(events: &[Celebration<'a>]) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for event in events {
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", event.icon().unwrap_or("·"))),
            Span::styled(
                event.title(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            kind_badge(event.kind()),
        ]));
        if !event.description().is_empty() {
            lines.push(Line::from(Span::styled(
                format!("   {}", event.description()),
                Style::default().fg(Color::Gray),
            )));
        }
    }
    lines
}

pub fn draw(f: &mut Frame, state: &AppState) {
    let Some(month) = state.view.month() else {
        f.render_widget(Paragraph::new("Fecha fuera de rango."), f.area());
        return;
    };
    let month_name = month.display_name();

    // --- 1. Details text ---
    let selected = state.store.selected_events(&state.view);
    let (details_title, details_lines) = match state.view.selected_day {
        Some(day) => {
            let lines = if selected.is_empty() {
                vec![Line::from(Span::styled(
                    EMPTY_DAY_MESSAGE,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ))]
            } else {
                event_lines(&selected)
            };
            (format!(" Eventos del {} de {} ", day, month_name), lines)
        }
        None => (
            " Selecciona un día ".to_string(),
            vec![Line::from("Flechas para moverte, t para ir a hoy.")],
        ),
    };
    let details_height = (details_lines.len() as u16 + 2)
        .min(f.area().height / 3)
        .max(3);

    // --- 2. Layout ---
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(details_height),
            Constraint::Length(1),
        ])
        .split(f.area());

    // --- Header ---
    let header = Paragraph::new(Line::from(vec![
        Span::raw("◀ "),
        Span::styled(
            format!("{} {}", month_name, month.year()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ▶"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(TITLE));
    f.render_widget(header, chunks[0]);

    // --- Grid ---
    let col_width = (chunks[1].width.saturating_sub(2) / 7).max(3);
    let widths = [Constraint::Length(col_width); 7];
    let weekday_row = Row::new(WEEKDAY_INITIALS.map(|d| {
        Cell::from(d).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    }));

    let rows = month.weeks().into_iter().map(|week| {
        let cells = week.map(|cell| {
            let Some(day) = cell else {
                return Cell::from("");
            };
            let events = state.store.events_in_view(&state.view, day);
            let (icons, more) = icon_preview(&events, CELL_ICONS);

            let mut style = Style::default();
            if events.is_empty() {
                style = style.fg(Color::DarkGray);
            }
            if state.view.is_today(day, state.today) {
                style = style.bg(Color::Indexed(105)).fg(Color::White);
            }
            if state.view.selected_day == Some(day) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            Cell::from(vec![
                Line::from(format!("{:>2}", day)),
                Line::from(fit_icons(&icons, more, col_width as usize)),
            ])
            .style(style)
        });
        Row::new(cells).height(2)
    });

    let grid = Table::new(rows, widths)
        .header(weekday_row)
        .column_spacing(0)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(grid, chunks[1]);

    // --- Details ---
    let details = Paragraph::new(details_lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(details_title));
    f.render_widget(details, chunks[2]);

    // --- Footer ---
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            state.message.as_str(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  ←→↑↓ día  PgUp/PgDn mes  t hoy  i info  r recargar  q salir"),
    ]));
    f.render_widget(footer, chunks[3]);

    // --- Overlays ---
    if state.loading {
        let area = centered_rect(40, 3, f.area());
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(Span::styled(
                "Cargando fiestas...",
                Style::default()
                    .fg(Color::Indexed(63))
                    .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            ))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }

    if state.view.info_open {
        let text = vec![
            Line::from(Span::styled(
                "En Esta Casa Se Celebra",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("La vida es mejor cuando se celebra."),
            Line::from("Si no hay un motivo, lo inventamos."),
            Line::from(""),
            Line::from(format!(
                "{} fijos · {} ocasionales",
                state.store.fixed.len(),
                state.store.occasional.len()
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Esc para cerrar",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let area = centered_rect(60, text.len() as u16 + 2, f.area());
        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" 🏠 ")),
            area,
        );
    }
}
