pub mod keymap;

mod entries;
mod form;
mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Focus};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    // Main layout: info bar, bill form, entry list, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                 // Info bar
            Constraint::Length(form::FORM_HEIGHT), // Bill form
            Constraint::Min(0),                    // Entry list
            Constraint::Length(1),                 // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    form::render(frame, layout[1], state, &theme);
    entries::render(frame, layout[2], state, &theme);
    render_bottom_bar(frame, layout[3], state, &theme);
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled("billbook", Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled("Bills", Style::default().fg(theme.dim)),
        Span::raw(format!(
            ": {}/{}  ",
            state.register.len(),
            state.register.max_entries()
        )),
        Span::styled("TZ", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}", state.tz)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = vec![
        Span::styled("Tab", Style::default().fg(theme.accent)),
        Span::raw(" next  "),
        Span::styled("Shift+Tab", Style::default().fg(theme.accent)),
        Span::raw(" back"),
        Span::styled("  │  ", Style::default().fg(theme.border)),
    ];

    // Context-specific hints based on what has focus.
    match state.focus {
        Focus::Field(_) => {
            parts.extend([
                Span::styled("↑↓", Style::default().fg(theme.accent)),
                Span::raw(" account  "),
                Span::styled("Enter", Style::default().fg(theme.accent)),
                Span::raw(" add bill"),
            ]);
        }
        Focus::Entries => {
            parts.extend([
                Span::styled("↑↓", Style::default().fg(theme.accent)),
                Span::raw(" select  "),
                Span::styled("Del", Style::default().fg(theme.accent)),
                Span::raw(" remove"),
            ]);
        }
    }

    parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
    parts.push(Span::styled("Esc", Style::default().fg(theme.accent)));
    parts.push(Span::raw(" quit"));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
