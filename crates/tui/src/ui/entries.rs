use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    app::{AppState, Focus},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.focus == Focus::Entries;
    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border)
    };
    let block = Block::default()
        .title("Bills")
        .borders(Borders::ALL)
        .border_style(border_style);

    if state.register.is_empty() {
        let content = Paragraph::new(Line::from("There are not bills yet!"))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let items = state
        .register
        .entries()
        .iter()
        .map(|entry| {
            let date = entry.date.with_timezone(&state.tz).format("%B %-d, %Y");
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled("Amount", Style::default().fg(theme.dim)),
                    Span::raw(format!(": {}", entry.amount)),
                ]),
                Line::from(vec![
                    Span::styled("From", Style::default().fg(theme.dim)),
                    Span::raw(format!(": {}", entry.from_account)),
                ]),
                Line::from(vec![
                    Span::styled("Date", Style::default().fg(theme.dim)),
                    Span::raw(format!(": {date}")),
                ]),
                Line::from(vec![
                    Span::styled("Note", Style::default().fg(theme.dim)),
                    Span::raw(format!(": {}", entry.note)),
                ]),
                Line::from(""),
            ])
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}
