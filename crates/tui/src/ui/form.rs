use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use engine::Field;

use crate::{
    app::{AppState, Focus},
    ui::theme::Theme,
};

/// Outer height of the form card: four field rows, a spacer and the
/// submit row, plus margin and borders.
pub const FORM_HEIGHT: u16 = 10;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" new bill ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1), // From Account
            Constraint::Length(1), // Date
            Constraint::Length(1), // Note
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Submit control
        ])
        .margin(1)
        .split(inner);

    for (row, field) in rows.iter().zip(Field::ALL) {
        render_field(frame, *row, state, field, theme);
    }
    render_submit(frame, rows[5], state, theme);
}

fn render_field(frame: &mut Frame<'_>, area: Rect, state: &AppState, field: Field, theme: &Theme) {
    let draft = &state.form.draft;
    let focused = state.focus == Focus::Field(field);

    let value = match field {
        Field::Amount => draft.amount.as_str(),
        Field::FromAccount => draft.from_account.as_str(),
        Field::Date => draft.date.as_str(),
        Field::Note => draft.note.as_str(),
    };

    let placeholder = match field {
        Field::Amount => "$0.00",
        Field::FromAccount => "Select Account",
        Field::Date => "YYYY-MM-DD",
        Field::Note => "Enter a note",
    };

    // The account row is a selector; no text cursor there.
    let cursor = if focused && field != Field::FromAccount {
        "│"
    } else {
        ""
    };

    let label_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.dim)
    };

    let value_span = if value.is_empty() {
        Span::styled(
            format!("{placeholder}{cursor}"),
            Style::default().fg(theme.dim),
        )
    } else {
        let style = if focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text)
        };
        Span::styled(format!("{value}{cursor}"), style)
    };

    let mut spans = vec![
        Span::styled(format!("{:<13}", field.label()), label_style),
        value_span,
    ];

    if let Some(error) = state.form.error_for(field) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            error.to_string(),
            Style::default().fg(theme.error),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_submit(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let style = if state.can_submit() {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim)
    };

    let mut spans = vec![Span::styled("[ Add Bill ]", style)];

    if state.register.is_full() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("You can only add {} bills", state.register.max_entries()),
            Style::default().fg(theme.error),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
