//! Layout rendering (top bar, status line)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{MediaType, UiState};
use super::utils::display_text;

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(42), // Media type selector
        ])
        .split(area);

    let focused = ui_state.search_enabled && ui_state.search_focused;
    let search_style = if !ui_state.search_enabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let width = chunks[0].width.saturating_sub(4) as usize;
    let search_text = if !ui_state.search_enabled {
        "Sign in to search".to_string()
    } else if ui_state.query.is_empty() {
        "Type to search...".to_string()
    } else {
        display_text(&ui_state.query, width)
    };

    let search = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(if focused {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            }),
    );
    frame.render_widget(search, chunks[0]);

    let tabs: Vec<Span> = MediaType::ALL
        .iter()
        .flat_map(|media_type| {
            let style = if *media_type == ui_state.media_type {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            [Span::styled(format!(" {} ", media_type.label()), style), Span::raw(" ")]
        })
        .collect();

    let selector = Paragraph::new(Line::from(tabs))
        .block(Block::default().borders(Borders::ALL).title(" Type (Tab) "));
    frame.render_widget(selector, chunks[1]);
}

pub fn render_status_line(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let mut spans = Vec::new();
    if let Some(welcome) = &ui_state.welcome {
        spans.push(Span::styled(
            display_text(welcome, 40),
            Style::default().fg(Color::Green),
        ));
    }
    if let Some(users) = &ui_state.users_summary {
        spans.push(Span::raw("  ·  "));
        spans.push(Span::styled(users.clone(), Style::default().fg(Color::Cyan)));
    }
    spans.push(Span::styled(
        "  ↑↓ select · Enter request · Esc clear · Ctrl+Q quit",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
