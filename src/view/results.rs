//! Result list rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

use crate::model::{CardKey, SearchState, UiState};
use super::utils::display_text;

pub fn render_results(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .padding(Padding::horizontal(1));

    if ui_state.search.is_pending() {
        let pending = Paragraph::new("Searching...")
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        frame.render_widget(pending, area);
        return;
    }

    let SearchState::Results { generation, cards } = &ui_state.search else {
        let message = ui_state.search.empty_message().unwrap_or_default();
        let empty = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let width = area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let key = CardKey {
                generation: *generation,
                index,
            };
            let control = ui_state.submit_control(key);
            let is_selected = index == ui_state.selected;

            let heading_style = if is_selected {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };
            let control_style = if control.enabled {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
            };
            let label = format!("[{}]", control.label);
            let heading_width = width.saturating_sub(label.chars().count() + 1);

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(display_text(&card.heading(), heading_width), heading_style),
                    Span::raw(" "),
                    Span::styled(label, control_style),
                ]),
                Line::from(Span::styled(
                    display_text(&card.overview, width),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block.title(format!(" Results ({}) ", cards.len())))
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(ui_state.selected));

    frame.render_stateful_widget(list, area, &mut list_state);
}
