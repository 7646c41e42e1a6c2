//! Overlay rendering (login modal, notification toast)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{LoginField, UiState};
use super::utils::{display_text, severity_color};

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.width.saturating_sub(width) / 2,
        y: area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

pub fn render_login(frame: &mut Frame, ui_state: &UiState) {
    let popup_area = centered(frame.area(), 48, 9);
    frame.render_widget(Clear, popup_area);

    let form = &ui_state.login;
    let field_style = |field: LoginField| {
        if form.focus == field {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };
    let masked: String = "•".repeat(form.password.chars().count());

    let button = if form.submitting {
        Span::styled("[ Signing in… ]", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled("[ Sign in ]", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Username: ", field_style(LoginField::Username)),
            Span::raw(display_text(&form.username, 30)),
        ]),
        Line::from(vec![
            Span::styled("Password: ", field_style(LoginField::Password)),
            Span::raw(masked),
        ]),
        Line::from(""),
        Line::from(button),
    ];
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            display_text(error, 44),
            Style::default().fg(Color::Red),
        )));
    }

    let login = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Sign in (Tab switch field, Enter submit) ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(login, popup_area);
}

pub fn render_toast(frame: &mut Frame, ui_state: &UiState) {
    let Some(toast) = &ui_state.toast else {
        return;
    };
    let area = frame.area();
    let color = severity_color(toast.severity);

    let width = 52.min(area.width.saturating_sub(2));
    let inner_width = width.saturating_sub(2).max(1) as usize;
    let message = display_text(&toast.message, 200);
    let line_count = message.chars().count().div_ceil(inner_width).max(1) as u16;
    let height = (line_count + 2).min(area.height.saturating_sub(1));

    let toast_area = Rect {
        x: area.width.saturating_sub(width + 1),
        y: area.height.saturating_sub(height + 1),
        width,
        height,
    };
    frame.render_widget(Clear, toast_area);

    let widget = Paragraph::new(message)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        );
    frame.render_widget(widget, toast_area);
}
