//! View module - UI rendering
//!
//! - `utils`: Shared helpers (truncation, severity colors)
//! - `layout`: Top bar and status line
//! - `results`: Result cards and empty states
//! - `overlays`: Login modal and notification toast
//! - `markup`: HTML rendering of result cards for web embedding

mod utils;
mod layout;
mod results;
mod overlays;
pub mod markup;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::UiState;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, ui_state: &UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search input + media type
                Constraint::Min(0),    // Results
                Constraint::Length(1), // Status line
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], ui_state);
        results::render_results(frame, chunks[1], ui_state);
        layout::render_status_line(frame, chunks[2], ui_state);

        if ui_state.login_visible {
            overlays::render_login(frame, ui_state);
        }

        if ui_state.toast.is_some() {
            overlays::render_toast(frame, ui_state);
        }
    }
}
