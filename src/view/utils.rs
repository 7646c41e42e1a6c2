//! Utility functions for rendering UI components

use ratatui::style::Color;

use crate::model::Severity;
use crate::sanitize::sanitize_terminal;

/// Sanitize untrusted text and fit it into `max_width` columns.
pub fn display_text(s: &str, max_width: usize) -> String {
    truncate_string(&sanitize_terminal(s), max_width)
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Warning must stay visually apart from error.
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    }
}
