use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn header_text() -> Style {
    Style::default()
        .fg(HEADER_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

/// Finished tasks are dimmed and struck through.
pub fn done_text() -> Style {
    Style::default()
        .fg(DONE_TEXT)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn add_button() -> Style {
    Style::default()
        .fg(ratatui::style::Color::Black)
        .bg(ADD_BUTTON)
        .add_modifier(Modifier::BOLD)
}

pub fn delete_button() -> Style {
    Style::default()
        .fg(ratatui::style::Color::Black)
        .bg(DELETE_BUTTON)
}

pub fn editor_text() -> Style {
    Style::default().fg(NORMAL_TEXT).bg(EDITOR_BG)
}
