use crate::theme::{focused_border, unfocused_border};
use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};

/// Bordered box whose border colour tracks keyboard focus.
pub struct PanelConfig<'a> {
    pub title: &'a str,
    pub is_focused: bool,
}

impl<'a> PanelConfig<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            is_focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn border_style(&self) -> Style {
        if self.is_focused {
            focused_border()
        } else {
            unfocused_border()
        }
    }

    pub fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(self.title)
    }
}
