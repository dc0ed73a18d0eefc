use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Rgb(212, 163, 115);
pub const UNFOCUSED_BORDER: Color = Color::Rgb(224, 192, 151);
pub const SELECTED_BG: Color = Color::Rgb(93, 78, 66);

pub const HEADER_TEXT: Color = Color::Rgb(245, 222, 179);
pub const NORMAL_TEXT: Color = Color::White;
pub const DONE_TEXT: Color = Color::DarkGray;
pub const LABEL_TEXT: Color = Color::DarkGray;

pub const ADD_BUTTON: Color = Color::Rgb(255, 213, 128);
pub const DELETE_BUTTON: Color = Color::Rgb(239, 154, 154);
pub const EDITOR_BG: Color = Color::Rgb(60, 52, 44);
