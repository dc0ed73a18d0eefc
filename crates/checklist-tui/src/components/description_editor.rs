use crate::theme::editor_text;
use checklist_core::InputState;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Columns between the list border and the editor box.
pub const DESCRIPTION_INDENT: usize = 6;
pub const MIN_EDITOR_HEIGHT: usize = 3;

/// Editor text broken into rows that fit the box. The cursor is
/// (row, display column) within those rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedText {
    pub rows: Vec<String>,
    pub cursor: (usize, usize),
}

pub struct DescriptionView {
    pub lines: Vec<Line<'static>>,
    /// Cursor row within `lines` and column from the list's left edge.
    pub cursor: (usize, usize),
}

/// Width of the editor box inside a list of `width` columns.
pub fn box_width(width: u16) -> usize {
    (width as usize).saturating_sub(DESCRIPTION_INDENT + 1).max(1)
}

/// Splits each buffer line into rows of at most `width` display columns.
pub fn wrap_text(buffer: &InputState, width: usize) -> WrappedText {
    let width = width.max(1);
    let (cursor_line, cursor_col) = buffer.cursor_line_col();
    let mut rows = Vec::new();
    let mut cursor = (0, 0);

    for (line_idx, text) in buffer.as_str().split('\n').enumerate() {
        let mut row = String::new();
        let mut row_width = 0;
        let mut chars = 0;

        for c in text.chars() {
            let char_width = c.width().unwrap_or(0);
            if row_width + char_width > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            if line_idx == cursor_line && chars == cursor_col {
                cursor = (rows.len(), row_width);
            }
            row.push(c);
            row_width += char_width;
            chars += 1;
        }

        if line_idx == cursor_line && cursor_col >= chars {
            // A cursor after a full row sits at the start of the next one.
            if row_width >= width {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            cursor = (rows.len(), row_width);
        }
        rows.push(row);
    }

    WrappedText { rows, cursor }
}

/// Rows the editor occupies: one per wrapped row, never fewer than three.
pub fn editor_height(wrapped: &WrappedText) -> usize {
    wrapped.rows.len().max(MIN_EDITOR_HEIGHT)
}

pub fn render_description(buffer: &InputState, width: u16) -> DescriptionView {
    let box_width = box_width(width);
    let wrapped = wrap_text(buffer, box_width);

    let mut lines: Vec<Line<'static>> = wrapped
        .rows
        .iter()
        .map(|row| editor_line(row, box_width))
        .collect();
    while lines.len() < editor_height(&wrapped) {
        lines.push(editor_line("", box_width));
    }

    let (row, column) = wrapped.cursor;
    DescriptionView {
        lines,
        cursor: (row, DESCRIPTION_INDENT + column),
    }
}

fn editor_line(text: &str, box_width: usize) -> Line<'static> {
    let fill = box_width.saturating_sub(Span::raw(text).width());
    Line::from(vec![
        Span::raw(" ".repeat(DESCRIPTION_INDENT)),
        Span::styled(format!("{}{}", text, " ".repeat(fill)), editor_text()),
    ])
}
