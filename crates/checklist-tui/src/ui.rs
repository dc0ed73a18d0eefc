use crate::app::{App, Focus};
use crate::components::*;
use crate::theme::*;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const ADD_LABEL: &str = "[ Add ]";

pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_entry(app, frame, chunks[1]);
    render_tasks(app, frame, chunks[2]);
    render_footer(app, frame, chunks[3]);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Span::styled(app.header_title(), header_text()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(unfocused_border()));
    frame.render_widget(header, area);
}

fn render_entry(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(ADD_LABEL.len() as u16 + 2)])
        .split(area);

    let panel = PanelConfig::new("New task").focused(app.focus == Focus::Input);
    let field_width = chunks[0].width.saturating_sub(2);
    let before_cursor = &app.input.as_str()[..app.input.cursor_pos()];
    let cursor_width = Span::raw(before_cursor).width() as u16;
    let offset = input_scroll(cursor_width, field_width);

    let input = Paragraph::new(app.input.as_str())
        .style(normal_text())
        .scroll((0, offset))
        .block(panel.block());
    frame.render_widget(input, chunks[0]);

    let button = Paragraph::new(Line::from(Span::styled(ADD_LABEL, add_button())))
        .alignment(Alignment::Center);
    let button_area = Rect {
        y: chunks[1].y + 1,
        height: 1,
        ..chunks[1]
    };
    frame.render_widget(button, button_area);

    if app.focus == Focus::Input {
        let cursor_x = chunks[0].x + 1 + cursor_width - offset;
        frame.set_cursor_position((cursor_x, chunks[0].y + 1));
    }
}

/// Columns to scroll the entry field so the cursor stays inside it.
fn input_scroll(cursor_width: u16, field_width: u16) -> u16 {
    cursor_width.saturating_sub(field_width.saturating_sub(1))
}

struct ListLines {
    lines: Vec<Line<'static>>,
    /// Line span of the selected row, including its editor if expanded.
    selected: Option<(usize, usize)>,
    /// Line and column of the editor cursor.
    cursor: Option<(usize, usize)>,
}

fn build_list_lines(app: &App, width: u16) -> ListLines {
    let mut lines = Vec::new();
    let mut selected = None;
    let mut cursor = None;

    for (idx, (id, task)) in app.tasks.iter().enumerate() {
        let start = lines.len();
        let editor = app.editor.as_ref().filter(|editor| editor.task_id == id);

        lines.push(render_task_row(TaskRowConfig {
            task,
            is_selected: app.selection.is_selected(idx),
            is_focused: app.focus == Focus::Tasks,
            is_expanded: editor.is_some(),
            width,
        }));

        if let Some(editor) = editor {
            let top = lines.len();
            let view = render_description(&editor.buffer, width);
            lines.extend(view.lines);
            if app.focus == Focus::Description {
                let (row, column) = view.cursor;
                cursor = Some((top + row, column));
            }
        }

        if app.selection.is_selected(idx) {
            selected = Some((start, lines.len()));
        }
    }

    ListLines {
        lines,
        selected,
        cursor,
    }
}

/// Smallest scroll change that brings `start..end` into a viewport of
/// `height` lines, favouring the top of the range when it does not fit.
fn scroll_to_show(scroll: usize, height: usize, start: usize, end: usize) -> usize {
    if start < scroll || height == 0 {
        start
    } else if end > scroll + height {
        end.saturating_sub(height).min(start)
    } else {
        scroll
    }
}

fn render_tasks(app: &mut App, frame: &mut Frame, area: Rect) {
    let title = format!("Tasks ({})", app.tasks.len());
    let panel = PanelConfig::new(&title).focused(matches!(app.focus, Focus::Tasks | Focus::Description));
    let inner_width = area.width.saturating_sub(2);
    let viewport = area.height.saturating_sub(2) as usize;

    if app.tasks.is_empty() {
        app.scroll = 0;
        let empty = Paragraph::new(Span::styled(
            "No tasks yet. Type a title above and press Enter.",
            label_text(),
        ))
        .block(panel.block());
        frame.render_widget(empty, area);
        return;
    }

    let ListLines {
        lines,
        selected,
        cursor,
    } = build_list_lines(app, inner_width);

    if let Some((line, _)) = cursor {
        app.scroll = scroll_to_show(app.scroll, viewport, line, line + 1);
    } else if let Some((start, end)) = selected {
        app.scroll = scroll_to_show(app.scroll, viewport, start, end);
    }
    app.scroll = app.scroll.min(lines.len().saturating_sub(viewport));

    if let Some((line, column)) = cursor {
        if line >= app.scroll && line < app.scroll + viewport {
            let x = area.x + 1 + column.min(inner_width.saturating_sub(1) as usize) as u16;
            let y = area.y + 1 + (line - app.scroll) as u16;
            frame.set_cursor_position((x, y));
        }
    }

    let list = Paragraph::new(lines)
        .scroll((app.scroll as u16, 0))
        .block(panel.block());
    frame.render_widget(list, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = match app.focus {
        Focus::Input => "ENTER: add | TAB: next | CTRL+C: quit",
        Focus::Tasks => {
            "j/k: move | SPACE: done | ENTER: description | d: delete | i: new task | TAB: next | q: quit"
        }
        Focus::Description => "ESC: save & close | TAB: next | CTRL+C: quit",
    };
    let help = Paragraph::new(Span::styled(help_text, label_text()))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
