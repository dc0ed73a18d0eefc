use crate::theme::*;
use checklist_domain::Task;
use ratatui::{
    style::Style,
    text::{Line, Span},
};

pub const DELETE_LABEL: &str = "[del]";

pub struct TaskRowConfig<'a> {
    pub task: &'a Task,
    pub is_selected: bool,
    pub is_focused: bool,
    pub is_expanded: bool,
    pub width: u16,
}

/// One list row: expand marker, checkbox, title, and a right-aligned delete
/// control.
pub fn render_task_row(config: TaskRowConfig) -> Line<'static> {
    let highlight = config.is_selected && config.is_focused;
    let row_style = |style: Style| {
        if highlight {
            style.bg(SELECTED_BG)
        } else {
            style
        }
    };

    let (checkbox, checkbox_style, title_style) = if config.task.done {
        ("[x] ", label_text(), done_text())
    } else {
        ("[ ] ", normal_text(), normal_text())
    };

    let marker = if config.is_expanded {
        "▾ "
    } else if config.task.has_description() {
        "▸ "
    } else {
        "  "
    };

    let mut spans = vec![
        Span::styled(marker, row_style(label_text())),
        Span::styled(checkbox, row_style(checkbox_style)),
        Span::styled(config.task.title.clone(), row_style(title_style)),
    ];

    let used: usize = spans.iter().map(Span::width).sum::<usize>() + DELETE_LABEL.len();
    let padding = (config.width as usize).saturating_sub(used + 1).max(1);
    spans.push(Span::styled(" ".repeat(padding), row_style(Style::default())));
    spans.push(Span::styled(DELETE_LABEL, delete_button()));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;

    fn title_span<'a>(line: &Line<'a>) -> Span<'a> {
        line.spans[2].clone()
    }

    #[test]
    fn test_open_task_is_not_struck_through() {
        let task = Task::new("Buy milk");
        let line = render_task_row(TaskRowConfig {
            task: &task,
            is_selected: false,
            is_focused: false,
            is_expanded: false,
            width: 40,
        });

        assert_eq!(line.spans[1].content, "[ ] ");
        let title = title_span(&line);
        assert_eq!(title.content, "Buy milk");
        assert!(!title.style.add_modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_done_task_is_struck_through() {
        let mut task = Task::new("Buy milk");
        task.done = true;
        let line = render_task_row(TaskRowConfig {
            task: &task,
            is_selected: false,
            is_focused: false,
            is_expanded: false,
            width: 40,
        });

        assert_eq!(line.spans[1].content, "[x] ");
        assert!(title_span(&line)
            .style
            .add_modifier
            .contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_row_fills_width_with_delete_at_end() {
        let task = Task::new("Buy milk");
        let line = render_task_row(TaskRowConfig {
            task: &task,
            is_selected: true,
            is_focused: true,
            is_expanded: false,
            width: 40,
        });

        assert_eq!(line.width(), 39);
        assert_eq!(line.spans.last().unwrap().content, DELETE_LABEL);
        assert_eq!(line.spans[2].style.bg, Some(SELECTED_BG));
    }

    #[test]
    fn test_marker_reflects_description_state() {
        let mut task = Task::new("Buy milk");
        let config = |task: &Task, expanded| {
            render_task_row(TaskRowConfig {
                task,
                is_selected: false,
                is_focused: false,
                is_expanded: expanded,
                width: 30,
            })
            .spans[0]
                .content
                .to_string()
        };

        assert_eq!(config(&task, false), "  ");
        task.description = "2% please".to_string();
        assert_eq!(config(&task, false), "▸ ");
        assert_eq!(config(&task, true), "▾ ");
    }
}
