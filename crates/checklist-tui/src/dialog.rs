use checklist_core::InputState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    Cancel,
    Confirm,
}

/// Applies an editing key to `input`.
///
/// In multiline mode Enter inserts a line break and Up/Down move between
/// lines, so the only way out is Esc. Ctrl and Alt chords never insert text.
pub fn handle_dialog_input(input: &mut InputState, key: KeyEvent, multiline: bool) -> DialogAction {
    match key.code {
        KeyCode::Esc => DialogAction::Cancel,
        KeyCode::Enter if multiline => {
            input.insert_newline();
            DialogAction::None
        }
        KeyCode::Enter => DialogAction::Confirm,
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            DialogAction::None
        }
        KeyCode::Char(c) => {
            input.insert_char(c);
            DialogAction::None
        }
        KeyCode::Backspace => {
            input.backspace();
            DialogAction::None
        }
        KeyCode::Delete => {
            input.delete();
            DialogAction::None
        }
        KeyCode::Left => {
            input.move_left();
            DialogAction::None
        }
        KeyCode::Right => {
            input.move_right();
            DialogAction::None
        }
        KeyCode::Up if multiline => {
            input.move_up();
            DialogAction::None
        }
        KeyCode::Down if multiline => {
            input.move_down();
            DialogAction::None
        }
        KeyCode::Home => {
            input.move_home();
            DialogAction::None
        }
        KeyCode::End => {
            input.move_end();
            DialogAction::None
        }
        _ => DialogAction::None,
    }
}
