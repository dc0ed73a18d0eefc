use crate::{
    dialog::{handle_dialog_input, DialogAction},
    events::{Event, EventHandler},
    state::StateManager,
    ui,
};
use checklist_core::{ChecklistResult, InputState, SelectionState};
use checklist_domain::commands::{AddTask, DeleteTask, SetTaskDescription, ToggleTaskDone};
use checklist_domain::{TaskId, TaskList};
use checklist_persistence::TaskRepository;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

pub struct App {
    pub should_quit: bool,
    pub focus: Focus,
    pub input: InputState,
    pub tasks: TaskList,
    pub selection: SelectionState,
    pub editor: Option<DescriptionEditor>,
    pub today: NaiveDate,
    /// First visible line of the task list, maintained by the renderer.
    pub scroll: usize,
    state: StateManager,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Tasks,
    Description,
}

/// The one expanded description. Its text stays uncommitted until the
/// editor is collapsed.
#[derive(Debug, Clone)]
pub struct DescriptionEditor {
    pub task_id: TaskId,
    pub buffer: InputState,
}

impl App {
    pub fn new(tasks: TaskList, store: Arc<dyn TaskRepository>) -> Self {
        let mut selection = SelectionState::new();
        selection.clamp(tasks.len());
        Self {
            should_quit: false,
            focus: Focus::Input,
            input: InputState::new(),
            tasks,
            selection,
            editor: None,
            today: chrono::Local::now().date_naive(),
            scroll: 0,
            state: StateManager::new(store),
        }
    }

    /// Reads the task file through `store`. A malformed file is fatal.
    pub async fn load(store: Arc<dyn TaskRepository>) -> ChecklistResult<Self> {
        let tasks = TaskList::from_tasks(store.load().await?);
        Ok(Self::new(tasks, store))
    }

    pub fn header_title(&self) -> String {
        format!("My Tasks for {}", self.today.format("%B %d, %Y"))
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.selection.get().and_then(|idx| self.tasks.id_at(idx))
    }

    pub fn is_expanded(&self, id: TaskId) -> bool {
        self.editor.as_ref().is_some_and(|editor| editor.task_id == id)
    }

    pub async fn handle_key_event(&mut self, key: KeyEvent) -> ChecklistResult<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return Ok(());
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key).await,
            Focus::Tasks => self.handle_task_key(key).await,
            Focus::Description => self.handle_description_key(key).await,
        }
    }

    async fn handle_input_key(&mut self, key: KeyEvent) -> ChecklistResult<()> {
        match key.code {
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            KeyCode::Down => self.focus_tasks(),
            _ => match handle_dialog_input(&mut self.input, key, false) {
                DialogAction::Confirm => self.add_task().await?,
                DialogAction::Cancel => self.focus_tasks(),
                DialogAction::None => {}
            },
        }
        Ok(())
    }

    async fn handle_task_key(&mut self, key: KeyEvent) -> ChecklistResult<()> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => self.selection.next(self.tasks.len()),
            KeyCode::Char('k') | KeyCode::Up => self.selection.prev(self.tasks.len()),
            KeyCode::Char(' ') | KeyCode::Char('x') => {
                if let Some(id) = self.selected_task_id() {
                    self.toggle_done(id).await?;
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_task_id() {
                    self.delete_task(id).await?;
                }
            }
            KeyCode::Enter => {
                if let Some(id) = self.selected_task_id() {
                    self.toggle_description(id).await?;
                }
            }
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            KeyCode::Char('i') | KeyCode::Char('a') => self.focus = Focus::Input,
            _ => {}
        }
        Ok(())
    }

    async fn handle_description_key(&mut self, key: KeyEvent) -> ChecklistResult<()> {
        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.cycle_focus(key.code == KeyCode::Tab);
            return Ok(());
        }
        let Some(editor) = self.editor.as_mut() else {
            self.focus = Focus::Tasks;
            return Ok(());
        };
        if handle_dialog_input(&mut editor.buffer, key, true) == DialogAction::Cancel {
            self.collapse_description().await?;
        }
        Ok(())
    }

    /// Tab order is input, list, then the open editor if there is one.
    fn cycle_focus(&mut self, forward: bool) {
        let order: &[Focus] = if self.editor.is_some() {
            &[Focus::Input, Focus::Tasks, Focus::Description]
        } else {
            &[Focus::Input, Focus::Tasks]
        };
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        match order[next] {
            Focus::Tasks => self.focus_tasks(),
            focus => self.focus = focus,
        }
    }

    fn focus_tasks(&mut self) {
        self.selection.clamp(self.tasks.len());
        self.focus = Focus::Tasks;
    }

    /// Blank input is ignored and left in the field.
    pub async fn add_task(&mut self) -> ChecklistResult<()> {
        if self.input.is_blank() {
            return Ok(());
        }
        let command = AddTask {
            title: self.input.as_str().to_string(),
        };
        self.state.execute(&mut self.tasks, Box::new(command)).await?;
        self.input.clear();
        self.selection.select_last(self.tasks.len());
        Ok(())
    }

    pub async fn toggle_done(&mut self, id: TaskId) -> ChecklistResult<()> {
        self.state
            .execute(&mut self.tasks, Box::new(ToggleTaskDone { task_id: id }))
            .await
    }

    pub async fn delete_task(&mut self, id: TaskId) -> ChecklistResult<()> {
        self.state
            .execute(&mut self.tasks, Box::new(DeleteTask { task_id: id }))
            .await?;
        if self.is_expanded(id) {
            self.editor = None;
        }
        self.selection.clamp(self.tasks.len());
        Ok(())
    }

    /// Expands the description of `id`, or collapses it if it is the open
    /// one. Opening a second description collapses the first.
    pub async fn toggle_description(&mut self, id: TaskId) -> ChecklistResult<()> {
        if self.is_expanded(id) {
            return self.collapse_description().await;
        }
        if self.editor.is_some() {
            self.collapse_description().await?;
        }
        if let Some(task) = self.tasks.find(id) {
            self.editor = Some(DescriptionEditor {
                task_id: id,
                buffer: InputState::with_text(task.description.clone()),
            });
            self.focus = Focus::Description;
        }
        Ok(())
    }

    /// Hides the open editor and commits its text.
    pub async fn collapse_description(&mut self) -> ChecklistResult<()> {
        if let Some(editor) = self.editor.take() {
            self.focus = Focus::Tasks;
            let command = SetTaskDescription {
                task_id: editor.task_id,
                text: editor.buffer.as_str().to_string(),
            };
            self.state.execute(&mut self.tasks, Box::new(command)).await?;
        }
        Ok(())
    }

    pub async fn run(&mut self) -> ChecklistResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> ChecklistResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key_event(key).await?,
                Some(Event::Tick) => {}
                None => break,
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
