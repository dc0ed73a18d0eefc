use checklist_core::{ChecklistError, ChecklistResult};
use checklist_domain::commands::{Command, CommandContext};
use checklist_domain::{Task, TaskId, TaskList};
use checklist_persistence::{JsonFileStore, TaskRepository};
use serde::Serialize;
use std::path::Path;

/// A task as printed by the CLI, with its 1-based position.
#[derive(Debug, Clone, Serialize)]
pub struct TaskView {
    pub position: usize,
    pub title: String,
    pub done: bool,
    pub description: String,
}

impl TaskView {
    fn new(index: usize, task: &Task) -> Self {
        Self {
            position: index + 1,
            title: task.title.clone(),
            done: task.done,
            description: task.description.clone(),
        }
    }
}

pub struct CliContext {
    pub tasks: TaskList,
    store: JsonFileStore,
}

impl CliContext {
    pub async fn load(file_path: &Path) -> ChecklistResult<Self> {
        let store = JsonFileStore::new(file_path);
        tracing::debug!("Using task file {}", store.path().display());
        let tasks = TaskList::from_tasks(store.load().await?);
        Ok(Self { tasks, store })
    }

    pub async fn save(&self) -> ChecklistResult<()> {
        self.store.save(&self.tasks.tasks()).await
    }

    pub fn execute(&mut self, command: &dyn Command) -> ChecklistResult<()> {
        tracing::debug!("Executing: {}", command.description());
        let mut context = CommandContext {
            tasks: &mut self.tasks,
        };
        command.execute(&mut context)
    }

    /// Maps a 1-based position to the task currently there.
    pub fn resolve(&self, position: usize) -> ChecklistResult<TaskId> {
        position
            .checked_sub(1)
            .and_then(|index| self.tasks.id_at(index))
            .ok_or_else(|| {
                ChecklistError::NotFound(format!(
                    "no task at position {} (list has {})",
                    position,
                    self.tasks.len()
                ))
            })
    }

    pub fn view(&self, id: TaskId) -> Option<TaskView> {
        let index = self.tasks.index_of(id)?;
        self.tasks.get(index).map(|task| TaskView::new(index, task))
    }

    pub fn views(&self) -> Vec<TaskView> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, (_, task))| TaskView::new(index, task))
            .collect()
    }
}
