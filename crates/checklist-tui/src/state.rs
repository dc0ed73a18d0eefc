use checklist_core::ChecklistResult;
use checklist_domain::commands::{Command, CommandContext};
use checklist_domain::TaskList;
use checklist_persistence::TaskRepository;
use std::sync::Arc;

/// Runs commands against the task list and writes the full list back after
/// each one. The save is awaited before the next key is handled, so the file
/// always matches memory between gestures.
pub struct StateManager {
    store: Arc<dyn TaskRepository>,
}

impl StateManager {
    pub fn new(store: Arc<dyn TaskRepository>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, tasks: &mut TaskList, command: Box<dyn Command>) -> ChecklistResult<()> {
        tracing::debug!("Executing: {}", command.description());

        let mut context = CommandContext { tasks };
        command.execute(&mut context)?;

        let snapshot = context.tasks.tasks();
        self.store.save(&snapshot).await
    }
}
