use super::{Command, CommandContext};
use crate::TaskId;
use checklist_core::{ChecklistError, ChecklistResult};

/// Append a new task to the end of the list
pub struct AddTask {
    pub title: String,
}

impl Command for AddTask {
    fn execute(&self, context: &mut CommandContext) -> ChecklistResult<()> {
        match context.tasks.append(&self.title) {
            Some(id) => {
                tracing::debug!("Added task {} '{}'", id, self.title.trim());
                Ok(())
            }
            None => Err(ChecklistError::Validation(
                "task title must not be empty".to_string(),
            )),
        }
    }

    fn description(&self) -> String {
        format!("Add task: '{}'", self.title.trim())
    }
}

pub struct SetTaskDone {
    pub task_id: TaskId,
    pub done: bool,
}

impl Command for SetTaskDone {
    fn execute(&self, context: &mut CommandContext) -> ChecklistResult<()> {
        if !context.tasks.set_done(self.task_id, self.done) {
            tracing::warn!("Ignoring done flag for missing task {}", self.task_id);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Set task {} done={}", self.task_id, self.done)
    }
}

pub struct ToggleTaskDone {
    pub task_id: TaskId,
}

impl Command for ToggleTaskDone {
    fn execute(&self, context: &mut CommandContext) -> ChecklistResult<()> {
        if context.tasks.toggle_done(self.task_id).is_none() {
            tracing::warn!("Ignoring toggle for missing task {}", self.task_id);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Toggle task {}", self.task_id)
    }
}

/// Replace a task's description with the editor contents
pub struct SetTaskDescription {
    pub task_id: TaskId,
    pub text: String,
}

impl Command for SetTaskDescription {
    fn execute(&self, context: &mut CommandContext) -> ChecklistResult<()> {
        if !context.tasks.set_description(self.task_id, &self.text) {
            tracing::warn!("Ignoring description for missing task {}", self.task_id);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Set description of task {}", self.task_id)
    }
}

pub struct DeleteTask {
    pub task_id: TaskId,
}

impl Command for DeleteTask {
    fn execute(&self, context: &mut CommandContext) -> ChecklistResult<()> {
        if context.tasks.remove(self.task_id).is_none() {
            tracing::warn!("Ignoring delete for missing task {}", self.task_id);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete task {}", self.task_id)
    }
}
