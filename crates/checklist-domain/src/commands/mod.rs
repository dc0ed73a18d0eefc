use checklist_core::ChecklistResult;

pub mod task_commands;

pub use task_commands::*;

/// A single user intent that mutates the task list.
pub trait Command: Send + Sync {
    fn execute(&self, context: &mut CommandContext) -> ChecklistResult<()>;

    /// Human-readable description, used for logging.
    fn description(&self) -> String;
}

pub struct CommandContext<'a> {
    pub tasks: &'a mut crate::TaskList,
}
