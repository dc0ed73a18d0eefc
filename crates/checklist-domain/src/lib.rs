pub mod commands;
pub mod task;
pub mod task_list;

pub use task::Task;
pub use task_list::{TaskId, TaskList};
