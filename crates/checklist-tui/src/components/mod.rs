pub mod description_editor;
pub mod panel;
pub mod task_row;

pub use description_editor::*;
pub use panel::*;
pub use task_row::*;
