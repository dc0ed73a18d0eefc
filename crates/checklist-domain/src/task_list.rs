use crate::task::Task;
use std::fmt;

/// Session-local handle for a task. Never persisted; reassigned on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    id: TaskId,
    task: Task,
}

/// Ordered, in-memory collection of tasks.
///
/// Positions follow insertion order and shift down when a task is removed.
/// Callers hold [`TaskId`]s rather than positions so a stale reference
/// resolves to nothing instead of to whichever task moved into its slot.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    entries: Vec<Entry>,
    next_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut list = Self::new();
        for task in tasks {
            list.push(task);
        }
        list
    }

    /// Appends a fresh task. Returns `None` without touching the list when
    /// the title is empty or whitespace.
    pub fn append(&mut self, title: &str) -> Option<TaskId> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(self.push(Task::new(title)))
    }

    pub fn set_done(&mut self, id: TaskId, done: bool) -> bool {
        self.get_mut(id).map(|task| task.done = done).is_some()
    }

    pub fn toggle_done(&mut self, id: TaskId) -> Option<bool> {
        self.get_mut(id).map(|task| {
            task.done = !task.done;
            task.done
        })
    }

    pub fn set_description(&mut self, id: TaskId, text: &str) -> bool {
        self.get_mut(id)
            .map(|task| task.description = text.trim().to_string())
            .is_some()
    }

    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.index_of(id)?;
        Some(self.entries.remove(index).task)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.entries.get(index).map(|entry| &entry.task)
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.task)
    }

    pub fn id_at(&self, index: usize) -> Option<TaskId> {
        self.entries.get(index).map(|entry| entry.id)
    }

    pub fn index_of(&self, id: TaskId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaskId, &Task)> {
        self.entries.iter().map(|entry| (entry.id, &entry.task))
    }

    /// Owned copy of the tasks in list order, as they are written to disk.
    pub fn tasks(&self) -> Vec<Task> {
        self.entries.iter().map(|entry| entry.task.clone()).collect()
    }

    fn push(&mut self, task: Task) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, task });
        id
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.task)
    }
}

impl PartialEq for TaskList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|(a, b)| a.task == b.task)
    }
}

impl Eq for TaskList {}
