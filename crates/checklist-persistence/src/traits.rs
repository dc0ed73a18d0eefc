use async_trait::async_trait;
use checklist_core::ChecklistResult;
use checklist_domain::Task;

/// Storage backend for the full task list.
///
/// Every save replaces the stored list wholesale; there is no partial update.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Load every stored task in order. A missing backing file is an empty list.
    async fn load(&self) -> ChecklistResult<Vec<Task>>;

    /// Replace the stored list with `tasks`.
    async fn save(&self, tasks: &[Task]) -> ChecklistResult<()>;
}

/// Converts values to and from their on-disk byte form
pub trait Serializer<T: Send + Sync>: Send + Sync {
    fn serialize(&self, data: &T) -> ChecklistResult<Vec<u8>>;

    fn deserialize(&self, bytes: &[u8]) -> ChecklistResult<T>;
}
