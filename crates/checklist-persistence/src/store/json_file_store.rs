use crate::serialization::JsonSerializer;
use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{Serializer, TaskRepository};
use checklist_core::ChecklistResult;
use checklist_domain::Task;
use std::path::{Path, PathBuf};

/// Task list stored as a pretty-printed JSON array in a single file.
///
/// Each save rewrites the whole file. There is no locking: two processes
/// sharing a file silently race, and the last writer wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl TaskRepository for JsonFileStore {
    async fn load(&self) -> ChecklistResult<Vec<Task>> {
        let Some(bytes) = AtomicWriter::read_optional(&self.path).await? else {
            tracing::info!("No task file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        };

        let tasks: Vec<Task> = JsonSerializer.deserialize(&bytes)?;

        tracing::info!(
            "Loaded {} tasks ({} bytes) from {}",
            tasks.len(),
            bytes.len(),
            self.path.display()
        );
        Ok(tasks)
    }

    async fn save(&self, tasks: &[Task]) -> ChecklistResult<()> {
        let bytes = JsonSerializer.serialize(&tasks.to_vec())?;

        AtomicWriter::write_atomic(&self.path, &bytes).await?;

        tracing::info!(
            "Saved {} tasks ({} bytes) to {}",
            tasks.len(),
            bytes.len(),
            self.path.display()
        );
        Ok(())
    }
}
