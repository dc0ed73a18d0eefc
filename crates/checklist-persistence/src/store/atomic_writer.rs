use checklist_core::ChecklistResult;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Replaces files by writing a sibling temp file and renaming it over the
/// target, so a crash mid-write leaves the previous contents intact.
pub struct AtomicWriter;

impl AtomicWriter {
    pub async fn write_atomic(path: &Path, data: &[u8]) -> ChecklistResult<()> {
        // The temp file must live on the same filesystem for rename to be atomic.
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;

        fs::write(temp_file.path(), data).await?;
        // Temp files are created 0600; keep the mode of the file being replaced.
        match fs::metadata(path).await {
            Ok(existing) => fs::set_permissions(temp_file.path(), existing.permissions()).await?,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Reads the whole file, or `None` when it does not exist.
    pub async fn read_optional(path: &Path) -> ChecklistResult<Option<Vec<u8>>> {
        match fs::read(path).await {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
