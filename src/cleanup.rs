use crate::errors::{AppError, AppResult};
use std::path::Path;
use tracing::info;

/// Deletes the temporary archive after a successful extraction.
///
/// A failure to delete fails the run; a successful run never leaves the archive on disk.
pub async fn remove_archive(archive_path: &Path) -> AppResult<()> {
    tokio::fs::remove_file(archive_path).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to delete archive {}: {}",
            archive_path.display(),
            e
        ))
    })?;

    info!(path = %archive_path.display(), "Temporary archive removed");
    Ok(())
}
