use crate::errors::{AppError, AppResult};
use crate::models::ExtractionReport;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use zip::result::ZipError;
use zip::ZipArchive;

/// Checks that the file at `archive_path` is a structurally valid ZIP container.
///
/// The end-of-central-directory record has to be present and the central directory
/// has to parse. Entry contents are not decompressed here.
///
/// # Returns
///
/// The number of entries listed in the central directory.
///
/// # Errors
///
/// - `IoError` if the file cannot be opened
/// - `InvalidArchive` if the bytes are not a ZIP container, including a central
///   directory that runs past the end of the file
pub fn validate_archive(archive_path: &Path) -> AppResult<usize> {
    let file = File::open(archive_path).map_err(|e| {
        AppError::IoError(format!(
            "Failed to open archive {}: {}",
            archive_path.display(),
            e
        ))
    })?;

    // Once the file is open, a short read while parsing means a truncated or corrupt
    // central directory.
    let archive = ZipArchive::new(BufReader::new(file)).map_err(|e| {
        let reason = match e {
            ZipError::Io(io) => format!("corrupt central directory: {io}"),
            other => other.to_string(),
        };
        AppError::InvalidArchive {
            path: archive_path.to_path_buf(),
            reason,
        }
    })?;

    debug!(
        path = %archive_path.display(),
        entries = archive.len(),
        "Archive structure is valid"
    );

    Ok(archive.len())
}

/// Expands every entry of `archive_path` into `extract_dir`.
///
/// # Behavior
///
/// - **Directory creation**: `extract_dir` and any parent directories of entries are
///   created as needed.
/// - **Overwrite**: files with colliding names are truncated and rewritten; unrelated
///   files already in `extract_dir` are left alone.
/// - **Unsafe names**: entries whose names are absolute or contain `..` are skipped
///   and counted in [`ExtractionReport::skipped_entries`]. They are not rewritten into
///   the destination under a sanitized name.
///
/// The archive is expected to have passed [`validate_archive`]. Extraction itself is
/// blocking and runs on tokio's blocking pool.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be created, or an entry cannot be
/// decompressed. Entries written before the failure are left in place.
pub async fn extract_archive(
    archive_path: PathBuf,
    extract_dir: PathBuf,
) -> AppResult<ExtractionReport> {
    info!(
        archive = %archive_path.display(),
        dest = %extract_dir.display(),
        "Extracting archive"
    );

    let dest = extract_dir.clone();
    let report =
        tokio::task::spawn_blocking(move || extract_archive_sync(&archive_path, &extract_dir))
            .await
            .map_err(|e| AppError::IoError(format!("Task join error: {e}")))??;

    if report.skipped_entries > 0 {
        warn!(
            skipped = report.skipped_entries,
            "Some entries were skipped because their paths leave the extraction directory"
        );
    }

    info!(
        dest = %dest.display(),
        files = report.files_written,
        directories = report.directories_created,
        "Extraction completed"
    );

    Ok(report)
}

/// Synchronous extraction of a single archive.
fn extract_archive_sync(archive_path: &Path, extract_dir: &Path) -> AppResult<ExtractionReport> {
    std::fs::create_dir_all(extract_dir).map_err(|e| {
        AppError::IoError(format!(
            "Failed to create extraction directory {}: {}",
            extract_dir.display(),
            e
        ))
    })?;

    let file = File::open(archive_path).map_err(|e| {
        AppError::IoError(format!(
            "Failed to open archive {}: {}",
            archive_path.display(),
            e
        ))
    })?;

    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(|e| {
        AppError::ArchiveError(format!(
            "Failed to read archive {}: {}",
            archive_path.display(),
            e
        ))
    })?;

    let mut report = ExtractionReport::default();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| {
            AppError::ArchiveError(format!(
                "Failed to read entry {} from {}: {}",
                i,
                archive_path.display(),
                e
            ))
        })?;

        let relative = match entry.enclosed_name() {
            Some(path) => path.to_path_buf(),
            None => {
                warn!(entry = entry.name(), "Skipping entry with unsafe path");
                report.skipped_entries += 1;
                continue;
            }
        };
        let out_path = extract_dir.join(relative);

        if entry.is_dir() {
            if !out_path.is_dir() {
                std::fs::create_dir_all(&out_path).map_err(|e| {
                    AppError::IoError(format!(
                        "Failed to create directory {}: {}",
                        out_path.display(),
                        e
                    ))
                })?;
                report.directories_created += 1;
            }
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::IoError(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut out_file = File::create(&out_path).map_err(|e| {
            AppError::IoError(format!(
                "Failed to create file {}: {}",
                out_path.display(),
                e
            ))
        })?;

        std::io::copy(&mut entry, &mut out_file).map_err(|e| {
            AppError::ArchiveError(format!(
                "Failed to extract {} to {}: {}",
                entry.name(),
                out_path.display(),
                e
            ))
        })?;

        debug!(entry = entry.name(), path = %out_path.display(), "Extracted entry");
        report.files_written += 1;
    }

    Ok(report)
}
