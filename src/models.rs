use crate::constants::{ARCHIVE_PATH, EXTRACT_DIR, SOURCE_URL};
use std::path::PathBuf;
use std::time::Duration;

/// Where the archive comes from and where it lands on disk.
///
/// The binary always runs with [`FetchTarget::default`], which points at the fixed
/// source URL and the fixed relative paths. The fields are public so that callers of
/// the library (and its tests) can aim the sequence at another server or directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTarget {
    /// URL the archive is downloaded from
    pub source_url: String,
    /// Temporary file holding the downloaded bytes until extraction finishes
    pub archive_path: PathBuf,
    /// Directory the archive entries are expanded into
    pub extract_dir: PathBuf,
}

impl Default for FetchTarget {
    fn default() -> Self {
        Self {
            source_url: SOURCE_URL.to_string(),
            archive_path: PathBuf::from(ARCHIVE_PATH),
            extract_dir: PathBuf::from(EXTRACT_DIR),
        }
    }
}

/// Counts collected while expanding an archive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionReport {
    pub files_written: usize,
    pub directories_created: usize,
    /// Entries whose names would resolve outside the extraction directory
    pub skipped_entries: usize,
}

/// Outcome of a successful fetch-validate-extract run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSummary {
    pub bytes_downloaded: u64,
    /// Number of entries listed in the archive's central directory
    pub entries: usize,
    pub report: ExtractionReport,
    pub elapsed: Duration,
}
