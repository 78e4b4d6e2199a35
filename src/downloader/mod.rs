//! Fetch operations for the remote archive.
//!
//! This module issues the single GET request for the archive and writes the response
//! body to the temporary archive path. The entry points are [`build_client`] and
//! [`download_archive`].

mod file_downloader;

// Re-export public API
pub use file_downloader::{build_client, download_archive};
