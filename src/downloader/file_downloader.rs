use crate::config::ResolvedConfig;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Builds the HTTP client used for the download.
///
/// No timeout is configured; the request relies on the transport defaults. Redirects
/// are followed, which the GitHub `raw` URLs need.
pub fn build_client(config: &ResolvedConfig) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| AppError::NetworkError(format!("Failed to build HTTP client: {e}")))
}

/// Downloads `url` and writes the full response body to `archive_path`.
///
/// The status is checked before anything touches the filesystem, so a failed fetch
/// leaves no file behind. On success the file is created or truncated and holds
/// exactly the bytes of the response body.
///
/// # Returns
///
/// The number of bytes written.
///
/// # Errors
///
/// - `HttpStatus` if the server answers with a non-success status
/// - `NetworkError` if the request cannot be sent or the body cannot be read
/// - `IoError` if the archive file cannot be created or written
pub async fn download_archive(
    client: &reqwest::Client,
    url: &str,
    archive_path: &Path,
) -> AppResult<u64> {
    info!(url = url, "Downloading archive");

    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::NetworkError(format!("Failed to download {url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::HttpStatus {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        });
    }
    debug!(status = status.as_u16(), "Archive request succeeded");

    let mut file = File::create(archive_path).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to create archive file {}: {}",
            archive_path.display(),
            e
        ))
    })?;

    let mut written: u64 = 0;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| AppError::NetworkError(format!("Failed to read response body: {e}")))?
    {
        file.write_all(&chunk).await.map_err(|e| {
            AppError::IoError(format!(
                "Failed to write archive file {}: {}",
                archive_path.display(),
                e
            ))
        })?;
        written += chunk.len() as u64;
    }

    file.flush().await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to flush archive file {}: {}",
            archive_path.display(),
            e
        ))
    })?;

    info!(
        path = %archive_path.display(),
        bytes = written,
        "Archive downloaded"
    );

    Ok(written)
}
