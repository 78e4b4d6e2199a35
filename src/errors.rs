use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Server answered with a non-success status
    #[error("Failed to download the file: HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },
    /// Network request failed before a status was available, or the body could not be read
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Downloaded bytes are not a well-formed ZIP container
    #[error("The downloaded file is not a valid zip file: {} ({})", .path.display(), .reason)]
    InvalidArchive { path: PathBuf, reason: String },
    /// An entry of an otherwise valid archive could not be read
    #[error("Archive error: {0}")]
    ArchiveError(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
    /// Invalid input format
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// Conversion implementations for common errors
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::InvalidInput(format!("Failed to parse config: {err}"))
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::AppError;
    use std::path::PathBuf;

    #[test]
    fn test_http_status_display() {
        let err = AppError::HttpStatus {
            status: 404,
            reason: "Not Found".to_string(),
        };
        let error_msg = err.to_string();
        assert!(error_msg.starts_with("Failed to download the file"));
        assert!(error_msg.contains("404"));
        assert!(error_msg.contains("Not Found"));
    }

    #[test]
    fn test_invalid_archive_display() {
        let err = AppError::InvalidArchive {
            path: PathBuf::from("chess.zip"),
            reason: "Could not find central directory end".to_string(),
        };
        let error_msg = err.to_string();
        assert!(error_msg.contains("not a valid zip file"));
        assert!(error_msg.contains("chess.zip"));
        assert!(error_msg.contains("central directory"));
    }

    #[test]
    fn test_network_error_display() {
        let err = AppError::NetworkError("Connection refused".to_string());
        assert!(err.to_string().contains("Network error"));
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_io_error_from_std() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::from(io);
        assert!(matches!(err, AppError::IoError(ref msg) if msg.contains("denied")));
    }

    #[test]
    fn test_toml_error_maps_to_invalid_input() {
        let parse_err = toml::from_str::<toml::Table>("key = ").unwrap_err();
        let err = AppError::from(parse_err);
        assert!(err.to_string().starts_with("Invalid input: Failed to parse config"));
    }

    #[test]
    fn test_app_error_implements_error_trait() {
        use std::error::Error;
        let err: Box<dyn Error> = Box::new(AppError::ArchiveError("test".to_string()));
        assert!(!err.to_string().is_empty());
    }
}
