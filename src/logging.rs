use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Parses a `tracing` filter directive such as `info` or `chess_fetch=debug,reqwest=warn`.
pub fn parse_filter(directive: &str) -> AppResult<EnvFilter> {
    EnvFilter::try_new(directive)
        .map_err(|e| AppError::InvalidInput(format!("Invalid log level '{directive}': {e}")))
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` wins when it is set and valid; otherwise `log_level` is used. Logs go to
/// stderr so stdout only carries the completion message.
pub fn init_logging(log_level: &str) -> AppResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::IoError(format!("Failed to initialize logging: {e}")))
}
