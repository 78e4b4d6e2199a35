// Data source
pub const SOURCE_URL: &str =
    "https://github.com/ianderdvl/chess/raw/main/chess/0-chess-moves/starter-code/chess.zip";

// Local paths, relative to the working directory
pub const ARCHIVE_PATH: &str = "chess.zip";
pub const EXTRACT_DIR: &str = "chess_unzipped";

// Console messages
pub const COMPLETION_MESSAGE: &str = "Download and extraction complete.";

// Defaults for the ambient settings
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_USER_AGENT: &str = concat!("chess-fetch/", env!("CARGO_PKG_VERSION"));
