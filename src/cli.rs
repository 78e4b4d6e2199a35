use crate::cleanup::remove_archive;
use crate::config::ResolvedConfig;
use crate::constants::COMPLETION_MESSAGE;
use crate::downloader::{build_client, download_archive};
use crate::errors::{AppError, AppResult};
use crate::extractor::{extract_archive, validate_archive};
use crate::logging::init_logging;
use crate::models::{FetchTarget, WorkflowSummary};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Builds the argument parser.
///
/// Only the ambient settings have flags; the source URL and local paths are fixed.
pub fn build_command() -> Command<'static> {
    Command::new("chess-fetch")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .after_help(
            "Downloads into ./chess.zip, extracts into ./chess_unzipped and removes the archive.\nExample:\n  chess-fetch --log-level debug",
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a TOML file with log_level and user_agent settings")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("log_level")
                .short('l')
                .long("log-level")
                .help(
                    "Log filter, e.g. 'info' or 'chess_fetch=debug' (RUST_LOG takes precedence)",
                )
                .value_parser(clap::value_parser!(String))
                .action(ArgAction::Set),
        )
}

/// Resolves the ambient configuration: defaults, then the config file, then flags.
pub fn resolve_config(matches: &ArgMatches) -> AppResult<ResolvedConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ResolvedConfig::from_toml_file(path)?,
        None => ResolvedConfig::default(),
    };

    if let Some(level) = matches.get_one::<String>("log_level") {
        config.log_level = level.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Parses command-line arguments and runs the fetch-validate-extract sequence.
///
/// Prints the completion message on success. Every failure is returned as an
/// [`AppError`]; the binary prints it once and exits with a non-zero code.
pub async fn cli() -> AppResult<()> {
    let matches = build_command().get_matches();
    let config = resolve_config(&matches)?;
    init_logging(&config.log_level)?;

    run_and_report(&config, &FetchTarget::default(), &mut std::io::stdout()).await?;
    Ok(())
}

/// Runs [`run_workflow`] and writes the completion message to `out` on success.
///
/// Nothing is written to `out` when the run fails.
pub async fn run_and_report<W: Write>(
    config: &ResolvedConfig,
    target: &FetchTarget,
    out: &mut W,
) -> AppResult<WorkflowSummary> {
    let summary = run_workflow(config, target).await?;
    writeln!(out, "{COMPLETION_MESSAGE}")
        .map_err(|e| AppError::IoError(format!("Failed to write completion message: {e}")))?;
    Ok(summary)
}

/// Maps the outcome of a run to the process exit status.
///
/// Success is 0. A failure is written to `err` as a single line and yields 1.
pub fn exit_status<W: Write>(result: AppResult<()>, err: &mut W) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            // Nothing else can report a failure to write to stderr.
            let _ = writeln!(err, "{e}");
            1
        }
    }
}

/// Downloads, validates and extracts the archive described by `target`, then removes
/// the temporary archive.
///
/// The steps run strictly in order and the first failure stops the run:
///
/// 1. Fetch `target.source_url`; a non-success status writes nothing to disk
/// 2. Write the body to `target.archive_path`, truncating any previous content
/// 3. Validate the archive; an invalid archive is left on disk for inspection and the
///    extraction directory is not created
/// 4. Extract every entry into `target.extract_dir`
/// 5. Delete `target.archive_path`
///
/// # Errors
///
/// Returns the error of the first step that fails. Partial state (a downloaded but
/// invalid archive, entries written before an extraction error) is not rolled back.
pub async fn run_workflow(
    config: &ResolvedConfig,
    target: &FetchTarget,
) -> AppResult<WorkflowSummary> {
    let started = Instant::now();

    let client = build_client(config)?;
    let bytes_downloaded =
        download_archive(&client, &target.source_url, &target.archive_path).await?;

    let entries = validate_archive(&target.archive_path).map_err(|e| {
        if let AppError::InvalidArchive { path, .. } = &e {
            warn!(path = %path.display(), "Keeping invalid archive for inspection");
        }
        e
    })?;

    info!(entries = entries, "Starting extraction phase");
    let report =
        extract_archive(target.archive_path.clone(), target.extract_dir.clone()).await?;

    remove_archive(&target.archive_path).await?;

    let elapsed = started.elapsed();
    info!(
        bytes = bytes_downloaded,
        entries = entries,
        files = report.files_written,
        skipped = report.skipped_entries,
        elapsed = ?elapsed,
        "All operations completed successfully"
    );

    Ok(WorkflowSummary {
        bytes_downloaded,
        entries,
        report,
        elapsed,
    })
}
