//! chess-fetch library
//!
//! This crate provides the core functionality for the `chess-fetch` binary, which
//! downloads the chess starter-code archive, checks that it is a well-formed ZIP
//! container, extracts it into `chess_unzipped/` and removes the temporary archive.
//!
//! ## Overview
//!
//! - [`downloader`] - Issues the GET request and writes the body to the temporary archive
//! - [`extractor`] - Validates the archive structure and expands its entries
//! - [`cleanup`] - Removes the temporary archive after extraction
//! - [`cli`] - Argument parsing and the [`cli::run_workflow`] orchestrator
//! - [`config`] - Ambient settings and their TOML loader
//! - [`models`] - The fetch target and the run summary types
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use chess_fetch::{cli, config::ResolvedConfig, errors::AppResult, models::FetchTarget};
//!
//! # async fn example() -> AppResult<()> {
//! let summary = cli::run_workflow(&ResolvedConfig::default(), &FetchTarget::default()).await?;
//! println!("Extracted {} file(s)", summary.report.files_written);
//! # Ok(())
//! # }
//! ```

pub mod cleanup;
pub mod cli;
pub mod config;
pub mod constants;
pub mod downloader;
pub mod errors;
pub mod extractor;
pub mod logging;
pub mod models;
