use chess_fetch::cli;
use chess_fetch::errors::AppError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::IoError(format!("Failed to start runtime: {e}")))
        .and_then(|rt| rt.block_on(cli::cli()));

    ExitCode::from(cli::exit_status(result, &mut std::io::stderr()))
}
