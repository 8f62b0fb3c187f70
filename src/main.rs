use std::process::ExitCode;
use stdin_harness::cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse and dispatch the command line
    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
