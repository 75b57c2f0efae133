// crates/authcheck-mock/src/main.rs
// ============================================================================
// Module: Authcheck Mock Entry Point
// Description: Standalone runner for the mock upstream service.
// Purpose: Serve the controllable mock on a configurable bind address.
// Dependencies: authcheck-mock, clap, tokio, tracing
// ============================================================================

//! Standalone mock upstream server binary.

use std::process::ExitCode;

use authcheck_mock::MockService;
use clap::Parser;

/// Command-line arguments for the standalone mock server.
#[derive(Debug, Parser)]
#[command(name = "authcheck-mock", about = "Controllable mock of the upstream auth dependency")]
struct Cli {
    /// Address the mock listens on.
    #[arg(long, default_value = "0.0.0.0:8900")]
    bind: String,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let service = match MockService::bind(&cli.bind).await {
        Ok(service) => service,
        Err(err) => {
            tracing::error!(error = %err, "mock bind failed");
            return ExitCode::FAILURE;
        }
    };
    match service.local_addr() {
        Ok(addr) => tracing::info!(%addr, "mock upstream listening"),
        Err(err) => {
            tracing::error!(error = %err, "mock address unreadable");
            return ExitCode::FAILURE;
        }
    }

    if let Err(err) = service.serve().await {
        tracing::error!(error = %err, "mock service failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
