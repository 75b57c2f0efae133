// system-tests/src/bin/authcheck_mock_server.rs
// ============================================================================
// Module: Harness Mock Server
// Description: Mock upstream runner spawned by the test harness.
// Purpose: Serve the controllable mock as an independent child process.
// Dependencies: authcheck-mock, system-tests, tokio
// ============================================================================

//! Harness-spawned mock upstream server.
//!
//! The harness keeps this process's stdin pipe open for the whole run; the
//! server shuts down gracefully when the pipe closes, so the mock can never
//! outlive the test process even when teardown code is skipped.

use std::process::ExitCode;

use authcheck_mock::MockService;
use system_tests::config::HarnessEnv;
use system_tests::config::read_env_strict;
use tokio::io::AsyncReadExt;

/// Fallback bind address when the harness passes none.
const DEFAULT_BIND: &str = "127.0.0.1:8888";

/// Resolves until stdin reaches EOF, signalling harness shutdown.
async fn control_pipe_closed() {
    let mut stdin = tokio::io::stdin();
    let mut scratch = [0_u8; 64];
    loop {
        match stdin.read(&mut scratch).await {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let bind = match read_env_strict(HarnessEnv::MockBind.as_str()) {
        Ok(value) => value.unwrap_or_else(|| DEFAULT_BIND.to_string()),
        Err(err) => {
            tracing::error!(error = %err, "mock bind env unreadable");
            return ExitCode::FAILURE;
        }
    };

    let service = match MockService::bind(&bind).await {
        Ok(service) => service,
        Err(err) => {
            tracing::error!(error = %err, bind, "mock bind failed");
            return ExitCode::FAILURE;
        }
    };
    match service.local_addr() {
        Ok(addr) => tracing::info!(%addr, "harness mock listening"),
        Err(err) => {
            tracing::error!(error = %err, "mock address unreadable");
            return ExitCode::FAILURE;
        }
    }

    if let Err(err) = service.serve_with_shutdown(control_pipe_closed()).await {
        tracing::error!(error = %err, "harness mock failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
