// system-tests/tests/helpers/mock_process.rs
// ============================================================================
// Module: Mock Process Harness
// Description: Lifecycle management for the spawned mock upstream process.
// Purpose: Provide deterministic mock startup and teardown for tests.
// Dependencies: system-tests, tokio
// ============================================================================

//! ## Overview
//! [`MockProcess`] owns the mock upstream child process for a test or for the
//! whole run. Startup polls the readiness probe with a bounded retry loop and
//! aborts setup (killing the child) on timeout. Teardown is guaranteed two
//! ways: dropping the handle kills and reaps the child, and the child's stdin
//! pipe closes when the test process exits, which the mock treats as a
//! graceful shutdown signal.

use std::net::SocketAddr;
use std::net::TcpListener as StdTcpListener;
use std::path::PathBuf;
use std::process::Child;
use std::process::ChildStdin;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;

use system_tests::config::HarnessConfig;
use system_tests::config::HarnessEnv;
use tokio::sync::OnceCell;

use super::control::MockControl;
use super::readiness;
use super::timeouts;

/// Returns a free loopback address for ephemeral mock processes.
pub fn allocate_bind_addr() -> Result<SocketAddr, String> {
    let listener = StdTcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("failed to bind loopback: {err}"))?;
    let addr =
        listener.local_addr().map_err(|err| format!("failed to read listener address: {err}"))?;
    drop(listener);
    Ok(addr)
}

/// Handle for a spawned mock upstream process.
pub struct MockProcess {
    /// Child process running the mock server binary.
    child: Child,
    /// Held open for the run; closing it asks the mock to shut down.
    control_pipe: Option<ChildStdin>,
    /// Base URL of the spawned mock.
    base_url: String,
}

impl MockProcess {
    /// Spawns a mock process bound to `bind` and waits for readiness.
    ///
    /// On readiness timeout the child is terminated and a fatal setup error
    /// is returned; no test should run against a mock that never came up.
    pub async fn start(bind: &str) -> Result<Self, String> {
        let binary = PathBuf::from(env!("CARGO_BIN_EXE_authcheck_mock_server"));
        let mut command = Command::new(binary);
        command
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .env(HarnessEnv::MockBind.as_str(), bind);

        let mut child = command.spawn().map_err(|err| format!("mock spawn failed: {err}"))?;
        let control_pipe = child.stdin.take();
        let base_url = format!("http://{bind}");

        let timeout = timeouts::resolve_timeout(timeouts::READY_TIMEOUT);
        if let Err(err) = readiness::wait_for_mock_ready(&base_url, timeout).await {
            let _ = child.kill();
            let _ = child.wait();
            return Err(format!("mock setup failed: {err}"));
        }
        Ok(Self {
            child,
            control_pipe,
            base_url,
        })
    }

    /// Spawns a mock process on a freshly allocated loopback port.
    pub async fn start_ephemeral() -> Result<Self, String> {
        let addr = allocate_bind_addr()?;
        Self::start(&addr.to_string()).await
    }

    /// Returns the run-wide shared mock bound to the configured address.
    ///
    /// Initialized once per test binary; application-facing suites reset its
    /// state before each case instead of restarting it.
    pub async fn shared() -> Result<&'static Self, String> {
        static SHARED: OnceCell<Result<MockProcess, String>> = OnceCell::const_new();
        SHARED
            .get_or_init(|| async {
                let config = HarnessConfig::load()?;
                Self::start(&config.mock_bind).await
            })
            .await
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Returns the mock base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a control-plane client for this mock.
    pub fn control(&self) -> Result<MockControl, String> {
        MockControl::new(&self.base_url)
    }

    /// Closes the stdin pipe, asking the mock to shut down gracefully.
    pub fn close_control_pipe(&mut self) {
        self.control_pipe.take();
    }

    /// Waits for the child to exit and returns its status.
    pub fn wait_exit(&mut self) -> Result<ExitStatus, String> {
        self.child.wait().map_err(|err| format!("mock wait failed: {err}"))
    }
}

impl Drop for MockProcess {
    fn drop(&mut self) {
        // Terminate and reap; both are no-ops if the child already exited.
        self.control_pipe.take();
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
