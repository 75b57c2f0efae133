// system-tests/tests/helpers/serial.rs
// ============================================================================
// Module: Serial Execution Guard
// Description: Run-wide lock for suites sharing the mock upstream.
// Purpose: Preserve the reset-before-each-test invariant under libtest.
// Dependencies: tokio
// ============================================================================

//! ## Overview
//! The harness assumes sequential test execution against the shared mock:
//! the per-test reset must complete before that test's first request, with no
//! in-flight calls from another test. libtest runs tests on parallel threads,
//! so suites that share the mock take this guard first.

use tokio::sync::Mutex;
use tokio::sync::MutexGuard;

/// Run-wide lock serializing tests that share the mock upstream.
static SESSION: Mutex<()> = Mutex::const_new(());

/// Acquires the serialization guard for one test case.
pub async fn acquire() -> MutexGuard<'static, ()> {
    SESSION.lock().await
}
