// crates/authcheck-mock/src/lib.rs
// ============================================================================
// Module: Authcheck Mock Library
// Description: Controllable mock of the application's upstream dependency.
// Purpose: Let integration tests steer upstream success/failure responses.
// Dependencies: axum, serde, thiserror, tokio, tracing
// ============================================================================

//! ## Overview
//! This crate stands in for the real upstream dependency of the application
//! under test. It exposes two business endpoints (`/auth`, `/doAction`) whose
//! response status codes are steered through a control endpoint
//! (`/_control/state`), plus `/openapi.json` as a readiness probe.
//! Invariants:
//! - Control updates overwrite both status codes atomically or not at all.
//! - Business endpoints never mutate state; only the control endpoint does.
//!
//! The harness drives tests sequentially, so a single writer is assumed; the
//! state still sits behind a mutex so parallel test execution cannot tear a
//! control update.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod service;
mod state;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use service::MockService;
pub use service::MockServiceError;
pub use service::router;
pub use state::ControlRequest;
pub use state::ControlResponse;
pub use state::MockState;
pub use state::SharedState;
pub use state::StateSnapshot;
pub use state::shared_default;
