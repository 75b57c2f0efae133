// crates/authcheck-mock/src/state.rs
// ============================================================================
// Module: Mock State
// Description: Process-wide mutable response configuration for the mock.
// Purpose: Hold the status codes returned by the business endpoints.
// Dependencies: axum, serde
// ============================================================================

//! ## Overview
//! [`MockState`] is the single piece of mutable state in the mock service:
//! the status codes returned by `/auth` and `/doAction`. It is created with
//! both codes set to 200, mutated only through the control endpoint, and
//! lives for the process lifetime.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;

use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: State Types
// ============================================================================

/// Status codes currently configured for the two business endpoints.
///
/// # Invariants
/// - Both fields are always overwritten together by a control update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockState {
    /// Status returned by `POST /auth`.
    pub auth_status: StatusCode,
    /// Status returned by `POST /doAction`.
    pub action_status: StatusCode,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            auth_status: StatusCode::OK,
            action_status: StatusCode::OK,
        }
    }
}

/// Shared handle to the mock state.
///
/// A single writer is assumed (tests run sequentially), but the mutex keeps
/// control updates all-or-nothing if that assumption ever changes.
pub type SharedState = Arc<Mutex<MockState>>;

/// Returns a fresh shared state with both codes set to 200.
#[must_use]
pub fn shared_default() -> SharedState {
    Arc::new(Mutex::new(MockState::default()))
}

// ============================================================================
// SECTION: Control Wire Types
// ============================================================================

/// Default status code for omitted control fields.
const fn default_status() -> u16 {
    200
}

/// Body of a `POST /_control/state` request.
///
/// Omitted fields fall back to 200, so a partial payload still overwrites
/// both codes and a control request doubles as a reset.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ControlRequest {
    /// Desired status for `POST /auth`.
    #[serde(default = "default_status")]
    pub auth_status: u16,
    /// Desired status for `POST /doAction`.
    #[serde(default = "default_status")]
    pub action_status: u16,
}

/// Applied state echoed back by the control endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Status currently configured for `POST /auth`.
    pub auth_status: u16,
    /// Status currently configured for `POST /doAction`.
    pub action_status: u16,
}

impl From<MockState> for StateSnapshot {
    fn from(state: MockState) -> Self {
        Self {
            auth_status: state.auth_status.as_u16(),
            action_status: state.action_status.as_u16(),
        }
    }
}

/// Body of a successful control response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlResponse {
    /// Always `"updated"` on success.
    pub status: String,
    /// The state now in effect.
    pub current: StateSnapshot,
}
