// crates/authcheck-mock/src/service.rs
// ============================================================================
// Module: Mock Service
// Description: HTTP surface and lifecycle of the mock upstream dependency.
// Purpose: Serve steerable /auth and /doAction responses for the harness.
// Dependencies: axum, serde_json, thiserror, tokio, tracing
// ============================================================================

//! ## Overview
//! [`MockService`] binds a listener and serves the mock routes:
//! - `POST /_control/state` overwrites both configured status codes.
//! - `POST /auth` and `POST /doAction` answer with the configured codes.
//! - `GET /openapi.json` answers once the server is listening and doubles as
//!   the readiness probe for the harness.
//!
//! Malformed control payloads are rejected with a client error and leave the
//! prior state untouched.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::net::SocketAddr;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::post;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::state::ControlRequest;
use crate::state::ControlResponse;
use crate::state::MockState;
use crate::state::SharedState;
use crate::state::StateSnapshot;
use crate::state::shared_default;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while binding or serving the mock service.
#[derive(Debug, Error)]
pub enum MockServiceError {
    /// The listener could not be bound to the requested address.
    #[error("failed to bind mock listener on {addr}: {source}")]
    Bind {
        /// Requested bind address.
        addr: String,
        /// Underlying bind failure.
        #[source]
        source: std::io::Error,
    },
    /// The bound listener address could not be read back.
    #[error("failed to read mock listener address: {0}")]
    LocalAddr(#[source] std::io::Error),
    /// The server loop terminated with an error.
    #[error("mock service terminated: {0}")]
    Serve(#[source] std::io::Error),
}

// ============================================================================
// SECTION: Service Lifecycle
// ============================================================================

/// Bound, ready-to-serve mock upstream service.
pub struct MockService {
    /// Listener accepted connections are served from.
    listener: TcpListener,
    /// Shared response configuration.
    state: SharedState,
}

impl MockService {
    /// Binds the mock service to `addr` (port 0 selects a free port).
    ///
    /// # Errors
    ///
    /// Returns [`MockServiceError::Bind`] when the address cannot be bound.
    pub async fn bind(addr: &str) -> Result<Self, MockServiceError> {
        let listener = TcpListener::bind(addr).await.map_err(|source| MockServiceError::Bind {
            addr: addr.to_string(),
            source,
        })?;
        Ok(Self {
            listener,
            state: shared_default(),
        })
    }

    /// Returns the address the service is actually listening on.
    ///
    /// # Errors
    ///
    /// Returns [`MockServiceError::LocalAddr`] when the address is unreadable.
    pub fn local_addr(&self) -> Result<SocketAddr, MockServiceError> {
        self.listener.local_addr().map_err(MockServiceError::LocalAddr)
    }

    /// Returns a handle to the shared state for in-process inspection.
    #[must_use]
    pub fn state(&self) -> SharedState {
        SharedState::clone(&self.state)
    }

    /// Serves requests until the task is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`MockServiceError::Serve`] when the server loop fails.
    pub async fn serve(self) -> Result<(), MockServiceError> {
        let app = router(self.state);
        axum::serve(self.listener, app).await.map_err(MockServiceError::Serve)
    }

    /// Serves requests until `signal` resolves, then shuts down gracefully.
    ///
    /// # Errors
    ///
    /// Returns [`MockServiceError::Serve`] when the server loop fails.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<(), MockServiceError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = router(self.state);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(signal)
            .await
            .map_err(MockServiceError::Serve)
    }
}

/// Builds the mock router over a shared state handle.
#[must_use]
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/_control/state", post(set_state))
        .route("/auth", post(auth))
        .route("/doAction", post(do_action))
        .route("/openapi.json", get(openapi))
        .with_state(state)
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Overwrites both configured status codes and echoes the applied state.
///
/// Both codes are validated before either is applied, so an invalid payload
/// never partially updates the state.
async fn set_state(
    State(state): State<SharedState>,
    Json(request): Json<ControlRequest>,
) -> Response {
    let auth_status = match StatusCode::from_u16(request.auth_status) {
        Ok(code) => code,
        Err(_) => return invalid_status_response("auth_status", request.auth_status),
    };
    let action_status = match StatusCode::from_u16(request.action_status) {
        Ok(code) => code,
        Err(_) => return invalid_status_response("action_status", request.action_status),
    };

    let Ok(mut guard) = state.lock() else {
        return state_lock_failed();
    };
    *guard = MockState {
        auth_status,
        action_status,
    };
    let current = StateSnapshot::from(*guard);
    drop(guard);

    tracing::info!(
        auth_status = current.auth_status,
        action_status = current.action_status,
        "mock state updated"
    );
    Json(ControlResponse {
        status: "updated".to_string(),
        current,
    })
    .into_response()
}

/// Answers `/auth` with the configured status and a fixed acknowledgment.
async fn auth(State(state): State<SharedState>) -> Response {
    mocked_response(&state, "mocked_auth", |current| current.auth_status)
}

/// Answers `/doAction` with the configured status and a fixed acknowledgment.
async fn do_action(State(state): State<SharedState>) -> Response {
    mocked_response(&state, "mocked_action", |current| current.action_status)
}

/// Serves a minimal schema document used as the readiness probe.
async fn openapi() -> Json<Value> {
    Json(json!({
        "openapi": "3.1.0",
        "info": { "title": "authcheck-mock", "version": "0.1.0" },
        "paths": {
            "/_control/state": { "post": {} },
            "/auth": { "post": {} },
            "/doAction": { "post": {} },
        },
    }))
}

// ============================================================================
// SECTION: Handler Helpers
// ============================================================================

/// Builds a business-endpoint response from the configured status code.
fn mocked_response(
    state: &SharedState,
    ack: &'static str,
    select: impl Fn(MockState) -> StatusCode,
) -> Response {
    let Ok(guard) = state.lock() else {
        return state_lock_failed();
    };
    let status = select(*guard);
    drop(guard);
    tracing::info!(endpoint = ack, status = status.as_u16(), "mock endpoint called");
    (status, Json(json!({ "status": ack }))).into_response()
}

/// Rejects a control request carrying an out-of-range status code.
fn invalid_status_response(field: &'static str, value: u16) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "status": "rejected",
            "error": format!("{field} {value} is not a valid HTTP status code"),
        })),
    )
        .into_response()
}

/// Reports a poisoned state lock without panicking the handler.
fn state_lock_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "status": "error", "error": "mock state lock poisoned" })),
    )
        .into_response()
}
