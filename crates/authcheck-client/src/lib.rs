// crates/authcheck-client/src/lib.rs
// ============================================================================
// Module: Authcheck Client Library
// Description: Request client for the application under test.
// Purpose: Issue form-encoded session requests with a shared-secret header.
// Dependencies: reqwest, thiserror, url
// ============================================================================

//! ## Overview
//! Thin HTTP client for driving the application under test. Each call is one
//! synchronous POST to `/endpoint` carrying `token` and `action` as form data
//! and an `X-Api-Key` shared secret, with a three-way header policy so tests
//! can exercise the missing-key and wrong-key failure paths.
//! Invariants:
//! - No client-side validation of tokens or actions; the application under
//!   test owns those rules.
//! - Transport failures propagate to the caller without retries.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod client;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use client::API_KEY_HEADER;
pub use client::ApiKeyHeader;
pub use client::AppClient;
pub use client::ClientError;
pub use client::SessionAction;
