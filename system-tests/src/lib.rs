// system-tests/src/lib.rs
// ============================================================================
// Module: Authcheck System Tests Library
// Description: Shared configuration for the integration-test harness.
// Purpose: Provide common utilities for Authcheck system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts the configuration shared by the Authcheck harness
//! binaries in `system-tests/tests` and the harness-spawned mock server
//! process in `system-tests/src/bin`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
