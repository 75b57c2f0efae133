// system-tests/src/config/mod.rs
// ============================================================================
// Module: Harness Configuration
// Description: Centralized configuration for Authcheck system tests.
// Purpose: Provide typed access to test environment settings and defaults.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Harness configuration is read from environment variables and mapped into
//! a small typed structure shared by test helpers and the spawned mock
//! process. Unset variables fall back to the fixture defaults.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::HarnessConfig;
pub use env::HarnessEnv;
pub use env::read_env_strict;
