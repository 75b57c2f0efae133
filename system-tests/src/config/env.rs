// system-tests/src/config/env.rs
// ============================================================================
// Module: Harness Environment
// Description: Environment-backed configuration for the test harness.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid
//! silent misconfiguration. Invalid UTF-8 fails closed; unset variables fall
//! back to the fixture defaults the application-facing suites were written
//! against.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default base URL of the application under test.
const DEFAULT_APP_URL: &str = "http://localhost:8080";
/// Default bind address for the harness-spawned mock upstream.
const DEFAULT_MOCK_BIND: &str = "127.0.0.1:8888";
/// Default shared secret accepted by the application under test.
const DEFAULT_API_KEY: &str = "qazWSXedc";
/// Default valid 32-character session token fixture.
const DEFAULT_VALID_TOKEN: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for harness configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessEnv {
    /// Base URL of the application under test.
    AppUrl,
    /// Bind address for the harness-spawned mock upstream.
    MockBind,
    /// Shared secret the application under test accepts.
    ValidApiKey,
    /// Valid session token fixture.
    ValidToken,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
}

impl HarnessEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AppUrl => "AUTHCHECK_SYSTEM_TEST_APP_URL",
            Self::MockBind => "AUTHCHECK_SYSTEM_TEST_MOCK_BIND",
            Self::ValidApiKey => "AUTHCHECK_SYSTEM_TEST_VALID_API_KEY",
            Self::ValidToken => "AUTHCHECK_SYSTEM_TEST_VALID_TOKEN",
            Self::TimeoutSeconds => "AUTHCHECK_SYSTEM_TEST_TIMEOUT_SEC",
        }
    }
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed harness configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Base URL of the application under test.
    pub app_url: String,
    /// Bind address for the harness-spawned mock upstream.
    pub mock_bind: String,
    /// Shared secret the application under test accepts.
    pub valid_api_key: String,
    /// Valid session token fixture.
    pub valid_token: String,
    /// Optional timeout override in seconds (positive integer).
    pub timeout: Option<Duration>,
}

impl HarnessConfig {
    /// Loads configuration from environment variables, defaulting unset keys.
    ///
    /// # Errors
    ///
    /// Returns an error when an environment value is not valid UTF-8, is
    /// empty, or fails validation (for example, an invalid timeout).
    pub fn load() -> Result<Self, String> {
        let app_url = read_env_nonempty(HarnessEnv::AppUrl.as_str())?
            .unwrap_or_else(|| DEFAULT_APP_URL.to_string());
        let mock_bind = read_env_nonempty(HarnessEnv::MockBind.as_str())?
            .unwrap_or_else(|| DEFAULT_MOCK_BIND.to_string());
        let valid_api_key = read_env_nonempty(HarnessEnv::ValidApiKey.as_str())?
            .unwrap_or_else(|| DEFAULT_API_KEY.to_string());
        let valid_token = read_env_nonempty(HarnessEnv::ValidToken.as_str())?
            .unwrap_or_else(|| DEFAULT_VALID_TOKEN.to_string());
        let timeout = read_env_nonempty(HarnessEnv::TimeoutSeconds.as_str())?
            .map(|value| parse_timeout_seconds(HarnessEnv::TimeoutSeconds.as_str(), &value))
            .transpose()?;
        Ok(Self {
            app_url,
            mock_bind,
            valid_api_key,
            valid_token,
            timeout,
        })
    }

    /// Returns the mock base URL derived from the bind address.
    #[must_use]
    pub fn mock_base_url(&self) -> String {
        format!("http://{}", self.mock_bind)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| format!("{name} must be valid UTF-8"))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns an error when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, String> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => Err(format!("{name} must not be empty")),
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns an error when the value is missing, non-numeric, or zero.
fn parse_timeout_seconds(name: &str, raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{name} must be a positive integer number of seconds"));
    }
    let secs: u64 = trimmed
        .parse()
        .map_err(|_| format!("{name} must be a positive integer number of seconds"))?;
    if secs == 0 {
        return Err(format!("{name} must be greater than zero"));
    }
    Ok(Duration::from_secs(secs))
}
