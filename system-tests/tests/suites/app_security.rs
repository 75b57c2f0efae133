// system-tests/tests/suites/app_security.rs
// ============================================================================
// Module: Application Security Tests
// Description: Shared-secret enforcement coverage for the application.
// Purpose: Confirm requests without a valid X-Api-Key are rejected.
// Dependencies: system-tests helpers
// ============================================================================

//! Shared-secret tests against the live application under test. The upstream
//! contract does not pin 401 versus 403, so both are accepted.

use authcheck_client::ApiKeyHeader;
use authcheck_client::SessionAction;
use helpers::app;
use helpers::mock_process::MockProcess;
use helpers::serial;

use crate::helpers;

/// Statuses accepted as "request refused for missing/invalid credentials".
const UNAUTHORIZED_STATUSES: [u16; 2] = [401, 403];

#[tokio::test(flavor = "multi_thread")]
async fn missing_api_key_is_refused() -> Result<(), Box<dyn std::error::Error>> {
    let _serial = serial::acquire().await;
    let mock = MockProcess::shared().await?;
    mock.control()?.reset_best_effort().await;
    let client = app::app_client()?;
    let fixtures = app::TokenFixtures::load()?;

    let response = client
        .send(&fixtures.valid, SessionAction::Login.as_str(), &ApiKeyHeader::Omitted)
        .await?;
    let status = response.status().as_u16();
    if !UNAUTHORIZED_STATUSES.contains(&status) {
        return Err(format!("expected 401/403 without X-Api-Key, got {status}").into());
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn wrong_api_key_is_refused() -> Result<(), Box<dyn std::error::Error>> {
    let _serial = serial::acquire().await;
    let mock = MockProcess::shared().await?;
    mock.control()?.reset_best_effort().await;
    let client = app::app_client()?;
    let fixtures = app::TokenFixtures::load()?;

    let policy = ApiKeyHeader::Override("wrong".to_string());
    let response =
        client.send(&fixtures.valid, SessionAction::Login.as_str(), &policy).await?;
    let status = response.status().as_u16();
    if UNAUTHORIZED_STATUSES.contains(&status) {
        return Ok(());
    }
    // Some deployments answer 200 with an error-flagged body instead.
    let result = app::result_field(response).await?;
    if result != "ERROR" {
        return Err(format!("expected refusal for wrong key, got {status} / {result}").into());
    }
    Ok(())
}
