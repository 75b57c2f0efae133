// crates/authcheck-client/src/client.rs
// ============================================================================
// Module: Application Client
// Description: Single-shot POST client for the session endpoint.
// Purpose: Send token/action requests with a configurable X-Api-Key policy.
// Dependencies: reqwest, thiserror, url
// ============================================================================

//! ## Overview
//! [`AppClient`] issues one POST per call to the application's `/endpoint`
//! path. The response comes back raw; status and body assertions are the
//! caller's responsibility.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::Response;
use reqwest::header::ACCEPT;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Shared-secret header required by the application under test.
pub const API_KEY_HEADER: &str = "X-Api-Key";

// ============================================================================
// SECTION: Request Vocabulary
// ============================================================================

/// Session actions understood by the application under test.
///
/// The client never enforces this vocabulary; [`AppClient::send`] accepts any
/// string so tests can probe the application's own validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Open a session for a token.
    Login,
    /// Perform the business action within an open session.
    Action,
    /// Close the session for a token.
    Logout,
}

impl SessionAction {
    /// Returns the wire form of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "LOGIN",
            Self::Action => "ACTION",
            Self::Logout => "LOGOUT",
        }
    }
}

/// Disposition of the `X-Api-Key` header for one request.
///
/// Priority order: [`ApiKeyHeader::Omitted`] suppresses the header entirely,
/// [`ApiKeyHeader::Override`] replaces the client default, and
/// [`ApiKeyHeader::Default`] sends the client-configured secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyHeader {
    /// Send the client's configured shared secret.
    Default,
    /// Send an explicit value instead of the configured secret.
    Override(String),
    /// Send no `X-Api-Key` header at all.
    Omitted,
}

impl ApiKeyHeader {
    /// Resolves the header value to attach, if any.
    #[must_use]
    pub fn value<'a>(&'a self, default: &'a str) -> Option<&'a str> {
        match self {
            Self::Default => Some(default),
            Self::Override(value) => Some(value.as_str()),
            Self::Omitted => None,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by the application client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL could not be parsed.
    #[error("invalid application base url {url}: {source}")]
    BaseUrl {
        /// The rejected URL text.
        url: String,
        /// Underlying parse failure.
        #[source]
        source: url::ParseError,
    },
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Build(#[source] reqwest::Error),
    /// The request failed at the transport level (refused, timed out).
    #[error("transport failure against application under test: {0}")]
    Transport(#[from] reqwest::Error),
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// HTTP client for the application under test.
#[derive(Debug, Clone)]
pub struct AppClient {
    /// Validated base URL of the application under test.
    base_url: Url,
    /// Shared secret sent under [`ApiKeyHeader::Default`].
    default_api_key: String,
    /// Underlying HTTP client; pooling is an internal optimization only.
    http: reqwest::Client,
}

impl AppClient {
    /// Creates a client for `base_url` with a default shared secret.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::BaseUrl`] for unparseable URLs and
    /// [`ClientError::Build`] when the HTTP client cannot be constructed.
    pub fn new(base_url: &str, default_api_key: impl Into<String>) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url).map_err(|source| ClientError::BaseUrl {
            url: base_url.to_string(),
            source,
        })?;
        let http = reqwest::Client::builder().build().map_err(ClientError::Build)?;
        Ok(Self {
            base_url: parsed,
            default_api_key: default_api_key.into(),
            http,
        })
    }

    /// Returns the base URL the client targets.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the `/endpoint` URL requests are sent to.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        format!("{}/endpoint", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Sends one session request and returns the raw response.
    ///
    /// The body is form-encoded `token`/`action` (reqwest sets the
    /// form-urlencoded Content-Type), `Accept` is always JSON, and the
    /// `X-Api-Key` header follows the [`ApiKeyHeader`] policy. No retries,
    /// no response parsing.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] on network-level failures; HTTP
    /// error statuses are returned to the caller, not treated as errors.
    pub async fn send(
        &self,
        token: &str,
        action: &str,
        api_key: &ApiKeyHeader,
    ) -> Result<Response, ClientError> {
        let mut request = self
            .http
            .post(self.endpoint_url())
            .header(ACCEPT, "application/json")
            .form(&[("token", token), ("action", action)]);
        if let Some(value) = api_key.value(&self.default_api_key) {
            request = request.header(API_KEY_HEADER, value);
        }
        Ok(request.send().await?)
    }

    /// Sends a typed action with the default shared secret.
    ///
    /// # Errors
    ///
    /// Propagates [`ClientError::Transport`] from [`AppClient::send`].
    pub async fn send_action(
        &self,
        token: &str,
        action: SessionAction,
    ) -> Result<Response, ClientError> {
        self.send(token, action.as_str(), &ApiKeyHeader::Default).await
    }
}
