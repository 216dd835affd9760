//! LINE Login client
//!
//! The single object behind the whole flow:
//! 1. Caller constructs `LineLogin` with the channel ID and secret
//! 2. User is redirected to `authorization_url(...)`
//! 3. Provider redirects back with a code and the original `state`
//! 4. Caller verifies `state`, then awaits `exchange_code(...)`
//! 5. Caller awaits `fetch_profile(...)` with the access token
//!
//! Each network operation is a single attempt over a fresh connection —
//! no retry, no backoff, no connection reuse. Two API tiers exist for
//! the network operations: structured `Result`-returning methods, and
//! legacy wrappers that collapse every failure to an empty value the way
//! the original contract does.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{
    ACCESS_ORIGIN, API_ORIGIN, AUTHORIZE_PATH, PROFILE_PATH, REQUEST_TIMEOUT, SCOPE, TOKEN_PATH,
};
use crate::error::{Error, Result};
use crate::sanitize::{sanitize_text, sanitize_url};
use crate::secret::Secret;
use crate::state::generate_state;

/// Untyped user profile document.
///
/// The provider's schema is not contractually fixed, so the body is
/// passed through as decoded JSON rather than a struct.
pub type UserProfile = serde_json::Map<String, serde_json::Value>;

/// Response from the token endpoint.
///
/// Only `access_token` is required; everything else is passed through
/// untouched when the provider sends it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Seconds until the access token expires (delta, not absolute)
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// LINE Login (OAuth 2.0 authorization-code flow) client.
///
/// Holds the channel credentials and the anti-forgery `state` token.
/// Credentials are immutable for the object's lifetime; `state` is the
/// only mutable field, and its mutators take `&mut self`, so racing
/// [`regenerate_state`](Self::regenerate_state) against
/// [`authorization_url`](Self::authorization_url) on a shared instance
/// does not compile. Callers who share one instance across threads with
/// mid-flight state regeneration must add their own synchronization.
pub struct LineLogin {
    client_id: String,
    client_secret: Secret,
    state: String,
    access_origin: String,
    api_origin: String,
    http: reqwest::Client,
}

impl LineLogin {
    /// Construct a client with a freshly generated `state`.
    ///
    /// State generation draws from the OS-backed CSPRNG; if that source
    /// is unavailable the process aborts rather than degrading to a
    /// non-cryptographic generator.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self::with_state(client_id, client_secret, String::new())
    }

    /// Construct a client with an explicit `state`.
    ///
    /// An empty `state` falls back to generation, so the field is never
    /// empty.
    pub fn with_state(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        let state = state.into();
        let state = if state.is_empty() { generate_state() } else { state };

        // Pooling is disabled so every call opens a fresh connection,
        // matching the original transport contract. TLS verification is
        // the rustls default and is never disabled.
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(0)
            .build()
            .expect("HTTP client construction failed");

        Self {
            client_id: client_id.into(),
            client_secret: Secret::new(client_secret),
            state,
            access_origin: ACCESS_ORIGIN.into(),
            api_origin: API_ORIGIN.into(),
            http,
        }
    }

    /// Repoint the two endpoint origins, e.g. at a stub server.
    ///
    /// Production callers keep the defaults.
    pub fn with_origins(
        mut self,
        access_origin: impl Into<String>,
        api_origin: impl Into<String>,
    ) -> Self {
        self.access_origin = access_origin.into();
        self.api_origin = api_origin.into();
        self
    }

    /// Current anti-forgery token.
    ///
    /// The caller compares this against the `state` echoed by the
    /// provider's redirect before trusting the callback; that comparison
    /// is not enforced here.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Draw a fresh random `state`, visible to subsequent
    /// [`authorization_url`](Self::authorization_url) calls.
    pub fn regenerate_state(&mut self) {
        self.state = generate_state();
    }

    /// Install an explicit `state`; an empty value regenerates instead
    /// (the construction rule).
    pub fn set_state(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.state = if value.is_empty() { generate_state() } else { value };
    }

    /// Build the authorization URL the end user is redirected to.
    ///
    /// Pure string construction, no network call. The redirect URI and
    /// channel ID are sanitized best-effort; malformed input degrades
    /// silently rather than erroring.
    pub fn authorization_url(&self, redirect_uri: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("response_type", "code")
            .append_pair("client_id", &sanitize_text(&self.client_id))
            .append_pair("redirect_uri", &sanitize_url(redirect_uri))
            .append_pair("state", &self.state)
            .append_pair("scope", SCOPE)
            .finish();
        format!("{}{}?{}", self.access_origin, AUTHORIZE_PATH, query)
    }

    /// Exchange an authorization code for tokens.
    ///
    /// POSTs the form-encoded grant to the token endpoint. Strictly a
    /// 200 counts as success; any other status — 201 included — is a
    /// [`Error::Provider`] carrying the status and raw body.
    pub async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<TokenResponse> {
        let code = sanitize_text(code);
        let redirect_uri = sanitize_url(redirect_uri);

        let response = self
            .http
            .post(format!("{}{}", self.api_origin, TOKEN_PATH))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code.as_str()),
                ("redirect_uri", redirect_uri.as_str()),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.expose()),
            ])
            .send()
            .await
            .map_err(|e| Error::Http(format!("token request failed: {e}")))?;

        let status = response.status();
        if status.as_u16() != 200 {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<no body>"));
            return Err(Error::Provider {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| Error::Decode(format!("invalid token response: {e}")))
    }

    /// Exchange an authorization code for a bare access token, legacy
    /// contract.
    ///
    /// Transport failure, a non-200 status, and an undecodable body all
    /// collapse to `None`; the discarded detail is logged at `warn`.
    /// Use [`exchange_code`](Self::exchange_code) when the failure kind
    /// matters.
    pub async fn exchange_code_for_token(&self, code: &str, redirect_uri: &str) -> Option<String> {
        match self.exchange_code(code, redirect_uri).await {
            Ok(token) => Some(token.access_token),
            Err(e) => {
                warn!(error = %e, "token exchange failed");
                None
            }
        }
    }

    /// Fetch the authenticated user's profile.
    ///
    /// GETs the profile endpoint with the token as a bearer credential
    /// and returns the decoded JSON document as-is.
    pub async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile> {
        let token = sanitize_text(access_token);

        let response = self
            .http
            .get(format!("{}{}", self.api_origin, PROFILE_PATH))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| Error::Http(format!("profile request failed: {e}")))?;

        let status = response.status();
        if status.as_u16() != 200 {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<no body>"));
            return Err(Error::Provider {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<UserProfile>()
            .await
            .map_err(|e| Error::Decode(format!("invalid profile response: {e}")))
    }

    /// Fetch the user's profile, legacy contract.
    ///
    /// Every failure collapses to an empty document, logged at `warn`.
    /// Use [`fetch_profile`](Self::fetch_profile) when the failure kind
    /// matters.
    pub async fn fetch_profile_or_empty(&self, access_token: &str) -> UserProfile {
        match self.fetch_profile(access_token).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(error = %e, "profile fetch failed");
                UserProfile::new()
            }
        }
    }
}
