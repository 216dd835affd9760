//! LINE Login endpoint constants
//!
//! Public locations of the LINE Login v2.1 endpoints. None of these are
//! secrets — the channel ID and secret supplied at construction are the
//! only confidential inputs. The authorization page and the JSON APIs
//! live on different origins.

use std::time::Duration;

/// Origin serving the end-user authorization page
pub const ACCESS_ORIGIN: &str = "https://access.line.me";

/// Origin serving the token and profile APIs
pub const API_ORIGIN: &str = "https://api.line.me";

/// Authorization endpoint path (consent page the user is redirected to)
pub const AUTHORIZE_PATH: &str = "/oauth2/v2.1/authorize";

/// Token endpoint path (authorization-code exchange)
pub const TOKEN_PATH: &str = "/oauth2/v2.1/token";

/// Profile endpoint path (requires a bearer access token)
pub const PROFILE_PATH: &str = "/v2/profile";

/// The only scope requested during authorization
pub const SCOPE: &str = "profile";

/// Transport-level timeout applied to every HTTP call
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
