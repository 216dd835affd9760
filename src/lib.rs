//! LINE Login (OAuth 2.0 authorization-code flow) client
//!
//! A minimal client for LINE Login v2.1: build the authorization URL,
//! exchange the grant code for an access token, and fetch the user's
//! profile with that token. This crate is a standalone library with no
//! binary target — credentials come from the embedding application, and
//! nothing is persisted.
//!
//! Login flow:
//! 1. Construct [`LineLogin`] with the channel ID and secret
//! 2. Redirect the user to [`LineLogin::authorization_url`]
//! 3. The provider redirects back with a code and the original `state`
//! 4. Compare the echoed `state` against [`LineLogin::state`]
//! 5. Await [`LineLogin::exchange_code`] with the authorization code
//! 6. Await [`LineLogin::fetch_profile`] with the access token
//!
//! The network operations also come in legacy-contract form
//! ([`LineLogin::exchange_code_for_token`] and
//! [`LineLogin::fetch_profile_or_empty`]) where every failure collapses
//! to an empty value instead of a structured error.

pub mod client;
pub mod constants;
pub mod error;
pub mod sanitize;
pub mod secret;
pub mod state;

pub use client::{LineLogin, TokenResponse, UserProfile};
pub use error::{Error, Result};
pub use sanitize::{sanitize_text, sanitize_url};
pub use secret::Secret;
pub use state::generate_state;
