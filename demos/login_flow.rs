//! End-to-end LINE Login walkthrough
//!
//! Builds the authorization URL from channel credentials, waits for the
//! redirect parameters to be pasted back in, verifies `state`, exchanges
//! the code, and prints the profile.
//!
//! Run with:
//!
//! ```sh
//! LINE_CHANNEL_ID=... LINE_CHANNEL_SECRET=... \
//!     cargo run --example login_flow
//! ```
//!
//! `LINE_REDIRECT_URI` overrides the redirect URI registered for the
//! channel (defaults to `https://localhost/callback`).

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use line_login::LineLogin;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let channel_id =
        std::env::var("LINE_CHANNEL_ID").context("LINE_CHANNEL_ID must be set")?;
    let channel_secret =
        std::env::var("LINE_CHANNEL_SECRET").context("LINE_CHANNEL_SECRET must be set")?;
    let redirect_uri = std::env::var("LINE_REDIRECT_URI")
        .unwrap_or_else(|_| "https://localhost/callback".into());

    let client = LineLogin::new(channel_id, channel_secret);
    info!(state = client.state(), "generated anti-forgery token");

    println!("Open this URL in a browser and authorize:");
    println!("\n  {}\n", client.authorization_url(&redirect_uri));
    println!("After the redirect, copy `code` and `state` from the callback URL.");

    let code = prompt("code: ")?;
    let returned_state = prompt("state: ")?;

    // The provider echoes `state` unchanged; a mismatch means the
    // callback does not belong to this authorization attempt.
    if returned_state != client.state() {
        bail!(
            "state mismatch: sent {}, got {returned_state}",
            client.state()
        );
    }

    let token = client
        .exchange_code(&code, &redirect_uri)
        .await
        .context("authorization-code exchange failed")?;
    info!(expires_in = ?token.expires_in, "access token obtained");

    let profile = client
        .fetch_profile(&token.access_token)
        .await
        .context("profile fetch failed")?;
    println!("{}", serde_json::to_string_pretty(&profile)?);

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read stdin")?;
    Ok(line.trim().to_string())
}
