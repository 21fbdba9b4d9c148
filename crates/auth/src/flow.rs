//! Interactive login flow dispatcher for both providers.
//!
//! Each flow binds the local callback listener before opening the browser,
//! waits for the redirect, and stores the received token on the session. An
//! empty or missing token is an explicit [`ScoutError::Auth`], never a
//! silent no-op.

use std::collections::HashMap;
use thingscout_types::{ProviderId, ScoutError, error::Result};

use crate::{AuthSession, callback, myminifactory, state, thingiverse};

/// Run the full interactive login flow for the given provider.
///
/// # Errors
///
/// Returns an error if the login flow fails for any reason (callback port in
/// use, timeout, state mismatch, or a redirect without a usable token).
pub async fn login(provider: &ProviderId, session: &AuthSession) -> Result<()> {
    match provider {
        ProviderId::Thingiverse => login_thingiverse(session).await,
        ProviderId::MyMiniFactory => login_myminifactory(session).await,
    }
}

async fn login_thingiverse(session: &AuthSession) -> Result<()> {
    let auth_url = thingiverse::build_auth_url();

    let listener = callback::bind_callback(thingiverse::CALLBACK_PORT).await?;
    open_browser(&auth_url);

    let params = callback::accept_token(listener).await?;
    let token = extract_token(&params)?;

    session.save_token(&ProviderId::Thingiverse, &token).await?;
    tracing::info!("Thingiverse login successful");
    Ok(())
}

async fn login_myminifactory(session: &AuthSession) -> Result<()> {
    let state = state::random_state();
    let auth_url = myminifactory::build_auth_url(&state);

    let listener = callback::bind_callback(myminifactory::CALLBACK_PORT).await?;
    open_browser(&auth_url);

    let params = callback::accept_token(listener).await?;

    let received_state = params.get("state").map_or("", String::as_str);
    if received_state != state {
        return Err(ScoutError::Auth(
            "state mismatch, possible CSRF attack".into(),
        ));
    }

    let token = extract_token(&params)?;

    session
        .save_token(&ProviderId::MyMiniFactory, &token)
        .await?;
    tracing::info!("MyMiniFactory login successful");
    Ok(())
}

fn extract_token(params: &HashMap<String, String>) -> Result<String> {
    match params.get("access_token") {
        Some(token) if !token.is_empty() => Ok(token.clone()),
        _ => {
            tracing::warn!("OAuth redirect arrived without a usable token");
            Err(ScoutError::Auth(
                "login redirect carried no access token".into(),
            ))
        }
    }
}

fn open_browser(url: &str) {
    tracing::info!(%url, "opening browser for login");
    if let Err(e) = open::that(url) {
        tracing::warn!(error = %e, %url, "failed to open browser automatically; open the URL manually to complete login");
    }
}
