//! MyMiniFactory OAuth implicit-grant flow constants and URL building.
//!
//! Same implicit-grant shape as Thingiverse, but the authorize endpoint
//! lives on a separate auth host and the redirect is validated with a
//! `state` parameter. Callback port: 55445.

/// OAuth client ID registered for this plugin.
pub const CLIENT_ID: &str = "thingscout";

/// Local callback port for the OAuth redirect.
pub const CALLBACK_PORT: u16 = 55445;

/// MyMiniFactory OAuth authorization endpoint.
pub const AUTH_URL: &str = "https://auth.myminifactory.com/web/authorize";

/// Default token used for the public endpoints when nobody is signed in.
pub const DEFAULT_TOKEN: &str = "e5d1fa338ac04ba2af3ae1e929b9dd5c";

const REDIRECT_URI_ENCODED: &str = "http%3A%2F%2Flocalhost%3A55445%2Fcallback";

/// Build the authorization URL for the implicit-grant flow.
#[must_use]
pub fn build_auth_url(state: &str) -> String {
    format!(
        "{AUTH_URL}?client_id={CLIENT_ID}&redirect_uri={REDIRECT_URI_ENCODED}&response_type=token&state={state}"
    )
}
