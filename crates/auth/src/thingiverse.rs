//! Thingiverse OAuth implicit-grant flow constants and URL building.
//!
//! Thingiverse hands the access token straight back on the redirect
//! (`response_type=token`); there is no code/token exchange step.
//! Callback port: 55444.

/// OAuth client ID registered for this plugin.
pub const CLIENT_ID: &str = "2b2fb21e8dc9832d4b2a";

/// Local callback port for the OAuth redirect.
pub const CALLBACK_PORT: u16 = 55444;

/// Thingiverse OAuth authorization endpoint.
pub const AUTH_URL: &str = "https://www.thingiverse.com/login/oauth/authorize";

/// Default token used for the public endpoints when nobody is signed in.
pub const DEFAULT_TOKEN: &str = "c54e437f9f69d71201f8a95e42d3d5f9";

/// Build the authorization URL for the implicit-grant flow.
#[must_use]
pub fn build_auth_url() -> String {
    format!("{AUTH_URL}?client_id={CLIENT_ID}&response_type=token")
}
