//! Local HTTP callback listener for OAuth redirect flows.
//!
//! Binds a TCP listener on `127.0.0.1:<port>`, waits for the provider to
//! redirect the browser back, and extracts the query parameters from the
//! request. Implicit-grant providers return the token in the URL fragment,
//! which never reaches the server, so requests without a token are answered
//! with a small relay page that re-submits the fragment as query parameters.

use std::{collections::HashMap, time::Duration};
use thingscout_types::{ScoutError, error::Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const TIMEOUT_SECS: u64 = 120;

const SUCCESS_HTML: &[u8] =
    b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nConnection: close\r\n\r\n\
    <html><body><h1>Login successful!</h1><p>You may close this tab.</p></body></html>";

const RELAY_HTML: &[u8] =
    b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nConnection: close\r\n\r\n\
    <html><body><script>window.location.replace('/callback?' + window.location.hash.substring(1));</script></body></html>";

/// Bind the local callback port and return the listener.
///
/// The caller should bind the port **before** opening the browser to avoid a
/// race condition, then call [`accept_token`] on the returned listener.
///
/// # Errors
///
/// Returns an error if the port is already in use or cannot be bound.
pub async fn bind_callback(port: u16) -> Result<TcpListener> {
    let addr = format!("127.0.0.1:{port}");
    TcpListener::bind(&addr).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            ScoutError::Auth(format!(
                "callback port {port} is already in use; is another login still waiting?"
            ))
        } else {
            ScoutError::Auth(format!("failed to bind callback port {port}: {e}"))
        }
    })
}

/// Wait for the OAuth redirect on an already-bound listener and return its
/// query parameters.
///
/// Serves the fragment-relay page to requests that carry no `access_token`
/// parameter and keeps accepting until one does. Times out after 120 seconds.
///
/// # Errors
///
/// Returns an error on accept/read failure or if the timeout expires.
pub async fn accept_token(listener: TcpListener) -> Result<HashMap<String, String>> {
    let accept = async {
        loop {
            let (mut stream, _) = listener
                .accept()
                .await
                .map_err(|e| ScoutError::Auth(e.to_string()))?;

            let mut buf = vec![0u8; 8192];
            let n = stream
                .read(&mut buf)
                .await
                .map_err(|e| ScoutError::Auth(e.to_string()))?;

            let request = String::from_utf8_lossy(&buf[..n]);
            let params = parse_query_from_request(&request)?;

            if params.contains_key("access_token") {
                stream
                    .write_all(SUCCESS_HTML)
                    .await
                    .map_err(|e| ScoutError::Auth(format!("write error: {e}")))?;
                let _ = stream.shutdown().await;
                return Ok::<HashMap<String, String>, ScoutError>(params);
            }

            stream
                .write_all(RELAY_HTML)
                .await
                .map_err(|e| ScoutError::Auth(format!("write error: {e}")))?;
            let _ = stream.shutdown().await;
        }
    };

    tokio::time::timeout(Duration::from_secs(TIMEOUT_SECS), accept)
        .await
        .map_err(|_| ScoutError::Auth("timed out waiting for OAuth callback".into()))?
}

fn parse_query_from_request(request: &str) -> Result<HashMap<String, String>> {
    // First line format: "GET /callback?access_token=... HTTP/1.1"
    let first_line = request.lines().next().unwrap_or("");
    let path = first_line.split_ascii_whitespace().nth(1).unwrap_or("/");
    let query = path.split_once('?').map_or("", |(_, q)| q);
    serde_urlencoded::from_str(query)
        .map_err(|e| ScoutError::Auth(format!("invalid callback query params: {e}")))
}
