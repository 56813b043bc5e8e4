//! Shared HTTP client for listing requests.
//!
//! All listing sources go through one [`reqwest::Client`] configured with a
//! fixed timeout, a generic browser user agent, a JSON `Accept` header and
//! certificate verification disabled (some feed bridges serve broken chains).

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::Client;
use std::error::Error;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

/// Generic user agent sent with every listing request.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Build the client used by every listing source.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn build_client(timeout: Duration) -> Result<Client, Box<dyn Error>> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .danger_accept_invalid_certs(true)
        .build()?;
    Ok(client)
}

/// GET a URL and return the body as text, failing on non-2xx statuses.
#[instrument(level = "info", skip(client, bearer))]
pub async fn get_text(
    client: &Client,
    url: &str,
    bearer: Option<&str>,
) -> Result<String, Box<dyn Error>> {
    let t0 = Instant::now();
    let mut request = client.get(url);
    if let Some(token) = bearer {
        request = request.bearer_auth(token);
    }

    let response = match request.send().await.and_then(|r| r.error_for_status()) {
        Ok(r) => r,
        Err(e) => {
            warn!(elapsed_ms = t0.elapsed().as_millis(), error = %e, "Request failed");
            return Err(Box::new(e));
        }
    };
    let body = response.text().await?;
    debug!(elapsed_ms = t0.elapsed().as_millis(), bytes = body.len(), "Fetched");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client() {
        assert!(build_client(Duration::from_secs(1)).is_ok());
    }

    #[test]
    fn test_user_agent_is_generic() {
        assert!(USER_AGENT.starts_with("Mozilla/5.0"));
    }
}
