//! API utilities for frontend-backend communication
//!
//! The board API is served from the same origin as the page.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// # Returns
/// - Origin like "https://feedback.example.com"
/// - Empty string if window is not available (URLs stay relative)
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/v1/posts");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `Authorization` header value for a bearer token
pub fn bearer(access_token: &str) -> String {
    format!("Bearer {}", access_token)
}

/// GET a JSON resource, optionally authenticated
pub async fn get_json<T>(path: &str, access_token: Option<&str>) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let mut request = Request::get(&api_url(path)).header("Accept", "application/json");
    if let Some(token) = access_token {
        request = request.header("Authorization", &bearer(token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
