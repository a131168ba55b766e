//! HTTP client wrapper - executes user requests and reads responses

use std::time::Duration;

use futures_util::Stream;
use serde::de::DeserializeOwned;

use crate::constants::USERS_ERROR_MESSAGE;
use crate::models::User;
use crate::network::error::CallError;
use crate::network::safe_call::{perform_safe_call, ApiResponse, FetchResult, RetryPolicy};

/// Create an HTTP client with the given request timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Join a base URL and a path without doubling the separator
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// GET `url` and decode a JSON body.
///
/// An empty or `null` body on a 2xx response is reported as `body: None`.
/// Non-2xx responses keep their body text as `error_body`.
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<ApiResponse<T>, CallError> {
    tracing::debug!(%url, "--> GET");
    let resp = client.get(url).send().await?;
    let status = resp.status().as_u16();
    let bytes = resp.bytes().await?;
    tracing::debug!(%url, status, bytes = bytes.len(), "<-- response");

    if !(200..300).contains(&status) {
        let text = String::from_utf8_lossy(&bytes).trim().to_string();
        tracing::debug!(%url, status, body = %text, "error body");
        return Ok(ApiResponse {
            status,
            body: None,
            error_body: (!text.is_empty()).then_some(text),
        });
    }

    let body = if bytes.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        serde_json::from_slice::<Option<T>>(&bytes)?
    };

    Ok(ApiResponse {
        status,
        body,
        error_body: None,
    })
}

/// Call `GET /users` once.
///
/// `quantity` is accepted for the page size but the endpoint takes no
/// parameters, so it is not sent.
pub async fn get_users(
    client: reqwest::Client,
    base_url: String,
    quantity: usize,
) -> Result<ApiResponse<Vec<User>>, CallError> {
    tracing::debug!(quantity, "requesting users");
    get_json(&client, &endpoint(&base_url, "users")).await
}

/// Fetch the user list as a retried, single-element result stream
pub fn fetch_users(
    client: reqwest::Client,
    base_url: String,
    quantity: usize,
    policy: RetryPolicy,
) -> impl Stream<Item = FetchResult<Vec<User>>> {
    perform_safe_call(USERS_ERROR_MESSAGE, policy, move || {
        get_users(client.clone(), base_url.clone(), quantity)
    })
}
