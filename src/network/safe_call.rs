//! Safe network call - turns a remote call into a typed, retried result stream
//!
//! A call is invoked once and its outcome classified:
//! - 2xx with a body yields `Ok(body)`
//! - 2xx without a body yields `Err(FetchError::EmptyBody)`
//! - non-2xx yields `Err(FetchError::HttpStatus)`
//! - a transient `CallError` is retried with exponential backoff, anything
//!   else (or an exhausted policy) yields a wrapped exception
//!
//! The stream is lazy and yields exactly one element.

use std::future::Future;
use std::time::Duration;

use futures_util::stream::{self, Stream};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BACKOFF_FACTOR, DEFAULT_INITIAL_DELAY_MS, DEFAULT_MAX_RETRIES,
};
use crate::network::error::{CallError, FetchError};

/// Outcome of one fetch
pub type FetchResult<T> = Result<T, FetchError>;

/// A received response, before classification
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub body: Option<T>,
    pub error_body: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Retry configuration for transient failures
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub allowed: bool,
    /// Additional attempts after the first call
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub backoff_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            allowed: true,
            max_retries: DEFAULT_MAX_RETRIES,
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
        }
    }
}

impl RetryPolicy {
    /// Policy that never retries
    pub fn disabled() -> Self {
        RetryPolicy {
            allowed: false,
            ..Self::default()
        }
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    /// Delay to wait after `delay`, saturating on overflow
    pub fn next_delay(&self, delay: Duration) -> Duration {
        Duration::try_from_secs_f64(delay.as_secs_f64() * self.backoff_factor)
            .unwrap_or(Duration::MAX)
    }

    fn permits(&self, retries_done: u32) -> bool {
        self.allowed && retries_done < self.max_retries
    }
}

/// Classify a received response
fn classify<T>(response: ApiResponse<T>, error_message: &str) -> FetchResult<T> {
    if response.is_success() {
        return response.body.ok_or(FetchError::EmptyBody);
    }

    let message = response
        .error_body
        .filter(|body| !body.trim().is_empty())
        .unwrap_or_else(|| error_message.to_string());

    Err(FetchError::HttpStatus {
        status: response.status,
        message,
    })
}

/// Perform `call`, retrying transient failures per `policy`.
///
/// `error_message` is used as the failure text for non-2xx responses that
/// carry no error body. Nothing happens until the returned stream is polled.
pub fn perform_safe_call<T, F, Fut>(
    error_message: impl Into<String>,
    policy: RetryPolicy,
    mut call: F,
) -> impl Stream<Item = FetchResult<T>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<ApiResponse<T>, CallError>>,
{
    let error_message = error_message.into();

    stream::once(async move {
        let mut delay = policy.initial_delay();
        let mut retries = 0u32;

        loop {
            let err = match call().await {
                Ok(response) => {
                    let result = classify(response, &error_message);
                    if let Err(e) = &result {
                        tracing::error!(error = %e, "Network call failed");
                    }
                    return result;
                }
                Err(err) => err,
            };

            if err.is_transient() && policy.permits(retries) {
                retries += 1;
                tracing::warn!(
                    attempt = retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Transient network failure, retrying"
                );
                tokio::time::sleep(delay).await;
                delay = policy.next_delay(delay);
                continue;
            }

            let failure = FetchError::from(err);
            tracing::error!(attempts = retries + 1, error = %failure, "Network call failed");
            return Err(failure);
        }
    })
}
