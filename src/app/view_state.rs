//! View states - the three-state signal the UI renders from
//!
//! [`view_state_stream`] wraps a fetch result stream with loading boundaries:
//! `Loading(true)` first, one content state per fetch result, `Loading(false)`
//! last, whatever the outcome.

use std::future::Future;

use futures_util::future;
use futures_util::stream::{self, Stream, StreamExt};

use crate::network::error::FetchError;
use crate::network::safe_call::FetchResult;

/// Signal consumed by the view layer
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Show (`true`) or hide (`false`) the progress indicator
    Loading(bool),
    Success(T),
    Failure(FetchError),
}

impl<T> From<FetchResult<T>> for ViewState<T> {
    fn from(result: FetchResult<T>) -> Self {
        match result {
            Ok(output) => ViewState::Success(output),
            Err(e) => ViewState::Failure(e),
        }
    }
}

/// Map the result stream produced by `io_operation` into view states.
///
/// `io_operation` is not invoked until the returned stream is polled.
pub fn view_state_stream<T, F, Fut, S>(io_operation: F) -> impl Stream<Item = ViewState<T>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = S>,
    S: Stream<Item = FetchResult<T>>,
{
    let content = stream::once(async move { io_operation().await })
        .flatten()
        .map(ViewState::from);

    stream::once(future::ready(ViewState::Loading(true)))
        .chain(content)
        .chain(stream::once(future::ready(ViewState::Loading(false))))
}
