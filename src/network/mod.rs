//! Network layer - user fetches with retry and result classification
//!
//! The Network actor receives fetch commands and streams back view states.

pub mod actor;
pub mod client;
pub mod error;
pub mod safe_call;

pub use actor::NetworkActor;
pub use error::{CallError, FetchError};
pub use safe_call::{perform_safe_call, ApiResponse, FetchResult, RetryPolicy};
