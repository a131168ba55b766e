//! # Roster
//!
//! A terminal user directory: fetches users from a REST endpoint, lists
//! them, and shows one user's details on selection.
//!
//! ## Features
//! - `GET /users` with exponential-backoff retry on transient failures
//! - Typed outcomes: success, empty body, HTTP status, exception
//! - Loading/success/failure view states
//! - Per-screen cache served when returning from a detail view
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (Screen state holder)
//! - Network Layer (Tokio runtime)

pub mod constants;
pub mod config;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{Address, Company, User};
pub use config::Config;
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor, UsersScreen, ViewState};
pub use network::{FetchError, NetworkActor, RetryPolicy};
