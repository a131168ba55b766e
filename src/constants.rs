//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Base URL of the users endpoint
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Number of users requested per load
pub const LIMIT_USERS: usize = 10;

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Retries after the first attempt (3 calls in total)
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Delay before the first retry
pub const DEFAULT_INITIAL_DELAY_MS: u64 = 1000;

/// Multiplier applied to the delay after every retry
pub const DEFAULT_BACKOFF_FACTOR: f64 = 2.0;

/// Fallback message for failed user fetches without an error body
pub const USERS_ERROR_MESSAGE: &str = "Error getting users";

/// Log file written in the working directory
pub const LOG_FILE: &str = "roster.log";

/// Directory under $HOME holding the optional config file
pub const CONFIG_DIR: &str = ".roster";

/// Config file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.yaml";

/// Application name
pub const APP_NAME: &str = "Roster";
