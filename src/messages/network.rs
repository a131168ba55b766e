//! Network messages - communication between App and Network layers

use crate::app::view_state::ViewState;
use crate::models::User;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Fetch one page of users and stream back its view states.
    /// `id` tags log lines and responses; it is not used for matching.
    FetchUsers { id: u64, quantity: usize },
    /// Cancel in-flight fetches and stop the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    /// One element of a fetch's view-state stream
    Users {
        id: u64,
        state: ViewState<Vec<User>>,
    },
}

impl NetworkResponse {
    /// Check if this is the last message for its request
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            NetworkResponse::Users {
                state: ViewState::Loading(false),
                ..
            }
        )
    }
}
