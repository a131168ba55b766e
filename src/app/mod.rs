//! App layer - central state management and command processing
//!
//! The App actor receives UI events and network responses,
//! updates state, and emits network commands and render state.

pub mod state;
pub mod actor;
pub mod screen;
pub mod view_state;

pub use state::AppState;
pub use actor::AppActor;
pub use screen::{LoadOutcome, StateSlot, UsersScreen};
pub use view_state::{view_state_stream, ViewState};
