//! Users screen - per-screen cache and observable view state
//!
//! The screen decides whether a load is served from the cache or needs a
//! fetch, and records every fetched page. It does no I/O itself: a fetch is
//! handed back to the caller as [`LoadOutcome::Fetch`] and the resulting view
//! states are fed in through [`UsersScreen::on_view_state`].

use tokio::sync::mpsc;

use crate::app::view_state::ViewState;
use crate::models::User;

/// Observable value slot.
///
/// Holds the last published value and forwards every publication, in order,
/// to each live subscriber.
#[derive(Debug)]
pub struct StateSlot<T> {
    current: Option<T>,
    subscribers: Vec<mpsc::UnboundedSender<T>>,
}

impl<T: Clone> StateSlot<T> {
    pub fn new() -> Self {
        StateSlot {
            current: None,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Replace the current value and notify subscribers
    pub fn set(&mut self, value: T) {
        self.subscribers.retain(|tx| tx.send(value.clone()).is_ok());
        self.current = Some(value);
    }

    /// Receive every value published from now on.
    ///
    /// For observers outside the app layer; `AppState` reads [`StateSlot::get`]
    /// after each change instead.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }
}

impl<T: Clone> Default for StateSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// What a call to [`UsersScreen::load`] requires from its caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The cache was published; nothing else to do
    Cached,
    /// Start a fetch for `quantity` users
    Fetch { quantity: usize },
}

/// State holder of the users list screen
#[derive(Debug, Default)]
pub struct UsersScreen {
    returning_from_detail: bool,
    cache: Vec<User>,
    state: StateSlot<ViewState<Vec<User>>>,
}

impl UsersScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load users for display.
    ///
    /// Once the user has opened a detail view, every load republishes the
    /// cache instead of fetching. The flag is never cleared.
    pub fn load(&mut self, quantity: usize) -> LoadOutcome {
        if self.returning_from_detail {
            tracing::debug!(cached = self.cache.len(), "serving users from cache");
            self.state.set(ViewState::Success(self.cache.clone()));
            return LoadOutcome::Cached;
        }

        LoadOutcome::Fetch { quantity }
    }

    /// Apply one state of a fetch started by [`UsersScreen::load`].
    ///
    /// A successful page is published as-is and appended to the cache.
    pub fn on_view_state(&mut self, state: ViewState<Vec<User>>) {
        if let ViewState::Success(users) = &state {
            self.cache.extend(users.iter().cloned());
        }
        self.state.set(state);
    }

    /// Record that the user navigated to a detail view
    pub fn mark_returning_from_detail(&mut self) {
        self.returning_from_detail = true;
    }

    pub fn is_returning_from_detail(&self) -> bool {
        self.returning_from_detail
    }

    pub fn cache(&self) -> &[User] {
        &self.cache
    }

    /// Last published view state
    pub fn current(&self) -> Option<&ViewState<Vec<User>>> {
        self.state.get()
    }

    /// See [`StateSlot::subscribe`]
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<ViewState<Vec<User>>> {
        self.state.subscribe()
    }
}
